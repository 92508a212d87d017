use crate::classify::{is_delimiter, is_digit, is_whitespace};
use crate::options::LeadingZeroPolicy;
use crate::parser::cursor::Parser;

impl Parser<'_> {
    /// Number parser: a single greedy scan over the
    /// `-?digits(.digits)?([eE][+-]?digits)?` grammar, with truncation at
    /// each optional section repaired by appending a synthetic `0`.
    pub(crate) fn parse_number(&mut self) -> bool {
        let start = self.pos;

        if self.current() == Some(b'-' as u16) {
            self.pos += 1;
            if !self.current().is_some_and(|c| is_digit(c) || c == b'.' as u16) {
                self.push_numeric_token(start, self.pos, true);
                return true;
            }
        }

        while self.current().is_some_and(is_digit) {
            self.pos += 1;
        }

        if self.current() == Some(b'.' as u16) {
            self.pos += 1;
            if !self.current().is_some_and(is_digit) {
                self.push_numeric_token(start, self.pos, true);
                return true;
            }
            while self.current().is_some_and(is_digit) {
                self.pos += 1;
            }
        }

        if matches!(self.current(), Some(c) if c == b'e' as u16 || c == b'E' as u16) {
            self.pos += 1;
            if matches!(self.current(), Some(c) if c == b'+' as u16 || c == b'-' as u16) {
                self.pos += 1;
            }
            if !self.current().is_some_and(is_digit) {
                self.push_numeric_token(start, self.pos, true);
                return true;
            }
            while self.current().is_some_and(is_digit) {
                self.pos += 1;
            }
        }

        if self.current().is_none_or(|c| is_delimiter(c) || is_whitespace(c)) {
            if self.pos > start {
                self.push_numeric_token(start, self.pos, false);
                return true;
            }
        } else {
            self.pos = start;
            return false;
        }
        false
    }

    /// Emit `input[start..end]`, appending a synthetic `0` when `truncated`,
    /// and quoting as a string when a leading zero makes it invalid JSON
    /// (per `Options::leading_zero_policy`).
    fn push_numeric_token(&mut self, start: usize, end: usize, truncated: bool) {
        if truncated {
            self.output.extend_from_slice(&self.input[start..end]);
            self.output.push(b'0' as u16);
            return;
        }
        let num = &self.input[start..end];
        let has_invalid_leading_zero = num.len() > 1
            && num[0] == b'0' as u16
            && is_digit(num[1]);

        if has_invalid_leading_zero && self.opts.leading_zero_policy == LeadingZeroPolicy::QuoteAsString {
            self.output.push(b'"' as u16);
            self.output.extend_from_slice(num);
            self.output.push(b'"' as u16);
        } else {
            self.output.extend_from_slice(num);
        }
    }
}
