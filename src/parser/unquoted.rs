use crate::classify::{
    is_function_name_char, is_function_name_char_start, is_quote, is_unquoted_string_delimiter,
    is_url_char, is_url_start, is_whitespace,
};
use crate::error::RepairError;
use crate::parser::cursor::Parser;

impl Parser<'_> {
    /// Unquoted string / bare-symbol parser: the catch-all
    /// recognizer tried after every other value recognizer has failed.
    /// Handles function-call wrappers (`callback(...)`), `undefined` -> `null`,
    /// trailing URL extension after a colon, and quoting the bare symbol.
    pub(crate) fn parse_unquoted_string(&mut self, is_key: bool) -> Result<bool, RepairError> {
        let start = self.pos;

        if self.current().is_some_and(is_function_name_char_start) {
            while self.current().is_some_and(is_function_name_char) {
                self.pos += 1;
            }
            let mut j = self.pos;
            while self.at(j).is_some_and(is_whitespace) {
                j += 1;
            }
            if self.at(j) == Some(b'(' as u16) {
                self.pos = j + 1;
                self.parse_value()?;
                if self.current() == Some(b')' as u16) {
                    self.pos += 1;
                    if self.current() == Some(b';' as u16) {
                        self.pos += 1;
                    }
                }
                return Ok(true);
            }
        }

        while self
            .current()
            .is_some_and(|c| !is_unquoted_string_delimiter(c) && !is_quote(c) && (!is_key || c != b':' as u16))
        {
            self.pos += 1;
        }

        if self.pos > start && self.pos > 0 && self.input[self.pos - 1] == b':' as u16 && self.pos + 2 <= self.input.len()
        {
            let probe_end = (self.pos + 2).min(self.input.len());
            let probe = String::from_utf16_lossy(&self.input[start..probe_end]);
            if is_url_start(&probe) {
                while self.current().is_some_and(is_url_char) {
                    self.pos += 1;
                }
            }
        }

        if self.pos > start {
            while self.pos > start && is_whitespace(self.input[self.pos - 1]) {
                self.pos -= 1;
            }
            let symbol = &self.input[start..self.pos];
            let is_undefined = symbol.iter().copied().eq("undefined".encode_utf16());
            if is_undefined && self.opts.repair_undefined {
                self.push_ascii("null");
                self.logger
                    .record("replaced undefined with null", start, &self.input);
            } else {
                self.push_quoted_escaped(start, self.pos);
            }
            if self.current() == Some(b'"' as u16) {
                self.pos += 1;
            }
            return Ok(true);
        }
        Ok(false)
    }

    /// Quote `input[start..end]` as a JSON string, escaping only `"` and `\`
    /// (the reference algorithm does not re-escape control characters here),
    /// additionally `\u`-escaping non-ASCII units when `Options::ensure_ascii`.
    fn push_quoted_escaped(&mut self, start: usize, end: usize) {
        self.output.push(b'"' as u16);
        for idx in start..end {
            let c = self.input[idx];
            if c == b'"' as u16 || c == b'\\' as u16 {
                self.output.push(b'\\' as u16);
            }
            if self.opts.ensure_ascii && c > 0x7F {
                for b in format!("\\u{c:04X}").encode_utf16() {
                    self.output.push(b);
                }
            } else {
                self.output.push(c);
            }
        }
        self.output.push(b'"' as u16);
    }
}
