use crate::classify::{is_special_whitespace, is_whitespace, is_whitespace_except_newline};
use crate::parser::cursor::Parser;

impl Parser<'_> {
    /// Whitespace/comment skipper: alternates between
    /// consuming a whitespace run and trying one comment, until neither
    /// advances. Whitespace is emitted (Unicode space variants normalized
    /// to a single ASCII space); comments are consumed but never emitted.
    pub(crate) fn skip_ws_and_comments(&mut self, skip_newline: bool) -> bool {
        let start = self.pos;
        self.parse_whitespace(skip_newline);
        loop {
            if self.parse_comment() {
                self.parse_whitespace(skip_newline);
            } else {
                break;
            }
        }
        self.pos > start
    }

    fn parse_whitespace(&mut self, skip_newline: bool) -> bool {
        let mut any = false;
        while let Some(c) = self.current() {
            let is_ws = if skip_newline {
                is_whitespace(c)
            } else {
                is_whitespace_except_newline(c)
            };
            if is_ws {
                self.output.push(c);
                self.pos += 1;
                any = true;
            } else if is_special_whitespace(c) {
                self.output.push(b' ' as u16);
                self.pos += 1;
                any = true;
            } else {
                break;
            }
        }
        any
    }

    fn parse_comment(&mut self) -> bool {
        let slash = b'/' as u16;
        let star = b'*' as u16;
        let start = self.pos;
        if self.current() == Some(slash) && self.at(self.pos + 1) == Some(star) {
            self.pos += 2;
            while !self.eof()
                && !(self.current() == Some(star) && self.at(self.pos + 1) == Some(slash))
            {
                self.pos += 1;
            }
            if self.pos + 1 < self.input.len() {
                self.pos += 2;
            } else {
                self.pos = self.input.len();
            }
            self.logger.record("comment stripped", start, &self.input);
            return true;
        }
        if self.current() == Some(slash) && self.at(self.pos + 1) == Some(slash) {
            while let Some(c) = self.current() {
                if c == b'\n' as u16 {
                    break;
                }
                self.pos += 1;
            }
            self.logger.record("comment stripped", start, &self.input);
            return true;
        }
        if self.opts.tolerate_hash_comments && self.current() == Some(b'#' as u16) {
            while let Some(c) = self.current() {
                if c == b'\n' as u16 {
                    break;
                }
                self.pos += 1;
            }
            self.logger.record("comment stripped", start, &self.input);
            return true;
        }
        false
    }

    /// Skip a caller-configured bare word marker (e.g. `COMMENT`) if the
    /// cursor currently sits right at its start. Ambient extension, not
    /// part of the core grammar (`Options::word_comment_markers`).
    pub(crate) fn skip_word_markers(&mut self) {
        if self.opts.word_comment_markers.is_empty() {
            return;
        }
        loop {
            let mut matched = false;
            for marker in &self.opts.word_comment_markers {
                let units: Vec<u16> = marker.encode_utf16().collect();
                if self.input[self.pos..].starts_with(&units[..]) {
                    self.pos += units.len();
                    matched = true;
                    break;
                }
            }
            if !matched {
                break;
            }
            self.skip_ws_and_comments(true);
        }
    }

    /// Ellipsis tolerance: `...` followed by an optional comma.
    pub(crate) fn skip_ellipsis(&mut self) -> bool {
        self.skip_ws_and_comments(true);
        let dot = b'.' as u16;
        if self.current() == Some(dot) && self.at(self.pos + 1) == Some(dot) && self.at(self.pos + 2) == Some(dot)
        {
            self.pos += 3;
            self.skip_ws_and_comments(true);
            self.skip_char(b',' as u16);
            true
        } else {
            false
        }
    }
}
