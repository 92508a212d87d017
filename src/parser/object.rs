use crate::error::{RepairError, RepairErrorKind};
use crate::parser::buffer::{insert_before_last_whitespace, strip_last_occurrence};
use crate::parser::cursor::Parser;

impl Parser<'_> {
    /// Object parser. Entered iff the current char is `{`.
    pub(crate) fn parse_object(&mut self) -> Result<bool, RepairError> {
        if self.current() != Some(b'{' as u16) {
            return Ok(false);
        }
        self.current_depth += 1;
        self.output.push(b'{' as u16);
        self.pos += 1;
        self.skip_ws_and_comments(true);

        if self.skip_char(b',' as u16) {
            self.skip_ws_and_comments(true);
        }

        let mut initial = true;
        while !self.eof() && self.current() != Some(b'}' as u16) {
            if !initial {
                let processed_comma = self.parse_char(b',' as u16);
                if !processed_comma {
                    insert_before_last_whitespace(&mut self.output, &[b',' as u16]);
                    self.logger.record("missing comma repaired", self.pos, &self.input);
                }
                self.skip_ws_and_comments(true);
            } else {
                initial = false;
            }

            self.skip_word_markers();
            self.skip_ellipsis();

            let key_start = self.pos;
            let processed_key =
                self.parse_string(false, None)? || self.parse_unquoted_string(true)?;
            if !processed_key {
                let at_close_or_eof = self.eof()
                    || matches!(
                        self.current(),
                        Some(c) if c == b'}' as u16 || c == b'{' as u16 || c == b']' as u16 || c == b'[' as u16
                    );
                if at_close_or_eof {
                    strip_last_occurrence(&mut self.output, b',' as u16);
                    self.logger
                        .record("trailing comma stripped", self.pos, &self.input);
                    break;
                } else {
                    return Err(self.err(RepairErrorKind::ObjectKeyExpected));
                }
            }
            self.logger.push_key(self.key_snippet(key_start, self.pos));

            self.skip_ws_and_comments(true);
            let processed_colon = self.parse_char(b':' as u16);
            let truncated = self.eof();
            if !processed_colon {
                let starts_value = self.current().is_some_and(crate::classify::is_start_of_value);
                if starts_value || truncated {
                    insert_before_last_whitespace(&mut self.output, &[b':' as u16]);
                    self.logger
                        .record("missing colon repaired", self.pos, &self.input);
                } else {
                    self.logger.pop_key();
                    return Err(self.err(RepairErrorKind::ColonExpected));
                }
            }

            let processed_value = self.parse_value()?;
            if !processed_value {
                if processed_colon || truncated {
                    self.push_ascii("null");
                    self.logger
                        .record("missing value repaired as null", self.pos, &self.input);
                } else {
                    self.logger.pop_key();
                    return Err(self.err(RepairErrorKind::ColonExpected));
                }
            }
            self.logger.pop_key();
        }

        if self.current() == Some(b'}' as u16) {
            self.output.push(b'}' as u16);
            self.pos += 1;
        } else {
            insert_before_last_whitespace(&mut self.output, &[b'}' as u16]);
            self.logger
                .record("missing closing brace repaired", self.pos, &self.input);
        }
        self.current_depth -= 1;
        Ok(true)
    }

    /// Best-effort raw snippet of the just-consumed key, used only for the
    /// repair log's JSON-path context; quote characters are trimmed but the
    /// text is otherwise unescaped verbatim input.
    fn key_snippet(&self, start: usize, end: usize) -> String {
        let mut raw = String::from_utf16_lossy(&self.input[start..end]);
        if raw.starts_with(['"', '\'', '`', '\u{201C}', '\u{2018}', '\u{2019}']) {
            raw.remove(0);
        }
        if raw.ends_with(['"', '\'', '`', '\u{201D}', '\u{2018}', '\u{2019}']) {
            raw.pop();
        }
        raw
    }
}
