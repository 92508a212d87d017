use crate::classify::{
    is_delimiter, is_digit, is_double_quote, is_quote, is_single_quote, is_unquoted_string_delimiter,
    is_url_char, is_url_start, is_valid_string_character,
};
use crate::error::{RepairError, RepairErrorKind};
use crate::parser::buffer::{insert_before_last_whitespace, remove_at_index, strip_last_occurrence};
use crate::parser::cursor::Parser;

/// Code units recognized after a backslash as a two-character JSON escape:
/// the escaped meaning doesn't matter here, only whether
/// the pair is copied through verbatim.
fn is_short_escape(c: u16) -> bool {
    matches!(
        c,
        0x22 | 0x5C | 0x2F | 0x62 | 0x66 | 0x6E | 0x72 | 0x74 // " \ / b f n r t
    )
}

fn control_escape(c: u16) -> Option<&'static [u16]> {
    match c {
        0x08 => Some(&[0x5C, b'b' as u16]),
        0x0C => Some(&[0x5C, b'f' as u16]),
        0x0A => Some(&[0x5C, b'n' as u16]),
        0x0D => Some(&[0x5C, b'r' as u16]),
        0x09 => Some(&[0x5C, b't' as u16]),
        _ => None,
    }
}

impl Parser<'_> {
    /// String parser: the hardest recognizer in the
    /// grammar. `stop_at_delimiter` switches on the "treat any delimiter as
    /// an implicit closing quote" fallback mode; `stop_at_index`, when set,
    /// forces a synthetic close at a specific position a caller already
    /// picked as more plausible than the literal next matching quote.
    pub(crate) fn parse_string(
        &mut self,
        stop_at_delimiter: bool,
        stop_at_index: Option<usize>,
    ) -> Result<bool, RepairError> {
        let start = self.pos;
        let skip_escape_chars = self.current() == Some(b'\\' as u16);
        if skip_escape_chars {
            self.pos += 1;
        }

        let Some(open) = self.current().filter(|&c| is_quote(c)) else {
            self.pos = start;
            return Ok(false);
        };
        let opening_is_double = is_double_quote(open);
        let is_end_quote = move |c: u16| -> bool {
            if opening_is_double {
                is_double_quote(c)
            } else {
                is_single_quote(c)
            }
        };

        let i_before = self.pos;
        let o_before = self.output.len();
        let mut str_buf: Vec<u16> = vec![b'"' as u16];
        self.pos += 1;

        loop {
            if self.eof() {
                let i_prev = self.prev_non_whitespace_index(self.pos.saturating_sub(1));
                if !stop_at_delimiter && i_prev < self.input.len() && is_delimiter(self.input[i_prev]) {
                    self.pos = i_before;
                    self.output.truncate(o_before);
                    return self.parse_string(true, None);
                }
                insert_before_last_whitespace(&mut str_buf, &[b'"' as u16]);
                self.output.extend_from_slice(&str_buf);
                return Ok(true);
            }

            if Some(self.pos) == stop_at_index {
                insert_before_last_whitespace(&mut str_buf, &[b'"' as u16]);
                self.output.extend_from_slice(&str_buf);
                return Ok(true);
            }

            let c = self.current().unwrap();

            if is_end_quote(c) {
                let i_quote = self.pos;
                let o_quote = str_buf.len();
                str_buf.push(b'"' as u16);
                self.pos += 1;
                self.output.extend_from_slice(&str_buf);

                self.skip_ws_and_comments(false);

                let terminates = stop_at_delimiter
                    || self.eof()
                    || self
                        .current()
                        .is_some_and(|n| is_delimiter(n) || is_quote(n) || is_digit(n));
                if terminates {
                    self.parse_concatenated_string()?;
                    return Ok(true);
                }

                let i_prevchar = self.prev_non_whitespace_index(i_quote.saturating_sub(1));
                let prevchar = self.at(i_prevchar);

                if prevchar == Some(b',' as u16) {
                    self.pos = i_before;
                    self.output.truncate(o_before);
                    return self.parse_string(false, Some(i_prevchar));
                }
                if prevchar.is_some_and(is_delimiter) {
                    self.pos = i_before;
                    self.output.truncate(o_before);
                    return self.parse_string(true, None);
                }

                // Not a real closing quote after all: an unescaped quote
                // embedded in the string. Roll the speculative flush back,
                // retroactively escape it in the buffer, and keep going.
                self.output.truncate(o_before);
                self.pos = i_quote + 1;
                str_buf.insert(o_quote, b'\\' as u16);
                continue;
            }

            if stop_at_delimiter && is_unquoted_string_delimiter(c) {
                if self.pos > 0 && self.input[self.pos - 1] == b':' as u16 {
                    let probe_end = (i_before + 1 + 2).min(self.input.len());
                    let probe_start = (i_before + 1).min(probe_end);
                    let probe = String::from_utf16_lossy(&self.input[probe_start..probe_end]);
                    if is_url_start(&probe) {
                        while self.current().is_some_and(is_url_char) {
                            str_buf.push(self.current().unwrap());
                            self.pos += 1;
                        }
                    }
                }
                insert_before_last_whitespace(&mut str_buf, &[b'"' as u16]);
                self.output.extend_from_slice(&str_buf);
                self.parse_concatenated_string()?;
                return Ok(true);
            }

            if c == b'\\' as u16 {
                let Some(next) = self.at(self.pos + 1) else {
                    self.pos += 1;
                    continue;
                };
                if is_short_escape(next) {
                    str_buf.push(c);
                    str_buf.push(next);
                    self.pos += 2;
                } else if next == b'u' as u16 {
                    let mut j = 2usize;
                    while j < 6 && self.at(self.pos + j).is_some_and(crate::classify::is_hex) {
                        j += 1;
                    }
                    if j == 6 {
                        for k in 0..6 {
                            str_buf.push(self.at(self.pos + k).unwrap());
                        }
                        self.pos += 6;
                    } else if self.pos + j >= self.input.len() {
                        self.pos = self.input.len();
                    } else {
                        return Err(self.err(RepairErrorKind::InvalidUnicodeEscape));
                    }
                } else {
                    str_buf.push(next);
                    self.pos += 2;
                }
                continue;
            }

            if c == b'"' as u16 && (self.pos == 0 || self.input[self.pos - 1] != b'\\' as u16) {
                str_buf.push(b'\\' as u16);
                str_buf.push(b'"' as u16);
                self.pos += 1;
            } else if let Some(escaped) = control_escape(c) {
                str_buf.extend_from_slice(escaped);
                self.pos += 1;
            } else {
                if !is_valid_string_character(c) {
                    return Err(self.err(RepairErrorKind::InvalidCharacter(
                        char::from_u32(c as u32).unwrap_or('\u{FFFD}'),
                    )));
                }
                str_buf.push(c);
                self.pos += 1;
            }

            if self.pos == i_before {
                self.pos += 1;
            }
            if skip_escape_chars {
                self.skip_char(b'\\' as u16);
            }
        }
    }

    /// String concatenation: `"a" + "b"` style joins. Splices
    /// each continuation string's opening quote into the previous string's
    /// closing quote rather than emitting two adjacent JSON strings.
    pub(crate) fn parse_concatenated_string(&mut self) -> Result<bool, RepairError> {
        let mut processed = false;
        self.skip_ws_and_comments(true);
        while self.current() == Some(b'+' as u16) {
            processed = true;
            self.pos += 1;
            self.skip_ws_and_comments(true);

            strip_last_occurrence(&mut self.output, b'"' as u16);
            let start = self.output.len();
            let parsed = self.parse_string(false, None)?;
            if parsed {
                remove_at_index(&mut self.output, start, 1);
            } else {
                insert_before_last_whitespace(&mut self.output, &[b'"' as u16]);
            }
        }
        Ok(processed)
    }
}
