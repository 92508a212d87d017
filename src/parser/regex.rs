use crate::parser::cursor::Parser;

impl Parser<'_> {
    /// Regex literal passthrough: a bare `/.../ ` span is
    /// wrapped verbatim in quotes with no internal escaping, matching the
    /// reference algorithm exactly (a malformed span here just produces
    /// invalid-looking JSON rather than being rejected).
    pub(crate) fn parse_regex(&mut self) -> bool {
        if self.current() != Some(b'/' as u16) {
            return false;
        }
        let start = self.pos;
        self.pos += 1;
        while let Some(c) = self.current() {
            if c == b'/' as u16 && self.input[self.pos - 1] != b'\\' as u16 {
                break;
            }
            self.pos += 1;
        }
        if !self.eof() {
            self.pos += 1;
        }
        self.output.push(b'"' as u16);
        self.output.extend_from_slice(&self.input[start..self.pos]);
        self.output.push(b'"' as u16);
        true
    }
}
