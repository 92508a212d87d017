use crate::parser::cursor::Parser;

impl Parser<'_> {
    /// Keyword parser: `true`/`false`/`null`, plus the
    /// Python-style spellings `True`/`False`/`None` when
    /// `Options::allow_python_keywords` is set, normalized to their JSON forms.
    pub(crate) fn parse_keywords(&mut self) -> bool {
        self.parse_keyword("true", "true")
            || self.parse_keyword("false", "false")
            || self.parse_keyword("null", "null")
            || (self.opts.allow_python_keywords
                && (self.parse_python_keyword("True", "true")
                    || self.parse_python_keyword("False", "false")
                    || self.parse_python_keyword("None", "null")))
    }

    fn parse_keyword(&mut self, name: &str, value: &str) -> bool {
        let units: Vec<u16> = name.encode_utf16().collect();
        if self.input[self.pos..].starts_with(&units[..]) {
            self.push_ascii(value);
            self.pos += units.len();
            true
        } else {
            false
        }
    }

    fn parse_python_keyword(&mut self, name: &str, value: &str) -> bool {
        let start = self.pos;
        if self.parse_keyword(name, value) {
            self.logger
                .record("normalized python keyword", start, &self.input);
            true
        } else {
            false
        }
    }
}
