use crate::error::RepairError;
use crate::parser::buffer::{insert_before_last_whitespace, strip_last_occurrence};
use crate::parser::cursor::Parser;

impl Parser<'_> {
    /// Array parser, symmetric to the object parser but
    /// without key/colon machinery.
    pub(crate) fn parse_array(&mut self) -> Result<bool, RepairError> {
        if self.current() != Some(b'[' as u16) {
            return Ok(false);
        }
        self.current_depth += 1;
        self.output.push(b'[' as u16);
        self.pos += 1;
        self.skip_ws_and_comments(true);

        if self.skip_char(b',' as u16) {
            self.skip_ws_and_comments(true);
        }

        let mut initial = true;
        self.logger.push_index(0);
        while !self.eof() && self.current() != Some(b']' as u16) {
            if !initial {
                let processed_comma = self.parse_char(b',' as u16);
                if !processed_comma {
                    insert_before_last_whitespace(&mut self.output, &[b',' as u16]);
                    self.logger.record("missing comma repaired", self.pos, &self.input);
                }
                self.logger.bump_last_index();
            } else {
                initial = false;
            }

            self.skip_ellipsis();

            let processed_value = self.parse_value()?;
            if !processed_value {
                strip_last_occurrence(&mut self.output, b',' as u16);
                self.logger
                    .record("trailing comma stripped", self.pos, &self.input);
                break;
            }
        }
        self.logger.pop_index();

        if self.current() == Some(b']' as u16) {
            self.output.push(b']' as u16);
            self.pos += 1;
        } else {
            insert_before_last_whitespace(&mut self.output, &[b']' as u16]);
            self.logger
                .record("missing closing bracket repaired", self.pos, &self.input);
        }
        self.current_depth -= 1;
        Ok(true)
    }
}
