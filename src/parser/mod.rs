//! The recognizer set and top-level driver.
//!
//! Every recognizer is a method on [`Parser`] so they all share the same
//! cursor/output/depth state, mirroring the closures-over-shared-state shape
//! of the reference algorithm this crate's grammar was distilled from.

mod array;
mod buffer;
mod cursor;
mod keyword;
mod number;
mod object;
mod regex;
mod strings;
mod unquoted;
mod ws;

use crate::classify::{is_function_name_char, is_function_name_char_start, is_start_of_value};
use crate::error::{RepairError, RepairErrorKind};
use crate::logger::RepairLogEntry;
use crate::options::Options;
use buffer::{ends_with_comma_or_newline, insert_before_last_whitespace, strip_last_occurrence};
pub(crate) use cursor::Parser;

const OPEN_FENCES: [&str; 3] = ["```", "[```", "{```"];
const CLOSE_FENCES: [&str; 3] = ["```", "```]", "```}"];

pub(crate) struct ParseOutcome {
    pub(crate) output: Vec<u16>,
    pub(crate) log: Vec<RepairLogEntry>,
}

/// Run the full single-pass repair over `input`, returning the repaired
/// output buffer and the accumulated repair log.
pub(crate) fn run(input: Vec<u16>, opts: &Options, force_logging: bool) -> Result<ParseOutcome, RepairError> {
    let mut p = Parser::new(input, opts, force_logging);

    p.parse_markdown_code_block(&OPEN_FENCES);

    let processed = p.parse_value()?;
    if !processed {
        let pos = p.input.len();
        return Err(p.err_at(RepairErrorKind::UnexpectedEnd, pos));
    }

    p.parse_markdown_code_block(&CLOSE_FENCES);

    let processed_comma = p.parse_char(b',' as u16);
    if processed_comma {
        p.skip_ws_and_comments(true);
    }

    if p.current().is_some_and(is_start_of_value) && ends_with_comma_or_newline(&p.output) {
        if !processed_comma {
            insert_before_last_whitespace(&mut p.output, &[b',' as u16]);
        }
        p.parse_ndjson()?;
    } else if processed_comma {
        strip_last_occurrence(&mut p.output, b',' as u16);
    }

    while matches!(p.current(), Some(c) if c == b'}' as u16 || c == b']' as u16) {
        p.pos += 1;
        p.skip_ws_and_comments(true);
    }

    if p.eof() {
        return Ok(ParseOutcome {
            output: p.output,
            log: p.logger.into_entries(),
        });
    }

    let bad = char::from_u32(p.current().unwrap() as u32).unwrap_or('\u{FFFD}');
    Err(p.err(RepairErrorKind::UnexpectedChar(bad)))
}

impl Parser<'_> {
    /// Value dispatcher: try each recognizer in priority
    /// order, first match wins.
    pub(crate) fn parse_value(&mut self) -> Result<bool, RepairError> {
        if self.current_depth > self.opts.effective_max_depth() {
            return Err(self.err(RepairErrorKind::MaxDepthExceeded));
        }
        self.skip_ws_and_comments(true);
        let processed = self.parse_object()?
            || self.parse_array()?
            || self.parse_string(false, None)?
            || self.parse_number()
            || self.parse_keywords()
            || self.parse_unquoted_string(false)?
            || self.parse_regex();
        self.skip_ws_and_comments(true);
        Ok(processed)
    }

    /// Strip one Markdown code fence marker (optionally preceded/followed by
    /// a language tag or trailing bracket/brace), used at the very start and
    /// very end of the document. Ambient extension gated by
    /// `Options::fenced_code_blocks`.
    fn parse_markdown_code_block(&mut self, blocks: &[&str]) -> bool {
        if !self.opts.fenced_code_blocks {
            return false;
        }
        self.skip_ws_and_comments(true);
        for block in blocks {
            let units: Vec<u16> = block.encode_utf16().collect();
            if self.input[self.pos..].starts_with(&units[..]) {
                self.pos += units.len();
                if self.current().is_some_and(is_function_name_char_start) {
                    while self.current().is_some_and(is_function_name_char) {
                        self.pos += 1;
                    }
                }
                self.skip_ws_and_comments(true);
                return true;
            }
        }
        false
    }

    /// NDJSON wrapping: once the top-level driver decides
    /// the remaining text looks like more newline/comma-delimited values, this
    /// wraps everything parsed so far (and everything still to come) in a
    /// single array.
    fn parse_ndjson(&mut self) -> Result<(), RepairError> {
        let mut prefix: Vec<u16> = vec![b'[' as u16, b'\n' as u16];
        prefix.append(&mut self.output);
        self.output = prefix;

        let mut first = true;
        loop {
            self.skip_ws_and_comments(true);
            if self.eof() || !self.current().is_some_and(is_start_of_value) {
                break;
            }
            if !first {
                self.output.push(b',' as u16);
                self.output.push(b'\n' as u16);
            } else {
                first = false;
            }
            if !self.parse_value()? {
                break;
            }
        }
        self.output.push(b'\n' as u16);
        self.output.push(b']' as u16);
        Ok(())
    }
}
