//! The UTF-8 <-> UTF-16 boundary. Everything
//! inside [`crate::parser`] operates on `u16` code units; this module is the
//! only place that crosses back to `String`/`&str` for the public API.

use crate::error::RepairError;
use crate::logger::RepairLogEntry;
use crate::options::Options;
use crate::unicode16;
use std::io::Write;

pub(crate) fn repair_to_string(input: &str, opts: &Options) -> Result<String, RepairError> {
    let outcome = crate::parser::run(unicode16::encode(input), opts, false)?;
    Ok(unicode16::decode(&outcome.output)?)
}

pub(crate) fn repair_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), RepairError> {
    let outcome = crate::parser::run(unicode16::encode(input), opts, false)?;
    let s = unicode16::decode(&outcome.output)?;
    writer
        .write_all(s.as_bytes())
        .map_err(|e| crate::error::RepairErrorKind::Parse(format!("write error: {e}")))
        .map_err(|kind| RepairError::new(kind, 0))
}

pub(crate) fn repair_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    let outcome = crate::parser::run(unicode16::encode(input), opts, true)?;
    let s = unicode16::decode(&outcome.output)?;
    Ok((s, outcome.log))
}
