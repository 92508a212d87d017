mod classify;
pub mod cli;
pub mod error;
mod logger;
pub mod options;
mod parser;
mod repair;
mod unicode16;

pub use error::{RepairError, RepairErrorKind};
pub use logger::RepairLogEntry;
pub use options::{LeadingZeroPolicy, Options};

use std::io::Write;

// ============================================================================
// Core API - Repair to String
// ============================================================================

/// Repair a potentially invalid JSON string into a valid JSON string.
///
/// This function focuses on common issues like unquoted keys/strings,
/// missing commas/colons, comments, and unclosed brackets/braces. Formatting
/// (whitespace, newlines) is preserved wherever the input was already
/// well-formed; only the minimal edits needed for valid JSON are made.
///
/// # Examples
///
/// ```
/// use jsonrepair::{repair_to_string, Options};
///
/// let broken = r#"{name: 'John', age: 30,}"#;
/// let repaired = repair_to_string(broken, &Options::default())?;
/// assert_eq!(repaired, r#"{"name": "John", "age": 30}"#);
/// # Ok::<(), jsonrepair::RepairError>(())
/// ```
pub fn repair_to_string(input: &str, opts: &Options) -> Result<String, RepairError> {
    repair::repair_to_string(input, opts)
}

/// Alias for [`repair_to_string`] - repairs broken JSON and returns a valid JSON string.
///
/// This naming is more intuitive and matches the Python `json_repair` library.
///
/// # Examples
///
/// ```
/// use jsonrepair::{repair_json, Options};
///
/// let broken = r#"{name: 'John', age: 30,}"#;
/// let repaired = repair_json(broken, &Options::default())?;
/// assert_eq!(repaired, r#"{"name": "John", "age": 30}"#);
/// # Ok::<(), jsonrepair::RepairError>(())
/// ```
pub fn repair_json(input: &str, opts: &Options) -> Result<String, RepairError> {
    repair_to_string(input, opts)
}

// ============================================================================
// Writer-based API
// ============================================================================

/// Repair a potentially invalid JSON string and write the result into an `io::Write`.
///
/// This avoids an extra copy of the final string when the caller intends to stream to a sink.
///
/// # Examples
///
/// ```
/// use jsonrepair::{repair_to_writer, Options};
///
/// let broken = r#"{name: 'John'}"#;
/// let mut output = Vec::new();
/// repair_to_writer(broken, &Options::default(), &mut output)?;
/// assert_eq!(output, br#"{"name": "John"}"#);
/// # Ok::<(), jsonrepair::RepairError>(())
/// ```
pub fn repair_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), RepairError> {
    repair::repair_to_writer(input, opts, writer)
}

// ============================================================================
// Parse to Value API (requires serde feature)
// ============================================================================

#[cfg(feature = "serde")]
/// Repair and then parse into `serde_json::Value`.
///
/// This is a convenience function that combines repair and parsing.
///
/// # Examples
///
/// ```
/// use jsonrepair::{repair_to_value, Options};
///
/// let broken = r#"{name: 'John', age: 30}"#;
/// let value = repair_to_value(broken, &Options::default())?;
/// assert_eq!(value["name"], "John");
/// assert_eq!(value["age"], 30);
/// # Ok::<(), jsonrepair::RepairError>(())
/// ```
pub fn repair_to_value(input: &str, opts: &Options) -> Result<serde_json::Value, RepairError> {
    let s = repair_to_string(input, opts)?;
    let v = serde_json::from_str(&s).map_err(|e| RepairError::from_serde("parse", e))?;
    Ok(v)
}

#[cfg(feature = "serde")]
/// Alias for [`repair_to_value`] - repairs broken JSON and parses it into a `serde_json::Value`.
///
/// This naming matches the Python `json.loads()` and `json_repair.loads()` convention.
///
/// # Examples
///
/// ```
/// use jsonrepair::{loads, Options};
///
/// let broken = r#"{name: 'John', age: 30}"#;
/// let value = loads(broken, &Options::default())?;
/// assert_eq!(value["name"], "John");
/// assert_eq!(value["age"], 30);
/// # Ok::<(), jsonrepair::RepairError>(())
/// ```
pub fn loads(input: &str, opts: &Options) -> Result<serde_json::Value, RepairError> {
    repair_to_value(input, opts)
}

// ============================================================================
// File and Reader API (requires serde feature)
// ============================================================================

#[cfg(feature = "serde")]
/// Repair and parse JSON from a reader (e.g., file, network stream).
///
/// This is equivalent to reading all content from the reader and calling [`loads`].
///
/// # Examples
///
/// ```no_run
/// use jsonrepair::{load, Options};
/// use std::fs::File;
///
/// let file = File::open("broken.json")?;
/// let value = load(file, &Options::default())?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load<R: std::io::Read>(
    mut reader: R,
    opts: &Options,
) -> Result<serde_json::Value, RepairError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| RepairError::from_serde("read", serde_json::Error::io(e)))?;
    loads(&content, opts)
}

#[cfg(feature = "serde")]
/// Repair and parse JSON from a file path.
///
/// This is a convenience wrapper around [`load`] that opens the file for you.
///
/// # Examples
///
/// ```no_run
/// use jsonrepair::{from_file, Options};
///
/// let value = from_file("broken.json", &Options::default())?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn from_file<P: AsRef<std::path::Path>>(
    path: P,
    opts: &Options,
) -> Result<serde_json::Value, RepairError> {
    let file = std::fs::File::open(path)
        .map_err(|e| RepairError::from_serde("open file", serde_json::Error::io(e)))?;
    load(file, opts)
}

// ============================================================================
// Logging API
// ============================================================================

/// Repair a potentially invalid JSON string and return both the string result and a repair log.
///
/// This is useful for debugging or understanding what repairs were made. Logging
/// is force-enabled for the duration of this one call regardless of `opts.logging`.
///
/// # Examples
///
/// ```
/// use jsonrepair::{repair_to_string_with_log, Options};
///
/// let mut opts = Options::default();
/// opts.log_context_window = 12;
///
/// let (repaired, log) = repair_to_string_with_log("[1, 2 /*c*/, 3]", &opts)?;
/// assert_eq!(repaired, "[1, 2 , 3]");
/// assert!(!log.is_empty());
/// # Ok::<(), jsonrepair::RepairError>(())
/// ```
pub fn repair_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    repair::repair_to_string_with_log(input, opts)
}

#[cfg(test)]
mod tests;
