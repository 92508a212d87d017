use crate::unicode16::TranscodeError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairErrorKind {
    UnexpectedEnd,
    UnexpectedChar(char),
    ObjectKeyExpected,
    ColonExpected,
    InvalidUnicodeEscape,
    InvalidCharacter(char),
    MaxDepthExceeded,
    Parse(String),
}

/// A structured repair error: a message and the code-unit position where
/// recovery failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairError {
    pub kind: RepairErrorKind,
    pub position: usize,
}

impl RepairError {
    pub fn new(kind: RepairErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    #[cfg(feature = "serde")]
    pub fn from_serde(what: &str, err: serde_json::Error) -> Self {
        let pos = err.line(); // coarse fallback; serde_json only tracks line/column
        Self {
            kind: RepairErrorKind::Parse(format!("serde_json {what} error: {err}")),
            position: pos,
        }
    }
}

impl From<TranscodeError> for RepairError {
    fn from(e: TranscodeError) -> Self {
        Self::new(RepairErrorKind::Parse(e.to_string()), 0)
    }
}

impl fmt::Display for RepairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RepairErrorKind::UnexpectedEnd => {
                write!(f, "Unexpected end of json string at position {}", self.position)
            }
            RepairErrorKind::UnexpectedChar(c) => {
                write!(f, "Unexpected character {c} at position {}", self.position)
            }
            RepairErrorKind::ObjectKeyExpected => {
                write!(f, "Object key expected at position {}", self.position)
            }
            RepairErrorKind::ColonExpected => {
                write!(f, "Colon expected at position {}", self.position)
            }
            RepairErrorKind::InvalidUnicodeEscape => {
                write!(f, "Invalid unicode character at position {}", self.position)
            }
            RepairErrorKind::InvalidCharacter(c) => {
                write!(f, "Invalid character {c} at position {}", self.position)
            }
            RepairErrorKind::MaxDepthExceeded => {
                write!(f, "Maximum depth exceeded at position {}", self.position)
            }
            RepairErrorKind::Parse(msg) => write!(f, "{msg} at position {}", self.position),
        }
    }
}

impl std::error::Error for RepairError {}
