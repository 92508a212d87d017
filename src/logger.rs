//! The repair log side-channel (`SPEC_FULL.md` §A.3).
//!
//! `Logger` is threaded through the parser alongside the output buffer. It
//! never influences what gets emitted; it only records, for diagnostic
//! purposes, which recognizer fired a repair and where. When logging is
//! disabled (the common case) every method is a no-op so the hot path pays
//! nothing beyond a branch.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    pub position: usize,
    pub message: &'static str,
    pub context: String,
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathElem {
    Index(usize),
    Key(String),
}

#[derive(Default)]
pub(crate) struct Logger {
    enabled: bool,
    track_path: bool,
    context_window: usize,
    entries: Vec<RepairLogEntry>,
    path: Vec<PathElem>,
}

impl Logger {
    pub(crate) fn new(enabled: bool, track_path: bool, context_window: usize) -> Self {
        Self {
            enabled,
            track_path,
            context_window,
            entries: Vec::new(),
            path: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, message: &'static str, position: usize, input: &[u16]) {
        if !self.enabled {
            return;
        }
        let context = context_snippet(input, position, self.context_window);
        let path = if self.track_path {
            Some(self.format_path())
        } else {
            None
        };
        self.entries.push(RepairLogEntry {
            position,
            message,
            context,
            path,
        });
    }

    fn format_path(&self) -> String {
        let mut s = String::from("$");
        for el in &self.path {
            match el {
                PathElem::Index(i) => {
                    s.push('[');
                    s.push_str(&i.to_string());
                    s.push(']');
                }
                PathElem::Key(k) => {
                    s.push_str("[\"");
                    for ch in k.chars() {
                        match ch {
                            '"' => s.push_str("\\\""),
                            '\\' => s.push_str("\\\\"),
                            _ => s.push(ch),
                        }
                    }
                    s.push_str("\"]");
                }
            }
        }
        s
    }

    pub(crate) fn push_key(&mut self, k: String) {
        if self.track_path {
            self.path.push(PathElem::Key(k));
        }
    }

    pub(crate) fn pop_key(&mut self) {
        if self.track_path {
            self.path.pop();
        }
    }

    pub(crate) fn push_index(&mut self, i: usize) {
        if self.track_path {
            self.path.push(PathElem::Index(i));
        }
    }

    pub(crate) fn pop_index(&mut self) {
        if self.track_path {
            self.path.pop();
        }
    }

    pub(crate) fn bump_last_index(&mut self) {
        if let Some(PathElem::Index(i)) = self.path.last_mut() {
            *i += 1;
        }
    }

    pub(crate) fn into_entries(self) -> Vec<RepairLogEntry> {
        self.entries
    }
}

fn context_snippet(input: &[u16], position: usize, window: usize) -> String {
    let start = position.saturating_sub(window);
    let end = (position + window).min(input.len());
    if start >= end {
        return String::new();
    }
    String::from_utf16_lossy(&input[start..end])
}
