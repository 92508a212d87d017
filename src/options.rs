#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum LeadingZeroPolicy {
    /// Keep numbers with leading zeros as-is (may be non-strict JSON, but pragmatic).
    KeepAsNumber,
    /// Quote numbers with leading zeros as strings, like "007".
    QuoteAsString,
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Depth cap for nested objects/arrays. `0` resets to 100, mirroring the
    /// reference algorithm's "maxDepth <= 0 -> 100" rule.
    pub max_depth: usize,
    /// Treat `#` as a line comment (in addition to `//` and `/* */`).
    pub tolerate_hash_comments: bool,
    /// Convert the JavaScript value `undefined` into `null` when encountered as a symbol.
    pub repair_undefined: bool,
    /// Policy for numbers with leading zeros like 012.
    pub leading_zero_policy: LeadingZeroPolicy,
    /// Strip a Markdown fenced code block like ```json ... ``` around the JSON.
    pub fenced_code_blocks: bool,
    /// Enable repair logging. Use `repair_to_string_with_log` to retrieve logs.
    pub logging: bool,
    /// Accept and normalize Python-style keywords True/False/None.
    pub allow_python_keywords: bool,
    /// When true, escape non-ASCII characters in strings as `\uXXXX`.
    pub ensure_ascii: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many code units are captured on both sides of the position.
    pub log_context_window: usize,
    /// When enabled, attach a JSON path to log entries (object keys, array indices).
    pub log_json_path: bool,
    /// Optional bare word markers (e.g. "COMMENT") stripped when found in safe
    /// positions, such as immediately before an object key. Empty by default.
    pub word_comment_markers: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: 100,
            tolerate_hash_comments: false,
            repair_undefined: true,
            leading_zero_policy: LeadingZeroPolicy::QuoteAsString,
            fenced_code_blocks: true,
            logging: false,
            allow_python_keywords: true,
            ensure_ascii: false,
            log_context_window: 10,
            log_json_path: false,
            word_comment_markers: Vec::new(),
        }
    }
}

impl Options {
    /// The effective depth cap, after applying the "`0` resets to 100" rule.
    pub(crate) fn effective_max_depth(&self) -> usize {
        if self.max_depth == 0 {
            100
        } else {
            self.max_depth
        }
    }
}
