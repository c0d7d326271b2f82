//! Sequential output filenames: `{prefix}{j}.{ext}`.

/// Sanitizes a user-supplied base name so it stays a single path component.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Trims leading/trailing spaces and dots
pub fn sanitize_base_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    replaced
        .trim_matches(|c: char| c == ' ' || c == '\t' || c == '.')
        .to_string()
}

/// Naming scheme for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    prefix: String,
    extension: String,
}

impl OutputNaming {
    /// Builds the scheme from `--base-name`. The separator is appended only
    /// when the sanitized base name is non-empty.
    pub fn new(base_name: &str, separator: &str, extension: &str) -> Self {
        let base = sanitize_base_name(base_name);
        let prefix = if base.is_empty() {
            String::new()
        } else {
            format!("{}{}", base, separator)
        };
        Self {
            prefix,
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// File name for the `index`-th image (1-based).
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{}.{}", self.prefix, index, self.extension)
    }

    /// Human-readable range of names for `count` images.
    pub fn pattern(&self, count: usize) -> String {
        match count {
            0 => "no files".to_string(),
            1 => self.file_name(1),
            n => format!("{} .. {}", self.file_name(1), self.file_name(n)),
        }
    }
}
