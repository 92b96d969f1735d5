//! Cookie file reading and writing configuration.

/// Output format used when writing a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `name=value; Domain=...` display line per cookie.
    #[default]
    Lines,
    /// JSON array, one object per line.
    Json,
    /// Netscape cookie file, readable by curl, wget and [`parse`](crate::cookies::parser::parse).
    Netscape,
}

/// Options shared by the parser, serializer and persistence helpers.
#[derive(Debug, Clone, Default)]
pub struct CookieFileConfig {
    /// Skip malformed lines instead of failing the whole parse.
    pub lenient: bool,
    /// Treat `#HttpOnly_<domain>` lines as HTTP-only cookies rather than comments.
    pub http_only_prefix: bool,
    /// Format used by the `*_with` writers.
    pub output_format: OutputFormat,
}

impl CookieFileConfig {
    /// Create a new config with defaults (strict, no `#HttpOnly_` handling, display lines).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set lenient mode.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Enable recognition of the `#HttpOnly_` domain prefix.
    pub fn http_only_prefix(mut self, enabled: bool) -> Self {
        self.http_only_prefix = enabled;
        self
    }

    /// Set output format.
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}
