//! Tokenization of `{{...}}` placeholder tokens

/// Token classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// `{{key}}`
    Placeholder { key: String },

    /// `{{#if key}}`
    IfStart { key: String },

    /// `{{/if}}`
    IfEnd,
}

/// A single `{{...}}` token with position metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    /// Token classification
    pub(crate) kind: TokenKind,
    /// Absolute byte position of `{{` in the scanned text
    pub(crate) start: usize,
    /// Total length in bytes including `{{` and `}}`
    pub(crate) length: usize,
    /// Line number where the token starts (for validation messages)
    pub(crate) line: usize,
}

/// Tokenization state machine
///
/// Forward-only: each byte is processed exactly once, so scanning is O(n)
/// even for brace-heavy malformed input.
///
/// ```text
/// Normal ──{──> SeenLBrace ──{──> InToken ──}──> SeenRBrace ──}──> [yield] → Normal
///   │              │ (not {)         │ (not })        │ (not })
///   └──────────────┴─────────────────┴────────────────┴──> back to Normal/InToken
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Scanning regular text
    Normal,

    /// Seen first `{`, checking for a second
    SeenLBrace { pos: usize },

    /// Inside `{{...}}`, scanning until `}}`
    InToken { start: usize, content_start: usize },

    /// Seen first `}` inside a token, checking for a second
    SeenRBrace {
        start: usize,
        content_start: usize,
        rbrace_pos: usize,
    },
}

/// Iterator over `{{...}}` tokens in a template string
///
/// A `{{` with no closing `}}` yields no token; [`TokenStream::in_open_token`]
/// reports whether the stream ended inside one.
pub(crate) struct TokenStream<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: ScanState,
    line: usize,
}

impl<'a> TokenStream<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            state: ScanState::Normal,
            line: 1,
        }
    }

    /// True if the stream is exhausted while still inside an unclosed `{{`
    pub(crate) fn in_open_token(&self) -> bool {
        self.pos >= self.bytes.len()
            && matches!(
                self.state,
                ScanState::InToken { .. } | ScanState::SeenRBrace { .. }
            )
    }

    /// Current line number of the scan position
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Classify the text between `{{` and `}}`
    fn classify_content(content: &str) -> TokenKind {
        let trimmed = content.trim();

        if let Some(rest) = trimmed.strip_prefix("#if ") {
            TokenKind::IfStart {
                key: rest.trim().to_string(),
            }
        } else if trimmed == "/if" {
            TokenKind::IfEnd
        } else {
            TokenKind::Placeholder {
                key: trimmed.to_string(),
            }
        }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if self.pos >= self.bytes.len() {
                return None;
            }

            let byte = self.bytes[self.pos];

            match self.state {
                ScanState::Normal => {
                    if byte == b'{' {
                        self.state = ScanState::SeenLBrace { pos: self.pos };
                    } else if byte == b'\n' {
                        self.line += 1;
                    }
                    self.pos += 1;
                }

                ScanState::SeenLBrace { pos: lbrace_pos } => {
                    if byte == b'{' {
                        self.state = ScanState::InToken {
                            start: lbrace_pos,
                            content_start: self.pos + 1,
                        };
                        self.pos += 1;
                    } else {
                        // Single { is literal text; reprocess this byte in Normal
                        self.state = ScanState::Normal;
                    }
                }

                ScanState::InToken {
                    start,
                    content_start,
                } => {
                    if byte == b'}' {
                        self.state = ScanState::SeenRBrace {
                            start,
                            content_start,
                            rbrace_pos: self.pos,
                        };
                        self.pos += 1;
                    } else {
                        if byte == b'\n' {
                            self.line += 1;
                        }
                        self.pos += 1;
                    }
                }

                ScanState::SeenRBrace {
                    start,
                    content_start,
                    rbrace_pos,
                } => {
                    if byte == b'}' {
                        let content =
                            std::str::from_utf8(&self.bytes[content_start..rbrace_pos])
                                .unwrap_or("");

                        let token = Token {
                            kind: Self::classify_content(content),
                            start,
                            length: self.pos + 1 - start,
                            line: self.line,
                        };

                        self.state = ScanState::Normal;
                        self.pos += 1;

                        return Some(token);
                    } else {
                        // Single } belongs to the token content
                        self.state = ScanState::InToken {
                            start,
                            content_start,
                        };
                    }
                }
            }
        }
    }
}
