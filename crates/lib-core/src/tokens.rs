use smol_str::SmolStr;

/// The classification the tokenizer assigns to a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    Word,
    String,
    Reserved,
    ReservedTopLevel,
    ReservedTopLevelNoIndent,
    ReservedNewline,
    Operator,
    OpenParen,
    CloseParen,
    LineComment,
    BlockComment,
    Placeholder,
    Number,
    Punctuation,
}

impl TokenKind {
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Reserved
                | TokenKind::ReservedTopLevel
                | TokenKind::ReservedTopLevelNoIndent
                | TokenKind::ReservedNewline
        )
    }
}

/// A single lexeme, carrying the whitespace run that preceded it in the
/// source. The lexeme text is preserved byte-exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: SmolStr,
    whitespace_before: SmolStr,
    offset: usize,
    key: Option<SmolStr>,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        raw: impl Into<SmolStr>,
        whitespace_before: impl Into<SmolStr>,
        offset: usize,
    ) -> Self {
        Self {
            kind,
            raw: raw.into(),
            whitespace_before: whitespace_before.into(),
            offset,
            key: None,
        }
    }

    pub fn with_key(mut self, key: Option<SmolStr>) -> Self {
        self.key = key;
        self
    }

    pub fn raw(&self) -> &str {
        self.raw.as_ref()
    }

    pub fn whitespace_before(&self) -> &str {
        self.whitespace_before.as_ref()
    }

    /// Byte offset of the lexeme in the source string.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The substitution key carried by placeholder tokens.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn is_type(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn raw_eq_ignore_case(&self, other: &str) -> bool {
        self.raw.eq_ignore_ascii_case(other)
    }
}
