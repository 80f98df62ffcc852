use thiserror::Error;

/// The tokenizer made no progress at a byte offset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("tokenizer stuck at byte offset {offset}")]
pub struct TokenizeError {
    pub offset: usize,
}

/// A placeholder token had no matching entry in the configured parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("missing named parameter '{0}'")]
    MissingKey(String),
    #[error("missing positional parameter at index {0}")]
    MissingIndex(usize),
}

/// Everything `format` can fail with, surfaced immediately and fatally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unsupported dialect '{0}'")]
    UnsupportedDialect(String),
    #[error("newline must not be a negative number, got {0}")]
    InvalidNewline(i64),
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Param(#[from] ParamError),
}
