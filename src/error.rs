use {
    crate::token::SourceLocation,
    miette::{Diagnostic, SourceSpan},
    thiserror::Error,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("Unexpected character {0:?}")]
    UnexpectedCharacter(char),
    #[error("Expected `#` after `#` to start a comment")]
    DanglingHash,
    #[error("Illegal character {0:?} in string literal")]
    IllegalStringCharacter(char),
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Integer literal {0} does not fit in 32 bits")]
    IntegerOverflow(String),
}

/// Fatal scanning failure. Scanning of the current input cannot continue.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
#[diagnostic(code(imagelex::lex))]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
    #[label("here")]
    pub span: SourceSpan,
}

impl LexError {
    pub fn new(
        kind: LexErrorKind,
        location: SourceLocation,
        span: impl Into<SourceSpan>,
    ) -> Self {
        Self {
            kind,
            location,
            span: span.into(),
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
