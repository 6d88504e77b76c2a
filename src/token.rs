#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Eof,

    // Identifiers and literals
    Ident,
    NumLit,
    StringLit,
    BooleanLit,
    Const,

    // Keywords
    KwImage,
    KwPixel,
    KwInt,
    KwString,
    KwVoid,
    KwBoolean,
    KwWrite,
    KwHeight,
    KwWidth,
    KwIf,
    KwFi,
    KwDo,
    KwOd,
    KwRed,
    KwGreen,
    KwBlue,

    // Single-character tokens.
    Comma,
    Mod,
    Plus,
    Div,
    Question,
    Bang,
    Semi,
    Return,
    RSquare,
    LParen,
    RParen,

    // One or two character tokens.
    LSquare,
    Box,
    Minus,
    RArrow,
    Times,
    Exp,
    BitAnd,
    And,
    BitOr,
    Or,
    Lt,
    Le,
    BlockOpen,
    Gt,
    Ge,
    Assign,
    Eq,
    Colon,
    BlockClose,
}

impl Kind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Kind::KwImage
                | Kind::KwPixel
                | Kind::KwInt
                | Kind::KwString
                | Kind::KwVoid
                | Kind::KwBoolean
                | Kind::KwWrite
                | Kind::KwHeight
                | Kind::KwWidth
                | Kind::KwIf
                | Kind::KwFi
                | Kind::KwDo
                | Kind::KwOd
                | Kind::KwRed
                | Kind::KwGreen
                | Kind::KwBlue
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Kind::NumLit | Kind::StringLit | Kind::BooleanLit | Kind::Const
        )
    }

    /// Canonical category name, as used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Eof => "EOF",
            Kind::Ident => "IDENT",
            Kind::NumLit => "NUM_LIT",
            Kind::StringLit => "STRING_LIT",
            Kind::BooleanLit => "BOOLEAN_LIT",
            Kind::Const => "CONST",
            Kind::KwImage => "RES_image",
            Kind::KwPixel => "RES_pixel",
            Kind::KwInt => "RES_int",
            Kind::KwString => "RES_string",
            Kind::KwVoid => "RES_void",
            Kind::KwBoolean => "RES_boolean",
            Kind::KwWrite => "RES_write",
            Kind::KwHeight => "RES_height",
            Kind::KwWidth => "RES_width",
            Kind::KwIf => "RES_if",
            Kind::KwFi => "RES_fi",
            Kind::KwDo => "RES_do",
            Kind::KwOd => "RES_od",
            Kind::KwRed => "RES_red",
            Kind::KwGreen => "RES_green",
            Kind::KwBlue => "RES_blue",
            Kind::Comma => "COMMA",
            Kind::Mod => "MOD",
            Kind::Plus => "PLUS",
            Kind::Div => "DIV",
            Kind::Question => "QUESTION",
            Kind::Bang => "BANG",
            Kind::Semi => "SEMI",
            Kind::Return => "RETURN",
            Kind::RSquare => "RSQUARE",
            Kind::LParen => "LPAREN",
            Kind::RParen => "RPAREN",
            Kind::LSquare => "LSQUARE",
            Kind::Box => "BOX",
            Kind::Minus => "MINUS",
            Kind::RArrow => "RARROW",
            Kind::Times => "TIMES",
            Kind::Exp => "EXP",
            Kind::BitAnd => "BITAND",
            Kind::And => "AND",
            Kind::BitOr => "BITOR",
            Kind::Or => "OR",
            Kind::Lt => "LT",
            Kind::Le => "LE",
            Kind::BlockOpen => "BLOCK_OPEN",
            Kind::Gt => "GT",
            Kind::Ge => "GE",
            Kind::Assign => "ASSIGN",
            Kind::Eq => "EQ",
            Kind::Colon => "COLON",
            Kind::BlockClose => "BLOCK_CLOSE",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Line and column of a token's first character, both counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A classified span of the source. The lexeme is sliced out of the borrowed
/// source on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: Kind,
    pub offset: usize,
    pub len: usize,
    pub location: SourceLocation,
    source: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(
        kind: Kind,
        offset: usize,
        len: usize,
        location: SourceLocation,
        source: &'src str,
    ) -> Self {
        debug_assert!(offset + len <= source.len());
        Self {
            kind,
            offset,
            len,
            location,
            source,
        }
    }

    pub fn text(&self) -> &'src str {
        &self.source[self.span()]
    }

    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Value of a `NUM_LIT`. The scanner has already checked that it fits.
    pub fn int_value(&self) -> Option<i32> {
        match self.kind {
            Kind::NumLit => self.text().parse().ok(),
            _ => None,
        }
    }

    /// Contents of a `STRING_LIT` without the surrounding quotes.
    pub fn string_value(&self) -> Option<&'src str> {
        match self.kind {
            Kind::StringLit => self
                .text()
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"')),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}) at {}", self.kind, self.text(), self.location)
    }
}
