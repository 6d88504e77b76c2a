use {
    crate::{
        cursor::Cursor,
        error::{LexError, LexErrorKind},
        keywords,
        token::{Kind, SourceLocation, Token},
    },
    culpa::{throw, throws},
    std::iter::FusedIterator,
};

/// Where the scanner is inside the token being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    HaveLSquare,
    HaveHash,
    Comment,
    HaveAnd,
    HaveLt,
    HaveEq,
    HaveMinus,
    HaveGt,
    HaveColon,
    HaveStar,
    HaveOr,
    InIdent,
    InNum,
    InString,
}

trait IsIdentifier {
    fn is_identifier_start(&self) -> bool;
    fn is_identifier(&self) -> bool;
}

impl IsIdentifier for u8 {
    fn is_identifier_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == b'_'
    }

    fn is_identifier(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == b'_'
    }
}

/// Pull-based scanner: each call to [`Scanner::next_token`] runs the state
/// machine from `Start` until exactly one token is complete.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    start_offset: usize,
    start_location: SourceLocation,
    /// Set once the `Iterator` impl has yielded `EOF` or an error.
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            start_offset: 0,
            start_location: SourceLocation::new(1, 1),
            finished: false,
        }
    }

    /// Scan the next token. Once the input is exhausted this keeps returning
    /// an empty `EOF` token at the end position.
    #[throws(LexError)]
    pub fn next_token(&mut self) -> Token<'src> {
        let mut state = State::Start;
        self.mark_start();
        loop {
            let location = self.cursor.location();
            let Some(c) = self.cursor.advance() else {
                return self.finish(state)?;
            };

            state = match state {
                State::Start => match c {
                    b' ' | b'\t' | b'\r' | b'\n' => {
                        self.mark_start();
                        State::Start
                    }
                    b',' => return self.make_token(Kind::Comma),
                    b'%' => return self.make_token(Kind::Mod),
                    b'+' => return self.make_token(Kind::Plus),
                    b']' => return self.make_token(Kind::RSquare),
                    b'/' => return self.make_token(Kind::Div),
                    b'?' => return self.make_token(Kind::Question),
                    b'!' => return self.make_token(Kind::Bang),
                    b';' => return self.make_token(Kind::Semi),
                    b')' => return self.make_token(Kind::RParen),
                    b'(' => return self.make_token(Kind::LParen),
                    b'^' => return self.make_token(Kind::Return),
                    b'[' => State::HaveLSquare,
                    b'&' => State::HaveAnd,
                    b'<' => State::HaveLt,
                    b'>' => State::HaveGt,
                    b'=' => State::HaveEq,
                    b'-' => State::HaveMinus,
                    b':' => State::HaveColon,
                    b'*' => State::HaveStar,
                    b'|' => State::HaveOr,
                    b'#' => State::HaveHash,
                    b'"' => State::InString,
                    // A leading zero is always a literal of its own.
                    b'0' => return self.make_token(Kind::NumLit),
                    b'1'..=b'9' => State::InNum,
                    c if c.is_identifier_start() => State::InIdent,
                    _ => {
                        let c = self.offending_char();
                        throw!(LexError::new(
                            LexErrorKind::UnexpectedCharacter(c),
                            location,
                            (self.cursor.offset(), c.len_utf8()),
                        ));
                    }
                },
                State::HaveLSquare => {
                    return self.one_or_two(c, &[(b']', Kind::Box)], Kind::LSquare)
                }
                State::HaveHash => {
                    if c != b'#' {
                        throw!(self.dangling_hash());
                    }
                    State::Comment
                }
                State::Comment => {
                    if c == b'\n' {
                        self.mark_start();
                        State::Start
                    } else {
                        State::Comment
                    }
                }
                State::HaveAnd => return self.one_or_two(c, &[(b'&', Kind::And)], Kind::BitAnd),
                State::HaveOr => return self.one_or_two(c, &[(b'|', Kind::Or)], Kind::BitOr),
                State::HaveLt => {
                    return self.one_or_two(
                        c,
                        &[(b'=', Kind::Le), (b':', Kind::BlockOpen)],
                        Kind::Lt,
                    )
                }
                State::HaveGt => return self.one_or_two(c, &[(b'=', Kind::Ge)], Kind::Gt),
                State::HaveEq => return self.one_or_two(c, &[(b'=', Kind::Eq)], Kind::Assign),
                State::HaveMinus => {
                    return self.one_or_two(c, &[(b'>', Kind::RArrow)], Kind::Minus)
                }
                State::HaveColon => {
                    return self.one_or_two(c, &[(b'>', Kind::BlockClose)], Kind::Colon)
                }
                State::HaveStar => return self.one_or_two(c, &[(b'*', Kind::Exp)], Kind::Times),
                State::InIdent => {
                    if !c.is_identifier() {
                        self.cursor.back_up();
                        return self.identifier();
                    }
                    State::InIdent
                }
                State::InNum => {
                    if !c.is_ascii_digit() {
                        self.cursor.back_up();
                        return self.number()?;
                    }
                    State::InNum
                }
                State::InString => match c {
                    b'"' => return self.make_token(Kind::StringLit),
                    b' '..=b'~' => State::InString,
                    _ => {
                        let c = self.offending_char();
                        throw!(LexError::new(
                            LexErrorKind::IllegalStringCharacter(c),
                            location,
                            (self.cursor.offset(), c.len_utf8()),
                        ));
                    }
                },
            };
        }
    }

    /// Resolve whatever is pending when the input runs out.
    #[throws(LexError)]
    fn finish(&mut self, state: State) -> Token<'src> {
        match state {
            State::Start => self.make_token(Kind::Eof),
            State::Comment => {
                self.mark_start();
                self.make_token(Kind::Eof)
            }
            State::HaveLSquare => self.make_token(Kind::LSquare),
            State::HaveGt => self.make_token(Kind::Gt),
            State::HaveLt => self.make_token(Kind::Lt),
            State::HaveMinus => self.make_token(Kind::Minus),
            State::HaveAnd => self.make_token(Kind::BitAnd),
            State::HaveOr => self.make_token(Kind::BitOr),
            State::HaveEq => self.make_token(Kind::Assign),
            State::HaveColon => self.make_token(Kind::Colon),
            State::HaveStar => self.make_token(Kind::Times),
            State::InIdent => self.identifier(),
            State::InNum => self.number()?,
            State::HaveHash => throw!(self.dangling_hash()),
            State::InString => throw!(LexError::new(
                LexErrorKind::UnterminatedString,
                self.start_location,
                self.start_offset..self.cursor.offset(),
            )),
        }
    }

    /// Finish a one- or two-character operator. If `c` does not complete any
    /// of the `pairs` it is pushed back and the `single` token is produced.
    fn one_or_two(&mut self, c: u8, pairs: &[(u8, Kind)], single: Kind) -> Token<'src> {
        match pairs.iter().find(|(second, _)| *second == c) {
            Some(&(_, kind)) => self.make_token(kind),
            None => {
                self.cursor.back_up();
                self.make_token(single)
            }
        }
    }

    fn identifier(&self) -> Token<'src> {
        let token = self.make_token(Kind::Ident);
        self.make_token(keywords::classify(token.text()))
    }

    #[throws(LexError)]
    fn number(&self) -> Token<'src> {
        let token = self.make_token(Kind::NumLit);
        if token.text().parse::<i32>().is_err() {
            throw!(LexError::new(
                LexErrorKind::IntegerOverflow(token.text().into()),
                token.location,
                token.span(),
            ));
        }
        token
    }

    fn dangling_hash(&self) -> LexError {
        LexError::new(
            LexErrorKind::DanglingHash,
            self.start_location,
            (self.start_offset, 1),
        )
    }

    // Steps back over the byte just consumed and decodes the character it starts.
    fn offending_char(&mut self) -> char {
        self.cursor.back_up();
        self.cursor
            .peek_char()
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn mark_start(&mut self) {
        self.start_offset = self.cursor.offset();
        self.start_location = self.cursor.location();
    }

    fn make_token(&self, kind: Kind) -> Token<'src> {
        Token::new(
            kind,
            self.start_offset,
            self.cursor.offset() - self.start_offset,
            self.start_location,
            self.cursor.source(),
        )
    }
}

/// Yields every token up to and including `EOF`, or up to the first error.
impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = !matches!(&result, Ok(token) if token.kind != Kind::Eof);
        Some(result)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan all of `source`. The last token is always `EOF`.
#[throws(LexError)]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect::<Result<Vec<_>, _>>()?
}
