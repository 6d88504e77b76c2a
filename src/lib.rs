//! Scanner for the image-processing language.
//!
//! The [`Scanner`] turns source text into [`Token`]s one call at a time.
//! Every token borrows the source it was cut from, so the text of a token
//! is only materialised when [`Token::text`] is asked for it.
//!
//! ```
//! use imagelex::{tokenize, Kind};
//!
//! let tokens = tokenize("image img[512,256];").unwrap();
//! assert_eq!(tokens[0].kind, Kind::KwImage);
//! assert_eq!(tokens.last().unwrap().kind, Kind::Eof);
//! ```

mod cursor;
mod error;
mod keywords;
mod scanner;
mod token;

pub use {
    error::{LexError, LexErrorKind},
    scanner::{tokenize, Scanner},
    token::{Kind, SourceLocation, Token},
};
