use logos::{Logos, SpannedIter};
use std::{fmt, ops::Range};

#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"[#;][^\n]*")]
pub enum Tok<'input> {
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice())]
    Int(&'input str),
    #[token(",")]
    Comma,
}

impl fmt::Display for Tok<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            | Tok::Int(s) => write!(f, "{}", s),
            | Tok::Comma => write!(f, ","),
        }
    }
}

/// A token with its byte range, or the byte range of text that is not a token.
pub type Spanned<'source> = Result<(usize, Tok<'source>, usize), Range<usize>>;

/// Tokens of a program with separators dropped.
pub struct Lexer<'source> {
    inner: SpannedIter<'source, Tok<'source>>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self { inner: Tok::lexer(source).spanned() }
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Spanned<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                | (Ok(Tok::Comma), _) => continue,
                | (Ok(tok), range) => break Some(Ok((range.start, tok, range.end))),
                | (Err(()), range) => break Some(Err(range)),
            }
        }
    }
}
