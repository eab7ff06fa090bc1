use crate::{
    err::{ParseError, Result},
    lexer::{Lexer, Tok},
    span::FileInfo,
    syntax::Program,
};

/// Read program text into its list of cells.
pub fn parse_program(source: &str) -> Result<Program> {
    let info = FileInfo::new(source);
    let mut cells = Vec::new();
    for item in Lexer::new(source) {
        let (start, tok, end) = item.map_err(|range| ParseError::InvalidToken {
            text: source[range.clone()].to_owned(),
            span: info.span(range.start, range.end),
        })?;
        match tok {
            | Tok::Int(text) => {
                let value = text.parse::<i64>().map_err(|_| ParseError::IntegerOverflow {
                    text: text.to_owned(),
                    span: info.span(start, end),
                })?;
                cells.push(value);
            }
            | Tok::Comma => {}
        }
    }
    Ok(Program::from(cells))
}
