use crate::{
    compiler::lexer::{Token, TokenKind},
    error::LexError,
};

#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that does not match what the current grammar rule
    /// requires.
    UnexpectedToken {
        /// The token kind the grammar rule expected.
        expected: TokenKind,
        /// The token that was actually found.
        found:    Token,
        /// Byte offset of the found token.
        offset:   usize,
    },
    /// A statement was not terminated with a semicolon.
    ExpectedSemicolon {
        /// The token found instead of `;`.
        found:  Token,
        /// Byte offset of the found token.
        offset: usize,
    },
    /// The lexer failed while producing the next token.
    Lex(LexError),
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    offset, } => write!(f,
                                                        "Error at offset {offset}: Unexpected token: expected {expected}, found {found}."),

            Self::ExpectedSemicolon { found, offset } => write!(f,
                                                                "Error at offset {offset}: Expected ';' after statement, found {found}."),

            Self::Lex(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ParseError {}
