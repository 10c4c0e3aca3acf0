use logos::Logos;

use crate::error::LexError;

/// Token matcher derived over the raw lexemes of the language.
///
/// This stays private: the public [`Token`] adds the `End` marker that the
/// matcher itself never produces.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `;`
    #[token(";")]
    Semicolon,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits a 64-bit signed integer.
/// - `None`: If the digit run overflows, which the lexer reports as
///   [`LexError::NumberTooLarge`].
fn parse_integer(lex: &logos::Lexer<RawToken>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// `Number` is the only variant carrying a payload; `End` marks exhausted
/// input and is returned forever once reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An integer literal.
    Number(i64),
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `;`
    Semicolon,
    /// End of input.
    End,
}

impl Token {
    /// Returns the payload-free kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Add => TokenKind::Add,
            Self::Sub => TokenKind::Sub,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
            Self::Semicolon => TokenKind::Semicolon,
            Self::End => TokenKind::End,
        }
    }
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Number(value) => Self::Number(value),
            RawToken::Add => Self::Add,
            RawToken::Sub => Self::Sub,
            RawToken::Mul => Self::Mul,
            RawToken::Div => Self::Div,
            RawToken::Semicolon => Self::Semicolon,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Add => write!(f, "'+'"),
            Self::Sub => write!(f, "'-'"),
            Self::Mul => write!(f, "'*'"),
            Self::Div => write!(f, "'/'"),
            Self::Semicolon => write!(f, "';'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// The kind of a token, without any payload.
///
/// Grammar rules name the kind they require (for example `eat(Number)`), so
/// kinds need to be comparable without constructing a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An integer literal.
    Number,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `;`
    Semicolon,
    /// End of input.
    End,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "a number"),
            Self::Add => write!(f, "'+'"),
            Self::Sub => write!(f, "'-'"),
            Self::Mul => write!(f, "'*'"),
            Self::Div => write!(f, "'/'"),
            Self::Semicolon => write!(f, "';'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Pull-based lexer over a read-only source buffer.
///
/// Tokens are produced lazily, one per [`Lexer::next_token`] call; the cursor
/// advances monotonically and never rewinds. Once the input is exhausted,
/// every further call returns [`Token::End`].
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: RawToken::lexer(source) }
    }

    /// Produces the next token, skipping any whitespace before it.
    ///
    /// # Errors
    /// - [`LexError::UnexpectedCharacter`] for a character outside the
    ///   language, with its byte offset.
    /// - [`LexError::NumberTooLarge`] for a digit run that overflows `i64`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.inner.next() {
            None => Ok(Token::End),

            Some(Ok(raw)) => Ok(raw.into()),

            Some(Err(())) => {
                let offset = self.inner.span().start;
                let slice = self.inner.slice();
                let character = slice.chars().next().unwrap_or_default();

                if character.is_ascii_digit() {
                    Err(LexError::NumberTooLarge { literal: slice.to_owned(),
                                                   offset })
                } else {
                    Err(LexError::UnexpectedCharacter { character, offset })
                }
            },
        }
    }

    /// Byte offset of the most recently produced token.
    ///
    /// After [`Token::End`] this is the length of the source.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.inner.span().start
    }
}
