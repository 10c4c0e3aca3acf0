#[derive(Debug)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Encountered a character that is not part of the language.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        offset:    usize,
    },
    /// A digit run does not fit in a 64-bit signed integer.
    NumberTooLarge {
        /// The digit run as written in the source.
        literal: String,
        /// Byte offset of the literal in the source.
        offset:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, offset } => {
                write!(f, "Error at offset {offset}: Unexpected character '{character}'.")
            },

            Self::NumberTooLarge { literal, offset } => write!(f,
                                                               "Error at offset {offset}: Number literal '{literal}' does not fit in a 64-bit integer."),
        }
    }
}

impl std::error::Error for LexError {}
