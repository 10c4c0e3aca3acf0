use crate::{
    ast::{BinaryOperator, Expr, Program},
    compiler::lexer::{Lexer, Token, TokenKind},
    error::ParseError,
    trace::Trace,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over the token stream.
///
/// The parser owns the lexer and exactly one cached lookahead token (LL(1));
/// every grammar rule is built from [`Parser::eat`] plus that lookahead, so
/// no backtracking is ever needed. Each token pulled from the lexer is
/// reported to the optional trace sink.
pub struct Parser<'src, 'trace> {
    lexer:          Lexer<'src>,
    current:        Token,
    current_offset: usize,
    trace:          Option<&'trace mut Trace>,
}

impl<'src, 'trace> Parser<'src, 'trace> {
    /// Parses the entire `source` into a [`Program`].
    ///
    /// The top-level rule repeats `expr ";"` until the lookahead is the end
    /// of input. Empty input is a valid, empty program.
    ///
    /// # Parameters
    /// - `source`: The raw source text.
    /// - `trace`: Optional debug sink receiving one line per lexed token.
    ///
    /// # Errors
    /// Fails fast with the first lexing or parsing error encountered.
    pub fn parse(source: &'src str, trace: Option<&'trace mut Trace>) -> ParseResult<Program> {
        let mut parser = Self::new(source, trace)?;

        let mut statements = Vec::new();
        while parser.current.kind() != TokenKind::End {
            let statement = parser.expr()?;
            parser.finish_statement()?;
            statements.push(statement);
        }

        Ok(Program { statements })
    }

    fn new(source: &'src str, trace: Option<&'trace mut Trace>) -> ParseResult<Self> {
        let mut parser = Self { lexer: Lexer::new(source),
                                current: Token::End,
                                current_offset: 0,
                                trace };
        // Prime the lookahead.
        parser.advance()?;
        Ok(parser)
    }

    /// Pulls the next token from the lexer into the lookahead slot.
    fn advance(&mut self) -> ParseResult<()> {
        let token = self.lexer.next_token()?;
        let offset = self.lexer.offset();

        if let Some(trace) = self.trace.as_deref_mut() {
            trace.token(token, offset);
        }

        self.current = token;
        self.current_offset = offset;
        Ok(())
    }

    /// The single token-consumption primitive.
    ///
    /// If the current token's kind matches `expected`, advances the lexer and
    /// caches the new current token; otherwise fails with
    /// [`ParseError::UnexpectedToken`] naming both.
    fn eat(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.current.kind() == expected {
            self.advance()
        } else {
            Err(ParseError::UnexpectedToken { expected,
                                              found: self.current,
                                              offset: self.current_offset })
        }
    }

    /// Parses a factor.
    ///
    /// The rule is: `factor := NUMBER`
    fn factor(&mut self) -> ParseResult<Expr> {
        match self.current {
            Token::Number(value) => {
                self.eat(TokenKind::Number)?;
                Ok(Expr::Number { value })
            },

            _ => Err(ParseError::UnexpectedToken { expected: TokenKind::Number,
                                                   found: self.current,
                                                   offset: self.current_offset }),
        }
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles the left-associative binary operators `*` and `/`; repeated
    /// application builds a left-leaning tree, so `2*3*4` parses as
    /// `(2*3)*4`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    fn term(&mut self) -> ParseResult<Expr> {
        let mut node = self.factor()?;
        loop {
            let op = match binary_operator(self.current) {
                Some(op) if matches!(op, BinaryOperator::Mul | BinaryOperator::Div) => op,
                _ => break,
            };
            let offset = self.current_offset;
            let kind = self.current.kind();
            self.eat(kind)?;

            let right = self.factor()?;
            node = Expr::BinaryOp { left: Box::new(node),
                                    op,
                                    right: Box::new(right),
                                    offset };
        }
        Ok(node)
    }

    /// Parses addition-level expressions.
    ///
    /// Handles the left-associative binary operators `+` and `-`. Because
    /// each operand is a whole `term`, `*` and `/` bind tighter than `+` and
    /// `-` without any explicit precedence table.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    fn expr(&mut self) -> ParseResult<Expr> {
        let mut node = self.term()?;
        loop {
            let op = match binary_operator(self.current) {
                Some(op) if matches!(op, BinaryOperator::Add | BinaryOperator::Sub) => op,
                _ => break,
            };
            let offset = self.current_offset;
            let kind = self.current.kind();
            self.eat(kind)?;

            let right = self.term()?;
            node = Expr::BinaryOp { left: Box::new(node),
                                    op,
                                    right: Box::new(right),
                                    offset };
        }
        Ok(node)
    }

    /// Requires and consumes the semicolon terminating a statement.
    fn finish_statement(&mut self) -> ParseResult<()> {
        if self.current.kind() == TokenKind::Semicolon {
            self.eat(TokenKind::Semicolon)
        } else {
            Err(ParseError::ExpectedSemicolon { found:  self.current,
                                                offset: self.current_offset, })
        }
    }
}

/// Maps an operator token to its binary operator, if it is one.
const fn binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Add => Some(BinaryOperator::Add),
        Token::Sub => Some(BinaryOperator::Sub),
        Token::Mul => Some(BinaryOperator::Mul),
        Token::Div => Some(BinaryOperator::Div),
        _ => None,
    }
}
