//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a list of Tokens into an AST.
//! CONTEXT: This is the second stage of the pipeline. The whole line is
//! tokenized first, so lexical errors always win over syntax errors.
//!
//! GRAMMAR (lowest to highest precedence):
//!   expression     --> additive ( ("to" | "in") unit )?
//!   additive       --> multiplicative ( ("+" | "-") multiplicative )*
//!   multiplicative --> unary ( ("*" | "/") unary )*
//!   unary          --> ("+" | "-") unary | power
//!   power          --> primary ( "^" unary )?
//!   primary        --> NUMBER | IDENTIFIER | function_call | "(" expression ")"
//!   function_call  --> IDENTIFIER "(" arguments? ")"
//!   arguments      --> expression ("," expression)*
//!   unit           --> IDENTIFIER IDENTIFIER?   // resolved by the unit catalog
//!
//! Unary sits below power, so `-2 ^ 2` is `-(2 ^ 2)`. The exponent re-enters
//! at the unary level, which makes `^` right associative: `2 ^ 3 ^ 2` is
//! `2 ^ (3 ^ 2)`.

use crate::ast::{BinaryOperator, Expression, UnaryOperator};
use crate::error::{ParseError, ParseResult};
use crate::lexer::tokenize;
use crate::token::Token;
use crate::units::{self, Unit};

/// The Parser struct holds the remaining tokens and the current one.
pub struct Parser {
    tokens: std::vec::IntoIter<Token>,
    current_token: Token,
}

impl Parser {
    /// Creates a new parser over already tokenized input.
    /// Automatically advances to the first token.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens = tokens.into_iter();
        let current_token = tokens.next().unwrap_or(Token::EOF);
        Parser {
            tokens,
            current_token,
        }
    }

    /// Parses the entire input and returns the AST.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        let expr = self.parse_expression()?;

        // Ensure we consumed all tokens
        if self.current_token != Token::EOF {
            return Err(ParseError::UnexpectedTrailingInput);
        }

        Ok(expr)
    }

    fn advance(&mut self) {
        self.current_token = self.tokens.next().unwrap_or(Token::EOF);
    }

    fn expect_closing_paren(&mut self) -> ParseResult<()> {
        if self.current_token == Token::RParen {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::MissingClosingParen)
        }
    }

    /// Entry point for expression parsing, including an optional conversion.
    fn parse_expression(&mut self) -> ParseResult<Expression> {
        let expr = self.parse_additive()?;

        let converts = matches!(
            &self.current_token,
            Token::Identifier(word) if is_conversion_keyword(word)
        );
        if !converts {
            return Ok(expr);
        }

        self.advance();
        let target = self.parse_unit()?;
        Ok(Expression::Conversion {
            operand: Box::new(expr),
            target,
        })
    }

    /// Parses additive expressions (+ and -).
    fn parse_additive(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match &self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.advance();
            let right = self.parse_multiplicative()?;

            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses multiplicative expressions (* and /).
    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match &self.current_token {
                Token::Asterisk => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.advance();
            let right = self.parse_unary()?;

            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses prefix + and -.
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        let op = match &self.current_token {
            Token::Minus => UnaryOperator::Negate,
            Token::Plus => UnaryOperator::Plus,
            _ => return self.parse_power(),
        };

        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    /// Parses power/exponentiation expressions (^).
    fn parse_power(&mut self) -> ParseResult<Expression> {
        let left = self.parse_primary()?;

        if self.current_token == Token::Caret {
            self.advance();
            let right = self.parse_unary()?;

            return Ok(Expression::BinaryOp {
                left: Box::new(left),
                op: BinaryOperator::Power,
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    /// Parses primary expressions (literals, variables, calls, parentheses).
    fn parse_primary(&mut self) -> ParseResult<Expression> {
        match self.current_token.clone() {
            Token::Number(value) => {
                self.advance();
                Ok(Expression::Literal(value))
            }

            Token::Identifier(name) => {
                self.advance();

                if self.current_token == Token::LParen {
                    return self.parse_function_call(name);
                }

                Ok(Expression::Identifier(name))
            }

            Token::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_closing_paren()?;
                Ok(expr)
            }

            Token::EOF => Err(ParseError::UnexpectedEndOfInput),

            // A `)` where an operand belongs is a paren mismatch
            Token::RParen => Err(ParseError::MissingClosingParen),

            token => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }

    /// Parses a function call like max(a, 10).
    fn parse_function_call(&mut self, name: String) -> ParseResult<Expression> {
        // Consume the '('
        self.advance();

        let mut args = Vec::new();

        if self.current_token == Token::RParen {
            self.advance();
            return Ok(Expression::FunctionCall { name, args });
        }

        args.push(self.parse_expression()?);

        while self.current_token == Token::Comma {
            self.advance();
            args.push(self.parse_expression()?);
        }

        self.expect_closing_paren()?;

        Ok(Expression::FunctionCall { name, args })
    }

    /// Parses the target of a conversion: one word, or a power prefix
    /// followed by a length (`sq ft`, `cubic cm`).
    fn parse_unit(&mut self) -> ParseResult<Unit> {
        let first = match self.current_token.clone() {
            Token::Identifier(word) => {
                self.advance();
                word
            }
            Token::EOF => return Err(ParseError::UnexpectedEndOfInput),
            token => return Err(ParseError::UnknownUnit(token.to_string())),
        };

        if units::power_prefix(&first).is_some() {
            if let Token::Identifier(second) = self.current_token.clone() {
                self.advance();
                return units::lookup_words(&first, Some(&second))
                    .ok_or_else(|| ParseError::UnknownUnit(format!("{} {}", first, second)));
            }
        }

        units::lookup_words(&first, None).ok_or(ParseError::UnknownUnit(first))
    }
}

fn is_conversion_keyword(word: &str) -> bool {
    word == "to" || word == "in"
}

/// Convenience function: tokenize then parse a line's expression.
pub fn parse(input: &str) -> ParseResult<Expression> {
    let tokens = tokenize(input)?;
    Parser::new(tokens).parse()
}
