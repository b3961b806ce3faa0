//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans one line's code and produces a flat list of Tokens.
//! CONTEXT: This is the first stage of the pipeline. It skips whitespace,
//! reads number literals (with thousands separators, a `$` prefix, and an
//! optional unit or `%` suffix), identifiers, and single character
//! operators. The first bad character aborts the whole line.
//!
//! SUPPORTED INPUT:
//! - Numbers: 42, 3.14, .5, 1,234,567.89
//! - Currency: $5, $ 1,200.50
//! - Unit suffixes: 5 cm, 2 sq m, 3 m3, 4 gallons, 20 c, 10%
//! - Identifiers: [A-Za-z_][A-Za-z0-9_]*
//! - Single char: + - * / ^ ( ) ,

use crate::error::{ParseError, ParseResult};
use crate::token::Token;
use crate::units::{self, Unit};
use crate::value::Value;
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        skip_whitespace(&mut self.input);

        match self.input.next() {
            Some('+') => Ok(Token::Plus),
            Some('-') => Ok(Token::Minus),
            Some('*') => Ok(Token::Asterisk),
            Some('/') => Ok(Token::Slash),
            Some('^') => Ok(Token::Caret),
            Some('(') => Ok(Token::LParen),
            Some(')') => Ok(Token::RParen),
            Some(',') => Ok(Token::Comma),

            Some('$') => self.read_currency(),

            Some(ch) if ch.is_ascii_digit() || ch == '.' => {
                let amount = self.read_number(ch)?;
                let unit = self.read_unit_suffix();
                Ok(Token::Number(Value::new(amount, unit)))
            }

            Some(ch) if is_identifier_start(ch) => {
                Ok(Token::Identifier(read_word(&mut self.input, ch)))
            }

            None => Ok(Token::EOF),

            Some(ch) => Err(ParseError::UnexpectedCharacter(ch)),
        }
    }

    /// Reads `$` followed by optional whitespace and a number literal.
    fn read_currency(&mut self) -> ParseResult<Token> {
        skip_whitespace(&mut self.input);

        match self.input.peek().copied() {
            Some(ch) if ch.is_ascii_digit() => {
                self.input.next();
                let amount = self.read_number(ch)?;
                Ok(Token::Number(Value::usd(amount)))
            }
            _ => Err(ParseError::ExpectedNumberAfterDollar),
        }
    }

    /// Reads the raw text of a number literal and validates it.
    /// Commas are only taken as separators when a digit follows directly,
    /// so `max(1, 2)` still splits on the comma.
    fn read_number(&mut self, first_char: char) -> ParseResult<f64> {
        let mut raw = String::from(first_char);

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() || ch == '.' || (ch == ',' && self.digit_after_comma()) {
                raw.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        parse_grouped_number(&raw).ok_or(ParseError::InvalidNumber(raw))
    }

    fn digit_after_comma(&self) -> bool {
        let mut probe = self.input.clone();
        probe.next();
        matches!(probe.peek(), Some(ch) if ch.is_ascii_digit())
    }

    /// Looks past a number for `%` or a unit name. Consumes nothing unless
    /// the catalog recognizes what it finds.
    fn read_unit_suffix(&mut self) -> Unit {
        let mut probe = self.input.clone();
        skip_whitespace(&mut probe);

        match probe.peek().copied() {
            Some('%') => {
                probe.next();
                self.input = probe;
                Unit::Percent
            }
            Some(ch) if ch.is_ascii_alphabetic() => {
                probe.next();
                let first = read_word(&mut probe, ch);

                if units::power_prefix(&first).is_some() {
                    let mut pair = probe.clone();
                    skip_whitespace(&mut pair);
                    if let Some(ch) = pair.peek().copied().filter(|c| c.is_ascii_alphabetic()) {
                        pair.next();
                        let second = read_word(&mut pair, ch);
                        if let Some(unit) = units::lookup_words(&first, Some(&second)) {
                            self.input = pair;
                            return unit;
                        }
                    }
                }

                match units::lookup_words(&first, None) {
                    Some(unit) => {
                        self.input = probe;
                        unit
                    }
                    None => Unit::None,
                }
            }
            _ => Unit::None,
        }
    }
}

/// Tokenizes a whole line. The trailing EOF is not included.
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token()? {
            Token::EOF => return Ok(tokens),
            token => tokens.push(token),
        }
    }
}

/// Returns true if `text` is a complete identifier.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_continue),
        _ => false,
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn skip_whitespace(input: &mut Peekable<Chars<'_>>) {
    while let Some(&ch) = input.peek() {
        if ch != ' ' && ch != '\t' {
            break;
        }
        input.next();
    }
}

fn read_word(input: &mut Peekable<Chars<'_>>, first_char: char) -> String {
    let mut word = String::from(first_char);
    while let Some(&ch) = input.peek() {
        if !is_identifier_continue(ch) {
            break;
        }
        word.push(ch);
        input.next();
    }
    word
}

/// Validates comma grouping and the decimal point, then parses.
/// The first group holds 1-3 digits, every later group exactly 3, and
/// separators may not appear after the decimal point.
fn parse_grouped_number(raw: &str) -> Option<f64> {
    let (integer, fraction) = match raw.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (raw, None),
    };

    if let Some(fraction) = fraction {
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
    }

    if integer.contains(',') {
        let mut groups = integer.split(',');
        let first = groups.next()?;
        if first.is_empty() || first.len() > 3 {
            return None;
        }
        if groups.any(|group| group.len() != 3) {
            return None;
        }
    }

    let digits: String = raw.chars().filter(|&c| c != ',').collect();
    digits.parse::<f64>().ok().filter(|n| n.is_finite())
}
