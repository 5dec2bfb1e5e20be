//! Parser: walks a token stream, pairs numbers with units, and accumulates a
//! signed millisecond total.

use thiserror::Error;
use tracing::trace;

use crate::token::{tokenize, Token, TokenKind};
use crate::unit;
use crate::value::DurationValue;

/// Errors raised by parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A number was not followed by a valid unit token, or a number literal
    /// itself was malformed (more than one decimal point, or a bare dot).
    #[error("invalid duration format: {0}")]
    MalformedDuration(String),

    /// A number was followed by a letter run that is not a known unit symbol.
    #[error("invalid unit: {0}")]
    UnknownUnit(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parses a duration string strictly. Any garbage character, unknown unit
/// symbol, or malformed number fails the whole parse.
///
/// Whitespace and case are ignored; one leading `+` or `-` applies to the
/// entire total. A trailing bare number counts as milliseconds. Empty input
/// parses to zero.
pub fn parse(input: &str) -> Result<DurationValue> {
    parse_with(input, false)
}

/// Parses a duration string leniently: garbage characters and unknown unit
/// symbols are silently dropped from the total instead of failing, so
/// `parse_lenient("1person")` is `Ok(zero)`.
///
/// Lenient mode is not unconditional: a number still has to be followed by a
/// unit token (or end the string), and number literals still have to be well
/// formed, so `"5,5s"` and `"1.2.3s"` fail with `MalformedDuration` in both
/// modes.
pub fn parse_lenient(input: &str) -> Result<DurationValue> {
    parse_with(input, true)
}

/// Best-effort parse: strict semantics, but any failure yields `fallback`
/// instead of an error. Never fails for any input; empty input parses to
/// zero, not the fallback, because it is not an error.
pub fn parse_or(input: &str, fallback: DurationValue) -> DurationValue {
    parse(input).unwrap_or(fallback)
}

/// Checks whether a string is free of scan-level garbage.
///
/// This only inspects the tokenizer output: it returns false iff some
/// character is neither a digit, a dot, a letter, whitespace, nor the one
/// permitted leading sign. It deliberately does not catch structural errors:
/// a number followed by an unknown unit passes this check and still fails
/// `parse`. A trailing bare number is parseable, consistent with the
/// parser's base-unit handling of it.
pub fn is_parseable(input: &str) -> bool {
    !tokenize(input).has_garbage()
}

fn parse_with(input: &str, lenient: bool) -> Result<DurationValue> {
    let stream = tokenize(input);
    let tokens: Vec<&Token> = if lenient {
        stream.clean()
    } else {
        stream.tokens().iter().collect()
    };
    trace!(input, lenient, tokens = tokens.len(), "tokenized duration");

    let mut total_millis = 0.0_f64;
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index];
        if token.kind != TokenKind::Number {
            // Stray unit or garbage not preceded by a number: skip. Garbage
            // only reaches this arm in strict mode, where it is tolerated as
            // long as it does not break up a number/unit pair, matching the
            // reference behavior.
            index += 1;
            continue;
        }

        let number = parse_number(&token.text)
            .ok_or_else(|| ParseError::MalformedDuration(input.trim().to_string()))?;

        match tokens.get(index + 1) {
            // Unit-less trailing number: already in base units.
            None => {
                total_millis += number;
                index += 1;
            }
            Some(next) if next.kind == TokenKind::Unit => {
                match unit::unit_millis(&next.text) {
                    Some(millis) => total_millis += number * millis,
                    None if lenient => {} // contributes nothing
                    None => return Err(ParseError::UnknownUnit(next.text.clone())),
                }
                index += 2;
            }
            // Number followed by garbage, or by another number once garbage
            // was filtered out. Malformed in both modes.
            Some(_) => return Err(ParseError::MalformedDuration(input.trim().to_string())),
        }
    }

    if stream.is_negative() {
        total_millis = -total_millis;
    }
    // Normalize -0.0 so "-0" compares and formats as exactly zero.
    if total_millis == 0.0 {
        total_millis = 0.0;
    }
    Ok(DurationValue::from_millis(total_millis))
}

/// Converts a number run to f64. Rejects runs with more than one decimal
/// point and the bare dot; accepts leading, trailing, or no dot (`".5"`,
/// `"5."`, `"5"`).
fn parse_number(text: &str) -> Option<f64> {
    if text.bytes().filter(|&b| b == b'.').count() > 1 {
        return None;
    }
    if text == "." {
        return None;
    }
    text.parse::<f64>().ok()
}
