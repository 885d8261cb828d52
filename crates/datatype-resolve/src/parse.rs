//! Lexical grammar for column-type descriptions.
//!
//! ```text
//! description := NAME [ '(' PARAMLIST ')' ] [ '{' PROPLIST '}' ]
//! ```
//!
//! The grammar is purely lexical and consumed in a single pass: no nested
//! parentheses or braces, no escaped commas or colons inside parameter or
//! property values. Anything a full SQL dialect grammar would reject is a
//! concern for the layers that produce description strings, not for this
//! parser.

use serde::Serialize;

use crate::error::{ResolveError, Result};

/// Structural parts of one column-type description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDescription {
    /// Type name with its original casing, surrounding whitespace trimmed.
    pub name: String,
    /// Positional parameters from the `(..)` block, in order.
    pub parameters: Vec<String>,
    /// `name:value` assignments from the `{..}` block.
    pub properties: Vec<(String, String)>,
}

/// Split a description string into name, parameters, and properties.
///
/// The name is the substring before the first `(` or `{`, whichever occurs
/// first. Parameter and property tokens are trimmed; tokens that trim to
/// nothing are dropped. Property tokens split on the first `:` only, so
/// values may themselves contain colons.
///
/// # Errors
///
/// Fails with [`ResolveError::MalformedProperty`] when a property token has
/// no `:` separator.
pub fn parse_description(input: &str) -> Result<ParsedDescription> {
    let name_end = input.find(['(', '{']).unwrap_or(input.len());
    let name = input[..name_end].trim().to_string();

    let parameters = match delimited(input, '(', ')') {
        Some(body) => body
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };

    let mut properties = Vec::new();
    if let Some(body) = delimited(input, '{', '}') {
        for token in body.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let (prop, value) = token.split_once(':').ok_or_else(|| {
                ResolveError::MalformedProperty {
                    token: token.to_string(),
                }
            })?;
            properties.push((prop.trim().to_string(), value.trim().to_string()));
        }
    }

    Ok(ParsedDescription {
        name,
        parameters,
        properties,
    })
}

/// Text between the first `open` and the first `close` after it.
///
/// Runs to the end of the string when `close` never appears; the grammar is
/// lenient about unterminated blocks.
fn delimited(input: &str, open: char, close: char) -> Option<&str> {
    let start = input.find(open)? + open.len_utf8();
    let body = &input[start..];
    Some(match body.find(close) {
        Some(end) => &body[..end],
        None => body,
    })
}
