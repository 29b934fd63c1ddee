// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/parser.rs
//!
//! Field list parser
//!
//! Field lists can be written one field per line:
//!
//! ```text
//! # Checkout form
//! holder:  alpha
//! card:    cardNumber
//! expiry:  expiryDate   # MM/YY
//! ```
//!
//! or as a JSON array of `{"name": ..., "type": ...}` objects. Unknown type
//! tags are accepted and resolve as plain text.
//!
//! # Architecture
//! Line parsing uses nom combinators. Parsing only structures data; no
//! field is registered until the list reaches the resolver.

use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::{char, space0},
    combinator::{eof, opt, rest},
};
use nom::{sequence::preceded, IResult, Parser};
use std::{fs, path::Path};
use thiserror::Error;

use crate::core::types::{FieldSpec, FieldType};

/// Parse errors with line number context
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Invalid JSON field list: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("IO error reading field list: {0}")]
    IoError(#[from] std::io::Error),
}

/// Loads a field list from disk
///
/// `.json` files are parsed as JSON, anything else as the line format.
pub fn load_fields(path: &Path) -> Result<Vec<FieldSpec>, ParseError> {
    let content = fs::read_to_string(path)?;

    let fields = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_field_json(&content)?,
        _ => parse_field_list(&content)?,
    };

    tracing::debug!(path = %path.display(), count = fields.len(), "loaded field list");

    Ok(fields)
}

/// Parses a JSON array of field specs
pub fn parse_field_json(content: &str) -> Result<Vec<FieldSpec>, ParseError> {
    Ok(serde_json::from_str(content)?)
}

/// Parses the line format
///
/// Blank lines and `#` comments are skipped. The first malformed line
/// aborts parsing.
pub fn parse_field_list(content: &str) -> Result<Vec<FieldSpec>, ParseError> {
    let mut fields = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let field = parse_field_arg(line_trimmed).map_err(|message| ParseError::InvalidSyntax {
            line: line_num,
            message,
        })?;
        fields.push(field);
    }

    Ok(fields)
}

/// Parses a single `name: type` entry, as given to `--field`
pub fn parse_field_arg(input: &str) -> Result<FieldSpec, String> {
    let input = input.trim();

    parse_field_line(input)
        .map(|(_, field)| field)
        .map_err(|e| match e {
            nom::Err::Error(e) | nom::Err::Failure(e) if !e.input.is_empty() => {
                format!("expected 'name: type', got '{}' (unexpected '{}')", input, e.input)
            }
            _ => format!("expected 'name: type', got '{}'", input),
        })
}

/// Parse one `name: type` line with an optional trailing comment
pub fn parse_field_line(input: &str) -> IResult<&str, FieldSpec> {
    let (input, name) = parse_field_name(input)?;
    let (input, _) = (space0, char(':'), space0).parse(input)?;
    let (input, tag) = parse_type_tag(input)?;
    let (input, _) = (space0, opt(preceded(char('#'), rest)), eof).parse(input)?;

    Ok((input, FieldSpec::new(name, FieldType::from(tag))))
}

/// Field names: letters, digits and `_ - . [ ]` (for nested form paths
/// such as `address.city` or `items[0]`)
pub fn parse_field_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '[' | ']'))
        .parse(input)
}

/// Type tags run up to whitespace or a comment
///
/// Any token is accepted here; unknown tags degrade to `text` later.
pub fn parse_type_tag(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace() || c == '#').parse(input)
}
