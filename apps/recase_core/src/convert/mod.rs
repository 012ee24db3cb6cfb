//! Letter-case conversion: tokenize input text into words, then re-join
//! them under a target case convention.

mod renderer;
mod tokenizer;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub use renderer::render;
pub use tokenizer::tokenize;

/// A case convention, either as a render target or as the detected source
/// case of an input. `Unknown` only ever appears on the detection side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaseKind {
    Snake,
    Kebab,
    Camel,
    Pascal,
    Upper,
    Unknown,
}

impl CaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseKind::Snake => "SNAKE",
            CaseKind::Kebab => "KEBAB",
            CaseKind::Camel => "CAMEL",
            CaseKind::Pascal => "PASCAL",
            CaseKind::Upper => "UPPER",
            CaseKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifiers accepted from the `toCase` query parameter. Matching is
/// exact; `UNKNOWN` is not a valid target and does not parse.
impl FromStr for CaseKind {
    type Err = ParseCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SNAKE" => Ok(CaseKind::Snake),
            "KEBAB" => Ok(CaseKind::Kebab),
            "CAMEL" => Ok(CaseKind::Camel),
            "PASCAL" => Ok(CaseKind::Pascal),
            "UPPER" => Ok(CaseKind::Upper),
            _ => Err(ParseCaseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("unrecognized case identifier: {0:?}")]
pub struct ParseCaseError(String);

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0} is not a renderable target case")]
    UnsupportedTarget(CaseKind),
}

/// Outcome of one conversion. Built once per request, never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub original_case: CaseKind,
    pub converted_text: String,
}

/// Tokenize `text` and render the tokens under `target`.
pub fn convert(text: &str, target: CaseKind) -> Result<ConversionResult, ConvertError> {
    let (tokens, original_case) = tokenize(text);
    let converted_text = render(&tokens, target)?;
    Ok(ConversionResult {
        original_case,
        converted_text,
    })
}
