use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, VarlearnResult};

/// Per-sentence, per-parameter evidence annotation.
///
/// Annotation strings use one symbol per parameter: `'0'` or `'1'` for an
/// unambiguous (relevant) parameter, `'~'` for irrelevant, `'*'` for
/// ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relevance {
    /// The sentence's parse outcome bears on this parameter.
    Relevant,
    /// The sentence carries no evidence for this parameter.
    Irrelevant,
    /// The evidence is ambiguous; updates should be tempered.
    Ambiguous,
}

impl Relevance {
    /// Decode a single annotation symbol.
    pub fn from_symbol(symbol: char) -> VarlearnResult<Self> {
        match symbol {
            '0' | '1' => Ok(Relevance::Relevant),
            '~' => Ok(Relevance::Irrelevant),
            '*' => Ok(Relevance::Ambiguous),
            other => Err(DomainError::InvalidAnnotation { symbol: other }.into()),
        }
    }

    /// Decode a whole per-sentence annotation string, one symbol per
    /// parameter in declaration order.
    pub fn parse_annotation(annotation: &str) -> VarlearnResult<Vec<Relevance>> {
        annotation.chars().map(Self::from_symbol).collect()
    }
}
