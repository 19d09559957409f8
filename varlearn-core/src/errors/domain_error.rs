use crate::grammar::{GrammarId, SentenceId};

/// Lookup failures against the external grammar domain's tables.
///
/// The core performs no validation or repair of domain data; these are
/// always fatal to the enclosing trial.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("grammar {grammar} has no language entry")]
    UnknownGrammar { grammar: GrammarId },

    #[error("sentence {sentence} is not in the domain's tables")]
    UnknownSentence { sentence: SentenceId },

    #[error("sentence {sentence} has no relevance annotation")]
    MissingRelevance { sentence: SentenceId },

    #[error("grammar {grammar} generates no sentences")]
    EmptyLanguage { grammar: GrammarId },

    #[error("invalid relevance symbol {symbol:?}, expected one of '0', '1', '~', '*'")]
    InvalidAnnotation { symbol: char },
}
