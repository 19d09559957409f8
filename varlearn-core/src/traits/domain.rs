use std::collections::HashSet;

use crate::errors::{DomainError, VarlearnResult};
use crate::grammar::{GrammarId, SentenceId};
use crate::relevance::Relevance;

/// Read-only grammar knowledge base supplied by the caller.
///
/// Implementations are assumed fully materialized: `language` hands back a
/// set, so the parse oracle is a single O(1) membership test and needs no
/// caching in front of it.
pub trait IGrammarDomain: Send + Sync {
    /// Number of binary parameters P.
    fn num_params(&self) -> usize;

    /// Whether `grammar` exists in the domain.
    fn legal_grammar(&self, grammar: GrammarId) -> bool;

    /// The set of sentence ids generated by `grammar`.
    fn language(&self, grammar: GrammarId) -> VarlearnResult<&HashSet<SentenceId>>;

    /// Per-parameter relevance annotation for `sentence`, length P.
    ///
    /// Only the relevance-aware strategies consult this; domains without
    /// annotation data can leave the default in place.
    fn sentence_relevance(&self, sentence: SentenceId) -> VarlearnResult<&[Relevance]> {
        Err(DomainError::MissingRelevance { sentence }.into())
    }
}
