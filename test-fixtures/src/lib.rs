//! In-memory grammar domains shared by tests across the workspace.

use std::collections::{HashMap, HashSet};

use varlearn_core::{
    DomainError, GrammarId, IGrammarDomain, Relevance, SentenceId, VarlearnResult,
};

/// Hand-built, fully materialized grammar domain.
pub struct FixtureDomain {
    num_params: usize,
    legal: HashSet<GrammarId>,
    languages: HashMap<GrammarId, HashSet<SentenceId>>,
    relevance: HashMap<SentenceId, Vec<Relevance>>,
}

impl FixtureDomain {
    /// Start building a domain over `num_params` parameters.
    pub fn builder(num_params: usize) -> FixtureDomainBuilder {
        FixtureDomainBuilder {
            domain: FixtureDomain {
                num_params,
                legal: HashSet::new(),
                languages: HashMap::new(),
                relevance: HashMap::new(),
            },
        }
    }
}

pub struct FixtureDomainBuilder {
    domain: FixtureDomain,
}

impl FixtureDomainBuilder {
    /// Add a legal grammar together with the sentences it generates.
    pub fn language(mut self, grammar: GrammarId, sentences: &[SentenceId]) -> Self {
        self.domain.legal.insert(grammar);
        self.domain
            .languages
            .insert(grammar, sentences.iter().copied().collect());
        self
    }

    /// Add a language table entry without marking the grammar legal, so
    /// the sampler can never propose it.
    pub fn language_only(mut self, grammar: GrammarId, sentences: &[SentenceId]) -> Self {
        self.domain
            .languages
            .insert(grammar, sentences.iter().copied().collect());
        self
    }

    /// Mark a grammar legal without giving it a language entry, so parse
    /// tests against it fail the lookup.
    pub fn legal_only(mut self, grammar: GrammarId) -> Self {
        self.domain.legal.insert(grammar);
        self
    }

    /// Attach a per-sentence annotation string, one of `0/1/~/*` per
    /// parameter in declaration order.
    ///
    /// # Panics
    /// Panics on a malformed annotation; fixtures are hand-written.
    pub fn relevance(mut self, sentence: SentenceId, annotation: &str) -> Self {
        let parsed = Relevance::parse_annotation(annotation).expect("fixture annotation");
        self.domain.relevance.insert(sentence, parsed);
        self
    }

    pub fn build(self) -> FixtureDomain {
        self.domain
    }
}

impl IGrammarDomain for FixtureDomain {
    fn num_params(&self) -> usize {
        self.num_params
    }

    fn legal_grammar(&self, grammar: GrammarId) -> bool {
        self.legal.contains(&grammar)
    }

    fn language(&self, grammar: GrammarId) -> VarlearnResult<&HashSet<SentenceId>> {
        self.languages
            .get(&grammar)
            .ok_or_else(|| DomainError::UnknownGrammar { grammar }.into())
    }

    fn sentence_relevance(&self, sentence: SentenceId) -> VarlearnResult<&[Relevance]> {
        self.relevance
            .get(&sentence)
            .map(Vec::as_slice)
            .ok_or_else(|| DomainError::MissingRelevance { sentence }.into())
    }
}

/// Toy domain over three parameters with grammars 0 and 3:
/// `language[0] = {1}`, `language[3] = {1, 2}`.
pub fn two_grammar_domain() -> FixtureDomain {
    FixtureDomain::builder(3)
        .language(0, &[1])
        .language(3, &[1, 2])
        .build()
}

/// Same tables with legality restricted to grammar 3, so the sampler can
/// only ever return 3.
pub fn forced_grammar_domain() -> FixtureDomain {
    FixtureDomain::builder(3)
        .language_only(0, &[1])
        .language(3, &[1, 2])
        .build()
}

/// Domain where every grammar over `num_params` parameters is legal and
/// generates the single sentence equal to its own id.
pub fn saturated_domain(num_params: usize) -> FixtureDomain {
    assert!(num_params <= 16, "saturated fixture is meant to stay small");
    let mut builder = FixtureDomain::builder(num_params);
    for grammar in 0..(1u64 << num_params) {
        builder = builder.language(grammar, &[grammar]);
    }
    builder.build()
}
