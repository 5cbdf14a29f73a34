use crate::{config::DEFAULT_CANDIDATE_LIMIT, types::CatalogItem};

use super::{Catalog, Scorer, TokenSetScorer, normalize};

/// Outcome of resolving one input title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<'a> {
    Found(&'a CatalogItem),
    /// No candidate passed the containment check. `rejected` lists the
    /// candidates that were scored but failed it, best first.
    NotFound { rejected: Vec<String> },
}

impl<'a> MatchResult<'a> {
    pub fn item(&self) -> Option<&'a CatalogItem> {
        match self {
            MatchResult::Found(item) => Some(item),
            MatchResult::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found(_))
    }
}

/// True when `needle` appears in the normalized `candidate`, ignoring case.
pub fn contains_title(candidate: &str, needle: &str) -> bool {
    normalize(candidate)
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

/// Picks the single best catalog entry for a normalized input title.
#[derive(Debug, Clone)]
pub struct MatchResolver<S = TokenSetScorer> {
    scorer: S,
    limit: usize,
}

impl Default for MatchResolver<TokenSetScorer> {
    fn default() -> Self {
        Self::new(TokenSetScorer, DEFAULT_CANDIDATE_LIMIT)
    }
}

impl<S: Scorer> MatchResolver<S> {
    pub fn new(scorer: S, limit: usize) -> Self {
        Self {
            scorer,
            limit: limit.max(1),
        }
    }

    /// Resolves `needle`, which the caller has already normalized.
    ///
    /// The scorer ranks all catalog keys and the top candidates are walked
    /// best first; the first one containing `needle` wins. An empty needle
    /// or an empty catalog yields [`MatchResult::NotFound`].
    pub fn resolve<'a>(&self, needle: &str, catalog: &'a Catalog) -> MatchResult<'a> {
        if needle.trim().is_empty() || catalog.is_empty() {
            return MatchResult::NotFound {
                rejected: Vec::new(),
            };
        }

        let keys: Vec<&str> = catalog.keys().collect();
        let candidates = self.scorer.rank(needle, &keys, self.limit);

        let mut rejected = Vec::new();
        for candidate in candidates {
            if contains_title(candidate.key, needle) {
                if let Some(item) = catalog.get(candidate.key) {
                    return MatchResult::Found(item);
                }
            }
            rejected.push(candidate.key.to_string());
        }

        MatchResult::NotFound { rejected }
    }
}
