use std::collections::BTreeSet;

/// A catalog key together with its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub key: &'a str,
    pub score: u8,
}

/// Similarity primitive used by the resolver.
///
/// Only [`Scorer::score`] is required. The provided [`Scorer::rank`] keeps
/// candidates in their given order when scores are equal, so ties go to the
/// key inserted first into the catalog.
pub trait Scorer {
    /// Similarity of `choice` to `query`, from 0 (unrelated) to 100 (same).
    fn score(&self, query: &str, choice: &str) -> u8;

    /// The best `limit` choices, highest score first.
    ///
    /// Zero scores are kept: a query without letters or digits scores 0
    /// against everything and the containment check still decides.
    fn rank<'a>(&self, query: &str, choices: &[&'a str], limit: usize) -> Vec<Candidate<'a>> {
        let mut candidates: Vec<Candidate<'a>> = choices
            .iter()
            .map(|&key| Candidate {
                key,
                score: self.score(query, key),
            })
            .collect();

        // stable: equal scores keep catalog order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates.truncate(limit);
        candidates
    }
}

/// Edit-distance scorer that ignores case, punctuation and word order.
///
/// The score is the better of the plain ratio of both processed strings and
/// the token-set ratio, which compares the shared words against each side's
/// leftovers. Ratios are normalized Levenshtein similarities.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSetScorer;

impl Scorer for TokenSetScorer {
    fn score(&self, query: &str, choice: &str) -> u8 {
        let query = process(query);
        let choice = process(choice);
        if query.is_empty() || choice.is_empty() {
            return 0;
        }

        let best = ratio(&query, &choice).max(token_set_ratio(&query, &choice));
        (best * 100.0).round() as u8
    }
}

fn process(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(a, b)
}

fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let shared = join(tokens_a.intersection(&tokens_b).copied());
    let only_a = join(tokens_a.difference(&tokens_b).copied());
    let only_b = join(tokens_b.difference(&tokens_a).copied());

    let combined_a = format!("{shared} {only_a}").trim().to_string();
    let combined_b = format!("{shared} {only_b}").trim().to_string();

    ratio(&shared, &combined_a)
        .max(ratio(&shared, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

fn join<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    tokens.collect::<Vec<_>>().join(" ")
}
