//! Weighted synonym candidates.
//!
//! A [`CandidateSet`] is the ordered, deduplicated union of the lemma names
//! of a word's senses. Candidates keep the database's sense order and are
//! weighted geometrically: the `i`-th candidate gets `2^-(i+1)` and the last
//! one takes whatever is left, so the weights always sum to 1 and the most
//! common sense is the most likely pick.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use reword::analysis::candidate::CandidateSet;
//! use reword::lexicon::Sense;
//!
//! let senses = vec![
//!     Sense::new("n.0", vec!["cat".into(), "true_cat".into()]),
//!     Sense::new("n.1", vec!["guy".into(), "Cat".into()]),
//! ];
//! let candidates = CandidateSet::collect(&senses);
//! assert_eq!(candidates.candidates(), ["cat", "true cat", "guy"]);
//! assert_eq!(candidates.weights(), [0.5, 0.25, 0.25]);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! assert!(candidates.sample(&mut rng).is_some());
//! ```

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::lexicon::Sense;

/// Ordered candidate replacements with their selection weights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateSet {
    candidates: Vec<String>,
    weights: Vec<f64>,
}

impl CandidateSet {
    /// Collect candidates from senses in database order.
    ///
    /// Names are lower-cased and `_` joiners become spaces before
    /// deduplication.
    pub fn collect(senses: &[Sense]) -> Self {
        Self::from_candidates(
            senses
                .iter()
                .flat_map(|sense| sense.lemmas.iter())
                .map(|lemma| lemma.replace('_', " ").to_lowercase()),
        )
    }

    /// Build a set from already ranked candidates, dropping duplicates and
    /// empty strings.
    pub fn from_candidates<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for candidate in candidates {
            let candidate = candidate.into();
            if !candidate.is_empty() && !unique.contains(&candidate) {
                unique.push(candidate);
            }
        }
        let weights = geometric_weights(unique.len());
        CandidateSet {
            candidates: unique,
            weights,
        }
    }

    /// Candidates in rank order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Weights parallel to [`candidates`](Self::candidates).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Iterate over `(candidate, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.candidates
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
    }

    /// Draw one candidate according to the weights.
    ///
    /// Returns `None` only for an empty set. A single candidate is returned
    /// without touching `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.candidates.len() <= 1 {
            return self.candidates.first().map(String::as_str);
        }

        let index = WeightedIndex::new(&self.weights).ok()?;
        self.candidates.get(index.sample(rng)).map(String::as_str)
    }
}

/// Geometric weights for `n` ranked candidates.
///
/// Candidate `i` gets `2^-(i+1)` except the last, which receives the
/// remainder. A single candidate gets 1.0.
pub fn geometric_weights(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let mut weights = Vec::with_capacity(n);
    let mut assigned = 0.0;
    let mut weight = 0.5;
    for _ in 0..n - 1 {
        weights.push(weight);
        assigned += weight;
        weight /= 2.0;
    }
    weights.push(1.0 - assigned);
    weights
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_geometric_weights() {
        assert!(geometric_weights(0).is_empty());
        assert_eq!(geometric_weights(1), vec![1.0]);
        assert_eq!(geometric_weights(2), vec![0.5, 0.5]);
        assert_eq!(geometric_weights(4), vec![0.5, 0.25, 0.125, 0.125]);
    }

    #[test]
    fn test_weights_sum_to_one() {
        for n in 1..40 {
            let sum: f64 = geometric_weights(n).iter().sum();
            assert!((sum - 1.0).abs() < 1e-12, "n = {n}, sum = {sum}");
        }
    }

    #[test]
    fn test_collect_dedupes_after_normalizing() {
        let senses = vec![
            Sense::new("a", vec!["Run_Across".into(), "run".into()]),
            Sense::new("b", vec!["run across".into(), "RUN".into(), "dash".into()]),
        ];
        let set = CandidateSet::collect(&senses);
        assert_eq!(set.candidates(), ["run across", "run", "dash"]);
    }

    #[test]
    fn test_empty_set() {
        let set = CandidateSet::collect(&[]);
        assert!(set.is_empty());
        assert!(set.weights().is_empty());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(set.sample(&mut rng), None);
    }

    #[test]
    fn test_single_candidate_always_chosen() {
        let set = CandidateSet::from_candidates(["only"]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(set.sample(&mut rng), Some("only"));
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let set = CandidateSet::from_candidates(["a", "b", "c", "d", "e"]);
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| set.sample(&mut rng).unwrap().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn test_sampling_favours_first_candidate() {
        let set = CandidateSet::from_candidates(["first", "second", "third"]);
        let mut rng = StdRng::seed_from_u64(3);
        let firsts = (0..2000)
            .filter(|_| set.sample(&mut rng) == Some("first"))
            .count();
        // Expected 1000; allow generous slack.
        assert!((850..1150).contains(&firsts), "firsts = {firsts}");
    }

    #[test]
    fn test_sampling_frequencies_follow_weights() {
        let set = CandidateSet::from_candidates(["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize; 4];
        for _ in 0..8000 {
            let pick = set.sample(&mut rng).unwrap();
            let rank = set.candidates().iter().position(|c| c == pick).unwrap();
            counts[rank] += 1;
        }
        for (count, weight) in counts.iter().zip(set.weights()) {
            let expected = weight * 8000.0;
            assert!(
                (*count as f64 - expected).abs() < expected * 0.15,
                "counts = {counts:?}"
            );
        }
    }
}
