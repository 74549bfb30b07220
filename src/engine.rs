use crate::constraint::Constraint;
use crate::corpus::{Word, WordCorpus};
use crate::debug_log;

/// The words still consistent with every constraint applied so far, in corpus order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    #[must_use]
    pub fn from_corpus(corpus: &WordCorpus) -> Self {
        Self {
            words: corpus.words().to_vec(),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.words.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<Word>> for CandidateSet {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Keeps the candidates that satisfy every constraint.
///
/// Constraints combine with logical AND, so their order never changes the result. An empty
/// constraint list returns the input unchanged; an empty result is a valid outcome.
#[must_use]
pub fn apply(candidates: &CandidateSet, constraints: &[Constraint]) -> CandidateSet {
    if constraints.is_empty() {
        return candidates.clone();
    }
    let filtered: CandidateSet = candidates
        .iter()
        .filter(|word| constraints.iter().all(|c| c.is_satisfied_by(word)))
        .cloned()
        .collect();
    debug_log!(
        "apply() - {} constraints narrowed {} candidates to {}",
        constraints.len(),
        candidates.len(),
        filtered.len()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Position;

    fn candidates(words: &[&str]) -> CandidateSet {
        CandidateSet::from_corpus(&WordCorpus::from_words(words).unwrap())
    }

    fn pos(n: usize) -> Position {
        Position::new(n).unwrap()
    }

    fn sample_constraints() -> Vec<Constraint> {
        vec![
            Constraint::ExcludeLetter('c'),
            Constraint::ExcludeLetter('o'),
            Constraint::PositionMatch(pos(5), 'e'),
            Constraint::PositionMatch(pos(3), 'a'),
            Constraint::PositionExclude(pos(1), 't'),
            Constraint::PositionExclude(pos(2), 'l'),
            Constraint::PositionExclude(pos(4), 'r'),
        ]
    }

    #[test]
    fn test_empty_constraints_is_identity() {
        let input = candidates(&["crane", "slate", "plate", "grate"]);
        let result = apply(&input, &[]);
        assert_eq!(result, input);
    }

    #[test]
    fn test_exclude_letter_can_empty_the_set() {
        // All three words contain an 'a'
        let input = candidates(&["apple", "mango", "grape"]);
        let result = apply(&input, &[Constraint::ExcludeLetter('a')]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_uppercase_exclude_matches_lowercase() {
        let input = candidates(&["apple", "moist"]);
        let lower = apply(&input, &[Constraint::ExcludeLetter('a')]);
        let upper = apply(&input, &[Constraint::ExcludeLetter('A')]);
        assert_eq!(upper.to_strings(), vec!["moist"]);
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_exclude_letter_keeps_words_without_it() {
        let input = candidates(&["apple", "mango", "grape"]);
        let result = apply(&input, &[Constraint::ExcludeLetter('p')]);
        assert_eq!(result.to_strings(), vec!["mango"]);
    }

    #[test]
    fn test_position_match_filters() {
        let input = candidates(&["crane", "slate", "plate", "grate", "moist"]);
        let result = apply(&input, &[Constraint::PositionMatch(pos(5), 'e')]);
        assert_eq!(result.to_strings(), vec!["crane", "slate", "plate", "grate"]);
    }

    #[test]
    fn test_position_exclude_filters() {
        let input = candidates(&["crane", "slate", "plate", "grate", "trace"]);
        let result = apply(&input, &[Constraint::PositionExclude(pos(1), 'c')]);
        assert_eq!(result.to_strings(), vec!["trace"]);
    }

    #[test]
    fn test_order_of_constraints_does_not_matter() {
        let input = candidates(&[
            "crane", "slate", "plate", "grate", "trace", "spare", "blame", "flake", "snare",
        ]);
        let constraints = sample_constraints();
        let expected = apply(&input, &constraints);

        // Every pair, both ways round
        for a in &constraints {
            for b in &constraints {
                assert_eq!(apply(&input, &[*a, *b]), apply(&input, &[*b, *a]));
            }
        }

        let mut reversed = constraints.clone();
        reversed.reverse();
        assert_eq!(apply(&input, &reversed), expected);
    }

    #[test]
    fn test_each_constraint_never_grows_the_set() {
        let input = candidates(&["crane", "slate", "plate", "grate", "trace", "spare"]);
        for constraint in sample_constraints() {
            let result = apply(&input, &[constraint]);
            assert!(result.len() <= input.len(), "{constraint} grew the set");
        }
    }

    #[test]
    fn test_applying_in_steps_matches_applying_at_once() {
        let input = candidates(&["crane", "slate", "plate", "grate", "trace", "spare"]);
        let constraints = sample_constraints();
        let (first, second) = constraints.split_at(3);
        let stepwise = apply(&apply(&input, first), second);
        assert_eq!(stepwise, apply(&input, &constraints));
    }

    #[test]
    fn test_contradictory_constraints_yield_empty_set() {
        let input = candidates(&["apple", "about", "crane"]);
        let result = apply(
            &input,
            &[
                Constraint::PositionMatch(pos(1), 'a'),
                Constraint::ExcludeLetter('a'),
            ],
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_duplicate_constraints_are_harmless() {
        let input = candidates(&["crane", "slate", "plate"]);
        let once = apply(&input, &[Constraint::ExcludeLetter('c')]);
        let twice = apply(
            &input,
            &[Constraint::ExcludeLetter('c'), Constraint::ExcludeLetter('c')],
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filtering_an_empty_set() {
        let result = apply(&CandidateSet::default(), &[Constraint::ExcludeLetter('a')]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_apply_does_not_modify_input() {
        let input = candidates(&["crane", "slate"]);
        let snapshot = input.clone();
        let _ = apply(&input, &[Constraint::ExcludeLetter('c')]);
        assert_eq!(input, snapshot);
    }
}
