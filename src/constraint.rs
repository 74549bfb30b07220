use crate::corpus::{Position, WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Number of attempt rows a feedback batch can carry misplaced letters for.
pub const MAX_ATTEMPT_ROWS: usize = 6;

/// A single piece of feedback restricting which words remain plausible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The letter is not in the word.
    ExcludeLetter(char),
    /// The letter is at exactly this position.
    PositionMatch(Position, char),
    /// The letter is in the word, but not at this position.
    PositionExclude(Position, char),
}

impl Constraint {
    /// The same constraint with its letter lowercased to match corpus words.
    #[must_use]
    pub fn normalised(self) -> Self {
        match self {
            Self::ExcludeLetter(c) => Self::ExcludeLetter(c.to_ascii_lowercase()),
            Self::PositionMatch(pos, c) => Self::PositionMatch(pos, c.to_ascii_lowercase()),
            Self::PositionExclude(pos, c) => Self::PositionExclude(pos, c.to_ascii_lowercase()),
        }
    }

    /// Returns `true` iff `word` satisfies this constraint. Letter case is ignored.
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        match self.normalised() {
            Self::ExcludeLetter(letter) => !word.contains(letter),
            Self::PositionMatch(pos, letter) => word.letter(pos) == letter,
            Self::PositionExclude(pos, letter) => {
                word.contains(letter) && word.letter(pos) != letter
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExcludeLetter(letter) => write!(f, "no '{letter}'"),
            Self::PositionMatch(pos, letter) => write!(f, "'{letter}' at {pos}"),
            Self::PositionExclude(pos, letter) => write!(f, "'{letter}' not at {pos}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("all 6 misplaced-letter rows are already filled")]
    RowsFull,
    #[error("attempt row {0} is out of range (1-6)")]
    RowOutOfRange(usize),
}

/// One letter per position, `None` where nothing was entered.
pub type LetterRow = [Option<char>; WORD_LENGTH];

/// Feedback gathered in one round, before it is turned into [`Constraint`]s.
///
/// Mirrors the input form: a free list of letters known to be absent, one row of exact (green)
/// letters, and up to six rows of misplaced (orange) letters. Letters are stored lowercase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstraintBatch {
    ignored: Vec<char>,
    exact: LetterRow,
    misplaced: [LetterRow; MAX_ATTEMPT_ROWS],
}

impl ConstraintBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every letter in `letters` to the ignored set. Whitespace and repeats are dropped.
    pub fn ignore(&mut self, letters: &str) -> &mut Self {
        for letter in letters.chars().filter(|c| !c.is_whitespace()) {
            let letter = letter.to_ascii_lowercase();
            if !self.ignored.contains(&letter) {
                self.ignored.push(letter);
            }
        }
        self
    }

    pub fn set_exact(&mut self, pos: Position, letter: Option<char>) -> &mut Self {
        self.exact[pos.index()] = letter.map(|c| c.to_ascii_lowercase());
        self
    }

    /// Sets the misplaced letter for a 1-based attempt `row`.
    pub fn set_misplaced(
        &mut self,
        row: usize,
        pos: Position,
        letter: Option<char>,
    ) -> Result<&mut Self, BatchError> {
        let slot = row
            .checked_sub(1)
            .and_then(|index| self.misplaced.get_mut(index))
            .ok_or(BatchError::RowOutOfRange(row))?;
        slot[pos.index()] = letter.map(|c| c.to_ascii_lowercase());
        Ok(self)
    }

    /// Fills the first attempt row that has nothing in it yet.
    pub fn push_misplaced_row(&mut self, row: LetterRow) -> Result<&mut Self, BatchError> {
        let slot = self
            .misplaced
            .iter_mut()
            .find(|existing| existing.iter().all(Option::is_none))
            .ok_or(BatchError::RowsFull)?;
        *slot = row.map(|letter| letter.map(|c| c.to_ascii_lowercase()));
        Ok(self)
    }

    /// Builds a batch straight from a filled-in form.
    #[must_use]
    pub fn from_rows(
        ignored: &str,
        exact: LetterRow,
        misplaced: [LetterRow; MAX_ATTEMPT_ROWS],
    ) -> Self {
        let lower = |row: LetterRow| row.map(|letter| letter.map(|c| c.to_ascii_lowercase()));
        let mut batch = Self {
            ignored: Vec::new(),
            exact: lower(exact),
            misplaced: misplaced.map(lower),
        };
        batch.ignore(ignored);
        batch
    }

    #[must_use]
    pub fn ignored(&self) -> &[char] {
        &self.ignored
    }

    #[must_use]
    pub fn exact(&self) -> &LetterRow {
        &self.exact
    }

    #[must_use]
    pub fn misplaced(&self) -> &[LetterRow; MAX_ATTEMPT_ROWS] {
        &self.misplaced
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
            && self.exact.iter().all(Option::is_none)
            && self.misplaced.iter().flatten().all(Option::is_none)
    }

    /// Normalises the batch: ignored letters first, then exact letters by position, then
    /// misplaced letters row by row.
    #[must_use]
    pub fn constraints(&self) -> Vec<Constraint> {
        let ignored = self.ignored.iter().map(|&c| Constraint::ExcludeLetter(c));
        let exact = located(&self.exact).map(|(pos, c)| Constraint::PositionMatch(pos, c));
        let misplaced = self
            .misplaced
            .iter()
            .flat_map(located)
            .map(|(pos, c)| Constraint::PositionExclude(pos, c));
        ignored.chain(exact).chain(misplaced).collect()
    }
}

fn located(row: &LetterRow) -> impl Iterator<Item = (Position, char)> + '_ {
    Position::ALL
        .into_iter()
        .zip(row.iter())
        .filter_map(|(pos, letter)| letter.map(|c| (pos, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pos(n: usize) -> Position {
        Position::new(n).unwrap()
    }

    #[test]
    fn test_exclude_letter() {
        let constraint = Constraint::ExcludeLetter('a');
        assert!(!constraint.is_satisfied_by(&word("crane")));
        assert!(constraint.is_satisfied_by(&word("moist")));
    }

    #[test]
    fn test_uppercase_letters_match_lowercase_words() {
        assert!(!Constraint::ExcludeLetter('A').is_satisfied_by(&word("crane")));
        assert!(Constraint::PositionMatch(pos(1), 'C').is_satisfied_by(&word("crane")));
        assert!(!Constraint::PositionExclude(pos(1), 'C').is_satisfied_by(&word("crane")));
        assert!(Constraint::PositionExclude(pos(2), 'C').is_satisfied_by(&word("crane")));
        assert_eq!(
            Constraint::PositionMatch(pos(3), 'A').normalised(),
            Constraint::PositionMatch(pos(3), 'a')
        );
    }

    #[test]
    fn test_position_match() {
        let constraint = Constraint::PositionMatch(pos(5), 'e');
        assert!(constraint.is_satisfied_by(&word("crane")));
        assert!(!constraint.is_satisfied_by(&word("eight")));
    }

    #[test]
    fn test_position_exclude_requires_presence_elsewhere() {
        let constraint = Constraint::PositionExclude(pos(1), 'c');
        // 'c' at position 1
        assert!(!constraint.is_satisfied_by(&word("crane")));
        // 'c' elsewhere
        assert!(constraint.is_satisfied_by(&word("trace")));
        // no 'c' at all
        assert!(!constraint.is_satisfied_by(&word("slate")));
    }

    #[test]
    fn test_position_exclude_does_not_count_repeats() {
        // One misplaced 'e' is satisfied by words with one or more other 'e's
        let constraint = Constraint::PositionExclude(pos(1), 'e');
        assert!(constraint.is_satisfied_by(&word("steep")));
        assert!(constraint.is_satisfied_by(&word("crane")));
    }

    #[test]
    fn test_constraint_display() {
        assert_eq!(Constraint::ExcludeLetter('q').to_string(), "no 'q'");
        assert_eq!(Constraint::PositionMatch(pos(2), 'r').to_string(), "'r' at 2");
        assert_eq!(
            Constraint::PositionExclude(pos(4), 'n').to_string(),
            "'n' not at 4"
        );
    }

    #[test]
    fn test_empty_batch() {
        let batch = ConstraintBatch::new();
        assert!(batch.is_empty());
        assert!(batch.constraints().is_empty());
    }

    #[test]
    fn test_ignore_normalises_letters() {
        let mut batch = ConstraintBatch::new();
        batch.ignore("A b\tA");
        assert_eq!(batch.ignored(), &['a', 'b']);
        assert!(!batch.is_empty());
    }

    #[test]
    fn test_constraints_order() {
        let mut batch = ConstraintBatch::new();
        batch.ignore("xz");
        batch.set_exact(pos(5), Some('E'));
        batch.set_exact(pos(2), Some('r'));
        batch.set_misplaced(2, pos(1), Some('t')).unwrap();
        batch.set_misplaced(1, pos(3), Some('a')).unwrap();

        assert_eq!(
            batch.constraints(),
            vec![
                Constraint::ExcludeLetter('x'),
                Constraint::ExcludeLetter('z'),
                Constraint::PositionMatch(pos(2), 'r'),
                Constraint::PositionMatch(pos(5), 'e'),
                Constraint::PositionExclude(pos(3), 'a'),
                Constraint::PositionExclude(pos(1), 't'),
            ]
        );
    }

    #[test]
    fn test_set_misplaced_row_bounds() {
        let mut batch = ConstraintBatch::new();
        assert_eq!(
            batch.set_misplaced(0, pos(1), Some('a')).unwrap_err(),
            BatchError::RowOutOfRange(0)
        );
        assert_eq!(
            batch.set_misplaced(7, pos(1), Some('a')).unwrap_err(),
            BatchError::RowOutOfRange(7)
        );
        assert!(batch.set_misplaced(6, pos(1), Some('a')).is_ok());
    }

    #[test]
    fn test_push_misplaced_row_fills_in_order() {
        let mut batch = ConstraintBatch::new();
        let row = [Some('a'), None, None, None, None];
        for _ in 0..MAX_ATTEMPT_ROWS {
            batch.push_misplaced_row(row).unwrap();
        }
        assert_eq!(batch.push_misplaced_row(row).unwrap_err(), BatchError::RowsFull);
        assert!(batch.misplaced().iter().all(|r| r[0] == Some('a')));
    }

    #[test]
    fn test_clearing_a_cell_removes_its_constraint() {
        let mut batch = ConstraintBatch::new();
        batch.set_exact(pos(1), Some('c'));
        batch.set_exact(pos(1), None);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_from_rows_matches_builder() {
        let mut misplaced = [[None; WORD_LENGTH]; MAX_ATTEMPT_ROWS];
        misplaced[2][0] = Some('R');
        let batch =
            ConstraintBatch::from_rows("q z", [None, None, Some('A'), None, None], misplaced);

        let mut expected = ConstraintBatch::new();
        expected.ignore("qz").set_exact(pos(3), Some('a'));
        expected.set_misplaced(3, pos(1), Some('r')).unwrap();
        assert_eq!(batch, expected);
    }
}
