//! Greedy letter-coverage ranking of candidate words.
//!
//! A guess scores one point for every distinct letter it shares with every *other* candidate.
//! Words that share many letters with the rest of the set are likely to produce informative
//! feedback. This is a cheap stand-in for expected-entropy scoring.

use crate::corpus::Word;
use crate::engine::CandidateSet;
use crate::info_log;
use std::fmt;

/// How many suggestions the front ends show by default.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedWord {
    pub word: Word,
    pub score: u32,
}

impl fmt::Display for RankedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.word, self.score)
    }
}

/// Scores the candidate at `index` against every other entry of the set.
///
/// Entries are compared by position, so two entries with the same spelling still count against
/// each other.
#[must_use]
pub fn score_candidate(candidates: &CandidateSet, index: usize) -> u32 {
    let Some(guess) = candidates.words().get(index) else {
        return 0;
    };
    let guess_mask = guess.letter_mask();
    candidates
        .iter()
        .enumerate()
        .filter(|&(other, _)| other != index)
        .map(|(_, answer)| (guess_mask & answer.letter_mask()).count_ones())
        .sum()
}

/// Ranks every candidate, highest score first.
///
/// The sort is stable, so candidates with equal scores keep their order from the set.
#[must_use]
pub fn rank(candidates: &CandidateSet) -> Vec<RankedWord> {
    let mut ranked: Vec<RankedWord> = candidates
        .iter()
        .enumerate()
        .map(|(index, word)| RankedWord {
            word: word.clone(),
            score: score_candidate(candidates, index),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    if let Some(best) = ranked.first() {
        info_log!("rank() - {} candidates, best {}", ranked.len(), best);
    }
    ranked
}

/// The first `limit` entries of a ranking.
#[must_use]
pub fn top(ranked: &[RankedWord], limit: usize) -> &[RankedWord] {
    &ranked[..limit.min(ranked.len())]
}
