//! Round state for one solving session.
//!
//! The session owns the corpus, the accumulated constraints and the shrinking candidate set.
//! Filtering and ranking themselves are pure functions in [`crate::engine`] and
//! [`crate::ranker`]; the session only decides which set they run on and keeps the result.
//!
//! # State Machine
//! - `Loaded` → `Filtering` when a non-empty batch of constraints is applied
//! - `Loaded`/`Filtering` → `Ranked` on a rank request
//! - any state → `Loaded` on [`Session::reset`] or [`Session::reload`]

use crate::constraint::{Constraint, ConstraintBatch};
use crate::corpus::WordCorpus;
use crate::engine::{self, CandidateSet};
use crate::info_log;
use crate::ranker::{self, RankedWord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Full corpus, no constraints.
    Loaded,
    /// Constraints applied, ranking not yet computed for the current set.
    Filtering,
    /// Ranking available for the current set.
    Ranked,
}

#[derive(Debug)]
pub struct Session {
    corpus: WordCorpus,
    candidates: CandidateSet,
    constraints: Vec<Constraint>,
    ranked: Option<Vec<RankedWord>>,
}

impl Session {
    #[must_use]
    pub fn new(corpus: WordCorpus) -> Self {
        let candidates = CandidateSet::from_corpus(&corpus);
        Self {
            corpus,
            candidates,
            constraints: Vec::new(),
            ranked: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.ranked.is_some() {
            SessionState::Ranked
        } else if self.constraints.is_empty() {
            SessionState::Loaded
        } else {
            SessionState::Filtering
        }
    }

    #[must_use]
    pub fn corpus(&self) -> &WordCorpus {
        &self.corpus
    }

    #[must_use]
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Every distinct constraint applied since the last reset, in the order first seen.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The ranking of the current candidate set, if one has been computed.
    #[must_use]
    pub fn ranked(&self) -> Option<&[RankedWord]> {
        self.ranked.as_deref()
    }

    pub fn apply_batch(&mut self, batch: &ConstraintBatch) -> &CandidateSet {
        self.apply_constraints(&batch.constraints())
    }

    /// Narrows the candidate set. Constraints can only be added, never retracted.
    pub fn apply_constraints(&mut self, constraints: &[Constraint]) -> &CandidateSet {
        if constraints.is_empty() {
            return &self.candidates;
        }
        let before = self.candidates.len();
        self.candidates = engine::apply(&self.candidates, constraints);
        for constraint in constraints.iter().map(|c| c.normalised()) {
            if !self.constraints.contains(&constraint) {
                self.constraints.push(constraint);
            }
        }
        self.ranked = None;
        info_log!(
            "Session::apply_constraints() - {} -> {} candidates ({} constraints active)",
            before,
            self.candidates.len(),
            self.constraints.len()
        );
        &self.candidates
    }

    /// Ranks the current candidate set, reusing the previous ranking if nothing changed.
    pub fn rank(&mut self) -> &[RankedWord] {
        self.ranked
            .get_or_insert_with(|| ranker::rank(&self.candidates))
    }

    /// Discards constraints and rankings and restores the full corpus.
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::from_corpus(&self.corpus);
        self.constraints.clear();
        self.ranked = None;
        log::info!("Session reset to {} words", self.corpus.len());
    }

    /// Replaces the corpus with a freshly loaded one, then resets.
    pub fn reload(&mut self, corpus: WordCorpus) {
        self.corpus = corpus;
        self.reset();
    }
}
