// Library interface for wordle-assist
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod constraint;
pub mod corpus;
pub mod engine;
pub mod game_state;
pub mod logging;
pub mod ranker;
pub mod session;
pub mod tui;

// Re-export commonly used items for easier testing
pub use constraint::{Constraint, ConstraintBatch};
pub use corpus::{CorpusError, LinePolicy, Position, Word, WordCorpus};
pub use engine::{CandidateSet, apply};
pub use game_state::{SolverInterface, Suggestions, UserAction, run_rounds};
pub use ranker::{RankedWord, rank, top};
pub use session::{Session, SessionState};
