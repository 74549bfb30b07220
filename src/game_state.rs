use crate::constraint::ConstraintBatch;
use crate::corpus::{CorpusError, WordCorpus};
use crate::debug_log;
use crate::ranker::{self, RankedWord};
use crate::session::Session;

/// What the user asked for on the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Apply this round's feedback and refresh the suggestions.
    Apply(ConstraintBatch),
    /// Reload the word list and drop every constraint.
    Refresh,
    Exit,
}

/// Ranked suggestions for the current candidate set, already truncated for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub candidate_count: usize,
    pub entries: Vec<RankedWord>,
}

impl Suggestions {
    /// Ranks the session's current candidates and keeps the top `limit`.
    pub fn from_session(session: &mut Session, limit: usize) -> Self {
        let candidate_count = session.candidates().len();
        let entries = ranker::top(session.rank(), limit).to_vec();
        Self {
            candidate_count,
            entries,
        }
    }

    /// `word:score` lines, best first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

/// Seam between the round loop and a front end.
pub trait SolverInterface {
    fn display_loaded(&mut self, word_count: usize);
    /// Returns `None` when the input was unusable and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_suggestions(&mut self, suggestions: &Suggestions);
    fn display_no_candidates_message(&mut self);
    fn display_reset_message(&mut self, word_count: usize);
    fn display_exit_message(&mut self);
}

/// Drives rounds of feedback → filter → rank → present until the user exits.
///
/// `reload` is called on refresh to re-read the word list. If it fails the session falls back to
/// its in-memory corpus, so a refresh always succeeds.
pub fn run_rounds<I, F>(session: &mut Session, interface: &mut I, limit: usize, mut reload: F)
where
    I: SolverInterface + ?Sized,
    F: FnMut() -> Result<WordCorpus, CorpusError>,
{
    interface.display_loaded(session.corpus().len());
    show_suggestions(session, interface, limit);

    let mut round = 0usize;
    loop {
        let Some(action) = interface.read_action() else {
            debug_log!("run_rounds() - No usable input, asking again");
            continue;
        };

        match action {
            UserAction::Apply(batch) => {
                round += 1;
                log::info!(
                    "Round {round}: applying {} constraints",
                    batch.constraints().len()
                );
                session.apply_batch(&batch);
                show_suggestions(session, interface, limit);
            }
            UserAction::Refresh => {
                match reload() {
                    Ok(corpus) => session.reload(corpus),
                    Err(e) => {
                        log::warn!("Reloading the word list failed, keeping the current one: {e}");
                        session.reset();
                    }
                }
                round = 0;
                interface.display_reset_message(session.corpus().len());
                show_suggestions(session, interface, limit);
            }
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
        }
    }
}

fn show_suggestions<I>(session: &mut Session, interface: &mut I, limit: usize)
where
    I: SolverInterface + ?Sized,
{
    if session.candidates().is_empty() {
        interface.display_no_candidates_message();
    } else {
        let suggestions = Suggestions::from_session(session, limit);
        interface.display_suggestions(&suggestions);
    }
}
