//! Runtime settings resolved from command-line arguments, the environment and the user's
//! data directories.

use crate::cli::Cli;
use crate::corpus::{CorpusError, LinePolicy, WordCorpus};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// Environment variable naming a word list file, consulted when `--input` is absent.
pub const WORDS_ENV_VAR: &str = "WORDLE_ASSIST_WORDS";

const APP_DIR: &str = "wordle-assist";
const WORDS_FILE: &str = "words.txt";
const LOG_FILE: &str = "wordle-assist.log";

/// Where the word list comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorpusSource {
    File(PathBuf),
    Embedded,
}

impl CorpusSource {
    pub fn load(&self, policy: LinePolicy) -> Result<WordCorpus, CorpusError> {
        match self {
            Self::File(path) => WordCorpus::from_file(path, policy),
            Self::Embedded => Ok(WordCorpus::embedded()),
        }
    }
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "'{}'", path.display()),
            Self::Embedded => f.write_str("the built-in word list"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontEnd {
    Tui,
    Plain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub corpus_source: CorpusSource,
    pub line_policy: LinePolicy,
    pub suggestion_limit: usize,
    pub front_end: FrontEnd,
    pub log_path: Option<PathBuf>,
}

impl Settings {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(
            cli,
            std::env::var_os(WORDS_ENV_VAR),
            user_words_path(),
            default_log_path(),
        )
    }

    /// Corpus source precedence: `--input`, then the environment variable, then a word list in
    /// the user's data directory, then the built-in list.
    fn resolve(
        cli: &Cli,
        env_words: Option<OsString>,
        user_words: Option<PathBuf>,
        default_log: Option<PathBuf>,
    ) -> Self {
        let corpus_source = cli
            .wordbank_path
            .clone()
            .or_else(|| env_words.filter(|p| !p.is_empty()).map(PathBuf::from))
            .or(user_words)
            .map_or(CorpusSource::Embedded, CorpusSource::File);

        Self {
            corpus_source,
            line_policy: if cli.strict {
                LinePolicy::Strict
            } else {
                LinePolicy::Skip
            },
            suggestion_limit: cli.limit.max(1),
            front_end: if cli.plain {
                FrontEnd::Plain
            } else {
                FrontEnd::Tui
            },
            log_path: cli.log_file.clone().or(default_log),
        }
    }

    pub fn load_corpus(&self) -> Result<WordCorpus, CorpusError> {
        self.corpus_source.load(self.line_policy)
    }
}

/// `<data dir>/wordle-assist/words.txt`, if that file exists.
#[must_use]
pub fn user_words_path() -> Option<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(WORDS_FILE))
        .filter(|path| path.is_file())
}

#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}
