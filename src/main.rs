use std::io;
use std::process::ExitCode;
use wordle_assist::cli::{CliInterface, parse_cli};
use wordle_assist::config::{FrontEnd, Settings};
use wordle_assist::game_state::{SolverInterface, run_rounds};
use wordle_assist::logging::init_logging;
use wordle_assist::session::Session;
use wordle_assist::tui::TuiInterface;

fn main() -> ExitCode {
    let cli = parse_cli();
    let settings = Settings::from_cli(&cli);

    // The TUI owns the terminal, so without a log file it runs silent
    let log_result = match (&settings.log_path, settings.front_end) {
        (Some(path), _) => init_logging(Some(path.as_path())),
        (None, FrontEnd::Plain) => init_logging(None),
        (None, FrontEnd::Tui) => Ok(()),
    };
    if let Err(e) = log_result {
        eprintln!("Logging disabled: {e}");
    }

    let corpus = match settings.load_corpus() {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!(
                "Failed to load word list from {}: {e}",
                settings.corpus_source
            );
            return ExitCode::FAILURE;
        }
    };
    log::info!("Word list source: {}", settings.corpus_source);

    let mut session = Session::new(corpus);
    let mut interface: Box<dyn SolverInterface> = match settings.front_end {
        FrontEnd::Plain => Box::new(CliInterface::new(io::stdin().lock())),
        FrontEnd::Tui => match TuiInterface::new() {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                eprintln!("Try --plain for the line-based interface.");
                return ExitCode::FAILURE;
            }
        },
    };

    run_rounds(
        &mut session,
        interface.as_mut(),
        settings.suggestion_limit,
        || settings.load_corpus(),
    );
    ExitCode::SUCCESS
}
