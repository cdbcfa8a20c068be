//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: spell words from the letters of a root word.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use word_scramble::{
    commands::{check_word, find_solutions, print_survey_statistics, run_simple, run_survey},
    core::Validator,
    dictionary::Dictionary,
    logging::{self, LogTarget},
    output::{print_check_result, print_solutions},
    wordlists::{WordBank, WordSource},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: newline-delimited file (default: embedded list)
    #[arg(short = 'w', long, global = true, env = "WORD_SCRAMBLE_WORDS")]
    words: Option<PathBuf>,

    /// Dictionary for the spell checker: newline-delimited file (default: embedded)
    #[arg(short = 'd', long, global = true, env = "WORD_SCRAMBLE_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Write logs to rotating files in this directory
    #[arg(long, global = true, env = "WORD_SCRAMBLE_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check a single candidate against a root word
    Check {
        /// The word to check
        candidate: String,

        /// Root word the candidate is spelled from
        #[arg(short, long)]
        root: String,

        /// Words already used, comma separated
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// List every dictionary word spellable from a root word
    Solutions {
        /// Root word
        root: String,
    },

    /// Count solutions for every root word in the word list
    Survey {
        /// Limit number of root words to survey
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the root word bank from the -w flag
fn load_bank(path: Option<&PathBuf>) -> Result<WordBank> {
    let source = path.map_or(WordSource::Embedded, |p| WordSource::File(p.clone()));
    Ok(WordBank::load(&source)?)
}

/// Load the spell checker dictionary from the -d flag
fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => Ok(Dictionary::load(path)?),
        None => Ok(Dictionary::embedded()),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = match (&cli.log_dir, &command) {
        (Some(dir), _) => LogTarget::Directory(dir.clone()),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    let _logger = logging::init(&target).context("Failed to start logger")?;

    let validator = Validator::new(load_dictionary(cli.dictionary.as_ref())?);

    match command {
        Commands::Play => {
            let bank = load_bank(cli.words.as_ref())?;
            run_play_command(&bank, &validator)?;
        }
        Commands::Simple => {
            let bank = load_bank(cli.words.as_ref())?;
            run_simple(&bank, &validator)?;
        }
        Commands::Check {
            candidate,
            root,
            used,
        } => return run_check_command(&candidate, &root, &used, &validator),
        Commands::Solutions { root } => {
            let result = find_solutions(&root, validator.checker());
            print_solutions(&result);
        }
        Commands::Survey { limit } => {
            let bank = load_bank(cli.words.as_ref())?;
            let stats = run_survey(&bank, validator.checker(), limit);
            print_survey_statistics(&stats);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_check_command(
    candidate: &str,
    root: &str,
    used: &[String],
    validator: &Validator<Dictionary>,
) -> Result<ExitCode> {
    let result = check_word(candidate, root, used, validator).map_err(|e| anyhow!(e))?;
    print_check_result(&result);

    if result.result.is_accepted() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn run_play_command(bank: &WordBank, validator: &Validator<Dictionary>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(bank, validator);
    run_tui(app)
}
