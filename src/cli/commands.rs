//! Command implementations for Lexis CLI.

use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexisError, Result};
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: LexisArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_words(check_args.clone(), &args),
        Command::Validate(validate_args) => validate_dictionary(validate_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Build the dictionary configuration from a config file and flags.
///
/// Flags can only switch options on; they never undo the config file.
pub fn build_config(args: &CheckArgs) -> Result<DictionaryConfig> {
    let mut config = match &args.config {
        Some(config_file) => DictionaryConfig::load_from_file(config_file)?,
        None => DictionaryConfig::default(),
    };

    if args.verify_order {
        config.verify_order = true;
    }
    if args.lowercase {
        config.lowercase_queries = true;
    }
    if args.ascii {
        config.character_set = CharacterSet::Ascii;
    }

    Ok(config)
}

/// Check words against a dictionary.
fn check_words(args: CheckArgs, cli_args: &LexisArgs) -> Result<()> {
    let config = build_config(&args)?;
    let start_time = Instant::now();

    let index = Arc::new(DictionaryIndex::open_with_config(&args.dictionary, config)?);
    info!(
        "Loaded {} words from {} in {}ms",
        index.len(),
        args.dictionary.display(),
        start_time.elapsed().as_millis()
    );

    let verifier = match &args.corrections {
        Some(corrections_file) => {
            WordVerifier::new(index, CorrectionTable::load_from_file(corrections_file)?)
        }
        None => WordVerifier::without_corrector(index),
    };

    let lookup_start = Instant::now();
    let results = verifier.verify_all(&args.words);
    let duration = lookup_start.elapsed();

    output_result(
        "Word check",
        &CheckResults {
            dictionary: args.dictionary.to_string_lossy().to_string(),
            word_count: verifier.index().len(),
            known: results.iter().filter(|result| result.known).count(),
            results,
            duration_us: duration.as_micros() as u64,
        },
        cli_args,
    )
}

/// Verify that a dictionary is sorted under the ordinal comparator.
fn validate_dictionary(args: ValidateArgs, cli_args: &LexisArgs) -> Result<()> {
    let config = DictionaryConfig::default().with_verify_order(false);
    let index = DictionaryIndex::open_with_config(&args.dictionary, config)?;
    let verification = index.verify_order();

    let first_violation = match &verification {
        Err(LexisError::DataIntegrity { position, .. }) => Some(*position),
        _ => None,
    };

    output_result(
        "Dictionary validation",
        &ValidationResult {
            dictionary: args.dictionary.to_string_lossy().to_string(),
            word_count: index.len(),
            valid: verification.is_ok(),
            first_violation,
            message: verification.as_ref().err().map(|e| e.to_string()),
        },
        cli_args,
    )?;

    verification
}

/// Show dictionary statistics.
fn show_stats(args: StatsArgs, cli_args: &LexisArgs) -> Result<()> {
    let config = DictionaryConfig::default().with_verify_order(false);
    let index = DictionaryIndex::open_with_config(&args.dictionary, config)?;

    output_result(
        "Dictionary statistics",
        &StatsResult {
            dictionary: args.dictionary.to_string_lossy().to_string(),
            stats: index.stats(),
        },
        cli_args,
    )
}
