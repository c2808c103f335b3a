// aaxport-cli/src/main.rs
//
// Command-line entry point for the aaxport audiobook converter.
//
// Responsibilities:
// - Parsing command-line arguments (`Cli`).
// - Setting up logging and terminal progress reporting.
// - Checking that ffmpeg and ffprobe are available.
// - Building the immutable `CoreConfig` and validating the folder layout.
// - Invoking the core pipeline and summarizing its per-file results.
// - Mapping outcomes to process exit codes.

use aaxport_core::{
    check_dependency, find_aax_files, process_files, processing, CoreConfig, NullReporter,
    ProgressReporter,
};
use clap::Parser;
use std::process;

mod args;
mod logging;
mod progress;

use args::Cli;
use progress::ConsoleReporter;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    match run(cli) {
        Ok(()) => {}
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CoreConfig {
        activation_bytes: cli.activation_bytes,
        bitrate_kbps: cli.bitrate,
        author_collapse_threshold: cli.author_collapse_threshold,
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        storage_dir: cli.storage_dir,
        working_dir: cli.working_dir,
    };

    // Folder validation and working-dir purge come first so a bad layout
    // fails before anything else runs.
    processing::prepare_run(&config)?;

    check_dependency("ffmpeg")?;
    check_dependency("ffprobe")?;

    let files = find_aax_files(&config.input_dir)?;
    log::info!("Found {} aax files to process", files.len());
    if files.is_empty() {
        return Ok(());
    }

    let reporter: Box<dyn ProgressReporter> = if cli.quiet {
        Box::new(NullReporter)
    } else {
        Box::new(ConsoleReporter::new())
    };

    let report = process_files(&config, &files, reporter.as_ref());
    drop(reporter);

    log::info!(
        "Converted {} of {} file(s)",
        report.succeeded.len(),
        files.len()
    );
    for failure in &report.failed {
        log::warn!("Failed: {}: {}", failure.source.display(), failure.error);
    }

    if report.all_failed() {
        return Err("all files failed to convert".into());
    }

    Ok(())
}
