use anyhow::Result;
use apisig::cli::{setup, Cli, Commands};
use apisig::commands::check::{format_drift, handle_check, CheckConfig, CheckOutcome};
use apisig::commands::extract::{handle_extract, ExtractConfig};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup::init_logging(cli.verbosity);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Extract {
            paths,
            format,
            output,
            jobs,
            strict,
        } => {
            setup::configure_thread_pool(jobs);
            let settings = apisig::load_config();
            handle_extract(
                ExtractConfig {
                    paths,
                    format,
                    output,
                    strict,
                },
                &settings,
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            paths,
            golden,
            update,
            jobs,
            strict,
        } => {
            setup::configure_thread_pool(jobs);
            let settings = apisig::load_config();
            let outcome = handle_check(
                CheckConfig {
                    paths,
                    golden,
                    update,
                    strict,
                },
                &settings,
            )?;
            Ok(report_check(&outcome))
        }
        Commands::Init { force } => {
            let path = apisig::commands::init::init_config(force)?;
            println!("Created {} configuration file", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report_check(outcome: &CheckOutcome) -> ExitCode {
    match outcome {
        CheckOutcome::Clean => {
            println!("Public API matches golden file");
            ExitCode::SUCCESS
        }
        CheckOutcome::Updated { lines } => {
            println!("Golden file updated ({lines} signatures)");
            ExitCode::SUCCESS
        }
        CheckOutcome::Drift { added, removed } => {
            println!("{}", format_drift(added, removed));
            eprintln!(
                "Public API drift: {} added, {} removed",
                added.len(),
                removed.len()
            );
            ExitCode::FAILURE
        }
    }
}
