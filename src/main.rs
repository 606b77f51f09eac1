//! ccfilter - compilation database filter
//!
//! Drops translation units listed in a clang-tidy comment line from a
//! `compile_commands.json`.

use ccfilter::cli::Cli;
use ccfilter::commands::run_filter;
use ccfilter::error::{AppError, ConfigError, DatabaseError};
use clap::Parser;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // --help and --version are not failures; let clap handle them
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let err = AppError::Usage(e.render().to_string());
            eprint!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    if let Err(e) = run_filter(&cli.config, &cli.compile_commands) {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(ConfigError::MissingCommentLine { marker, .. }) => {
            eprintln!();
            eprintln!("Hint: Add a comment line listing the files to drop, e.g.");
            eprintln!("      {}third_party/,generated.cpp", marker);
        }
        AppError::Database(DatabaseError::NotAnArray(_) | DatabaseError::NotAnObject { .. }) => {
            eprintln!();
            eprintln!("Hint: Expected a compile_commands.json as written by CMake or Bear.");
        }
        _ => {}
    }
}
