use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::{CommandContext, CommandError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(error_exit_code(&e))
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    match &cli.command {
        Commands::List {
            filters,
            sort,
            reverse,
            limit,
            all,
        } => {
            let opts = commands::list::ListOptions {
                filters: filters.clone(),
                sort: *sort,
                reverse: *reverse,
                limit: *limit,
                all: *all,
            };
            commands::list::execute(&ctx, &opts).await
        }
        Commands::Map { filters } => commands::map::execute(&ctx, filters).await,
        Commands::Show { name } => commands::show::execute(&ctx, name).await,
        Commands::Export { filters, output } => {
            commands::export::execute(&ctx, filters, output.as_deref()).await
        }
        Commands::Fetch => commands::fetch::execute(&ctx).await,
        Commands::Config { command } => commands::config::execute(&ctx, command.as_ref()),
        Commands::Completions { shell } => commands::completions::execute(*shell),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Api(_) => "FEED_ERROR",
        CommandError::Store(_) => "CACHE_ERROR",
        CommandError::Export(_) => "EXPORT_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::NotFound(_) => "NOT_FOUND",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> u8 {
    match e {
        CommandError::Config(_) => 5,
        CommandError::Api(err) => err.exit_code() as u8,
        CommandError::Store(_) => 5,
        CommandError::Export(_) => 1,
        CommandError::NotFound(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Json(_) => 1,
    }
}
