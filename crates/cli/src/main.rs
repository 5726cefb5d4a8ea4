use crate::error::CliError;
use chrono::NaiveDate;
use clap::Parser;
use commands::Commands;
use fsq_syntax::{Lexer, QueryCompiler};
use model::Schema;
use tracing::Level;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "fsq", version = "0.1.0", about = "File search query compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { query, date } => {
            let compiler = build_compiler(date)?;
            let clause = compiler.compile(&query)?;
            println!("{clause}");
        }
        Commands::Tokens { query } => {
            let tokens = Lexer::new(&query).tokenize()?;
            let json = serde_json::to_string_pretty(&tokens).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
        Commands::Ast { query, date } => {
            let compiler = build_compiler(date)?;
            let expr = compiler.parse(&query)?;
            let json = serde_json::to_string_pretty(&expr).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn build_compiler(date: Option<String>) -> Result<QueryCompiler, CliError> {
    let compiler = QueryCompiler::new(Schema::file_index());
    match date {
        Some(text) => {
            let date = NaiveDate::parse_from_str(&text, "%Y%m%d")
                .map_err(|_| CliError::InvalidReferenceDate(text))?;
            Ok(compiler.with_reference_date(date))
        }
        None => Ok(compiler),
    }
}
