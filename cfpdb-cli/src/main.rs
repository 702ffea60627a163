mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "cfpdb")]
#[command(about = "Generate a conference-deadline HTML page and calendar feed")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the HTML page and .ics feed from the conference database
    Generate {
        /// Conference database (YAML); defaults to the configured path
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output HTML file
        #[arg(long)]
        html: Option<PathBuf>,

        /// Output .ics file
        #[arg(long)]
        ics: Option<PathBuf>,

        /// Treat this date as "today" (YYYY-MM-DD) for reproducible output
        #[arg(long)]
        date: Option<String>,
    },
    /// Print the ranked deadline timeline to the terminal
    List {
        /// Conference database (YAML); defaults to the configured path
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Also show conferences that have already ended
        #[arg(long)]
        past: bool,

        /// Treat this date as "today" (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Validate the conference database and exit
    Check {
        /// Conference database (YAML); defaults to the configured path
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    match cli.command {
        Commands::Generate {
            input,
            html,
            ics,
            date,
        } => commands::generate::run(input, html, ics, parse_today(date.as_deref())?),
        Commands::List { input, past, date } => {
            commands::list::run(input, past, parse_today(date.as_deref())?)
        }
        Commands::Check { input } => commands::check::run(input),
    }
}

fn parse_today(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}
