pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod rating;
pub mod services;
pub mod snapshot;
pub mod stats;

use std::io::{self, Write};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::{CommandRunner, LeagueService};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "pingpong-league", &mut io::stdout());
    Ok(())
}

pub fn handle_command(cli: &Cli) -> Result<()> {
    let config = AppConfig::new().with_database_path(cli.database.clone());
    let service = LeagueService::open(&config)?;
    let runner = CommandRunner::new(service, config, cli.json);

    let output = runner.run(&cli.command)?;
    io::stdout().write_all(output.as_bytes())?;
    Ok(())
}

pub fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Completions { shell } => handle_completions(*shell),
        _ => handle_command(cli),
    }
}
