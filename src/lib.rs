pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::database::models::PlayerId;
use crate::services::TournamentService;

pub use crate::database::models::{MatchRecord, PlayerRecord};
pub use crate::domain::{pair, swiss_pairings, Pairing, StandingsProvider};
pub use crate::errors::{IntegrityError, TournamentError};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn open_service(database: Option<&str>) -> Result<TournamentService> {
    let mut config = AppConfig::from_env()?;
    if let Some(path) = database {
        config = config.with_database_path(path);
    }

    TournamentService::new(&config)
        .with_context(|| format!("Failed to open database {}", config.database.path))
}

pub fn handle_command(service: &TournamentService, command: &Command) -> Result<()> {
    match command {
        Command::Init => handle_init(service),
        Command::Register { name } => handle_register(service, name),
        Command::Report { winner, loser } => handle_report(service, *winner, *loser),
        Command::Standings { json } => handle_standings(service, *json),
        Command::Pairings { json } => handle_pairings(service, *json),
        Command::Matches { between } => handle_matches(service, between.as_deref()),
        Command::Count => handle_count(service),
        Command::DeleteMatches => handle_delete_matches(service),
        Command::DeletePlayers => handle_delete_players(service),
    }
}

pub fn handle_init(service: &TournamentService) -> Result<()> {
    service.reset_schema().context("Failed to reset schema")?;
    println!("{}", "Tournament database initialised".green());
    Ok(())
}

pub fn handle_register(service: &TournamentService, name: &str) -> Result<()> {
    let id = service
        .register_player(name)
        .with_context(|| format!("Failed to register {}", name))?;
    println!("{} was registered with id {}", name, id.to_string().bold());
    Ok(())
}

pub fn handle_report(service: &TournamentService, winner: PlayerId, loser: PlayerId) -> Result<()> {
    let record = service
        .report_match(winner, loser)
        .with_context(|| format!("Failed to report {} beating {}", winner, loser))?;
    println!("Recorded match {}: {} beat {}", record.id, winner, loser);
    Ok(())
}

pub fn handle_standings(service: &TournamentService, json: bool) -> Result<()> {
    let standings = service.player_standings().context("Failed to load standings")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("{:>5}  {:<24} {:>5} {:>7} {:>8}", "id", "name", "wins", "losses", "matches").bold()
    );
    for player in &standings {
        println!(
            "{:>5}  {:<24} {:>5} {:>7} {:>8}",
            player.id,
            player.name,
            player.wins,
            player.losses(),
            player.matches_played
        );
    }
    Ok(())
}

pub fn handle_pairings(service: &TournamentService, json: bool) -> Result<()> {
    let pairings = service.swiss_pairings().context("Failed to compute pairings")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pairings)?);
        return Ok(());
    }

    println!("{}", "Next round".bold());
    for pairing in &pairings {
        println!(
            "  {} ({}) vs {} ({})",
            pairing.first_player_name,
            pairing.first_player_id,
            pairing.second_player_name,
            pairing.second_player_id
        );
    }
    Ok(())
}

pub fn handle_matches(service: &TournamentService, between: Option<&[PlayerId]>) -> Result<()> {
    let matches = match between {
        Some([a, b]) => service.matches_between(*a, *b),
        _ => service.matches(),
    }
    .context("Failed to load matches")?;

    println!("{}", format!("{:>5}  {:>6} {:>6}  {}", "id", "winner", "loser", "recorded").bold());
    for record in &matches {
        println!(
            "{:>5}  {:>6} {:>6}  {}",
            record.id,
            record.winner_id,
            record.loser_id(),
            record.recorded_at
        );
    }
    Ok(())
}

pub fn handle_count(service: &TournamentService) -> Result<()> {
    let count = service.count_players().context("Failed to count players")?;
    println!("{}", count);
    Ok(())
}

pub fn handle_delete_matches(service: &TournamentService) -> Result<()> {
    service.delete_matches().context("Failed to delete matches")?;
    println!("{}", "All matches deleted".yellow());
    Ok(())
}

pub fn handle_delete_players(service: &TournamentService) -> Result<()> {
    service.delete_players().context("Failed to delete players")?;
    println!("{}", "All players deleted".yellow());
    Ok(())
}
