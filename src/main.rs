// src/main.rs
mod cli;
mod config;
mod constants;
mod data_fetcher;
mod error;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use config::Config;
use data_fetcher::api::RosterClient;
use data_fetcher::models::{Player, TeamStint};
use data_fetcher::sample_data;
use error::AppError;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if is_config_operation(&args) {
        return run_config_operation(&args).await;
    }

    // The guard must stay alive until exit so buffered logs get flushed
    let (_log_file_path, _guard) = logging::setup_logging(&args).await?;

    let config = Config::load().await?;
    info!("Using API domain: {}", config.api_domain);
    let client = RosterClient::new(config)?;

    if !client.check_server_reachable().await {
        warn!("Server unreachable; falling back to the built-in sample roster");
        println!("Server unavailable - showing built-in sample data\n");
        let players = sample_data::sample_players();
        match args.player {
            Some(id) => print_player_detail(id, &players, &sample_data::sample_history(id)),
            None => print_roster(&players),
        }
        return Ok(());
    }

    match args.player {
        Some(id) => {
            // The backend has no single-player endpoint; the detail view
            // refetches the roster and picks the player out of it
            let players = client.fetch_players_or_empty().await;
            let history = client.fetch_player_history_or_empty(id).await;
            print_player_detail(id, &players, &history);
        }
        None => {
            let players = client.fetch_players_or_empty().await;
            if players.is_empty() {
                println!("No players found");
            } else {
                print_roster(&players);
            }
        }
    }

    Ok(())
}

/// Applies the requested configuration changes or lists the current settings.
async fn run_config_operation(args: &Args) -> Result<(), AppError> {
    if args.list_config {
        return Config::display().await;
    }

    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
        config.validate()?;
        config.save().await?;
        println!("API domain updated to: {}", config.api_domain);
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
        config.validate()?;
        config.save().await?;
        println!("Log file path updated to: {new_log_path}");
    }

    if args.clear_log_file_path {
        config.log_file_path = None;
        config.save().await?;
        println!("Log file path cleared, using default location");
    }

    Ok(())
}

fn print_roster(players: &[Player]) {
    println!("{:<4} {:<24} {:<12} {:<14} TEAM", "ID", "NAME", "POSITION", "NATIONALITY");
    println!("{}", "─".repeat(76));
    for player in players {
        println!(
            "{:<4} {:<24} {:<12} {:<14} {}",
            player.id, player.name, player.position, player.nationality, player.current_team
        );
    }
    println!("\n{} players", players.len());
}

fn print_player_detail(player_id: i64, players: &[Player], history: &[TeamStint]) {
    let Some(player) = players.iter().find(|p| p.id == player_id) else {
        println!("Player {player_id} not found");
        return;
    };

    println!("{}", player.name);
    println!("{}", "─".repeat(player.name.chars().count().max(16)));
    print_field("Position", &player.position);
    print_field("Nationality", &player.nationality);
    print_field("Born", &player.birth_date);
    print_field("Current team", &player.current_team);
    if !player.image_url.is_empty() {
        print_field("Photo", &player.image_url);
    }

    println!();
    if history.is_empty() {
        println!("No team history available");
    } else {
        println!("Team history:");
        for stint in history {
            if stint.years.is_empty() {
                println!("  {}", stint.team);
            } else {
                println!("  {} ({})", stint.team, stint.years);
            }
        }
    }
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{label:<14} {value}");
    }
}
