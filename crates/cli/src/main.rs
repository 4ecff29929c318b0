//! Fantasix CLI — the profile & daily-rewards screens in a terminal
//!
//! Drives the whole client stack: HTTP client, query cache, profile
//! session, and the claim view with its live countdown.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use fantasix_core::UserProfile;
use fantasix_engine::{ClaimState, ClaimView, ProfileSession, StreakDisplay};
use fantasix_networking::FantasixClient;
use fantasix_persistence::QueryCache;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fantasix", about = "Fantasix profile & daily rewards client")]
struct Cli {
    /// API base URL
    #[arg(long, env = "FANTASIX_API_BASE", default_value = "http://localhost:3000")]
    api_base: String,

    /// Bearer token from the auth provider
    #[arg(long, env = "FANTASIX_TOKEN", hide_env_values = true)]
    token: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the user profile
    Profile,
    /// Show the rewards status, streak tier, and claim state
    Rewards,
    /// Claim the daily reward
    Claim,
    /// Change the username (one-time)
    Rename { username: String },
    /// Upload a new avatar image
    Avatar { path: PathBuf },
    /// Follow the claim countdown until the window reopens
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let cache = Arc::new(QueryCache::default());
    let client = FantasixClient::with_api_base(&cli.token, &cli.api_base)?;
    let session = ProfileSession::new(client, cache);

    match cli.command {
        Command::Profile => {
            let profile = session.profile().await?;
            print_profile(&profile);
        }
        Command::Rewards => {
            let status = session.rewards_status().await?;
            print_streak(&fantasix_engine::streak_display(status.daily_streak));
            print_claim_state(&fantasix_engine::claim_state(&status, Utc::now()));
        }
        Command::Claim => {
            let claim = session.claim_daily().await?;
            println!("🎉 {}", claim.message);
            println!(
                "+{} SP — racha de {} días, total {} SP",
                claim.siege_points, claim.daily_streak, claim.total_siege_points
            );
        }
        Command::Rename { username } => {
            // UX hint only; the server is the enforcement boundary
            session.profile().await.ok();
            if session.rename_already_used() {
                println!("⚠️  Ya usaste tu cambio de nombre; el servidor puede rechazarlo.");
            }
            let result = session.rename(&username).await?;
            println!("✅ {} — ahora eres {}", result.message, result.username);
        }
        Command::Avatar { path } => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("No pude leer la imagen {}", path.display()))?;
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("avatar.png");
            let result = session.change_avatar(bytes, filename).await?;
            println!("✅ {} — {}", result.message, result.profile_pic_url);
        }
        Command::Watch => {
            watch(&session).await?;
        }
    }

    Ok(())
}

fn print_profile(profile: &UserProfile) {
    println!("{} (id {})", profile.username, profile.id);
    println!("  {} SP", profile.siege_points);
    println!("  {}", profile.email);
    println!("  Miembro desde: {}", profile.created_at.format("%d/%m/%Y"));
    if let Some(url) = &profile.profile_pic_url {
        println!("  Avatar: {}", url);
    }
    if profile.has_changed_username {
        println!("  Cambio de nombre: ya utilizado");
    }
}

fn print_streak(display: &StreakDisplay) {
    match display {
        StreakDisplay::NotStarted => {
            println!("😴 ¡Comienza tu racha reclamando tu primera recompensa!");
        }
        StreakDisplay::Active { streak, current, next, progress } => {
            println!("{} {} días seguidos — {}", current.emoji, streak, current.name);
            if let Some(next) = next {
                println!(
                    "  Progreso a {}: {}/{} ({:.0}%) — {} +{} SP",
                    next.name,
                    progress.current,
                    progress.target,
                    progress.percent.as_f64(),
                    next.emoji,
                    next.reward_points
                );
            }
        }
    }
}

fn print_claim_state(state: &ClaimState) {
    match state {
        ClaimState::Claimable => {
            println!("🎁 Recompensa disponible — ejecuta `fantasix claim`");
        }
        ClaimState::CoolingDown { countdown } => {
            println!("✅ Recompensa ya reclamada hoy");
            if let Some(text) = countdown {
                println!("  Próxima recompensa disponible {}", text);
            }
        }
    }
}

/// Re-render the claim card once per minute until the window reopens
async fn watch(session: &ProfileSession) -> Result<()> {
    let mut view = ClaimView::new();
    let status = session.refresh_rewards().await?;
    view.update(status);

    loop {
        if let Some(ClaimState::Claimable) = view.state(Utc::now()) {
            println!("🎁 ¡Recompensa disponible! Ejecuta `fantasix claim`.");
            return Ok(());
        }

        if let Some(text) = view.countdown_text() {
            println!("Próxima recompensa disponible {}", text);
        }

        tokio::time::sleep(std::time::Duration::from_secs(60)).await;

        // Periodic authoritative refresh; on failure keep the last state
        match session.refresh_rewards().await {
            Ok(status) => view.update(status),
            Err(e) => warn!("Rewards refresh failed, keeping last state: {}", e),
        }
    }
}
