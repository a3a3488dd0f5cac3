//! `planner-routes`: inspect the route table and dry-run the navigation guard.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use planner::config::ConfigError;
use planner::navigator::{NavigationError, NavigationOutcome};
use planner::session::{SessionStore, User};
use planner::{Navigator, RouteTable, RouterConfig};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid router config: {0}")]
    Config(#[from] ConfigError),
    #[error("navigation failed: {0}")]
    Navigation(#[from] NavigationError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "planner-routes", about = "Inspect planner routes and guard decisions")]
struct Cli {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every route record in match order.
    Table,
    /// Show the guard decision and final outcome for a path.
    Resolve {
        path: String,
        /// Evaluate with a signed-in session.
        #[arg(long)]
        authenticated: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = RouterConfig::from_env()?;

    match cli.command {
        Command::Table => run_table(cli.json),
        Command::Resolve { path, authenticated } => run_resolve(&config, &path, authenticated, cli.json).await,
    }
}

fn run_table(as_json: bool) -> Result<(), CliError> {
    let table = RouteTable::standard();

    if as_json {
        let rows: Vec<_> = table
            .records()
            .iter()
            .map(|r| {
                json!({
                    "path": r.pattern.source(),
                    "name": r.name,
                    "view": r.view,
                    "chain": r.chain,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for (idx, record) in table.records().iter().enumerate() {
        let mut flags = Vec::new();
        if record.any_meta(|m| m.requires_auth) {
            flags.push("auth");
        }
        if record.any_meta(|m| m.requires_guest) {
            flags.push("guest");
        }
        if record.any_meta(|m| m.force_redirect) {
            flags.push("redirect");
        }
        let view = record.view.map_or_else(|| "-".to_owned(), |v| format!("{v:?}"));
        println!(
            "{idx:>3}  {:<24} {:<14} {:<12} {}",
            record.pattern.source(),
            record.name.as_deref().unwrap_or("-"),
            view,
            flags.join(",")
        );
    }
    Ok(())
}

async fn run_resolve(config: &RouterConfig, path: &str, authenticated: bool, as_json: bool) -> Result<(), CliError> {
    let session = Arc::new(SessionStore::new());
    if authenticated {
        session.login(User { id: 0, username: "preview".to_owned(), email: None });
    }
    let navigator = Navigator::new(RouteTable::standard(), config, session);

    let (resolved, decision) = navigator.preview(path);
    let outcome = navigator.navigate(path).await?;

    if as_json {
        let report = json!({
            "resolved": resolved,
            "decision": decision,
            "outcome": outcome,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("requested:  {}", resolved.location);
    println!("matched:    {}", resolved.matched.last().map_or("-", |m| m.path.as_str()));
    match decision.redirect_target() {
        Some(target) => println!("decision:   redirect -> {target}"),
        None => println!("decision:   proceed"),
    }
    match outcome {
        NavigationOutcome::Completed(rendered) => {
            let view = rendered.view.map_or_else(|| "-".to_owned(), |v| format!("{v:?}"));
            println!("renders:    {view} at {}", rendered.location);
        }
        NavigationOutcome::Superseded => println!("renders:    (superseded)"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
