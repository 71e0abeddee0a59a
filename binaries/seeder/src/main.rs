mod cli;
mod error_handling;
mod prompts;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use seeders::{ContentSeeder, Progress, SeedOutcome, Seeder, SeederRunner};
use sql_connection::{PostgresDbConfig, connect_postgres_db};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::Cli, error_handling::describe_seed_error, prompts::overwrite_guard,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&cli, std::env::var("DATABASE_URL").ok()).await
}

async fn run(cli: &Cli, env_url: Option<String>) -> ExitCode {
    let progress = Progress::new(cli.is_quiet());
    progress.banner("🌱 Demo Data Seeder - Diesel Industry Hub");

    let Some(database_url) = cli.database_url(env_url)
    else {
        println!("❌ DATABASE_URL environment variable not set!");
        println!();
        println!("To fix this:");
        println!("  1. Make sure you have a .env file");
        println!("  2. Add: DATABASE_URL=postgresql://...");
        return ExitCode::from(1);
    };

    match seed(cli, database_url, progress).await {
        Ok(outcome) => {
            info!(?outcome, "seeding finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "seeding aborted");
            eprintln!();
            eprintln!("❌ Error: {e}");
            // Debug formatting prints the cause chain and, with
            // RUST_BACKTRACE set, the backtrace.
            eprintln!("{e:?}");
            ExitCode::from(1)
        }
    }
}

async fn seed(
    cli: &Cli, database_url: String, progress: Progress,
) -> Result<SeedOutcome> {
    let config = PostgresDbConfig::single_connection(database_url);
    let db = connect_postgres_db(&config)
        .await
        .context("Failed to connect to the database")?;

    let seeder = ContentSeeder::new(progress);
    let runner = SeederRunner::new(db).with_progress(progress);
    let mut guard = overwrite_guard(cli);

    runner
        .run(&seeder, guard.as_mut())
        .await
        .map_err(|e| {
            let hint = describe_seed_error(&e, seeder.name());
            anyhow::Error::new(e).context(hint)
        })
}
