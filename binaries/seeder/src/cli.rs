use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "seed-demo-data")]
#[command(about = "Seeds demo posts, comments and documents for the Diesel \
                   Industry Hub")]
pub struct Cli {
    /// Overrides DATABASE_URL
    #[arg(short, long)]
    pub database_url: Option<String>,

    #[arg(short, long, value_enum, default_value = "interactive")]
    pub mode: ProgressMode,

    /// Replace existing posts without asking
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressMode {
    /// No progress output, never prompts
    Quiet,
    /// Progress banners and an overwrite prompt (default)
    Interactive,
}

impl Cli {
    /// The `--database-url` flag, else `env_value`; blank values count as
    /// missing.
    pub fn database_url(&self, env_value: Option<String>) -> Option<String> {
        let present = |url: &String| !url.trim().is_empty();
        self.database_url
            .clone()
            .filter(present)
            .or_else(|| env_value.filter(present))
    }

    pub fn is_quiet(&self) -> bool { self.mode == ProgressMode::Quiet }
}
