use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process;

mod cli;

use sitepanel_cli::logging::init_tracing;
use sitepanel_cli::AppContext;
use sitepanel_config::ClientConfig;

#[derive(Parser)]
#[command(name = "sitepanel")]
#[command(about = "Sitepanel CLI - manage site-wide settings from the terminal")]
#[command(version)]
struct Cli {
    /// Settings API base URL (overrides SITEPANEL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding the local cache (overrides SITEPANEL_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as the site operator
    Login {
        /// Operator username (prompted when omitted)
        #[arg(long, short)]
        username: Option<String>,
        /// Operator password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// End the operator session and forget the stored token
    Logout,
    /// Show session and settings status
    Status,
    /// Print the settings document as JSON
    Show {
        /// Read the public settings without logging in
        #[arg(long)]
        public: bool,
    },
    /// Set one field and save its section
    Set {
        /// Section (announcement, social, content, ads, css)
        section: String,
        /// Dot-separated field path within the section, e.g. `text` or `mainPageAd1.imageUrl`
        path: String,
        /// New value; JSON literals are parsed, anything else is taken as a string
        value: String,
    },
    /// Switch a feature on or off (saved immediately)
    #[command(subcommand)]
    Toggle(cli::settings::ToggleCommands),
    /// Manage ad placements
    #[command(subcommand)]
    Ads(cli::ads::AdsCommands),
    /// Manage custom CSS
    #[command(subcommand)]
    Css(cli::css::CssCommands),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.override_api_url(api_url)?;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let ctx = AppContext::from_config(config).await?;

    match cli.command {
        Commands::Login { username, password } => {
            cli::session::login_command(&ctx, username, password).await
        }
        Commands::Logout => cli::session::logout_command(&ctx).await,
        Commands::Status => cli::session::status_command(&ctx).await,
        Commands::Show { public } => cli::settings::show_command(&ctx, public).await,
        Commands::Set {
            section,
            path,
            value,
        } => cli::settings::set_command(&ctx, &section, &path, &value).await,
        Commands::Toggle(command) => cli::settings::toggle_command(&ctx, command).await,
        Commands::Ads(command) => cli::ads::handle_ads_command(&ctx, command).await,
        Commands::Css(command) => cli::css::handle_css_command(&ctx, command).await,
    }
}

