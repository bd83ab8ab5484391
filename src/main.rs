use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adforge::cli::commands::{self, AssetArgs, FormArgs};

#[derive(Parser)]
#[command(name = "adforge")]
#[command(
    version,
    about = "AI-driven ad-creative prompt generator for local businesses"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Owner id used to scope saved generations
    #[arg(long, env = "ADFORGE_OWNER", default_value = "default", global = true)]
    owner: String,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full generation pipeline
    Generate {
        #[command(flatten)]
        form: FormArgs,
        #[command(flatten)]
        assets: AssetArgs,
        #[arg(long, help = "Persist the generated bundle")]
        save: bool,
    },

    /// Extract business info only (poster-first workflow)
    Extract {
        #[command(flatten)]
        form: FormArgs,
        #[command(flatten)]
        assets: AssetArgs,
        #[arg(long, help = "Persist the extraction result")]
        save: bool,
    },

    /// Re-run one section of a saved generation with extra instructions
    Refine {
        /// Saved generation id
        id: String,
        #[arg(
            long,
            help = "Section to refine: main-frame, header, poster, voice-over, video"
        )]
        section: String,
        #[arg(long, help = "What to change in the section")]
        instructions: String,
    },

    /// Regenerate the poster JSON for a saved generation
    Poster {
        /// Saved generation id
        id: String,
        #[arg(long, default_value = "", help = "Poster-specific instructions")]
        instructions: String,
    },

    /// Generate stock-image prompts from a completed voice-over script
    Stock {
        /// Saved generation id
        id: String,
        #[arg(
            long,
            default_value = "indian",
            help = "Cultural theme: indian, american, middle-eastern, european, east-asian, african, universal"
        )]
        theme: String,
    },

    /// Transliterate a saved voice-over script to Roman script
    Transliterate {
        /// Saved generation id
        id: String,
    },

    /// Manage saved generations
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum SavedAction {
    /// List saved generations, newest first
    List,
    /// Show one saved generation in full
    Show { id: String },
    /// Delete a saved generation
    Delete { id: String },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(long, help = "Output as JSON instead of TOML")]
        json: bool,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let owner = cli.owner;

    match cli.command {
        Commands::Generate { form, assets, save } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::generate::run(form, assets, save, owner))?;
        }
        Commands::Extract { form, assets, save } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::extract::run(form, assets, save, owner))?;
        }
        Commands::Refine {
            id,
            section,
            instructions,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::refine::run(id, section, instructions, owner))?;
        }
        Commands::Poster { id, instructions } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::poster::run(id, instructions, owner))?;
        }
        Commands::Stock { id, theme } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::stock::run(id, theme, owner))?;
        }
        Commands::Transliterate { id } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::transliterate::run(id, owner))?;
        }
        Commands::Saved { action } => match action {
            SavedAction::List => commands::saved::list(owner)?,
            SavedAction::Show { id } => commands::saved::show(id, owner)?,
            SavedAction::Delete { id } => commands::saved::delete(id, owner)?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => commands::config::show(json)?,
            ConfigAction::Path => commands::config::path()?,
            ConfigAction::Init { global, force } => commands::config::init(global, force)?,
        },
    }

    Ok(())
}
