//! CLI frontend for the tabletale text adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::list::TableKind;
use commands::play::PlayOptions;

#[derive(Parser)]
#[command(
    name = "tt",
    about = "tabletale — play table-driven text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr (overridden by TT_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new story directory with the demo cafe story
    Init {
        /// Name of the story directory to create
        name: String,
    },

    /// Validate a story file and report problems
    Check {
        /// Story file (default: story.json)
        #[arg(short, long, default_value = "story.json")]
        file: PathBuf,
    },

    /// Print one of the story tables
    List {
        /// Table to print
        #[arg(value_enum)]
        table: TableKind,

        /// Story file (default: story.json)
        #[arg(short, long, default_value = "story.json")]
        file: PathBuf,
    },

    /// Play a story in the terminal
    Play {
        /// Story file (default: story.json)
        #[arg(short, long, default_value = "story.json")]
        file: PathBuf,

        /// Start in this scene instead of the story's first scene
        #[arg(long)]
        scene: Option<String>,

        /// Raise an extra flag at the start (repeatable)
        #[arg(long = "flag")]
        flags: Vec<String>,

        /// Do not highlight target names
        #[arg(long)]
        no_color: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("TT_LOG").unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init { name } => commands::init::run(&name),
        Commands::Check { file } => commands::check::run(&file),
        Commands::List { table, file } => commands::list::run(&file, table),
        Commands::Play {
            file,
            scene,
            flags,
            no_color,
        } => commands::play::run(
            &file,
            PlayOptions {
                scene,
                flags,
                color: !no_color && std::env::var_os("NO_COLOR").is_none(),
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
