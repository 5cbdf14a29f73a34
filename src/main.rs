use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playlist_sync::{
    cli, config,
    config::SyncConfig,
    error,
    types::{Provider, Visibility},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    args: SyncOptions,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with YouTube (default) or Spotify
    Auth(AuthOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SyncOptions {
    /// Name of the target playlist; several words are joined with spaces
    #[clap(value_name = "PLAYLIST")]
    pub playlist: Vec<String>,

    /// Resolve and report only, never touch the target playlist
    #[clap(short, long)]
    pub dry_run: bool,

    /// Use Spotify instead of YouTube
    #[clap(short, long)]
    pub spotify: bool,

    /// Delete the target's existing songs without asking
    #[clap(short, long)]
    pub reset: bool,

    /// Song list, one "Title - Artist" per line
    #[clap(short, long, default_value = config::DEFAULT_SONG_LIST_FILE)]
    pub input: PathBuf,

    /// Visibility of a newly created playlist
    #[clap(long, value_enum, default_value_t = Visibility::Public)]
    pub visibility: Visibility,

    /// Description of a newly created playlist
    #[clap(long, default_value = "")]
    pub description: String,

    /// Playlists whose name contains this text form the catalog
    #[clap(long, default_value = config::DEFAULT_MASTER_MARKER)]
    pub marker: String,

    /// Print rejected candidates and other details
    #[clap(short, long)]
    pub verbose: bool,
}

impl SyncOptions {
    fn into_config(self) -> SyncConfig {
        let playlist = if self.playlist.is_empty() {
            config::DEFAULT_PLAYLIST_NAME.to_string()
        } else {
            self.playlist.join(" ")
        };

        SyncConfig {
            playlist,
            description: self.description,
            visibility: self.visibility,
            dry_run: self.dry_run,
            force_reset: self.reset,
            master_marker: self.marker,
            verbose: self.verbose,
            ..SyncConfig::default()
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Authorize Spotify instead of YouTube
    #[clap(short, long)]
    pub spotify: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Auth(opt)) => cli::auth(Provider::from_flag(opt.spotify)).await,
        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
        None => {
            let provider = Provider::from_flag(cli.args.spotify);
            let input = cli.args.input.clone();
            cli::sync(provider, &input, cli.args.into_config()).await
        }
    }
}
