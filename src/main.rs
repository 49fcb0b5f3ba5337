use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use collagecli::{
    cli, config, error,
    types::{GridSize, TimeRange},
    utils,
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
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a collage of top artists and upload it
    Create(CreateOptions),

    /// List the top artists a collage would show
    Top(TopOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// Last.fm user whose top artists are used
    pub username: String,

    /// Time range: overall, 7day, 1month, 3month, 6month or 12month
    #[clap(long, default_value = "overall", value_parser = utils::parse_time_range)]
    pub period: TimeRange,

    /// Grid side length: 3, 4 or 5
    #[clap(long, default_value = "3", value_parser = utils::parse_grid_size)]
    pub size: GridSize,

    /// Also write the PNG to this file or directory
    #[clap(long)]
    pub save: Option<PathBuf>,

    /// Do not open the uploaded collage in the browser
    #[clap(long)]
    pub no_open: bool,

    /// Only render the collage, skip the upload
    #[clap(long)]
    pub no_upload: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// Last.fm user whose top artists are listed
    pub username: String,

    /// Time range: overall, 7day, 1month, 3month, 6month or 12month
    #[clap(long, default_value = "overall", value_parser = utils::parse_time_range)]
    pub period: TimeRange,

    /// Grid side length: 3, 4 or 5
    #[clap(long, default_value = "3", value_parser = utils::parse_grid_size)]
    pub size: GridSize,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Create(opt) => {
            cli::create(cli::CreateOptions {
                username: opt.username,
                time_range: opt.period,
                grid_size: opt.size,
                save: opt.save,
                open: !opt.no_open,
                upload: !opt.no_upload,
            })
            .await
        }
        Command::Top(opt) => cli::top(opt.username, opt.period, opt.size).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
