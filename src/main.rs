use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sabotage_connect_four::config::{AppConfig, InterfaceMode};
use sabotage_connect_four::game::GameSession;
use sabotage_connect_four::ui::{plain, App};

/// Four-player Connect Four where each team has a spy dropping enemy pieces.
#[derive(Parser)]
#[command(name = "sabotage-connect-four", about = "Play Sabotage Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "sabotage-connect-four.toml")]
    config: PathBuf,

    /// Use the line-based prompt instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dump_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (mut config, used_defaults) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.plain {
        config.interface.mode = InterfaceMode::Plain;
    }

    init_logging(&cli, config.interface.mode)?;
    if used_defaults {
        log::warn!(
            "config file '{}' not found, using defaults",
            cli.config.display()
        );
    }
    log::info!("starting in {:?} mode", config.interface.mode);

    match config.interface.mode {
        InterfaceMode::Plain => {
            let mut session = GameSession::new();
            let stdin = io::stdin();
            plain::run(&mut session, &config, stdin.lock(), &mut io::stdout())
                .context("running plain game loop")
        }
        InterfaceMode::Tui => run_tui(&config).context("running terminal UI"),
    }
}

/// Log to `--log-file` when given. Otherwise only plain mode logs, to stderr,
/// since the full-screen UI owns the terminal.
fn init_logging(cli: &Cli, mode: InterfaceMode) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(cli.verbose.log_level_filter());

    match (&cli.log_file, mode) {
        (Some(path), _) => {
            builder.target(env_logger::Target::Pipe(Box::new(open_log(path)?)));
        }
        (None, InterfaceMode::Plain) => {
            builder.target(env_logger::Target::Stderr);
        }
        (None, InterfaceMode::Tui) => return Ok(()),
    }

    builder.init();
    Ok(())
}

fn open_log(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("creating log file {}", path.display()))
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
