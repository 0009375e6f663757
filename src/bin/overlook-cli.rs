use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use overlook::common::config::{Config, config_file};
use overlook::common::log;
use overlook::layout_engine::{LayoutOrchestrator, PaneSource, allocate_secondary};
use overlook::model::{Rect, Size, TransitionDescriptor, UiState};
use tracing::warn;

#[derive(Parser)]
#[command(name = "overlook-cli")]
#[command(about = "Compute workspace-overview layouts from the command line")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the layout for one frame and print it as JSON
    Compute(ComputeArgs),
    /// Configuration management commands
    Config {
        #[command(subcommand)]
        config_cmd: ConfigCommands,
    },
}

#[derive(Args)]
struct ComputeArgs {
    /// Display area width in pixels
    #[arg(long, default_value_t = 1920.0)]
    width: f64,
    /// Display area height in pixels
    #[arg(long, default_value_t = 1080.0)]
    height: f64,
    /// Display area origin
    #[arg(long, default_value_t = 0.0)]
    x: f64,
    #[arg(long, default_value_t = 0.0)]
    y: f64,

    /// Stationary state (hidden, window-picker, app-grid)
    #[arg(long, conflicts_with_all = ["from", "to", "progress"])]
    state: Option<UiState>,
    /// Transition start state
    #[arg(long, requires = "to")]
    from: Option<UiState>,
    /// Transition end state
    #[arg(long, requires = "from")]
    to: Option<UiState>,
    /// Transition progress in [0, 1]
    #[arg(long, default_value_t = 0.5)]
    progress: f64,

    /// Number of workspaces
    #[arg(long, default_value_t = 4)]
    workspaces: usize,
    /// Treat the display as a secondary monitor
    #[arg(long)]
    secondary: bool,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Validate the configuration and report issues
    Check,
    /// Print the resolved layout configuration
    Show,
    /// Write the bundled default configuration to the config path
    SaveDefault,
}

/// Fixed natural sizes standing in for a real renderer: the porthole matches
/// the display and the dash reports one row of icons.
struct FixedPanes {
    porthole: Size,
    workspaces: usize,
}

impl PaneSource for FixedPanes {
    fn porthole(&self) -> Size { self.porthole }

    fn workspace_count(&self) -> usize { self.workspaces }

    fn dash_preferred_height(&self, _for_width: f64) -> f64 { 80.0 }

    fn dash_preferred_width(&self, for_height: f64) -> f64 {
        // A dozen icon-sized items plus padding.
        12.0 * for_height + 24.0
    }

    fn search_preferred_height(&self, _for_width: f64) -> f64 { 36.0 }
}

fn load_config(path: Option<PathBuf>) -> Config {
    let path = path.unwrap_or_else(config_file);
    if !path.exists() {
        return Config::default();
    }
    match Config::read(&path) {
        Ok(mut config) => {
            let fixes = config.auto_fix_values();
            if fixes > 0 {
                warn!("fixed {fixes} out-of-range config values");
            }
            config
        }
        Err(err) => {
            eprintln!("error reading {}: {err}", path.display());
            process::exit(1);
        }
    }
}

fn main() {
    log::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute(args) => {
            let config = load_config(cli.config);
            let display = Rect::new(args.x, args.y, args.width, args.height);
            let transition = match (args.state, args.from, args.to) {
                (Some(state), _, _) => TransitionDescriptor::stationary(state),
                (None, Some(from), Some(to)) => {
                    TransitionDescriptor::between(from, to, args.progress)
                }
                _ => TransitionDescriptor::stationary(UiState::WindowPicker),
            };
            let panes = FixedPanes {
                porthole: display.size,
                workspaces: args.workspaces,
            };

            let json = if args.secondary {
                let layout =
                    allocate_secondary(display, &config.resolve(), transition, &panes);
                serde_json::to_string_pretty(&layout)
            } else {
                let orchestrator = LayoutOrchestrator::new(config.resolve());
                let layout = orchestrator.allocate(display, transition, &panes);
                serde_json::to_string_pretty(&layout)
            };
            match json {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error serializing layout: {err}");
                    process::exit(1);
                }
            }
        }
        Commands::Config { config_cmd } => match config_cmd {
            ConfigCommands::Check => {
                let config = load_config(cli.config);
                let issues = config.validate();
                if issues.is_empty() {
                    println!("configuration ok");
                } else {
                    for issue in &issues {
                        println!("{issue}");
                    }
                    process::exit(1);
                }
            }
            ConfigCommands::Show => {
                let config = load_config(cli.config);
                println!("{:#?}", config.resolve());
            }
            ConfigCommands::SaveDefault => {
                let path = cli.config.unwrap_or_else(config_file);
                if let Err(err) = Config::default().save(&path) {
                    eprintln!("error writing {}: {err}", path.display());
                    process::exit(1);
                }
                println!("wrote {}", path.display());
            }
        },
    }
}
