use clap::{Parser, Subcommand};
use std::path::PathBuf;

use portfolio::PortfolioConfig;
use portfolio::core::{
    FilePreferenceStore, PreferenceStore, THEME_KEY, ThemeController, tag_checksum, theme,
};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio of Muhammad Anas Naeem")]
struct Cli {
    /// Configuration file (defaults to $XDG_CONFIG_HOME/portfolio/config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the portfolio window (default)
    View,

    /// Show which palette entry each label is rendered with
    TagColor {
        #[arg(value_name = "LABEL", required = true)]
        labels: Vec<String>,
    },

    /// Inspect or change the persisted light/dark preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the theme the window would start with
    Show,
    /// Flip the preference and persist it
    Toggle,
    /// Forget the preference so the desktop setting applies again
    Reset,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if let Err(e) = portfolio::logger::init(args.verbose) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let config = PortfolioConfig::load(args.config.as_deref())?;
    if args.verbose {
        println!("Assets: {:?}", config.assets_dir);
        println!("Preferences: {:?}", config.state_file());
    }

    match args.command.unwrap_or(Command::View) {
        Command::View => view(config),
        Command::TagColor { labels } => {
            let palette = config.palette()?;
            for label in &labels {
                let entry = palette.color_for(label);
                println!(
                    "{:<24} checksum {:>6}  index {}/{}  {} ({} on {})",
                    label,
                    tag_checksum(label),
                    palette.index_for(label),
                    palette.len(),
                    entry.name,
                    entry.text_light.to_hex_string(),
                    entry.background_light.to_hex_string(),
                );
            }
            Ok(())
        }
        Command::Theme { action } => {
            let mut store = FilePreferenceStore::new(config.state_file());
            let ambient = config.ambient();
            match action {
                ThemeAction::Show => {
                    let theme = ThemeController::initialize(&store, ambient.as_ref());
                    println!(
                        "{} (stored: {})",
                        if theme.is_dark() { "dark" } else { "light" },
                        theme::describe_stored(&store),
                    );
                }
                ThemeAction::Toggle => {
                    let mut theme = ThemeController::initialize(&store, ambient.as_ref());
                    let dark = theme.toggle(&mut store);
                    println!("{}", if dark { "dark" } else { "light" });
                }
                ThemeAction::Reset => {
                    store.remove(THEME_KEY)?;
                    println!("Theme preference cleared");
                }
            }
            Ok(())
        }
    }
}

#[cfg(feature = "gui")]
fn view(config: PortfolioConfig) -> anyhow::Result<()> {
    portfolio::gui::PortfolioApp::run(config)
}

#[cfg(not(feature = "gui"))]
fn view(_config: PortfolioConfig) -> anyhow::Result<()> {
    anyhow::bail!("This build has no window support; rebuild with the `gui` feature")
}
