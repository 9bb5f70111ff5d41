use clap::Parser;
use directories::ProjectDirs;
use modeswap::api::{ConfigAction, SwitcherApi};
use modeswap::config::SwitchConfig;
use modeswap::error::Result;
use modeswap::model::Mode;
use modeswap::store::fs::FileStore;
use std::path::PathBuf;
use tracing::Level;

mod args;
mod print;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut api = init_api(&cli)?;

    let result = match cli.command {
        Commands::Light { selectors } => api.switch_selection(Mode::Light, &selectors)?,
        Commands::Dark { selectors } => api.switch_selection(Mode::Dark, &selectors)?,
        Commands::Toggle { selectors } => api.toggle_selection(&selectors)?,
        Commands::Page { mode } => api.switch_page(mode)?,
        Commands::Inspect { selectors } => {
            let result = api.inspect(&selectors)?;
            print::print_layers(&result.layers);
            result
        }
        Commands::Doctor => api.doctor()?,
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            api.config(action)?
        }
    };

    print::print_messages(&result.messages);
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Project config in `./.modeswap` wins when present, then the user config directory.
fn config_dir() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".modeswap");
    if project_dir.exists() {
        return project_dir;
    }
    match ProjectDirs::from("com", "modeswap", "modeswap") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => project_dir,
    }
}

fn init_api(cli: &Cli) -> Result<SwitcherApi<FileStore>> {
    let config_dir = config_dir();
    let mut config = SwitchConfig::load(&config_dir)?;
    if let Some(separator) = &cli.separator {
        config.set("separator", separator)?;
    }

    let store = FileStore::new(cli.document.clone());
    Ok(SwitcherApi::new(store, config, config_dir))
}
