use clap::{Parser, Subcommand};
use modeswap::model::Mode;
use std::path::PathBuf;

/// Package version, suffixed with git hash and commit date on development builds.
const VERSION: &str = env!("MODESWAP_VERSION");

#[derive(Parser, Debug)]
#[command(name = "modeswap", bin_name = "modeswap", version = VERSION)]
#[command(about = "Switch design-document layers between light and dark variants", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Document to operate on
    #[arg(
        short,
        long,
        global = true,
        env = "MODESWAP_DOCUMENT",
        default_value = "document.json"
    )]
    pub document: PathBuf,

    /// Separator between name segments for this run (e.g. " / " for legacy names)
    #[arg(long, global = true)]
    pub separator: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Switch the selected layers to light mode
    Light {
        /// Layers to switch, by index path (e.g. 1 2.3) or by name
        selectors: Vec<String>,
    },

    /// Switch the selected layers to dark mode
    Dark {
        /// Layers to switch, by index path (e.g. 1 2.3) or by name
        selectors: Vec<String>,
    },

    /// Switch the selected layers to the opposite of their current mode
    #[command(alias = "t")]
    Toggle {
        /// Layers to switch, by index path (e.g. 1 2.3) or by name
        selectors: Vec<String>,
    },

    /// Switch every layer on the current page
    Page {
        /// Target mode (light or dark)
        mode: Mode,
    },

    /// Show layers with the mode their styles or symbols carry
    #[command(alias = "ls")]
    Inspect {
        /// Layers to show (defaults to the whole page)
        selectors: Vec<String>,
    },

    /// Check the document for duplicate resource names and broken references
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (separator, persist-on-noop)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn version_starts_with_package_version() {
        let cmd = Cli::command();
        let version = cmd.get_version().unwrap();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn parses_mode_commands() {
        let cli = Cli::try_parse_from(["modeswap", "dark", "1", "2.1"]).unwrap();
        match cli.command {
            Commands::Dark { selectors } => assert_eq!(selectors, vec!["1", "2.1"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_page_mode() {
        let cli = Cli::try_parse_from(["modeswap", "page", "Light"]).unwrap();
        assert!(matches!(cli.command, Commands::Page { mode: Mode::Light }));
        assert!(Cli::try_parse_from(["modeswap", "page", "sepia"]).is_err());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "modeswap",
            "toggle",
            "Header",
            "--document",
            "screens.json",
            "--separator",
            " / ",
        ])
        .unwrap();
        assert_eq!(cli.document, PathBuf::from("screens.json"));
        assert_eq!(cli.separator.as_deref(), Some(" / "));
    }
}
