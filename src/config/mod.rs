//! Environment-driven service configuration.

use std::env;
use std::path::PathBuf;

/// Returns the deployment environment name (defaults to "sandbox").
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Runtime configuration for the signal bridge.
#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server binds on.
    pub port: u16,
    /// Directory the MT5 terminal reads signal files from (its MQL5/Files folder).
    pub signal_files_dir: PathBuf,
    /// Instruments the direction registry is seeded with, in snapshot order.
    pub symbols: Vec<String>,
}

impl Config {
    /// Build configuration from environment variables, falling back to defaults.
    ///
    /// - `PORT` (default 5000)
    /// - `SIGNAL_FILES_DIR` (default `./mt5-files`)
    /// - `SYMBOLS` comma-separated instrument list (default `xauusd,us100`)
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let signal_files_dir = env::var("SIGNAL_FILES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("mt5-files"));

        let symbols = env::var("SYMBOLS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|sym| sym.trim().to_lowercase())
                    .filter(|sym| !sym.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|syms: &Vec<String>| !syms.is_empty())
            .unwrap_or_else(Self::default_symbols);

        Self {
            port,
            signal_files_dir,
            symbols,
        }
    }

    fn default_symbols() -> Vec<String> {
        vec!["xauusd".to_string(), "us100".to_string()]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            signal_files_dir: PathBuf::from("mt5-files"),
            symbols: Self::default_symbols(),
        }
    }
}
