//! # Shell Configuration
//!
//! Start-up settings for the interactive shell.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--balance`, `--currency`, ...)
//! 2. Environment variables (`KIOSK_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after start-up, so no mutex needed.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use kiosk_core::{Catalog, CatalogError, Money, Store, ValidationError, DEFAULT_BALANCE};
use serde::Serialize;
use tracing::debug;

/// Command-line flags.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "kiosk", version, about = "Virtual store simulator with a text menu")]
pub struct Args {
    /// Opening balance, e.g. 150.00
    #[arg(long)]
    pub balance: Option<Money>,

    /// Currency symbol shown in front of every amount
    #[arg(long)]
    pub currency: Option<String>,

    /// JSON catalog file: [{"code": 1, "name": "T-shirt", "price_cents": 1300}, ...]
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Name shown in the welcome banner
    #[arg(long)]
    pub store_name: Option<String>,
}

/// Resolved shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellConfig {
    /// Shown in the welcome banner.
    pub store_name: String,

    /// Prefixed to every displayed amount.
    pub currency_symbol: String,

    /// Balance the store opens with.
    pub opening_balance: Money,

    /// Catalog file; the built-in catalog when absent.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    /// ## Default Values
    /// - Store: "Virtual Store"
    /// - Currency: €
    /// - Balance: 150.00
    /// - Catalog: built-in five products
    fn default() -> Self {
        ShellConfig {
            store_name: "Virtual Store".to_string(),
            currency_symbol: "€".to_string(),
            opening_balance: DEFAULT_BALANCE,
            catalog_path: None,
        }
    }
}

impl ShellConfig {
    /// Loads configuration from the process environment and defaults.
    ///
    /// ## Environment Variables
    /// - `KIOSK_STORE_NAME`: Override store name
    /// - `KIOSK_CURRENCY`: Override currency symbol
    /// - `KIOSK_BALANCE`: Override opening balance (e.g. "150.00")
    /// - `KIOSK_CATALOG`: Path to a JSON catalog file
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ShellConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShellConfig::default();

        if let Some(store_name) = lookup("KIOSK_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("KIOSK_CURRENCY") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("KIOSK_BALANCE") {
            config.opening_balance =
                Money::parse(&raw).map_err(|source| ConfigError::InvalidValue {
                    key: "KIOSK_BALANCE".to_string(),
                    source,
                })?;
        }

        if let Some(path) = lookup("KIOSK_CATALOG") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(name) = &args.store_name {
            self.store_name = name.clone();
        }
        if let Some(symbol) = &args.currency {
            self.currency_symbol = symbol.clone();
        }
        if let Some(balance) = args.balance {
            self.opening_balance = balance;
        }
        if let Some(path) = &args.catalog {
            self.catalog_path = Some(path.clone());
        }
        self
    }

    /// Reads the configured catalog, or returns the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::default());
        };

        let json = fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
            path: path.clone(),
            source,
        })?;
        let catalog = Catalog::from_json(&json).map_err(|source| ConfigError::InvalidCatalog {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), products = catalog.len(), "catalog file loaded");
        Ok(catalog)
    }

    /// Opens the store this configuration describes.
    pub fn build_store(&self) -> Result<Store, ConfigError> {
        let catalog = self.load_catalog()?;
        Store::new(catalog, self.opening_balance).map_err(|source| ConfigError::InvalidValue {
            key: "balance".to_string(),
            source,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: ValidationError,
    },

    #[error("Could not read catalog file {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog file {} is invalid: {source}", .path.display())]
    InvalidCatalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ShellConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.opening_balance, Money::from_cents(15000));
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            ("KIOSK_STORE_NAME", "Corner Shop"),
            ("KIOSK_CURRENCY", "$"),
            ("KIOSK_BALANCE", "10.00"),
            ("KIOSK_CATALOG", "/tmp/catalog.json"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.opening_balance, Money::from_cents(1000));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
    }

    #[test]
    fn test_invalid_balance_in_environment() {
        let err = ShellConfig::from_lookup(lookup_from(&[("KIOSK_BALANCE", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "KIOSK_BALANCE"));
    }

    #[test]
    fn test_flags_override_environment() {
        let env = ShellConfig::from_lookup(lookup_from(&[("KIOSK_BALANCE", "10.00")])).unwrap();
        let args = Args {
            balance: Some(Money::from_cents(50000)),
            currency: Some("£".to_string()),
            ..Args::default()
        };

        let config = env.with_args(&args);
        assert_eq!(config.opening_balance, Money::from_cents(50000));
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.store_name, "Virtual Store");
    }

    #[test]
    fn test_args_parse_balance_as_money() {
        let args = Args::try_parse_from(["kiosk", "--balance", "99.5", "--currency", "$"]).unwrap();
        assert_eq!(args.balance, Some(Money::from_cents(9950)));

        assert!(Args::try_parse_from(["kiosk", "--balance", "-3"]).is_err());
    }

    #[test]
    fn test_build_store_with_default_catalog() {
        let store = ShellConfig::default().build_store().unwrap();
        assert_eq!(store.list_products().len(), 5);
        assert_eq!(store.view_balance(), Money::from_cents(15000));
    }

    #[test]
    fn test_catalog_file_round_trip() {
        let path = std::env::temp_dir().join(format!("kiosk-catalog-{}.json", std::process::id()));
        fs::write(&path, r#"[{"code": 8, "name": "Scarf", "price_cents": 1250}]"#).unwrap();

        let config = ShellConfig {
            catalog_path: Some(path.clone()),
            ..ShellConfig::default()
        };
        let store = config.build_store().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(store.list_products().len(), 1);
        assert_eq!(store.list_products()[0].name, "Scarf");
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = ShellConfig {
            catalog_path: Some(PathBuf::from("/definitely/not/here/catalog.json")),
            ..ShellConfig::default()
        };
        assert!(matches!(config.build_store(), Err(ConfigError::CatalogRead { .. })));
    }

    #[test]
    fn test_config_serializes_for_logging() {
        let json = serde_json::to_value(ShellConfig::default()).unwrap();
        assert_eq!(json["opening_balance"], 15000);
        assert_eq!(json["currency_symbol"], "€");
    }
}
