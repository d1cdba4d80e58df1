//! Configuration module for Pocket Ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (currency format, logging, tick rate)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{CurrencySettings, Settings};
