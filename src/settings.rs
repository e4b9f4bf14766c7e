//! Run settings for both demo programs.
//!
//! Every field has a built-in default reproducing the stock inventory, so
//! the programs behave the same with or without a settings file. A
//! `carpentry.toml` in the working directory (or a file passed to
//! [`Settings::load_from`]) overrides whatever it names.

use std::path::Path;

use serde::Deserialize;

use crate::Result;
use crate::board::{Board, NailSupply};
use crate::promotion::Admin;
use crate::tool::{DriverKind, PullerKind};

pub const DEFAULT_SETTINGS_FILE: &str = "carpentry.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub nail_supply: i64,
    pub boards: Vec<Board>,
    pub driver: DriverKind,
    pub puller: PullerKind,
    pub admin: Admin,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nail_supply: 10,
            boards: vec![
                // rotted boards to be removed
                Board::rotted(3),
                Board::rotted(1),
                Board::rotted(6),
                // fresh boards to be fastened
                Board::fresh(6),
                Board::fresh(9),
                Board::fresh(4),
            ],
            driver: DriverKind::Mallet,
            puller: PullerKind::Crowbar,
            admin: Admin::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads `carpentry.toml` from the working directory, if there is one.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_SETTINGS_FILE)
    }

    /// Loads settings from the given TOML file. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let settings: Settings = config::Config::builder()
            .add_source(
                config::File::from(path.as_ref())
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn supply(&self) -> NailSupply {
        NailSupply::new(self.nail_supply)
    }
}
