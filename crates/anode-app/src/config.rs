//! Configuration management for anode cost prediction
//!
//! Config stored at: ~/.config/anode-cost/config.json

use std::path::{Path, PathBuf};

use anode_domain::model::{Composition, MaterialPrices};
use anode_types::{ConfigError, CostMode, RankOrder, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{default_composition, default_prices, DEFAULT_REFERENCE_PATH};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Reference metrics table (`Lot;RRO2;RRCO2;AP;TC;NAC`)
    #[serde(default)]
    pub reference_path: Option<PathBuf>,

    /// Field delimiter of the reference table
    #[serde(default = "default_reference_delimiter")]
    pub reference_delimiter: char,

    /// Field delimiter of CSV candidate uploads
    #[serde(default = "default_candidate_delimiter")]
    pub candidate_delimiter: char,

    /// Legacy or fractional butt/CTP coupling in the cost formula
    #[serde(default)]
    pub cost_mode: CostMode,

    /// Ranking direction for NAC/cost
    #[serde(default)]
    pub rank_order: RankOrder,

    /// Reject compositions outside the operating ranges before costing
    #[serde(default = "default_true")]
    pub enforce_composition_ranges: bool,

    #[serde(default = "default_composition")]
    pub default_composition: Composition,

    #[serde(default = "default_prices")]
    pub default_prices: MaterialPrices,
}

fn default_reference_delimiter() -> char {
    ';'
}

fn default_candidate_delimiter() -> char {
    ','
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_path: None,
            reference_delimiter: default_reference_delimiter(),
            candidate_delimiter: default_candidate_delimiter(),
            cost_mode: CostMode::default(),
            rank_order: RankOrder::default(),
            enforce_composition_ranges: true,
            default_composition: default_composition(),
            default_prices: default_prices(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("anode-cost");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Reference table path, falling back to the bundled data file
    pub fn reference_path(&self) -> PathBuf {
        self.reference_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REFERENCE_PATH))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a given file, or default when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = &self.default_composition;
        let p = &self.default_prices;

        writeln!(f, "Anode Cost Prediction Configuration")?;
        writeln!(f, "===================================")?;
        writeln!(f)?;
        writeln!(f, "Reference table:   {}", self.reference_path().display())?;
        writeln!(f, "Reference delim:   {:?}", self.reference_delimiter)?;
        writeln!(f, "Candidate delim:   {:?}", self.candidate_delimiter)?;
        writeln!(f, "Cost mode:         {}", self.cost_mode)?;
        writeln!(f, "Rank order:        {}", self.rank_order)?;
        writeln!(f, "Enforce ranges:    {}", self.enforce_composition_ranges)?;
        writeln!(
            f,
            "Composition (%):   HS {} / LS {} / CTP {} / Butt {}",
            c.hs_pct, c.ls_pct, c.ctp_pct, c.butt_pct
        )?;
        writeln!(
            f,
            "Prices (USD/t):    HS {} / LS {} / CTP {} / Butt {}",
            p.hs, p.ls, p.ctp, p.butt
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
