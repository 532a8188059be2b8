use anyhow::{Context, Result};
use cartola_core::ExtractionConfig;
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{cartola_home, ensure_cartola_home};

pub fn config_path() -> Result<PathBuf> {
    Ok(cartola_home()?.join("config.toml"))
}

/// Explicit path if given, else ~/.cartola/config.toml, else the stock settings.
pub fn load_config(explicit: Option<&Path>) -> Result<ExtractionConfig> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = config_path()?;
            if !p.exists() {
                return Ok(ExtractionConfig::default());
            }
            p
        }
    };
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<ExtractionConfig> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &ExtractionConfig) -> Result<PathBuf> {
    let p = ensure_cartola_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let p = save_config(&ExtractionConfig::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
