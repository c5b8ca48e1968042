use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

use nosh_core::catalog::FoodCatalog;

pub struct Config {
    pub data_dir: PathBuf,
    pub log_path: PathBuf,
    pub menu_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from("", "", "nosh").context("Could not determine home directory")?;

        let data_dir = proj_dirs.data_dir().to_path_buf();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let log_path = data_dir.join("daily_log.json");
        let menu_path = data_dir.join("menu.csv");

        Ok(Config {
            data_dir,
            log_path,
            menu_path,
        })
    }

    /// The food menu: `menu.csv` in the data directory when present, the
    /// built-in chart otherwise.
    pub fn load_catalog(&self) -> Result<FoodCatalog> {
        if self.menu_path.exists() {
            FoodCatalog::from_csv_path(&self.menu_path)
        } else {
            Ok(FoodCatalog::builtin())
        }
    }
}
