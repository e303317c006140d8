//! Repository adapters for corridor data

use std::path::PathBuf;

use expressway_domain::model::Corridor;
use expressway_domain::repository::CorridorRepository;
use expressway_infra::{apply_rate_sheet, FileCorridorRepository};
use expressway_types::Result;

use crate::config::Config;
use crate::constants::{delhi_mumbai_expressway, CORRIDOR_NAME};

/// Built-in Delhi-Mumbai tables, optionally with a CSV rate sheet
pub struct BuiltinCorridorRepository {
    rate_sheet: Option<PathBuf>,
}

impl BuiltinCorridorRepository {
    pub fn new(rate_sheet: Option<PathBuf>) -> Self {
        Self { rate_sheet }
    }
}

impl CorridorRepository for BuiltinCorridorRepository {
    fn load(&self) -> Result<Corridor> {
        apply_rate_sheet(delhi_mumbai_expressway(), self.rate_sheet.as_deref())
    }

    fn describe(&self) -> String {
        match &self.rate_sheet {
            Some(sheet) => format!("built-in {} (rates: {})", CORRIDOR_NAME, sheet.display()),
            None => format!("built-in {}", CORRIDOR_NAME),
        }
    }
}

/// Open the corridor repository selected by the config
pub fn open_corridor_repo(config: &Config) -> Box<dyn CorridorRepository> {
    match &config.corridor_file {
        Some(path) => {
            let repo = FileCorridorRepository::new(path.clone());
            match &config.rate_sheet {
                Some(sheet) => Box::new(repo.with_rate_sheet(sheet.clone())),
                None => Box::new(repo),
            }
        }
        None => Box::new(BuiltinCorridorRepository::new(config.rate_sheet.clone())),
    }
}
