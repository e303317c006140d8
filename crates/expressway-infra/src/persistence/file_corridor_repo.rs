//! File-based implementation of CorridorRepository

use std::path::{Path, PathBuf};

use expressway_domain::model::Corridor;
use expressway_domain::repository::CorridorRepository;
use expressway_types::Result;
use log::info;

use crate::corridor_loader::CorridorLoader;
use crate::toll_rate_csv::load_toll_plazas_from_csv;

/// Corridor loaded from a TOML file, optionally with a CSV rate sheet
/// replacing its toll plaza table
pub struct FileCorridorRepository {
    toml_path: PathBuf,
    rate_sheet: Option<PathBuf>,
}

impl FileCorridorRepository {
    pub fn new(toml_path: PathBuf) -> Self {
        Self {
            toml_path,
            rate_sheet: None,
        }
    }

    /// Replace the corridor's toll plazas with those from a CSV rate sheet
    pub fn with_rate_sheet(mut self, csv_path: PathBuf) -> Self {
        self.rate_sheet = Some(csv_path);
        self
    }
}

impl CorridorRepository for FileCorridorRepository {
    fn load(&self) -> Result<Corridor> {
        let corridor = CorridorLoader::load_from_file(&self.toml_path)?;
        apply_rate_sheet(corridor, self.rate_sheet.as_deref())
    }

    fn describe(&self) -> String {
        match &self.rate_sheet {
            Some(sheet) => format!("{} (rates: {})", self.toml_path.display(), sheet.display()),
            None => self.toml_path.display().to_string(),
        }
    }
}

/// Swap in toll plazas from a CSV rate sheet, re-validating the result
pub fn apply_rate_sheet(corridor: Corridor, rate_sheet: Option<&Path>) -> Result<Corridor> {
    let Some(sheet) = rate_sheet else {
        return Ok(corridor);
    };
    let plazas = load_toll_plazas_from_csv(sheet)?;
    info!("Using {} toll plazas from {}", plazas.len(), sheet.display());
    let corridor = corridor.with_toll_plazas(plazas);
    corridor.validate()?;
    Ok(corridor)
}
