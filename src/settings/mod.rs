use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use thiserror::Error;

use crate::maze::export::ExportOptions;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_cell_size() -> f64 {
    ExportOptions::default().cell_size
}

fn default_padding() -> f64 {
    ExportOptions::default().padding
}

fn default_stroke_width() -> f64 {
    ExportOptions::default().stroke_width
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("Mazes")
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            cell_size: default_cell_size(),
            padding: default_padding(),
            stroke_width: default_stroke_width(),
            output_dir: default_output_dir(),
        }
    }
}

impl ExportSettings {
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            cell_size: self.cell_size,
            padding: self.padding,
            stroke_width: self.stroke_width,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub columns: Option<usize>,
    #[serde(default)]
    pub start: Option<(i32, i32)>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub export: Option<ExportSettings>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

impl Settings {
    pub const DEFAULT_ROWS: usize = 15;
    pub const DEFAULT_COLUMNS: usize = 25;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rows(mut self, value: usize) -> Self {
        self.rows = Some(value);
        self
    }

    pub fn get_rows(&self) -> usize {
        self.rows.unwrap_or(Self::DEFAULT_ROWS)
    }

    pub fn set_columns(mut self, value: usize) -> Self {
        self.columns = Some(value);
        self
    }

    pub fn get_columns(&self) -> usize {
        self.columns.unwrap_or(Self::DEFAULT_COLUMNS)
    }

    pub fn set_start(mut self, value: (i32, i32)) -> Self {
        self.start = Some(value);
        self
    }

    pub fn get_start(&self) -> (i32, i32) {
        self.start.unwrap_or_default()
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_export(mut self, value: ExportSettings) -> Self {
        self.export = Some(value);
        self
    }

    pub fn get_export(&self) -> ExportSettings {
        self.export.clone().unwrap_or_default()
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mazepath")
            .join("settings.ron")
    }

    pub fn parse(s: &str) -> Result<Self, LoadError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(s)?)
    }

    /// Reads settings from `path`, writing the default file there first if it's missing
    pub fn load(path: PathBuf) -> Result<Self, LoadError> {
        log::debug!("Loading settings from {:?}", path);

        if !path.exists() {
            log::info!("Settings file not found, creating default at {:?}", path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, DEFAULT_SETTINGS)?;
            return Self::parse(DEFAULT_SETTINGS);
        }

        let settings_string = fs::read_to_string(&path)?;
        Self::parse(&settings_string)
    }
}
