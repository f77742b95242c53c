use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PhotonDataError, Result};

/// Default lower bound of the problem energy range (MeV).
pub const DEFAULT_ENERGY_MIN: f64 = 1.0e-3;
/// Default upper bound of the problem energy range (MeV).
pub const DEFAULT_ENERGY_MAX: f64 = 20.0;

/// Where the processed element files live and which energy range the
/// problem needs covered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    pub data_directory: PathBuf,
    #[serde(default = "default_energy_min")]
    pub energy_min: f64,
    #[serde(default = "default_energy_max")]
    pub energy_max: f64,
}

fn default_energy_min() -> f64 {
    DEFAULT_ENERGY_MIN
}

fn default_energy_max() -> f64 {
    DEFAULT_ENERGY_MAX
}

impl DataConfig {
    pub fn new(data_directory: impl Into<PathBuf>) -> Self {
        Self {
            data_directory: data_directory.into(),
            energy_min: DEFAULT_ENERGY_MIN,
            energy_max: DEFAULT_ENERGY_MAX,
        }
    }

    pub fn with_energy_range(mut self, energy_min: f64, energy_max: f64) -> Self {
        self.energy_min = energy_min;
        self.energy_max = energy_max;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PhotonDataError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let config: DataConfig =
            toml::from_str(content).map_err(|e| PhotonDataError::Config {
                path: origin.to_string(),
                source: e,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks `0 < energy_min < energy_max`.
    pub fn validate(&self) -> Result<()> {
        validate_energy_range(self.energy_min, self.energy_max)
    }

    /// Full path of the processed file for `atomic_number`.
    pub fn element_file_path(&self, atomic_number: u32) -> PathBuf {
        self.data_directory
            .join(epdl_data::element_file_name(atomic_number))
    }
}

pub(crate) fn validate_energy_range(energy_min: f64, energy_max: f64) -> Result<()> {
    if energy_min > 0.0 && energy_min < energy_max {
        Ok(())
    } else {
        Err(PhotonDataError::InvalidEnergyRange {
            min: energy_min,
            max: energy_max,
        })
    }
}
