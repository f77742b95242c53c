use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use epdl_data::MAX_ATOMIC_NUMBER;
use serde::Deserialize;

/// Inputs, output and energy range of one generator run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory with one subdirectory of raw tables per atomic number.
    pub raw_directory: PathBuf,
    /// Compton profile files are `<prefix><Z>.txt`.
    pub compton_file_prefix: String,
    pub output_directory: PathBuf,
    #[serde(default = "default_energy_min")]
    pub energy_min: f64,
    #[serde(default = "default_energy_max")]
    pub energy_max: f64,
    #[serde(default = "default_atomic_number_start")]
    pub atomic_number_start: u32,
    #[serde(default = "default_atomic_number_end")]
    pub atomic_number_end: u32,
}

fn default_energy_min() -> f64 {
    1.0e-3
}

fn default_energy_max() -> f64 {
    20.0
}

fn default_atomic_number_start() -> u32 {
    1
}

fn default_atomic_number_end() -> u32 {
    MAX_ATOMIC_NUMBER
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: GeneratorConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.energy_min > 0.0 && self.energy_min < self.energy_max,
            "invalid energy range [{}, {}] MeV",
            self.energy_min,
            self.energy_max
        );
        ensure!(
            1 <= self.atomic_number_start
                && self.atomic_number_start <= self.atomic_number_end
                && self.atomic_number_end <= MAX_ATOMIC_NUMBER,
            "invalid atomic number range {}..={}",
            self.atomic_number_start,
            self.atomic_number_end
        );
        Ok(())
    }

    pub fn atomic_numbers(&self) -> RangeInclusive<u32> {
        self.atomic_number_start..=self.atomic_number_end
    }

    /// Directory holding the raw tables of element `atomic_number`.
    pub fn element_directory(&self, atomic_number: u32) -> PathBuf {
        self.raw_directory.join(atomic_number.to_string())
    }

    pub fn compton_file(&self, atomic_number: u32) -> PathBuf {
        PathBuf::from(format!("{}{atomic_number}.txt", self.compton_file_prefix))
    }

    pub fn output_file(&self, atomic_number: u32) -> PathBuf {
        self.output_directory
            .join(epdl_data::element_file_name(atomic_number))
    }
}
