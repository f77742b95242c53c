#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub mod paths;
pub mod shells;

/// Number of tabulated momentum points in every Compton profile.
pub const COMPTON_PROFILE_POINTS: usize = 31;

/// Highest atomic number with tabulated data.
pub const MAX_ATOMIC_NUMBER: u32 = 100;

/// Pair production threshold, twice the electron rest mass (MeV).
pub const PAIR_PRODUCTION_THRESHOLD: f64 = 1.022;

/// Triplet production threshold, four times the electron rest mass (MeV).
pub const TRIPLET_PRODUCTION_THRESHOLD: f64 = 2.044;

/// Fine structure constant (2010 CODATA).
pub const FINE_STRUCTURE_CONSTANT: f64 = 7.2973525698e-3;

/// Compton profile momenta in units of the fine structure constant.
pub const COMPTON_MOMENTUM_COEFFICIENTS: [f64; COMPTON_PROFILE_POINTS] = [
    0.0, 0.05, 0.1, 0.15, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.4,
    3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0, 15.0, 20.0, 30.0, 40.0, 60.0, 100.0,
];

/// One processed element, as stored in a single data file.
///
/// Datasets and attributes are keyed by the path strings in [`paths`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementFile {
    pub attributes: BTreeMap<String, BTreeMap<String, Attribute>>,
    pub datasets: BTreeMap<String, Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Attribute {
    Float(f64),
    FloatArray(Vec<f64>),
    UintArray(Vec<u32>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Dataset {
    LogLog(Vec<LogLogBin>),
    Quadratic(Vec<QuadraticBin>),
    QuadraticTable(Vec<Vec<QuadraticBin>>),
    ShellOccupancy(Vec<ShellOccupancyRecord>),
    ShellEnergy(Vec<ShellEnergyRecord>),
    RadiativeTransition(Vec<RadiativeTransitionRecord>),
    NonradiativeTransition(Vec<NonradiativeTransitionRecord>),
}

impl Dataset {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LogLog(_) => "log-log bins",
            Self::Quadratic(_) => "quadratic bins",
            Self::QuadraticTable(_) => "quadratic bin table",
            Self::ShellOccupancy(_) => "shell occupancy records",
            Self::ShellEnergy(_) => "shell energy records",
            Self::RadiativeTransition(_) => "radiative transition records",
            Self::NonradiativeTransition(_) => "nonradiative transition records",
        }
    }
}

/// Log-log interpolation bin: `value = exp(y + slope * (ln(query) - x))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogLogBin {
    pub x: f64,
    pub y: f64,
    pub slope: f64,
}

/// Bin of a locally quadratic CDF:
/// `cdf(x) = cdf + pdf * (x - x0) + 0.5 * slope * (x - x0)^2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBin {
    pub x: f64,
    pub cdf: f64,
    pub pdf: f64,
    pub slope: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellOccupancyRecord {
    pub cdf: f64,
    pub shell: u32,
    pub compton_index: u32,
    pub binding_energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellEnergyRecord {
    pub shell: u32,
    pub energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiativeTransitionRecord {
    pub cdf: f64,
    pub secondary_shell: u32,
    pub energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonradiativeTransitionRecord {
    pub cdf: f64,
    pub secondary_shell: u32,
    pub tertiary_shell: u32,
    pub energy: f64,
}

/// A record type that is stored as a one-dimensional [`Dataset`].
pub trait DatasetRecord: Sized {
    fn from_dataset(dataset: &Dataset) -> Option<&[Self]>;
    fn into_dataset(records: Vec<Self>) -> Dataset;
    fn kind() -> &'static str;
}

macro_rules! dataset_record {
    ($record:ty, $variant:ident, $kind:literal) => {
        impl DatasetRecord for $record {
            fn from_dataset(dataset: &Dataset) -> Option<&[Self]> {
                match dataset {
                    Dataset::$variant(records) => Some(records.as_slice()),
                    _ => None,
                }
            }

            fn into_dataset(records: Vec<Self>) -> Dataset {
                Dataset::$variant(records)
            }

            fn kind() -> &'static str {
                $kind
            }
        }
    };
}

dataset_record!(LogLogBin, LogLog, "log-log bins");
dataset_record!(QuadraticBin, Quadratic, "quadratic bins");
dataset_record!(ShellOccupancyRecord, ShellOccupancy, "shell occupancy records");
dataset_record!(ShellEnergyRecord, ShellEnergy, "shell energy records");
dataset_record!(
    RadiativeTransitionRecord,
    RadiativeTransition,
    "radiative transition records"
);
dataset_record!(
    NonradiativeTransitionRecord,
    NonradiativeTransition,
    "nonradiative transition records"
);

impl ElementFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_dataset<T: DatasetRecord>(&mut self, path: &str, records: Vec<T>) {
        self.datasets
            .insert(String::from(path), T::into_dataset(records));
    }

    pub fn write_table(&mut self, path: &str, rows: Vec<Vec<QuadraticBin>>) {
        self.datasets
            .insert(String::from(path), Dataset::QuadraticTable(rows));
    }

    pub fn write_attribute(&mut self, path: &str, name: &str, value: Attribute) {
        self.attributes
            .entry(String::from(path))
            .or_default()
            .insert(String::from(name), value);
    }

    pub fn dataset(&self, path: &str) -> Option<&Dataset> {
        self.datasets.get(path)
    }

    pub fn attribute(&self, path: &str, name: &str) -> Option<&Attribute> {
        self.attributes.get(path).and_then(|group| group.get(name))
    }
}

/// Name of the data file that holds element `atomic_number`.
pub fn element_file_name(atomic_number: u32) -> String {
    format!(
        "{}{}{}",
        paths::PHOTON_DATA_FILE_PREFIX,
        atomic_number,
        paths::DATA_FILE_SUFFIX
    )
}

/// Path of a per-subshell dataset below `root`.
pub fn subshell_path(root: &str, shell: u32) -> String {
    format!("{root}{shell}")
}
