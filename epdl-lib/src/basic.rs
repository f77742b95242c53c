//! Cross sections, form factor and scattering function of one element.

use epdl_data::{
    DatasetRecord, LogLogBin, PAIR_PRODUCTION_THRESHOLD, QuadraticBin, TRIPLET_PRODUCTION_THRESHOLD, paths,
};

use crate::config::{DataConfig, validate_energy_range};
use crate::error::{PhotonDataError, Result};
use crate::interp::{log_log_evaluate, log_log_evaluate_from_floor, quadratic_cdf, quadratic_inverse};
use crate::search::lower_bound_by_key;
use crate::store::DataFileHandler;

/// Tabulated photon interaction data of one element.
///
/// Built once and then read concurrently; every query takes `&self` and
/// is a binary search followed by a closed-form evaluation inside the bin.
#[derive(Debug, Clone)]
pub struct PhotonDataBasic {
    atomic_number: u32,
    atomic_weight: f64,
    energy_limits: (f64, f64),
    coherent: Vec<LogLogBin>,
    incoherent: Vec<LogLogBin>,
    photoelectric: Vec<LogLogBin>,
    pair_production: Vec<LogLogBin>,
    triplet_production: Vec<LogLogBin>,
    form_factor: Vec<QuadraticBin>,
    scattering_function: Vec<LogLogBin>,
}

impl PhotonDataBasic {
    /// Loads the element's data file from the configured data directory.
    pub fn try_new(atomic_number: u32, config: &DataConfig) -> Result<Self> {
        config.validate()?;
        let path = config.element_file_path(atomic_number);
        let handler = DataFileHandler::open_read_only(&path)?;
        let data = Self::from_handler(
            atomic_number,
            &handler,
            config.energy_min,
            config.energy_max,
        )?;

        tracing::info!(
            atomic_number,
            path = %path.display(),
            "loaded photon cross section data"
        );
        Ok(data)
    }

    /// Like [`PhotonDataBasic::try_new`], but any failure is fatal.
    ///
    /// # Panics
    ///
    /// If the file cannot be read or does not cover the configured energy
    /// range.
    pub fn new(atomic_number: u32, config: &DataConfig) -> Self {
        match Self::try_new(atomic_number, config) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(atomic_number, error = %e, "cannot load photon data");
                panic!("cannot load photon data for Z = {atomic_number}: {e}");
            }
        }
    }

    /// Reads every table from an opened data file.
    pub fn from_handler(
        atomic_number: u32,
        handler: &DataFileHandler,
        energy_min: f64,
        energy_max: f64,
    ) -> Result<Self> {
        validate_energy_range(energy_min, energy_max)?;

        let atomic_weight =
            handler.read_value_from_group_attribute(paths::ROOT, paths::ATOMIC_WEIGHT_ATTRIBUTE)?;
        let energy_limits = read_energy_limits(handler, energy_min, energy_max)?;

        Ok(Self {
            atomic_number,
            atomic_weight,
            energy_limits,
            coherent: read_bins(handler, paths::COHERENT_CROSS_SECTION_LOC)?,
            incoherent: read_bins(handler, paths::INCOHERENT_CROSS_SECTION_LOC)?,
            photoelectric: read_bins(handler, paths::PHOTOELECTRIC_CROSS_SECTION_LOC)?,
            pair_production: read_bins(handler, paths::PAIR_PRODUCTION_CROSS_SECTION_LOC)?,
            triplet_production: read_bins(handler, paths::TRIPLET_PRODUCTION_CROSS_SECTION_LOC)?,
            form_factor: read_bins(handler, paths::ATOMIC_FORM_FACTOR_LOC)?,
            scattering_function: read_bins(handler, paths::SCATTERING_FUNCTION_LOC)?,
        })
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Atomic weight (g/mol).
    pub fn atomic_weight(&self) -> f64 {
        self.atomic_weight
    }

    /// Energy range (MeV) covered by the tabulated data.
    pub fn energy_limits(&self) -> (f64, f64) {
        self.energy_limits
    }

    pub fn coherent_cross_section(&self, energy: f64) -> f64 {
        debug_assert!(energy > 0.0);
        log_log_lookup(&self.coherent, energy)
    }

    pub fn incoherent_cross_section(&self, energy: f64) -> f64 {
        debug_assert!(energy > 0.0);
        log_log_lookup(&self.incoherent, energy)
    }

    pub fn photoelectric_cross_section(&self, energy: f64) -> f64 {
        debug_assert!(energy > 0.0);
        log_log_lookup(&self.photoelectric, energy)
    }

    pub fn pair_production_cross_section(&self, energy: f64) -> f64 {
        debug_assert!(
            energy > PAIR_PRODUCTION_THRESHOLD,
            "energy {energy} MeV is below the pair production threshold"
        );
        log_log_lookup(&self.pair_production, energy)
    }

    pub fn triplet_production_cross_section(&self, energy: f64) -> f64 {
        debug_assert!(
            energy > TRIPLET_PRODUCTION_THRESHOLD,
            "energy {energy} MeV is below the triplet production threshold"
        );
        log_log_lookup(&self.triplet_production, energy)
    }

    /// Incoherent scattering function at `argument`. Zero inside the floor
    /// bin of the table.
    pub fn scattering_function(&self, argument: f64) -> f64 {
        debug_assert!(argument > 0.0);
        let log_argument = argument.ln();
        let bin = lower_bound_by_key(&self.scattering_function, |b| b.x, log_argument);
        log_log_evaluate_from_floor(bin, log_argument)
    }

    /// Normalized integrated form factor at `argument`. The table is
    /// indexed by the squared argument.
    pub fn form_factor_cdf(&self, argument: f64) -> f64 {
        debug_assert!(argument > 0.0);
        let squared = argument * argument;
        let bin = lower_bound_by_key(&self.form_factor, |b| b.x, squared);
        quadratic_cdf(bin, squared)
    }

    /// Argument at which the normalized integrated form factor equals `cdf`.
    pub fn form_factor_argument(&self, cdf: f64) -> f64 {
        debug_assert!((0.0..=1.0).contains(&cdf));
        let bin = lower_bound_by_key(&self.form_factor, |b| b.cdf, cdf);
        quadratic_inverse(bin, cdf).sqrt()
    }

    /// Sum of all partial cross sections open at `energy`. Pair and
    /// triplet production count only strictly above their thresholds.
    pub fn total_cross_section(&self, energy: f64) -> f64 {
        debug_assert!(energy > 0.0);
        let mut total = self.coherent_cross_section(energy)
            + self.incoherent_cross_section(energy)
            + self.photoelectric_cross_section(energy);

        if energy > PAIR_PRODUCTION_THRESHOLD {
            total += self.pair_production_cross_section(energy);
        }
        if energy > TRIPLET_PRODUCTION_THRESHOLD {
            total += self.triplet_production_cross_section(energy);
        }
        total
    }

    /// Probability that an interaction at `energy` is not photoelectric
    /// absorption.
    pub fn nonabsorption_probability(&self, energy: f64) -> f64 {
        debug_assert!(energy > 0.0);
        1.0 - self.photoelectric_cross_section(energy) / self.total_cross_section(energy)
    }
}

#[inline]
fn log_log_lookup(table: &[LogLogBin], energy: f64) -> f64 {
    let log_energy = energy.ln();
    let bin = lower_bound_by_key(table, |b| b.x, log_energy);
    log_log_evaluate(bin, log_energy)
}

/// Reads a dataset that is searched at query time, so it needs at least
/// one bin.
pub(crate) fn read_bins<T: DatasetRecord + Clone>(
    handler: &DataFileHandler,
    path: &str,
) -> Result<Vec<T>> {
    let bins: Vec<T> = handler.read_array_from_dataset(path)?;
    if bins.is_empty() {
        return Err(PhotonDataError::malformed(path, "table has no bins"));
    }
    Ok(bins)
}

pub(crate) fn read_energy_limits(
    handler: &DataFileHandler,
    energy_min: f64,
    energy_max: f64,
) -> Result<(f64, f64)> {
    let limits =
        handler.read_array_from_group_attribute(paths::ROOT, paths::ENERGY_LIMITS_ATTRIBUTE)?;
    let [table_min, table_max] = limits[..] else {
        return Err(PhotonDataError::AttributeType {
            path: paths::ROOT.to_string(),
            name: paths::ENERGY_LIMITS_ATTRIBUTE.to_string(),
            expected: "a [min, max] pair",
        });
    };

    if table_min > energy_min || table_max < energy_max {
        return Err(PhotonDataError::EnergyRangeNotCovered {
            table_min,
            table_max,
            energy_min,
            energy_max,
        });
    }
    Ok((table_min, table_max))
}
