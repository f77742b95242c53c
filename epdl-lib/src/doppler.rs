//! Shell occupancy and Compton profile data used for Doppler broadening.

use std::collections::HashMap;

use epdl_data::{QuadraticBin, ShellEnergyRecord, ShellOccupancyRecord, paths};

use crate::basic::{read_bins, read_energy_limits};
use crate::config::{DataConfig, validate_energy_range};
use crate::error::{PhotonDataError, Result};
use crate::interp::{quadratic_cdf, quadratic_inverse};
use crate::search::{lower_bound_by_key, upper_bound_by_key};
use crate::store::DataFileHandler;

#[derive(Debug, Clone)]
pub struct PhotonDataDopplerBroadening {
    atomic_number: u32,
    atomic_weight: f64,
    shell_occupancy: Vec<ShellOccupancyRecord>,
    binding_energies: HashMap<u32, f64>,
    kinetic_energies: HashMap<u32, f64>,
    compton_profiles: Vec<Vec<QuadraticBin>>,
}

impl PhotonDataDopplerBroadening {
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
            profiles = data.compton_profiles.len(),
            "loaded Doppler broadening data"
        );
        Ok(data)
    }

    /// # Panics
    ///
    /// If the data file cannot be loaded.
    pub fn new(atomic_number: u32, config: &DataConfig) -> Self {
        match Self::try_new(atomic_number, config) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(atomic_number, error = %e, "cannot load Doppler broadening data");
                panic!("cannot load Doppler broadening data for Z = {atomic_number}: {e}");
            }
        }
    }

    pub fn from_handler(
        atomic_number: u32,
        handler: &DataFileHandler,
        energy_min: f64,
        energy_max: f64,
    ) -> Result<Self> {
        validate_energy_range(energy_min, energy_max)?;

        let atomic_weight =
            handler.read_value_from_group_attribute(paths::ROOT, paths::ATOMIC_WEIGHT_ATTRIBUTE)?;
        read_energy_limits(handler, energy_min, energy_max)?;

        let shell_occupancy: Vec<ShellOccupancyRecord> =
            read_bins(handler, paths::ELECTRON_SHELL_CDF_LOC)?;
        let binding_energies =
            energy_map(read_bins(handler, paths::ELECTRON_SHELL_BINDING_ENERGY_LOC)?);
        let kinetic_energies =
            energy_map(read_bins(handler, paths::ELECTRON_SHELL_KINETIC_ENERGY_LOC)?);

        let compton_profiles = handler.read_table_from_dataset(paths::COMPTON_PROFILE_CDF_LOC)?;
        check_compton_profiles(&compton_profiles, &shell_occupancy)?;

        Ok(Self {
            atomic_number,
            atomic_weight,
            shell_occupancy,
            binding_energies,
            kinetic_energies,
            compton_profiles,
        })
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn atomic_weight(&self) -> f64 {
        self.atomic_weight
    }

    pub fn number_of_compton_profiles(&self) -> usize {
        self.compton_profiles.len()
    }

    /// Samples the shell left with a vacancy by an incoherent scatter.
    ///
    /// Returns the EADL designator of the shell and the row of its Compton
    /// profile.
    pub fn incoherent_scattering_vacancy_shell_data(&self, cdf: f64) -> (u32, usize) {
        debug_assert!((0.0..=1.0).contains(&cdf));
        let record = upper_bound_by_key(&self.shell_occupancy, |r| r.cdf, cdf);
        (record.shell, record.compton_index as usize)
    }

    pub fn compton_profile_cdf(&self, row: usize, momentum: f64) -> f64 {
        debug_assert!(row < self.compton_profiles.len());
        debug_assert!(momentum >= 0.0);
        let profile = &self.compton_profiles[row];
        let bin = lower_bound_by_key(profile, |b| b.x, momentum);
        quadratic_cdf(bin, momentum)
    }

    /// Momentum at which the profile in `row` reaches `cdf`. Profiles are
    /// tabulated in momentum directly, so no square root is taken.
    pub fn compton_profile_momentum(&self, row: usize, cdf: f64) -> f64 {
        debug_assert!(row < self.compton_profiles.len());
        debug_assert!((0.0..=1.0).contains(&cdf));
        let profile = &self.compton_profiles[row];
        let bin = lower_bound_by_key(profile, |b| b.cdf, cdf);
        quadratic_inverse(bin, cdf)
    }

    /// Binding energy (MeV) of the shell with EADL designator `shell`.
    pub fn shell_binding_energy(&self, shell: u32) -> f64 {
        debug_assert!(self.binding_energies.contains_key(&shell));
        self.binding_energies.get(&shell).copied().unwrap_or(f64::NAN)
    }

    /// Average kinetic energy (MeV) of the shell with EADL designator `shell`.
    pub fn shell_kinetic_energy(&self, shell: u32) -> f64 {
        debug_assert!(self.kinetic_energies.contains_key(&shell));
        self.kinetic_energies.get(&shell).copied().unwrap_or(f64::NAN)
    }
}

/// Every sampled vacancy must lead to a searchable profile row.
fn check_compton_profiles(
    profiles: &[Vec<QuadraticBin>],
    shell_occupancy: &[ShellOccupancyRecord],
) -> Result<()> {
    if profiles.is_empty() {
        return Err(PhotonDataError::malformed(
            paths::COMPTON_PROFILE_CDF_LOC,
            "table has no rows",
        ));
    }
    if let Some((row, bins)) = profiles.iter().enumerate().find(|(_, bins)| bins.len() < 2) {
        return Err(PhotonDataError::malformed(
            paths::COMPTON_PROFILE_CDF_LOC,
            format!("row {row} has {} bins, expected at least 2", bins.len()),
        ));
    }
    if let Some(record) = shell_occupancy
        .iter()
        .find(|r| r.compton_index as usize >= profiles.len())
    {
        return Err(PhotonDataError::malformed(
            paths::ELECTRON_SHELL_CDF_LOC,
            format!(
                "shell {} refers to Compton profile row {} of {}",
                record.shell,
                record.compton_index,
                profiles.len()
            ),
        ));
    }
    Ok(())
}

fn energy_map(records: Vec<ShellEnergyRecord>) -> HashMap<u32, f64> {
    records.into_iter().map(|r| (r.shell, r.energy)).collect()
}
