//! Builders that turn raw tables into the datasets of an element file.

use anyhow::{Context, Result, ensure};
use epdl_data::{
    COMPTON_MOMENTUM_COEFFICIENTS, COMPTON_PROFILE_POINTS, FINE_STRUCTURE_CONSTANT, LogLogBin,
    NonradiativeTransitionRecord, QuadraticBin, RadiativeTransitionRecord, ShellEnergyRecord,
    ShellOccupancyRecord, shells,
};

use crate::processing::{
    calculate_continuous_cdf, calculate_discrete_cdf, calculate_slopes, coarsen_constant_regions,
    process_log_log, process_square_square, remove_elements_greater_than,
    remove_elements_less_than,
};

fn log_log_bins(points: Vec<(f64, f64)>) -> Vec<LogLogBin> {
    let mut bins: Vec<LogLogBin> = points
        .into_iter()
        .map(|(x, y)| LogLogBin { x, y, slope: 0.0 })
        .collect();
    calculate_slopes(&mut bins, |b| b.x, |b| b.y, |b| &mut b.slope);
    bins
}

fn quadratic_bins(points: Vec<(f64, f64)>) -> Vec<QuadraticBin> {
    let mut bins: Vec<QuadraticBin> = points
        .into_iter()
        .map(|(x, pdf)| QuadraticBin {
            x,
            cdf: 0.0,
            pdf,
            slope: 0.0,
        })
        .collect();
    calculate_continuous_cdf(&mut bins);
    calculate_slopes(&mut bins, |b| b.x, |b| b.pdf, |b| &mut b.slope);
    bins
}

fn trim_energy_range(points: &mut Vec<(f64, f64)>, energy_min: f64, energy_max: f64) {
    remove_elements_less_than(points, |p| p.0, energy_min);
    remove_elements_greater_than(points, |p| p.0, energy_max);
}

/// Integrated cross section (coherent, incoherent, photoelectric) on a
/// log-log grid restricted to `[energy_min, energy_max]`.
pub fn cross_section(
    mut points: Vec<(f64, f64)>,
    energy_min: f64,
    energy_max: f64,
) -> Result<Vec<LogLogBin>> {
    ensure!(!points.is_empty(), "cross section table is empty");
    trim_energy_range(&mut points, energy_min, energy_max);
    process_log_log(&mut points);
    Ok(log_log_bins(points))
}

/// Cross section of a reaction with a threshold (pair or triplet production).
///
/// The cross section vanishes at the threshold, so when the energy range
/// reaches below it the first bin is made constant.
pub fn threshold_cross_section(
    mut points: Vec<(f64, f64)>,
    energy_min: f64,
    energy_max: f64,
    threshold: f64,
) -> Result<Vec<LogLogBin>> {
    ensure!(!points.is_empty(), "cross section table is empty");
    trim_energy_range(&mut points, energy_min, energy_max);
    ensure!(
        points.len() > 1,
        "cross section above {threshold} MeV has fewer than two points in range"
    );
    process_log_log(&mut points);
    if energy_min < threshold {
        points[0].1 = points[1].1;
    }
    Ok(log_log_bins(points))
}

/// Squared form factor integrated over the squared argument.
pub fn form_factor(mut points: Vec<(f64, f64)>) -> Result<Vec<QuadraticBin>> {
    ensure!(points.len() > 1, "form factor table needs at least two points");
    process_square_square(&mut points);
    Ok(quadratic_bins(points))
}

/// Scattering function on a log-log grid.
///
/// The first point is `(0, 0)`, i.e. `(-inf, -inf)` after the transform, so
/// its slope is set to 0 and lookups below the second point evaluate to 0.
pub fn scattering_function(mut points: Vec<(f64, f64)>) -> Result<Vec<LogLogBin>> {
    ensure!(
        points.len() > 2,
        "scattering function table needs at least three points"
    );
    coarsen_constant_regions(&mut points, |p| p.1);
    process_log_log(&mut points);
    let mut bins = log_log_bins(points);
    bins[0].slope = 0.0;
    Ok(bins)
}

/// Shell occupancy CDF joined with the Compton profile rows and the binding
/// energies.
///
/// `electrons` and `binding_energies` hold `(designator, value)` per subshell
/// in the order of the raw tables.
pub fn shell_occupancy(
    atomic_number: u32,
    electrons: &[(u32, f64)],
    binding_energies: &[(u32, f64)],
) -> Result<Vec<ShellOccupancyRecord>> {
    ensure!(!electrons.is_empty(), "shell occupancy table is empty");
    let layout = shells::compton_profile_layout(atomic_number)
        .with_context(|| format!("no Compton profile layout for Z = {atomic_number}"))?;

    ensure!(
        layout.len() == electrons.len(),
        "Z = {atomic_number}: {} occupied subshells but {} Compton profile entries",
        electrons.len(),
        layout.len()
    );
    ensure!(
        layout[0].0 == electrons[0].0 && layout[layout.len() - 1].0 == electrons[electrons.len() - 1].0,
        "Z = {atomic_number}: occupied subshells do not match the Compton profile layout"
    );
    ensure!(
        binding_energies.len() == electrons.len(),
        "Z = {atomic_number}: {} binding energies for {} occupied subshells",
        binding_energies.len(),
        electrons.len()
    );

    let mut cdf = electrons.to_vec();
    calculate_discrete_cdf(&mut cdf, |entry| &mut entry.1);

    Ok(cdf
        .iter()
        .zip(layout)
        .zip(binding_energies)
        .map(|((&(_, cdf), &(shell, row)), &(_, binding_energy))| ShellOccupancyRecord {
            cdf,
            shell,
            compton_index: row,
            binding_energy,
        })
        .collect())
}

pub fn shell_energies(table: &[(u32, f64)]) -> Vec<ShellEnergyRecord> {
    table
        .iter()
        .map(|&(shell, energy)| ShellEnergyRecord { shell, energy })
        .collect()
}

/// Radiative transitions filling a vacancy, as a CDF over the secondary
/// subshell, and the total radiative transition probability.
///
/// Each row is `(secondary shell, probability, photon energy)`.
pub fn radiative_transitions(
    rows: &[(u32, f64, f64)],
) -> Result<(Vec<RadiativeTransitionRecord>, f64)> {
    ensure!(!rows.is_empty(), "radiative transition table is empty");
    let total: f64 = rows.iter().map(|r| r.1).sum();

    let mut records: Vec<RadiativeTransitionRecord> = rows
        .iter()
        .map(|&(secondary_shell, probability, energy)| RadiativeTransitionRecord {
            cdf: probability,
            secondary_shell,
            energy,
        })
        .collect();
    calculate_discrete_cdf(&mut records, |r| &mut r.cdf);
    Ok((records, total))
}

/// Non-radiative transitions filling a vacancy, as a CDF over the
/// (secondary, tertiary) subshell pair.
///
/// Each row is `(secondary shell, tertiary shell, probability, electron
/// energy)`.
pub fn nonradiative_transitions(
    rows: &[(u32, u32, f64, f64)],
) -> Result<Vec<NonradiativeTransitionRecord>> {
    ensure!(!rows.is_empty(), "non-radiative transition table is empty");
    let mut records: Vec<NonradiativeTransitionRecord> = rows
        .iter()
        .map(
            |&(secondary_shell, tertiary_shell, probability, energy)| NonradiativeTransitionRecord {
                cdf: probability,
                secondary_shell,
                tertiary_shell,
                energy,
            },
        )
        .collect();
    calculate_discrete_cdf(&mut records, |r| &mut r.cdf);
    Ok(records)
}

/// Compton profiles of every row, `COMPTON_PROFILE_POINTS` values each,
/// integrated into CDFs over the momentum.
pub fn compton_profiles(values: &[f64]) -> Result<Vec<Vec<QuadraticBin>>> {
    ensure!(
        !values.is_empty() && values.len() % COMPTON_PROFILE_POINTS == 0,
        "expected a multiple of {COMPTON_PROFILE_POINTS} Compton profile values, found {}",
        values.len()
    );

    Ok(values
        .chunks_exact(COMPTON_PROFILE_POINTS)
        .map(|profile| {
            let points = COMPTON_MOMENTUM_COEFFICIENTS
                .iter()
                .zip(profile)
                .map(|(&c, &value)| (c * FINE_STRUCTURE_CONSTANT, value))
                .collect();
            quadratic_bins(points)
        })
        .collect())
}
