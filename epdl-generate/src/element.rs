//! Assembles and writes the data file of one element.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use epdl_data::{
    Attribute, ElementFile, PAIR_PRODUCTION_THRESHOLD, TRIPLET_PRODUCTION_THRESHOLD, paths,
    shells, subshell_path,
};
use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::parsers::{designator, read_compton_profiles, read_header, read_table};
use crate::tables;

// ENDL reaction designators of the raw tables.
pub const COHERENT: u32 = 71000;
pub const INCOHERENT: u32 = 72000;
pub const PHOTOELECTRIC: u32 = 73000;
pub const PAIR_PRODUCTION: u32 = 74000;
pub const TRIPLET_PRODUCTION: u32 = 75000;
pub const FORM_FACTOR: u32 = 93941;
pub const SCATTERING_FUNCTION: u32 = 93942;
pub const SHELL_OCCUPANCY: u32 = 91912;
pub const BINDING_ENERGY: u32 = 91913;
pub const KINETIC_ENERGY: u32 = 91914;
pub const RADIATIVE_TRANSITION: u32 = 92931;
pub const NONRADIATIVE_TRANSITION: u32 = 92932;

pub const HEADER_FILE: &str = "header.toml";

/// Zstd level of the written files.
const COMPRESSION_LEVEL: i32 = 19;

pub fn table_path(directory: &Path, reaction: u32) -> PathBuf {
    directory.join(format!("{reaction}.dat"))
}

pub fn subshell_table_path(directory: &Path, reaction: u32, shell: u32) -> PathBuf {
    directory.join(format!("{reaction}_{shell}.dat"))
}

/// Subshells with a `<reaction>_<shell>.dat` table in `directory`, sorted.
fn subshell_tables(directory: &Path, reaction: u32) -> Result<Vec<u32>> {
    let prefix = format!("{reaction}_");
    let mut found = Vec::new();
    let entries = std::fs::read_dir(directory)
        .with_context(|| format!("failed to list {}", directory.display()))?;
    for entry in entries {
        let name = entry?.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(shell) = name
            .strip_prefix(&prefix)
            .and_then(|rest| rest.strip_suffix(".dat"))
            .and_then(|shell| shell.parse().ok())
        {
            found.push(shell);
        }
    }
    found.sort_unstable();
    Ok(found)
}

fn pairs(table: Vec<[f64; 2]>) -> Vec<(f64, f64)> {
    table.into_iter().map(|[x, y]| (x, y)).collect()
}

fn shell_values(table: Vec<[f64; 2]>) -> Result<Vec<(u32, f64)>> {
    table
        .into_iter()
        .map(|[shell, value]| Ok((designator(shell)?, value)))
        .collect()
}

fn read_pairs(directory: &Path, reaction: u32) -> Result<Vec<(f64, f64)>> {
    Ok(pairs(read_table(&table_path(directory, reaction))?))
}

fn read_shell_values(directory: &Path, reaction: u32) -> Result<Vec<(u32, f64)>> {
    shell_values(read_table(&table_path(directory, reaction))?)
}

/// Builds the data file of `atomic_number` from its raw tables.
pub fn process_element(atomic_number: u32, config: &GeneratorConfig) -> Result<ElementFile> {
    let directory = config.element_directory(atomic_number);
    let header = read_header(&directory.join(HEADER_FILE))?;

    let mut file = ElementFile::new();
    file.write_attribute(
        paths::ROOT,
        paths::ATOMIC_WEIGHT_ATTRIBUTE,
        Attribute::Float(header.atomic_weight),
    );
    file.write_attribute(
        paths::ROOT,
        paths::ENERGY_LIMITS_ATTRIBUTE,
        Attribute::FloatArray(vec![config.energy_min, config.energy_max]),
    );

    process_photon_tables(&mut file, &directory, config)?;
    process_atomic_tables(&mut file, atomic_number, &directory)?;
    process_compton_profiles(&mut file, atomic_number, &config.compton_file(atomic_number))?;

    info!(
        atomic_number,
        datasets = file.datasets.len(),
        "processed element"
    );
    Ok(file)
}

fn process_photon_tables(
    file: &mut ElementFile,
    directory: &Path,
    config: &GeneratorConfig,
) -> Result<()> {
    let (energy_min, energy_max) = (config.energy_min, config.energy_max);

    for (reaction, location) in [
        (COHERENT, paths::COHERENT_CROSS_SECTION_LOC),
        (INCOHERENT, paths::INCOHERENT_CROSS_SECTION_LOC),
        (PHOTOELECTRIC, paths::PHOTOELECTRIC_CROSS_SECTION_LOC),
    ] {
        let bins = tables::cross_section(read_pairs(directory, reaction)?, energy_min, energy_max)
            .with_context(|| format!("reaction {reaction}"))?;
        file.write_dataset(location, bins);
    }

    let mut photoelectric_shells = subshell_tables(directory, PHOTOELECTRIC)?;
    for &shell in &photoelectric_shells {
        let points = pairs(read_table(&subshell_table_path(directory, PHOTOELECTRIC, shell))?);
        let bins = tables::cross_section(points, energy_min, energy_max)
            .with_context(|| format!("photoelectric subshell {shell}"))?;
        file.write_dataset(
            &subshell_path(paths::PHOTOELECTRIC_SUBSHELL_CROSS_SECTION_ROOT, shell),
            bins,
        );
    }
    if photoelectric_shells.is_empty() {
        warn!(directory = %directory.display(), "no photoelectric subshell tables");
        photoelectric_shells.push(0);
    }
    file.write_attribute(
        paths::PHOTOELECTRIC_SUBSHELL_CROSS_SECTION_ROOT,
        paths::PHOTOELECTRIC_SHELL_ATTRIBUTE,
        Attribute::UintArray(photoelectric_shells),
    );

    for (reaction, location, threshold) in [
        (
            PAIR_PRODUCTION,
            paths::PAIR_PRODUCTION_CROSS_SECTION_LOC,
            PAIR_PRODUCTION_THRESHOLD,
        ),
        (
            TRIPLET_PRODUCTION,
            paths::TRIPLET_PRODUCTION_CROSS_SECTION_LOC,
            TRIPLET_PRODUCTION_THRESHOLD,
        ),
    ] {
        let bins = tables::threshold_cross_section(
            read_pairs(directory, reaction)?,
            energy_min,
            energy_max,
            threshold,
        )
        .with_context(|| format!("reaction {reaction}"))?;
        file.write_dataset(location, bins);
    }

    file.write_dataset(
        paths::ATOMIC_FORM_FACTOR_LOC,
        tables::form_factor(read_pairs(directory, FORM_FACTOR)?)?,
    );
    file.write_dataset(
        paths::SCATTERING_FUNCTION_LOC,
        tables::scattering_function(read_pairs(directory, SCATTERING_FUNCTION)?)?,
    );
    Ok(())
}

fn process_atomic_tables(
    file: &mut ElementFile,
    atomic_number: u32,
    directory: &Path,
) -> Result<()> {
    let electrons = read_shell_values(directory, SHELL_OCCUPANCY)?;
    let binding_energies = read_shell_values(directory, BINDING_ENERGY)?;
    let kinetic_energies = read_shell_values(directory, KINETIC_ENERGY)?;

    file.write_dataset(
        paths::ELECTRON_SHELL_CDF_LOC,
        tables::shell_occupancy(atomic_number, &electrons, &binding_energies)?,
    );
    file.write_dataset(
        paths::ELECTRON_SHELL_BINDING_ENERGY_LOC,
        tables::shell_energies(&binding_energies),
    );
    file.write_dataset(
        paths::ELECTRON_SHELL_KINETIC_ENERGY_LOC,
        tables::shell_energies(&kinetic_energies),
    );

    let radiative_root = format!(
        "{}{}",
        paths::TRANSITION_PROBABILITY_ROOT,
        paths::RADIATIVE_TRANSITION_SUB_ROOT
    );
    let nonradiative_root = format!(
        "{}{}",
        paths::TRANSITION_PROBABILITY_ROOT,
        paths::NONRADIATIVE_TRANSITION_SUB_ROOT
    );

    let mut relaxation_shells = subshell_tables(directory, RADIATIVE_TRANSITION)?;
    for &shell in &relaxation_shells {
        let rows = read_table::<3>(&subshell_table_path(directory, RADIATIVE_TRANSITION, shell))?
            .into_iter()
            .map(|[secondary, probability, energy]| {
                Ok((designator(secondary)?, probability, energy))
            })
            .collect::<Result<Vec<_>>>()?;
        let (records, total) = tables::radiative_transitions(&rows)
            .with_context(|| format!("radiative transitions of subshell {shell}"))?;

        let location = subshell_path(&radiative_root, shell);
        file.write_dataset(&location, records);
        file.write_attribute(
            &location,
            paths::TOTAL_RAD_TRANS_PROB_ATTRIBUTE,
            Attribute::Float(total),
        );
    }

    for shell in subshell_tables(directory, NONRADIATIVE_TRANSITION)? {
        let rows = read_table::<4>(&subshell_table_path(
            directory,
            NONRADIATIVE_TRANSITION,
            shell,
        ))?
        .into_iter()
        .map(|[secondary, tertiary, probability, energy]| {
            Ok((designator(secondary)?, designator(tertiary)?, probability, energy))
        })
        .collect::<Result<Vec<_>>>()?;
        let records = tables::nonradiative_transitions(&rows)
            .with_context(|| format!("non-radiative transitions of subshell {shell}"))?;
        file.write_dataset(&subshell_path(&nonradiative_root, shell), records);
    }

    // only Z >= 6 has relaxation data
    if relaxation_shells.is_empty() {
        debug!(atomic_number, "no atomic relaxation tables");
        relaxation_shells.push(0);
    }
    file.write_attribute(
        paths::TRANSITION_PROBABILITY_ROOT,
        paths::ATOMIC_RELAXATION_SHELL_ATTRIBUTE,
        Attribute::UintArray(relaxation_shells),
    );
    Ok(())
}

fn process_compton_profiles(file: &mut ElementFile, atomic_number: u32, path: &Path) -> Result<()> {
    let profiles = tables::compton_profiles(&read_compton_profiles(path)?)
        .with_context(|| format!("Compton profiles in {}", path.display()))?;

    if let Some(rows) = shells::compton_profile_rows(atomic_number) {
        ensure!(
            profiles.len() == rows,
            "Z = {atomic_number}: {} Compton profiles in {}, expected {rows}",
            profiles.len(),
            path.display()
        );
    }
    file.write_table(paths::COMPTON_PROFILE_CDF_LOC, profiles);
    Ok(())
}

/// Serializes, compresses and writes `file`, then checks that the written
/// bytes decode to the same content.
pub fn write_element_file(path: &Path, file: &ElementFile) -> Result<()> {
    let serialized = postcard::to_allocvec(file).context("postcard serialization failed")?;
    let compressed =
        zstd::encode_all(&serialized[..], COMPRESSION_LEVEL).context("zstd compression failed")?;
    std::fs::write(path, &compressed)
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!(
        path = %path.display(),
        serialized = serialized.len(),
        compressed = compressed.len(),
        "wrote element file"
    );

    let decompressed = zstd::decode_all(&compressed[..]).context("zstd decompression failed")?;
    let decoded: ElementFile =
        postcard::from_bytes(&decompressed).context("postcard deserialization failed")?;
    // bins may hold NaN slopes at repeated energies, so compare bytes
    let reencoded = postcard::to_allocvec(&decoded).context("postcard serialization failed")?;
    ensure!(
        reencoded == serialized,
        "round trip of {} does not reproduce the written data",
        path.display()
    );
    Ok(())
}
