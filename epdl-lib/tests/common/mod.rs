#![allow(dead_code)]

use std::path::Path;

use epdl::DataConfig;
use epdl::epdl_data::{
    Attribute, COMPTON_MOMENTUM_COEFFICIENTS, ElementFile, LogLogBin, QuadraticBin,
    ShellEnergyRecord, ShellOccupancyRecord, element_file_name, paths,
};
use tempfile::TempDir;

pub const BORON: u32 = 5;
pub const BORON_ATOMIC_WEIGHT: f64 = 10.811;

/// First bin of the processed boron coherent cross section. The generator
/// tests check that processing the raw table yields this bin.
pub const COHERENT_FIRST_BIN: (f64, f64, f64) = (-13.815510557964, -7.1676030125713, 4.1407348086216);

pub use epdl::epdl_data::FINE_STRUCTURE_CONSTANT;

/// A processed data directory that lives as long as the fixture.
pub struct Fixture {
    pub dir: TempDir,
    pub config: DataConfig,
}

impl Fixture {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Writes `file` compressed the same way the generator does.
pub fn write_element_file(dir: &Path, atomic_number: u32, file: &ElementFile) {
    let bytes = postcard::to_allocvec(file).unwrap();
    let compressed = zstd::encode_all(bytes.as_slice(), 19).unwrap();
    std::fs::write(dir.join(element_file_name(atomic_number)), compressed).unwrap();
}

pub fn boron_fixture() -> Fixture {
    fixture_with(boron_element_file())
}

pub fn fixture_with(file: ElementFile) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    write_element_file(dir.path(), BORON, &file);
    let config = DataConfig::new(dir.path());
    Fixture { dir, config }
}

/// Log-log bins through `(energy, value)` points.
pub fn log_log_bins(points: &[(f64, f64)]) -> Vec<LogLogBin> {
    let mut bins: Vec<LogLogBin> = points
        .iter()
        .map(|&(e, v)| LogLogBin {
            x: e.ln(),
            y: v.ln(),
            slope: 0.0,
        })
        .collect();
    for i in 0..bins.len() - 1 {
        bins[i].slope = (bins[i + 1].y - bins[i].y) / (bins[i + 1].x - bins[i].x);
    }
    bins
}

/// Quadratic CDF bins for a piecewise linear density through `(x, pdf)`.
pub fn quadratic_bins(points: &[(f64, f64)]) -> Vec<QuadraticBin> {
    let mut bins: Vec<QuadraticBin> = points
        .iter()
        .map(|&(x, pdf)| QuadraticBin {
            x,
            cdf: 0.0,
            pdf,
            slope: 0.0,
        })
        .collect();
    for i in 1..bins.len() {
        let dx = bins[i].x - bins[i - 1].x;
        bins[i].cdf = bins[i - 1].cdf + 0.5 * (bins[i - 1].pdf + bins[i].pdf) * dx;
    }
    let norm = bins[bins.len() - 1].cdf;
    for bin in &mut bins {
        bin.cdf /= norm;
        bin.pdf /= norm;
    }
    for i in 0..bins.len() - 1 {
        bins[i].slope = (bins[i + 1].pdf - bins[i].pdf) / (bins[i + 1].x - bins[i].x);
    }
    bins
}

fn energy_grid() -> Vec<f64> {
    (0..=32).map(|i| 1e-6 * 10f64.powf(i as f64 * 0.25)).collect()
}

fn cross_section(grid: &[f64], f: impl Fn(f64) -> f64) -> Vec<LogLogBin> {
    log_log_bins(&grid.iter().map(|&e| (e, f(e))).collect::<Vec<_>>())
}

fn coherent() -> Vec<LogLogBin> {
    let (x0, y0, slope0) = COHERENT_FIRST_BIN;
    let mut points = vec![(x0.exp(), y0.exp())];
    let e1: f64 = 1e-5;
    let y1 = y0 + slope0 * (e1.ln() - x0);
    points.push((e1, y1.exp()));
    let scale = y1.exp();
    for &e in energy_grid().iter().filter(|&&e| e > 1.5e-5) {
        points.push((e, scale / (1.0 + (e / e1).powf(1.8))));
    }
    let mut bins = log_log_bins(&points);
    bins[0] = LogLogBin {
        x: x0,
        y: y0,
        slope: slope0,
    };
    bins
}

fn threshold_cross_section(threshold: f64, scale: f64) -> Vec<LogLogBin> {
    let mut points: Vec<(f64, f64)> = (1..=20)
        .map(|i| threshold * 10f64.powf(i as f64 * 0.1))
        .filter(|&e| e < 100.0)
        .chain(std::iter::once(100.0))
        .map(|e| (e, scale * (e / threshold).ln()))
        .collect();

    // the zero at threshold is flattened onto the first tabulated value
    points.insert(0, (threshold, points[0].1));
    log_log_bins(&points)
}

fn form_factor() -> Vec<QuadraticBin> {
    // density over the squared argument
    let points: Vec<(f64, f64)> = (0..=40)
        .map(|i| {
            let q2 = (i as f64 * 0.25).powi(2);
            (q2, 25.0 * (-q2 / 4.0).exp() + 1e-3)
        })
        .collect();
    quadratic_bins(&points)
}

fn scattering_function() -> Vec<LogLogBin> {
    let points: Vec<(f64, f64)> = (0..=24)
        .map(|i| {
            let q = 1e-2 * 10f64.powf(i as f64 * 0.25);
            (q, BORON as f64 * (1.0 - (-q).exp()))
        })
        .collect();
    let mut bins = vec![LogLogBin {
        x: f64::NEG_INFINITY,
        y: f64::NEG_INFINITY,
        slope: 0.0,
    }];
    bins.extend(log_log_bins(&points));
    bins
}

fn compton_profile(width: f64) -> Vec<QuadraticBin> {
    let points: Vec<(f64, f64)> = COMPTON_MOMENTUM_COEFFICIENTS
        .iter()
        .map(|&c| {
            let q = c * FINE_STRUCTURE_CONSTANT;
            (q, 1.0 / (1.0 + (q / width).powi(2)))
        })
        .collect();
    quadratic_bins(&points)
}

/// K, L1, L2 and L3 of boron with 2, 2, 1/3 and 2/3 electrons.
pub fn boron_occupancy() -> Vec<ShellOccupancyRecord> {
    let shells = [
        (1, 0, 2.0, 1.8877e-4),
        (3, 1, 2.0, 1.2617e-5),
        (5, 2, 1.0 / 3.0, 4.7e-6),
        (6, 2, 2.0 / 3.0, 4.7e-6),
    ];
    let mut cdf = 0.0;
    let mut records: Vec<ShellOccupancyRecord> = shells
        .iter()
        .map(|&(shell, row, electrons, binding)| {
            cdf += electrons / BORON as f64;
            ShellOccupancyRecord {
                cdf,
                shell,
                compton_index: row,
                binding_energy: binding,
            }
        })
        .collect();
    if let Some(last) = records.last_mut() {
        last.cdf = 1.0;
    }
    records
}

pub fn boron_element_file() -> ElementFile {
    let grid = energy_grid();
    let mut file = ElementFile::new();
    file.write_attribute(
        paths::ROOT,
        paths::ATOMIC_WEIGHT_ATTRIBUTE,
        Attribute::Float(BORON_ATOMIC_WEIGHT),
    );
    file.write_attribute(
        paths::ROOT,
        paths::ENERGY_LIMITS_ATTRIBUTE,
        Attribute::FloatArray(vec![1e-6, 100.0]),
    );

    file.write_dataset(paths::COHERENT_CROSS_SECTION_LOC, coherent());
    file.write_dataset(
        paths::INCOHERENT_CROSS_SECTION_LOC,
        cross_section(&grid, |e| 2.0 * e.sqrt() / (1.0 + 4.0 * e)),
    );
    file.write_dataset(
        paths::PHOTOELECTRIC_CROSS_SECTION_LOC,
        cross_section(&grid, |e| 1e-6 * e.powf(-3.0) + 1e-8),
    );
    file.write_dataset(
        paths::PAIR_PRODUCTION_CROSS_SECTION_LOC,
        threshold_cross_section(1.022, 0.05),
    );
    file.write_dataset(
        paths::TRIPLET_PRODUCTION_CROSS_SECTION_LOC,
        threshold_cross_section(2.044, 0.01),
    );
    file.write_dataset(paths::ATOMIC_FORM_FACTOR_LOC, form_factor());
    file.write_dataset(paths::SCATTERING_FUNCTION_LOC, scattering_function());

    file.write_dataset(paths::ELECTRON_SHELL_CDF_LOC, boron_occupancy());
    file.write_dataset(
        paths::ELECTRON_SHELL_BINDING_ENERGY_LOC,
        boron_occupancy()
            .iter()
            .map(|r| ShellEnergyRecord {
                shell: r.shell,
                energy: r.binding_energy,
            })
            .collect(),
    );
    file.write_dataset(
        paths::ELECTRON_SHELL_KINETIC_ENERGY_LOC,
        vec![
            ShellEnergyRecord {
                shell: 1,
                energy: 2.5e-4,
            },
            ShellEnergyRecord {
                shell: 3,
                energy: 2.1e-5,
            },
            ShellEnergyRecord {
                shell: 5,
                energy: 1.4e-5,
            },
            ShellEnergyRecord {
                shell: 6,
                energy: 1.4e-5,
            },
        ],
    );
    file.write_table(
        paths::COMPTON_PROFILE_CDF_LOC,
        vec![
            compton_profile(0.3),
            compton_profile(0.08),
            compton_profile(0.05),
        ],
    );
    file
}
