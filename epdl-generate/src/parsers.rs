use std::path::Path;

use anyhow::{Context, Result, anyhow, ensure};
use serde::Deserialize;

/// Per-element metadata stored next to the raw tables.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementHeader {
    pub atomic_weight: f64,
}

pub fn read_header(path: &Path) -> Result<ElementHeader> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Reads a whitespace separated table with `N` numeric columns.
pub fn read_table<const N: usize>(path: &Path) -> Result<Vec<[f64; N]>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_table(&content).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_table<const N: usize>(content: &str) -> Result<Vec<[f64; N]>> {
    let mut rows = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let values = line
            .split_whitespace()
            .map(parse_number)
            .collect::<Result<Vec<f64>>>()
            .with_context(|| format!("line {}", index + 1))?;
        let row: [f64; N] = values.try_into().map_err(|values: Vec<f64>| {
            anyhow!(
                "line {}: expected {N} columns, found {}",
                index + 1,
                values.len()
            )
        })?;
        rows.push(row);
    }
    ensure!(!rows.is_empty(), "table has no data rows");
    Ok(rows)
}

/// Reads a Compton profile file: a flat stream of profile values, one
/// block of points per subshell row.
pub fn read_compton_profiles(path: &Path) -> Result<Vec<f64>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    content
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<f64>>>()
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Parses a number, accepting the ENDL fixed-width form without an exponent
/// marker (`1.234567-3`).
pub fn parse_number(token: &str) -> Result<f64> {
    if let Ok(value) = token.parse::<f64>() {
        return Ok(value);
    }
    let split = token
        .char_indices()
        .skip(1)
        .filter(|&(_, c)| c == '+' || c == '-')
        .map(|(i, _)| i)
        .last()
        .ok_or_else(|| anyhow!("invalid number '{token}'"))?;
    let (mantissa, exponent) = token.split_at(split);
    format!("{mantissa}e{exponent}")
        .parse()
        .map_err(|_| anyhow!("invalid number '{token}'"))
}

/// Converts a tabulated subshell designator to an integer.
pub fn designator(value: f64) -> Result<u32> {
    ensure!(
        value >= 1.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX),
        "invalid subshell designator {value}"
    );
    Ok(value as u32)
}
