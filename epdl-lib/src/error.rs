use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotonDataError {
    #[error("cannot read data file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot decompress data file '{path}': {message}")]
    Decompress { path: String, message: String },

    #[error("cannot decode data file '{path}': {source}")]
    Deserialize {
        path: String,
        source: postcard::Error,
    },

    #[error("dataset '{path}' is missing")]
    MissingDataset { path: String },

    #[error("attribute '{name}' of '{path}' is missing")]
    MissingAttribute { path: String, name: String },

    #[error("dataset '{path}' does not hold {expected}")]
    DatasetType { path: String, expected: &'static str },

    #[error("dataset '{path}' is malformed: {reason}")]
    MalformedDataset { path: String, reason: String },

    #[error("attribute '{name}' of '{path}' is not {expected}")]
    AttributeType {
        path: String,
        name: String,
        expected: &'static str,
    },

    #[error(
        "tabulated energy range [{table_min}, {table_max}] MeV does not cover the \
         requested range [{energy_min}, {energy_max}] MeV"
    )]
    EnergyRangeNotCovered {
        table_min: f64,
        table_max: f64,
        energy_min: f64,
        energy_max: f64,
    },

    #[error("invalid energy range [{min}, {max}] MeV")]
    InvalidEnergyRange { min: f64, max: f64 },

    #[error("subshell {subshell} is not valid for atomic number {atomic_number}")]
    InvalidSubshell { atomic_number: u32, subshell: String },

    #[error("no Compton profile data for atomic number {0}")]
    UnsupportedElement(u32),

    #[error("invalid configuration file '{path}': {source}")]
    Config {
        path: String,
        source: toml::de::Error,
    },
}

impl PhotonDataError {
    pub(crate) fn malformed(path: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDataset {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PhotonDataError>;
