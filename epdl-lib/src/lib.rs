pub mod basic;
pub mod config;
pub mod doppler;
pub mod error;
pub mod interp;
pub mod search;
pub mod store;
pub mod subshell;

pub use basic::PhotonDataBasic;
pub use config::DataConfig;
pub use doppler::PhotonDataDopplerBroadening;
pub use error::{PhotonDataError, Result};
pub use store::DataFileHandler;
pub use subshell::{ComptonProfileSubshellConverter, SubshellType};
pub use epdl_data;
