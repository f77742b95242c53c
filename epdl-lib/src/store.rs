//! Read access to a processed element file.

use std::path::Path;

use epdl_data::{Attribute, DatasetRecord, ElementFile, QuadraticBin};

use crate::error::{PhotonDataError, Result};

/// An opened element file. Reads copy records out of the decoded
/// container, so the handler can be dropped as soon as loading is done.
#[derive(Debug, Clone)]
pub struct DataFileHandler {
    source: String,
    file: ElementFile,
}

impl DataFileHandler {
    /// Reads, decompresses and decodes the file at `path`.
    pub fn open_read_only(path: &Path) -> Result<Self> {
        let source = path.to_string_lossy().to_string();
        let compressed = std::fs::read(path).map_err(|e| PhotonDataError::Io {
            path: source.clone(),
            source: e,
        })?;

        let mut decoder = ruzstd::decoding::StreamingDecoder::new(compressed.as_slice())
            .map_err(|e| PhotonDataError::Decompress {
                path: source.clone(),
                message: e.to_string(),
            })?;
        let mut decompressed = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut decompressed).map_err(|e| {
            PhotonDataError::Decompress {
                path: source.clone(),
                message: e.to_string(),
            }
        })?;

        let file: ElementFile =
            postcard::from_bytes(&decompressed).map_err(|e| PhotonDataError::Deserialize {
                path: source.clone(),
                source: e,
            })?;

        tracing::debug!(
            path = %source,
            datasets = file.datasets.len(),
            "opened element file"
        );
        Ok(Self { source, file })
    }

    /// Wraps an already decoded container.
    pub fn from_element_file(file: ElementFile) -> Self {
        Self {
            source: String::from("<memory>"),
            file,
        }
    }

    /// Where the data came from (file path, or `<memory>`).
    pub fn source(&self) -> &str {
        &self.source
    }

    fn attribute(&self, path: &str, name: &str) -> Result<&Attribute> {
        self.file
            .attribute(path, name)
            .ok_or_else(|| PhotonDataError::MissingAttribute {
                path: path.to_string(),
                name: name.to_string(),
            })
    }

    pub fn read_value_from_group_attribute(&self, path: &str, name: &str) -> Result<f64> {
        match self.attribute(path, name)? {
            Attribute::Float(value) => Ok(*value),
            _ => Err(attribute_type(path, name, "a scalar")),
        }
    }

    pub fn read_array_from_group_attribute(&self, path: &str, name: &str) -> Result<Vec<f64>> {
        match self.attribute(path, name)? {
            Attribute::FloatArray(values) => Ok(values.clone()),
            _ => Err(attribute_type(path, name, "a float array")),
        }
    }

    pub fn read_uint_array_from_group_attribute(
        &self,
        path: &str,
        name: &str,
    ) -> Result<Vec<u32>> {
        match self.attribute(path, name)? {
            Attribute::UintArray(values) => Ok(values.clone()),
            _ => Err(attribute_type(path, name, "an unsigned integer array")),
        }
    }

    pub fn read_array_from_dataset<T: DatasetRecord + Clone>(&self, path: &str) -> Result<Vec<T>> {
        let dataset = self
            .file
            .dataset(path)
            .ok_or_else(|| PhotonDataError::MissingDataset {
                path: path.to_string(),
            })?;
        let records = T::from_dataset(dataset).ok_or_else(|| PhotonDataError::DatasetType {
            path: path.to_string(),
            expected: T::kind(),
        })?;

        tracing::debug!(path, bins = records.len(), "read dataset");
        Ok(records.to_vec())
    }

    /// Reads a two-dimensional table, one row per leading index.
    pub fn read_table_from_dataset(&self, path: &str) -> Result<Vec<Vec<QuadraticBin>>> {
        match self.file.dataset(path) {
            Some(epdl_data::Dataset::QuadraticTable(rows)) => {
                tracing::debug!(path, rows = rows.len(), "read table");
                Ok(rows.clone())
            }
            Some(_) => Err(PhotonDataError::DatasetType {
                path: path.to_string(),
                expected: "quadratic bin table",
            }),
            None => Err(PhotonDataError::MissingDataset {
                path: path.to_string(),
            }),
        }
    }
}

fn attribute_type(path: &str, name: &str, expected: &'static str) -> PhotonDataError {
    PhotonDataError::AttributeType {
        path: path.to_string(),
        name: name.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epdl_data::{LogLogBin, ShellEnergyRecord, paths};

    fn handler() -> DataFileHandler {
        let mut file = ElementFile::new();
        file.write_attribute(
            paths::ROOT,
            paths::ATOMIC_WEIGHT_ATTRIBUTE,
            Attribute::Float(10.811),
        );
        file.write_attribute(
            paths::ROOT,
            paths::ENERGY_LIMITS_ATTRIBUTE,
            Attribute::FloatArray(vec![1e-3, 100.0]),
        );
        file.write_attribute(
            paths::PHOTOELECTRIC_SUBSHELL_CROSS_SECTION_ROOT,
            paths::PHOTOELECTRIC_SHELL_ATTRIBUTE,
            Attribute::UintArray(vec![1, 3]),
        );
        file.write_dataset(
            paths::ELECTRON_SHELL_BINDING_ENERGY_LOC,
            vec![ShellEnergyRecord {
                shell: 1,
                energy: 1.8877e-4,
            }],
        );
        file.write_table(paths::COMPTON_PROFILE_CDF_LOC, vec![Vec::new(), Vec::new()]);
        DataFileHandler::from_element_file(file)
    }

    #[test]
    fn test_reads_typed_attributes() {
        let h = handler();
        assert_eq!(
            h.read_value_from_group_attribute(paths::ROOT, paths::ATOMIC_WEIGHT_ATTRIBUTE)
                .unwrap(),
            10.811
        );
        assert_eq!(
            h.read_array_from_group_attribute(paths::ROOT, paths::ENERGY_LIMITS_ATTRIBUTE)
                .unwrap(),
            vec![1e-3, 100.0]
        );
        assert_eq!(
            h.read_uint_array_from_group_attribute(
                paths::PHOTOELECTRIC_SUBSHELL_CROSS_SECTION_ROOT,
                paths::PHOTOELECTRIC_SHELL_ATTRIBUTE
            )
            .unwrap(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_attribute_of_wrong_shape_is_an_error() {
        let err = handler()
            .read_value_from_group_attribute(paths::ROOT, paths::ENERGY_LIMITS_ATTRIBUTE)
            .unwrap_err();
        assert!(matches!(err, PhotonDataError::AttributeType { .. }));
    }

    #[test]
    fn test_missing_attribute_names_path_and_attribute() {
        let err = handler()
            .read_value_from_group_attribute(paths::ROOT, "density")
            .unwrap_err();
        assert_eq!(err.to_string(), "attribute 'density' of '/' is missing");
    }

    #[test]
    fn test_reads_records_by_type() {
        let records: Vec<ShellEnergyRecord> = handler()
            .read_array_from_dataset(paths::ELECTRON_SHELL_BINDING_ENERGY_LOC)
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].shell, 1);
    }

    #[test]
    fn test_record_type_mismatch_is_an_error() {
        let err = handler()
            .read_array_from_dataset::<LogLogBin>(paths::ELECTRON_SHELL_BINDING_ENERGY_LOC)
            .unwrap_err();
        assert!(matches!(
            err,
            PhotonDataError::DatasetType {
                expected: "log-log bins",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_dataset_is_an_error() {
        let err = handler()
            .read_array_from_dataset::<LogLogBin>(paths::COHERENT_CROSS_SECTION_LOC)
            .unwrap_err();
        assert!(matches!(err, PhotonDataError::MissingDataset { .. }));
    }

    #[test]
    fn test_reads_two_dimensional_table() {
        let rows = handler()
            .read_table_from_dataset(paths::COMPTON_PROFILE_CDF_LOC)
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_opening_missing_file_reports_io_error() {
        let err = DataFileHandler::open_read_only(Path::new("/nonexistent/photon_data_5.bin.zst"))
            .unwrap_err();
        assert!(matches!(err, PhotonDataError::Io { .. }));
    }

    #[test]
    fn test_opening_garbage_reports_decompress_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photon_data_5.bin.zst");
        std::fs::write(&path, b"not a zstd frame").unwrap();

        let err = DataFileHandler::open_read_only(&path).unwrap_err();
        assert!(matches!(err, PhotonDataError::Decompress { .. }));
    }

    #[test]
    fn test_opens_file_written_with_zstd() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photon_data_5.bin.zst");
        let mut file = ElementFile::new();
        file.write_attribute(
            paths::ROOT,
            paths::ATOMIC_WEIGHT_ATTRIBUTE,
            Attribute::Float(10.811),
        );
        let bytes = postcard::to_allocvec(&file).unwrap();
        std::fs::write(&path, zstd::encode_all(bytes.as_slice(), 19).unwrap()).unwrap();

        let h = DataFileHandler::open_read_only(&path).unwrap();
        assert_eq!(h.source(), path.to_string_lossy());
        assert_eq!(
            h.read_value_from_group_attribute(paths::ROOT, paths::ATOMIC_WEIGHT_ATTRIBUTE)
                .unwrap(),
            10.811
        );
    }
}
