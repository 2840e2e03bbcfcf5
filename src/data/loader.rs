use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{HealthDataset, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the health dataset from a CSV file.
///
/// Expected header: `state, abbr, poverty, age, income, healthcare`
/// (extra columns are ignored). Numeric cells that fail to parse load as
/// NaN; only structural CSV problems fail the load.
pub fn load_csv(path: &Path) -> Result<HealthDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file).map(HealthDataset::new)
}

/// Parse records from any reader. Split out from [`load_csv`] so tests can
/// feed in-memory CSV text. Row numbers in errors are 1-based over the
/// data rows; the header is not counted.
pub fn read_records<R: Read>(input: R) -> Result<Vec<Record>, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<Record>().enumerate() {
        let record = result.map_err(|source| LoadError::Row {
            row: idx + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
state,abbr,poverty,age,income,healthcare
Alabama,AL,19.3,38.1,42830,13.9
Alaska,AK,11.2,33.3,71583,14.9
";

    #[test]
    fn reads_well_formed_rows() {
        let records = read_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].state, "Alabama");
        assert_eq!(records[0].abbr, "AL");
        assert_eq!(records[0].poverty, 19.3);
        assert_eq!(records[1].income, 71583.0);
        assert_eq!(records[1].healthcare, 14.9);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "\
state,abbr,poverty,povertyMoe,age,income,healthcare
Alabama,AL,19.3,0.5,38.1,42830,13.9
";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].age, 38.1);
    }

    #[test]
    fn malformed_numeric_cell_loads_as_nan() {
        let csv = "\
state,abbr,poverty,age,income,healthcare
Alabama,AL,not-a-number,38.1,42830,13.9
";
        let records = read_records(csv.as_bytes()).unwrap();
        assert!(records[0].poverty.is_nan());
        assert_eq!(records[0].age, 38.1);
    }

    #[test]
    fn empty_numeric_cell_loads_as_nan() {
        let csv = "\
state,abbr,poverty,age,income,healthcare
Alabama,AL,,38.1,42830,13.9
";
        let records = read_records(csv.as_bytes()).unwrap();
        assert!(records[0].poverty.is_nan());
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "\
state,abbr,poverty,age,healthcare
Alabama,AL,19.3,38.1,13.9
";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Row { row: 1, .. }));
    }

    #[test]
    fn row_errors_count_data_rows_from_one() {
        let csv = "\
state,abbr,poverty,age,income,healthcare
Alabama,AL,19.3,38.1,42830,13.9
Alaska,AK,11.2,33.3,71583
";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Row { row: 2, .. }));
        assert!(err.to_string().starts_with("CSV row 2"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_csv(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
