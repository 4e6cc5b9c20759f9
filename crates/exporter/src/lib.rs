//! Chart data export: one `label,value` row per series point, under a header row.

use core_types::SeriesPoint;
use std::io::Write;
use std::path::Path;

pub mod error;

pub use error::ExportError;

const HEADER: [&str; 2] = ["label", "value"];

/// Writes `series` as CSV to any writer.
///
/// An empty series is refused rather than written as a header-only file.
pub fn write_series<W: Write>(writer: W, series: &[SeriesPoint]) -> Result<(), ExportError> {
    if series.is_empty() {
        return Err(ExportError::EmptySeries);
    }

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;
    for point in series {
        csv.write_record([point.label.to_string(), point.value.to_string()])?;
    }
    csv.flush()?;
    Ok(())
}

/// The CSV text for `series`.
pub fn series_to_csv(series: &[SeriesPoint]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_series(&mut buffer, series)?;
    // Labels and decimals are always valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes `series` to a file at `path`, replacing any existing file.
pub fn export_series(path: &Path, series: &[SeriesPoint]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_series(file, series)?;
    tracing::info!(path = %path.display(), points = series.len(), "Chart data exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn writes_header_and_one_row_per_point() {
        let series = vec![
            SeriesPoint::year(0, dec!(10000)),
            SeriesPoint::year(1, dec!(10830.00)),
        ];
        let csv = series_to_csv(&series).unwrap();
        assert_eq!(csv, "label,value\n0,10000\n1,10830.00\n");
    }

    #[test]
    fn text_labels_and_negative_values() {
        let series = vec![
            SeriesPoint::category("Liabilities", dec!(2000.25)),
            SeriesPoint::category("Net Worth", dec!(-499.75)),
        ];
        let csv = series_to_csv(&series).unwrap();
        assert_eq!(csv, "label,value\nLiabilities,2000.25\nNet Worth,-499.75\n");
    }

    #[test]
    fn empty_series_is_refused() {
        assert!(matches!(series_to_csv(&[]), Err(ExportError::EmptySeries)));
    }

    #[test]
    fn exports_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart-data.csv");
        export_series(&path, &[SeriesPoint::year(3, dec!(1.5))]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "label,value\n3,1.5\n");
    }
}
