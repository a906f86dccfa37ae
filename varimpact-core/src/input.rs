//! Reading of the tab-delimited variant table.

use std::fs::File;
use std::path::Path;

use crate::consts::REQUIRED_COLUMNS;
use crate::errors::VarimpactError;
use crate::models::VariantRow;

/// Read variant rows from a tab-delimited file with a header line.
///
/// The header must carry the `Chr`, `Position`, `Ref` and `ALT` columns;
/// extra columns are ignored. Validation happens here, at the boundary,
/// so a missing file or column fails before any network activity.
///
/// # Arguments
///
/// - path: path to the variants file
pub fn read_variants<P: AsRef<Path>>(path: P) -> Result<Vec<VariantRow>, VarimpactError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| VarimpactError::InputRead(format!("{}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| VarimpactError::InputRead(format!("{}: {}", path.display(), e)))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(VarimpactError::MissingColumn(column.to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: VariantRow =
            result.map_err(|e| VarimpactError::RowParse(format!("{}: {}", path.display(), e)))?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_variants_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write");
        file
    }

    #[test]
    fn test_read_variants() {
        let file = write_variants_file(
            "Chr\tPosition\tRef\tALT\n\
             1\t12345\tA\tG\n\
             X\t999\tTA\tT\n",
        );

        let rows = read_variants(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].chr, "1");
        assert_eq!(rows[0].position, 12345);
        assert_eq!(rows[0].reference, "A");
        assert_eq!(rows[0].alt.as_deref(), Some("G"));
        assert_eq!(rows[1].chr, "X");
    }

    #[test]
    fn test_empty_alt_cell_is_absent() {
        let file = write_variants_file(
            "Chr\tPosition\tRef\tALT\n\
             2\t777\tC\t\n",
        );

        let rows = read_variants(file.path()).unwrap();
        assert_eq!(rows[0].alt, None);
        assert_eq!(rows[0].hgvs_id(), "2:g.777C>");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let file = write_variants_file(
            "Chr\tPosition\tRef\tALT\tSample\n\
             1\t12345\tA\tG\tNA12878\n",
        );

        let rows = read_variants(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = read_variants("/no/such/variants.txt").unwrap_err();
        match err {
            VarimpactError::InputRead(msg) => assert!(msg.contains("/no/such/variants.txt")),
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_column_fails_fast() {
        let file = write_variants_file(
            "Chr\tPosition\tRef\n\
             1\t12345\tA\n",
        );

        let err = read_variants(file.path()).unwrap_err();
        match err {
            VarimpactError::MissingColumn(column) => assert_eq!(column, "ALT"),
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_position_is_an_error() {
        let file = write_variants_file(
            "Chr\tPosition\tRef\tALT\n\
             1\tnot-a-number\tA\tG\n",
        );

        assert!(matches!(
            read_variants(file.path()),
            Err(VarimpactError::RowParse(_))
        ));
    }
}
