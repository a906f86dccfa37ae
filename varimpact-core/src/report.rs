//! Spreadsheet serialization of the qualifying records.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::consts::{REPORT_COLUMNS, REPORT_SHEET_NAME};
use crate::errors::VarimpactError;
use crate::models::AnnotationRecord;

/// Write the accumulated records to an xlsx workbook.
///
/// One sheet, one row per record, columns in fixed display order with a bold
/// header. Absent fields stay blank; MAF, Rank and Total are written as
/// numbers. Callers are expected to skip this entirely when no record
/// qualifies; an empty report is never produced.
pub fn write_report<P: AsRef<Path>>(
    records: &[AnnotationRecord],
    path: P,
) -> Result<(), VarimpactError> {
    let path = path.as_ref();
    let report_err = |e: XlsxError| VarimpactError::ReportWrite(format!("{}: {}", path.display(), e));

    let mut workbook = Workbook::new();
    write_sheet(workbook.add_worksheet(), records).map_err(report_err)?;
    workbook.save(path).map_err(report_err)?;

    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, records: &[AnnotationRecord]) -> Result<(), XlsxError> {
    worksheet.set_name(REPORT_SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, label) in REPORT_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *label, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, record.variant_id.as_str())?;
        write_optional_string(worksheet, row, 1, &record.gene_id)?;
        write_optional_string(worksheet, row, 2, &record.gene_name)?;
        write_optional_string(worksheet, row, 3, &record.feature_id)?;
        write_optional_string(worksheet, row, 4, &record.putative_impact)?;
        if let Some(maf) = record.maf {
            worksheet.write_number(row, 5, maf)?;
        }
        write_optional_string(worksheet, row, 6, &record.feature_type)?;
        write_optional_string(worksheet, row, 7, &record.effect)?;
        write_optional_string(worksheet, row, 8, &record.hgvs_c)?;
        if let Some(rank) = record.rank {
            worksheet.write_number(row, 9, rank as f64)?;
        }
        if let Some(total) = record.total {
            worksheet.write_number(row, 10, total as f64)?;
        }
        write_optional_string(worksheet, row, 11, &record.transcript_biotype)?;
    }

    Ok(())
}

fn write_optional_string(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Option<String>,
) -> Result<(), XlsxError> {
    if let Some(value) = value {
        worksheet.write_string(row, col, value.as_str())?;
    }
    Ok(())
}
