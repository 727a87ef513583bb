use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use super::model::{CellValue, TableData};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an uploaded table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`          – header row + records, cell dtypes guessed per cell
/// * `.xls` / `.xlsx` – first worksheet, first row is the header
pub fn load_file(path: &Path) -> Result<TableData> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            load_csv(file)
        }
        "xls" | "xlsx" => load_excel(path),
        other => bail!("Unsupported file extension: .{other}. Upload CSV or XLSX."),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per data row.
/// Header names are whitespace-trimmed; cells are dtype-guessed.
fn load_csv<R: Read>(input: R) -> Result<TableData> {
    // Flexible record lengths: ragged rows are padded below rather than
    // rejected, matching how the preview treats sparse uploads.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut row: Vec<CellValue> = record
            .iter()
            .take(columns.len())
            .map(|cell| CellValue::guess(cell.trim()))
            .collect();
        // Short records happen with trailing commas; pad so every row is
        // rectangular.
        row.resize(columns.len(), CellValue::Null);
        rows.push(row);
    }

    Ok(TableData::new(columns, rows))
}

// ---------------------------------------------------------------------------
// Excel loader
// ---------------------------------------------------------------------------

/// Load the first worksheet of an `.xls` / `.xlsx` workbook. The first row
/// is taken as the header; remaining rows become data.
fn load_excel(path: &Path) -> Result<TableData> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no sheets")?
        .context("reading first worksheet")?;

    let mut row_iter = range.rows();
    let columns: Vec<String> = row_iter
        .next()
        .context("worksheet is empty")?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let rows: Vec<Vec<CellValue>> = row_iter
        .map(|row| {
            let mut cells: Vec<CellValue> = row
                .iter()
                .take(columns.len())
                .map(excel_cell)
                .collect();
            cells.resize(columns.len(), CellValue::Null);
            cells
        })
        .collect();

    Ok(TableData::new(columns, rows))
}

fn excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => {
            // Excel stores years and counts as floats; fold integral values
            // back so column checks behave like the CSV path.
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                CellValue::Integer(*f as i64)
            } else {
                CellValue::Float(*f)
            }
        }
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::guess(s.trim()),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("{e:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn csv_round_trip_with_trimmed_headers() {
        let csv = "Year, Total Generation \n2020,120.5\n2021,131\n";
        let table = load_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.columns, vec!["Year", "Total Generation"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][1], CellValue::Float(120.5));
        assert_eq!(table.rows[1][1], CellValue::Integer(131));
    }

    #[test]
    fn csv_short_records_are_padded() {
        let csv = "Year,Shortage\n2020\n";
        let table = load_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.rows[0], vec![CellValue::Integer(2020), CellValue::Null]);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(&PathBuf::from("notes.txt")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn excel_floats_with_no_fraction_become_integers() {
        assert_eq!(excel_cell(&Data::Float(2021.0)), CellValue::Integer(2021));
        assert_eq!(excel_cell(&Data::Float(13.4)), CellValue::Float(13.4));
        assert_eq!(excel_cell(&Data::Empty), CellValue::Null);
    }
}
