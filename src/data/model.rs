use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of an uploaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common spreadsheet dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.2}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Guess the dtype of a raw text cell: integer, then float, then bool,
    /// then plain string. Empty text becomes `Null`.
    pub fn guess(s: &str) -> CellValue {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// TableData – the complete uploaded dataset
// ---------------------------------------------------------------------------

/// An uploaded table: ordered header names plus rows of cells.
/// Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableData {
    /// Header names, whitespace-trimmed, in file order.
    pub columns: Vec<String>,
    /// Row-major cell data.
    pub rows: Vec<Vec<CellValue>>,
}

impl TableData {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        TableData { columns, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// First `n` rows (the upload preview).
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Last `n` rows.
    pub fn tail(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[self.rows.len().saturating_sub(n)..]
    }

    /// Numeric projection of two columns, one `[x, y]` point per row.
    /// Rows where either cell is non-numeric are skipped.
    pub fn points(&self, x_col: usize, y_col: usize) -> Vec<[f64; 2]> {
        self.rows
            .iter()
            .filter_map(|row| {
                let x = row.get(x_col)?.as_f64()?;
                let y = row.get(y_col)?.as_f64()?;
                Some([x, y])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_prefers_integer_over_float() {
        assert_eq!(CellValue::guess("2021"), CellValue::Integer(2021));
        assert_eq!(CellValue::guess("13.5"), CellValue::Float(13.5));
        assert_eq!(CellValue::guess("true"), CellValue::Bool(true));
        assert_eq!(CellValue::guess("Hydel"), CellValue::String("Hydel".into()));
        assert_eq!(CellValue::guess(""), CellValue::Null);
    }

    #[test]
    fn head_and_tail_clamp_to_len() {
        let table = TableData::new(
            vec!["Year".into()],
            (0..3).map(|i| vec![CellValue::Integer(2020 + i)]).collect(),
        );
        assert_eq!(table.head(5).len(), 3);
        assert_eq!(table.tail(2)[0][0], CellValue::Integer(2021));
    }

    #[test]
    fn tables_compare_by_columns_and_cells() {
        let rows = vec![vec![CellValue::Integer(2020), CellValue::Float(4.5)]];
        let a = TableData::new(vec!["Year".into(), "Shortage".into()], rows.clone());
        let b = TableData::new(vec!["Year".into(), "Shortage".into()], rows);
        assert_eq!(a, b);

        let mut c = b.clone();
        c.rows[0][1] = CellValue::Float(6.0);
        assert_ne!(a, c);
    }

    #[test]
    fn points_skip_non_numeric_rows() {
        let table = TableData::new(
            vec!["Year".into(), "Total Generation".into()],
            vec![
                vec![CellValue::Integer(2020), CellValue::Float(120.0)],
                vec![CellValue::Integer(2021), CellValue::String("n/a".into())],
                vec![CellValue::Integer(2022), CellValue::Integer(135)],
            ],
        );
        let pts = table.points(0, 1);
        assert_eq!(pts, vec![[2020.0, 120.0], [2022.0, 135.0]]);
    }
}
