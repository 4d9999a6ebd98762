// Tabular document model and file loading (CSV / XLSX)

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use csv::ReaderBuilder;

/// A single cell of an uploaded table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Parse a raw CSV field into a typed cell.
    fn from_str(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else if let Ok(n) = trimmed.parse::<f64>() {
            Cell::Number(n)
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn display(&self) -> String {
        match self {
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    /// A column is numeric when it has at least one number and no text.
    /// Empty cells do not disqualify a column.
    pub fn is_numeric(&self) -> bool {
        let mut has_number = false;
        for cell in &self.cells {
            match cell {
                Cell::Number(_) => has_number = true,
                Cell::Text(_) => return false,
                Cell::Empty => {}
            }
        }
        has_number
    }

    pub fn numeric_values(&self) -> Vec<f64> {
        self.cells
            .iter()
            .filter_map(|c| match c {
                Cell::Number(n) => Some(*n),
                _ => None,
            })
            .collect()
    }
}

/// In-memory table of named columns with uniform row count. Built fresh per
/// upload and discarded with the request; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularDocument {
    pub columns: Vec<Column>,
}

impl TabularDocument {
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.row_count() == 0
    }

    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_numeric()).collect()
    }
}

/// Result of loading one upload slot.
///
/// `Failed` keeps the parse error visible to callers instead of collapsing it
/// into `Absent`; the HTTP layer chooses to present both the same way but
/// logs the reason for `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(TabularDocument),
    Absent,
    Failed(String),
}

impl LoadOutcome {
    pub fn document(&self) -> Option<&TabularDocument> {
        match self {
            LoadOutcome::Loaded(doc) => Some(doc),
            _ => None,
        }
    }
}

/// Load an uploaded file into a `TabularDocument` based on its extension.
///
/// No file (or an unsupported extension) yields `Absent`; content that fails
/// to parse yields `Failed`. Never panics.
pub fn load_document(filename: Option<&str>, bytes: &[u8]) -> LoadOutcome {
    let Some(name) = filename else {
        return LoadOutcome::Absent;
    };
    if name.trim().is_empty() {
        return LoadOutcome::Absent;
    }

    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".csv") {
        match parse_csv(bytes) {
            Ok(doc) => LoadOutcome::Loaded(doc),
            Err(e) => LoadOutcome::Failed(format!("Failed to parse {}: {}", name, e)),
        }
    } else if lower.ends_with(".xlsx") {
        match parse_xlsx(bytes) {
            Ok(doc) => LoadOutcome::Loaded(doc),
            Err(e) => LoadOutcome::Failed(format!("Failed to parse {}: {}", name, e)),
        }
    } else {
        LoadOutcome::Absent
    }
}

fn parse_csv(bytes: &[u8]) -> anyhow::Result<TabularDocument> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut columns: Vec<Column> = headers
        .into_iter()
        .map(|name| Column { name, cells: Vec::new() })
        .collect();

    for record in rdr.records() {
        let record = record?;
        for (idx, column) in columns.iter_mut().enumerate() {
            let raw = record.get(idx).unwrap_or("");
            column.cells.push(Cell::from_str(raw));
        }
    }

    Ok(TabularDocument { columns })
}

fn parse_xlsx(bytes: &[u8]) -> anyhow::Result<TabularDocument> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))?;

    // First sheet only, matching the upload contract.
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow::anyhow!("workbook has no sheets"))??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(TabularDocument::default());
    };

    let mut columns: Vec<Column> = header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = match cell {
                Data::Empty => format!("column_{}", idx + 1),
                other => other.to_string(),
            };
            Column { name, cells: Vec::new() }
        })
        .collect();

    for row in rows {
        for (idx, column) in columns.iter_mut().enumerate() {
            let cell = row.get(idx).map(convert_cell).unwrap_or(Cell::Empty);
            column.cells.push(cell);
        }
    }

    Ok(TabularDocument { columns })
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::String(s) => Cell::from_str(s),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_is_absent() {
        assert_eq!(load_document(None, b""), LoadOutcome::Absent);
        assert_eq!(load_document(Some(""), b""), LoadOutcome::Absent);
    }

    #[test]
    fn test_unsupported_extension_is_absent() {
        assert_eq!(load_document(Some("report.pdf"), b"%PDF-1.4"), LoadOutcome::Absent);
        assert_eq!(load_document(Some("notes.txt"), b"hello"), LoadOutcome::Absent);
    }

    #[test]
    fn test_csv_parse_mixed_columns() {
        let csv = b"Revenue,Region\n100,US\n120,EU\n";
        let outcome = load_document(Some("pnl.csv"), csv);
        let LoadOutcome::Loaded(doc) = outcome else {
            panic!("expected Loaded, got {:?}", outcome);
        };
        assert_eq!(doc.columns.len(), 2);
        assert_eq!(doc.row_count(), 2);
        assert_eq!(doc.columns[0].name, "Revenue");
        assert!(doc.columns[0].is_numeric());
        assert!(!doc.columns[1].is_numeric());
        assert_eq!(doc.columns[0].numeric_values(), vec![100.0, 120.0]);
        assert_eq!(doc.columns[1].cells[0], Cell::Text("US".to_string()));
    }

    #[test]
    fn test_csv_extension_is_case_insensitive() {
        let outcome = load_document(Some("DATA.CSV"), b"a\n1\n");
        assert!(matches!(outcome, LoadOutcome::Loaded(_)));
    }

    #[test]
    fn test_malformed_csv_is_failed_not_panic() {
        // Ragged row: three fields where the header declares two.
        let csv = b"a,b\n1,2,3\n";
        let outcome = load_document(Some("bad.csv"), csv);
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
    }

    #[test]
    fn test_xlsx_first_sheet_parses_typed_cells() {
        // Headers: Revenue | Region | (blank) | Active
        // Rows: (100, US, 1.5, TRUE), (120, EU, 2.5, FALSE)
        let bytes = include_bytes!("../tests/fixtures/financials.xlsx");
        let outcome = load_document(Some("financials.xlsx"), bytes);
        let LoadOutcome::Loaded(doc) = outcome else {
            panic!("expected Loaded, got {:?}", outcome);
        };

        let names: Vec<&str> = doc.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Revenue", "Region", "column_3", "Active"]);
        assert_eq!(doc.row_count(), 2);

        assert!(doc.columns[0].is_numeric());
        assert_eq!(doc.columns[0].numeric_values(), vec![100.0, 120.0]);
        assert!(!doc.columns[1].is_numeric());
        assert_eq!(doc.columns[1].cells[0], Cell::Text("US".to_string()));
        assert!(doc.columns[2].is_numeric());
        assert_eq!(doc.columns[2].numeric_values(), vec![1.5, 2.5]);
        // Booleans map to text, so the column is not chartable.
        assert!(!doc.columns[3].is_numeric());
        assert_eq!(doc.columns[3].cells[0], Cell::Text("true".to_string()));
        assert_eq!(doc.columns[3].cells[1], Cell::Text("false".to_string()));
    }

    #[test]
    fn test_garbage_xlsx_is_failed_not_panic() {
        let outcome = load_document(Some("bad.xlsx"), b"this is not a zip archive");
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
    }

    #[test]
    fn test_empty_csv_yields_empty_document() {
        let outcome = load_document(Some("empty.csv"), b"");
        let LoadOutcome::Loaded(doc) = outcome else {
            panic!("expected Loaded");
        };
        assert!(doc.is_empty());
    }

    #[test]
    fn test_numeric_column_allows_empty_cells() {
        let csv = b"Revenue\n100\n\n120\n";
        let LoadOutcome::Loaded(doc) = load_document(Some("r.csv"), csv) else {
            panic!("expected Loaded");
        };
        assert!(doc.columns[0].is_numeric());
        assert_eq!(doc.columns[0].numeric_values(), vec![100.0, 120.0]);
    }

    #[test]
    fn test_all_empty_column_is_not_numeric() {
        let csv = b"a,b\n1,\n2,\n";
        let LoadOutcome::Loaded(doc) = load_document(Some("r.csv"), csv) else {
            panic!("expected Loaded");
        };
        assert!(!doc.columns[1].is_numeric());
        assert_eq!(doc.numeric_columns().len(), 1);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Number(100.0).display(), "100");
        assert_eq!(Cell::Number(0.5).display(), "0.5");
        assert_eq!(Cell::Text("US".to_string()).display(), "US");
        assert_eq!(Cell::Empty.display(), "");
    }
}
