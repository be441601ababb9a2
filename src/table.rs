//! Reading digitized pressure-coefficient curves from a delimited text table.
//!
//! The file has one row per sample position, `;` between columns and `,` as
//! the decimal separator. Row 0 is a header. Column 0 is position metadata
//! and is ignored; columns 1 to 6 hold the six curves described by
//! [`AngleOfAttackCurves`].

use crate::error::TableError;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Column separator.
pub const DELIMITER: char = ';';

/// Shape of the airfoil table: a header plus 139 data rows of 7 columns.
pub const TABLE_ROWS: usize = 140;
pub const TABLE_COLUMNS: usize = 7;

/// Replaces a locale decimal comma with a dot and trims whitespace.
///
/// # Example
/// ```rust
/// use airfoil_lift::table::normalize_decimal;
///
/// assert_eq!(normalize_decimal(" 1,23 "), "1.23");
/// assert_eq!(normalize_decimal("1.23"), "1.23");
/// ```
#[must_use]
pub fn normalize_decimal(token: &str) -> String {
    token.trim().replace(',', ".")
}

/// Parses one table cell after decimal normalization.
#[must_use]
pub fn parse_decimal(token: &str) -> Option<f64> {
    normalize_decimal(token)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Expected shape of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Columns per row, including the metadata column
    pub columns: usize,
    /// Data rows after the header; `None` accepts any positive count
    pub data_rows: Option<usize>,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            columns: TABLE_COLUMNS,
            data_rows: Some(TABLE_ROWS - 1),
        }
    }
}

impl TableLayout {
    /// The default column layout with no fixed row count.
    #[must_use]
    pub fn any_rows() -> Self {
        Self {
            data_rows: None,
            ..Self::default()
        }
    }
}

/// A read-only grid of numbers indexed by `(row, column)`; the header is not
/// part of it, so row 0 is the first data row.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl SampleTable {
    /// Reads a table from a file.
    ///
    /// # Errors
    /// `FileNotFound` if the path does not exist, `Io` for other read
    /// failures, and the parse errors of [`SampleTable::from_reader`].
    pub fn from_path(path: impl AsRef<Path>, layout: &TableLayout) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => TableError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => TableError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        tracing::info!(path = %path.display(), "reading pressure-coefficient table");
        Self::from_reader(BufReader::new(file), layout).map_err(|err| match err {
            TableError::Read(source) => TableError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses a table from any buffered reader.
    ///
    /// Blank lines are skipped and a trailing separator at the end of a row is
    /// tolerated. Row numbers in errors count the header as row 0.
    ///
    /// # Errors
    /// `Read` if the reader fails, `MalformedInputRow` for a wrong column
    /// count, `MalformedToken` for a cell that is not a number and
    /// `WrongRowCount` if `layout` fixes the row count.
    pub fn from_reader<R: BufRead>(reader: R, layout: &TableLayout) -> Result<Self, TableError> {
        let mut rows = Vec::new();
        for (row, line) in reader.lines().enumerate() {
            let line = line.map_err(TableError::Read)?;
            if row == 0 || line.trim().is_empty() {
                continue;
            }
            rows.push(parse_row(row, &line, layout.columns)?);
        }

        let expected = layout.data_rows.unwrap_or(rows.len().max(1));
        if rows.len() != expected {
            return Err(TableError::WrongRowCount {
                expected,
                actual: rows.len(),
            });
        }
        tracing::debug!(rows = rows.len(), columns = layout.columns, "parsed table");
        Ok(Self {
            rows,
            columns: layout.columns,
        })
    }

    /// Parses a table held in memory.
    ///
    /// # Errors
    /// See [`SampleTable::from_reader`].
    pub fn parse(text: &str, layout: &TableLayout) -> Result<Self, TableError> {
        Self::from_reader(text.as_bytes(), layout)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column).copied()
    }

    /// All values of one column, top to bottom.
    #[must_use]
    pub fn column(&self, column: usize) -> Option<Vec<f64>> {
        self.rows.iter().map(|row| row.get(column).copied()).collect()
    }
}

fn parse_row(row: usize, line: &str, columns: usize) -> Result<Vec<f64>, TableError> {
    let mut tokens: Vec<&str> = line.split(DELIMITER).collect();
    if tokens.len() == columns + 1 && tokens.last().is_some_and(|t| t.trim().is_empty()) {
        tokens.pop();
    }
    if tokens.len() != columns {
        return Err(TableError::MalformedInputRow {
            row,
            reason: format!("expected {columns} columns, found {}", tokens.len()),
        });
    }
    tokens
        .into_iter()
        .enumerate()
        .map(|(column, token)| {
            parse_decimal(token).ok_or_else(|| TableError::MalformedToken {
                row,
                column,
                token: token.trim().to_string(),
            })
        })
        .collect()
}

/// Angles of attack present in the table, in scenario order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleOfAttack {
    Ten,
    Five,
    Zero,
}

impl AngleOfAttack {
    pub const ALL: [AngleOfAttack; 3] = [AngleOfAttack::Ten, AngleOfAttack::Five, AngleOfAttack::Zero];

    /// Table column of the over-surface curve.
    #[must_use]
    pub fn over_column(self) -> usize {
        match self {
            AngleOfAttack::Ten => 1,
            AngleOfAttack::Five => 2,
            AngleOfAttack::Zero => 3,
        }
    }

    /// Table column of the under-surface curve.
    #[must_use]
    pub fn under_column(self) -> usize {
        match self {
            AngleOfAttack::Zero => 4,
            AngleOfAttack::Five => 5,
            AngleOfAttack::Ten => 6,
        }
    }
}

/// Over/under pressure-coefficient curves for each angle of attack.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleOfAttackCurves {
    over: Vec<Vec<f64>>,
    under: Vec<Vec<f64>>,
}

impl AngleOfAttackCurves {
    /// Extracts the six curves from a table with the standard column layout.
    ///
    /// # Errors
    /// `MalformedInputRow` if the table has fewer than 7 columns.
    pub fn from_table(table: &SampleTable) -> Result<Self, TableError> {
        let column = |index: usize| {
            table.column(index).ok_or_else(|| TableError::MalformedInputRow {
                row: 0,
                reason: format!("missing column {index}"),
            })
        };
        let mut over = Vec::with_capacity(AngleOfAttack::ALL.len());
        let mut under = Vec::with_capacity(AngleOfAttack::ALL.len());
        for angle in AngleOfAttack::ALL {
            over.push(column(angle.over_column())?);
            under.push(column(angle.under_column())?);
        }
        Ok(Self { over, under })
    }

    /// Reads and extracts the curves from a file with the default layout.
    ///
    /// # Errors
    /// Any [`TableError`] from reading or parsing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        Self::from_table(&SampleTable::from_path(path, &TableLayout::default())?)
    }

    /// Positions per surface.
    #[must_use]
    pub fn positions_per_surface(&self) -> usize {
        self.over.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn over(&self, angle: AngleOfAttack) -> &[f64] {
        &self.over[scenario_index(angle)]
    }

    #[must_use]
    pub fn under(&self, angle: AngleOfAttack) -> &[f64] {
        &self.under[scenario_index(angle)]
    }

    /// One curve per angle of attack: the over surface followed by the under
    /// surface, so position `i < positions_per_surface()` is over-surface.
    #[must_use]
    pub fn scenario_curves(&self) -> Vec<Vec<f64>> {
        self.over
            .iter()
            .zip(&self.under)
            .map(|(over, under)| over.iter().chain(under).copied().collect())
            .collect()
    }
}

fn scenario_index(angle: AngleOfAttack) -> usize {
    match angle {
        AngleOfAttack::Ten => 0,
        AngleOfAttack::Five => 1,
        AngleOfAttack::Zero => 2,
    }
}
