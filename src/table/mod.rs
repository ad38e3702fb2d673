//! In-memory tabular data shared by the fetchers, the pipeline and the view.
//!
//! A [`Table`] is an ordered list of named columns plus rows of [`Cell`]s.
//! Every transform returns a new table; nothing mutates a table that another
//! stage still holds.

use crate::error::{Result, StatsError};
use serde::Serialize;
use std::{borrow::Cow, collections::HashMap, fmt};


/// A single value in a [`Table`].
///
/// Raw tables straight from a source hold only `Text` and `Missing`;
/// numeric variants appear after normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Missing,
}

impl Cell {
    /// Build a cell from raw source text. Blank text becomes `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Cell::Missing
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the cell. Text is not parsed here.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Key used when comparing a cell against user-selected values.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Cell::Text(s) => Cow::Borrowed(s.as_str()),
            Cell::Int(i) => Cow::Owned(i.to_string()),
            Cell::Float(f) => Cow::Owned(f.to_string()),
            Cell::Missing => Cow::Borrowed(""),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Missing => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

/// Rows of cells under a fixed, ordered header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given header.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create a table, checking that every row matches the header width.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<Cell>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(StatsError::MalformedRow {
                line: self.rows.len() as u64 + 1,
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of `name`, or `SchemaMismatch` when the header lacks it.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| StatsError::SchemaMismatch {
                column: name.to_string(),
            })
    }

    /// All cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Cell> + '_> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Numeric values of a column, one entry per row.
    ///
    /// `Missing` cells map to `None`. Text cells are parsed; text that is not
    /// a finite number fails with `TypeCoercion`.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        self.column(name)?
            .map(|cell| match cell {
                Cell::Missing => Ok(None),
                Cell::Text(s) => s
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(Some)
                    .ok_or_else(|| StatsError::TypeCoercion {
                        column: name.to_string(),
                        value: s.clone(),
                        target: "float".to_string(),
                    }),
                other => Ok(other.as_f64()),
            })
            .collect()
    }

    /// Distinct keys of a column in order of first appearance, skipping blanks.
    pub fn unique_values(&self, name: &str) -> Result<Vec<String>> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for cell in self.column(name)? {
            if cell.is_missing() {
                continue;
            }
            let key = cell.key().into_owned();
            if seen.insert(key.clone()) {
                out.push(key);
            }
        }
        Ok(out)
    }

    /// Empty table with the same header.
    pub fn empty_like(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: Vec::new(),
        }
    }

    /// New table holding the rows for which `keep` returns true.
    pub fn retain_rows<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&[Cell]) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| keep(row))
                .cloned()
                .collect(),
        }
    }

    /// Project onto the named columns, in the given order.
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        let indices = names
            .iter()
            .map(|name| self.require_column(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            columns: names.iter().map(|n| n.to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        })
    }

    /// Copy of the table with one more column appended.
    pub fn with_column(&self, name: &str, cells: Vec<Cell>) -> Result<Self> {
        if self.has_column(name) {
            return Err(StatsError::DuplicateColumn {
                column: name.to_string(),
            });
        }
        if cells.len() != self.rows.len() {
            return Err(StatsError::MalformedRow {
                line: cells.len().min(self.rows.len()) as u64 + 1,
                expected: self.rows.len(),
                found: cells.len(),
            });
        }
        let mut columns = self.columns.clone();
        columns.push(name.to_string());
        let rows = self
            .rows
            .iter()
            .zip(cells)
            .map(|(row, cell)| {
                let mut row = row.clone();
                row.push(cell);
                row
            })
            .collect();
        Ok(Self { columns, rows })
    }

    /// Left join on `left_key == right_key`.
    ///
    /// Every left row is kept once; right columns (minus the key) are appended,
    /// filled with `Missing` when no right row matches. The first matching right
    /// row wins. Column names shared by both sides are rejected.
    pub fn left_join(&self, right: &Table, left_key: &str, right_key: &str) -> Result<Self> {
        let left_idx = self.require_column(left_key)?;
        let right_idx = right.require_column(right_key)?;

        let appended: Vec<usize> = (0..right.columns.len()).filter(|&i| i != right_idx).collect();
        for &i in &appended {
            if self.has_column(&right.columns[i]) {
                return Err(StatsError::DuplicateColumn {
                    column: right.columns[i].clone(),
                });
            }
        }

        let mut lookup: HashMap<String, &Vec<Cell>> = HashMap::new();
        for row in &right.rows {
            let key = &row[right_idx];
            if !key.is_missing() {
                lookup.entry(key.key().into_owned()).or_insert(row);
            }
        }

        let mut columns = self.columns.clone();
        columns.extend(appended.iter().map(|&i| right.columns[i].clone()));

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut joined = row.clone();
                match lookup.get(row[left_idx].key().as_ref()) {
                    Some(matched) if !row[left_idx].is_missing() => {
                        joined.extend(appended.iter().map(|&i| matched[i].clone()))
                    }
                    _ => joined.extend(appended.iter().map(|_| Cell::Missing)),
                }
                joined
            })
            .collect();

        Ok(Self { columns, rows })
    }
}
