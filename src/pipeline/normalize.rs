//! Column renaming and type casting.

use crate::{
    error::{Result, StatsError},
    table::{Cell, Table},
};
use std::{collections::HashSet, fmt};

/// Ordered mapping from source header to canonical column name.
///
/// Every entry is required: a source header that is absent fails the whole
/// normalization with `SchemaMismatch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    entries: Vec<(String, String)>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map several headers at once.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |map, (source, canonical)| map.rename(source, canonical))
    }

    /// Keep headers under their source names.
    pub fn identity(names: &[&str]) -> Self {
        names
            .iter()
            .fold(Self::new(), |map, name| map.rename(name, name))
    }

    pub fn rename(mut self, source: &str, canonical: &str) -> Self {
        self.entries.push((source.to_string(), canonical.to_string()));
        self
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, canonical)| canonical.as_str())
    }
}

/// Target type of a normalized column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    /// Integer column where blank cells are allowed.
    NullableInteger,
    /// Float column where blank cells are allowed.
    NullableFloat,
}

impl ColumnType {
    fn nullable(self) -> bool {
        matches!(self, ColumnType::NullableInteger | ColumnType::NullableFloat)
    }

    fn integral(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::NullableInteger)
    }

    /// Cast one cell, naming `column` in the error when the cast is impossible.
    pub fn cast(self, column: &str, cell: &Cell) -> Result<Cell> {
        let fail = |value: String| StatsError::TypeCoercion {
            column: column.to_string(),
            value,
            target: self.to_string(),
        };

        match cell {
            Cell::Missing => {
                if self.nullable() {
                    Ok(Cell::Missing)
                } else {
                    Err(fail(String::new()))
                }
            }
            Cell::Int(i) => Ok(if self.integral() {
                Cell::Int(*i)
            } else {
                Cell::Float(*i as f64)
            }),
            Cell::Float(f) => {
                if !self.integral() {
                    Ok(Cell::Float(*f))
                } else if f.fract() == 0.0 && f.is_finite() {
                    Ok(Cell::Int(*f as i64))
                } else {
                    Err(fail(f.to_string()))
                }
            }
            Cell::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return self.cast(column, &Cell::Missing);
                }
                if self.integral() {
                    trimmed
                        .parse::<i64>()
                        .map(Cell::Int)
                        .map_err(|_| fail(raw.clone()))
                } else {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .map(Cell::Float)
                        .ok_or_else(|| fail(raw.clone()))
                }
            }
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::NullableInteger => "nullable integer",
            ColumnType::NullableFloat => "nullable float",
        };
        write!(f, "{}", s)
    }
}

/// Mapping from canonical column name to its target type.
///
/// Columns without an entry keep their cells as they came from the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMap {
    entries: Vec<(String, ColumnType)>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cast(mut self, column: &str, target: ColumnType) -> Self {
        self.entries.push((column.to_string(), target));
        self
    }

    /// Give every listed column the same target type.
    pub fn cast_all(self, columns: &[&str], target: ColumnType) -> Self {
        columns
            .iter()
            .fold(self, |map, column| map.cast(column, target))
    }

    pub fn entries(&self) -> &[(String, ColumnType)] {
        &self.entries
    }
}

/// Rename and cast `raw` into a new table holding only the mapped columns.
///
/// The first impossible cast halts normalization; no row is dropped silently.
pub fn normalize(raw: &Table, column_map: &ColumnMap, type_map: &TypeMap) -> Result<Table> {
    let sources = column_map
        .entries()
        .iter()
        .map(|(source, _)| raw.require_column(source))
        .collect::<Result<Vec<_>>>()?;
    let columns: Vec<&str> = column_map.canonical_names().collect();
    let mut seen = HashSet::new();
    if let Some(dup) = columns.iter().find(|c| !seen.insert(**c)) {
        return Err(StatsError::DuplicateColumn {
            column: dup.to_string(),
        });
    }

    let mut casts: Vec<Option<ColumnType>> = vec![None; columns.len()];
    for (name, target) in type_map.entries() {
        let position = columns
            .iter()
            .position(|c| *c == name.as_str())
            .ok_or_else(|| StatsError::SchemaMismatch {
                column: name.clone(),
            })?;
        casts[position] = Some(*target);
    }

    let mut table = Table::new(columns.iter().copied());
    for row in raw.rows() {
        let normalized = sources
            .iter()
            .zip(&casts)
            .zip(&columns)
            .map(|((&src, cast), column)| match cast {
                Some(target) => target.cast(column, &row[src]),
                None => Ok(row[src].clone()),
            })
            .collect::<Result<Vec<_>>>()?;
        table.push_row(normalized)?;
    }

    tracing::debug!(
        rows = table.len(),
        columns = table.columns().len(),
        "normalized table"
    );
    Ok(table)
}
