//! Delimited-text (CSV) parsing into raw tables.

use crate::{
    error::{Result, StatsError},
    table::{Cell, Table},
};
use csv::{ReaderBuilder, StringRecord};

/// Parse CSV text into a raw table of text cells.
///
/// With `header == None` the first record is the header. Header-less
/// endpoints pass their fixed column list instead. A row with exactly one
/// extra, empty trailing field (a trailing delimiter) is accepted; any other
/// width mismatch is a `MalformedRow` error.
pub fn parse_csv(body: &str, header: Option<&[&str]>) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(header.is_none())
        .flexible(true)
        .from_reader(body.as_bytes());

    let columns: Vec<String> = match header {
        Some(names) => names.iter().map(|n| n.to_string()).collect(),
        None => trim_trailing_empty(reader.headers()?, None)
            .iter()
            .map(|h| h.to_string())
            .collect(),
    };
    if columns.is_empty() {
        return Err(StatsError::NoData);
    }

    let mut table = Table::new(columns.iter().cloned());
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let fields = trim_trailing_empty(&record, Some(columns.len()));
        if fields.len() != columns.len() {
            return Err(StatsError::MalformedRow {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: columns.len(),
                found: fields.len(),
            });
        }
        table.push_row(fields.iter().map(|f| Cell::from_raw(f)).collect())?;
    }

    Ok(table)
}

/// Drop a single empty trailing field when it makes the record one too long
/// (or, for the header itself, whenever it is present).
fn trim_trailing_empty(record: &StringRecord, expected: Option<usize>) -> Vec<&str> {
    let mut fields: Vec<&str> = record.iter().collect();
    let too_long = expected.map_or(true, |n| fields.len() == n + 1);
    if too_long && fields.last().is_some_and(|f| f.trim().is_empty()) {
        fields.pop();
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_with_header_row() {
        let body = "rank,team,conf,\"Fun Rk, adjt\"\n1,Houston,Amer,3\n2,Alabama,SEC,\n";
        let table = parse_csv(body, None).unwrap();

        assert_eq!(table.columns()[3], "Fun Rk, adjt");
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, "team"), Some(&Cell::from("Alabama")));
        assert_eq!(table.cell(1, "Fun Rk, adjt"), Some(&Cell::Missing));
    }

    #[test]
    fn test_parse_csv_with_fixed_header() {
        let body = "Zach Edey,Purdue,B10\nHunter Dickinson,Kansas,B12\n";
        let table = parse_csv(body, Some(&["player_name", "team", "conf"])).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, "player_name"), Some(&Cell::from("Zach Edey")));
    }

    #[test]
    fn test_parse_csv_accepts_trailing_delimiter() {
        let body = "a,b,\n1,2,\n3,4\n";
        let table = parse_csv(body, None).unwrap();
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_csv_skips_blank_lines() {
        let body = "a,b\n1,2\n,\n3,4\n";
        let table = parse_csv(body, None).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_csv_ragged_row_is_error() {
        let body = "a,b,c\n1,2,3\n4,5\n";
        match parse_csv(body, None) {
            Err(StatsError::MalformedRow {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("Expected MalformedRow error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_empty_body_is_no_data() {
        assert!(matches!(parse_csv("", None), Err(StatsError::NoData)));
    }
}
