//! HTML table extraction.
//!
//! Statistics sites render one logical table with presentation rows mixed in:
//! group headers above the real header, header rows repeated every few dozen
//! rows, spacer rows. Those are stripped here so the pipeline only ever sees
//! data rows.

use crate::{
    error::{Result, StatsError},
    table::{Cell, Table},
};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Rule marking a body row as presentation rather than data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactRule {
    /// The row repeats the header labels.
    RepeatedHeader,
    /// The cell under `column` holds exactly `value`.
    CellEquals { column: String, value: String },
    /// The `<tr>` carries this class.
    RowClass(String),
}

impl ArtifactRule {
    pub fn cell_equals(column: &str, value: &str) -> Self {
        ArtifactRule::CellEquals {
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}

/// Which table to read and which rows to drop from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTableSpec {
    pub selector: String,
    pub artifacts: Vec<ArtifactRule>,
}

impl HtmlTableSpec {
    pub fn new(selector: &str, artifacts: Vec<ArtifactRule>) -> Self {
        Self {
            selector: selector.to_string(),
            artifacts,
        }
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| StatsError::InvalidSelector {
        selector: css.to_string(),
    })
}

/// Cell texts of a row, with `colspan` cells repeated so columns line up.
fn row_texts(row: ElementRef<'_>, cells: &Selector) -> Vec<String> {
    let mut out = Vec::new();
    for cell in row.select(cells) {
        let text = cell.text().collect::<String>().trim().to_string();
        let span = cell
            .value()
            .attr("colspan")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        out.extend(std::iter::repeat(text).take(span));
    }
    out
}

/// Parse the first table matching `spec.selector`.
///
/// The last `<thead>` row names the columns (the first row when there is no
/// `<thead>`); blank header cells become `Unnamed: {index}`. Only `<tbody>`
/// rows are read, so `<tfoot>` summary rows never reach the result.
pub fn parse_html_table(body: &str, spec: &HtmlTableSpec) -> Result<Table> {
    let document = Html::parse_document(body);
    let table_sel = selector(&spec.selector)?;
    let head_sel = selector("thead tr")?;
    let body_sel = selector("tbody tr")?;
    let cell_sel = selector("th, td")?;

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| StatsError::TableNotFound {
            selector: spec.selector.clone(),
        })?;

    let mut body_rows: Vec<ElementRef<'_>> = table.select(&body_sel).collect();
    let header_row = match table.select(&head_sel).last() {
        Some(row) => row,
        None if !body_rows.is_empty() => body_rows.remove(0),
        None => return Err(StatsError::NoData),
    };

    let labels = row_texts(header_row, &cell_sel);
    if labels.is_empty() {
        return Err(StatsError::NoData);
    }
    let columns: Vec<String> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if label.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                label.clone()
            }
        })
        .collect();

    let mut out = Table::new(columns.iter().cloned());
    let mut stripped = 0usize;
    for (line, row) in body_rows.into_iter().enumerate() {
        let texts = row_texts(row, &cell_sel);
        if texts.is_empty() {
            stripped += 1;
            continue;
        }
        if is_artifact(row, &texts, &labels, &columns, &spec.artifacts) {
            stripped += 1;
            continue;
        }
        if texts.len() != columns.len() {
            return Err(StatsError::MalformedRow {
                line: line as u64 + 1,
                expected: columns.len(),
                found: texts.len(),
            });
        }
        out.push_row(texts.iter().map(|t| Cell::from_raw(t)).collect())?;
    }

    debug!(rows = out.len(), stripped, "parsed html table");
    Ok(out)
}

fn is_artifact(
    row: ElementRef<'_>,
    texts: &[String],
    labels: &[String],
    columns: &[String],
    rules: &[ArtifactRule],
) -> bool {
    rules.iter().any(|rule| match rule {
        ArtifactRule::RepeatedHeader => texts == labels,
        ArtifactRule::CellEquals { column, value } => columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| texts.get(idx))
            .is_some_and(|text| text == value),
        ArtifactRule::RowClass(class) => row.value().classes().any(|c| c == class.as_str()),
    })
}
