//! Output helpers shared by the dataset commands.

use crate::{
    cli::ViewArgs,
    error::Result,
    stats::correlation,
    table::Table,
    view::{histogram, Bin, FilteredView},
};
use serde::Serialize;

/// Histogram of one series, as printed by `--hist`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupHistogram {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub bins: Vec<Bin>,
}

/// Column-aligned text rendering of `table`.
pub fn format_table(table: &Table) -> String {
    let rendered: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns().iter().map(|c| c.chars().count()).collect();
    for row in &rendered {
        for (width, text) in widths.iter_mut().zip(row) {
            *width = (*width).max(text.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = Vec::with_capacity(rendered.len() + 2);
    out.push(pad_line(table.columns(), &widths));
    out.push(pad_line(&rule, &widths));
    for row in &rendered {
        out.push(pad_line(row, &widths));
    }
    out.join("\n")
}

fn pad_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(text, width)| format!("{:<width$}", text, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Histograms of `metric`, one per group.
pub fn metric_histograms(
    view: &FilteredView,
    metric: &str,
    group: Option<&str>,
    bins: usize,
) -> Result<Vec<GroupHistogram>> {
    Ok(view
        .metric_distribution(metric, group)?
        .into_iter()
        .map(|series| GroupHistogram {
            bins: histogram(&series.values, bins),
            group: series.group,
        })
        .collect())
}

/// Print `view` the way `args` asks: scatter points, histograms or the table.
///
/// `label` names the row label column for scatter points; `default_group`
/// colors points when `--group` is not given.
pub fn render_view(
    view: &FilteredView,
    args: &ViewArgs,
    label: &str,
    default_group: Option<&str>,
) -> Result<()> {
    let group = args.group.as_deref().or(default_group);

    if let (Some(x), Some(y)) = (args.x.as_deref(), args.y.as_deref()) {
        let points = view.scatter(x, y, Some(label), group)?;
        if args.json {
            return print_json(&points);
        }
        for p in &points {
            println!(
                "{:<24} {:>10.3} {:>10.3} {}",
                p.label.as_deref().unwrap_or(""),
                p.x,
                p.y,
                p.group.as_deref().unwrap_or("")
            );
        }
        if let Some(r) = correlation(&view.table, x, y)? {
            println!("r({}, {}) = {:.3}", x, y, r);
        }
        return Ok(());
    }

    if let Some(metric) = args.hist.as_deref() {
        let bins = usize::from(args.bins);
        let histograms = metric_histograms(view, metric, args.group.as_deref(), bins)?;
        if args.json {
            return print_json(&histograms);
        }
        for h in &histograms {
            if let Some(g) = &h.group {
                println!("{}:", g);
            }
            for bin in &h.bins {
                println!("  [{:>8.3}, {:>8.3})  {}", bin.lower, bin.upper, bin.count);
            }
        }
        return Ok(());
    }

    if args.json {
        return print_json(view);
    }
    if view.is_empty() {
        println!("No rows match the selected filters.");
        return Ok(());
    }
    println!("{}", format_table(&view.table));
    println!("({} rows)", view.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    fn view() -> FilteredView {
        let table = Table::from_rows(
            ["team", "conf", "adjoe"],
            vec![
                vec![Cell::from("Houston"), Cell::from("Amer"), Cell::Float(117.6)],
                vec![Cell::from("UConn"), Cell::from("BE"), Cell::Float(121.0)],
                vec![Cell::from("Duke"), Cell::from("ACC"), Cell::Missing],
            ],
        )
        .unwrap();
        FilteredView::new(table, vec!["adjoe".to_string()])
    }

    #[test]
    fn test_format_table_aligns_columns() {
        let text = format_table(&view().table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "team     conf  adjoe");
        assert_eq!(lines[1], "-------  ----  -----");
        assert_eq!(lines[2], "Houston  Amer  117.6");
        assert_eq!(lines[4], "Duke     ACC");
    }

    #[test]
    fn test_metric_histograms_per_group() {
        let histograms = metric_histograms(&view(), "adjoe", Some("conf"), 4).unwrap();
        assert_eq!(histograms.len(), 2);
        assert_eq!(histograms[0].group.as_deref(), Some("Amer"));
        assert_eq!(histograms[0].bins.iter().map(|b| b.count).sum::<usize>(), 1);
    }

    #[test]
    fn test_metric_histograms_rejects_non_metric() {
        assert!(metric_histograms(&view(), "team", None, 4).is_err());
    }
}
