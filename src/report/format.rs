//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the synthesis/comparison code stays free of presentation concerns
//! - output changes are localized

use crate::analysis::{DivisionTotals, InventorySummary, PortfolioSummary, TrendSummary, annual_growth};
use crate::domain::{ConfigurationRecord, NormalizedComparison, Position, Program, RegionalCommand, TimeSeriesTable};
use crate::expand::ConditionalRegistry;
use crate::math::CorrelationMatrix;

/// Minimum width of a value column.
const MIN_COL: usize = 10;

/// Header + year-by-indicator table for one synthesized selection.
pub fn format_scenario(config: &ConfigurationRecord, table: &TimeSeriesTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ({}) ===\n", config.label, config.key));
    out.push_str(&format!("Kind: {}\n", config.kind.display_name()));
    out.push_str(&format!("Axis: {:?}\n", config.headline_axis()));
    if !config.priority_tags.is_empty() {
        let tags: Vec<&str> = config.priority_tags.iter().map(String::as_str).collect();
        out.push_str(&format!("Tags: {}\n", tags.join(", ")));
    }
    out.push_str(&format!(
        "Years: {}..={} | indicators: {}\n\n",
        table.years().first(),
        table.years().last(),
        table.len()
    ));
    out.push_str(&format_table(table));
    out
}

/// Years as rows, indicators as columns.
pub fn format_table(table: &TimeSeriesTable) -> String {
    let names: Vec<&str> = table.indicators().collect();
    let widths: Vec<usize> = names.iter().map(|n| n.len().max(MIN_COL)).collect();

    let mut out = String::new();
    let mut header = format!("{:<6}", "year");
    let mut rule = format!("{:-<6}", "");
    for (name, &w) in names.iter().zip(&widths) {
        header.push_str(&format!(" {name:>w$}"));
        rule.push_str(&format!(" {:-<w$}", ""));
    }
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(rule.trim_end());
    out.push('\n');

    for year in table.years().iter() {
        let mut line = format!("{year:<6}");
        for (name, &w) in names.iter().zip(&widths) {
            let value = table.get(name).and_then(|s| s.value_at(year));
            line.push_str(&format!(" {:>w$}", fmt_opt(value, 2)));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// First/last values and percentage moves.
pub fn format_trends(trends: &[TrendSummary]) -> String {
    let mut out = String::new();
    out.push_str("Trends:\n");
    out.push_str(&format!(
        "{:<32} {:>12} {:>12} {:>10} {:>12}\n",
        "indicator", "first", "last", "change%", "improvement%"
    ));
    for t in trends {
        out.push_str(
            format!(
                "{:<32} {:>12.2} {:>12.2} {:>10} {:>12}\n",
                truncate(&t.indicator, 32),
                t.first,
                t.last,
                fmt_signed(t.change_pct),
                fmt_signed(t.improvement_pct),
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

/// Year-over-year percent change for every indicator.
pub fn format_annual_growth(table: &TimeSeriesTable) -> String {
    let mut out = String::new();
    out.push_str("Annual growth (%):\n");
    for (name, series) in table.iter() {
        let parts: Vec<String> = annual_growth(series)
            .into_iter()
            .skip(1)
            .map(|(year, g)| format!("{year}:{}", fmt_signed(g)))
            .collect();
        out.push_str(&format!("{:<32} {}\n", truncate(name, 32), parts.join(" ")));
    }
    out
}

/// Square correlation matrix, indicators numbered to keep the table narrow.
pub fn format_correlation(matrix: &CorrelationMatrix) -> String {
    let mut out = String::new();
    out.push_str("Correlation:\n");
    for (i, name) in matrix.indicators.iter().enumerate() {
        out.push_str(&format!("  [{i}] {name}\n"));
    }
    let mut header = format!("{:>5}", "");
    for j in 0..matrix.len() {
        header.push_str(&format!(" {:>6}", format!("[{j}]")));
    }
    out.push_str(header.trim_end());
    out.push('\n');
    for i in 0..matrix.len() {
        let mut line = format!("{:>5}", format!("[{i}]"));
        for j in 0..matrix.len() {
            line.push_str(&format!(" {:>6}", fmt_opt(matrix.get(i, j), 2)));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Entities as rows; each indicator shows `normalized (#rank)`.
pub fn format_comparison(comparison: &NormalizedComparison) -> String {
    if comparison.is_empty() {
        return "No indicators selected.\n".to_string();
    }
    let widths: Vec<usize> = comparison
        .indicators
        .iter()
        .map(|n| n.len().max(MIN_COL + 2))
        .collect();

    let mut out = String::new();
    let mut header = format!("{:<16}", "entity");
    let mut rule = format!("{:-<16}", "");
    for (name, &w) in comparison.indicators.iter().zip(&widths) {
        header.push_str(&format!(" {name:>w$}"));
        rule.push_str(&format!(" {:-<w$}", ""));
    }
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(rule.trim_end());
    out.push('\n');

    for row in &comparison.rows {
        let mut line = format!("{:<16}", truncate(&row.entity, 16));
        for (name, &w) in comparison.indicators.iter().zip(&widths) {
            let cell = row
                .cells
                .get(name)
                .map(|c| format!("{:.1} (#{})", c.normalized, c.rank))
                .unwrap_or_else(|| "-".to_string());
            line.push_str(&format!(" {cell:>w$}"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Raw value and `rank/total` of one entity on each indicator.
pub fn format_position(entity: &str, positions: &[Position]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Position of {entity}:\n"));
    for p in positions {
        out.push_str(&format!(
            "  {:<28} {:>12.1}  rank {}/{}\n",
            truncate(&p.indicator, 28),
            p.raw,
            p.rank,
            p.total
        ));
    }
    out
}

/// Scenario projections; one column per scenario.
pub fn format_projection(indicator: &str, projected: &TimeSeriesTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("Projection of {indicator}:\n"));
    out.push_str(&format_table(projected));
    out
}

pub fn format_portfolio(programs: &[Program], summary: &PortfolioSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<32} {:>10} {:>6} {:>6} {:<12}\n",
        "program", "budget M$", "start", "end", "status"
    ));
    for p in programs {
        out.push_str(&format!(
            "{:<32} {:>10.0} {:>6} {:>6} {:<12}\n",
            truncate(&p.name, 32),
            p.budget_musd,
            p.start,
            p.end,
            p.status.display_name()
        ));
    }
    out.push('\n');
    out.push_str(&format!("Total budget: {:.0} M$\n", summary.total_budget_musd));
    out.push_str(&format!(
        "Programs: {} ({} in progress, {} completed)\n",
        summary.programs, summary.in_progress, summary.completed
    ));
    if let Some((start, end)) = summary.span {
        out.push_str(&format!("Span: {start}-{end}\n"));
    }
    out
}

/// Equipment quantities in both inventory years, growth and modernity.
pub fn format_inventory(summary: &InventorySummary, baseline_year: i32, current_year: i32) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<28} {:>8} {:>8} {:>9} {:>10}\n",
        "equipment", baseline_year, current_year, "growth%", "modern%"
    ));
    for item in &summary.items {
        out.push_str(&format!(
            "{:<28} {:>8} {:>8} {:>9} {:>10.0}\n",
            truncate(&item.kind, 28),
            item.baseline,
            item.current,
            fmt_signed(item.growth_pct),
            item.modernity_pct
        ));
    }
    out.push('\n');
    out.push_str(&format!("Mean modernity: {}%\n", fmt_opt(summary.mean_modernity_pct, 1)));
    out
}

/// Divisions per command, then totals per division type.
pub fn format_structure(commands: &[RegionalCommand], totals: &DivisionTotals) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:>8} {:>10} {:>9} {:>8}\n",
        "command", "armored", "mechanized", "infantry", "special"
    ));
    for c in commands {
        out.push_str(&format!(
            "{:<20} {:>8} {:>10} {:>9} {:>8}\n",
            truncate(&c.name, 20),
            c.armored,
            c.mechanized,
            c.infantry,
            c.special_forces
        ));
    }
    out.push_str(&format!(
        "{:<20} {:>8} {:>10} {:>9} {:>8}\n",
        "total", totals.armored, totals.mechanized, totals.infantry, totals.special_forces
    ));
    out.push_str(&format!("\nDivisions: {}\n", totals.total()));
    out
}

/// Known selections and the conditional indicator registry.
pub fn format_selection_list(records: &[ConfigurationRecord], registry: &ConditionalRegistry) -> String {
    let mut out = String::new();
    out.push_str("Selections:\n");
    for r in records {
        let tags: Vec<&str> = r.priority_tags.iter().map(String::as_str).collect();
        out.push_str(
            format!(
                "  {:<20} {:<18} {:<34} {}\n",
                r.key,
                r.kind.display_name(),
                truncate(&r.label, 34),
                tags.join(",")
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out.push_str("\nConditional indicators:\n");
    for (tag, entry) in registry.iter() {
        out.push_str(&format!("  {tag:<24} -> {}\n", entry.indicator));
    }
    out
}

fn fmt_opt(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(v) => format!("{v:.decimals$}"),
        None => "n/a".to_string(),
    }
}

fn fmt_signed(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:+.1}"),
        None => "n/a".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resolve;
    use crate::compare::normalize;
    use crate::domain::{EntitySnapshot, YearRange};
    use crate::synth::synthesize;

    #[test]
    fn table_has_one_line_per_year() {
        let config = resolve("air-defense");
        let table = synthesize(&config, YearRange::new(2012, 2016).unwrap()).unwrap();
        let text = format_table(&table);
        // header + rule + 5 years
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().nth(2).unwrap().starts_with("2012"));
        assert!(text.lines().next().unwrap().contains("sam_batteries"));
    }

    #[test]
    fn comparison_shows_rank() {
        let snapshots = vec![
            EntitySnapshot::new("A").with("x", 10.0),
            EntitySnapshot::new("B").with("x", 10.0),
            EntitySnapshot::new("C").with("x", 7.0),
        ];
        let cmp = normalize(&snapshots, &["x"]).unwrap();
        let text = format_comparison(&cmp);
        assert!(text.contains("100.0 (#1)"));
        assert!(text.contains("70.0 (#2)"));
    }

    #[test]
    fn inventory_and_structure_show_totals() {
        let inventory = crate::analysis::summarize_inventory(&crate::data::equipment_inventory());
        let text = format_inventory(&inventory, 2012, 2024);
        assert!(text.contains("+10.6"));
        assert!(text.contains("Mean modernity: 39.2%"));

        let commands = crate::data::regional_commands();
        let text = format_structure(&commands, &crate::analysis::summarize_structure(&commands));
        assert!(text.contains("Divisions: 41"));
        assert_eq!(text.lines().count(), 1 + commands.len() + 1 + 2);
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("abcdef", 4), "abc.");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
