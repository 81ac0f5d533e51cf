use std::io::{self, Write};

use hbscan::hbond::ExtractStats;
use hbscan::{Composition, NeighborComposition, SummaryEntry};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_hbond_summary(summary: &[SummaryEntry], target: i64) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let count_w = 8usize;
    let dist_w = 10usize;
    let sep_overhead = 8;
    let state_w = SAFE_TABLE_WIDTH.saturating_sub(count_w + dist_w + sep_overhead);

    print_title(&mut out, &format!("H-Bonds Involving {target}"));
    let widths = [state_w, count_w, dist_w];
    print_rule(&mut out, '┌', '┬', '┐', &widths);
    let _ = writeln!(
        out,
        "{}│ {:<state_w$} │ {:>count_w$} │ {:>dist_w$} │",
        INDENT, "State", "Bonds", "Min D..A",
    );
    print_rule(&mut out, '├', '┼', '┤', &widths);

    if summary.is_empty() {
        let _ = writeln!(
            out,
            "{}│ {:<state_w$} │ {:>count_w$} │ {:>dist_w$} │",
            INDENT, "(no bonds found)", "-", "-",
        );
    }

    for entry in summary {
        let _ = writeln!(
            out,
            "{}│ {:<state_w$} │ {:>count_w$} │ {:>dist_w$} │",
            INDENT,
            truncate(&entry.state, state_w),
            entry.count,
            format!("{:.3} Å", entry.min_distance),
        );
    }

    print_rule(&mut out, '└', '┴', '┘', &widths);
}

pub fn print_extract_stats(stats: &[(String, ExtractStats)]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let num_w = 7usize;
    let sep_overhead = 14;
    let state_w = SAFE_TABLE_WIDTH.saturating_sub(4 * num_w + sep_overhead);

    print_title(&mut out, "Line Accounting");
    let widths = [state_w, num_w, num_w, num_w, num_w];
    print_rule(&mut out, '┌', '┬', '┐', &widths);
    let _ = writeln!(
        out,
        "{}│ {:<state_w$} │ {:>num_w$} │ {:>num_w$} │ {:>num_w$} │ {:>num_w$} │",
        INDENT, "State", "Lines", "Matched", "Kept", "Self",
    );
    print_rule(&mut out, '├', '┼', '┤', &widths);

    for (state, s) in stats {
        let _ = writeln!(
            out,
            "{}│ {:<state_w$} │ {:>num_w$} │ {:>num_w$} │ {:>num_w$} │ {:>num_w$} │",
            INDENT,
            truncate(state, state_w),
            s.lines,
            s.matched,
            s.kept,
            s.self_pairs,
        );
    }

    print_rule(&mut out, '└', '┴', '┘', &widths);
}

pub fn print_composition(compositions: &[Composition]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    for composition in compositions {
        let total = composition.residues;
        let title = format!("{} · {} residues", composition.state, total);
        print_distribution_table(&mut out, &title, &composition.counts, total);
    }
}

pub fn print_neighbor_ratios(table: &NeighborComposition) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    for state in &table.states {
        let rows: Vec<(String, usize)> = table
            .categories
            .iter()
            .cloned()
            .zip(state.counts.iter().copied())
            .collect();
        let title = format!("{} · {} neighbors", state.state, state.total());
        print_distribution_table(&mut out, &title, &rows, state.total());
    }
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 12usize;
    let count_w = 6usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    print_title(out, title);
    let widths = [name_w, count_w, dist_w];
    print_rule(out, '┌', '┬', '┐', &widths);
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Category", "Count", "Share",
    );
    print_rule(out, '├', '┼', '┤', &widths);

    for (name, count) in data {
        let pct = if total == 0 {
            0.0
        } else {
            (*count as f64 / total as f64) * 100.0
        };
        let bar = make_bar(pct, max_bar_width);
        let dist_cell = format!("{}  {:>5.1}%", bar, pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(name, name_w),
            count,
            dist_cell,
        );
    }

    print_rule(out, '└', '┴', '┘', &widths);
}

fn print_title(out: &mut impl Write, title: &str) {
    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
}

fn print_rule(out: &mut impl Write, left: char, mid: char, right: char, widths: &[usize]) {
    let cells: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    let _ = writeln!(
        out,
        "{}{}{}{}",
        INDENT,
        left,
        cells.join(&mid.to_string()),
        right
    );
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(make_bar(50.0, 4), "██░░");
        assert_eq!(make_bar(0.0, 3), "░░░");
        assert_eq!(make_bar(100.0, 2), "██");
    }

    #[test]
    fn rule_spans_every_column() {
        let mut out = Vec::new();
        print_rule(&mut out, '┌', '┬', '┐', &[1, 2]);
        let line = String::from_utf8(out).unwrap();
        assert_eq!(line, format!("{INDENT}┌───┬────┐\n"));
    }

    #[test]
    fn distribution_handles_zero_total() {
        let mut out = Vec::new();
        print_distribution_table(&mut out, "empty", &[("Polar".to_string(), 0)], 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Polar"));
        assert!(text.contains("0.0%"));
    }
}
