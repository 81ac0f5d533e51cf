use std::collections::HashMap;

use crate::model::record::{BondRecord, SummaryEntry};

/// Counts rows and tracks the shortest distance per state.
///
/// States appear in the order they are first seen in `rows`.
pub fn summarize(rows: &[BondRecord]) -> Vec<SummaryEntry> {
    let mut entries: Vec<SummaryEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        match index.get(row.state.as_str()) {
            Some(&i) => {
                let entry = &mut entries[i];
                entry.count += 1;
                entry.min_distance = entry.min_distance.min(row.distance);
            }
            None => {
                index.insert(row.state.as_str(), entries.len());
                entries.push(SummaryEntry {
                    state: row.state.clone(),
                    count: 1,
                    min_distance: row.distance,
                });
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(state: &str, partner: &str, distance: f64) -> BondRecord {
        BondRecord {
            state: state.into(),
            center_chain: "A".into(),
            center_atom: "ASN312ND2".into(),
            partner_chain: "B".into(),
            partner_atom: partner.into(),
            distance,
        }
    }

    #[test]
    fn one_entry_per_state_with_own_statistics() {
        let rows = vec![
            row("Mut", "GLY305O", 3.0),
            row("Mut", "TYR308O", 2.95),
            row("WT", "SER290OG", 2.7),
        ];
        let summary = summarize(&rows);
        assert_eq!(
            summary,
            vec![
                SummaryEntry {
                    state: "Mut".into(),
                    count: 2,
                    min_distance: 2.95
                },
                SummaryEntry {
                    state: "WT".into(),
                    count: 1,
                    min_distance: 2.7
                },
            ]
        );
    }

    #[test]
    fn keeps_first_appearance_order() {
        let rows = vec![row("WT", "A", 3.0), row("Mut", "B", 2.0), row("WT", "C", 2.5)];
        let states: Vec<_> = summarize(&rows).into_iter().map(|e| e.state).collect();
        assert_eq!(states, vec!["WT", "Mut"]);
    }

    #[test]
    fn counts_match_rows_per_state() {
        let rows = vec![
            row("Mut", "A", 3.0),
            row("Mut", "B", 3.1),
            row("Mut", "C", 3.2),
            row("WT", "A", 2.0),
        ];
        for entry in summarize(&rows) {
            let expected = rows.iter().filter(|r| r.state == entry.state).count();
            assert_eq!(entry.count, expected);
        }
    }

    #[test]
    fn no_rows_no_entries() {
        assert!(summarize(&[]).is_empty());
    }
}
