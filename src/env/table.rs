use std::collections::BTreeMap;

use super::scheme::ClassScheme;

/// One row of a neighbor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRow {
    pub state: String,
    pub residue_name: String,
    pub is_neighbor: bool,
}

/// Category counts and ratios for one state of a neighbor table.
#[derive(Debug, Clone, PartialEq)]
pub struct StateComposition {
    pub state: String,
    pub counts: Vec<usize>,
    pub ratios: Vec<f64>,
}

impl StateComposition {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Neighbor composition across states, sorted by state then category name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeighborComposition {
    /// Categories that occur in at least one state.
    pub categories: Vec<String>,
    pub states: Vec<StateComposition>,
}

impl NeighborComposition {
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Interprets a neighbor flag cell.
pub fn parse_flag(cell: &str) -> bool {
    matches!(cell.trim(), "True" | "true" | "TRUE" | "1")
}

/// Classifies neighbor rows and tabulates them per state.
pub fn summarize_neighbors(rows: &[NeighborRow], scheme: &ClassScheme) -> NeighborComposition {
    let mut grouped: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();

    for row in rows.iter().filter(|r| r.is_neighbor) {
        let Some(category) = scheme.classify(&row.residue_name) else {
            continue;
        };
        *grouped
            .entry(row.state.as_str())
            .or_default()
            .entry(category)
            .or_insert(0) += 1;
    }

    let mut categories: Vec<&str> = grouped
        .values()
        .flat_map(|per_state| per_state.keys().copied())
        .collect();
    categories.sort_unstable();
    categories.dedup();

    let states = grouped
        .iter()
        .map(|(state, per_state)| {
            let counts: Vec<usize> = categories
                .iter()
                .map(|c| per_state.get(c).copied().unwrap_or(0))
                .collect();
            let total: usize = counts.iter().sum();
            let ratios = counts
                .iter()
                .map(|&n| n as f64 / total as f64)
                .collect();
            StateComposition {
                state: state.to_string(),
                counts,
                ratios,
            }
        })
        .collect();

    NeighborComposition {
        categories: categories.into_iter().map(str::to_string).collect(),
        states,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(state: &str, residue: &str, is_neighbor: bool) -> NeighborRow {
        NeighborRow {
            state: state.into(),
            residue_name: residue.into(),
            is_neighbor,
        }
    }

    fn rows() -> Vec<NeighborRow> {
        vec![
            row("WT", "ASP", true),
            row("WT", "TYR", true),
            row("WT", "LEU", true),
            row("WT", "LYS", false),
            row("Mut", "ASN", true),
            row("Mut", "TYR", true),
            row("Mut", "HOH", true),
            row("Mut", "GLU", true),
        ]
    }

    #[test]
    fn parse_flag_accepts_common_truthy_spellings() {
        for cell in ["True", "true", " TRUE ", "1"] {
            assert!(parse_flag(cell), "{cell}");
        }
        for cell in ["False", "0", "", "yes"] {
            assert!(!parse_flag(cell), "{cell}");
        }
    }

    #[test]
    fn tabulates_sorted_states_and_categories() {
        let table = summarize_neighbors(&rows(), ClassScheme::table_default());
        assert_eq!(
            table.categories,
            vec!["hydrophobic", "negative", "other", "polar"]
        );
        let states: Vec<_> = table.states.iter().map(|s| s.state.as_str()).collect();
        assert_eq!(states, vec!["Mut", "WT"]);

        assert_eq!(table.states[0].counts, vec![0, 1, 1, 2]);
        assert_eq!(table.states[1].counts, vec![1, 1, 0, 1]);
    }

    #[test]
    fn ratios_sum_to_one_per_state() {
        let table = summarize_neighbors(&rows(), ClassScheme::table_default());
        for state in &table.states {
            let sum: f64 = state.ratios.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
        assert_eq!(table.states[0].ratios[3], 0.5);
        assert_eq!(table.states[0].total(), 4);
    }

    #[test]
    fn non_neighbors_are_ignored() {
        let only_far = vec![row("WT", "LYS", false)];
        assert!(summarize_neighbors(&only_far, ClassScheme::table_default()).is_empty());
    }
}
