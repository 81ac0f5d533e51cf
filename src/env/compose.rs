use super::scan::scan_residues;
use super::scheme::ClassScheme;
use super::state::identify_state;
use crate::model::residue::ResidueMention;

/// Residue counts per category for one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub state: String,
    /// Unique residues found, classified or not.
    pub residues: usize,
    /// `(category, count)` in scheme order; every category is present.
    pub counts: Vec<(String, usize)>,
}

impl Composition {
    pub fn count(&self, category: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(name, _)| name == category)
            .map(|&(_, n)| n)
    }

    pub fn classified(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Counts residues per category, each residue in the first category that lists it.
pub fn count_categories(residues: &[ResidueMention], scheme: &ClassScheme) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = scheme
        .labels()
        .into_iter()
        .map(|label| (label.to_string(), 0))
        .collect();

    for mention in residues {
        let Some(category) = scheme.classify(mention.residue.three_letter()) else {
            continue;
        };
        if let Some(slot) = counts.iter_mut().find(|(name, _)| name == category) {
            slot.1 += 1;
        }
    }

    counts
}

/// Scans free text for residues, labels the state and counts categories.
pub fn compose(text: &str, scheme: &ClassScheme, target: i64) -> Composition {
    let residues = scan_residues(text);
    Composition {
        state: identify_state(&residues, target),
        residues: residues.len(),
        counts: count_categories(&residues, scheme),
    }
}
