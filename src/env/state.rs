use crate::model::residue::{ResidueMention, StandardResidue};

/// Labels an environment by the residue found at `target`.
///
/// Aspartate marks the wild type and asparagine the mutant; anything else,
/// including a missing residue, is reported as unknown. When several chains
/// carry `target`, the first mention decides.
pub fn identify_state(residues: &[ResidueMention], target: i64) -> String {
    let found = residues.iter().find(|m| m.number == target).map(|m| m.residue);
    match found {
        Some(StandardResidue::ASP) => format!("WT(ASP{target})"),
        Some(StandardResidue::ASN) => format!("Mut(ASN{target})"),
        Some(other) => format!("Unknown{target}({})", other.one_letter()),
        None => format!("Unknown{target}(None)"),
    }
}
