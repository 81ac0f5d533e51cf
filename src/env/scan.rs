use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::residue::{ResidueMention, StandardResidue};

static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z0-9])\s+([A-Za-z]{3})\s+([0-9]+)\b")
        .expect("invalid residue mention pattern")
});

/// Collects every standard residue written as `<chain> <RES> <number>` in `text`.
///
/// Mentions are unique per `(chain, number)`: the first sighting fixes the
/// position in the returned list and the last sighting fixes the residue.
/// Names are case-insensitive; non-standard names are ignored.
pub fn scan_residues(text: &str) -> Vec<ResidueMention> {
    let mut mentions: Vec<ResidueMention> = Vec::new();
    let mut index: HashMap<(char, i64), usize> = HashMap::new();

    for caps in MENTION_REGEX.captures_iter(text) {
        let Some(chain) = caps[1].chars().next() else {
            continue;
        };
        let Ok(residue) = caps[2].to_ascii_uppercase().parse::<StandardResidue>() else {
            continue;
        };
        let Ok(number) = caps[3].parse::<i64>() else {
            continue;
        };

        let mention = ResidueMention {
            chain,
            number,
            residue,
        };
        match index.get(&(chain, number)) {
            Some(&i) => mentions[i] = mention,
            None => {
                index.insert((chain, number), mentions.len());
                mentions.push(mention);
            }
        }
    }

    mentions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_chain_residue_number_triples() {
        let found = scan_residues("Residues within 8 A: A ASP 312, A TYR 308 and B lys 101.");
        let summary: Vec<_> = found
            .iter()
            .map(|m| (m.chain, m.residue, m.number))
            .collect();
        assert_eq!(
            summary,
            vec![
                ('A', StandardResidue::ASP, 312),
                ('A', StandardResidue::TYR, 308),
                ('B', StandardResidue::LYS, 101),
            ]
        );
    }

    #[test]
    fn repeated_positions_are_counted_once_last_name_wins() {
        let found = scan_residues("A ASP 312\nA GLU 77\nA ASN 312\n");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].number, 312);
        assert_eq!(found[0].residue, StandardResidue::ASN);
        assert_eq!(found[1].residue, StandardResidue::GLU);
    }

    #[test]
    fn same_number_on_other_chain_is_distinct() {
        assert_eq!(scan_residues("A SER 10 B SER 10").len(), 2);
    }

    #[test]
    fn unknown_residue_names_are_ignored() {
        assert!(scan_residues("A HOH 501 B NAG 900").is_empty());
    }

    #[test]
    fn requires_word_boundaries() {
        assert!(scan_residues("XA ASP 312").is_empty());
        assert!(scan_residues("A ASP 312x").is_empty());
    }
}
