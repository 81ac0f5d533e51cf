//! Line grammar for hydrogen-bond report lines.
//!
//! A record line names two endpoints as `#<model>/<chain> <RES> <number> <atom>`
//! and, somewhere after the second endpoint, a whitespace-delimited decimal
//! donor–acceptor distance. Everything in between is free text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::model::record::{Endpoint, RawBond};

const LINE_PATTERN: &str = concat!(
    r"#(?P<m1>[0-9]+)/(?P<c1>\S)\s+(?P<r1>[A-Z]{3})\s+(?P<n1>[0-9]+)\s+(?P<a1>\S+)\s+.*?",
    r"#(?P<m2>[0-9]+)/(?P<c2>\S)\s+(?P<r2>[A-Z]{3})\s+(?P<n2>[0-9]+)\s+(?P<a2>\S+)\s+.*?",
    r"\s(?P<da>[0-9]+\.[0-9]+)\s",
);

static LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("invalid hydrogen-bond line pattern"));

/// Matches one line against the record grammar.
///
/// Only the first occurrence in the line is considered. Lines that do not
/// have the record shape yield `None`; this is not an error.
pub fn match_line(line: &str) -> Option<RawBond> {
    let caps = LINE_REGEX.captures(line)?;
    let distance = caps["da"].parse::<f64>().ok()?;

    Some(RawBond {
        first: endpoint(&caps, "m1", "c1", "r1", "n1", "a1"),
        second: endpoint(&caps, "m2", "c2", "r2", "n2", "a2"),
        distance,
    })
}

fn endpoint(
    caps: &Captures<'_>,
    model: &str,
    chain: &str,
    residue: &str,
    number: &str,
    atom: &str,
) -> Endpoint {
    Endpoint::new(
        &caps[model],
        &caps[chain],
        &caps[residue],
        &caps[number],
        &caps[atom],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str =
        "#1/A ASN 312 ND2    #1/B TYR 308 O     #1/A ASN 312 HD21   2.950  2.011";

    #[test]
    fn matches_chimerax_style_line() {
        let raw = match_line(LINE).expect("line should match");
        assert_eq!(raw.first, Endpoint::new("1", "A", "ASN", "312", "ND2"));
        assert_eq!(raw.second, Endpoint::new("1", "B", "TYR", "308", "O"));
        assert_eq!(raw.distance, 2.950);
    }

    #[test]
    fn takes_first_bounded_decimal_after_second_endpoint() {
        let raw =
            match_line("#2/A ASP 312 OD1  #2/A SER 290 OG  no hydrogen  3.104  N/A").unwrap();
        assert_eq!(raw.distance, 3.104);
    }

    #[test]
    fn distance_must_be_followed_by_whitespace() {
        assert!(match_line("#1/A ASN 312 ND2  #1/B TYR 308 O  2.950").is_none());
        assert!(match_line("#1/A ASN 312 ND2  #1/B TYR 308 O  2.950 ").is_some());
    }

    #[test]
    fn rejects_lines_without_record_shape() {
        assert!(match_line("").is_none());
        assert!(match_line("12 hydrogen bonds found").is_none());
        assert!(match_line("H-bond constraints: 0.400 angstroms, 20.0 degrees").is_none());
        assert!(match_line("#1/A ASN 312 ND2 only one endpoint 2.950 ").is_none());
    }

    #[test]
    fn residue_name_must_be_three_uppercase_letters() {
        assert!(match_line("#1/A asn 312 ND2  #1/B TYR 308 O  2.950 ").is_none());
        assert!(match_line("#1/A HOHX 312 O  #1/B TYR 308 O  2.950 ").is_none());
    }

    #[test]
    fn chain_identifier_is_a_single_character() {
        assert!(match_line("#1/AB ASN 312 ND2  #1/B TYR 308 O  2.950 ").is_none());
    }

    #[test]
    fn distance_requires_a_decimal_point() {
        assert!(match_line("#1/A ASN 312 ND2  #1/B TYR 308 O  3 ").is_none());
    }
}
