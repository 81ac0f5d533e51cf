use crate::model::record::{BondRecord, RawBond};

/// Where the target residue was found on a matched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Target on the first endpoint only.
    Forward,
    /// Target on the second endpoint only; sides must be exchanged.
    Reversed,
    /// Target on both endpoints.
    SelfPair,
}

/// Locates the target residue on a matched line, `None` if neither side carries it.
pub fn locate(raw: &RawBond, target: i64) -> Option<Orientation> {
    match (raw.first.is_residue(target), raw.second.is_residue(target)) {
        (true, true) => Some(Orientation::SelfPair),
        (true, false) => Some(Orientation::Forward),
        (false, true) => Some(Orientation::Reversed),
        (false, false) => None,
    }
}

/// Puts the target endpoint on the first (center) side.
///
/// Self-pairs already have the target on the first side and pass through as-is.
pub fn canonicalize(raw: RawBond, orientation: Orientation) -> RawBond {
    match orientation {
        Orientation::Reversed => raw.swapped(),
        Orientation::Forward | Orientation::SelfPair => raw,
    }
}

/// Builds the canonical record for `state` from a line already in canonical order.
pub fn into_record(raw: RawBond, state: &str) -> BondRecord {
    BondRecord {
        state: state.to_string(),
        center_atom: raw.first.atom_id(),
        partner_atom: raw.second.atom_id(),
        center_chain: raw.first.chain,
        partner_chain: raw.second.chain,
        distance: raw.distance,
    }
}

/// Locates, canonicalizes and converts a matched line in one step.
pub fn normalize(raw: RawBond, state: &str, target: i64) -> Option<(BondRecord, Orientation)> {
    let orientation = locate(&raw, target)?;
    let record = into_record(canonicalize(raw, orientation), state);
    Some((record, orientation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::Endpoint;

    fn asn() -> Endpoint {
        Endpoint::new("1", "A", "ASN", "312", "ND2")
    }

    fn tyr() -> Endpoint {
        Endpoint::new("1", "B", "TYR", "308", "O")
    }

    fn raw(first: Endpoint, second: Endpoint) -> RawBond {
        RawBond {
            first,
            second,
            distance: 2.95,
        }
    }

    #[test]
    fn locate_reports_each_orientation() {
        assert_eq!(locate(&raw(asn(), tyr()), 312), Some(Orientation::Forward));
        assert_eq!(locate(&raw(tyr(), asn()), 312), Some(Orientation::Reversed));
        assert_eq!(locate(&raw(asn(), asn()), 312), Some(Orientation::SelfPair));
        assert_eq!(locate(&raw(tyr(), tyr()), 312), None);
    }

    #[test]
    fn reversed_line_is_swapped_onto_center() {
        let (record, orientation) = normalize(raw(tyr(), asn()), "Mut", 312).unwrap();
        assert_eq!(orientation, Orientation::Reversed);
        assert_eq!(record.center_chain, "A");
        assert_eq!(record.center_atom, "ASN312ND2");
        assert_eq!(record.partner_chain, "B");
        assert_eq!(record.partner_atom, "TYR308O");
        assert_eq!(record.distance, 2.95);
    }

    #[test]
    fn orientation_does_not_change_the_record() {
        let forward = normalize(raw(asn(), tyr()), "Mut", 312).unwrap().0;
        let reversed = normalize(raw(tyr(), asn()), "Mut", 312).unwrap().0;
        assert_eq!(forward, reversed);
    }

    #[test]
    fn self_pair_passes_through_unswapped() {
        let other = Endpoint::new("1", "C", "ASN", "312", "OD1");
        let (record, orientation) = normalize(raw(asn(), other), "WT", 312).unwrap();
        assert_eq!(orientation, Orientation::SelfPair);
        assert_eq!(record.center_chain, "A");
        assert_eq!(record.center_atom, "ASN312ND2");
        assert_eq!(record.partner_chain, "C");
        assert_eq!(record.partner_atom, "ASN312OD1");
    }

    #[test]
    fn off_target_line_yields_nothing() {
        assert!(normalize(raw(tyr(), tyr()), "WT", 312).is_none());
    }

    #[test]
    fn target_is_configurable() {
        let (record, _) = normalize(raw(asn(), tyr()), "WT", 308).unwrap();
        assert_eq!(record.center_atom, "TYR308O");
        assert_eq!(record.partner_atom, "ASN312ND2");
    }
}
