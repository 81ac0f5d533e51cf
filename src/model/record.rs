use std::fmt;

/// One side of a matched hydrogen-bond line, kept as the text it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub model: String,
    pub chain: String,
    pub residue_name: String,
    pub residue_number: String,
    pub atom_name: String,
}

impl Endpoint {
    pub fn new(
        model: impl Into<String>,
        chain: impl Into<String>,
        residue_name: impl Into<String>,
        residue_number: impl Into<String>,
        atom_name: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            chain: chain.into(),
            residue_name: residue_name.into(),
            residue_number: residue_number.into(),
            atom_name: atom_name.into(),
        }
    }

    /// Numeric value of the residue number, `None` when it does not fit.
    pub fn residue_seq(&self) -> Option<i64> {
        self.residue_number.parse().ok()
    }

    /// Returns `true` if this endpoint sits on residue `target`.
    pub fn is_residue(&self, target: i64) -> bool {
        self.residue_seq() == Some(target)
    }

    /// Composite display identifier, e.g. `ASN312ND2`.
    pub fn atom_id(&self) -> String {
        format!(
            "{}{}{}",
            self.residue_name, self.residue_number, self.atom_name
        )
    }
}

/// The unparsed capture of one matched line: two endpoints and a distance.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBond {
    pub first: Endpoint,
    pub second: Endpoint,
    pub distance: f64,
}

impl RawBond {
    pub fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
            distance: self.distance,
        }
    }
}

/// A canonical hydrogen-bond observation with the target residue on the center side.
#[derive(Debug, Clone, PartialEq)]
pub struct BondRecord {
    pub state: String,
    pub center_chain: String,
    pub center_atom: String,
    pub partner_chain: String,
    pub partner_atom: String,
    /// Donor–acceptor distance in Å.
    pub distance: f64,
}

impl BondRecord {
    pub fn key(&self) -> DedupKey {
        DedupKey {
            state: self.state.clone(),
            center_chain: self.center_chain.clone(),
            center_atom: self.center_atom.clone(),
            partner_chain: self.partner_chain.clone(),
            partner_atom: self.partner_atom.clone(),
        }
    }

    pub fn into_parts(self) -> (DedupKey, f64) {
        let key = DedupKey {
            state: self.state,
            center_chain: self.center_chain,
            center_atom: self.center_atom,
            partner_chain: self.partner_chain,
            partner_atom: self.partner_atom,
        };
        (key, self.distance)
    }

    pub fn from_key(key: DedupKey, distance: f64) -> Self {
        Self {
            state: key.state,
            center_chain: key.center_chain,
            center_atom: key.center_atom,
            partner_chain: key.partner_chain,
            partner_atom: key.partner_atom,
            distance,
        }
    }
}

impl fmt::Display for BondRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}/{} ... {}/{} {:.3} Å",
            self.state,
            self.center_chain,
            self.center_atom,
            self.partner_chain,
            self.partner_atom,
            self.distance
        )
    }
}

/// Identity of "the same physical interaction" within one state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DedupKey {
    pub state: String,
    pub center_chain: String,
    pub center_atom: String,
    pub partner_chain: String,
    pub partner_atom: String,
}

/// Per-state aggregate over deduplicated rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub state: String,
    pub count: usize,
    pub min_distance: f64,
}
