use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResidueError(String);

impl fmt::Display for ParseResidueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown standard amino acid name: '{}'", self.0)
    }
}

impl std::error::Error for ParseResidueError {}

/// The twenty standard amino acids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardResidue {
    ALA,
    ARG,
    ASN,
    ASP,
    CYS,
    GLN,
    GLU,
    GLY,
    HIS,
    ILE,
    LEU,
    LYS,
    MET,
    PHE,
    PRO,
    SER,
    THR,
    TRP,
    TYR,
    VAL,
}

impl StandardResidue {
    pub const ALL: [StandardResidue; 20] = [
        Self::ALA,
        Self::ARG,
        Self::ASN,
        Self::ASP,
        Self::CYS,
        Self::GLN,
        Self::GLU,
        Self::GLY,
        Self::HIS,
        Self::ILE,
        Self::LEU,
        Self::LYS,
        Self::MET,
        Self::PHE,
        Self::PRO,
        Self::SER,
        Self::THR,
        Self::TRP,
        Self::TYR,
        Self::VAL,
    ];

    pub fn three_letter(self) -> &'static str {
        match self {
            Self::ALA => "ALA",
            Self::ARG => "ARG",
            Self::ASN => "ASN",
            Self::ASP => "ASP",
            Self::CYS => "CYS",
            Self::GLN => "GLN",
            Self::GLU => "GLU",
            Self::GLY => "GLY",
            Self::HIS => "HIS",
            Self::ILE => "ILE",
            Self::LEU => "LEU",
            Self::LYS => "LYS",
            Self::MET => "MET",
            Self::PHE => "PHE",
            Self::PRO => "PRO",
            Self::SER => "SER",
            Self::THR => "THR",
            Self::TRP => "TRP",
            Self::TYR => "TYR",
            Self::VAL => "VAL",
        }
    }

    pub fn one_letter(self) -> char {
        match self {
            Self::ALA => 'A',
            Self::ARG => 'R',
            Self::ASN => 'N',
            Self::ASP => 'D',
            Self::CYS => 'C',
            Self::GLN => 'Q',
            Self::GLU => 'E',
            Self::GLY => 'G',
            Self::HIS => 'H',
            Self::ILE => 'I',
            Self::LEU => 'L',
            Self::LYS => 'K',
            Self::MET => 'M',
            Self::PHE => 'F',
            Self::PRO => 'P',
            Self::SER => 'S',
            Self::THR => 'T',
            Self::TRP => 'W',
            Self::TYR => 'Y',
            Self::VAL => 'V',
        }
    }
}

impl fmt::Display for StandardResidue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.three_letter())
    }
}

impl FromStr for StandardResidue {
    type Err = ParseResidueError;

    /// Parses an upper-case three-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|res| res.three_letter() == s)
            .ok_or_else(|| ParseResidueError(s.to_string()))
    }
}

/// A residue seen in free text, identified by chain and sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueMention {
    pub chain: char,
    pub number: i64,
    pub residue: StandardResidue,
}
