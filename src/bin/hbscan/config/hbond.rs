use hbscan::HBondConfig;

use crate::cli::{CommonOptions, HbondsInputs};

pub fn build_hbond_config(opts: &CommonOptions) -> HBondConfig {
    HBondConfig {
        target_residue: opts.target,
    }
}

/// State labels for the mutant and wild-type reports, in that order.
pub struct StateLabels {
    pub mutant: String,
    pub wild_type: String,
}

impl StateLabels {
    pub fn resolve(inputs: &HbondsInputs, target: i64) -> Self {
        Self {
            mutant: inputs
                .mutant_label
                .clone()
                .unwrap_or_else(|| format!("Mut_ASN{target}(#1)")),
            wild_type: inputs
                .wild_type_label
                .clone()
                .unwrap_or_else(|| format!("WT_ASP{target}(#2)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(mutant: Option<&str>, wild_type: Option<&str>) -> HbondsInputs {
        HbondsInputs {
            mutant: None,
            wild_type: None,
            mutant_label: mutant.map(str::to_string),
            wild_type_label: wild_type.map(str::to_string),
        }
    }

    #[test]
    fn default_labels_follow_target() {
        let labels = StateLabels::resolve(&inputs(None, None), 312);
        assert_eq!(labels.mutant, "Mut_ASN312(#1)");
        assert_eq!(labels.wild_type, "WT_ASP312(#2)");
    }

    #[test]
    fn explicit_labels_win() {
        let labels = StateLabels::resolve(&inputs(Some("N312"), Some("D312")), 45);
        assert_eq!(labels.mutant, "N312");
        assert_eq!(labels.wild_type, "D312");
    }
}
