/// Residue number analyzed when nothing else is configured.
pub const DEFAULT_TARGET_RESIDUE: i64 = 312;

/// Settings for the hydrogen-bond pipeline.
///
/// # Examples
///
/// ```
/// use hbscan::HBondConfig;
///
/// let config = HBondConfig::default();
/// assert_eq!(config.target_residue, 312);
///
/// let other = HBondConfig { target_residue: 45 };
/// assert_eq!(other.detail_file_name(), "hbonds_45_detail.csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HBondConfig {
    /// Residue number that must occupy the center side of every record.
    pub target_residue: i64,
}

impl Default for HBondConfig {
    fn default() -> Self {
        Self {
            target_residue: DEFAULT_TARGET_RESIDUE,
        }
    }
}

impl HBondConfig {
    pub fn detail_file_name(&self) -> String {
        format!("hbonds_{}_detail.csv", self.target_residue)
    }

    pub fn summary_file_name(&self) -> String {
        format!("hbonds_{}_summary.csv", self.target_residue)
    }
}
