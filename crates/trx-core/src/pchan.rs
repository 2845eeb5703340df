use serde::Deserialize;

/// The channel combination a physical timeslot is configured for.
/// Selecting one assigns the matching multiframe layout to the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PchanConfig {
    /// BCCH + CCCH
    BcchCcch,
    /// BCCH + CCCH + SDCCH/4 + SACCH/C4 (combined)
    CcchSdcch4,
    /// SDCCH/8 + SACCH/C8
    Sdcch8,
    /// TCH/F + FACCH/F + SACCH/TF
    TchF,
    /// TCH/H + FACCH/H + SACCH/TH
    TchH,
}
