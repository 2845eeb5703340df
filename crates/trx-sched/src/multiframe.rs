use trx_core::{LchanType, PchanConfig};

/// Multiframe layout of one timeslot: which logical channel types the slot
/// carries once configured. The queueing core consumes only its presence
/// (a timeslot without a layout rejects enqueue); the clock driver walks
/// `lchans` to know what to service each frame.
#[derive(Debug)]
pub struct MfLayout {
    pub name: &'static str,
    pub pchan: PchanConfig,
    pub lchans: &'static [LchanType],
}

impl MfLayout {
    pub fn allows(&self, chan: LchanType) -> bool {
        self.lchans.contains(&chan)
    }
}

static MF_BCCH_CCCH: MfLayout = MfLayout {
    name: "BCCH+CCCH",
    pchan: PchanConfig::BcchCcch,
    lchans: &[LchanType::Bcch, LchanType::Rach, LchanType::PchAgch],
};

static MF_CCCH_SDCCH4: MfLayout = MfLayout {
    name: "BCCH+CCCH+SDCCH/4",
    pchan: PchanConfig::CcchSdcch4,
    lchans: &[
        LchanType::Bcch,
        LchanType::Rach,
        LchanType::PchAgch,
        LchanType::Sdcch4,
        LchanType::Sacch4,
    ],
};

static MF_SDCCH8: MfLayout = MfLayout {
    name: "SDCCH/8",
    pchan: PchanConfig::Sdcch8,
    lchans: &[LchanType::Sdcch8, LchanType::Sacch8],
};

static MF_TCH_F: MfLayout = MfLayout {
    name: "TCH/F",
    pchan: PchanConfig::TchF,
    lchans: &[LchanType::TchF, LchanType::FacchF, LchanType::SacchTf],
};

static MF_TCH_H: MfLayout = MfLayout {
    name: "TCH/H",
    pchan: PchanConfig::TchH,
    lchans: &[LchanType::TchH, LchanType::FacchH, LchanType::SacchTh],
};

/// Returns the multiframe layout realizing the given channel combination
pub fn layout_for_pchan(pchan: PchanConfig) -> &'static MfLayout {
    match pchan {
        PchanConfig::BcchCcch => &MF_BCCH_CCCH,
        PchanConfig::CcchSdcch4 => &MF_CCCH_SDCCH4,
        PchanConfig::Sdcch8 => &MF_SDCCH8,
        PchanConfig::TchF => &MF_TCH_F,
        PchanConfig::TchH => &MF_TCH_H,
    }
}
