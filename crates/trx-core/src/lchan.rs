use core::fmt;

/// Logical channel types as carried by transmit primitives.
///
/// FACCH is a channel type of its own here: a MAC block submitted on the
/// main signalling link of a traffic channel is FACCH signalling, while
/// voice frames are typed TchF / TchH by the traffic path directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LchanType {
    /// Broadcast Control CHannel
    Bcch,
    /// Random Access CHannel
    Rach,
    /// Paging and Access Grant CHannels
    PchAgch,

    /// Standalone Dedicated Control CHannel (combined, 4 subchannels)
    Sdcch4,
    /// Slow Associated Control CHannel for SDCCH/4
    Sacch4,
    /// Standalone Dedicated Control CHannel (8 subchannels)
    Sdcch8,
    /// Slow Associated Control CHannel for SDCCH/8
    Sacch8,

    /// Traffic CHannel (full rate)
    TchF,
    /// Fast Associated Control CHannel (full rate)
    FacchF,
    /// Slow Associated Control CHannel for TCH/F
    SacchTf,

    /// Traffic CHannel (half rate)
    TchH,
    /// Fast Associated Control CHannel (half rate)
    FacchH,
    /// Slow Associated Control CHannel for TCH/H
    SacchTh,
}

impl LchanType {
    /// Returns true if this channel carries traffic (voice / data) frames
    pub fn is_traffic(self) -> bool {
        matches!(self, LchanType::TchF | LchanType::TchH)
    }

    /// Returns true if this is fast associated control signalling, which
    /// takes priority over traffic frames on the same channel
    pub fn is_facch(self) -> bool {
        matches!(self, LchanType::FacchF | LchanType::FacchH)
    }

    pub fn is_sacch(self) -> bool {
        matches!(self,
            LchanType::Sacch4 |
            LchanType::Sacch8 |
            LchanType::SacchTf |
            LchanType::SacchTh
        )
    }

    /// Returns true for dedicated channels, which keep transmitting every
    /// burst once established (continuous burst transmission)
    pub fn is_dedicated(self) -> bool {
        match self {
            LchanType::Sdcch4 |
            LchanType::Sdcch8 |
            LchanType::Sacch4 |
            LchanType::Sacch8 |
            LchanType::SacchTf |
            LchanType::SacchTh |
            LchanType::TchF |
            LchanType::FacchF |
            LchanType::TchH |
            LchanType::FacchH => true,
            LchanType::Bcch |
            LchanType::Rach |
            LchanType::PchAgch => false,
        }
    }
}

impl fmt::Display for LchanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LchanType::Bcch => "BCCH",
            LchanType::Rach => "RACH",
            LchanType::PchAgch => "PCH/AGCH",
            LchanType::Sdcch4 => "SDCCH/4",
            LchanType::Sacch4 => "SACCH/C4",
            LchanType::Sdcch8 => "SDCCH/8",
            LchanType::Sacch8 => "SACCH/C8",
            LchanType::TchF => "TCH/F",
            LchanType::FacchF => "FACCH/F",
            LchanType::SacchTf => "SACCH/TF",
            LchanType::TchH => "TCH/H",
            LchanType::FacchH => "FACCH/H",
            LchanType::SacchTh => "SACCH/TH",
        };
        write!(f, "{}", name)
    }
}
