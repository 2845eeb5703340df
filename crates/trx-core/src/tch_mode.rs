/// Channel mode of a traffic channel, following the GSM 04.08 channel mode
/// IE. Determines what a traffic channel transmits when its queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TchMode {
    /// Signalling only, no user plane
    #[default]
    Signalling,
    /// Full rate speech (GSM FR)
    SpeechV1,
    /// Enhanced full rate speech
    SpeechEfr,
    /// Adaptive multi rate speech
    SpeechAmr,
    /// Circuit switched data, 14.5 kbit/s
    Data14k5,
    /// Circuit switched data, 12.0 kbit/s
    Data12k0,
    /// Circuit switched data, 6.0 kbit/s
    Data6k0,
    /// Circuit switched data, 3.6 kbit/s
    Data3k6,
}

impl TchMode {
    pub fn is_speech(self) -> bool {
        matches!(self, TchMode::SpeechV1 | TchMode::SpeechEfr | TchMode::SpeechAmr)
    }

    pub fn is_data(self) -> bool {
        matches!(self,
            TchMode::Data14k5 |
            TchMode::Data12k0 |
            TchMode::Data6k0 |
            TchMode::Data3k6
        )
    }
}
