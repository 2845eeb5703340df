//! Core types for the trxbridge TDMA stack
//!
//! This crate provides the domain model shared across the stack:
//! - LchanType and the RSL channel number resolver
//! - TchMode for traffic channel modes
//! - PchanConfig for per-timeslot channel combinations
//! - Logging / debug utilities

pub mod chan_nr;
pub mod debug;
pub mod lchan;
pub mod pchan;
pub mod tch_mode;

// Re-export commonly used items
pub use chan_nr::resolve_lchan_type;
pub use lchan::LchanType;
pub use pchan::PchanConfig;
pub use tch_mode::TchMode;

/// Length of a Layer 2 MAC block on GSM signalling channels, in octets
pub const GSM_MACBLOCK_LEN: usize = 23;

/// Number of physical timeslots per carrier
pub const TS_PER_CARRIER: usize = 8;
