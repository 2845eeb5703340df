//! TDMA scheduler: transmit-primitive management
//!
//! Higher layers hand ready-to-transmit payloads ("primitives") to this
//! crate; the TDMA clock driver takes them back out, one per burst:
//! - [`Transceiver`] allocates primitives and routes them to a timeslot
//! - [`TxQueue`] holds the per-timeslot transmit backlog
//! - [`TxQueue::dequeue`] applies channel arbitration, dropping traffic
//!   frames replaced by FACCH signalling
//! - [`LchanState::assign_dummy`] synthesizes fill / silence frames when a
//!   channel must transmit but has nothing queued

pub mod dummy;
pub mod error;
pub mod lchan_state;
pub mod multiframe;
pub mod prim;
pub mod queue;
pub mod timeslot;
pub mod trx;

pub use dummy::{BadFrameInd, GsmCodecBfi};
pub use error::{PushErr, SchedErr};
pub use lchan_state::LchanState;
pub use multiframe::MfLayout;
pub use prim::TxPrim;
pub use queue::TxQueue;
pub use timeslot::Timeslot;
pub use trx::Transceiver;
