//! Time subsystem.
//!
//! Frame timing utilities that do not depend on the runtime:
//! - `FrameCounter` counts presented frames
//! - `FpsMeter` turns counter deltas into a once-per-second readout

mod fps;
mod frame_counter;

pub use fps::FpsMeter;
pub use frame_counter::FrameCounter;
