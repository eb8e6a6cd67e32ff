//! Shared utilities.

/// Elapsed-time clock with smoothed FPS.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
