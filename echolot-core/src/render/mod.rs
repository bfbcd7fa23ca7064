//! Display rendering logic
//!
//! Sweep animation planning and frame drawing, kept free of hardware
//! so it can be tested on the host against a recording display stub.

pub mod animation;
pub mod frame;

pub use animation::Sweep;
pub use frame::Frame;
