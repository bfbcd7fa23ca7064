//! Board-agnostic core logic for the Echolot rangefinder firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Display driver trait (the seam to the OLED hardware)
//! - Echo pulse timing model and microseconds-to-centimeters conversion
//! - Sweep animation planning
//! - Frame building and drawing

#![no_std]
#![deny(unsafe_code)]

pub mod ranging;
pub mod render;
pub mod traits;
