//! Echo pulse timing and distance conversion
//!
//! The HC-SR04 reports distance as the width of the echo pulse: the
//! sound travels out and back at ~343 m/s, which works out to 58 us of
//! pulse width per centimeter of distance. Everything here is integer
//! math so it runs identically on host and target.

/// Echo pulse width per centimeter of distance (round trip)
pub const US_PER_CM: u64 = 58;

/// Maximum distance the display can represent, in centimeters
///
/// Readings at or above this are shown as the error frame; the HC-SR04
/// is unreliable past ~2 m anyway.
pub const MAX_RANGE_CM: u16 = 200;

/// Raw sentinel value for "no valid reading this cycle"
pub const NO_ECHO_RAW: i16 = -1;

/// One captured echo pulse, timestamps in microseconds since boot
///
/// Produced by the edge-capture task on the falling edge of the echo
/// pin and consumed exactly once by the conversion loop. Handed off
/// through a single overwrite-on-full slot, so at most one unconsumed
/// pulse exists at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EchoPulse {
    /// Timestamp of the rising edge
    pub started_at_us: u64,
    /// Timestamp of the falling edge
    pub ended_at_us: u64,
    /// Timestamp of the last completed capture (the falling edge)
    pub last_valid_read_us: u64,
}

impl EchoPulse {
    /// Pulse width in microseconds, or None if the edges arrived out
    /// of order (capture raced with a stale rising edge)
    pub fn width_us(&self) -> Option<u64> {
        if self.ended_at_us > self.started_at_us {
            Some(self.ended_at_us - self.started_at_us)
        } else {
            None
        }
    }
}

/// One distance measurement cycle result
///
/// `Distance` is always clamped to [`MAX_RANGE_CM`]. `NoEcho` covers
/// both "no pulse arrived this polling period" and malformed edge
/// ordering, which is folded into the same path: either way the cycle
/// produced nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DistanceReading {
    /// Valid reading in centimeters, clamped to `MAX_RANGE_CM`
    Distance(u16),
    /// No valid echo this cycle
    NoEcho,
}

impl DistanceReading {
    /// Convert a captured pulse into a reading
    ///
    /// Integer division truncates toward zero, matching the usual
    /// HC-SR04 formula `distance_cm = pulse_us / 58`.
    pub fn from_pulse(pulse: &EchoPulse) -> Self {
        match pulse.width_us() {
            Some(width) => {
                let cm = (width / US_PER_CM).min(MAX_RANGE_CM as u64) as u16;
                DistanceReading::Distance(cm)
            }
            None => DistanceReading::NoEcho,
        }
    }

    /// The raw display-domain value: centimeters, or -1 for no echo
    pub fn raw(self) -> i16 {
        match self {
            DistanceReading::Distance(cm) => cm as i16,
            DistanceReading::NoEcho => NO_ECHO_RAW,
        }
    }

    /// Whether this reading renders as the error frame
    ///
    /// Clamped-at-maximum readings count as errors: a bar pinned at
    /// full scale carries no information.
    pub fn is_error(self) -> bool {
        match self {
            DistanceReading::Distance(cm) => cm >= MAX_RANGE_CM,
            DistanceReading::NoEcho => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pulse(start: u64, end: u64) -> EchoPulse {
        EchoPulse {
            started_at_us: start,
            ended_at_us: end,
            last_valid_read_us: end,
        }
    }

    #[test]
    fn test_conversion_truncates() {
        // 464 us / 58 = 8 exactly
        assert_eq!(
            DistanceReading::from_pulse(&pulse(1000, 1464)),
            DistanceReading::Distance(8)
        );
        // 463 us / 58 = 7.98... -> 7
        assert_eq!(
            DistanceReading::from_pulse(&pulse(1000, 1463)),
            DistanceReading::Distance(7)
        );
    }

    #[test]
    fn test_out_of_range_clamped() {
        // 250 cm raw (14500 us) clamps to 200 and renders as error
        let reading = DistanceReading::from_pulse(&pulse(0, 250 * US_PER_CM));
        assert_eq!(reading, DistanceReading::Distance(200));
        assert!(reading.is_error());
    }

    #[test]
    fn test_malformed_edges_fold_into_no_echo() {
        assert_eq!(
            DistanceReading::from_pulse(&pulse(2000, 2000)),
            DistanceReading::NoEcho
        );
        assert_eq!(
            DistanceReading::from_pulse(&pulse(2000, 1500)),
            DistanceReading::NoEcho
        );
    }

    #[test]
    fn test_raw_values() {
        assert_eq!(DistanceReading::Distance(8).raw(), 8);
        assert_eq!(DistanceReading::NoEcho.raw(), -1);
    }

    #[test]
    fn test_boundary_is_error() {
        assert!(!DistanceReading::Distance(199).is_error());
        assert!(DistanceReading::Distance(200).is_error());
        assert!(DistanceReading::NoEcho.is_error());
    }

    proptest! {
        /// Readings are always in {-1} union [0, 200], whatever the edges
        #[test]
        fn prop_raw_in_domain(start in 0u64..u64::MAX / 2, end in 0u64..u64::MAX / 2) {
            let raw = DistanceReading::from_pulse(&pulse(start, end)).raw();
            prop_assert!(raw == NO_ECHO_RAW || (0..=MAX_RANGE_CM as i16).contains(&raw));
        }

        /// For well-ordered edges the formula is clamp(width / 58, 0, 200)
        #[test]
        fn prop_formula(start in 0u64..1_000_000, width in 1u64..1_000_000) {
            let reading = DistanceReading::from_pulse(&pulse(start, start + width));
            let expected = (width / US_PER_CM).min(MAX_RANGE_CM as u64) as u16;
            prop_assert_eq!(reading, DistanceReading::Distance(expected));
        }
    }
}
