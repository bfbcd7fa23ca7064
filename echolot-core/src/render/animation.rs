//! Sweep animation planning
//!
//! Instead of jumping straight to a new reading, the display sweeps
//! through the intermediate values one centimeter per frame. The sweep
//! works on raw display-domain values, so it also animates toward the
//! -1 sentinel; the frame builder decides what each value looks like.

/// Iterator over the displayed values of one animation pass
///
/// Yields `|to - from| + 1` values from `from` to `to` inclusive,
/// linearly interpolated. A zero-length sweep yields exactly one
/// value, the target, so there is no division by zero and the frame
/// still gets repainted.
#[derive(Debug, Clone)]
pub struct Sweep {
    from: i16,
    to: i16,
    steps: i16,
    i: i16,
}

impl Sweep {
    /// Plan a sweep from the previously displayed value to the target
    pub fn new(from: i16, to: i16) -> Self {
        Self {
            from,
            to,
            steps: (to - from).abs(),
            i: 0,
        }
    }

    /// Number of frames this sweep will render
    pub fn frame_count(&self) -> u16 {
        self.steps as u16 + 1
    }
}

impl Iterator for Sweep {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.i > self.steps {
            return None;
        }

        let value = if self.steps == 0 {
            self.to
        } else {
            // Widen before multiplying: (to - from) * i can exceed i16
            let delta = (self.to - self.from) as i32 * self.i as i32;
            self.from + (delta / self.steps as i32) as i16
        };

        self.i += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.i + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sweep {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_up() {
        let values: heapless::Vec<i16, 8> = Sweep::new(50, 53).collect();
        assert_eq!(values.as_slice(), &[50, 51, 52, 53]);
    }

    #[test]
    fn test_sweep_down() {
        let values: heapless::Vec<i16, 8> = Sweep::new(3, 0).collect();
        assert_eq!(values.as_slice(), &[3, 2, 1, 0]);
    }

    #[test]
    fn test_zero_length_sweep_renders_once() {
        let sweep = Sweep::new(10, 10);
        assert_eq!(sweep.frame_count(), 1);
        let values: heapless::Vec<i16, 8> = sweep.collect();
        assert_eq!(values.as_slice(), &[10]);
    }

    #[test]
    fn test_sweep_to_sentinel() {
        let values: heapless::Vec<i16, 8> = Sweep::new(2, -1).collect();
        assert_eq!(values.as_slice(), &[2, 1, 0, -1]);
    }

    #[test]
    fn test_full_scale_sweep_does_not_overflow() {
        let sweep = Sweep::new(0, 200);
        assert_eq!(sweep.frame_count(), 201);
        let last = sweep.last().unwrap();
        assert_eq!(last, 200);
    }

    #[test]
    fn test_endpoints_always_exact() {
        for (from, to) in [(0, 200), (200, 0), (-1, 137), (137, -1), (5, 6)] {
            let mut sweep = Sweep::new(from, to);
            assert_eq!(sweep.next(), Some(from));
            assert_eq!(sweep.last().unwrap_or(from), to);
        }
    }
}
