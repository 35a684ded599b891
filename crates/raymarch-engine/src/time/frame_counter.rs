/// Count of presented frames.
///
/// Serves as the animation clock (the current value is what a frame writes
/// into its uniform block) and as the baseline for FPS sampling. Starts at 0,
/// advances by exactly one per presented frame and never resets; it wraps only
/// at `u64` overflow.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameCounter {
    value: u64,
}

impl FrameCounter {
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Number of frames presented so far.
    #[inline]
    pub const fn get(self) -> u64 {
        self.value
    }

    /// Records one presented frame.
    #[inline]
    pub fn advance(&mut self) {
        self.value = self.value.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(FrameCounter::new().get(), 0);
    }

    #[test]
    fn advances_by_one_per_frame() {
        let mut counter = FrameCounter::new();
        for expected in 1..=500u64 {
            counter.advance();
            assert_eq!(counter.get(), expected);
        }
    }

    #[test]
    fn wraps_only_at_overflow() {
        let mut counter = FrameCounter { value: u64::MAX };
        counter.advance();
        assert_eq!(counter.get(), 0);
    }
}
