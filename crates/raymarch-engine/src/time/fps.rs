use std::time::{Duration, Instant};

/// Frames-per-second meter fed by a [`FrameCounter`](super::FrameCounter).
///
/// Every time at least one sampling window has elapsed, `sample` reports how
/// many frames were presented since the previous report. This mirrors a
/// once-per-second readout rather than a smoothed average.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    window: Duration,
    last_sample: Instant,
    last_frame: u64,
}

impl FpsMeter {
    /// One-second sampling window starting at `now`.
    pub fn new(now: Instant) -> Self {
        Self::with_window(now, Duration::from_secs(1))
    }

    pub fn with_window(now: Instant, window: Duration) -> Self {
        Self {
            window,
            last_sample: now,
            last_frame: 0,
        }
    }

    /// Returns the frame delta once per elapsed window, `None` otherwise.
    pub fn sample(&mut self, now: Instant, frame: u64) -> Option<u64> {
        if now.saturating_duration_since(self.last_sample) < self.window {
            return None;
        }

        let frames = frame.wrapping_sub(self.last_frame);
        self.last_frame = frame;
        self.last_sample = now;
        Some(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_before_window_elapses() {
        let t0 = Instant::now();
        let mut meter = FpsMeter::new(t0);
        assert_eq!(meter.sample(t0 + Duration::from_millis(999), 59), None);
    }

    #[test]
    fn reports_frame_delta_each_window() {
        let t0 = Instant::now();
        let mut meter = FpsMeter::new(t0);

        assert_eq!(meter.sample(t0 + Duration::from_secs(1), 60), Some(60));
        assert_eq!(meter.sample(t0 + Duration::from_millis(1500), 90), None);
        assert_eq!(meter.sample(t0 + Duration::from_secs(2), 117), Some(57));
    }

    #[test]
    fn late_sample_still_reports_raw_delta() {
        let t0 = Instant::now();
        let mut meter = FpsMeter::new(t0);
        assert_eq!(meter.sample(t0 + Duration::from_secs(3), 30), Some(30));
    }
}
