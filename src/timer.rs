/// Fixed-period recurring timer driven by the frame loop's `dt`.
#[derive(Debug, Clone)]
pub struct Interval {
    period: f32,
    elapsed: f32,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        debug_assert!(period > 0.0);
        Self {
            period,
            elapsed: 0.0,
        }
    }

    /// Returns how many whole periods completed during `dt`.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}
