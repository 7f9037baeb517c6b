use crate::random::RandomSource;

#[derive(Clone, Debug, PartialEq)]
pub struct RainDrop {
    pub left_percent: f64,
    pub width_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl RainDrop {
    fn sample(rng: &mut impl RandomSource) -> Self {
        Self {
            left_percent: rng.range(0.0, 100.0),
            width_px: rng.range(2.0, 5.0),
            duration_s: rng.range(0.75, 1.25),
            delay_s: rng.range(0.0, 2.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.2}px; animation-duration: {:.3}s; animation-delay: {:.3}s;",
            self.left_percent, self.width_px, self.duration_s, self.delay_s
        )
    }
}

/// Drops are sampled once per overlay mount and never re-sampled.
pub fn sample_drops(count: usize, rng: &mut impl RandomSource) -> Vec<RainDrop> {
    (0..count).map(|_| RainDrop::sample(rng)).collect()
}
