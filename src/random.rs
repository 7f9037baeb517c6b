pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f64;

    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.unit() * (high - low)
    }

    fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        let scaled = (self.unit() * len as f64) as usize;
        Some(scaled.min(len - 1))
    }
}

impl RandomSource for fastrand::Rng {
    fn unit(&mut self) -> f64 {
        self.f64()
    }
}

/// Replays a fixed list of samples, cycling when it runs out.
#[cfg(test)]
pub struct Sequence {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl Sequence {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(&[value])
    }
}

#[cfg(test)]
impl RandomSource for Sequence {
    fn unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_maps_unit_samples_onto_bounds() {
        let mut source = Sequence::new(&[0.0, 0.5]);

        assert_eq!(source.range(-5.0, 5.0), -5.0);
        assert_eq!(source.range(-5.0, 5.0), 0.0);
    }

    #[test]
    fn index_never_reaches_len() {
        let mut source = Sequence::constant(0.999_999_999_999);

        assert_eq!(source.index(3), Some(2));
        assert_eq!(source.index(0), None);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut first = fastrand::Rng::with_seed(7);
        let mut second = fastrand::Rng::with_seed(7);

        let a: Vec<f64> = (0..4).map(|_| first.unit()).collect();
        let b: Vec<f64> = (0..4).map(|_| second.unit()).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|value| (0.0..1.0).contains(value)));
    }
}
