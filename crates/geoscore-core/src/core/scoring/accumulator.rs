/// Running sum of per-hit contributions for one scored region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreAccumulator {
    sum: f64,
    sum_squares: f64,
    entries: u64,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.sum_squares += value * value;
        self.entries += 1;
    }

    pub fn total(&self) -> f64 {
        self.sum
    }

    pub fn entries(&self) -> u64 {
        self.entries
    }

    pub fn mean(&self) -> Option<f64> {
        (self.entries > 0).then(|| self.sum / self.entries as f64)
    }

    /// Sample standard deviation of the per-hit values.
    pub fn std_dev(&self) -> Option<f64> {
        if self.entries < 2 {
            return None;
        }
        let n = self.entries as f64;
        let variance = (self.sum_squares - self.sum * self.sum / n) / (n - 1.0);
        Some(variance.max(0.0).sqrt())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
