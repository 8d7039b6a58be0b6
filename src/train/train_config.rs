use crate::error::TrainError;

/// Which optimizer drives the weight updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OptimizerKind {
    Adam,
    Sgd,
}

/// Configuration for a training run.
///
/// # Fields
/// - `epochs`        — total number of full passes over the training data
/// - `samples`       — number of synthetic `(a, b) -> a + b` pairs to generate
/// - `batch_size`    — samples per mini-batch; use `1` for online SGD
/// - `learning_rate` — optimizer step size
/// - `optimizer`     — `Adam` (default) or `Sgd`
/// - `value_range`   — inclusive range both operands are drawn from
/// - `seed`          — fixes data generation, shuffling and initialization
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub samples: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub optimizer: OptimizerKind,
    pub value_range: (f64, f64),
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 100,
            samples: 10_000,
            batch_size: 32,
            learning_rate: 0.1,
            optimizer: OptimizerKind::Adam,
            value_range: (0.0, 100.0),
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<(), TrainError> {
        let invalid = |msg: &str| Err(TrainError::InvalidConfig(msg.to_string()));

        if self.epochs == 0 {
            return invalid("epochs must be at least 1");
        }
        if self.samples == 0 {
            return invalid("samples must be at least 1");
        }
        if self.batch_size == 0 {
            return invalid("batch_size must be at least 1");
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return invalid("learning_rate must be a positive number");
        }
        let (low, high) = self.value_range;
        if !(low.is_finite() && high.is_finite() && low < high) {
            return invalid("value_range must be a finite, non-empty interval");
        }
        Ok(())
    }
}
