use clap::Parser;

use crate::train::train_config::{OptimizerKind, TrainConfig};

/// Trains a one-neuron network to add two numbers, then answers sums
/// interactively.
///
/// Every flag is optional; without any, the model is trained on 10,000
/// random pairs from [0, 100] for 100 epochs with Adam.
#[derive(Debug, Parser)]
#[command(name = "adder-nn", version, about, long_about = None)]
pub struct Cli {
    /// Full passes over the training data
    #[arg(long, default_value_t = 100)]
    pub epochs: usize,

    /// Number of synthetic (a, b) pairs to train on
    #[arg(long, default_value_t = 10_000)]
    pub samples: usize,

    /// Samples per gradient update
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Optimizer step size
    #[arg(long, default_value_t = 0.1)]
    pub learning_rate: f64,

    #[arg(long, value_enum, default_value_t = OptimizerKind::Adam)]
    pub optimizer: OptimizerKind,

    /// Seed for reproducible data, shuffling and initial weights
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn train_config(&self) -> TrainConfig {
        TrainConfig {
            epochs: self.epochs,
            samples: self.samples,
            batch_size: self.batch_size,
            learning_rate: self.learning_rate,
            optimizer: self.optimizer,
            seed: self.seed,
            ..TrainConfig::default()
        }
    }
}
