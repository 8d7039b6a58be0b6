pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod confidence;
pub mod session;
pub mod cli;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{Network, Predictor};
pub use loss::mse::MseLoss;
pub use optim::{Adam, Optimizer, Sgd};
pub use train::{train_adder, EpochStats, TrainConfig, OptimizerKind};
pub use confidence::{confidence, ConfidenceBand};
pub use session::{History, HistoryEntry, Outcome, Session};
pub use error::{QueryError, TrainError};
