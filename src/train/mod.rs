pub mod trainer;
pub mod dataset;
pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::train_adder;
pub use dataset::AdditionDataset;
pub use epoch_stats::EpochStats;
pub use train_config::{OptimizerKind, TrainConfig};
pub use loop_fn::train_loop;
