pub mod network;
pub mod predictor;

pub use network::Network;
pub use predictor::Predictor;
