use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::error::TrainError;
use crate::network::network::Network;
use crate::optim::{Adam, Optimizer, Sgd};
use crate::train::dataset::AdditionDataset;
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::{OptimizerKind, TrainConfig};

/// Builds a two-input linear neuron and fits it to synthetic sums.
///
/// `on_epoch` receives the stats of every finished epoch, in order. The
/// returned network is ready for [`Predictor::predict`](crate::Predictor).
pub fn train_adder<F>(config: &TrainConfig, on_epoch: F) -> Result<Network, TrainError>
where
    F: FnMut(&EpochStats),
{
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut network = Network::linear_regressor(2, &mut rng);
    let data = AdditionDataset::generate(config.samples, config.value_range, &mut rng);

    let mut optimizer: Box<dyn Optimizer> = match config.optimizer {
        OptimizerKind::Adam => Box::new(Adam::new(config.learning_rate)),
        OptimizerKind::Sgd => Box::new(Sgd::new(config.learning_rate)),
    };

    info!(
        samples = data.len(),
        epochs = config.epochs,
        batch_size = config.batch_size,
        optimizer = ?config.optimizer,
        "training started"
    );

    let final_loss = train_loop(
        &mut network,
        &data.inputs,
        &data.labels,
        optimizer.as_mut(),
        config.epochs,
        config.batch_size,
        &mut rng,
        on_epoch,
    )?;

    let layer = &network.layers[0];
    info!(
        final_loss,
        w1 = layer.weights.data[0][0],
        w2 = layer.weights.data[1][0],
        bias = layer.biases.data[0][0],
        "training complete"
    );

    Ok(network)
}
