use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::TrainError;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::Optimizer;
use crate::train::epoch_stats::EpochStats;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `epochs` passes of mini-batch gradient descent and
/// returns the mean training loss of the **last completed epoch**.
///
/// `on_epoch` is called once per epoch, after that epoch's updates, with the
/// mean MSE over every sample seen during the pass.
///
/// # Errors
/// Returns `TrainError::Diverged` as soon as an epoch's loss is NaN or
/// infinite; the network is left with whatever weights produced it.
///
/// # Panics
/// Panics if `inputs` is empty, lengths mismatch, or `batch_size == 0`.
#[allow(clippy::too_many_arguments)]
pub fn train_loop<R, F>(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    optimizer: &mut dyn Optimizer,
    epochs: usize,
    batch_size: usize,
    rng: &mut R,
    mut on_epoch: F,
) -> Result<f64, TrainError>
where
    R: Rng + ?Sized,
    F: FnMut(&EpochStats),
{
    assert!(!inputs.is_empty(), "inputs must not be empty");
    assert_eq!(
        inputs.len(),
        labels.len(),
        "inputs and labels must have equal length"
    );
    assert!(batch_size > 0, "batch_size must be at least 1");

    let mut last_train_loss = 0.0;

    for epoch in 1..=epochs {
        let t_start = Instant::now();

        let train_loss = run_one_epoch(network, inputs, labels, optimizer, batch_size, rng);
        if !train_loss.is_finite() {
            return Err(TrainError::Diverged { epoch, loss: train_loss });
        }
        last_train_loss = train_loss;

        let stats = EpochStats {
            epoch,
            total_epochs: epochs,
            train_loss,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        debug!(epoch, train_loss, elapsed_ms = stats.elapsed_ms, "epoch finished");
        on_epoch(&stats);
    }

    Ok(last_train_loss)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Runs one full epoch of mini-batch updates over the training data.
/// Returns the mean loss over all samples.
fn run_one_epoch<R: Rng + ?Sized>(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    optimizer: &mut dyn Optimizer,
    batch_size: usize,
    rng: &mut R,
) -> f64 {
    let n = inputs.len();
    let mut total_loss = 0.0;

    // Shuffle sample order each epoch.
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    for batch in indices.chunks(batch_size) {
        let mut acc_grads: Vec<(Matrix, Matrix)> = network.layers.iter()
            .map(|layer| (
                Matrix::zeros(layer.weights.rows, layer.weights.cols),
                Matrix::zeros(layer.biases.rows, layer.biases.cols),
            ))
            .collect();

        for &idx in batch {
            let input    = &inputs[idx];
            let expected = &labels[idx];

            let output = network.forward(input);
            total_loss += MseLoss::loss(&output, expected);

            let mut delta = Matrix::row(&MseLoss::derivative(&output, expected));

            // Backward pass.
            for i in (0..network.layers.len()).rev() {
                let input_for_layer = if i == 0 {
                    Matrix::row(input)
                } else {
                    network.layers[i - 1].neurons.clone()
                };

                let (w_grad, b_grad) = network.layers[i].compute_gradients(&delta, &input_for_layer);

                if i > 0 {
                    // Propagate δ_i through weights to get ∂L/∂a_{i-1}
                    delta = &b_grad * &network.layers[i].weights.transpose();
                }

                let (w_acc, b_acc) = &mut acc_grads[i];
                *w_acc = std::mem::take(w_acc) + w_grad;
                *b_acc = std::mem::take(b_acc) + b_grad;
            }
        }

        // Average and apply.
        let inv_batch = 1.0 / batch.len() as f64;
        for (i, (w_acc, b_acc)) in acc_grads.into_iter().enumerate() {
            optimizer.step(
                i,
                &mut network.layers[i],
                w_acc.map(|x| x * inv_batch),
                b_acc.map(|x| x * inv_batch),
            );
        }
    }

    total_loss / n as f64
}
