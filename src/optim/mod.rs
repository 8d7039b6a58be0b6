pub mod sgd;
pub mod adam;

pub use sgd::Sgd;
pub use adam::Adam;

use crate::{layers::dense::Layer, math::matrix::Matrix};

/// Turns a layer's averaged gradients into a parameter update.
///
/// `layer_index` identifies the layer across calls so stateful optimizers
/// can keep per-layer moments. Call once per layer per mini-batch.
pub trait Optimizer {
    fn step(&mut self, layer_index: usize, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix);
}
