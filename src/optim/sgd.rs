use crate::{math::matrix::Matrix, layers::dense::Layer};
use crate::optim::Optimizer;

/// Vanilla gradient descent: `θ ← θ - lr·∇θ`.
#[derive(Debug, Clone)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, _layer_index: usize, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix) {
        let lr = self.learning_rate;
        layer.apply_update(weights_grad.map(|x| x * lr), biases_grad.map(|x| x * lr));
    }
}
