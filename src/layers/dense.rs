use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// Fully connected layer: `a = σ(x·W + b)` with `W` shaped `(input_size, size)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer{
    pub size: usize,
    /// Activations from the last training forward pass; the next layer's input
    /// during backprop.
    #[serde(skip)]
    pub neurons: Matrix,
    #[serde(skip)]
    pre_neurons: Matrix,  // z = xW + b, needed for σ'(z)
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction
}

impl Layer {
    /// Xavier-initialized weights, zero biases.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        Layer {
            size,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            weights: Matrix::xavier(input_size, size, rng),
            biases: Matrix::zeros(1, size),
            activator: activation
        }
    }

    /// Builds a layer from explicit parameters. `weights` must be
    /// `(input_size, size)` and `biases` `(1, size)`.
    pub fn from_parameters(weights: Matrix, biases: Matrix, activation: ActivationFunction) -> Layer {
        assert_eq!(biases.rows, 1, "biases must be a row vector");
        assert_eq!(weights.cols, biases.cols, "weights and biases disagree on layer size");
        let size = biases.cols;
        Layer {
            size,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            weights,
            biases,
            activator: activation,
        }
    }

    /// Training-mode forward pass; caches `z` and `a` for `compute_gradients`.
    pub fn feed_from(&mut self, input: &[f64]) -> Vec<f64> {
        let z = &Matrix::row(input) * &self.weights + self.biases.clone();
        let a = z.map(|x| self.activator.function(x));
        self.pre_neurons = z;
        self.neurons = a;
        self.neurons.data[0].clone()
    }

    /// Inference-only forward pass; leaves the cached activations untouched.
    pub fn infer(&self, input: &[f64]) -> Vec<f64> {
        let z = &Matrix::row(input) * &self.weights + self.biases.clone();
        z.map(|x| self.activator.function(x)).data.swap_remove(0)
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(
        &self,
        next_layer_delta: &Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix) {
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // δ = error ⊙ σ'(z)
        let layer_delta = next_layer_delta.hadamard(&act_derivative);

        let weights_adjustment = &inputs.transpose() * &layer_delta;
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }

    /// Subtracts already-scaled parameter updates.
    pub fn apply_update(&mut self, weights_step: Matrix, biases_step: Matrix) {
        self.weights = std::mem::take(&mut self.weights) - weights_step;
        self.biases = std::mem::take(&mut self.biases) - biases_step;
    }
}
