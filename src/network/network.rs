use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, layers::dense::Layer};
use crate::network::predictor::Predictor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples.
    pub fn new<R: Rng + ?Sized>(
        layer_specs: Vec<(usize, usize, ActivationFunction)>,
        rng: &mut R,
    ) -> Network {
        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation, rng))
            .collect();
        Network { layers }
    }

    /// A single Identity neuron over `input_size` inputs: plain linear regression.
    pub fn linear_regressor<R: Rng + ?Sized>(input_size: usize, rng: &mut R) -> Network {
        Network::new(vec![(1, input_size, ActivationFunction::Identity)], rng)
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(&current);
        }
        current
    }

    /// Forward pass without touching the training caches.
    pub fn infer(&self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.infer(&current);
        }
        current
    }
}

impl Predictor for Network {
    /// Feeds `[lhs, rhs]` and reads the first output neuron.
    fn predict(&self, lhs: f64, rhs: f64) -> f64 {
        self.infer(&[lhs, rhs]).first().copied().unwrap_or(f64::NAN)
    }
}
