use crate::{math::matrix::Matrix, layers::dense::Layer};
use crate::optim::Optimizer;

/// First and second moment estimates for one layer.
#[derive(Debug, Clone)]
struct Moments {
    step: i32,
    m_weights: Matrix,
    v_weights: Matrix,
    m_biases: Matrix,
    v_biases: Matrix,
}

impl Moments {
    fn for_layer(layer: &Layer) -> Moments {
        Moments {
            step: 0,
            m_weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
            v_weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
            m_biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
            v_biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
        }
    }
}

/// Adam (Kingma & Ba) with bias-corrected moments.
///
/// Per-parameter step sizes make it insensitive to the raw input scale, which
/// is what lets a linear neuron fit sums of numbers in [0, 100] without
/// normalizing the data first.
#[derive(Debug, Clone)]
pub struct Adam {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
    moments: Vec<Option<Moments>>,
}

impl Adam {
    pub fn new(learning_rate: f64) -> Adam {
        Adam {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-7,
            moments: Vec::new(),
        }
    }

    fn moments_for(&mut self, layer_index: usize, layer: &Layer) -> &mut Moments {
        if self.moments.len() <= layer_index {
            self.moments.resize(layer_index + 1, None);
        }
        self.moments[layer_index].get_or_insert_with(|| Moments::for_layer(layer))
    }
}

/// Updates `m` and `v` in place and returns the bias-corrected step.
fn adam_update(
    m: &mut Matrix,
    v: &mut Matrix,
    grad: &Matrix,
    lr: f64,
    (beta1, beta2, epsilon): (f64, f64, f64),
    step: i32,
) -> Matrix {
    let m_correction = 1.0 - beta1.powi(step);
    let v_correction = 1.0 - beta2.powi(step);
    let mut update = Matrix::zeros(grad.rows, grad.cols);

    for i in 0..grad.rows {
        for j in 0..grad.cols {
            let g = grad.data[i][j];
            m.data[i][j] = beta1 * m.data[i][j] + (1.0 - beta1) * g;
            v.data[i][j] = beta2 * v.data[i][j] + (1.0 - beta2) * g * g;
            let m_hat = m.data[i][j] / m_correction;
            let v_hat = v.data[i][j] / v_correction;
            update.data[i][j] = lr * m_hat / (v_hat.sqrt() + epsilon);
        }
    }

    update
}

impl Optimizer for Adam {
    fn step(&mut self, layer_index: usize, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix) {
        let lr = self.learning_rate;
        let betas = (self.beta1, self.beta2, self.epsilon);
        let moments = self.moments_for(layer_index, layer);
        moments.step += 1;
        let step = moments.step;

        let w_step = adam_update(&mut moments.m_weights, &mut moments.v_weights, &weights_grad, lr, betas, step);
        let b_step = adam_update(&mut moments.m_biases, &mut moments.v_biases, &biases_grad, lr, betas, step);
        layer.apply_update(w_step, b_step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;

    fn layer() -> Layer {
        Layer::from_parameters(
            Matrix::from_data(vec![vec![0.0], vec![0.0]]),
            Matrix::row(&[0.0]),
            ActivationFunction::Identity,
        )
    }

    #[test]
    fn first_step_moves_each_parameter_by_learning_rate() {
        // With bias correction the first update is lr·g/|g| regardless of scale.
        let mut layer = layer();
        let mut adam = Adam::new(0.1);
        adam.step(0, &mut layer, Matrix::from_data(vec![vec![500.0], vec![-0.01]]), Matrix::row(&[3.0]));
        assert!((layer.weights.data[0][0] + 0.1).abs() < 1e-6);
        assert!((layer.weights.data[1][0] - 0.1).abs() < 1e-4);
        assert!((layer.biases.data[0][0] + 0.1).abs() < 1e-6);
    }

    #[test]
    fn zero_gradient_leaves_parameters_alone() {
        let mut layer = layer();
        let mut adam = Adam::new(0.1);
        adam.step(0, &mut layer, Matrix::zeros(2, 1), Matrix::zeros(1, 1));
        assert_eq!(layer.weights.data, vec![vec![0.0], vec![0.0]]);
        assert_eq!(layer.biases.data, vec![vec![0.0]]);
    }

    #[test]
    fn layers_keep_independent_state() {
        let mut first = layer();
        let mut second = layer();
        let mut adam = Adam::new(0.1);
        adam.step(0, &mut first, Matrix::zeros(2, 1), Matrix::row(&[1.0]));
        adam.step(0, &mut first, Matrix::zeros(2, 1), Matrix::row(&[1.0]));
        adam.step(3, &mut second, Matrix::zeros(2, 1), Matrix::row(&[1.0]));
        assert_eq!(adam.moments[0].as_ref().map(|m| m.step), Some(2));
        assert!(adam.moments[1].is_none());
        assert_eq!(adam.moments[3].as_ref().map(|m| m.step), Some(1));
    }
}
