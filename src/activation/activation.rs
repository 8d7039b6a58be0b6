use serde::{Serialize, Deserialize};

/// Element-wise activation applied after a layer's linear transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Linear output; what a regression head uses.
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Identity => x,
        }
    }

    /// Derivative evaluated at the pre-activation value `x`.
    pub fn derivative(&self, _x: f64) -> f64 {
        match self {
            ActivationFunction::Identity => 1.0,
        }
    }
}
