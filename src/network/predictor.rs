/// Anything that can answer "what is `lhs + rhs`?".
///
/// The session only ever talks to the model through this trait, so a trained
/// [`Network`](crate::network::Network), a closed-form fit or a plain closure
/// are interchangeable.
pub trait Predictor {
    fn predict(&self, lhs: f64, rhs: f64) -> f64;
}

impl<F> Predictor for F
where
    F: Fn(f64, f64) -> f64,
{
    fn predict(&self, lhs: f64, rhs: f64) -> f64 {
        self(lhs, rhs)
    }
}
