use rand::Rng;

/// Synthetic addition data: each input is `[a, b]`, each label `[a + b]`.
#[derive(Debug, Clone)]
pub struct AdditionDataset {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<Vec<f64>>,
}

impl AdditionDataset {
    /// Draws `samples` pairs with both operands independently uniform over
    /// `[low, high]`.
    pub fn generate<R: Rng + ?Sized>(samples: usize, (low, high): (f64, f64), rng: &mut R) -> AdditionDataset {
        let mut inputs = Vec::with_capacity(samples);
        let mut labels = Vec::with_capacity(samples);

        for _ in 0..samples {
            let a = rng.gen_range(low..=high);
            let b = rng.gen_range(low..=high);
            inputs.push(vec![a, b]);
            labels.push(vec![a + b]);
        }

        AdditionDataset { inputs, labels }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn labels_are_exact_sums_within_range() {
        let data = AdditionDataset::generate(500, (0.0, 100.0), &mut StdRng::seed_from_u64(3));
        assert_eq!(data.len(), 500);
        for (input, label) in data.inputs.iter().zip(&data.labels) {
            assert_eq!(input.len(), 2);
            assert!(input.iter().all(|x| (0.0..=100.0).contains(x)));
            assert_eq!(label, &vec![input[0] + input[1]]);
        }
    }

    #[test]
    fn same_seed_same_data() {
        let a = AdditionDataset::generate(10, (0.0, 1.0), &mut StdRng::seed_from_u64(11));
        let b = AdditionDataset::generate(10, (0.0, 1.0), &mut StdRng::seed_from_u64(11));
        assert_eq!(a.inputs, b.inputs);
    }
}
