// ============================================================
// Layer 5 — Yield Regressor Architecture
// ============================================================
// A small fully connected network mapping one scaled feature
// row to one yield value:
//
//   [batch, input_size] → Linear → ReLU → ... → Linear → [batch, 1]
//
// The layer widths come from model_config.json so the same code
// can load any architecture the training pipeline produced.
//
// Reference: Burn Book §3 (Building Blocks: Module, Config)

use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
};

// #[derive(Config)] already generates Clone and Serialize/Deserialize,
// so the struct round-trips through model_config.json as-is.
#[derive(Config, Debug)]
pub struct YieldRegressorConfig {
    /// Width of the scaled feature row
    pub input_size:   usize,
    /// One entry per hidden layer, in order
    pub hidden_sizes: Vec<usize>,
}

impl YieldRegressorConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> YieldRegressor<B> {
        let mut hidden = Vec::with_capacity(self.hidden_sizes.len());
        let mut width  = self.input_size;
        for &size in &self.hidden_sizes {
            hidden.push(LinearConfig::new(width, size).init(device));
            width = size;
        }
        let output = LinearConfig::new(width, 1).init(device);
        YieldRegressor { hidden, output, input_size: self.input_size }
    }
}

/// Feed-forward regressor: ReLU hidden layers, one linear output.
#[derive(Module, Debug)]
pub struct YieldRegressor<B: Backend> {
    pub hidden:     Vec<Linear<B>>,
    pub output:     Linear<B>,
    pub input_size: usize,
}

impl<B: Backend> YieldRegressor<B> {
    /// features: [batch, input_size] → predictions: [batch, 1]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let mut x = features;
        for layer in &self.hidden {
            x = burn::tensor::activation::relu(layer.forward(x));
        }
        self.output.forward(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_forward_shape() {
        let device = Default::default();
        let model: YieldRegressor<TestBackend> =
            YieldRegressorConfig::new(10, vec![8, 4]).init(&device);

        let input  = Tensor::<TestBackend, 2>::zeros([3, 10], &device);
        let output = model.forward(input);
        assert_eq!(output.dims(), [3, 1]);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let cfg  = YieldRegressorConfig::new(10, vec![16]);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: YieldRegressorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.input_size, 10);
        assert_eq!(back.hidden_sizes, vec![16]);
    }
}
