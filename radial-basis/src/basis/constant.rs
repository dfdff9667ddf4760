use ndarray::ArrayViewMut1;

use super::RadialBasisFunction;

/// Constant basis, with a single function equal to 1 for all distances
#[derive(Debug, Clone, Copy)]
pub struct ConstantBasis;

impl RadialBasisFunction for ConstantBasis {
    fn size(&self) -> usize {
        1
    }

    fn compute(&self, _: f64, mut values: ArrayViewMut1<f64>, gradients: Option<ArrayViewMut1<f64>>) {
        super::check_shapes(1, &values, gradients.as_ref());

        values.fill(1.0);
        if let Some(mut gradients) = gradients {
            gradients.fill(0.0);
        }
    }

    fn vanishing_distance(&self) -> Option<f64> {
        None
    }
}
