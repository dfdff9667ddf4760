use ndarray::ArrayViewMut1;

use super::{BasisConfiguration, RadialBasisFunction};

/// Largest `x` such that `exp(-x)` is still representable as a (subnormal)
/// `f64`.
const EXP_UNDERFLOW: f64 = 745.2;

/// Gaussian bumps `exp(-γ (r - c_k)^2)`, with `γ = 1 / Δ` and `Δ` the spacing
/// between centers.
#[derive(Debug, Clone)]
pub struct GaussianBasis {
    /// Positions of the centers `c_k`
    centers: Vec<f64>,
    /// γ, the inverse of the spacing between centers
    gamma: f64,
}

impl GaussianBasis {
    /// Create a gaussian basis using the centers and spacing from the given
    /// `configuration`. The kind stored in the configuration is ignored.
    pub fn new(configuration: &BasisConfiguration) -> GaussianBasis {
        GaussianBasis {
            centers: configuration.centers(),
            gamma: 1.0 / configuration.spacing(),
        }
    }
}

impl RadialBasisFunction for GaussianBasis {
    fn size(&self) -> usize {
        self.centers.len()
    }

    fn compute(&self, distance: f64, mut values: ArrayViewMut1<f64>, mut gradients: Option<ArrayViewMut1<f64>>) {
        super::check_shapes(self.size(), &values, gradients.as_ref());

        for (k, &center) in self.centers.iter().enumerate() {
            let diff = distance - center;
            let value = f64::exp(-self.gamma * diff * diff);
            values[k] = value;

            if let Some(ref mut gradients) = gradients {
                gradients[k] = -2.0 * self.gamma * diff * value;
            }
        }
    }

    fn vanishing_distance(&self) -> Option<f64> {
        self.centers.last().map(|last| last + f64::sqrt(EXP_UNDERFLOW / self.gamma))
    }
}
