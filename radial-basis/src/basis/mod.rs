use ndarray::ArrayViewMut1;

mod configuration;
pub use self::configuration::{BasisKind, BasisConfiguration, BasisConfigurationSerde};
pub use self::configuration::BasisConfigurationBuilder;

mod constant;
pub use self::constant::ConstantBasis;

mod cosine;
pub use self::cosine::CosineBasis;

mod gaussian;
pub use self::gaussian::GaussianBasis;

/// A `RadialBasisFunction` evaluates a fixed set of basis functions (and
/// optionally their derivatives) for a single distance.
///
/// `Send + Sync` are required super-traits to evaluate the same basis from
/// multiple threads.
pub trait RadialBasisFunction: Send + Sync {
    /// Get how many basis functions are part of this basis. This is the
    /// shape to use for the `values` and `gradients` parameters to `compute`.
    fn size(&self) -> usize;

    /// Compute all the basis functions for a single `distance` and store the
    /// result in `values`. If `gradients` is `Some`, also compute and store the
    /// derivatives with respect to `distance` there.
    fn compute(&self, distance: f64, values: ArrayViewMut1<f64>, gradients: Option<ArrayViewMut1<f64>>);

    /// Get the distance above which all basis functions are zero, either
    /// exactly or because of floating point underflow. This is `None` for
    /// bases that never vanish.
    fn vanishing_distance(&self) -> Option<f64>;
}

impl BasisConfiguration {
    /// Create the implementation of the basis functions corresponding to this
    /// configuration.
    pub fn create(&self) -> Box<dyn RadialBasisFunction> {
        match self.kind() {
            BasisKind::Constant => Box::new(ConstantBasis),
            BasisKind::Cosine => Box::new(CosineBasis::new(self)),
            BasisKind::Gaussian => Box::new(GaussianBasis::new(self)),
        }
    }
}

/// Check the shape of the `values` and `gradients` arrays given to
/// `RadialBasisFunction::compute`.
fn check_shapes(size: usize, values: &ArrayViewMut1<f64>, gradients: Option<&ArrayViewMut1<f64>>) {
    assert_eq!(
        values.len(), size,
        "wrong size for values array, expected {} but got {}",
        size, values.len()
    );

    if let Some(gradients) = gradients {
        assert_eq!(
            gradients.len(), size,
            "wrong size for gradients array, expected {} but got {}",
            size, gradients.len()
        );
    }
}
