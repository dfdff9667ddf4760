use log::{debug, warn};
use ndarray::{Array4, ArrayD, ArrayViewD, Axis, Dimension, IxDyn, Ix4, Zip};

use crate::basis::{BasisConfiguration, BasisConfigurationSerde, BasisKind, RadialBasisFunction};
use crate::grid::CartesianGrid;
use crate::Error;

/// Minimal number of distances for which the evaluation runs in parallel
const PARALLEL_THRESHOLD: usize = 4096;

/// `RadialBasisEvaluator` maps arrays of distances to arrays of radial basis
/// function activations.
///
/// The output of the evaluation has the same shape as the input, with one
/// additional trailing axis containing the different basis functions.
///
/// ```
/// # use radial_basis::{BasisConfiguration, RadialBasisEvaluator};
/// let configuration = BasisConfiguration::cosine(0.0, 2.0, 3)?;
/// let evaluator = RadialBasisEvaluator::new(configuration);
///
/// let distances = ndarray::arr2(&[[0.1, 0.4], [0.9, 1.5]]);
/// let values = evaluator.evaluate(distances.view().into_dyn())?;
/// assert_eq!(values.shape(), [2, 2, 3]);
/// # Ok::<(), radial_basis::Error>(())
/// ```
pub struct RadialBasisEvaluator {
    configuration: BasisConfiguration,
    implementation: Box<dyn RadialBasisFunction>,
}

impl std::fmt::Debug for RadialBasisEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadialBasisEvaluator")
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}

impl RadialBasisEvaluator {
    /// Create a new evaluator for the given basis configuration
    pub fn new(configuration: BasisConfiguration) -> RadialBasisEvaluator {
        debug!(
            "creating {} radial basis with {} functions (spacing = {}) in [{}, {}]",
            configuration.kind(), configuration.size(), configuration.spacing(),
            configuration.min_radius(), configuration.max_radius(),
        );

        return RadialBasisEvaluator {
            implementation: configuration.create(),
            configuration: configuration,
        };
    }

    /// Create a new evaluator from a basis configuration stored in JSON.
    ///
    /// Malformed JSON gives `Error::Json`, while well-formed but invalid
    /// configurations give `Error::Configuration`.
    pub fn from_json(parameters: &str) -> Result<RadialBasisEvaluator, Error> {
        let configuration = serde_json::from_str::<BasisConfigurationSerde>(parameters)?;
        let configuration = BasisConfiguration::try_from(configuration)?;
        return Ok(RadialBasisEvaluator::new(configuration));
    }

    /// Get the configuration used to create this evaluator, formatted as JSON.
    pub fn parameters(&self) -> String {
        serde_json::to_string(&self.configuration).expect("failed to serialize to JSON")
    }

    /// Get the configuration used to create this evaluator
    pub fn configuration(&self) -> &BasisConfiguration {
        &self.configuration
    }

    /// Get the number of values produced for each distance
    pub fn size(&self) -> usize {
        self.implementation.size()
    }

    /// Evaluate all basis functions for all the `distances`.
    ///
    /// The output array has the shape of `distances` with an additional
    /// trailing axis of size `self.size()`.
    ///
    /// This fails with `Error::Shape` if any of the distances is negative,
    /// infinite or NaN, except for the constant basis which accepts any input.
    #[time_graph::instrument(name = "RadialBasisEvaluator::evaluate")]
    pub fn evaluate(&self, distances: ArrayViewD<f64>) -> Result<ArrayD<f64>, Error> {
        self.check_distances(&distances)?;

        let mut values = ArrayD::zeros(self.output_shape(&distances));
        let last_axis = Axis(distances.ndim());

        let zip = Zip::from(&distances).and(values.lanes_mut(last_axis));
        let basis = &*self.implementation;
        if distances.len() >= PARALLEL_THRESHOLD {
            zip.par_for_each(|&distance, values| basis.compute(distance, values, None));
        } else {
            zip.for_each(|&distance, values| basis.compute(distance, values, None));
        }

        return Ok(values);
    }

    /// Evaluate all basis functions and their derivatives with respect to the
    /// distance for all the `distances`.
    ///
    /// This returns `(values, gradients)`, both with the same shape as the
    /// output of `RadialBasisEvaluator::evaluate`.
    #[time_graph::instrument(name = "RadialBasisEvaluator::evaluate_with_gradients")]
    pub fn evaluate_with_gradients(&self, distances: ArrayViewD<f64>) -> Result<(ArrayD<f64>, ArrayD<f64>), Error> {
        self.check_distances(&distances)?;

        let shape = self.output_shape(&distances);
        let mut values = ArrayD::zeros(shape.clone());
        let mut gradients = ArrayD::zeros(shape);
        let last_axis = Axis(distances.ndim());

        let zip = Zip::from(&distances)
            .and(values.lanes_mut(last_axis))
            .and(gradients.lanes_mut(last_axis));

        let basis = &*self.implementation;
        if distances.len() >= PARALLEL_THRESHOLD {
            zip.par_for_each(|&distance, values, gradients| {
                basis.compute(distance, values, Some(gradients));
            });
        } else {
            zip.for_each(|&distance, values, gradients| {
                basis.compute(distance, values, Some(gradients));
            });
        }

        return Ok((values, gradients));
    }

    /// Evaluate all basis functions on the points of a 3D cartesian `grid`,
    /// using the distance of each point to the origin.
    ///
    /// The output has a shape of `[n, n, n, self.size()]`, where `n` is the
    /// number of points along each axis of the grid.
    pub fn evaluate_on_grid(&self, grid: &CartesianGrid) -> Result<Array4<f64>, Error> {
        let distances = grid.distances();
        let values = self.evaluate(distances.view().into_dyn())?;
        return Ok(values.into_dimensionality::<Ix4>().expect("grid values should be 4-dimensional"));
    }

    fn output_shape(&self, distances: &ArrayViewD<f64>) -> IxDyn {
        let mut shape = distances.shape().to_vec();
        shape.push(self.size());
        return IxDyn(&shape);
    }

    fn check_distances(&self, distances: &ArrayViewD<f64>) -> Result<(), Error> {
        if self.configuration.kind() == BasisKind::Constant {
            return Ok(());
        }

        let mut max_distance = 0.0;
        for (index, &distance) in distances.indexed_iter() {
            // also catches NaN
            if !(distance >= 0.0) {
                return Err(Error::Shape(format!(
                    "expected non-negative distances for {} basis, got {} at index {:?}",
                    self.configuration.kind(), distance, index.slice()
                )));
            }

            if distance.is_infinite() {
                return Err(Error::Shape(format!(
                    "expected finite distances for {} basis, got {} at index {:?}",
                    self.configuration.kind(), distance, index.slice()
                )));
            }

            max_distance = f64::max(max_distance, distance);
        }

        if let Some(vanishing) = self.implementation.vanishing_distance() {
            if max_distance > vanishing {
                warn!(
                    "some distances are larger than {} (up to {}), all {} basis functions are zero there",
                    vanishing, max_distance, self.configuration.kind()
                );
            }
        }

        Ok(())
    }
}

/// Evaluate the basis defined by `configuration` for all the `distances`.
///
/// This is a shortcut for `RadialBasisEvaluator::new(configuration).evaluate(distances)`.
pub fn evaluate(configuration: &BasisConfiguration, distances: ArrayViewD<f64>) -> Result<ArrayD<f64>, Error> {
    RadialBasisEvaluator::new(*configuration).evaluate(distances)
}
