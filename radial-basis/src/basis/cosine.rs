use std::f64::consts::PI;

use ndarray::ArrayViewMut1;

use super::{BasisConfiguration, RadialBasisFunction};

/// Cosine-squared bumps with compact support.
///
/// With `u = (r - c_k) / Δ`, the `k`-th function is `cos(π/2 u)^2` for
/// `|u| < 1` and exactly 0 for `|u| >= 1`. Each function is 1 at its center,
/// and goes smoothly (with a continuous first derivative) to 0 at the
/// neighboring centers.
#[derive(Debug, Clone)]
pub struct CosineBasis {
    /// Positions of the centers `c_k`
    centers: Vec<f64>,
    /// Distance `Δ` between consecutive centers, which is also the half-width
    /// of the support of each function
    spacing: f64,
    /// Values of `|u|` above `1 - support_tolerance` are outside the support.
    /// This absorbs the rounding error on `u` when `r` is one of the
    /// (rounded) neighboring centers.
    support_tolerance: f64,
}

impl CosineBasis {
    /// Create a cosine basis using the centers and spacing from the given
    /// `configuration`. The kind stored in the configuration is ignored.
    pub fn new(configuration: &BasisConfiguration) -> CosineBasis {
        let spacing = configuration.spacing();
        // rounding errors on the centers scale with their magnitude, and are
        // then amplified by the division by the spacing
        let largest_radius = f64::max(configuration.min_radius().abs(), configuration.max_radius().abs());
        let support_tolerance = 4.0 * f64::EPSILON * (1.0 + largest_radius / spacing);

        CosineBasis {
            centers: configuration.centers(),
            spacing: spacing,
            support_tolerance: support_tolerance,
        }
    }
}

impl RadialBasisFunction for CosineBasis {
    fn size(&self) -> usize {
        self.centers.len()
    }

    fn compute(&self, distance: f64, mut values: ArrayViewMut1<f64>, mut gradients: Option<ArrayViewMut1<f64>>) {
        super::check_shapes(self.size(), &values, gradients.as_ref());

        for (k, &center) in self.centers.iter().enumerate() {
            let u = (distance - center) / self.spacing;

            // cos(±π/2)^2 is not exactly zero in floating point, so the
            // boundary of the support is handled explicitly
            if u.abs() >= 1.0 - self.support_tolerance {
                values[k] = 0.0;
                if let Some(ref mut gradients) = gradients {
                    gradients[k] = 0.0;
                }
                continue;
            }

            let cos = f64::cos(0.5 * PI * u);
            values[k] = cos * cos;

            if let Some(ref mut gradients) = gradients {
                // d/dr cos(π/2 u)^2 = -π/2 sin(π u) / Δ
                gradients[k] = -0.5 * PI * f64::sin(PI * u) / self.spacing;
            }
        }
    }

    fn vanishing_distance(&self) -> Option<f64> {
        self.centers.last().map(|last| last + self.spacing)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::Array1;

    use super::super::{BasisConfiguration, CosineBasis, RadialBasisFunction};

    fn basis(min_radius: f64, max_radius: f64, number_of_basis: usize) -> CosineBasis {
        CosineBasis::new(&BasisConfiguration::cosine(min_radius, max_radius, number_of_basis).unwrap())
    }

    #[test]
    fn value_at_centers() {
        let cosine = basis(0.0, 2.0, 3);
        let mut values = Array1::zeros(3);

        cosine.compute(2.0 / 3.0, values.view_mut(), None);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[1], 1.0);
        assert_eq!(values[2], 0.0);

        cosine.compute(0.0, values.view_mut(), None);
        assert_eq!(values, Array1::from(vec![1.0, 0.0, 0.0]));
    }

    #[test]
    fn compact_support() {
        let cosine = basis(1.0, 3.0, 4);
        let mut values = Array1::zeros(4);

        // centers are at 1.0, 1.5, 2.0, 2.5 with a spacing of 0.5
        cosine.compute(1.25, values.view_mut(), None);
        assert_relative_eq!(values[0], 0.5, max_relative = 1e-15);
        assert_relative_eq!(values[1], 0.5, max_relative = 1e-15);
        assert_eq!(values[2], 0.0);
        assert_eq!(values[3], 0.0);

        cosine.compute(3.0, values.view_mut(), None);
        assert!(values.iter().all(|&v| v == 0.0));

        cosine.compute(12.0, values.view_mut(), None);
        assert!(values.iter().all(|&v| v == 0.0));

        assert_eq!(cosine.vanishing_distance(), Some(3.0));
    }

    #[test]
    fn zero_at_neighbors_with_inexact_spacing() {
        // spacings of 0.1 and 5/7 are not exactly representable
        for &(min_radius, max_radius, number_of_basis) in &[(0.0, 1.0, 10), (0.0, 5.0, 7), (0.3, 2.9, 13)] {
            let configuration = BasisConfiguration::cosine(min_radius, max_radius, number_of_basis).unwrap();
            let cosine = CosineBasis::new(&configuration);
            let mut values = Array1::zeros(number_of_basis);

            for (k, &center) in configuration.centers().iter().enumerate() {
                cosine.compute(center, values.view_mut(), None);
                for (j, &value) in values.iter().enumerate() {
                    if j == k {
                        assert_eq!(value, 1.0);
                    } else {
                        assert_eq!(value, 0.0, "basis {} at center {} of {:?}", j, k, configuration);
                    }
                }
            }
        }
    }

    #[test]
    fn partition_of_unity() {
        // two neighboring bumps sum to cos^2 + sin^2 = 1 between their centers
        let cosine = basis(0.0, 4.0, 4);
        let mut values = Array1::zeros(4);

        for &distance in &[0.1, 0.7, 1.3, 2.25, 2.99] {
            cosine.compute(distance, values.view_mut(), None);
            assert_relative_eq!(values.sum(), 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn gradients() {
        let cosine = basis(0.0, 2.0, 4);
        let mut values = Array1::zeros(4);
        let mut gradients = Array1::zeros(4);

        let delta = 1e-6;
        let mut values_plus = Array1::zeros(4);
        let mut values_minus = Array1::zeros(4);

        for &distance in &[0.1, 0.26, 0.8, 1.45, 1.7] {
            cosine.compute(distance, values.view_mut(), Some(gradients.view_mut()));
            cosine.compute(distance + delta, values_plus.view_mut(), None);
            cosine.compute(distance - delta, values_minus.view_mut(), None);

            let finite_differences = (&values_plus - &values_minus) / (2.0 * delta);
            assert_relative_eq!(finite_differences, gradients, epsilon = 1e-7, max_relative = 1e-6);
        }

        // outside of the support, the gradients are zero
        cosine.compute(5.0, values.view_mut(), Some(gradients.view_mut()));
        assert!(gradients.iter().all(|&g| g == 0.0));
    }
}
