//! Sampling of distances on regular grids, used to tabulate the radial basis
//! functions as fields (e.g. for visualization).

use ndarray::{Array1, Array2, Array3};

use crate::Error;

/// Get `count` evenly spaced values over `[start, stop]`, including both
/// end points.
///
/// With `count == 1` this only contains `start`, and with `count == 0` this is
/// empty.
pub fn linspace(start: f64, stop: f64, count: usize) -> Array1<f64> {
    match count {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values = Array1::from_shape_fn(count, |i| start + i as f64 * step);
            // make sure the last point is exactly `stop`
            values[count - 1] = stop;
            values
        }
    }
}

/// A regular 3D cartesian grid covering the cube `[-extent, extent]^3`, with
/// `points_per_axis` points along each axis (end points included).
///
/// Grids are validated on creation, including when deserialized from JSON.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(try_from = "CartesianGridSerde", into = "CartesianGridSerde")]
pub struct CartesianGrid {
    extent: f64,
    points_per_axis: usize,
}

/// Serialized form of a [`CartesianGrid`], before validation
#[derive(Debug, Clone, Copy)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CartesianGridSerde {
    /// Half-size of the cube covered by the grid, must be positive
    pub extent: f64,
    /// Number of points along each of the x, y and z axes, must be at least 1
    pub points_per_axis: usize,
}

impl TryFrom<CartesianGridSerde> for CartesianGrid {
    type Error = Error;

    fn try_from(parameters: CartesianGridSerde) -> Result<CartesianGrid, Error> {
        CartesianGrid::new(parameters.extent, parameters.points_per_axis)
    }
}

impl From<CartesianGrid> for CartesianGridSerde {
    fn from(grid: CartesianGrid) -> CartesianGridSerde {
        CartesianGridSerde {
            extent: grid.extent,
            points_per_axis: grid.points_per_axis,
        }
    }
}

impl schemars::JsonSchema for CartesianGrid {
    fn schema_name() -> String {
        "CartesianGrid".into()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <CartesianGridSerde as schemars::JsonSchema>::json_schema(gen)
    }
}

impl CartesianGrid {
    /// Create a new grid, checking that the parameters are valid
    pub fn new(extent: f64, points_per_axis: usize) -> Result<CartesianGrid, Error> {
        let grid = CartesianGrid { extent, points_per_axis };
        grid.validate()?;
        return Ok(grid);
    }

    /// Check that the extent is positive and finite, and that there is at
    /// least one point along each axis
    fn validate(&self) -> Result<(), Error> {
        if self.extent <= 0.0 || !self.extent.is_finite() {
            return Err(Error::Configuration(format!(
                "expected a positive extent for the cartesian grid, got {}",
                self.extent
            )));
        }

        if self.points_per_axis == 0 {
            return Err(Error::Configuration(
                "points_per_axis must be at least 1 for the cartesian grid".into()
            ));
        }

        Ok(())
    }

    /// Half-size of the cube covered by the grid
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Number of points along each of the x, y and z axes
    pub fn points_per_axis(&self) -> usize {
        self.points_per_axis
    }

    /// Get the coordinates of the grid points along one axis
    pub fn axis(&self) -> Array1<f64> {
        linspace(-self.extent, self.extent, self.points_per_axis)
    }

    /// Get the position of all the points in this grid, as an array of shape
    /// `[n^3, 3]`. The x coordinate changes the slowest and the z coordinate
    /// the fastest.
    pub fn points(&self) -> Array2<f64> {
        let axis = self.axis();
        let n = self.points_per_axis;

        let mut points = Array2::zeros((n * n * n, 3));
        for (i, &x) in axis.iter().enumerate() {
            for (j, &y) in axis.iter().enumerate() {
                for (k, &z) in axis.iter().enumerate() {
                    let point = (i * n + j) * n + k;
                    points[[point, 0]] = x;
                    points[[point, 1]] = y;
                    points[[point, 2]] = z;
                }
            }
        }

        return points;
    }

    /// Get the distance to the origin for all the points in this grid, as an
    /// array of shape `[n, n, n]` indexed by the x, y and z positions.
    pub fn distances(&self) -> Array3<f64> {
        let axis = self.axis();
        let n = self.points_per_axis;

        return Array3::from_shape_fn((n, n, n), |(i, j, k)| {
            let (x, y, z) = (axis[i], axis[j], axis[k]);
            f64::sqrt(x * x + y * y + z * z)
        });
    }
}
