use crate::Error;

/// The different families of fixed radial basis functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
#[serde(tag = "type")]
pub enum BasisKind {
    /// Single basis function equal to 1 everywhere. This is used as a
    /// placeholder filter only containing the `r`-independent component.
    Constant,
    /// Cosine-squared bumps with compact support. The `k`-th function is
    /// `cos(π/2 (r - c_k) / Δ)^2` for `|r - c_k| < Δ` and 0 outside, where
    /// `c_k` are the centers and `Δ` the spacing between centers.
    Cosine,
    /// Gaussian bumps `exp(-(r - c_k)^2 / Δ)`, where `c_k` are the centers
    /// and `Δ` the spacing between centers.
    Gaussian,
}

impl std::fmt::Display for BasisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BasisKind::Constant => write!(f, "Constant"),
            BasisKind::Cosine => write!(f, "Cosine"),
            BasisKind::Gaussian => write!(f, "Gaussian"),
        }
    }
}

/// Validated definition of a radial basis.
///
/// Values of this type can only be created through `BasisConfiguration::new`,
/// the `BasisConfigurationBuilder`, or deserialization; which all check the
/// parameters. A configuration is immutable once created.
///
/// The basis functions are centered on `number_of_basis` points separated by
/// `spacing = (max_radius - min_radius) / number_of_basis`, starting at
/// `min_radius`. The last center is one spacing below `max_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(try_from = "BasisConfigurationSerde")]
#[serde(into = "BasisConfigurationSerde")]
pub struct BasisConfiguration {
    kind: BasisKind,
    min_radius: f64,
    max_radius: f64,
    number_of_basis: usize,
}

impl BasisConfiguration {
    /// Create a new configuration, checking that the parameters are valid.
    pub fn new(
        kind: BasisKind,
        min_radius: f64,
        max_radius: f64,
        number_of_basis: usize,
    ) -> Result<BasisConfiguration, Error> {
        let configuration = BasisConfiguration {
            kind: kind,
            min_radius: min_radius,
            max_radius: max_radius,
            number_of_basis: number_of_basis,
        };
        configuration.validate()?;
        return Ok(configuration);
    }

    /// Configuration for the `Constant` basis, with a single function
    pub fn constant() -> BasisConfiguration {
        return BasisConfiguration {
            kind: BasisKind::Constant,
            min_radius: 0.0,
            max_radius: 0.0,
            number_of_basis: 1,
        };
    }

    /// Configuration for the `Cosine` basis
    pub fn cosine(min_radius: f64, max_radius: f64, number_of_basis: usize) -> Result<BasisConfiguration, Error> {
        BasisConfiguration::new(BasisKind::Cosine, min_radius, max_radius, number_of_basis)
    }

    /// Configuration for the `Gaussian` basis
    pub fn gaussian(min_radius: f64, max_radius: f64, number_of_basis: usize) -> Result<BasisConfiguration, Error> {
        BasisConfiguration::new(BasisKind::Gaussian, min_radius, max_radius, number_of_basis)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.number_of_basis < 1 {
            return Err(Error::Configuration(format!(
                "number_of_basis must be at least 1 for {} basis, got {}",
                self.kind, self.number_of_basis
            )));
        }

        if self.kind == BasisKind::Constant {
            return Ok(());
        }

        if !self.min_radius.is_finite() || !self.max_radius.is_finite() {
            return Err(Error::Configuration(format!(
                "min_radius and max_radius must be finite for {} basis, got {} and {}",
                self.kind, self.min_radius, self.max_radius
            )));
        }

        if self.max_radius <= self.min_radius {
            return Err(Error::Configuration(format!(
                "max_radius must be larger than min_radius for {} basis, got {} <= {}",
                self.kind, self.max_radius, self.min_radius
            )));
        }

        Ok(())
    }

    /// Get the kind of basis functions
    pub fn kind(&self) -> BasisKind {
        self.kind
    }

    /// Get the position of the first basis center
    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    /// Get the upper bound of the radial range covered by the basis
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Get the requested number of basis functions
    pub fn number_of_basis(&self) -> usize {
        self.number_of_basis
    }

    /// Get the number of values produced for each distance, i.e. the size of
    /// the trailing axis of the evaluated array. This is `number_of_basis`,
    /// except for the constant basis which always produces a single value.
    pub fn size(&self) -> usize {
        match self.kind {
            BasisKind::Constant => 1,
            BasisKind::Cosine | BasisKind::Gaussian => self.number_of_basis,
        }
    }

    /// Get the distance between two consecutive basis centers
    pub fn spacing(&self) -> f64 {
        (self.max_radius - self.min_radius) / self.number_of_basis as f64
    }

    /// Get the positions of the basis centers, `min_radius + k * spacing` for
    /// `k` in `0..number_of_basis`.
    pub fn centers(&self) -> Vec<f64> {
        let spacing = self.spacing();
        return (0..self.number_of_basis)
            .map(|k| self.min_radius + k as f64 * spacing)
            .collect();
    }
}

/// Serde-compatible struct, used to serialize/deserialize
/// `BasisConfiguration`
#[derive(Debug, Clone)]
#[derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BasisConfigurationSerde {
    /// Family of basis functions to use
    pub kind: BasisKind,
    /// Position of the first basis center
    #[serde(default)]
    pub min_radius: f64,
    /// Upper bound of the radial range covered by the basis. This can be
    /// omitted for the `Constant` basis.
    #[serde(default)]
    pub max_radius: Option<f64>,
    /// Number of basis functions
    pub number_of_basis: usize,
}

impl TryFrom<BasisConfigurationSerde> for BasisConfiguration {
    type Error = Error;

    fn try_from(parameters: BasisConfigurationSerde) -> Result<Self, Self::Error> {
        let max_radius = match (parameters.kind, parameters.max_radius) {
            (_, Some(max_radius)) => max_radius,
            (BasisKind::Constant, None) => parameters.min_radius,
            (kind, None) => {
                return Err(Error::Configuration(format!(
                    "missing max_radius for {} basis", kind
                )));
            }
        };

        return BasisConfiguration::new(
            parameters.kind, parameters.min_radius, max_radius, parameters.number_of_basis
        );
    }
}

impl From<BasisConfiguration> for BasisConfigurationSerde {
    fn from(configuration: BasisConfiguration) -> BasisConfigurationSerde {
        BasisConfigurationSerde {
            kind: configuration.kind,
            min_radius: configuration.min_radius,
            max_radius: Some(configuration.max_radius),
            number_of_basis: configuration.number_of_basis,
        }
    }
}

impl schemars::JsonSchema for BasisConfiguration {
    fn schema_name() -> String {
        "BasisConfiguration".into()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <BasisConfigurationSerde as schemars::JsonSchema>::json_schema(gen)
    }
}

/// Incremental construction of a `BasisConfiguration`.
///
/// Some of the parameters can be fixed ahead of time and the builder cloned
/// to create multiple configurations sharing them:
///
/// ```
/// # use radial_basis::{BasisConfigurationBuilder, BasisKind};
/// let cosine = BasisConfigurationBuilder::new()
///     .kind(BasisKind::Cosine)
///     .max_radius(2.5);
///
/// let small = cosine.clone().number_of_basis(3).finish().unwrap();
/// let large = cosine.number_of_basis(10).finish().unwrap();
///
/// assert_eq!(small.max_radius(), large.max_radius());
/// assert_eq!(large.size(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BasisConfigurationBuilder {
    kind: Option<BasisKind>,
    min_radius: Option<f64>,
    max_radius: Option<f64>,
    number_of_basis: Option<usize>,
}

impl BasisConfigurationBuilder {
    /// Create a new builder with all parameters unset
    pub fn new() -> BasisConfigurationBuilder {
        BasisConfigurationBuilder::default()
    }

    /// Set the kind of basis
    #[must_use]
    pub fn kind(mut self, kind: BasisKind) -> BasisConfigurationBuilder {
        self.kind = Some(kind);
        self
    }

    /// Set the position of the first center. Defaults to 0 if never set.
    #[must_use]
    pub fn min_radius(mut self, min_radius: f64) -> BasisConfigurationBuilder {
        self.min_radius = Some(min_radius);
        self
    }

    /// Set the upper bound of the radial range
    #[must_use]
    pub fn max_radius(mut self, max_radius: f64) -> BasisConfigurationBuilder {
        self.max_radius = Some(max_radius);
        self
    }

    /// Set the number of basis functions
    #[must_use]
    pub fn number_of_basis(mut self, number_of_basis: usize) -> BasisConfigurationBuilder {
        self.number_of_basis = Some(number_of_basis);
        self
    }

    /// Check that all required parameters have been set and create the
    /// corresponding `BasisConfiguration`.
    pub fn finish(&self) -> Result<BasisConfiguration, Error> {
        let kind = self.kind.ok_or_else(|| Error::Configuration(
            "missing kind in basis configuration".into()
        ))?;

        let number_of_basis = self.number_of_basis.ok_or_else(|| Error::Configuration(format!(
            "missing number_of_basis for {} basis", kind
        )))?;

        return BasisConfiguration::try_from(BasisConfigurationSerde {
            kind: kind,
            min_radius: self.min_radius.unwrap_or(0.0),
            max_radius: self.max_radius,
            number_of_basis: number_of_basis,
        });
    }
}
