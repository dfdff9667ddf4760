#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Got an invalid basis configuration. This is raised when creating the
    /// basis, before any evaluation happens.
    Configuration(String),
    /// Got a malformed input array when evaluating the basis
    Shape(String),
    /// Error while serializing/deserializing data
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Configuration(e) => write!(f, "invalid configuration: {}", e),
            Error::Shape(e) => write!(f, "invalid input: {}", e),
            Error::Json(e) => write!(f, "json error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Configuration(_) |
            Error::Shape(_) => None,
            Error::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::Json(error)
    }
}
