#![warn(clippy::all, clippy::pedantic)]

// disable some style lints
#![allow(clippy::needless_return, clippy::must_use_candidate, clippy::comparison_chain)]
#![allow(clippy::redundant_field_names, clippy::redundant_closure_for_method_calls)]
#![allow(clippy::unreadable_literal, clippy::option_if_let_else, clippy::range_plus_one)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc, clippy::module_name_repetitions)]

#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap, clippy::cast_lossless, clippy::cast_sign_loss)]
#![allow(clippy::default_trait_access, clippy::neg_cmp_op_on_partial_ord)]

// Tests lints
#![cfg_attr(test, allow(clippy::float_cmp))]

//! Fixed radial basis functions, used to featurize inter-atomic distances
//! before they are combined with angular information in equivariant
//! convolutions.
//!
//! Three families of basis functions are available (see [`BasisKind`]):
//! a constant function, compactly supported cosine-squared bumps, and
//! gaussian bumps. A basis is defined by a [`BasisConfiguration`], and
//! evaluated on arrays of distances with a [`RadialBasisEvaluator`].

mod errors;
pub use self::errors::Error;

pub mod basis;
pub use self::basis::{BasisKind, BasisConfiguration, BasisConfigurationBuilder};
pub use self::basis::RadialBasisFunction;

mod evaluator;
pub use self::evaluator::{RadialBasisEvaluator, evaluate};

pub mod grid;
pub use self::grid::{CartesianGrid, linspace};
