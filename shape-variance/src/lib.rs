#![doc = include_str!("../readme.md")]

mod eigen;
mod estimator;
mod feature_rich;
mod flatten;
mod samples_rich;
mod settings;

pub use landmarks;

pub use estimator::{Branch, Estimate, ShapeVarianceEstimator};
pub use landmarks::{mean_shape, sum_cube, Extents, ShapeStack};
pub use settings::{ComponentSelection, Settings};

use nalgebra as na;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error(transparent)]
	InvalidShape(#[from] landmarks::Error),

	#[error("Eigen-decomposition of a {size}x{size} matrix failed")]
	Decomposition { size: usize },

	#[error("Degenerate input: {0}")]
	DegenerateInput(#[from] Degenerate),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degenerate {
	#[error("a single sample has no correlation structure")]
	SingleSample,

	#[error("sample {sample} has zero magnitude")]
	ZeroMagnitude { sample: usize },

	#[error("sample {sample} has zero variance")]
	ConstantSample { sample: usize },

	#[error("sample {sample} contains non-finite values")]
	NonFinite { sample: usize },

	#[error("squared sum of sample {sample} overflows")]
	Overflow { sample: usize },

	#[error("total squared sum of all samples overflows")]
	TotalOverflow,

	#[error("weight of sample {sample} is not finite")]
	NonFiniteWeight { sample: usize },
}

/// Shape deviation weights with default settings.
pub fn estimate(stack: &ShapeStack) -> Result<na::DVector<f64>, Error> {
	ShapeVarianceEstimator::default().estimate(stack)
}
