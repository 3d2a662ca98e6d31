use nalgebra as na;
use rayon::prelude::*;

use crate::{Degenerate, ShapeStack};

/// Row `i` is the column-stacked sample `i`.
pub struct Flattened {
	pub magnitudes: na::DVector<f64>,
	/// Sum of all magnitudes.
	pub total: f64,
	pub matrix: na::DMatrix<f64>,
}

pub fn flatten(stack: &ShapeStack, parallel_threshold: usize) -> Result<Flattened, Degenerate> {
	let extents = stack.extents();
	let features = extents.features();

	if let Some(sample) = stack
		.samples()
		.position(|sample| sample.iter().any(|v| !v.is_finite()))
	{
		return Err(Degenerate::NonFinite { sample });
	}

	let magnitude = |sample: &[f64]| sample.iter().map(|v| v * v).sum::<f64>();
	let magnitudes = if extents.samples() >= parallel_threshold {
		stack
			.values()
			.par_chunks_exact(features)
			.map(magnitude)
			.collect::<Vec<_>>()
	} else {
		stack.samples().map(magnitude).collect::<Vec<_>>()
	};

	if let Some(sample) = magnitudes.iter().position(|m| !m.is_finite()) {
		return Err(Degenerate::Overflow { sample });
	}
	if let Some(sample) = magnitudes.iter().position(|&m| m == 0.0) {
		return Err(Degenerate::ZeroMagnitude { sample });
	}
	let total = magnitudes.iter().sum::<f64>();
	if !total.is_finite() {
		return Err(Degenerate::TotalOverflow);
	}

	Ok(Flattened {
		magnitudes: na::DVector::from_vec(magnitudes),
		total,
		matrix: na::DMatrix::from_row_slice(extents.samples(), features, stack.values()),
	})
}
