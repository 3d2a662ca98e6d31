//! At most as many samples as features: decompose the `N x N` correlation
//! between samples directly.

use nalgebra as na;

use crate::{eigen, estimator::Component, ComponentSelection, Degenerate, Error, Settings};

pub fn component(flattened: &na::DMatrix<f64>, settings: &Settings) -> Result<Component, Error> {
	let samples = flattened.nrows();
	if samples < 2 {
		return Err(Degenerate::SingleSample.into());
	}

	let correlation = correlation(flattened)?;
	let spectrum = eigen::descending(correlation, settings)?;

	let index = match settings.component {
		ComponentSelection::Dominant => 0,
		// second smallest eigenvalue
		ComponentSelection::Compatible => samples - 2,
	};
	log::trace!(
		"feature rich component {} with eigenvalue {}",
		index,
		spectrum.values[index]
	);

	Ok(Component {
		index,
		vector: spectrum.vectors.column(index).into_owned(),
		eigenvalues: spectrum.values,
	})
}

/// Pearson correlation between the rows of `flattened`.
pub fn correlation(flattened: &na::DMatrix<f64>) -> Result<na::DMatrix<f64>, Degenerate> {
	let mut standardized = flattened.clone();
	for (sample, mut row) in standardized.row_iter_mut().enumerate() {
		let mean = row.mean();
		row.add_scalar_mut(-mean);
		let norm = row.norm();
		if norm <= 0.0 {
			return Err(Degenerate::ConstantSample { sample });
		}
		row /= norm;
	}
	let mut correlation = &standardized * standardized.transpose();
	correlation.fill_diagonal(1.0);
	Ok(correlation)
}
