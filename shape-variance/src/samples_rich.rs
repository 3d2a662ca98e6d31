//! More samples than features: decompose the `K x K` covariance of the
//! row-standardised samples and project the eigenvectors onto the samples.

use nalgebra as na;

use crate::{eigen, estimator::Component, ComponentSelection, Degenerate, Error, Settings};

pub fn component(flattened: &na::DMatrix<f64>, settings: &Settings) -> Result<Component, Error> {
	let (samples, features) = flattened.shape();
	let bias = (samples as f64 - 1.0) / samples as f64;

	let mut scaled = flattened.clone();
	for (sample, mut row) in scaled.row_iter_mut().enumerate() {
		let mean = row.mean();
		let variance = if features > 1 {
			row.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (features - 1) as f64
		} else {
			0.0
		};
		let variance = variance * bias;
		if variance <= 0.0 {
			return Err(Degenerate::ConstantSample { sample }.into());
		}
		row.add_scalar_mut(-mean);
		row *= 1.0 / variance.sqrt();
	}

	let covariance = scaled.tr_mul(&scaled) / features as f64;
	let spectrum = eigen::descending(covariance, settings)?;

	let mut projected = &scaled * &spectrum.vectors;
	let mut spread = na::DVector::zeros(features);
	for (j, mut column) in projected.column_iter_mut().enumerate() {
		let norm = column.norm();
		if norm > 0.0 {
			column /= norm;
		}
		spread[j] = norm;
	}

	let delta = spectrum
		.values
		.zip_map(&spread, |value, norm| (value / features as f64).abs().sqrt() * norm);

	let index = match settings.component {
		ComponentSelection::Dominant => 0,
		ComponentSelection::Compatible => largest(&delta),
	};
	log::trace!(
		"samples rich component {} with eigenvalue {} and delta {}",
		index,
		spectrum.values[index],
		delta[index]
	);

	Ok(Component {
		index,
		vector: projected.column(index).into_owned(),
		eigenvalues: spectrum.values,
	})
}

// first index of the maximum
fn largest(values: &na::DVector<f64>) -> usize {
	values
		.iter()
		.enumerate()
		.fold(0, |best, (index, &value)| if value > values[best] { index } else { best })
}
