use nalgebra as na;

use crate::{feature_rich, flatten, samples_rich, Degenerate, Error, Settings, ShapeStack};

/// Which matrix is decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Branch {
	/// `N > K`, the `K x K` covariance of the standardised samples.
	SamplesRich,
	/// `N <= K`, the `N x N` correlation between samples.
	FeatureRich,
}

impl Branch {
	pub fn select(samples: usize, features: usize) -> Self {
		if samples > features {
			Self::SamplesRich
		} else {
			Self::FeatureRich
		}
	}
}

pub struct Component {
	/// Position in descending eigenvalue order.
	pub index: usize,
	/// One entry per sample.
	pub vector: na::DVector<f64>,
	pub eigenvalues: na::DVector<f64>,
}

#[derive(Debug, Clone)]
pub struct Estimate {
	pub weights: na::DVector<f64>,
	pub branch: Branch,
	/// Eigenvalues of the decomposed matrix, largest first.
	pub eigenvalues: na::DVector<f64>,
	/// Index of the selected eigenvector in `eigenvalues`.
	pub component: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ShapeVarianceEstimator {
	settings: Settings,
}

impl ShapeVarianceEstimator {
	pub fn new(settings: Settings) -> Self {
		Self { settings }
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Deviation weight per sample, all non-negative.
	pub fn estimate(&self, stack: &ShapeStack) -> Result<na::DVector<f64>, Error> {
		self.decompose(stack).map(|estimate| estimate.weights)
	}

	/// Estimate from a host array and its dimension attribute.
	pub fn estimate_host(&self, values: &[f64], dims: &[i32]) -> Result<na::DVector<f64>, Error> {
		let stack = ShapeStack::from_host(values, dims)?;
		self.estimate(&stack)
	}

	pub fn decompose(&self, stack: &ShapeStack) -> Result<Estimate, Error> {
		let extents = stack.extents();
		let flattened = flatten::flatten(stack, self.settings.parallel_threshold)?;
		log::debug!("first sample magnitude {}", flattened.magnitudes[0]);

		let branch = Branch::select(extents.samples(), extents.features());
		log::debug!(
			"{} samples with {} features, {:?}",
			extents.samples(),
			extents.features(),
			branch
		);

		let component = match branch {
			Branch::SamplesRich => samples_rich::component(&flattened.matrix, &self.settings)?,
			Branch::FeatureRich => feature_rich::component(&flattened.matrix, &self.settings)?,
		};

		let total = flattened.total;
		let weights = flattened
			.magnitudes
			.zip_map(&component.vector, |magnitude, value| {
				((total / magnitude).sqrt() * value).abs()
			});
		if let Some(sample) = weights.iter().position(|w| !w.is_finite()) {
			return Err(Degenerate::NonFiniteWeight { sample }.into());
		}

		Ok(Estimate {
			weights,
			branch,
			eigenvalues: component.eigenvalues,
			component: component.index,
		})
	}
}
