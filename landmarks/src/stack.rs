use nalgebra as na;

use crate::{Error, Extents};

/// Borrowed column-major stack of `samples` matrices, each `landmarks x dimensions`.
#[derive(Debug, Clone, Copy)]
pub struct ShapeStack<'a> {
	values: &'a [f64],
	extents: Extents,
}

impl<'a> ShapeStack<'a> {
	pub fn new(values: &'a [f64], extents: Extents) -> Result<Self, Error> {
		if values.len() != extents.len() {
			return Err(Error::InvalidShape(format!(
				"{} values do not fill {}x{}x{}",
				values.len(),
				extents.landmarks(),
				extents.dimensions(),
				extents.samples(),
			)));
		}
		Ok(Self { values, extents })
	}

	pub fn from_host(values: &'a [f64], dims: &[i32]) -> Result<Self, Error> {
		Self::new(values, Extents::from_host(dims)?)
	}

	/// View over native-endian `f64` bytes without copying.
	pub fn from_bytes(bytes: &'a [u8], extents: Extents) -> Result<Self, Error> {
		let values = bytemuck::try_cast_slice::<u8, f64>(bytes).map_err(Error::InvalidBuffer)?;
		Self::new(values, extents)
	}

	pub fn extents(&self) -> Extents {
		self.extents
	}

	pub fn values(&self) -> &'a [f64] {
		self.values
	}

	pub fn samples_count(&self) -> usize {
		self.extents.samples()
	}

	/// Column-stacked values of one sample.
	///
	/// # Panics
	/// Panics if `index >= self.samples_count()`.
	pub fn sample(&self, index: usize) -> &'a [f64] {
		let features = self.extents.features();
		&self.values[index * features..(index + 1) * features]
	}

	/// # Panics
	/// Panics if `index >= self.samples_count()`.
	pub fn sample_matrix(&self, index: usize) -> na::DMatrixView<'a, f64> {
		na::DMatrixView::from_slice(
			self.sample(index),
			self.extents.landmarks(),
			self.extents.dimensions(),
		)
	}

	/// Coordinate `dimension` of `landmark` in `sample`, `None` outside the extents.
	pub fn get(&self, landmark: usize, dimension: usize, sample: usize) -> Option<f64> {
		if landmark >= self.extents.landmarks()
			|| dimension >= self.extents.dimensions()
			|| sample >= self.extents.samples()
		{
			return None;
		}
		Some(self.sample(sample)[landmark + dimension * self.extents.landmarks()])
	}

	pub fn samples(&self) -> Samples<'a> {
		Samples {
			chunks: self.values.chunks_exact(self.extents.features()),
		}
	}

	/// Sum of squared coordinates of one sample.
	///
	/// # Panics
	/// Panics if `index >= self.samples_count()`.
	pub fn magnitude(&self, index: usize) -> f64 {
		self.sample(index).iter().map(|v| v * v).sum()
	}
}

pub struct Samples<'a> {
	chunks: std::slice::ChunksExact<'a, f64>,
}

impl<'a> Iterator for Samples<'a> {
	type Item = &'a [f64];

	fn next(&mut self) -> Option<Self::Item> {
		self.chunks.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.chunks.size_hint()
	}
}

impl<'a> ExactSizeIterator for Samples<'a> {}
