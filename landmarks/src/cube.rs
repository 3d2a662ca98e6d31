use nalgebra as na;

use crate::ShapeStack;

/// Element-wise sum of all sample matrices.
pub fn sum_cube(stack: &ShapeStack) -> na::DMatrix<f64> {
	let extents = stack.extents();
	let mut sum = na::DMatrix::zeros(extents.landmarks(), extents.dimensions());
	for index in 0..extents.samples() {
		sum += stack.sample_matrix(index);
	}
	sum
}

/// Arithmetic mean configuration.
pub fn mean_shape(stack: &ShapeStack) -> na::DMatrix<f64> {
	sum_cube(stack) / stack.samples_count() as f64
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sums_slices() {
		let values = [
			1.0, 2.0, 3.0, 4.0, //
			10.0, 20.0, 30.0, 40.0, //
			100.0, 200.0, 300.0, 400.0,
		];
		let stack = ShapeStack::from_host(&values, &[2, 2, 3]).unwrap();
		let sum = sum_cube(&stack);
		assert_eq!(sum, na::dmatrix![111.0, 333.0; 222.0, 444.0]);
		assert_eq!(mean_shape(&stack), na::dmatrix![37.0, 111.0; 74.0, 148.0]);
	}

	#[test]
	fn single_sample() {
		let values = [1.5, -2.0, 0.25];
		let stack = ShapeStack::from_host(&values, &[3, 1, 1]).unwrap();
		assert_eq!(sum_cube(&stack), na::dmatrix![1.5; -2.0; 0.25]);
	}
}
