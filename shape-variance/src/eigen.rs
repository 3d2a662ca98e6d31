use nalgebra as na;

use crate::{Error, Settings};

/// Eigenpairs of a symmetric matrix, largest eigenvalue first.
pub struct Spectrum {
	pub values: na::DVector<f64>,
	pub vectors: na::DMatrix<f64>,
}

// only the lower triangle of `matrix` is read
pub fn descending(matrix: na::DMatrix<f64>, settings: &Settings) -> Result<Spectrum, Error> {
	let size = matrix.nrows();
	if matrix.iter().any(|v| !v.is_finite()) {
		log::warn!("{}x{} matrix with non-finite entries", size, size);
		return Err(Error::Decomposition { size });
	}

	let Some(eigen) = na::SymmetricEigen::try_new(matrix, settings.eigen_epsilon, settings.max_iterations) else {
		log::warn!(
			"eigen-decomposition of {}x{} matrix did not converge in {} iterations",
			size,
			size,
			settings.max_iterations
		);
		return Err(Error::Decomposition { size });
	};

	let mut order = (0..size).collect::<Vec<_>>();
	order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

	Ok(Spectrum {
		values: na::DVector::from_iterator(size, order.iter().map(|&i| eigen.eigenvalues[i])),
		vectors: eigen.eigenvectors.select_columns(&order),
	})
}
