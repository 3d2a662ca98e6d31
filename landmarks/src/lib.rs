#![doc = include_str!("../readme.md")]

mod cube;
mod extents;
mod stack;

pub use cube::{mean_shape, sum_cube};
pub use extents::Extents;
pub use stack::{Samples, ShapeStack};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
	#[error("Invalid shape: {0}")]
	InvalidShape(String),

	#[error("Buffer is not a valid f64 slice: {0:?}")]
	InvalidBuffer(bytemuck::PodCastError),
}
