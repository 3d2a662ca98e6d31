use crate::Error;

/// Extents of a landmark stack, `landmarks x dimensions x samples`.
///
/// Every extent is positive and the total length fits in `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawExtents", into = "RawExtents")]
pub struct Extents {
	landmarks: usize,
	dimensions: usize,
	samples: usize,
}

#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct RawExtents {
	landmarks: usize,
	dimensions: usize,
	samples: usize,
}

impl TryFrom<RawExtents> for Extents {
	type Error = Error;

	fn try_from(raw: RawExtents) -> Result<Self, Error> {
		Self::new(raw.landmarks, raw.dimensions, raw.samples)
	}
}

impl From<Extents> for RawExtents {
	fn from(extents: Extents) -> Self {
		Self {
			landmarks: extents.landmarks,
			dimensions: extents.dimensions,
			samples: extents.samples,
		}
	}
}

impl Extents {
	pub fn new(landmarks: usize, dimensions: usize, samples: usize) -> Result<Self, Error> {
		if landmarks == 0 || dimensions == 0 || samples == 0 {
			return Err(Error::InvalidShape(format!(
				"extents must be positive, got {}x{}x{}",
				landmarks, dimensions, samples
			)));
		}
		landmarks
			.checked_mul(dimensions)
			.and_then(|features| features.checked_mul(samples))
			.ok_or_else(|| Error::InvalidShape(String::from("extents overflow the address space")))?;
		Ok(Self { landmarks, dimensions, samples })
	}

	/// Extents from a host dimension attribute, which uses signed integers.
	pub fn from_host(dims: &[i32]) -> Result<Self, Error> {
		let &[landmarks, dimensions, samples] = dims else {
			return Err(Error::InvalidShape(format!(
				"expected 3 dimensions, got {}",
				dims.len()
			)));
		};
		let convert = |value: i32| {
			usize::try_from(value)
				.ok()
				.filter(|&value| value > 0)
				.ok_or_else(|| Error::InvalidShape(format!("dimension {} is not positive", value)))
		};
		Self::new(convert(landmarks)?, convert(dimensions)?, convert(samples)?)
	}

	pub fn landmarks(&self) -> usize {
		self.landmarks
	}

	pub fn dimensions(&self) -> usize {
		self.dimensions
	}

	pub fn samples(&self) -> usize {
		self.samples
	}

	/// Values per sample, `landmarks * dimensions`.
	pub fn features(&self) -> usize {
		self.landmarks * self.dimensions
	}

	/// Total number of values in the stack.
	pub fn len(&self) -> usize {
		self.features() * self.samples
	}

	/// Always false, extents are positive.
	pub fn is_empty(&self) -> bool {
		false
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn host_dims() {
		let extents = Extents::from_host(&[5, 3, 7]).unwrap();
		assert_eq!(extents, Extents::new(5, 3, 7).unwrap());
		assert_eq!(extents.landmarks(), 5);
		assert_eq!(extents.dimensions(), 3);
		assert_eq!(extents.samples(), 7);
		assert_eq!(extents.features(), 15);
		assert_eq!(extents.len(), 105);
	}

	#[test]
	fn rejects_non_positive() {
		assert!(matches!(Extents::from_host(&[5, 0, 7]), Err(Error::InvalidShape(_))));
		assert!(matches!(Extents::from_host(&[-1, 3, 7]), Err(Error::InvalidShape(_))));
		assert!(matches!(Extents::new(1, 1, 0), Err(Error::InvalidShape(_))));
		assert!(matches!(Extents::new(0, 3, 2), Err(Error::InvalidShape(_))));
	}

	#[test]
	fn rejects_wrong_rank() {
		assert!(Extents::from_host(&[5, 3]).is_err());
		assert!(Extents::from_host(&[5, 3, 2, 1]).is_err());
	}

	#[test]
	fn rejects_overflow() {
		assert!(Extents::new(usize::MAX, 2, 1).is_err());
		assert!(Extents::new(2, 1, usize::MAX).is_err());
	}

	#[test]
	fn deserialize_validates() {
		let extents: Extents =
			serde_json::from_str(r#"{ "landmarks": 4, "dimensions": 2, "samples": 3 }"#).unwrap();
		assert_eq!(extents, Extents::new(4, 2, 3).unwrap());

		let zero_landmarks =
			serde_json::from_str::<Extents>(r#"{ "landmarks": 0, "dimensions": 3, "samples": 2 }"#);
		assert!(zero_landmarks.is_err());
		let zero_samples =
			serde_json::from_str::<Extents>(r#"{ "landmarks": 2, "dimensions": 1, "samples": 0 }"#);
		assert!(zero_samples.is_err());
		let overflow = serde_json::from_str::<Extents>(&format!(
			r#"{{ "landmarks": {}, "dimensions": 2, "samples": 1 }}"#,
			usize::MAX
		));
		assert!(overflow.is_err());
	}

	#[test]
	fn serialize_round_trip() {
		let extents = Extents::new(4, 2, 3).unwrap();
		let json = serde_json::to_string(&extents).unwrap();
		assert_eq!(serde_json::from_str::<Extents>(&json).unwrap(), extents);
	}
}
