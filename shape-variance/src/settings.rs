#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentSelection {
	/// Eigenvector of the largest eigenvalue.
	#[default]
	Dominant,
	/// Historical selection, see the crate documentation.
	Compatible,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
	pub component: ComponentSelection,

	/// Convergence threshold of the symmetric eigen solver.
	pub eigen_epsilon: f64,

	/// Iteration limit of the symmetric eigen solver, 0 for no limit.
	pub max_iterations: usize,

	/// Sample count from which magnitudes are computed on the rayon pool.
	pub parallel_threshold: usize,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			component: ComponentSelection::Dominant,
			eigen_epsilon: f64::EPSILON,
			max_iterations: 0,
			parallel_threshold: 1024,
		}
	}
}

impl Settings {
	/// Parse settings from JSON, absent fields keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json() {
		let settings = Settings::from_json(r#"{ "component": "compatible", "max_iterations": 500 }"#).unwrap();
		assert_eq!(settings.component, ComponentSelection::Compatible);
		assert_eq!(settings.max_iterations, 500);
		assert_eq!(settings.eigen_epsilon, f64::EPSILON);
		assert_eq!(settings.parallel_threshold, 1024);
	}

	#[test]
	fn empty_json_is_default() {
		assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
	}

	#[test]
	fn unknown_component() {
		assert!(Settings::from_json(r#"{ "component": "largest" }"#).is_err());
	}
}
