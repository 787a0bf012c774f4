use serde_derive::{Serialize, Deserialize};
use crate::math::*;

/// Optical properties of a primitive, shared by every hit on it.
///
/// Colour coefficients are expected in `[0, 1]` but nothing enforces it;
/// shading clamps its result instead.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Surface {
	pub ambient: Vec3,
	pub diffuse: Vec3,
	pub specular: Vec3,
	/// Phong exponent
	pub shininess: f32,
	pub reflectivity: f32,
	pub transparency: f32,
	/// Index of Refraction
	pub ior: f32,
}

impl Default for Surface {
	fn default() -> Surface {
		Surface {
			ambient: Vec3::thrice(0.1),
			diffuse: Vec3::thrice(0.7),
			specular: Vec3::zero(),
			shininess: 1.0,
			reflectivity: 0.0,
			transparency: 0.0,
			ior: 1.0,
		}
	}
}

impl Surface {
	/// Dull surface of a single colour
	pub fn matte(color: Vec3) -> Surface {
		Surface {
			ambient: color * 0.1,
			diffuse: color,
			..Default::default()
		}
	}

	pub fn with_specular(self, specular: Vec3, shininess: f32) -> Surface {
		Surface { specular, shininess, ..self }
	}

	pub fn with_reflectivity(self, reflectivity: f32) -> Surface {
		Surface { reflectivity, ..self }
	}

	pub fn with_transparency(self, transparency: f32, ior: f32) -> Surface {
		Surface { transparency, ior, ..self }
	}
}
