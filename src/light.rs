use serde_derive::{Serialize, Deserialize};
use crate::math::*;

/// Point light; no falloff with distance
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
	pub position: Vec3,
	pub ambient: Vec3,
	pub diffuse: Vec3,
	pub specular: Vec3,
}

impl Light {
	/// White light of the given intensity, with a tenth of it as ambient term
	pub fn white(position: Vec3, intensity: f32) -> Light {
		Light {
			position,
			ambient: Vec3::thrice(0.1 * intensity),
			diffuse: Vec3::thrice(intensity),
			specular: Vec3::thrice(intensity),
		}
	}
}
