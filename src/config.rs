use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_derive::{Serialize, Deserialize};

use crate::error::ConfigError;
use crate::math::Vec3;

/// Deepest recursion level that may still be shaded. Rays traced at this
/// level or above only report whether they hit something.
pub const RECURSION_CEILING: u32 = 100;

/// Level at which shadow rays are traced
pub const SHADOW_LEVEL: u32 = RECURSION_CEILING + 1;

/// How hits are turned into colours
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
	/// Phong with shadows, plus reflection and refraction
	Recursive,
	/// Phong with shadows
	Local,
	/// Ambient and diffuse with shadows
	Shadowed,
	/// Ambient and diffuse, no shadows
	Diffuse,
	/// Grey level of the hit distance
	Depth,
	/// Normal mapped to RGB
	Normal,
	/// White wherever something is hit
	Mask,
}

impl Default for ShadingMode {
	fn default() -> ShadingMode {
		ShadingMode::Recursive
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
	pub mode: ShadingMode,
	/// Primary rays are at level 0; no bounce is traced at level `max_level - 1`
	pub max_level: u32,
	/// Bounces contributing less than this to the pixel are not traced
	pub min_weight: f32,
	pub background: Vec3,
	/// Hit distance shown white in depth mode
	pub depth_near: f32,
	/// Hit distance shown black in depth mode
	pub depth_far: f32,
	/// Offset of secondary ray origins along their direction
	pub ray_epsilon: f32,
}

impl Default for RenderConfig {
	fn default() -> RenderConfig {
		RenderConfig {
			mode: ShadingMode::default(),
			max_level: 5,
			min_weight: 0.01,
			background: Vec3::zero(),
			depth_near: 1.5,
			depth_far: 2.0,
			ray_epsilon: 1e-3,
		}
	}
}

impl RenderConfig {
	pub fn with_mode(self, mode: ShadingMode) -> RenderConfig {
		RenderConfig { mode, ..self }
	}

	pub fn validate(self) -> Result<RenderConfig, ConfigError> {
		if self.max_level == 0 || self.max_level > RECURSION_CEILING {
			return Err(ConfigError::InvalidMaxLevel { got: self.max_level, max: RECURSION_CEILING });
		}
		if !(self.min_weight >= 0.0) {
			return Err(ConfigError::InvalidMinWeight(self.min_weight));
		}
		if !(self.depth_near < self.depth_far) {
			return Err(ConfigError::EmptyDepthRange { near: self.depth_near, far: self.depth_far });
		}
		if !(self.ray_epsilon > 0.0) {
			return Err(ConfigError::InvalidEpsilon(self.ray_epsilon));
		}
		Ok(self)
	}

	/// Decode and validate a JSON configuration; missing fields take their default value
	pub fn from_json(json: &str) -> Result<RenderConfig, ConfigError> {
		let config: RenderConfig = serde_json::from_str(json)?;
		config.validate()
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<RenderConfig, ConfigError> {
		let config: RenderConfig = serde_json::from_reader(reader)?;
		config.validate()
	}

	pub fn load<P: AsRef<Path>>(path: P) -> Result<RenderConfig, ConfigError> {
		let file = BufReader::new(File::open(path)?);
		RenderConfig::from_reader(file)
	}
}
