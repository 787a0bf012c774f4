use std::io;
use thiserror::Error;

/// Rejection of malformed scene input, reported before any ray is traced
#[derive(Debug, Error)]
pub enum SceneError {
	#[error("sphere radius must be positive and finite, got {0}")]
	InvalidRadius(f32),
	#[error("sphere center is not finite")]
	InvalidCenter,
	#[error("triangle {triangle} references vertex {index} but the mesh has {count} vertices")]
	VertexOutOfRange { triangle: usize, index: u32, count: usize },
	#[error("triangle {triangle} references surface {index} but the mesh has {count} surfaces")]
	SurfaceOutOfRange { triangle: usize, index: usize, count: usize },
	#[error("mesh has {normals} normals for {vertices} vertices")]
	NormalCountMismatch { normals: usize, vertices: usize },
	#[error("mesh has triangles but no surface")]
	MissingSurface,
	#[error("index of refraction must be positive, got {0}")]
	InvalidIor(f32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read render configuration: {0}")]
	Io(#[from] io::Error),
	#[error("malformed render configuration: {0}")]
	Json(#[from] serde_json::Error),
	#[error("max_level must be in 1..={max}, got {got}")]
	InvalidMaxLevel { got: u32, max: u32 },
	#[error("min_weight must be a non-negative number, got {0}")]
	InvalidMinWeight(f32),
	#[error("depth range is empty: near {near} >= far {far}")]
	EmptyDepthRange { near: f32, far: f32 },
	#[error("ray_epsilon must be positive, got {0}")]
	InvalidEpsilon(f32),
}
