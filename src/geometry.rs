use crate::math::*;
use crate::material::Surface;

/// Hit of a ray on a primitive
#[derive(Copy, Clone, Debug)]
pub struct Intersection<'a> {
	pub point: Vec3,
	/// unit normal, pointing out of the primitive
	pub normal: Vec3,
	/// ray parameter of the hit, never negative
	pub distance: f32,
	pub surface: &'a Surface,
}

pub trait Shape {
	/// Closest hit with a non-negative ray parameter, if any
	fn intersect(&self, ray: Ray) -> Option<Intersection<'_>>;
}
