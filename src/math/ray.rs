use crate::math::Vec3;

/// Half-line `origin + t * direction` for `t >= 0`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
	pub origin: Vec3,
	pub direction: Vec3,
}

impl Ray {
	pub fn new(origin: Vec3, direction: Vec3) -> Ray {
		Ray { origin, direction }
	}

	/// Ray starting slightly past `origin` along `direction`, so that it does
	/// not hit the surface it is cast from
	pub fn offset(origin: Vec3, direction: Vec3, eps: f32) -> Ray {
		Ray { origin: origin + direction * eps, direction }
	}

	pub fn point_at(&self, t: f32) -> Vec3 {
		self.origin + self.direction * t
	}
}

#[test]
fn test_point_at() {
	let r = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -2.0));
	assert_eq!(r.point_at(0.0), r.origin);
	assert_eq!(r.point_at(1.5), Vec3::new(1.0, 2.0, 0.0));
}

#[test]
fn test_offset_moves_along_direction() {
	let d = Vec3::new(0.0, 1.0, 0.0);
	let r = Ray::offset(Vec3::zero(), d, 1e-3);
	assert_eq!(r.origin, Vec3::new(0.0, 1e-3, 0.0));
	assert_eq!(r.direction, d);
}
