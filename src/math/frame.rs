use crate::math::Vec3;

/// Right-handed orthonormal basis -- Y is up, the viewer looks down -Z
#[derive(Copy, Clone, Debug)]
pub struct Frame(Vec3, Vec3, Vec3);

impl Frame {
	/// Basis of a viewer at `pos` looking at `target`; `up` only needs to be
	/// non-colinear with the viewing direction
	pub fn look_at(pos: Vec3, target: Vec3, up: Vec3) -> Frame {
		let back = (pos - target).normalized();
		let right = Vec3::cross(up, back).normalized();
		let up = Vec3::cross(back, right);
		Frame(right, up, back)
	}

	#[inline(always)]
	pub fn to_world(&self, v: Vec3) -> Vec3 {
		self.0 * v.x + self.1 * v.y + self.2 * v.z
	}

	#[inline(always)]
	pub fn to_local(&self, v: Vec3) -> Vec3 {
		Vec3::new(Vec3::dot(v, self.0), Vec3::dot(v, self.1), Vec3::dot(v, self.2))
	}
}

#[test]
fn test_look_at_down_negative_z_is_identity() {
	let f = Frame::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
	let v = Vec3::new(0.3, -0.2, 0.9);
	assert!((f.to_world(v) - v).length() < 1e-6);
}

#[test]
fn test_round_trip_local_world() {
	let f = Frame::look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.5, 0.0), Vec3::new(0.0, 1.0, 0.0));
	let v = Vec3::new(0.5, -1.5, 2.0);
	assert!((f.to_world(f.to_local(v)) - v).length() < 1e-5);
	// viewing direction maps to -Z
	let forward = (Vec3::new(-1.0, 0.5, 0.0) - Vec3::new(1.0, 2.0, 3.0)).normalized();
	assert!((f.to_local(forward) - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
}
