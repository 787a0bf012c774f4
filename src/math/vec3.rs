use std::ops::{Add, AddAssign, Sub, Mul, Div, Neg};
use serde_derive::{Serialize, Deserialize};

/// Three floats used as a point, a direction or an RGB colour.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Vec3 {
	pub x: f32,
	pub y: f32,
	pub z: f32,
}

impl Vec3 {
	#[inline(always)]
	pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
		Vec3 { x, y, z }
	}

	#[inline(always)]
	pub fn zero() -> Vec3 {
		Vec3 { x: 0.0, y: 0.0, z: 0.0 }
	}

	#[inline(always)]
	pub fn thrice(v: f32) -> Vec3 {
		Vec3 { x: v, y: v, z: v }
	}

	#[inline(always)]
	pub fn dot(lhs: Vec3, rhs: Vec3) -> f32 {
		(lhs * rhs).sum()
	}

	#[inline(always)]
	pub fn cross(lhs: Vec3, rhs: Vec3) -> Vec3 {
		Vec3 {
			x: lhs.y * rhs.z - lhs.z * rhs.y,
			y: lhs.z * rhs.x - lhs.x * rhs.z,
			z: lhs.x * rhs.y - lhs.y * rhs.x
		}
	}

	#[inline(always)]
	pub fn length(self) -> f32 {
		Vec3::dot(self, self).sqrt()
	}

	/// Unit vector in the same direction; the zero vector maps to itself.
	#[inline(always)]
	pub fn normalized(self) -> Vec3 {
		let l = self.length();
		if l > 0.0 { self / l } else { Vec3::zero() }
	}

	/// Unit direction from `p1` to `p2` and the distance between them
	#[inline(always)]
	pub fn dir_and_dist(p1: Vec3, p2: Vec3) -> (Vec3, f32) {
		let d = p2 - p1;
		(d.normalized(), d.length())
	}

	#[inline(always)]
	pub fn clamp(self, lo: f32, hi: f32) -> Vec3 {
		// NaN channels end up at `lo`
		self.map(|v| if v > lo { v.min(hi) } else { lo })
	}

	#[inline(always)]
	pub fn sum(self) -> f32 {
		self.x + self.y + self.z
	}

	#[inline(always)]
	pub fn min_elem(self) -> f32 {
		self.x.min(self.y).min(self.z)
	}

	#[inline(always)]
	pub fn max_elem(self) -> f32 {
		self.x.max(self.y).max(self.z)
	}

	#[inline(always)]
	pub fn has_nan(self) -> bool {
		self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
	}

	#[inline(always)]
	pub fn all_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
	}

	#[inline(always)]
	pub fn map<F>(self, f: F) -> Vec3
		where F : Fn(f32) -> f32
	{
		Vec3 {
			x: f(self.x),
			y: f(self.y),
			z: f(self.z),
		}
	}

	/// Mirror `dir` about the plane of normal `normal`
	#[inline(always)]
	pub fn reflect(dir: Vec3, normal: Vec3) -> Vec3 {
		dir - normal * (2.0 * Vec3::dot(dir, normal))
	}

	/// Bend the unit direction `dir` through an interface of unit normal `normal`
	/// facing against `dir`, with `eta` the ratio of the incident over the
	/// transmitted index of refraction. Returns `None` on total internal reflection.
	pub fn refract(dir: Vec3, normal: Vec3, eta: f32) -> Option<Vec3> {
		let cos_i = -Vec3::dot(dir, normal);
		let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
		if k < 0.0 {
			return None;
		}
		Some((dir * eta + normal * (eta * cos_i - k.sqrt())).normalized())
	}
}

impl Add for Vec3 {
	type Output = Vec3;
	#[inline(always)]
	fn add(self, rhs: Vec3) -> Vec3 {
		Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
	}
}

impl AddAssign for Vec3 {
	#[inline(always)]
	fn add_assign(&mut self, rhs: Vec3) {
		*self = *self + rhs;
	}
}

impl Sub for Vec3 {
	type Output = Vec3;
	#[inline(always)]
	fn sub(self, rhs: Vec3) -> Vec3 {
		Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
	}
}

/// Componentwise product, used to modulate colours
impl Mul for Vec3 {
	type Output = Vec3;
	#[inline(always)]
	fn mul(self, rhs: Vec3) -> Vec3 {
		Vec3 { x: self.x * rhs.x, y: self.y * rhs.y, z: self.z * rhs.z }
	}
}

impl Mul<f32> for Vec3 {
	type Output = Vec3;
	#[inline(always)]
	fn mul(self, rhs: f32) -> Vec3 {
		Vec3 { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
	}
}

impl Mul<Vec3> for f32 {
	type Output = Vec3;
	#[inline(always)]
	fn mul(self, rhs: Vec3) -> Vec3 {
		Vec3 { x: self * rhs.x, y: self * rhs.y, z: self * rhs.z }
	}
}

impl Div<f32> for Vec3 {
	type Output = Vec3;
	#[inline(always)]
	fn div(self, rhs: f32) -> Vec3 {
		let s = 1.0 / rhs;
		self * s
	}
}

impl Neg for Vec3 {
	type Output = Vec3;
	#[inline(always)]
	fn neg(self) -> Vec3 {
		Vec3 { x: -self.x, y: -self.y, z: -self.z }
	}
}

#[test]
fn test_normalize_zero_is_zero() {
	assert_eq!(Vec3::zero().normalized(), Vec3::zero());
}

#[test]
fn test_normalize_unit_length() {
	let n = Vec3::new(3.0, -4.0, 12.0).normalized();
	assert!((n.length() - 1.0).abs() < 1e-6);
	assert!((n.x - 3.0 / 13.0).abs() < 1e-6);
}

#[test]
fn test_clamp_is_total() {
	let c = Vec3::new(-2.0, 0.5, 7.0).clamp(0.0, 1.0);
	assert_eq!(c, Vec3::new(0.0, 0.5, 1.0));
	let c = Vec3::new(std::f32::NAN, std::f32::INFINITY, std::f32::NEG_INFINITY).clamp(0.0, 1.0);
	assert_eq!(c, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_cross_is_orthogonal() {
	let a = Vec3::new(1.0, 2.0, 3.0);
	let b = Vec3::new(-1.0, 0.5, 2.0);
	let c = Vec3::cross(a, b);
	assert!(Vec3::dot(a, c).abs() < 1e-5);
	assert!(Vec3::dot(b, c).abs() < 1e-5);
	assert_eq!(Vec3::cross(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_reflect() {
	let d = Vec3::new(1.0, -1.0, 0.0).normalized();
	let r = Vec3::reflect(d, Vec3::new(0.0, 1.0, 0.0));
	assert!((r - Vec3::new(1.0, 1.0, 0.0).normalized()).length() < 1e-6);
}

#[test]
fn test_refract_straight_through() {
	let d = Vec3::new(0.0, 0.0, -1.0);
	let n = Vec3::new(0.0, 0.0, 1.0);
	let t = Vec3::refract(d, n, 1.0 / 1.5).unwrap();
	assert!((t - d).length() < 1e-6);
}

#[test]
fn test_refract_snell() {
	let d = Vec3::new(1.0, -1.0, 0.0).normalized();
	let n = Vec3::new(0.0, 1.0, 0.0);
	let eta = 1.0 / 1.5;
	let t = Vec3::refract(d, n, eta).unwrap();
	// sin(theta_t) = eta * sin(theta_i)
	let sin_i = d.x;
	assert!((t.x - eta * sin_i).abs() < 1e-5);
	assert!(t.y < 0.0);
	assert!((t.length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_refract_total_internal_reflection() {
	let d = Vec3::new(1.0, -0.1, 0.0).normalized();
	let n = Vec3::new(0.0, 1.0, 0.0);
	assert!(Vec3::refract(d, n, 1.5).is_none());
}
