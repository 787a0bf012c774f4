use crate::geometry::*;
use crate::material::Surface;
use crate::math::*;
use crate::error::SceneError;

#[derive(Clone, Debug)]
pub struct Sphere {
	position: Vec3,
	radius: f32,
	surface: Surface,
}

impl Sphere {
	pub fn new(position: Vec3, radius: f32, surface: Surface) -> Result<Sphere, SceneError> {
		if !(radius > 0.0 && radius.is_finite()) {
			return Err(SceneError::InvalidRadius(radius));
		}
		if !position.all_finite() {
			return Err(SceneError::InvalidCenter);
		}
		if !(surface.ior > 0.0) {
			return Err(SceneError::InvalidIor(surface.ior));
		}
		Ok(Sphere { position, radius, surface })
	}

	pub fn position(&self) -> Vec3 {
		self.position
	}

	pub fn radius(&self) -> f32 {
		self.radius
	}

	pub fn surface(&self) -> &Surface {
		&self.surface
	}
}

impl Shape for Sphere {
	fn intersect(&self, ray: Ray) -> Option<Intersection<'_>> {
		// solve |O + tD - C|² = r² for t; a == 1 for unit directions
		let to_sphere = ray.origin - self.position;
		let a = Vec3::dot(ray.direction, ray.direction);
		let b = Vec3::dot(ray.direction, to_sphere);
		let c = Vec3::dot(to_sphere, to_sphere) - self.radius * self.radius;
		let discriminant = b * b - a * c;
		if discriminant < 0.0 || a == 0.0 {
			return None;
		}

		let s = discriminant.sqrt();
		let t_near = (-b - s) / a;
		let t_far = (-b + s) / a;
		let t = if t_near >= 0.0 {
			t_near
		} else if t_far >= 0.0 {
			// origin inside the sphere
			t_far
		} else {
			return None;
		};

		let point = ray.point_at(t);
		Some(Intersection {
			point,
			normal: (point - self.position).normalized(),
			distance: t,
			surface: &self.surface,
		})
	}
}
