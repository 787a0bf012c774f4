use crate::config::*;
use crate::geometry::Intersection;
use crate::math::*;
use crate::tracer::Tracer;

impl<'s> Tracer<'s> {
	pub(crate) fn shade(&mut self, level: u32, weight: f32, ray: Ray, its: &Intersection) -> Vec3 {
		match self.config.mode {
			ShadingMode::Recursive => self.shade_recursive(level, weight, ray, its),
			ShadingMode::Local => self.shade_local(ray, its),
			ShadingMode::Shadowed => self.shade_shadowed(its),
			ShadingMode::Diffuse => self.shade_diffuse(its),
			ShadingMode::Depth => self.shade_depth(its),
			ShadingMode::Normal => shade_normal(its),
			ShadingMode::Mask => Vec3::thrice(1.0),
		}
	}

	/// Colour of rays escaping the scene
	pub fn shade_background(&self, _ray: Ray) -> Vec3 {
		self.config.background
	}

	/// Ambient and diffuse terms of every light, ignoring occlusion
	pub fn shade_diffuse(&self, its: &Intersection) -> Vec3 {
		let surf = its.surface;
		let mut color = Vec3::zero();
		for light in self.scene.lights() {
			color += surf.ambient * light.ambient;
			let (to_light, _) = Vec3::dir_and_dist(its.point, light.position);
			let n_dot_l = Vec3::dot(its.normal, to_light).max(0.0);
			color += surf.diffuse * light.diffuse * n_dot_l;
		}
		color.clamp(0.0, 1.0)
	}

	/// Ambient and diffuse terms, the latter only for lights visible from the hit
	pub fn shade_shadowed(&mut self, its: &Intersection) -> Vec3 {
		let scene = self.scene;
		let surf = its.surface;
		let mut color = Vec3::zero();
		for light in scene.lights() {
			color += surf.ambient * light.ambient;
			let (to_light, dist) = Vec3::dir_and_dist(its.point, light.position);
			if self.light_visible(its.point, to_light, dist) {
				let n_dot_l = Vec3::dot(its.normal, to_light).max(0.0);
				color += surf.diffuse * light.diffuse * n_dot_l;
			}
			color = color.clamp(0.0, 1.0);
		}
		color.clamp(0.0, 1.0)
	}

	/// Phong model: ambient for every light, diffuse and specular for the
	/// lights visible from the hit
	pub fn shade_local(&mut self, ray: Ray, its: &Intersection) -> Vec3 {
		let scene = self.scene;
		let surf = its.surface;
		let view = -ray.direction.normalized();
		let mut color = Vec3::zero();
		for light in scene.lights() {
			color += surf.ambient * light.ambient;

			let (to_light, dist) = Vec3::dir_and_dist(its.point, light.position);
			if self.light_visible(its.point, to_light, dist) {
				let n_dot_l = Vec3::dot(its.normal, to_light).max(0.0);
				color += surf.diffuse * light.diffuse * n_dot_l;

				let half = (view + to_light).normalized();
				let n_dot_h = Vec3::dot(its.normal, half).max(0.0);
				color += surf.specular * light.specular * n_dot_h.powf(surf.shininess);
			}
			color = color.clamp(0.0, 1.0);
		}
		color.clamp(0.0, 1.0)
	}

	/// Grey level going linearly from white at `depth_near` to black at `depth_far`
	pub fn shade_depth(&self, its: &Intersection) -> Vec3 {
		let near = self.config.depth_near;
		let far = self.config.depth_far;
		Vec3::thrice((far - its.distance) / (far - near)).clamp(0.0, 1.0)
	}

	/// Phong model plus the light reflected and refracted by the surface.
	///
	/// Bounces stop at `max_level`, or as soon as their weight in the final
	/// pixel drops to `min_weight`.
	pub fn shade_recursive(&mut self, level: u32, weight: f32, ray: Ray, its: &Intersection) -> Vec3 {
		let mut color = self.shade_local(ray, its);

		let next = level + 1;
		if next >= self.config.max_level || next >= RECURSION_CEILING {
			return color;
		}

		let surf = its.surface;
		let dir = ray.direction.normalized();
		let eps = self.config.ray_epsilon;

		if surf.reflectivity * weight > self.config.min_weight {
			let reflected = Vec3::reflect(dir, its.normal);
			let bounce = self.trace(next, weight * surf.reflectivity, Ray::offset(its.point, reflected, eps));
			color = (color + bounce.color * surf.reflectivity).clamp(0.0, 1.0);
		}

		if surf.transparency * weight > self.config.min_weight {
			// normals point outwards: a ray going along the normal is leaving the primitive
			let (normal, eta) = if Vec3::dot(dir, its.normal) < 0.0 {
				(its.normal, 1.0 / surf.ior)
			} else {
				(-its.normal, surf.ior)
			};
			if let Some(refracted) = Vec3::refract(dir, normal, eta) {
				let bounce = self.trace(next, weight * surf.transparency, Ray::offset(its.point, refracted, eps));
				color = (color + bounce.color * surf.transparency).clamp(0.0, 1.0);
			}
		}

		color
	}

	/// Cast a shadow ray from `point` towards a light `dist` away in direction `to_light`
	fn light_visible(&mut self, point: Vec3, to_light: Vec3, dist: f32) -> bool {
		let eps = self.config.ray_epsilon;
		let probe = self.trace(SHADOW_LEVEL, 1.0, Ray::offset(point, to_light, eps));
		let occluded = probe.hit && probe.distance < dist - eps;
		if occluded {
			self.stats.shadowed += 1;
		} else {
			self.stats.lit += 1;
		}
		!occluded
	}
}

/// Unit normal mapped from [-1, 1] to [0, 1] per channel
pub fn shade_normal(its: &Intersection) -> Vec3 {
	((its.normal + Vec3::thrice(1.0)) * 0.5).clamp(0.0, 1.0)
}
