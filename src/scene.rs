use log::{debug, warn};

use crate::geometry::*;
use crate::light::Light;
use crate::math::*;
use crate::mesh::Mesh;
use crate::primitive::Sphere;

pub enum Object {
	Mesh(Mesh),
	Sphere(Sphere),
}

impl Shape for Object {
	fn intersect(&self, ray: Ray) -> Option<Intersection<'_>> {
		match *self {
			Object::Mesh(ref mesh) => mesh.intersect(ray),
			Object::Sphere(ref sphere) => sphere.intersect(ray),
		}
	}
}

/// Finds the hit closest to the ray origin among a list of objects.
///
/// Implementations must return the hit of smallest distance and, among hits
/// at the same distance, the one of the object listed first.
pub trait Resolver: Send + Sync {
	fn nearest<'a>(&self, objects: &'a [Object], ray: Ray) -> Option<Intersection<'a>>;
}

/// Brute force resolver, testing every object
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearScan;

impl Resolver for LinearScan {
	fn nearest<'a>(&self, objects: &'a [Object], ray: Ray) -> Option<Intersection<'a>> {
		let mut closest: Option<Intersection<'a>> = None;
		for object in objects {
			if let Some(its) = object.intersect(ray) {
				match closest {
					Some(Intersection { distance: t_min, .. }) if its.distance >= t_min => {}
					_ => closest = Some(its),
				}
			}
		}
		closest
	}
}

/// Immutable description of everything a ray can meet.
///
/// Meshes are tested before spheres, each in the order they were given.
pub struct Scene {
	objects: Vec<Object>,
	lights: Vec<Light>,
	resolver: Box<dyn Resolver>,
}

impl Scene {
	pub fn new(meshes: Vec<Mesh>, spheres: Vec<Sphere>, lights: Vec<Light>) -> Scene {
		Scene::with_resolver(meshes, spheres, lights, Box::new(LinearScan))
	}

	pub fn with_resolver(meshes: Vec<Mesh>, spheres: Vec<Sphere>, lights: Vec<Light>, resolver: Box<dyn Resolver>) -> Scene {
		debug!("Scene with {} meshes, {} spheres and {} lights", meshes.len(), spheres.len(), lights.len());
		if lights.is_empty() {
			warn!("Scene has no light, only the background will be visible");
		}

		let objects = meshes.into_iter().map(Object::Mesh)
			.chain(spheres.into_iter().map(Object::Sphere))
			.collect();

		Scene { objects, lights, resolver }
	}

	pub fn objects(&self) -> &[Object] {
		&self.objects
	}

	pub fn lights(&self) -> &[Light] {
		&self.lights
	}

	pub fn intersect(&self, ray: Ray) -> Option<Intersection<'_>> {
		self.resolver.nearest(&self.objects, ray)
	}
}
