use log::debug;

use crate::error::SceneError;
use crate::geometry::*;
use crate::material::Surface;
use crate::math::*;

/// Represent vertex indices in triangles; 2^32 vertices should be enough
pub type Index = u32;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
	pub idxs: [Index; 3],
	/// index into the surfaces of the mesh
	pub surface: usize,
}

impl Triangle {
	pub fn new(idxs: [Index; 3], surface: usize) -> Triangle {
		Triangle { idxs, surface }
	}
}

// N.B. When present, there is a 1-1 correspondence between vertices and normals.
// Those are addressed through the indices stored in triangles. Without normals,
// hits report the geometric normal of the face.
#[derive(Clone, Debug)]
pub struct Mesh {
	vertices: Vec<Vec3>,
	normals: Vec<Vec3>,
	triangles: Vec<Triangle>,
	surfaces: Vec<Surface>,
	triangles_e1: Vec<Vec3>,
	triangles_e2: Vec<Vec3>,
}

impl Mesh {
	pub fn new(vertices: Vec<Vec3>, normals: Vec<Vec3>, triangles: Vec<Triangle>, surfaces: Vec<Surface>) -> Result<Mesh, SceneError> {
		if !normals.is_empty() && normals.len() != vertices.len() {
			return Err(SceneError::NormalCountMismatch { normals: normals.len(), vertices: vertices.len() });
		}
		if !triangles.is_empty() && surfaces.is_empty() {
			return Err(SceneError::MissingSurface);
		}
		if let Some(s) = surfaces.iter().find(|s| !(s.ior > 0.0)) {
			return Err(SceneError::InvalidIor(s.ior));
		}
		for (i, t) in triangles.iter().enumerate() {
			if let Some(&index) = t.idxs.iter().find(|&&idx| idx as usize >= vertices.len()) {
				return Err(SceneError::VertexOutOfRange { triangle: i, index, count: vertices.len() });
			}
			if t.surface >= surfaces.len() {
				return Err(SceneError::SurfaceOutOfRange { triangle: i, index: t.surface, count: surfaces.len() });
			}
		}

		let normals = normals.into_iter().map(Vec3::normalized).collect();
		let (triangles_e1, triangles_e2) = Mesh::compute_edges(&vertices[..], &triangles[..]);
		debug!("Mesh with {} vertices, {} triangles, {} surfaces", vertices.len(), triangles.len(), surfaces.len());

		Ok(Mesh {
			vertices,
			normals,
			triangles,
			surfaces,
			triangles_e1,
			triangles_e2,
		})
	}

	/// Mesh where every triangle uses the same surface
	pub fn with_surface(vertices: Vec<Vec3>, normals: Vec<Vec3>, idxs: Vec<[Index; 3]>, surface: Surface) -> Result<Mesh, SceneError> {
		let triangles = idxs.into_iter().map(|idxs| Triangle::new(idxs, 0)).collect();
		Mesh::new(vertices, normals, triangles, vec![surface])
	}

	pub fn nb_triangles(&self) -> usize {
		self.triangles.len()
	}

	fn compute_edges(vertices: &[Vec3], triangles: &[Triangle]) -> (Vec<Vec3>, Vec<Vec3>) {
		// cache triangle edges
		let mut triangles_e1 = Vec::with_capacity(triangles.len());
		let mut triangles_e2 = Vec::with_capacity(triangles.len());
		for t in triangles {
			triangles_e1.push(vertices[t.idxs[1] as usize] - vertices[t.idxs[0] as usize]);
			triangles_e2.push(vertices[t.idxs[2] as usize] - vertices[t.idxs[0] as usize]);
		}
		(triangles_e1, triangles_e2)
	}

	/// Möller-Trumbore test; returns the ray parameter and barycentric
	/// coordinates of the hit, or `None` on a miss or a hit behind the origin
	fn intersect_triangle(&self, ray: Ray, i: usize) -> Option<(f32, (f32, f32))> {
		let v0 = self.vertices[self.triangles[i].idxs[0] as usize];
		let edge1 = self.triangles_e1[i];
		let edge2 = self.triangles_e2[i];

		let p = Vec3::cross(ray.direction, edge2);
		let det = Vec3::dot(edge1, p);
		// ray parallel to the triangle plane, or degenerate triangle
		if det.abs() < 1e-12 {
			return None;
		}
		let idet = 1.0 / det;

		let t = ray.origin - v0;
		let u = Vec3::dot(t, p) * idet;
		if u < 0.0 || u > 1.0 {
			return None;
		}

		let q = Vec3::cross(t, edge1);
		let v = Vec3::dot(ray.direction, q) * idet;
		if v < 0.0 || (u + v) > 1.0 {
			return None;
		}

		let dist = Vec3::dot(edge2, q) * idet;
		if dist >= 0.0 { Some((dist, (u, v))) } else { None }
	}

	fn normal_at(&self, i: usize, (u, v): (f32, f32)) -> Vec3 {
		if self.normals.is_empty() {
			return Vec3::cross(self.triangles_e1[i], self.triangles_e2[i]).normalized();
		}
		let idxs = self.triangles[i].idxs;
		let n0 = self.normals[idxs[0] as usize];
		let n1 = self.normals[idxs[1] as usize];
		let n2 = self.normals[idxs[2] as usize];
		(n0 * (1.0 - u - v) + n1 * u + n2 * v).normalized()
	}
}

impl Shape for Mesh {
	fn intersect(&self, ray: Ray) -> Option<Intersection<'_>> {
		let mut closest: Option<(f32, usize, (f32, f32))> = None;
		for i in 0..self.triangles.len() {
			if let Some((t, uv)) = self.intersect_triangle(ray, i) {
				if closest.map_or(true, |(t_min, _, _)| t < t_min) {
					closest = Some((t, i, uv));
				}
			}
		}

		closest.map(|(t, i, uv)| Intersection {
			point: ray.point_at(t),
			normal: self.normal_at(i, uv),
			distance: t,
			surface: &self.surfaces[self.triangles[i].surface],
		})
	}
}
