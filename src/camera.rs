use crate::math::*;

/// Pinhole camera producing one ray through the center of each pixel.
/// Pixel `(0, 0)` is the upper-left corner of the image.
#[derive(Clone, Debug)]
pub struct Camera {
	pos: Vec3,
	frame: Frame,

	resolution: (usize, usize),
	ratio: f32,
	pixel_size: f32,

	plane_dist: f32,
}

impl Camera {
	/// `fov` is the horizontal field of view in degrees
	pub fn look_at(pos: Vec3, target: Vec3, up: Vec3, resolution: (usize, usize), fov: f32) -> Camera {
		let fov_rad = fov * PI / 180.0;

		Camera {
			pos,
			frame: Frame::look_at(pos, target, up),
			resolution,
			ratio: resolution.1 as f32 / resolution.0 as f32,
			pixel_size: 1.0 / resolution.0 as f32,
			plane_dist: 1.0 / (fov_rad * 0.5).tan(),
		}
	}

	pub fn make_ray(&self, pixel: (usize, usize)) -> Ray {
		let img_plane_pos = Vec3 {
			x: -1.0       + (pixel.0 as f32 + 0.5) * 2.0 * self.pixel_size,
			y: self.ratio - (pixel.1 as f32 + 0.5) * 2.0 * self.pixel_size,
			z: -self.plane_dist,
		};

		Ray {
			origin: self.pos,
			direction: self.frame.to_world(img_plane_pos).normalized(),
		}
	}

	pub fn resolution(&self) -> (usize, usize) {
		self.resolution
	}
}
