use crate::math::Vec3;

/// Floating-point RGBA raster, rows stored top to bottom
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
	pub width: usize,
	pub height: usize,
	pixels: Vec<[f32; 4]>,
}

impl Image {
	pub fn new(width: usize, height: usize) -> Image {
		Image {
			width,
			height,
			pixels: vec![[0.0; 4]; width * height],
		}
	}

	pub fn get(&self, x: usize, y: usize) -> [f32; 4] {
		self.pixels[self.width * y + x]
	}

	pub fn color(&self, x: usize, y: usize) -> Vec3 {
		let [r, g, b, _] = self.get(x, y);
		Vec3::new(r, g, b)
	}

	pub fn set(&mut self, x: usize, y: usize, color: Vec3) {
		self.pixels[self.width * y + x] = rgba(color);
	}

	pub fn pixels(&self) -> &[[f32; 4]] {
		&self.pixels
	}

	pub(crate) fn pixels_mut(&mut self) -> &mut [[f32; 4]] {
		&mut self.pixels
	}

	/// 8 bits per channel copy of the image, channels clamped to [0, 1]
	pub fn to_rgba8(&self) -> Vec<u8> {
		self.pixels.iter()
			.flat_map(|p| p.iter().map(|&v| (v.max(0.0).min(1.0) * 255.0 + 0.5) as u8))
			.collect()
	}
}

/// Opaque pixel of the given colour
pub fn rgba(color: Vec3) -> [f32; 4] {
	[color.x, color.y, color.z, 1.0]
}
