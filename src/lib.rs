pub mod buffer;
pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod light;
pub mod material;
pub mod math;
pub mod mesh;
pub mod primitive;
pub mod scene;
pub mod shader;
pub mod tracer;

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use buffer::{rgba, Image};
use camera::Camera;
use config::RenderConfig;
use scene::Scene;
use tracer::{RenderStats, TraceResult, Tracer};

/// Trace the primary ray of a single pixel
pub fn trace_pixel(scene: &Scene, camera: &Camera, config: &RenderConfig, pixel: (usize, usize)) -> TraceResult {
	let mut tracer = Tracer::new(scene, config);
	let result = tracer.trace_primary(camera.make_ray(pixel));
	if result.hit {
		debug!("pixel {:?}: hit at distance {}, color {:?}", pixel, result.distance, result.color);
	} else {
		debug!("pixel {:?}: no intersection", pixel);
	}
	result
}

/// Render every pixel, rows in parallel
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> (Image, RenderStats) {
	let (width, height) = camera.resolution();
	let mut image = Image::new(width, height);

	info!("Start rendering {}x{} in {:?} mode...", width, height, config.mode);
	let start = Instant::now();

	let stats = image.pixels_mut().par_chunks_mut(width.max(1)).enumerate().map(|(y, row)| {
		let mut tracer = Tracer::new(scene, config);
		for (x, p) in row.iter_mut().enumerate() {
			let result = tracer.trace_primary(camera.make_ray((x, y)));
			*p = rgba(result.color);
		}
		tracer.stats()
	}).reduce(RenderStats::default, RenderStats::merge);

	log_stats(start, &stats);
	(image, stats)
}

/// Render every pixel in scan order on the calling thread
pub fn render_seq(scene: &Scene, camera: &Camera, config: &RenderConfig) -> (Image, RenderStats) {
	let (width, height) = camera.resolution();
	let mut image = Image::new(width, height);

	info!("Start rendering {}x{} in {:?} mode on one thread...", width, height, config.mode);
	let start = Instant::now();

	let mut tracer = Tracer::new(scene, config);
	for y in 0..height {
		for x in 0..width {
			let result = tracer.trace_primary(camera.make_ray((x, y)));
			image.set(x, y, result.color);
		}
	}
	let stats = tracer.stats();

	log_stats(start, &stats);
	(image, stats)
}

fn log_stats(start: Instant, stats: &RenderStats) {
	let tot_s = start.elapsed().as_millis() as f32 / 1000.0;
	info!("Rendered in {:.3}s: {} hits, {} misses", tot_s, stats.primary_hits, stats.primary_misses);
	info!("Shadow rays: {} lit, {} occluded", stats.lit, stats.shadowed);
	if let Some((near, far)) = stats.depth_range {
		info!("Primary hit distances in [{}, {}]", near, far);
	}
}
