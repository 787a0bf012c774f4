use crate::config::*;
use crate::math::*;
use crate::scene::Scene;

/// Outcome of tracing one ray
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceResult {
	pub color: Vec3,
	/// whether any surface was hit
	pub hit: bool,
	/// ray parameter of the hit, infinite on a miss
	pub distance: f32,
}

/// Counters gathered while tracing, for diagnostics only
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RenderStats {
	pub primary_hits: u64,
	pub primary_misses: u64,
	/// shadow rays that reached their light
	pub lit: u64,
	/// shadow rays blocked before their light
	pub shadowed: u64,
	/// closest and farthest primary hit distances
	pub depth_range: Option<(f32, f32)>,
}

impl RenderStats {
	pub fn merge(self, other: RenderStats) -> RenderStats {
		let depth_range = match (self.depth_range, other.depth_range) {
			(Some((a0, a1)), Some((b0, b1))) => Some((a0.min(b0), a1.max(b1))),
			(a, b) => a.or(b),
		};
		RenderStats {
			primary_hits: self.primary_hits + other.primary_hits,
			primary_misses: self.primary_misses + other.primary_misses,
			lit: self.lit + other.lit,
			shadowed: self.shadowed + other.shadowed,
			depth_range,
		}
	}

	fn record_primary(&mut self, result: &TraceResult) {
		if !result.hit {
			self.primary_misses += 1;
			return;
		}
		self.primary_hits += 1;
		let t = result.distance;
		self.depth_range = Some(match self.depth_range {
			Some((near, far)) => (near.min(t), far.max(t)),
			None => (t, t),
		});
	}
}

/// Traces rays through an immutable scene.
///
/// A tracer only owns its statistics; the colour of a ray depends on nothing
/// but the scene, the configuration and the ray. Use one tracer per thread.
pub struct Tracer<'s> {
	pub(crate) scene: &'s Scene,
	pub(crate) config: &'s RenderConfig,
	pub(crate) stats: RenderStats,
}

impl<'s> Tracer<'s> {
	pub fn new(scene: &'s Scene, config: &'s RenderConfig) -> Tracer<'s> {
		Tracer { scene, config, stats: RenderStats::default() }
	}

	pub fn stats(&self) -> RenderStats {
		self.stats
	}

	/// Trace a camera ray
	pub fn trace_primary(&mut self, ray: Ray) -> TraceResult {
		let result = self.trace(0, 1.0, ray);
		self.stats.record_primary(&result);
		result
	}

	/// Colour `ray`, a ray at recursion depth `level` contributing `weight` to
	/// its pixel. At `RECURSION_CEILING` and above, hits are not shaded and
	/// only `hit` and `distance` are meaningful.
	pub fn trace(&mut self, level: u32, weight: f32, ray: Ray) -> TraceResult {
		let scene = self.scene;
		match scene.intersect(ray) {
			Some(its) => {
				let color = if level < RECURSION_CEILING {
					self.shade(level, weight, ray, &its)
				} else {
					Vec3::zero()
				};
				TraceResult { color, hit: true, distance: its.distance }
			}
			None => TraceResult {
				color: self.shade_background(ray),
				hit: false,
				distance: INFINITY,
			},
		}
	}
}
