use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use whitted::camera::Camera;
use whitted::config::*;
use whitted::light::Light;
use whitted::material::Surface;
use whitted::math::*;
use whitted::mesh::Mesh;
use whitted::primitive::Sphere;
use whitted::scene::Scene;
use whitted::tracer::Tracer;
use whitted::{render, render_seq, trace_pixel};

fn random_vec(rng: &mut StdRng, lo: f32, hi: f32) -> Vec3 {
	Vec3::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi), rng.gen_range(lo..hi))
}

fn random_dir(rng: &mut StdRng) -> Vec3 {
	loop {
		let v = random_vec(rng, -1.0, 1.0);
		let l = v.length();
		if l > 0.1 && l <= 1.0 {
			return v / l;
		}
	}
}

fn sphere(center: Vec3, radius: f32, surface: Surface) -> Sphere {
	Sphere::new(center, radius, surface).unwrap()
}

fn down_z(z: f32) -> Ray {
	Ray::new(Vec3::new(0.0, 0.0, z), Vec3::new(0.0, 0.0, -1.0))
}

/// Floor quad at y = -1 facing up
fn floor(surface: Surface) -> Mesh {
	let vertices = vec![
		Vec3::new(-10.0, -1.0, -10.0),
		Vec3::new(-10.0, -1.0,  10.0),
		Vec3::new( 10.0, -1.0,  10.0),
		Vec3::new( 10.0, -1.0, -10.0),
	];
	Mesh::with_surface(vertices, vec![], vec![[0, 1, 2], [0, 2, 3]], surface).unwrap()
}

#[test]
fn misses_get_the_background() {
	let mut rng = StdRng::seed_from_u64(7);
	let background = Vec3::new(0.2, 0.4, 0.6);
	let config = RenderConfig { background, ..Default::default() };
	let scene = Scene::new(vec![], vec![sphere(Vec3::zero(), 1.0, Surface::default())], vec![Light::white(Vec3::new(0.0, 5.0, 5.0), 1.0)]);
	let mut tracer = Tracer::new(&scene, &config);

	for _ in 0..500 {
		// rays starting outside the sphere and heading away from it
		let origin = random_dir(&mut rng) * rng.gen_range(1.5f32..10.0);
		let mut dir = random_dir(&mut rng);
		if Vec3::dot(dir, origin) < 0.0 {
			dir = -dir;
		}
		for &level in &[0, 3, SHADOW_LEVEL] {
			let result = tracer.trace(level, 1.0, Ray::new(origin, dir));
			assert!(!result.hit);
			assert_eq!(result.color, background);
			assert_eq!(result.distance, INFINITY);
		}
	}
}

#[test]
fn empty_scene_is_background_everywhere() {
	let config = RenderConfig { background: Vec3::new(0.1, 0.2, 0.3), ..Default::default() };
	let scene = Scene::new(vec![], vec![], vec![]);
	let camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::zero(), Vec3::new(0.0, 1.0, 0.0), (8, 6), 60.0);
	let (image, stats) = render(&scene, &camera, &config);
	for y in 0..6 {
		for x in 0..8 {
			assert_eq!(image.color(x, y), config.background);
		}
	}
	assert_eq!(stats.primary_misses, 48);
	assert_eq!(stats.primary_hits, 0);
	assert_eq!(stats.depth_range, None);
}

#[test]
fn sphere_hit_distance_and_normal() {
	let mut rng = StdRng::seed_from_u64(1);
	for _ in 0..100 {
		let r = rng.gen_range(0.1f32..4.9);
		let scene = Scene::new(vec![], vec![sphere(Vec3::zero(), r, Surface::default())], vec![]);
		let its = scene.intersect(down_z(5.0)).unwrap();
		assert!((its.distance - (5.0 - r)).abs() < 1e-4);
		assert!((its.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-4);
	}
}

#[test]
fn rays_passing_farther_than_the_radius_miss() {
	let mut rng = StdRng::seed_from_u64(2);
	for _ in 0..1000 {
		let center = random_vec(&mut rng, -5.0, 5.0);
		let radius = rng.gen_range(0.3f32..3.0);
		let s = sphere(center, radius, Surface::default());
		let dir = random_dir(&mut rng);

		// origin on a line passing at distance `gap` from the center
		let side = Vec3::cross(dir, random_dir(&mut rng)).normalized();
		if side == Vec3::zero() {
			continue;
		}
		let gap = radius * rng.gen_range(1.01f32..3.0);
		let origin = center + side * gap - dir * rng.gen_range(-10.0f32..10.0);

		let scene = Scene::new(vec![], vec![s], vec![]);
		assert!(scene.intersect(Ray::new(origin, dir)).is_none());
	}
}

#[test]
fn nearest_primitive_wins() {
	let near = Surface::matte(Vec3::new(1.0, 0.0, 0.0));
	let far = Surface::matte(Vec3::new(0.0, 1.0, 0.0));
	// overlapping spheres along the ray
	let scene = Scene::new(vec![], vec![
		sphere(Vec3::new(0.0, 0.0, -0.5), 1.0, far),
		sphere(Vec3::new(0.0, 0.0, 0.5), 1.0, near),
	], vec![]);
	let its = scene.intersect(down_z(5.0)).unwrap();
	assert!((its.distance - 3.5).abs() < 1e-5);
	assert_eq!(*its.surface, near);

	// a mesh behind a sphere loses even though meshes are tested first
	let scene = Scene::new(vec![floor(far)], vec![sphere(Vec3::new(0.0, 1.0, 0.0), 0.5, near)], vec![]);
	let its = scene.intersect(Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0))).unwrap();
	assert_eq!(*its.surface, near);
	assert!((its.distance - 3.5).abs() < 1e-5);
}

#[test]
fn equal_distances_resolve_to_first_listed() {
	let a = Surface::matte(Vec3::new(1.0, 0.0, 0.0));
	let b = Surface::matte(Vec3::new(0.0, 0.0, 1.0));
	let scene = Scene::new(vec![], vec![sphere(Vec3::zero(), 1.0, a), sphere(Vec3::zero(), 1.0, b)], vec![]);
	for _ in 0..3 {
		assert_eq!(*scene.intersect(down_z(5.0)).unwrap().surface, a);
	}
}

#[test]
fn blocked_light_keeps_only_its_ambient() {
	let surface = Surface {
		ambient: Vec3::thrice(0.2),
		diffuse: Vec3::thrice(0.8),
		specular: Vec3::thrice(0.5),
		shininess: 10.0,
		..Default::default()
	};
	let light = Light {
		position: Vec3::new(0.0, 10.0, 0.0),
		ambient: Vec3::thrice(0.5),
		diffuse: Vec3::thrice(1.0),
		specular: Vec3::thrice(1.0),
	};
	let blocker = sphere(Vec3::new(0.0, 5.0, 0.0), 1.0, Surface::default());
	// lands on the floor at (1, -1, 0.5)
	let ray = Ray::new(Vec3::new(1.0, 3.0, 3.5), Vec3::new(0.0, -4.0, -3.0).normalized());

	for &mode in &[ShadingMode::Local, ShadingMode::Shadowed, ShadingMode::Recursive] {
		let config = RenderConfig::default().with_mode(mode);

		let open = Scene::new(vec![floor(surface)], vec![], vec![light]);
		let lit = Tracer::new(&open, &config).trace(0, 1.0, ray);

		let blocked = Scene::new(vec![floor(surface)], vec![blocker.clone()], vec![light]);
		let mut tracer = Tracer::new(&blocked, &config);
		let shadowed = tracer.trace(0, 1.0, ray);

		assert!(lit.hit && shadowed.hit);
		assert!((shadowed.color - surface.ambient * light.ambient).length() < 1e-5, "{:?}", mode);
		assert!(lit.color.min_elem() > shadowed.color.max_elem(), "{:?}", mode);
		assert_eq!(tracer.stats().shadowed, 1);
		assert_eq!(tracer.stats().lit, 0);
	}
}

#[test]
fn colors_stay_in_unit_range() {
	let mut rng = StdRng::seed_from_u64(3);
	let wild = |rng: &mut StdRng| Surface {
		ambient: random_vec(rng, -5.0, 5.0),
		diffuse: random_vec(rng, -5.0, 5.0),
		specular: random_vec(rng, -5.0, 5.0),
		shininess: rng.gen_range(0.0f32..100.0),
		reflectivity: rng.gen_range(0.0f32..3.0),
		transparency: rng.gen_range(0.0f32..3.0),
		ior: rng.gen_range(0.5f32..2.5),
	};
	let mut spheres = Vec::new();
	for _ in 0..6 {
		spheres.push(sphere(random_vec(&mut rng, -3.0, 3.0), rng.gen_range(0.3f32..1.5), wild(&mut rng)));
	}
	let lights = (0..3).map(|_| Light {
		position: random_vec(&mut rng, -8.0, 8.0),
		ambient: random_vec(&mut rng, -3.0, 3.0),
		diffuse: random_vec(&mut rng, -3.0, 3.0),
		specular: random_vec(&mut rng, -3.0, 3.0),
	}).collect();
	let scene = Scene::new(vec![floor(wild(&mut rng))], spheres, lights);

	let modes = [
		ShadingMode::Recursive, ShadingMode::Local, ShadingMode::Shadowed,
		ShadingMode::Diffuse, ShadingMode::Depth, ShadingMode::Normal, ShadingMode::Mask,
	];
	for &mode in &modes {
		let config = RenderConfig { mode, max_level: 8, min_weight: 0.0, ..Default::default() };
		let mut tracer = Tracer::new(&scene, &config);
		for _ in 0..200 {
			let origin = random_vec(&mut rng, -12.0, 12.0);
			let result = tracer.trace(0, 1.0, Ray::new(origin, random_dir(&mut rng)));
			let c = result.color;
			assert!(!c.has_nan(), "{:?} {:?}", mode, c);
			assert!(c.min_elem() >= 0.0 && c.max_elem() <= 1.0, "{:?} {:?}", mode, c);
		}
	}
}

/// Mirror ball lit from the camera side, in front of a bright floor
fn mirror_scene(reflectivity: f32) -> Scene {
	let mirror = Surface {
		ambient: Vec3::zero(),
		diffuse: Vec3::zero(),
		specular: Vec3::zero(),
		reflectivity,
		..Default::default()
	};
	let bright = Surface::matte(Vec3::thrice(1.0));
	Scene::new(
		vec![floor(bright)],
		vec![sphere(Vec3::zero(), 0.5, mirror)],
		vec![Light::white(Vec3::new(0.0, 4.0, 4.0), 1.0)],
	)
}

#[test]
fn no_bounce_with_a_single_level() {
	let scene = mirror_scene(1.0);
	// hits the ball on its lower half, the reflection goes to the floor
	let ray = Ray::new(Vec3::new(0.0, -0.3, 5.0), Vec3::new(0.0, 0.0, -1.0));

	let config = RenderConfig { max_level: 1, ..Default::default() };
	let flat = Tracer::new(&scene, &config).trace(0, 1.0, ray);
	assert!(flat.hit);
	assert_eq!(flat.color, Vec3::zero());

	let config = RenderConfig { max_level: 2, ..Default::default() };
	let mirrored = Tracer::new(&scene, &config).trace(0, 1.0, ray);
	assert!(mirrored.color.min_elem() > 0.0);
}

#[test]
fn weight_threshold_stops_bounces() {
	let scene = mirror_scene(0.5);
	let ray = Ray::new(Vec3::new(0.0, -0.3, 5.0), Vec3::new(0.0, 0.0, -1.0));

	let config = RenderConfig { min_weight: 0.6, ..Default::default() };
	assert_eq!(Tracer::new(&scene, &config).trace(0, 1.0, ray).color, Vec3::zero());

	let config = RenderConfig { min_weight: 0.4, ..Default::default() };
	assert!(Tracer::new(&scene, &config).trace(0, 1.0, ray).color.min_elem() > 0.0);

	// the incoming weight counts too
	assert_eq!(Tracer::new(&scene, &config).trace(0, 0.5, ray).color, Vec3::zero());
}

#[test]
fn facing_mirrors_terminate() {
	// two perfect mirrors facing each other, ray bouncing between them
	let mirror = Surface { reflectivity: 1.0, ..Surface::matte(Vec3::thrice(0.1)) };
	let scene = Scene::new(vec![], vec![
		sphere(Vec3::new(0.0, 0.0, 0.0), 1.0, mirror),
		sphere(Vec3::new(0.0, 0.0, 4.0), 1.0, mirror),
	], vec![Light::white(Vec3::new(0.0, 5.0, 2.0), 1.0)]);
	let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));

	let config = RenderConfig { max_level: RECURSION_CEILING, min_weight: 0.0, ..Default::default() };
	let result = Tracer::new(&scene, &config).trace(0, 1.0, ray);
	assert!(result.hit);

	// even when validation is bypassed, the hard ceiling bounds the recursion
	let config = RenderConfig { max_level: u32::max_value(), min_weight: 0.0, ..Default::default() };
	assert!(Tracer::new(&scene, &config).trace(0, 1.0, ray).hit);
}

#[test]
fn glass_ball_shows_what_is_behind() {
	let glass = Surface {
		ambient: Vec3::zero(),
		diffuse: Vec3::zero(),
		specular: Vec3::zero(),
		transparency: 1.0,
		ior: 1.5,
		..Default::default()
	};
	let red = Surface::matte(Vec3::new(1.0, 0.0, 0.0));
	let wall = sphere(Vec3::new(0.0, 0.0, -20.0), 10.0, red);
	let scene = Scene::new(vec![], vec![sphere(Vec3::zero(), 1.0, glass), wall], vec![Light::white(Vec3::new(0.0, 0.0, 10.0), 1.0)]);
	let ray = down_z(5.0);

	// through the center the ray goes straight: in, out, then the wall
	let config = RenderConfig { max_level: 4, ..Default::default() };
	let seen = Tracer::new(&scene, &config).trace(0, 1.0, ray);
	assert!(seen.color.x > 0.0);
	assert_eq!(seen.color.y, 0.0);
	assert_eq!(seen.color.z, 0.0);

	// not enough levels to get out of the ball
	let config = RenderConfig { max_level: 2, ..Default::default() };
	assert_eq!(Tracer::new(&scene, &config).trace(0, 1.0, ray).color, Vec3::zero());
}

#[test]
fn tracing_is_repeatable() {
	let mut rng = StdRng::seed_from_u64(4);
	let scene = mirror_scene(0.7);
	let config = RenderConfig::default();
	let mut first = Tracer::new(&scene, &config);
	let mut second = Tracer::new(&scene, &config);
	for _ in 0..200 {
		let ray = Ray::new(random_vec(&mut rng, -3.0, 3.0) + Vec3::new(0.0, 0.0, 5.0), random_dir(&mut rng));
		let a = first.trace(0, 1.0, ray);
		let b = first.trace(0, 1.0, ray);
		let c = second.trace(0, 1.0, ray);
		assert_eq!(a, b);
		assert_eq!(a, c);
	}
}

#[test]
fn parallel_and_sequential_renders_agree() {
	let scene = mirror_scene(0.5);
	let camera = Camera::look_at(Vec3::new(0.0, 1.0, 5.0), Vec3::zero(), Vec3::new(0.0, 1.0, 0.0), (24, 16), 50.0);
	let config = RenderConfig::default();
	let (par, par_stats) = render(&scene, &camera, &config);
	let (seq, seq_stats) = render_seq(&scene, &camera, &config);
	assert_eq!(par, seq);
	assert_eq!(par_stats, seq_stats);
	assert_eq!(par_stats.primary_hits + par_stats.primary_misses, 24 * 16);

	// any pixel can be traced on its own
	for &(x, y) in &[(0, 0), (12, 8), (23, 15)] {
		assert_eq!(trace_pixel(&scene, &camera, &config, (x, y)).color, seq.color(x, y));
	}
}

#[test]
fn depth_mode_image() {
	let scene = Scene::new(vec![], vec![sphere(Vec3::zero(), 1.0, Surface::default())], vec![]);
	let camera = Camera::look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::zero(), Vec3::new(0.0, 1.0, 0.0), (5, 5), 40.0);
	let config = RenderConfig { mode: ShadingMode::Depth, depth_near: 1.0, depth_far: 3.0, ..Default::default() };
	// center pixel hits the front of the sphere at distance 2
	let center = trace_pixel(&scene, &camera, &config, (2, 2));
	assert!((center.distance - 2.0).abs() < 1e-5);
	assert!((center.color - Vec3::thrice(0.5)).length() < 1e-5);
}

#[test]
fn mask_mode_marks_hits() {
	let scene = Scene::new(vec![], vec![sphere(Vec3::zero(), 1.0, Surface::default())], vec![]);
	let config = RenderConfig::default().with_mode(ShadingMode::Mask);
	let mut tracer = Tracer::new(&scene, &config);
	assert_eq!(tracer.trace(0, 1.0, down_z(5.0)).color, Vec3::thrice(1.0));
	assert_eq!(tracer.trace(0, 1.0, Ray::new(Vec3::new(0.0, 2.0, 5.0), Vec3::new(0.0, 0.0, -1.0))).color, Vec3::zero());
}

#[test]
fn light_on_the_hit_point_gives_a_defined_color() {
	let surface = Surface::matte(Vec3::thrice(0.5)).with_specular(Vec3::thrice(1.0), 20.0);
	let scene = Scene::new(vec![], vec![sphere(Vec3::zero(), 1.0, surface)], vec![Light::white(Vec3::new(0.0, 0.0, 1.0), 1.0)]);
	for &mode in &[ShadingMode::Recursive, ShadingMode::Local, ShadingMode::Shadowed, ShadingMode::Diffuse] {
		let config = RenderConfig::default().with_mode(mode);
		let result = Tracer::new(&scene, &config).trace_primary(down_z(5.0));
		assert!(result.hit, "{:?}", mode);
		assert!((result.distance - 4.0).abs() < 1e-6, "{:?}", mode);
		let c = result.color;
		assert!(c.all_finite(), "{:?} {:?}", mode, c);
		assert!(c.min_elem() >= 0.0 && c.max_elem() <= 1.0, "{:?} {:?}", mode, c);
	}
}
