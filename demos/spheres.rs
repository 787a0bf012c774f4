use std::env;
use std::process;

use log::{error, info, LevelFilter};

use whitted::camera::Camera;
use whitted::config::RenderConfig;
use whitted::light::Light;
use whitted::material::Surface;
use whitted::math::*;
use whitted::mesh::{Mesh, Triangle};
use whitted::primitive::Sphere;
use whitted::scene::Scene;
use whitted::error::SceneError;
use whitted::render;

const HEIGHT: usize = 384;
const WIDTH: usize = 512;
const OUTPUT_FILE: &str = "/tmp/whitted.png";

fn build_scene() -> Result<Scene, SceneError> {
	let white = Vec3::new(0.740063, 0.742313, 0.733934);
	let green = Vec3::new(0.162928, 0.408903, 0.0833759);
	let red = Vec3::new(0.366046, 0.0371827, 0.0416385);

	// checkered floor made of 8x8 quads alternating two surfaces
	let mut vertices = Vec::new();
	let mut triangles = Vec::new();
	let n = 8;
	for j in 0..=n {
		for i in 0..=n {
			vertices.push(Vec3::new(-4.0 + i as f32, -1.0, -6.0 + j as f32));
		}
	}
	for j in 0..n {
		for i in 0..n {
			let v = (j * (n + 1) + i) as u32;
			let row = (n + 1) as u32;
			let surface = (i + j) % 2;
			triangles.push(Triangle::new([v, v + row, v + row + 1], surface));
			triangles.push(Triangle::new([v, v + row + 1, v + 1], surface));
		}
	}
	let floor = Mesh::new(vertices, vec![], triangles, vec![Surface::matte(white), Surface::matte(Vec3::thrice(0.25))])?;
	info!("Floor made of {} triangles", floor.nb_triangles());

	let spheres = vec![
		Sphere::new(
			Vec3::new(-1.2, -0.4, -2.5),
			0.6,
			Surface::matte(red).with_specular(Vec3::thrice(0.6), 40.0),
		)?,
		Sphere::new(
			Vec3::new(0.3, -0.3, -3.5),
			0.7,
			Surface::matte(Vec3::thrice(0.05)).with_specular(Vec3::thrice(0.9), 200.0).with_reflectivity(0.8),
		)?,
		Sphere::new(
			Vec3::new(1.3, -0.5, -2.0),
			0.5,
			Surface {
				ambient: Vec3::zero(),
				diffuse: Vec3::thrice(0.05),
				..Surface::default()
			}.with_specular(Vec3::thrice(1.0), 300.0).with_transparency(0.9, 1.5),
		)?,
		Sphere::new(
			Vec3::new(-0.2, -0.75, -1.5),
			0.25,
			Surface::matte(green).with_specular(Vec3::thrice(0.3), 10.0),
		)?,
	];

	let lights = vec![
		Light::white(Vec3::new(-3.0, 4.0, 1.0), 0.8),
		Light {
			position: Vec3::new(3.0, 2.0, 0.0),
			ambient: Vec3::zero(),
			diffuse: Vec3::new(0.3, 0.3, 0.4),
			specular: Vec3::new(0.3, 0.3, 0.4),
		},
	];

	Ok(Scene::new(vec![floor], spheres, lights))
}

fn main() {
	env_logger::Builder::from_default_env()
		.filter_level(LevelFilter::Info)
		.init();

	let args = env::args().collect::<Vec<String>>();
	let config = match args.get(1) {
		Some(path) => RenderConfig::load(path),
		None => Ok(RenderConfig {
			background: Vec3::new(0.55, 0.7, 0.9),
			..Default::default()
		}),
	};
	let config = config.unwrap_or_else(|e| {
		error!("{}", e);
		process::exit(1);
	});

	let scene = build_scene().unwrap_or_else(|e| {
		error!("invalid scene: {}", e);
		process::exit(1);
	});

	let camera = Camera::look_at(
		Vec3::new(0.0, 0.5, 2.0),
		Vec3::new(0.0, -0.4, -2.5),
		Vec3::new(0.0, 1.0, 0.0),
		(WIDTH, HEIGHT),
		60.0,
	);

	let (img, _) = render(&scene, &camera, &config);

	let buffer = image::RgbaImage::from_raw(img.width as u32, img.height as u32, img.to_rgba8());
	match buffer.map(|b| b.save(OUTPUT_FILE)) {
		Some(Ok(())) => info!("Image written to {}", OUTPUT_FILE),
		Some(Err(e)) => error!("failed to write {}: {}", OUTPUT_FILE, e),
		None => error!("image buffer does not match its dimensions"),
	}
}
