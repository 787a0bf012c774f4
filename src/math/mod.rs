pub mod vec3;
pub mod frame;
pub mod ray;

pub use vec3::Vec3;
pub use frame::Frame;
pub use ray::Ray;
pub use std::f32::INFINITY;
pub use std::f32::consts::*;
