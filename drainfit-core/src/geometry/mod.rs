pub mod kernel;
pub mod polygon;
pub mod r2;
pub mod transform;
