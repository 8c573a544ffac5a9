pub mod space;
pub mod matrix;
pub mod color;
pub mod ray;

pub mod scene;
pub mod intersect;
pub mod light;
pub mod trace;

pub mod viewport;
pub mod render;

pub mod canvas;

pub mod consts;

const FEQ_EPSILON: f64 = 0.0001;
pub fn feq(left: f64, right: f64) -> bool {
    (left - right).abs() < FEQ_EPSILON
}
