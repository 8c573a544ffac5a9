// Runtime parameters
pub const NUM_THREADS: usize = 16;
pub const CANVAS_WIDTH: usize = 320;
pub const CANVAS_HEIGHT: usize = 320;
pub const OUT_FILE: &str = "./out.ppm";

// Offset applied to the t interval of secondary rays so a surface does not
// intersect itself ("shadow acne").
pub const SHADOW_EPSILON: f64 = 0.001;

// Maximum reflection recursion depth
pub const TRACE_DEPTH: u32 = 3;
