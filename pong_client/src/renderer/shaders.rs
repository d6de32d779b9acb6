/// Full-screen textured quad
pub const FRAME_SHADER: &str = include_str!("../../shaders/frame.wgsl");
