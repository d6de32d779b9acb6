//! Desktop client for local two-player Pong
//!
//! winit owns the window and keyboard, the frame is composed on the CPU and
//! uploaded to the window through wgpu.

pub mod app;
pub mod canvas;
pub mod clock;
pub mod input;
pub mod params;
pub mod renderer;
pub mod scene;
pub mod text;

pub use app::run;
pub use text::FontLoadError;

use log::LevelFilter;

pub fn init_logging() {
    env_logger::builder()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init()
}
