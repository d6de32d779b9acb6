/// Presentation constants for the desktop client
#[derive(Debug, Clone, Copy)]
pub struct ClientParams;

impl ClientParams {
    pub const WINDOW_TITLE: &'static str = "Pong";

    // Menu font, read from the working directory at startup
    pub const FONT_PATH: &'static str = "pixelfont.ttf";
    pub const FONT_SIZE: f32 = 32.0;

    // RGBA
    pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
    pub const FOREGROUND: [u8; 4] = [255, 255, 255, 255];

    // Vertical offsets of menu lines from the centred position
    pub const TITLE_OFFSET: i32 = -50;
    pub const LINE_OFFSET: i32 = 0;
    pub const SECOND_LINE_OFFSET: i32 = 50;
    pub const THIRD_LINE_OFFSET: i32 = 100;
}
