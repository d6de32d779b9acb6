//! Menu text, rasterised once at startup
//!
//! Glyphs are rendered without anti-aliasing (coverage is thresholded) so the
//! pixel font stays crisp, and each line is kept as a ready-to-blit mask.

use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use game_core::{Config, Player};

use crate::params::ClientParams;

/// The menu font could not be read or parsed. Fatal at startup.
#[derive(Debug)]
pub struct FontLoadError {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

impl std::error::Error for FontLoadError {}

pub fn load_font(path: &Path) -> Result<FontVec, FontLoadError> {
    let bytes = std::fs::read(path).map_err(|e| FontLoadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_font(bytes, path)
}

pub fn parse_font(bytes: Vec<u8>, path: &Path) -> Result<FontVec, FontLoadError> {
    FontVec::try_from_vec(bytes).map_err(|e| FontLoadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// One line of text as a 1-bit mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTexture {
    width: u32,
    height: u32,
    mask: Vec<bool>,
}

impl TextTexture {
    pub fn from_mask(width: u32, height: u32, mask: Vec<bool>) -> Self {
        assert_eq!(mask.len(), width as usize * height as usize);
        Self {
            width,
            height,
            mask,
        }
    }

    /// Lay out `text` on one line and rasterise it
    pub fn render(font: &impl Font, text: &str, size: f32) -> Self {
        let scale = PxScale::from(size);
        let scaled = font.as_scaled(scale);
        let ascent = scaled.ascent();

        let mut glyphs = Vec::new();
        let mut caret = 0.0f32;
        let mut last: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = last {
                caret += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(scale, point(caret, ascent)));
            caret += scaled.h_advance(id);
            last = Some(id);
        }

        let width = caret.ceil().max(0.0) as u32;
        let height = (ascent - scaled.descent()).ceil().max(0.0) as u32;
        let mut mask = vec![false; width as usize * height as usize];

        for glyph in glyphs {
            let Some(outlined) = font.outline_glyph(glyph) else {
                continue; // whitespace
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if coverage >= 0.5 && x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height
                {
                    mask[y as usize * width as usize + x as usize] = true;
                }
            });
        }

        Self {
            width,
            height,
            mask,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_set(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.mask[(y * self.width + x) as usize]
    }
}

/// A text texture placed on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSprite {
    pub texture: TextTexture,
    pub x: i32,
    pub y: i32,
}

impl TextSprite {
    /// Centre in the window, then shift down by `y_offset`
    pub fn centered(texture: TextTexture, config: &Config, y_offset: i32) -> Self {
        let x = (config.window_width - texture.width as i32) / 2;
        let y = (config.window_height - texture.height as i32) / 2 + y_offset;
        Self { texture, x, y }
    }
}

/// Every line shown on the start and game-over screens
pub struct MenuTexts {
    pub welcome: TextSprite,
    pub instructions_one: TextSprite,
    pub instructions_two: TextSprite,
    pub begin: TextSprite,
    pub game_over: TextSprite,
    pub winner_one: TextSprite,
    pub winner_two: TextSprite,
    pub restart: TextSprite,
    pub quit: TextSprite,
}

impl MenuTexts {
    pub fn bake(font: &impl Font, config: &Config) -> Self {
        Self::build(config, |text| {
            TextTexture::render(font, text, ClientParams::FONT_SIZE)
        })
    }

    /// Build from any rasteriser; lets layout be checked without a font file
    pub fn build(config: &Config, mut render: impl FnMut(&str) -> TextTexture) -> Self {
        let mut line = |text: &str, offset: i32| TextSprite::centered(render(text), config, offset);
        Self {
            welcome: line("Welcome To Pong!", ClientParams::TITLE_OFFSET),
            instructions_one: line("Player 1 moves with W and S", ClientParams::LINE_OFFSET),
            instructions_two: line(
                "Player 2 moves with UP and DOWN arrows",
                ClientParams::SECOND_LINE_OFFSET,
            ),
            begin: line(
                "Press SPACE to start the game",
                ClientParams::THIRD_LINE_OFFSET,
            ),
            game_over: line("GAME OVER!", ClientParams::TITLE_OFFSET),
            winner_one: line("Player 1 Wins", ClientParams::LINE_OFFSET),
            winner_two: line("Player 2 Wins", ClientParams::LINE_OFFSET),
            restart: line("Press R to Restart", ClientParams::SECOND_LINE_OFFSET),
            quit: line("Press Q to quit", ClientParams::THIRD_LINE_OFFSET),
        }
    }

    pub fn start_screen(&self) -> [&TextSprite; 4] {
        [
            &self.welcome,
            &self.instructions_one,
            &self.instructions_two,
            &self.begin,
        ]
    }

    pub fn winner(&self, player: Player) -> &TextSprite {
        match player {
            Player::One => &self.winner_one,
            Player::Two => &self.winner_two,
        }
    }
}
