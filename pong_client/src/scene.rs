//! Draws the current screen into the canvas

use game_core::{FsmState, Game, Paddle};

use crate::canvas::Canvas;
use crate::params::ClientParams;
use crate::text::MenuTexts;

/// Compose one full frame for whatever state the game is in
pub fn compose(canvas: &mut Canvas, game: &Game, texts: &MenuTexts) {
    canvas.clear(ClientParams::BACKGROUND);

    match game.state() {
        FsmState::Start => {
            for sprite in texts.start_screen() {
                canvas.draw_text(sprite, ClientParams::FOREGROUND);
            }
        }
        FsmState::Playing => draw_court(canvas, game),
        FsmState::GameOver(winner) => {
            canvas.draw_text(&texts.game_over, ClientParams::FOREGROUND);
            canvas.draw_text(texts.winner(winner), ClientParams::FOREGROUND);
            canvas.draw_text(&texts.restart, ClientParams::FOREGROUND);
            canvas.draw_text(&texts.quit, ClientParams::FOREGROUND);
        }
        FsmState::Terminated => {}
    }
}

fn draw_court(canvas: &mut Canvas, game: &Game) {
    let config = &game.config;

    for (_e, paddle) in game.world.query::<&Paddle>().iter() {
        canvas.fill_rect(
            config.paddle_x(paddle.player),
            paddle.y,
            config.paddle_width,
            config.paddle_height,
            ClientParams::FOREGROUND,
        );
    }

    if let Some(ball) = game.ball() {
        canvas.fill_circle(ball.pos, config.ball_radius, ClientParams::FOREGROUND);
    }
}
