use ggez::glam::Vec2;
use ggez::graphics::{self, Color, DrawParam, Text, TextFragment};
use ggez::{Context, GameResult};

use crate::assets::Assets;
use crate::chimp::{Chimp, ChimpState};
use crate::fist::Fist;
use crate::state::GameState;

const CAPTION: &str = "Pummel the Chimp, and Win $$$";
const CAPTION_SCALE: f32 = 24.0;

/// How a sprite places its image on the canvas. Both entities implement this
/// directly; the renderer calls them statically.
pub trait Sprite {
    fn draw_param(&self) -> DrawParam;
}

impl Sprite for Fist {
    fn draw_param(&self) -> DrawParam {
        DrawParam::default().dest(Vec2::new(self.rect.x, self.rect.y))
    }
}

impl Sprite for Chimp {
    // Drawn about the rect center so the dizzy rotation leaves it fixed while
    // the bounds grow; the horizontal flip follows the walking direction.
    fn draw_param(&self) -> DrawParam {
        let center = self.rect.center();
        let mut param = DrawParam::default()
            .dest(Vec2::new(center.x, center.y))
            .offset(Vec2::new(0.5, 0.5))
            .scale(Vec2::new(self.direction, 1.0));
        if let ChimpState::Dizzy { angle } = self.state {
            param = param.rotation(angle.to_radians());
        }
        param
    }
}

pub struct Renderer {
    caption: Text,
}

impl Renderer {
    pub fn new() -> Self {
        let caption = Text::new(
            TextFragment::new(CAPTION)
                .color(Color::from_rgb(10, 10, 10))
                .scale(CAPTION_SCALE),
        );
        Self { caption }
    }

    pub fn draw(&self, ctx: &mut Context, state: &GameState, assets: &Assets) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::from_rgb(250, 250, 250));

        let dims = self.caption.measure(ctx)?;
        let (width, _) = ctx.gfx.drawable_size();
        canvas.draw(
            &self.caption,
            DrawParam::default().dest(Vec2::new((width - dims.x) / 2.0, 0.0)),
        );

        canvas.draw(&assets.fist_image, state.fist.draw_param());
        canvas.draw(&assets.chimp_image, state.chimp.draw_param());

        canvas.finish(ctx)
    }
}
