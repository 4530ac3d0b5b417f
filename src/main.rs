use ggez::event::{self, EventHandler};
use ggez::glam::Vec2;
use ggez::graphics::Rect;
use ggez::input::keyboard::KeyInput;
use ggez::input::mouse::MouseButton;
use ggez::winit::keyboard::PhysicalKey;
use ggez::{Context, ContextBuilder, GameError, GameResult};
use log::error;

mod assets;
mod chimp;
mod fist;
mod input;
mod rendering;
mod state;

use assets::{Assets, ColorKey};
use input::InputState;
use rendering::Renderer;
use state::{GameState, SoundCue};

const WIDTH: f32 = 468.0;
const HEIGHT: f32 = 60.0;
const TITLE: &str = "Monkey Fever";
const TICK_RATE: u32 = 60;

struct MainState {
    game: GameState,
    input: InputState,
    assets: Assets,
    renderer: Renderer,
}

impl MainState {
    fn new(ctx: &mut Context) -> GameResult<Self> {
        ggez::input::mouse::set_cursor_hidden(ctx, true);

        let (fist_image, fist_bounds) = assets::load_image(ctx, "/fist.bmp", ColorKey::TopLeftPixel)?;
        let (chimp_image, chimp_bounds) =
            assets::load_image(ctx, "/chimp.bmp", ColorKey::TopLeftPixel)?;
        let whiff_sound = assets::load_sound(ctx, "/whiff.wav")?;
        let punch_sound = assets::load_sound(ctx, "/punch.wav")?;

        let area = Rect::new(0.0, 0.0, WIDTH, HEIGHT);
        Ok(Self {
            game: GameState::new(fist_bounds, chimp_bounds, area),
            input: InputState::default(),
            assets: Assets {
                fist_image,
                chimp_image,
                punch_sound,
                whiff_sound,
            },
            renderer: Renderer::new(),
        })
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(TICK_RATE) {
            if !self.game.is_running() {
                break;
            }

            let actions = self.input.consume_actions().unwrap_or_default();
            let pointer = ctx.mouse.position();
            let cues = self.game.tick(actions, Vec2::new(pointer.x, pointer.y));
            for cue in cues {
                match cue {
                    SoundCue::Punch => self.assets.punch_sound.play(ctx)?,
                    SoundCue::Whiff => self.assets.whiff_sound.play(ctx)?,
                }
            }

            if !self.game.is_running() {
                ctx.request_quit();
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        if !self.game.is_running() {
            return Ok(());
        }
        self.renderer.draw(ctx, &self.game, &self.assets)
    }

    fn key_down_event(
        &mut self,
        _ctx: &mut Context,
        input: KeyInput,
        _repeat: bool,
    ) -> Result<(), GameError> {
        if let PhysicalKey::Code(keycode) = input.event.physical_key {
            self.input.process_key_down(keycode);
        }
        Ok(())
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        _x: f32,
        _y: f32,
    ) -> Result<(), GameError> {
        self.input.process_mouse_down(button);
        Ok(())
    }

    fn mouse_button_up_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        _x: f32,
        _y: f32,
    ) -> Result<(), GameError> {
        self.input.process_mouse_up(button);
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool, GameError> {
        self.input.process_quit();
        Ok(false)
    }
}

pub fn main() -> GameResult {
    env_logger::init();

    let (mut ctx, event_loop) = ContextBuilder::new("monkey_fever", "you")
        .window_setup(ggez::conf::WindowSetup::default().title(TITLE))
        .window_mode(ggez::conf::WindowMode::default().dimensions(WIDTH, HEIGHT))
        .add_resource_path("./resources")
        .build()?;

    let state = match MainState::new(&mut ctx) {
        Ok(state) => state,
        Err(why) => {
            error!("cannot load resources: {why}");
            return Err(why);
        }
    };

    event::run(ctx, event_loop, state)
}
