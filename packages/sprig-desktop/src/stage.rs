use crate::config::{StageConfig, StageError};
use crate::input::key_from_keycode;
use crate::pacer::FramePacer;
use crate::render::{rasterize, to_ggez_color};
use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::{self, EventHandler};
use ggez::graphics::Canvas;
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, ContextBuilder, GameResult};
use sprig_core::{Container, DisplayList, Drawable, Key, KeyEvent, KeyState};

/// Owns the root container and drives it from a window: keys in, frames out.
pub struct Stage {
    root: Container,
    config: StageConfig,
    display: DisplayList,
    pacer: FramePacer,
}

impl Stage {
    pub fn new(root: Container, config: StageConfig) -> Result<Self, StageError> {
        config.validate()?;
        Ok(Self {
            root,
            pacer: FramePacer::new(config.frame_rate),
            config,
            display: DisplayList::new(),
        })
    }

    pub fn root(&self) -> &Container {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Container {
        &mut self.root
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn dispatch_key(&mut self, key: Key, state: KeyState) {
        tracing::debug!(%key, ?state, "dispatching key event");
        self.root.handle_key_event(&KeyEvent { key, state });
    }

    /// Rebuilds the frame's display list from the current tree.
    pub fn compose(&mut self) -> &DisplayList {
        self.display.clear();
        self.root.draw(&mut self.display);
        &self.display
    }

    fn dispatch_keycode(&mut self, code: Option<KeyCode>, state: KeyState) {
        match code.and_then(key_from_keycode) {
            Some(key) => self.dispatch_key(key, state),
            None => tracing::trace!(?code, "ignoring untranslated key"),
        }
    }

    /// Opens the window and runs the frame loop until it is closed.
    pub fn run(self) -> Result<(), StageError> {
        let (width, height) = self.config.window_size;
        let (ctx, event_loop) = ContextBuilder::new("sprig", "Sprig Team")
            .window_setup(WindowSetup::default().title(&self.config.title))
            .window_mode(WindowMode::default().dimensions(width as f32, height as f32))
            .build()?;

        tracing::info!(
            "Stage started: {}x{} at {} fps, {} top-level objects",
            width,
            height,
            self.config.frame_rate,
            self.root.len()
        );
        event::run(ctx, event_loop, self)
    }
}

impl EventHandler for Stage {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, to_ggez_color(self.config.background));
        self.compose();
        rasterize(ctx, &mut canvas, &self.display)?;
        canvas.finish(ctx)?;
        self.pacer.wait();
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, repeated: bool) -> GameResult {
        if !repeated {
            self.dispatch_keycode(input.keycode, KeyState::Pressed);
        }
        Ok(())
    }

    fn key_up_event(&mut self, _ctx: &mut Context, input: KeyInput) -> GameResult {
        self.dispatch_keycode(input.keycode, KeyState::Released);
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        tracing::info!("Quit requested, closing stage");
        Ok(false)
    }
}
