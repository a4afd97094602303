use std::error::Error;
use std::time::Instant;

use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, StartCause, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;
use crate::timer::FixedStep;

pub struct AppConfig {
    pub title: String,
    /// Logical frame size; the window is created at this size and is not resizable.
    pub size: SurfaceSize,
    pub tick_hz: u32,
    pub vsync: bool,
}

/// A fixed-tick game driven by the window runner.
///
/// Every tick calls `tick` and then redraws. Input is forwarded as it arrives, between ticks, on
/// the same thread: `handle_key` for every pressed key, `handle_char` for every typed character.
pub trait GameApp {
    type State;

    fn init_state(&mut self) -> Self::State;

    fn handle_key(&mut self, _state: &mut Self::State, _key: VirtualKeyCode) {}

    /// Only keys that produce text (letters, digits, space, enter...) arrive here; modifiers and
    /// arrows do not.
    fn handle_char(&mut self, _state: &mut Self::State, _ch: char) {}

    fn tick(&mut self, state: &mut Self::State);

    fn render(&self, state: &Self::State, gfx: &mut dyn Renderer2d);
}

pub fn run_game<G>(config: AppConfig, mut game: G) -> Result<(), Box<dyn Error>>
where
    G: GameApp + 'static,
    G::State: 'static,
{
    let event_loop = EventLoop::new();
    let size = config.size;
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(PhysicalSize::new(size.width, size.height))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        PixelsBuilder::new(size.width, size.height, surface_texture)
            .enable_vsync(config.vsync)
            .build()?
    };
    log::info!(
        "opened \"{}\" window {}x{} at {} ticks/s",
        config.title,
        size.width,
        size.height,
        config.tick_hz
    );

    let mut state = game.init_state();
    let mut pacing = FixedStep::new(config.tick_hz, Instant::now());

    event_loop.run(move |event, _, control_flow| {
        if let ControlFlow::ExitWithCode(_) = *control_flow {
            return;
        }

        match event {
            Event::NewEvents(StartCause::Init) => {
                window.request_redraw();
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    log::info!("window closed");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        log::error!("resize failed: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    game.handle_key(&mut state, key);
                }
                WindowEvent::ReceivedCharacter(ch) => {
                    game.handle_char(&mut state, ch);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let due = pacing.due_ticks(Instant::now());
                for _ in 0..due {
                    game.tick(&mut state);
                }
                if due > 0 {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                {
                    let mut gfx = CpuRenderer::new(pixels.frame_mut(), size);
                    gfx.begin_frame(size);
                    game.render(&state, &mut gfx);
                }
                if let Err(err) = pixels.render() {
                    log::error!("present failed: {err}");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            _ => {}
        }

        *control_flow = ControlFlow::WaitUntil(pacing.next_deadline());
    });
}
