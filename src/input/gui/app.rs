use std::error::Error;

use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

use crate::controllers::session::config::SessionConfig;
use crate::controllers::session::controller::SessionController;
use crate::controllers::session::events::InputEvent;
use crate::core::data::point::Point;
use crate::input::gui::presenter::PixelsPresenter;
use crate::input::gui::translate::{cursor_point, key_command, scroll_delta, window_point};
use crate::presenters::file::png::PngDirectorySink;

const WINDOW_TITLE: &str = "Fractal Viewer";
const MIN_WINDOW_EXTENT: u32 = 64;

fn dispatch(controller: &mut SessionController<PngDirectorySink>, event: InputEvent) {
    if let Err(err) = controller.handle_event(event) {
        log::warn!("{}", err);
    }
}

/// Opens the interactive window and runs until it is closed.
pub struct RunGuiCommand {
    config: SessionConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        let dimensions = self.config.dimensions;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(dimensions.width(), dimensions.height()))
                .with_min_inner_size(PhysicalSize::new(MIN_WINDOW_EXTENT, MIN_WINDOW_EXTENT))
                .build(&event_loop)?,
        ));

        let sink = PngDirectorySink::new(&self.config.pictures_dir);
        let mut controller = SessionController::new(&self.config, sink)?;
        let mut presenter = PixelsPresenter::new(window)?;
        let mut cursor = Point::default();

        // The platform may not honour the requested size exactly.
        let window_position = window.outer_position().map(window_point).unwrap_or_default();
        let size = window.inner_size();
        dispatch(&mut controller, InputEvent::Moved { window_position });
        dispatch(
            &mut controller,
            InputEvent::Resized {
                width: size.width,
                height: size.height,
                window_position,
            },
        );

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::CursorMoved { position, .. } => cursor = cursor_point(position),
                WindowEvent::MouseWheel { delta, .. } => dispatch(
                    &mut controller,
                    InputEvent::Scrolled {
                        pointer: cursor,
                        delta: scroll_delta(delta),
                    },
                ),
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => dispatch(&mut controller, InputEvent::Clicked { pointer: cursor }),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                } => {
                    if let Some(command) = key_command(code) {
                        dispatch(&mut controller, InputEvent::Key(command));
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = presenter.resize(size.width, size.height) {
                        log::error!("failed to resize surface: {}", err);
                        elwt.exit();
                        return;
                    }

                    let window_position =
                        window.outer_position().map(window_point).unwrap_or_default();

                    dispatch(
                        &mut controller,
                        InputEvent::Resized {
                            width: size.width,
                            height: size.height,
                            window_position,
                        },
                    );
                    window.request_redraw();
                }
                WindowEvent::Moved(position) => dispatch(
                    &mut controller,
                    InputEvent::Moved {
                        window_position: window_point(position),
                    },
                ),
                WindowEvent::RedrawRequested => {
                    if let Err(err) = presenter.present(controller.frame()) {
                        log::error!("render error: {}", err);
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if controller.regenerate_if_needed() {
                    window.set_title(&format!(
                        "{} | {}",
                        WINDOW_TITLE,
                        controller.state().status_line()
                    ));
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
