//! Desktop simulator for the wtk-rs widget toolkit.
//!
//! Renders the demo widget contexts in an SDL2 window via
//! `embedded-graphics-simulator` and forwards mouse clicks through the
//! toolkit's touch queue, exactly the way a touch-controller interrupt
//! feeds the real device.
//!
//! # Bindings
//!
//! | Input       | Action                     |
//! |-------------|----------------------------|
//! | Left click  | Touch press + release      |
//! | Q / Escape  | Quit                       |

mod screens;

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use wtk_core::{Dispatch, TouchEvent, TouchPoint, TouchQueue, TouchSample, Ui};

use crate::screens::{Request, Screen, ScreenId};

/// Panel dimensions of the reference hardware (portrait).
const DISPLAY_WIDTH_PX: u32 = 240;
const DISPLAY_HEIGHT_PX: u32 = 320;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Same queue the firmware's touch interrupt would push into.
static TOUCH: TouchQueue = TouchQueue::new();

fn main() {
    env_logger::init();
    info!("Starting wtk-rs simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );

    // SDL2 display and window
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
        DISPLAY_WIDTH_PX,
        DISPLAY_HEIGHT_PX,
    ));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("wtk-rs Simulator", &output_settings);

    // Toolkit context and the first screen
    let mut ui = Ui::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let requests: screens::Requests = Rc::new(Cell::new(None));
    let mut screen = match Screen::open(ScreenId::Main, &mut ui, &requests) {
        Ok(screen) => screen,
        Err(e) => {
            error!("failed to build the main screen: {e}");
            return;
        }
    };

    let started = Instant::now();

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(Rgb565::BLACK);
    if let Err(e) = ui.draw(&mut display) {
        error!("draw error: {e:?}");
    }
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    let sample = TouchSample {
                        event: TouchEvent::Press(TouchPoint::new(
                            point.x.max(0) as u16,
                            point.y.max(0) as u16,
                        )),
                        timestamp_ms: started.elapsed().as_millis() as u64,
                    };
                    TOUCH.try_push(sample);
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    let sample = TouchSample {
                        event: TouchEvent::Release(TouchPoint::new(
                            point.x.max(0) as u16,
                            point.y.max(0) as u16,
                        )),
                        timestamp_ms: started.elapsed().as_millis() as u64,
                    };
                    TOUCH.try_push(sample);
                }

                _ => {}
            }
        }

        // --- Drain the touch queue ----------------------------------------
        while let Some(sample) = TOUCH.poll() {
            match ui.handle_touch(sample.event) {
                Ok(Dispatch::Consumed { teardown, .. }) => {
                    if teardown {
                        // The frame asked for its screen to go away; the
                        // handler only signalled, tearing down is our job.
                        screen.close(&mut ui);
                        let next = match requests.take() {
                            Some(Request::Navigate(id)) => id,
                            _ => ScreenId::Main,
                        };
                        info!("navigating to {:?}", next);
                        screen = match Screen::open(next, &mut ui, &requests) {
                            Ok(screen) => screen,
                            Err(e) => {
                                error!("failed to build {:?}: {e}", next);
                                break 'running;
                            }
                        };
                    }
                }
                Ok(Dispatch::Dropped) => {}
                Err(e) => error!("touch handling error: {e}"),
            }

            // Non-navigation requests from the frame handler.
            if let Some(Request::Status(status)) = requests.take() {
                info!("status: {status}");
                if let Err(e) = screen.set_status(&mut ui, status) {
                    error!("status update failed: {e}");
                }
            }
        }

        // --- Render -------------------------------------------------------
        if let Err(e) = ui.flush(&mut display) {
            error!("draw error: {e:?}");
        }
        // Unconditional so the SDL window stays responsive while idle.
        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
