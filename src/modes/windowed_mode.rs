use softbuffer::{Context, SoftBufferError, Surface};

use qoi::{Decoder, Header};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Fullscreen, Icon, Window, WindowId},
};

use std::{
    num::NonZeroU32,
    sync::{
        mpsc::{self, RecvTimeoutError, SyncSender},
        Arc,
    },
    thread,
};

use crate::{data::*, error::AppError};

type WindowSurface = Surface<Arc<Window>, Arc<Window>>;

struct WindowState {
    prog: Program,
    window: Option<Arc<Window>>,
    surface: Option<WindowSurface>,
    exit_sender: Option<SyncSender<()>>,
    final_buffer_size: PhysicalSize<u32>,

    /// First error hit inside a callback. Ends the event loop.
    error: Option<AppError>,
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Platforms that suspend keep the window we already have.
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Occluded(b) => {
                self.prog.set_hidden(b);
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                let Some(surface) = self.surface.as_mut() else {
                    return;
                };

                match Self::resize_surface(surface, width, height) {
                    Ok(true) => {
                        self.final_buffer_size = PhysicalSize::new(width, height);
                        self.prog.update_size(width, height);
                    }
                    Ok(false) => {}
                    Err(e) => log::error!("Unable to resize the window buffer: {e}"),
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }
}

impl WindowState {
    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        self.prog.print_startup_info();

        let (w, h) = self.prog.win_size();

        let mut window_attributes = Window::default_attributes()
            .with_title("cashburst")
            .with_inner_size(PhysicalSize::new(w, h))
            .with_resizable(true)
            .with_window_icon(read_icon());

        if self.prog.is_fullscreen() {
            window_attributes = window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let context = Context::new(window.clone())?;
        let mut surface = Surface::new(&context, window.clone())?;

        let size = window.inner_size();
        if Self::resize_surface(&mut surface, size.width, size.height)? {
            self.final_buffer_size = size;
            self.prog.update_size(size.width, size.height);
        }

        self.surface = Some(surface);

        if self.prog.rr_mode() != RefreshRateMode::Specified {
            Self::check_refresh_rate(&window, &mut self.prog);
        }

        let (exit_send, exit_recv) = mpsc::sync_channel(1);
        self.exit_sender = Some(exit_send);

        let interval = self.prog.refresh_rate();
        let pacer = window.clone();

        // Thread to control requesting redraws.
        let spawned = thread::Builder::new()
            .name("redraw-pacer".into())
            .spawn(move || loop {
                match exit_recv.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    _ => break,
                }

                if !pacer.is_minimized().unwrap_or(false) {
                    pacer.request_redraw();
                }
            });

        if let Err(e) = spawned {
            log::error!("Unable to start the redraw thread: {e}");
        }

        self.window = Some(window);

        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(window), Some(surface)) = (self.window.as_ref(), self.surface.as_mut()) else {
            return;
        };

        if self.prog.is_hidden() {
            return;
        }

        self.prog.render();

        match surface.buffer_mut() {
            Ok(mut buffer) => {
                self.prog
                    .composite(&mut buffer, self.final_buffer_size.width as usize);

                window.pre_present_notify();
                if let Err(e) = buffer.present() {
                    log::error!("Unable to present the frame: {e}");
                }
            }
            Err(e) => log::error!("Unable to get the window buffer: {e}"),
        }
    }

    /// Returns false, leaving the surface alone, when either side is zero.
    fn resize_surface(surface: &mut WindowSurface, w: u32, h: u32) -> Result<bool, SoftBufferError> {
        let (Some(w), Some(h)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
            return Ok(false);
        };

        surface.resize(w, h)?;

        Ok(true)
    }

    fn check_refresh_rate(window: &Window, prog: &mut Program) {
        let Some(Some(mut milli_hz)) = window
            .current_monitor()
            .map(|m| m.refresh_rate_millihertz())
        else {
            log::warn!(
                "Unable to query the monitor's refresh rate, staying at {}hz.",
                prog.milli_hz() as f32 / 1000.0
            );
            return;
        };

        if milli_hz > CAP_MILLI_HZ {
            milli_hz = CAP_MILLI_HZ;
            log::info!("Refresh rate has been capped to {}hz.", CAP_MILLI_HZ / 1000);
        }

        if milli_hz == prog.milli_hz() {
            return;
        }

        log::info!(
            "Detected refresh rate {}hz. Run with --fps to lock it.",
            milli_hz as f32 / 1000.0
        );

        prog.change_fps_frac(milli_hz);
    }
}

fn read_icon() -> Option<Icon> {
    decode_icon(include_bytes!("../../assets/cashburst_icon_32x32.qoi"))
}

fn decode_icon(icon_file: &[u8]) -> Option<Icon> {
    let mut icon = Decoder::new(icon_file)
        .map(|i| i.with_channels(qoi::Channels::Rgba))
        .inspect_err(|e| log::warn!("Failed to decode window icon: {e}"))
        .ok()?;

    let &Header { width, height, .. } = icon.header();

    let rgba = icon
        .decode_to_vec()
        .inspect_err(|e| log::warn!("Failed to decode window icon: {e}"))
        .ok()?;

    Icon::from_rgba(rgba, width, height)
        .inspect_err(|e| log::warn!("Failed to create window icon: {e}"))
        .ok()
}

pub fn winit_main(prog: Program) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;

    let mut state = WindowState {
        prog,
        window: None,
        surface: None,
        exit_sender: None,
        final_buffer_size: PhysicalSize::<u32>::new(0, 0),
        error: None,
    };

    event_loop.set_control_flow(ControlFlow::Wait);
    let result = event_loop.run_app(&mut state);

    if let Some(sender) = state.exit_sender.take() {
        let _ = sender.try_send(());
    }

    result?;

    match state.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_icon_decodes() {
        assert!(read_icon().is_some());
    }

    #[test]
    fn broken_icon_is_skipped() {
        assert!(decode_icon(b"not a qoi file").is_none());
        assert!(decode_icon(&[]).is_none());
    }
}
