use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{ClickTracker, InputEvent, InputState};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Redraw every loop iteration instead of only after input/resize.
    pub continuous_redraw: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "pyra".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            continuous_redraw: false,
        }
    }
}

/// Runtime context passed to the application during a frame.
///
/// Requests are applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    redraw_requested: bool,
}

impl RuntimeCtx {
    /// Schedules another frame once the current one is done.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs the event loop until the window closes or the
    /// application asks to exit.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    clicks: ClickTracker,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            exit_requested: false,
            failure: None,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        log::info!("initializing GPU for window {:?}", window.id());

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            clicks: ClickTracker::new(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        let size = entry.borrow_gpu().size();
        self.app.on_resize(size.width, size.height);

        self.entry = Some(entry);
        Ok(())
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if release_window(&mut self.app, &mut self.entry) {
            log::info!("window closed; GPU context released");
        }
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.shutdown(event_loop);
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(entry) = self.entry.as_mut() else { return };
        entry.with_gpu_mut(|gpu| gpu.resize(new_size));
        self.app.on_resize(new_size.width, new_size.height);
        entry.borrow_window().request_redraw();
    }

    /// Translates, records and dispatches input. Returns `None` if the event
    /// is not input.
    fn dispatch_input(&mut self, event: &WindowEvent) -> Option<AppControl> {
        let (app, entry) = (&mut self.app, self.entry.as_mut()?);

        entry.with_mut(|fields| {
            let ev = translate_window_event(fields.window, fields.input_state, event)?;
            let control = dispatch_event(fields.clicks, fields.input_state, app, ev, Instant::now());

            fields.window.request_redraw();
            Some(control)
        })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let mut runtime_ctx = RuntimeCtx::default();
        let mut app_control = AppControl::Continue;

        let (app, Some(entry)) = (&mut self.app, self.entry.as_mut()) else { return };

        entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                runtime: &mut runtime_ctx,
            };
            app_control = app.on_frame(&mut ctx);
        });

        if app_control == AppControl::Exit {
            self.shutdown(event_loop);
            return;
        }

        if runtime_ctx.redraw_requested {
            entry.borrow_window().request_redraw();
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.fail(event_loop, e.context("failed to create viewer window"));
            return;
        }

        if let Some(entry) = self.entry.as_ref() {
            entry.borrow_window().request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        if self.config.continuous_redraw {
            if let Some(entry) = self.entry.as_ref() {
                entry.borrow_window().request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.dispatch_input(&event) == Some(AppControl::Exit) {
            self.shutdown(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.entry.as_ref().map(|e| e.borrow_window().inner_size()) {
                    self.resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        release_window(&mut self.app, &mut self.entry);
    }
}

/// Runs one translated event through double-click detection, state tracking
/// and the application, in that order.
///
/// A synthesized double click is delivered right after the press that
/// completed it. `state` already includes each event when the app sees it.
fn dispatch_event<A: CoreApp>(
    clicks: &mut ClickTracker,
    state: &mut InputState,
    app: &mut A,
    ev: InputEvent,
    now: Instant,
) -> AppControl {
    let double = clicks.observe(&ev, now);

    let mut control = AppControl::Continue;
    for ev in std::iter::once(ev).chain(double) {
        state.apply_event(&ev);
        if app.on_input(&ev, state) == AppControl::Exit {
            control = AppControl::Exit;
        }
    }
    control
}

/// Lets the app release its GPU resources, then drops the window entry (and
/// with it the device). Returns `false` if there was no window.
fn release_window<A: CoreApp, E>(app: &mut A, entry: &mut Option<E>) -> bool {
    if entry.is_none() {
        return false;
    }
    app.on_shutdown();
    *entry = None;
    true
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::input::{Modifiers, MouseButton, MouseButtonState, PointerButtonEvent};

    #[derive(Default)]
    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
        seen: Vec<(InputEvent, bool)>,
        exit_on_double: bool,
    }

    impl CoreApp for Recorder {
        fn on_input(&mut self, event: &InputEvent, state: &InputState) -> AppControl {
            self.seen.push((event.clone(), state.any_button_down()));
            match event {
                InputEvent::PointerDoubleClick { .. } if self.exit_on_double => AppControl::Exit,
                _ => AppControl::Continue,
            }
        }

        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> AppControl {
            AppControl::Continue
        }

        fn on_shutdown(&mut self) {
            self.log.borrow_mut().push("app shutdown".to_string());
        }
    }

    struct Entry(Rc<RefCell<Vec<String>>>);

    impl Drop for Entry {
        fn drop(&mut self) {
            self.0.borrow_mut().push("entry dropped".to_string());
        }
    }

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Pressed,
            x: 10.0,
            y: 10.0,
            modifiers: Modifiers::default(),
        })
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Released,
            x: 10.0,
            y: 10.0,
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn double_click_follows_the_completing_press() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::new();
        let mut state = InputState::default();
        let mut app = Recorder::default();

        for (ev, at) in [
            (press(MouseButton::Left), t0),
            (release(MouseButton::Left), t0 + Duration::from_millis(50)),
            (press(MouseButton::Left), t0 + Duration::from_millis(120)),
        ] {
            dispatch_event(&mut clicks, &mut state, &mut app, ev, at);
        }

        assert_eq!(
            app.seen,
            vec![
                (press(MouseButton::Left), true),
                (release(MouseButton::Left), false),
                (press(MouseButton::Left), true),
                (InputEvent::PointerDoubleClick { button: MouseButton::Left, x: 10.0, y: 10.0 }, true),
            ]
        );
    }

    #[test]
    fn exit_from_synthesized_event_is_reported() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::new();
        let mut state = InputState::default();
        let mut app = Recorder { exit_on_double: true, ..Default::default() };

        let first = dispatch_event(&mut clicks, &mut state, &mut app, press(MouseButton::Right), t0);
        let second = dispatch_event(
            &mut clicks,
            &mut state,
            &mut app,
            press(MouseButton::Right),
            t0 + Duration::from_millis(100),
        );

        assert_eq!(first, AppControl::Continue);
        assert_eq!(second, AppControl::Exit);
    }

    #[test]
    fn app_releases_resources_before_window_is_dropped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut app = Recorder { log: log.clone(), ..Default::default() };
        let mut entry = Some(Entry(log.clone()));

        assert!(release_window(&mut app, &mut entry));
        assert!(entry.is_none());
        assert_eq!(*log.borrow(), vec!["app shutdown", "entry dropped"]);

        // Second release (e.g. `exiting` after close) is a no-op.
        assert!(!release_window(&mut app, &mut entry));
        assert_eq!(log.borrow().len(), 2);
    }
}
