use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use instant::Instant;
use petpal::session::Session;
use petpal::settings::Settings;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId, WindowLevel};

use crate::gpu::GpuState;
use crate::overlay::EguiLayer;
use crate::ui::{self, UiAction};

/// How often the loop wakes up to advance animation and ticks.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);
/// Longest frame delta fed to the session (dragging/minimising stalls the loop).
const MAX_FRAME_DT: f64 = 1.0;
const WINDOW_SIZE: LogicalSize<f64> = LogicalSize::new(380.0, 460.0);

/// Top-level application state.
struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    egui: Option<EguiLayer>,

    session: Session,
    name_input: String,

    last_frame_time: Option<Instant>,
    /// Startup failure to hand back from `run`.
    fatal: Option<Box<dyn Error>>,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            window: None,
            gpu: None,
            egui: None,
            session: Session::new(settings),
            name_input: String::new(),
            last_frame_time: None,
            fatal: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        let attrs = WindowAttributes::default()
            .with_title("Tamagotchi Game")
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_inner_size(WINDOW_SIZE);

        let window = Arc::new(event_loop.create_window(attrs)?);
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let gpu = GpuState::new(window.clone())?;
        let egui = EguiLayer::new(&window, &gpu);
        log::info!("wgpu + egui initialized");

        event_loop.set_control_flow(ControlFlow::wait_duration(FRAME_INTERVAL));
        window.request_redraw();

        self.gpu = Some(gpu);
        self.egui = Some(egui);
        self.window = Some(window);
        Ok(())
    }

    fn apply(&mut self, action: UiAction, event_loop: &ActiveEventLoop) {
        match action {
            UiAction::Start => {
                if self.session.start(&self.name_input) {
                    self.name_input.clear();
                }
            }
            UiAction::Feed => self.session.feed(),
            UiAction::Play => self.session.play(),
            UiAction::Quit => {
                log::info!("Quit pressed, exiting");
                event_loop.exit();
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        // --- Timing ---
        let now = Instant::now();
        if let Some(last) = self.last_frame_time {
            let dt = now.duration_since(last).as_secs_f64().min(MAX_FRAME_DT);
            self.session.update(dt);
        }
        self.last_frame_time = Some(now);

        let (Some(window), Some(gpu), Some(egui)) = (&self.window, &self.gpu, &mut self.egui)
        else {
            return;
        };

        // --- UI ---
        let mut action = None;
        let size = window.inner_size();
        let frame = egui.run_frame(window, size.width, size.height, |ctx| {
            action = ui::draw(ctx, &self.session, &mut self.name_input);
        });

        // --- Render ---
        if let Some(mut fc) = gpu.begin_frame() {
            gpu.clear(&mut fc.encoder, &fc.view, ui::BG_RGB);
            let extra = egui.prepare(gpu, &mut fc.encoder, &frame);
            {
                let mut pass = GpuState::begin_egui_pass(&mut fc.encoder, &fc.view);
                egui.render(&mut pass, &frame);
            }
            gpu.finish_frame(fc.encoder, fc.output, extra);
        }
        egui.free_textures(&frame);

        if let Some(action) = action {
            self.apply(action, event_loop);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        // Timer wake-up: redraw for animation/ticks and arm the next one.
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(w) = &self.window {
                w.request_redraw();
            }
            event_loop.set_control_flow(ControlFlow::wait_duration(FRAME_INTERVAL));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(window), Some(egui)) = (&self.window, &mut self.egui) {
            if egui.on_window_event(window, &event) {
                window.request_redraw();
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

/// Create the event loop and run until the window closes.
pub fn run() -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(Settings::from_env());
    event_loop.run_app(&mut app)?;
    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
