//! Interactive demo: a dock area with drop indicators following the pointer
//!
//! Keys:
//! - `1`..`4` - number of panels in the dock area
//! - `Escape` - clear the hover (as if the drag ended)

use anyhow::Result;
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use segdrop::view::Frame;
use segdrop::{DockArea, IndicatorConfig, Point, SegmentedIndicators};

const BACKGROUND: u32 = 0xFF1E1F22;
const PANEL_BORDER: u32 = 0xFF4E5157;

struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Renderer {
    fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        Ok(Self {
            surface,
            width: size.width,
            height: size.height,
        })
    }

    fn render(&mut self, overlay: &SegmentedIndicators<DockArea>) -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(self.width), NonZeroU32::new(self.height))
        else {
            return Ok(());
        };
        self.surface
            .resize(w, h)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, self.width as usize, self.height as usize);
            frame.clear(BACKGROUND);
            for panel in overlay.host().panels() {
                let x = panel.x.max(0) as usize;
                let y = panel.y.max(0) as usize;
                frame.fill_rect_px(x, y, 1, panel.height.max(0) as usize, PANEL_BORDER);
                frame.fill_rect_px(x, y, panel.width.max(0) as usize, 1, PANEL_BORDER);
            }
            overlay.paint(&mut frame);
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

struct App {
    config: IndicatorConfig,
    overlay: Option<SegmentedIndicators<DockArea>>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
}

impl App {
    fn new(config: IndicatorConfig) -> Self {
        Self {
            config,
            overlay: None,
            renderer: None,
            window: None,
            context: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("segdrop")
            .with_inner_size(LogicalSize::new(800, 600));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;

        let size = window.inner_size();
        let mut area = DockArea::with_columns(size.width as i32, size.height as i32, 2);
        area.origin = window_origin(&window);

        let mut overlay = SegmentedIndicators::new(area, &mut self.config);
        overlay.resize();
        tracing::info!(
            opacity = ?self.config.dragged_window_opacity,
            "indicator overlay ready"
        );

        self.renderer = Some(Renderer::new(Rc::clone(&window), &context)?);
        self.overlay = Some(overlay);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    /// Returns true when the window needs to be redrawn
    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        let (Some(overlay), Some(window)) = (&mut self.overlay, &self.window) else {
            return false;
        };

        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.width = size.width;
                    renderer.height = size.height;
                }
                overlay
                    .host_mut()
                    .resize(size.width as i32, size.height as i32);
                overlay.resize();
            }
            WindowEvent::Moved(_) => {
                overlay.host_mut().origin = window_origin(window);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let origin = overlay.host().origin;
                let global = Point::new(position.x as i32, position.y as i32) + origin;
                overlay.host_mut().set_pointer(global);
                overlay.hover(global);
            }
            WindowEvent::CursorLeft { .. } => {
                overlay.host_mut().clear_pointer();
                overlay.remove_hover();
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match &event.logical_key {
                    Key::Named(NamedKey::Escape) => {
                        overlay.host_mut().clear_pointer();
                        overlay.remove_hover();
                    }
                    Key::Character(c) => {
                        if let Ok(count @ 1..=4) = c.parse::<usize>() {
                            tracing::debug!(count, "re-splitting dock area");
                            overlay.host_mut().split_columns(count);
                            overlay.resize();
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }

        overlay.host_mut().take_repaint_request()
    }

    fn render(&mut self) -> Result<()> {
        if let (Some(renderer), Some(overlay)) = (&mut self.renderer, &self.overlay) {
            renderer.render(overlay)?;
        }
        Ok(())
    }
}

/// Screen position of the window's client area, or the origin when the
/// platform can't report it
fn window_origin(window: &Window) -> Point {
    window
        .inner_position()
        .map(|p| Point::new(p.x, p.y))
        .unwrap_or_default()
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                tracing::error!("Failed to initialize window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
            }
            other => {
                if self.handle_event(&other) {
                    window.request_redraw();
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

fn main() -> Result<()> {
    segdrop::tracing::init();

    let config = IndicatorConfig::load();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
