//! Composition root: one window, one safe-area root, one viewer.

use tao::dpi::{LogicalSize, PhysicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop};
use tao::window::WindowBuilder;
use tracing::{debug, info, warn};

use crate::config::ShellConfig;
use crate::error::{Result, ShellError};
use crate::safe_area::{
    FixedInsets, HostSafeArea, MountedLayout, SafeAreaRoot, SafeAreaSource, Viewport,
};
use crate::viewer::ContentViewer;

/// The application shell.
#[derive(Debug, Clone)]
pub struct Shell {
    config: ShellConfig,
    viewer: ContentViewer,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let viewer = ContentViewer::new(config.source());
        Self { config, viewer }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn viewer(&self) -> &ContentViewer {
        &self.viewer
    }

    /// Builds the layout tree with the viewer mounted under the safe-area root.
    pub fn mount_layout(&self) -> Result<SafeAreaRoot> {
        let source: Box<dyn SafeAreaSource> = match self.config.inset_override {
            Some(insets) => Box::new(FixedInsets(insets)),
            None => Box::new(HostSafeArea),
        };
        SafeAreaRoot::mount(source, &self.viewer)
    }

    /// Computes the initial layout without touching the window system.
    pub fn dry_run(&self) -> Result<MountedLayout> {
        let mut root = self.mount_layout()?;
        root.compute(Viewport::new(self.config.width, self.config.height))
    }

    /// Opens the window, mounts the viewer and runs the event loop.
    ///
    /// Returns only if setup fails; once the loop starts the process exits
    /// from inside it.
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new();

        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .build(&event_loop)
            .map_err(|e| ShellError::WindowCreation(e.to_string()))?;

        let mut root = self.mount_layout()?;
        let layout = root.compute(logical_viewport(
            window.inner_size(),
            window.scale_factor(),
        ))?;
        let viewer = self
            .viewer
            .attach(&window, layout.viewer, self.config.devtools)?;

        info!("Window open: {}", self.config.title);

        event_loop.run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    debug!(
                        "closing with {} navigation(s) still loading",
                        viewer.pending_navigations()
                    );
                    *control_flow = ControlFlow::Exit;
                }
                Event::WindowEvent {
                    event: WindowEvent::Resized(size),
                    ..
                } => {
                    let viewport = logical_viewport(size, window.scale_factor());
                    let resized = root
                        .compute(viewport)
                        .and_then(|layout| viewer.resize(layout.viewer));
                    if let Err(e) = resized {
                        warn!("Relayout after resize failed: {}", e);
                    }
                }
                _ => {}
            }
        })
    }
}

fn logical_viewport(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let logical: LogicalSize<f64> = size.to_logical(scale_factor);
    Viewport::new(logical.width, logical.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REMOTE_URL;
    use crate::safe_area::Insets;

    #[test]
    fn test_viewer_is_wired_to_config_source() {
        let shell = Shell::new(ShellConfig::default());
        assert_eq!(shell.viewer().source(), REMOTE_URL);
    }

    #[test]
    fn test_dry_run_uses_override() {
        let shell = Shell::new(ShellConfig {
            inset_override: Some(Insets::new(20.0, 0.0, 0.0, 0.0)),
            width: 400.0,
            height: 300.0,
            ..ShellConfig::default()
        });
        let layout = shell.dry_run().unwrap();
        assert_eq!(layout.viewer.y, 20.0);
        assert_eq!(layout.viewer.height, 280.0);
    }

    #[test]
    fn test_logical_viewport_scales() {
        let viewport = logical_viewport(PhysicalSize::new(1170, 2532), 3.0);
        assert_eq!(viewport, Viewport::new(390.0, 844.0));
    }
}
