//! Embedded content viewer backed by wry.

use owo_colors::OwoColorize;
use std::sync::{Arc, Mutex};
use taffy::{AlignSelf, Dimension, Size, Style};
use tao::window::Window;
use tracing::{debug, info};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::error::{Result, ShellError};
use crate::safe_area::Frame;
use crate::trace::{NavigationLog, tag};

/// How the viewer sizes itself inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Grow and shrink to fill both axes; no fixed width or height
    FlexFill,
}

/// A web view configured with one remote page.
///
/// The source is not validated. Whatever the engine makes of a malformed URL
/// (usually a blank page) is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentViewer {
    source: &'static str,
    sizing: Sizing,
}

impl ContentViewer {
    pub fn new(source: &'static str) -> Self {
        Self {
            source,
            sizing: Sizing::FlexFill,
        }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn sizing(&self) -> Sizing {
        self.sizing
    }

    /// Layout style for this viewer as a flex child.
    pub fn style(&self) -> Style {
        match self.sizing {
            Sizing::FlexFill => Style {
                flex_grow: 1.0,
                flex_shrink: 1.0,
                flex_basis: Dimension::Length(0.0),
                align_self: Some(AlignSelf::Stretch),
                size: Size::auto(),
                ..Default::default()
            },
        }
    }

    /// Builds the native web view as a child of `window` at `frame`.
    ///
    /// Load progress is traced but never acted on; every navigation the page
    /// asks for is allowed.
    pub fn attach(&self, window: &Window, frame: Frame, devtools: bool) -> Result<MountedViewer> {
        let log = Arc::new(Mutex::new(NavigationLog::new()));
        let nav_log = Arc::clone(&log);
        let load_log = Arc::clone(&log);

        let webview = WebViewBuilder::new()
            .with_url(self.source)
            .with_bounds(to_rect(frame))
            .with_devtools(devtools)
            .with_navigation_handler(move |url| {
                if let Ok(mut log) = nav_log.lock() {
                    let id = log.begin(&url);
                    info!("{} → {} {}", tag(&id), "NAV".cyan(), url);
                }
                true
            })
            .with_on_page_load_handler(move |event, url| match event {
                PageLoadEvent::Started => debug!("page load started: {}", url),
                PageLoadEvent::Finished => {
                    let finished = load_log.lock().ok().and_then(|mut log| log.finish(&url));
                    match finished {
                        Some((id, latency)) => info!(
                            "{} ← {} {} ({}ms)",
                            tag(&id),
                            "LOADED".green(),
                            url,
                            latency.as_millis()
                        ),
                        None => info!("← {} {}", "LOADED".green(), url),
                    }
                }
            })
            .build_as_child(window)
            .map_err(|e| ShellError::WebViewCreation(e.to_string()))?;

        info!("Viewer mounted: {} at {:?}", self.source, frame);
        Ok(MountedViewer { webview, log })
    }
}

/// A live web view placed inside the safe area.
pub struct MountedViewer {
    webview: WebView,
    log: Arc<Mutex<NavigationLog>>,
}

impl MountedViewer {
    /// Moves the web view to a freshly computed frame.
    pub fn resize(&self, frame: Frame) -> Result<()> {
        self.webview
            .set_bounds(to_rect(frame))
            .map_err(|e| ShellError::WebViewBounds(e.to_string()))
    }

    /// Navigations started but not yet loaded.
    pub fn pending_navigations(&self) -> usize {
        self.log.lock().map(|log| log.pending()).unwrap_or(0)
    }
}

fn to_rect(frame: Frame) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(frame.x, frame.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(frame.width, frame.height)),
    }
}
