//! Safe-area root container.
//!
//! The root is a single flex column whose padding equals the host's safe-area
//! insets. Its one child (the content viewer) flexes into whatever is left, so
//! the viewer never sits under a notch, status bar or home indicator.
//!
//! Layout runs through taffy on a two-node tree. All values are logical
//! pixels; rounding is disabled so frames line up with the native window's
//! own logical coordinates. taffy works in `f32`, so fractional geometry comes
//! back within about `1e-4` of the exact `f64` result.

use taffy::{
    AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage, NodeId, Rect, Size,
    Style, TaffyTree,
};
use tracing::debug;

use crate::error::Result;
use crate::viewer::ContentViewer;

/// Distances from each screen edge that are obscured by device chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub const ZERO: Insets = Insets::uniform(0.0);

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Shrinks the insets so they never exceed the viewport.
    ///
    /// Top and left win over bottom and right when the two sides of an axis
    /// overlap.
    pub fn clamped_to(self, viewport: Viewport) -> Self {
        let width = viewport.width.max(0.0);
        let height = viewport.height.max(0.0);
        let top = self.top.clamp(0.0, height);
        let left = self.left.clamp(0.0, width);
        Self {
            top,
            left,
            bottom: self.bottom.clamp(0.0, height - top),
            right: self.right.clamp(0.0, width - left),
        }
    }
}

/// Where safe-area insets come from.
pub trait SafeAreaSource {
    /// Current insets, or `None` when the host cannot tell.
    fn insets(&self) -> Option<Insets>;
}

/// Insets reported by the host window system.
///
/// tao does not expose safe-area insets on any platform, so this always
/// reports `None` and the root falls back to the full window bounds.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSafeArea;

impl SafeAreaSource for HostSafeArea {
    fn insets(&self) -> Option<Insets> {
        None
    }
}

/// Explicit insets, used when the host's own answer is overridden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedInsets(pub Insets);

impl SafeAreaSource for FixedInsets {
    fn insets(&self) -> Option<Insets> {
        Some(self.0)
    }
}

/// Logical size available to the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A positioned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// True when `other` lies entirely within `self`.
    pub fn contains(&self, other: &Frame) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountedLayout {
    /// The root container, always the full viewport
    pub container: Frame,
    /// The viewer, inside the safe area
    pub viewer: Frame,
    /// Insets actually applied after clamping
    pub insets: Insets,
}

/// Layout root holding exactly one content viewer.
pub struct SafeAreaRoot {
    tree: TaffyTree<()>,
    root: NodeId,
    viewer: NodeId,
    source: Box<dyn SafeAreaSource>,
}

impl std::fmt::Debug for SafeAreaRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafeAreaRoot")
            .field("root", &self.root)
            .field("viewer", &self.viewer)
            .finish_non_exhaustive()
    }
}

impl SafeAreaRoot {
    /// Mounts the root with `viewer` as its sole child.
    pub fn mount(source: Box<dyn SafeAreaSource>, viewer: &ContentViewer) -> Result<Self> {
        let mut tree = TaffyTree::new();
        tree.disable_rounding();

        let viewer_node = tree.new_leaf(viewer.style())?;
        let root = tree.new_with_children(
            root_style(Viewport::new(0.0, 0.0), Insets::ZERO),
            &[viewer_node],
        )?;

        Ok(Self {
            tree,
            root,
            viewer: viewer_node,
            source,
        })
    }

    /// Number of children under the root. Always one.
    pub fn child_count(&self) -> Result<usize> {
        Ok(self.tree.children(self.root)?.len())
    }

    /// Lays out the root for `viewport` using the source's current insets.
    ///
    /// Frames pass through `f32`; compare fractional results with a tolerance.
    pub fn compute(&mut self, viewport: Viewport) -> Result<MountedLayout> {
        let insets = self
            .source
            .insets()
            .unwrap_or(Insets::ZERO)
            .clamped_to(viewport);

        self.tree
            .set_style(self.root, root_style(viewport, insets))?;
        self.tree.compute_layout(
            self.root,
            Size {
                width: AvailableSpace::Definite(viewport.width.max(0.0) as f32),
                height: AvailableSpace::Definite(viewport.height.max(0.0) as f32),
            },
        )?;

        let root_layout = self.tree.layout(self.root)?;
        let viewer_layout = self.tree.layout(self.viewer)?;

        let container = Frame {
            x: root_layout.location.x as f64,
            y: root_layout.location.y as f64,
            width: root_layout.size.width as f64,
            height: root_layout.size.height as f64,
        };
        let viewer = Frame {
            x: container.x + viewer_layout.location.x as f64,
            y: container.y + viewer_layout.location.y as f64,
            width: viewer_layout.size.width as f64,
            height: viewer_layout.size.height as f64,
        };

        debug!(?container, ?viewer, ?insets, "safe-area layout computed");

        Ok(MountedLayout {
            container,
            viewer,
            insets,
        })
    }
}

fn root_style(viewport: Viewport, insets: Insets) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        size: Size {
            width: Dimension::Length(viewport.width.max(0.0) as f32),
            height: Dimension::Length(viewport.height.max(0.0) as f32),
        },
        padding: Rect {
            top: LengthPercentage::Length(insets.top as f32),
            right: LengthPercentage::Length(insets.right as f32),
            bottom: LengthPercentage::Length(insets.bottom as f32),
            left: LengthPercentage::Length(insets.left as f32),
        },
        ..Default::default()
    }
}
