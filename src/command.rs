//! The per-frame command buffer.

use crate::error::UsageError;
use crate::layer::{ImageStyle, RectStyle, RegionStyle, TextStyle};
use crate::rect::Rect;

/// Identifies a region within one frame. Ids start at zero every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(pub u32);

/// A single draw operation. All rectangles are in global coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        style: RectStyle,
    },
    Text {
        rect: Rect,
        text: String,
        style: TextStyle,
    },
    Image {
        rect: Rect,
        style: ImageStyle,
    },
    /// Opens a region; everything up to the matching `EndRegion` is nested inside it.
    BeginRegion {
        id: RegionId,
        rect: Rect,
        style: RegionStyle,
    },
    /// Closes the innermost open region.
    EndRegion,
}

/// Kinds of nodes a command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Rect,
    Text,
    Image,
    Region,
}

impl DrawCommand {
    /// The node kind this command renders to, or `None` for `EndRegion`.
    pub fn node_kind(&self) -> Option<NodeKind> {
        match self {
            DrawCommand::Rect { .. } => Some(NodeKind::Rect),
            DrawCommand::Text { .. } => Some(NodeKind::Text),
            DrawCommand::Image { .. } => Some(NodeKind::Image),
            DrawCommand::BeginRegion { .. } => Some(NodeKind::Region),
            DrawCommand::EndRegion => None,
        }
    }
}

/// An open region. Must be passed back to `end_region`.
#[must_use = "regions must be closed with end_region"]
#[derive(Debug, PartialEq, Eq)]
pub struct Region {
    id: RegionId,
}

impl Region {
    pub fn id(&self) -> RegionId {
        self.id
    }
}

/// Ordered log of draw commands for one frame.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
    next_region: u32,
    /// Currently open regions, innermost last.
    open: Vec<RegionId>,
}

impl CommandBuffer {
    pub fn new() -> CommandBuffer {
        CommandBuffer::default()
    }

    /// Resets the buffer for a new frame.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.next_region = 0;
        self.open.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of regions that have been opened but not closed yet.
    pub fn open_regions(&self) -> usize {
        self.open.len()
    }

    pub fn push_rect(&mut self, rect: Rect, style: RectStyle) {
        self.commands.push(DrawCommand::Rect { rect, style });
    }

    pub fn push_text(&mut self, rect: Rect, text: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            rect,
            text: text.into(),
            style,
        });
    }

    pub fn push_image(&mut self, rect: Rect, style: ImageStyle) {
        self.commands.push(DrawCommand::Image { rect, style });
    }

    pub fn begin_region(&mut self, rect: Rect, style: RegionStyle) -> Region {
        let id = RegionId(self.next_region);
        self.next_region += 1;
        self.open.push(id);
        self.commands
            .push(DrawCommand::BeginRegion { id, rect, style });
        Region { id }
    }

    /// Closes a region.
    ///
    /// # Panics
    /// If `region` is not the innermost open region.
    pub fn end_region(&mut self, region: Region) {
        match self.open.last() {
            Some(id) if *id == region.id => {
                self.open.pop();
                self.commands.push(DrawCommand::EndRegion);
            }
            innermost => panic!(
                "{}",
                UsageError::MismatchedRegion {
                    expected: innermost.copied(),
                    found: region.id,
                }
            ),
        }
    }

    /// Checks that every region has been closed.
    ///
    /// # Panics
    /// If any region is still open.
    pub fn assert_balanced(&self) {
        if !self.open.is_empty() {
            panic!(
                "{}",
                UsageError::UnbalancedRegions {
                    open: self.open.len()
                }
            );
        }
    }

    /// Appends a raw command without any bookkeeping.
    ///
    /// Region balance is then only checked when the buffer is reconciled.
    pub fn push_raw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
