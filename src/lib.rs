//! Immediate-mode UI runtime.
//!
//! # Conceptual overview
//! Tern is an immediate-mode UI library: every frame, application code describes the entire
//! interface from scratch as a flat list of draw commands. The runtime then reconciles that list
//! against a persistent tree of backend nodes (such as DOM elements), touching only what changed.
//!
//! ## Frames
//! A [`Host`] owns everything one UI root needs and runs a frame whenever [`Host::frame`] is
//! called, typically once per display refresh. During a frame, application code receives a
//! [`Frame`], through which it reads input, resolves interaction, and emits draw commands.
//!
//! ## Commands and regions
//! Draw commands are rectangles, text, and images, all positioned with explicit rectangles in one
//! global coordinate space; there is no automatic layout. Regions group commands: everything
//! drawn between `begin_region` and the matching `end_region` is nested inside a container node
//! (which may clip its contents). Regions must be closed in order. Leaving one open, or closing
//! one that isn’t innermost, is a programming error and panics.
//!
//! ## Reconciliation
//! Backend nodes are cached by the position of the command that produced them in the frame’s
//! list. If a command at the same position has the same kind and parent as last frame, its node
//! is reused and only changed style properties are written. Otherwise a new node is created.
//! Nodes not used by a frame are hidden rather than destroyed. An identical frame therefore costs
//! no backend writes at all.
//!
//! Conditional drawing shifts the positions of all following commands, which makes them miss the
//! cache. Emitting optional content last keeps this cheap.
//!
//! ## Interaction
//! Widgets have no persistent identity; they are identified by an [`InteractionId`] hashed from
//! their rectangle and a salt. A widget is hit-tested while it is drawn, and the last one drawn
//! under the pointer becomes the hovered widget, but only from the next frame on. Clicking
//! requires that the widget was already hovered, and focuses it.
//!
//! ## Input
//! Input events are sent to the host through an [`InputSender`] from any thread, and are applied
//! at the start of the next frame. Press and release edges are visible for exactly one frame.
//!
//! ## Coordinate System
//! The origin is at the top left corner of the root node. The y-axis is oriented such that
//! positive y points down.

pub mod backend;
pub mod color;
mod command;
mod error;
pub mod events;
mod frame;
mod host;
pub mod interaction;
mod layer;
mod patch;
mod rect;
pub mod text;
mod tree;
pub mod widgets;

pub use backend::Backend;
pub use color::Color;
pub use command::{CommandBuffer, DrawCommand, NodeKind, Region, RegionId};
pub use error::{Error, UsageError};
pub use events::{InputEvent, InputSender, InputState, KeyCode};
pub use frame::Frame;
pub use host::{Config, FrameStats, Host};
pub use interaction::{InteractionId, Registry};
pub use layer::{Extra, Font, ImageStyle, RectStyle, RegionStyle, TextStyle};
pub use patch::{StyleMap, StylePatch};
pub use rect::Rect;
pub use tree::{ElementTree, ReconcileStats};
