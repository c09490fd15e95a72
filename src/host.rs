use crate::backend::Backend;
use crate::color::Color;
use crate::command::CommandBuffer;
use crate::error::Error;
use crate::events::{InputQueue, InputSender, InputState};
use crate::frame::Frame;
use crate::interaction::Registry;
use crate::patch::StyleMap;
use crate::text::{MonospaceMeasure, TextMeasure};
use crate::tree::{ElementTree, ReconcileStats};
use cgmath::Vector2;
use log::{debug, warn};
use std::time::Duration;

/// Host configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Initial viewport size.
    pub viewport: Vector2<f64>,

    /// Root cursor while any element is hovered.
    pub hover_cursor: String,

    /// Root cursor otherwise.
    pub default_cursor: String,

    /// Root background color until a frame calls `clear`.
    pub clear_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            viewport: Vector2::new(800., 600.),
            hover_cursor: "pointer".into(),
            default_cursor: "default".into(),
            clear_color: Color::BLACK,
        }
    }
}

/// What happened during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub index: u64,
    pub delta: Duration,
    /// Number of input events applied at the start of the frame.
    pub events: usize,
    pub reconcile: ReconcileStats,
}

/// Connects an immediate-mode UI to a backend.
///
/// Owns everything one UI root needs: input state, the interaction registry, the command buffer
/// and the element cache. Hosts are independent of each other.
pub struct Host<B: Backend> {
    backend: B,
    root: B::Node,
    config: Config,
    input: InputState,
    queue: InputQueue,
    registry: Registry,
    buffer: CommandBuffer,
    tree: ElementTree<B::Node>,
    measure: Box<dyn TextMeasure>,
    viewport: Vector2<f64>,
    clear_color: Color,
    last_timestamp: Option<Duration>,
    frame_index: u64,
}

impl<B: Backend> Host<B> {
    /// Creates a new host rendering into `root`.
    ///
    /// Nothing is written to the backend until the first frame.
    pub fn new(backend: B, root: B::Node, config: Config) -> Host<B> {
        Host {
            backend,
            root,
            input: InputState::new(),
            queue: InputQueue::new(),
            registry: Registry::new(),
            buffer: CommandBuffer::new(),
            tree: ElementTree::new(),
            measure: Box::new(MonospaceMeasure::default()),
            viewport: config.viewport,
            clear_color: config.clear_color,
            last_timestamp: None,
            frame_index: 0,
            config,
        }
    }

    /// Returns a sender for input events, to be handed to whatever captures input.
    pub fn input_sender(&self) -> InputSender {
        self.queue.sender()
    }

    pub fn set_text_measure<M: TextMeasure + 'static>(&mut self, measure: M) {
        self.measure = Box::new(measure);
    }

    pub fn set_viewport(&mut self, size: Vector2<f64>) {
        self.viewport = size;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn root(&self) -> &B::Node {
        &self.root
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn tree(&self) -> &ElementTree<B::Node> {
        &self.tree
    }

    /// Runs one frame.
    ///
    /// `timestamp` is a monotonic time since an arbitrary epoch. Queued input is applied first,
    /// then `build` describes the UI, which is reconciled with the backend. Hover resolution and
    /// input edge flags advance afterwards, even if reconciliation failed.
    ///
    /// # Panics
    /// If `build` leaves a region open.
    pub fn frame<F>(&mut self, timestamp: Duration, build: F) -> Result<FrameStats, Error<B::Error>>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        let events = self.queue.drain_into(&mut self.input);
        let delta = match self.last_timestamp {
            Some(previous) => timestamp.checked_sub(previous).unwrap_or_default(),
            None => Duration::from_secs(0),
        };
        self.last_timestamp = Some(timestamp);
        self.buffer.clear();

        build(&mut Frame {
            input: &self.input,
            registry: &mut self.registry,
            buffer: &mut self.buffer,
            measure: &*self.measure,
            clear_color: &mut self.clear_color,
            viewport: self.viewport,
            delta,
            index: self.frame_index,
        });
        self.buffer.assert_balanced();

        let root_styles = self.root_styles();
        let result = self.tree.reconcile(
            &mut self.backend,
            &self.root,
            self.buffer.commands(),
            &root_styles,
        );

        self.registry.end_frame();
        self.input.end_frame();
        let index = self.frame_index;
        self.frame_index += 1;

        match result {
            Ok(reconcile) => {
                debug!(
                    "frame {}: {} commands, {} created ({} recreated), {} style writes, {} text writes",
                    index,
                    reconcile.commands,
                    reconcile.created,
                    reconcile.recreated,
                    reconcile.style_writes,
                    reconcile.text_writes
                );
                Ok(FrameStats {
                    index,
                    delta,
                    events,
                    reconcile,
                })
            }
            Err(err) => {
                warn!("frame {} failed: {}", index, err);
                Err(err)
            }
        }
    }

    fn root_styles(&self) -> StyleMap {
        let cursor = if self.registry.hover_id().is_none() {
            &self.config.default_cursor
        } else {
            &self.config.hover_cursor
        };
        let mut styles = StyleMap::new();
        styles.set("cursor", cursor.clone());
        styles.set("background-color", self.clear_color.to_css());
        styles
    }
}
