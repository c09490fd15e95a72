use crate::backend::Backend;
use crate::command::{DrawCommand, NodeKind};
use crate::error::{Error, UsageError};
use crate::patch::{self, px, Applied, StyleMap};
use crate::rect::Rect;
use cgmath::Point2;
use log::trace;

/// Counts of what a reconciliation pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileStats {
    /// Number of commands walked.
    pub commands: usize,
    /// Backend nodes created, including recreations.
    pub created: usize,
    /// Cache entries whose node had to be replaced because the kind or parent changed.
    pub recreated: usize,
    /// Cache entries reused in place.
    pub reused: usize,
    pub style_writes: usize,
    pub text_writes: usize,
    pub shown: usize,
    pub hidden: usize,
}

/// A cached backend node, owned by the slot it was created for.
#[derive(Debug)]
struct CacheEntry<N> {
    node: N,
    kind: NodeKind,
    parent: N,
    /// Style properties as last written to the backend.
    applied: Applied,
    /// Text content as last written to the backend.
    text: Option<String>,
    /// Visibility as last written to the backend.
    visible: bool,
    /// Whether a command used this entry in the current pass.
    seen: bool,
}

impl<N: Clone + PartialEq> CacheEntry<N> {
    fn new(node: N, kind: NodeKind, parent: N) -> CacheEntry<N> {
        CacheEntry {
            node,
            kind,
            parent,
            applied: Applied::new(),
            text: None,
            visible: true,
            seen: false,
        }
    }

    /// Writes changed styles and text.
    ///
    /// Cached values are only updated once the backend has accepted them.
    fn apply<B: Backend<Node = N>>(
        &mut self,
        backend: &mut B,
        styles: &StyleMap,
        text: Option<&str>,
        stats: &mut ReconcileStats,
    ) -> Result<(), B::Error> {
        self.seen = true;

        for patch in patch::diff(&self.applied, styles) {
            backend.set_style_property(&self.node, &patch.key, &patch.value)?;
            stats.style_writes += 1;
            if patch.value.is_empty() {
                self.applied.remove(&patch.key);
            } else {
                self.applied.insert(patch.key, patch.value);
            }
        }

        if let Some(text) = text {
            if self.text.as_deref() != Some(text) {
                backend.set_text(&self.node, text)?;
                stats.text_writes += 1;
                self.text = Some(text.into());
            }
        }

        Ok(())
    }
}

/// An entry on the region stack during a pass.
struct RegionFrame<N> {
    node: N,
    /// The region’s origin in global coordinates.
    origin: Point2<f64>,
}

/// Maps each frame’s command buffer onto persistent backend nodes.
///
/// Nodes are cached by the ordinal position of the command that produced them. A slot keeps its
/// node as long as the command at that position has the same kind and the same parent; otherwise
/// the old node is hidden and a new one is created. Unused slots are hidden, never destroyed, so
/// the cache only grows.
#[derive(Debug)]
pub struct ElementTree<N> {
    entries: Vec<Option<CacheEntry<N>>>,
    root_applied: Applied,
}

impl<N: Clone + PartialEq> Default for ElementTree<N> {
    fn default() -> Self {
        ElementTree::new()
    }
}

impl<N: Clone + PartialEq> ElementTree<N> {
    pub fn new() -> ElementTree<N> {
        ElementTree {
            entries: Vec::new(),
            root_applied: Applied::new(),
        }
    }

    /// Number of slots that currently own a node.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the node owned by a command slot.
    pub fn node(&self, slot: usize) -> Option<&N> {
        self.entries
            .get(slot)
            .and_then(Option::as_ref)
            .map(|entry| &entry.node)
    }

    /// Reconciles a frame’s commands and root properties with the backend.
    ///
    /// # Panics
    /// If the commands contain unbalanced regions. This is checked before anything is written.
    ///
    /// # Errors
    /// If a backend operation fails, the pass stops there. The cache still describes exactly what
    /// the backend holds, so the next pass picks up where this one failed.
    pub fn reconcile<B: Backend<Node = N>>(
        &mut self,
        backend: &mut B,
        root: &N,
        commands: &[DrawCommand],
        root_styles: &StyleMap,
    ) -> Result<ReconcileStats, Error<B::Error>> {
        check_balance(commands);

        let mut stats = ReconcileStats {
            commands: commands.len(),
            ..ReconcileStats::default()
        };

        for entry in self.entries.iter_mut().flatten() {
            entry.seen = false;
        }
        if self.entries.len() < commands.len() {
            self.entries.resize_with(commands.len(), || None);
        }

        let mut stack: Vec<RegionFrame<N>> = Vec::new();

        for (slot, command) in commands.iter().enumerate() {
            let kind = match command.node_kind() {
                Some(kind) => kind,
                None => {
                    stack.pop();
                    continue;
                }
            };

            let (parent, origin) = match stack.last() {
                Some(region) => (region.node.clone(), region.origin),
                None => (root.clone(), Point2::new(0., 0.)),
            };

            let mut styles = StyleMap::new();
            let mut text = None;
            let rect = match command {
                DrawCommand::Rect { rect, style } => {
                    position(&mut styles, *rect - origin);
                    style.write_to(&mut styles);
                    rect
                }
                DrawCommand::Text { rect, text: t, style } => {
                    position(&mut styles, *rect - origin);
                    style.write_to(&mut styles);
                    text = Some(t.as_str());
                    rect
                }
                DrawCommand::Image { rect, style } => {
                    position(&mut styles, *rect - origin);
                    style.write_to(&mut styles);
                    rect
                }
                DrawCommand::BeginRegion { rect, style, .. } => {
                    position(&mut styles, *rect - origin);
                    style.write_to(&mut styles);
                    rect
                }
                DrawCommand::EndRegion => continue,
            };

            let mut entry = self.resolve(backend, slot, kind, &parent, &mut stats)?;
            let result = entry.apply(backend, &styles, text, &mut stats);
            let node = entry.node.clone();
            self.entries[slot] = Some(entry);
            result.map_err(Error::backend(Some(slot)))?;

            if kind == NodeKind::Region {
                stack.push(RegionFrame {
                    node,
                    origin: rect.origin(),
                });
            }
        }

        for (slot, cell) in self.entries.iter_mut().enumerate() {
            if let Some(entry) = cell {
                if entry.seen != entry.visible {
                    backend
                        .set_visible(&entry.node, entry.seen)
                        .map_err(Error::backend(Some(slot)))?;
                    entry.visible = entry.seen;
                    if entry.seen {
                        stats.shown += 1;
                    } else {
                        stats.hidden += 1;
                    }
                }
            }
        }

        for patch in patch::diff(&self.root_applied, root_styles) {
            backend
                .set_style_property(root, &patch.key, &patch.value)
                .map_err(Error::backend(None))?;
            trace!("root {} = {:?}", patch.key, patch.value);
            stats.style_writes += 1;
            if patch.value.is_empty() {
                self.root_applied.remove(&patch.key);
            } else {
                self.root_applied.insert(patch.key, patch.value);
            }
        }

        Ok(stats)
    }

    /// Takes the cache entry for a slot if it can be reused, or creates a new one.
    ///
    /// On error, the slot is left as it was (apart from the old node being hidden).
    fn resolve<B: Backend<Node = N>>(
        &mut self,
        backend: &mut B,
        slot: usize,
        kind: NodeKind,
        parent: &N,
        stats: &mut ReconcileStats,
    ) -> Result<CacheEntry<N>, Error<B::Error>> {
        match self.entries[slot].take() {
            Some(entry) if entry.kind == kind && entry.parent == *parent => {
                stats.reused += 1;
                Ok(entry)
            }
            old => {
                if let Some(mut old) = old {
                    trace!(
                        "slot {}: {:?} -> {:?}, recreating node",
                        slot,
                        old.kind,
                        kind
                    );
                    if old.visible {
                        if let Err(source) = backend.set_visible(&old.node, false) {
                            self.entries[slot] = Some(old);
                            return Err(Error::Backend {
                                slot: Some(slot),
                                source,
                            });
                        }
                        old.visible = false;
                        stats.hidden += 1;
                    }
                    stats.recreated += 1;
                    // the old node stays hidden in the backend; keep it until the new one exists
                    self.entries[slot] = Some(old);
                }

                let node = backend
                    .create_node(parent)
                    .map_err(Error::backend(Some(slot)))?;
                stats.created += 1;
                Ok(CacheEntry::new(node, kind, parent.clone()))
            }
        }
    }
}

/// Writes absolute positioning for a rectangle in parent coordinates. Swapped corners are fine.
fn position(styles: &mut StyleMap, local: Rect) {
    styles.set("position", "absolute");
    styles.set("left", px(local.x0.min(local.x1)));
    styles.set("top", px(local.y0.min(local.y1)));
    styles.set("width", px(local.width()));
    styles.set("height", px(local.height()));
}

/// # Panics
/// If the regions in `commands` don’t nest properly.
fn check_balance(commands: &[DrawCommand]) {
    let mut depth = 0usize;
    for (slot, command) in commands.iter().enumerate() {
        match command {
            DrawCommand::BeginRegion { .. } => depth += 1,
            DrawCommand::EndRegion => {
                if depth == 0 {
                    panic!("{}", UsageError::EndWithoutBegin { slot });
                }
                depth -= 1;
            }
            _ => (),
        }
    }
    if depth != 0 {
        panic!("{}", UsageError::UnbalancedRegions { open: depth });
    }
}
