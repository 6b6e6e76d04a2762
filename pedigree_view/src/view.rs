// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree presentation state machine.

use alloc::vec::Vec;

use hashbrown::HashSet;
use pedigree_record::{AttributeFormatter, DogId, DogRecord};
use pedigree_selection::Selected;
use pedigree_tree::{AttributeKey, DisplayNode, reverse_transform, transform};

/// Keyboard actions a focused tree node understands.
///
/// These are accessibility requirements: expand/collapse and moving focus to
/// the detail view must stay operable without a pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Toggle visibility of the focused node's ancestor subtree.
    ToggleAncestors,
    /// Ask the host to move focus to the external detail view.
    FocusDetails,
}

/// Events the view hands back to its host.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    /// The selection changed; the payload is the full backend record
    /// (recovered via the reverse transform, not rebuilt from display
    /// attributes) for the detail panel to render.
    SelectionChanged(DogRecord),
    /// The user asked to inspect the given node's details; the host should
    /// move focus to the detail view.
    DetailsRequested(DogId),
}

/// One flattened render row.
///
/// Rows are emitted depth-first, dam before sire, skipping the subtrees of
/// collapsed nodes. Hosts own layout and drawing entirely.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Row<'a> {
    /// Stable identity of the underlying record.
    pub id: DogId,
    /// Generation depth, root at 0.
    pub depth: usize,
    /// Display name.
    pub name: &'a str,
    /// `(label, value)` for the currently visible attribute, if one is set.
    pub detail: Option<(&'static str, &'a str)>,
    /// Whether this row corresponds to the current selection. At most one
    /// row is marked.
    pub selected: bool,
    /// Whether this node's ancestors are currently hidden.
    pub collapsed: bool,
    /// Whether this node has ancestors to show or hide at all.
    pub has_ancestors: bool,
}

/// Presentation state for one ancestry tree.
///
/// See the crate docs for the responsibilities and an end-to-end example.
#[derive(Clone, Debug)]
pub struct PedigreeView {
    formatter: AttributeFormatter,
    root: Option<DisplayNode>,
    /// Nodes whose ancestor subtrees are hidden. Kept beside the data tree,
    /// never inside it.
    collapsed: HashSet<DogId>,
    visible_attribute: Option<AttributeKey>,
    selection: Selected<DogRecord>,
    initial_collapse_depth: Option<usize>,
}

impl PedigreeView {
    /// Creates an empty view using `formatter` for display conversion.
    #[must_use]
    pub fn new(formatter: AttributeFormatter) -> Self {
        Self {
            formatter,
            root: None,
            collapsed: HashSet::new(),
            visible_attribute: None,
            selection: Selected::new(),
            initial_collapse_depth: None,
        }
    }

    /// Collapse ancestors at `depth` generations and beyond whenever a new
    /// root is loaded. `None` (the default) starts fully expanded.
    pub fn set_initial_collapse_depth(&mut self, depth: Option<usize>) {
        self.initial_collapse_depth = depth;
    }

    /// The formatter used to build display nodes.
    #[must_use]
    pub fn formatter(&self) -> &AttributeFormatter {
        &self.formatter
    }

    /// Loads a new root record, fully recomputing the display tree.
    ///
    /// Resets collapse state (honoring the initial collapse depth) and
    /// resets the selection to the new root, or clears it when `record` is
    /// `None`.
    pub fn set_root(&mut self, record: Option<&DogRecord>) {
        self.root = transform(record, &self.formatter);
        self.collapsed.clear();
        if let (Some(root), Some(depth)) = (self.root.as_ref(), self.initial_collapse_depth) {
            collect_collapsed_at(root, 0, depth, &mut self.collapsed);
        }
        match reverse_transform(self.root.as_ref()) {
            Some(record) => {
                self.selection.set(record.clone());
            }
            None => self.selection.clear(),
        }
    }

    /// The current display tree, if a root is loaded.
    #[must_use]
    pub fn root(&self) -> Option<&DisplayNode> {
        self.root.as_ref()
    }

    /// The attribute rendered under each node name, if any.
    #[must_use]
    pub fn visible_attribute(&self) -> Option<AttributeKey> {
        self.visible_attribute
    }

    /// Chooses which attribute (if any) to render under each node name.
    pub fn set_visible_attribute(&mut self, attribute: Option<AttributeKey>) {
        self.visible_attribute = attribute;
    }

    /// The shared selection slot, for revision observation.
    #[must_use]
    pub fn selection(&self) -> &Selected<DogRecord> {
        &self.selection
    }

    /// The currently selected record, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&DogRecord> {
        self.selection.get()
    }

    /// Identity of the selected record.
    ///
    /// This doubles as the focus anchor: a host implementing "return focus
    /// to the selected node" asks for this id and focuses the matching row,
    /// instead of any component reaching into page-global state.
    #[must_use]
    pub fn selected_id(&self) -> Option<DogId> {
        self.selection.get().map(|record| record.id)
    }

    /// Writes the selection from the detail panel's side (or navigation).
    ///
    /// Returns `true` if the selection actually changed.
    pub fn select_record(&mut self, record: &DogRecord) -> bool {
        self.selection.set(record.clone())
    }

    /// Reports that a node received focus (pointer or keyboard).
    ///
    /// Recovers the node's full backend record via the reverse transform and
    /// propagates it as the new selection. Returns the selection-change
    /// event, or `None` when the node is unknown or already selected.
    pub fn focus_node(&mut self, id: DogId) -> Option<ViewEvent> {
        let record = reverse_transform(self.find(id))?.clone();
        self.selection
            .set(record.clone())
            .then_some(ViewEvent::SelectionChanged(record))
    }

    /// Handles a keyboard action on the focused node.
    pub fn handle_key(&mut self, id: DogId, key: Key) -> Option<ViewEvent> {
        match key {
            Key::ToggleAncestors => {
                self.toggle_ancestors(id);
                None
            }
            Key::FocusDetails => {
                self.find(id)?;
                Some(ViewEvent::DetailsRequested(id))
            }
        }
    }

    /// Toggles visibility of a node's ancestor subtree.
    ///
    /// Returns the new collapsed state, or `None` for unknown nodes and for
    /// leaves (which have nothing to toggle).
    pub fn toggle_ancestors(&mut self, id: DogId) -> Option<bool> {
        let node = self.find(id)?;
        if node.children().is_empty() {
            return None;
        }
        if self.collapsed.remove(&id) {
            Some(false)
        } else {
            self.collapsed.insert(id);
            Some(true)
        }
    }

    /// Whether the given node's ancestors are currently hidden.
    #[must_use]
    pub fn is_collapsed(&self, id: DogId) -> bool {
        self.collapsed.contains(&id)
    }

    /// Looks up a display node by id.
    #[must_use]
    pub fn find(&self, id: DogId) -> Option<&DisplayNode> {
        find_in(self.root.as_ref()?, id)
    }

    /// Flattens the tree into render rows.
    ///
    /// Depth-first, dam before sire, skipping the subtrees of collapsed
    /// nodes. The selected row is marked by id comparison against the
    /// selection slot, not by deep record equality.
    #[must_use]
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut out = Vec::new();
        let Some(root) = self.root.as_ref() else {
            return out;
        };
        let selected_id = self.selected_id();

        // Explicit stack; children pushed in reverse so the traversal pops
        // them in their natural dam-first order.
        let mut stack: Vec<(&DisplayNode, usize)> = Vec::new();
        stack.push((root, 0));
        while let Some((node, depth)) = stack.pop() {
            let collapsed = self.collapsed.contains(&node.id());
            out.push(Row {
                id: node.id(),
                depth,
                name: node.name(),
                detail: self
                    .visible_attribute
                    .map(|key| (key.label(), node.attributes().get(key))),
                selected: selected_id == Some(node.id()),
                collapsed,
                has_ancestors: !node.children().is_empty(),
            });
            if !collapsed {
                for child in node.children().iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }
        out
    }
}

fn find_in(node: &DisplayNode, id: DogId) -> Option<&DisplayNode> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|child| find_in(child, id))
}

fn collect_collapsed_at(node: &DisplayNode, depth: usize, limit: usize, out: &mut HashSet<DogId>) {
    if depth >= limit && !node.children().is_empty() {
        out.insert(node.id());
    }
    for child in node.children() {
        collect_collapsed_at(child, depth + 1, limit, out);
    }
}
