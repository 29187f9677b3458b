//! Generic rooted, ordered tree with arena storage
//!
//! One tree type serves two payloads: derivation trees built by the grammar
//! engine (`Tree<String>`) and the automaton's branching decision history
//! (`Tree<DecisionNode>`). Nodes live in a flat arena and reference each
//! other through integer handles, so parent back-references need no owning
//! pointers and upward traversal stays available for printing and debugging.
//!
//! Nodes are appended, never removed; a reset discards the whole tree.

use std::fmt::Write as _;

/// Handle to a node inside a [`Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
struct NodeData<T> {
    payload: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed rooted tree with ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    nodes: Vec<NodeData<T>>,
    root: NodeId,
}

impl<T> Tree<T> {
    /// Create a tree holding a single root node.
    pub fn new(root_payload: T) -> Self {
        Tree {
            nodes: vec![NodeData {
                payload: root_payload,
                parent: None,
                children: Vec::new(),
            }],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a detached node. It stays invisible to traversal until attached.
    pub fn new_node(&mut self, payload: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            payload,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Attach `child` as the last child of `parent`, setting the child's
    /// parent back-reference. O(1) amortized.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Create a node and attach it to `parent` in one step.
    pub fn new_child(&mut self, parent: NodeId, payload: T) -> NodeId {
        let child = self.new_node(payload);
        self.attach(parent, child);
        child
    }

    /// Install a new root above the current one. The old root becomes the
    /// first child of the new root. Used to wrap a partial derivation in an
    /// error marker.
    pub fn reroot(&mut self, payload: T) -> NodeId {
        let new_root = self.new_node(payload);
        let old_root = self.root;
        self.attach(new_root, old_root);
        self.root = new_root;
        new_root
    }

    pub fn payload(&self, id: NodeId) -> &T {
        &self.nodes[id.0].payload
    }

    pub fn payload_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.0].payload
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Lazy pre-order depth-first traversal from the root. The iterator is
    /// finite and can be restarted by calling this again.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// Render the tree with box-drawing connectors, one node per line,
    /// using `label` to format each payload.
    pub fn render_with(&self, label: impl Fn(&T) -> String) -> String {
        let mut out = String::new();
        self.render_node(self.root, "", true, true, &label, &mut out);
        out
    }

    fn render_node(
        &self,
        id: NodeId,
        prefix: &str,
        is_last: bool,
        is_root: bool,
        label: &impl Fn(&T) -> String,
        out: &mut String,
    ) {
        let connector = if is_root {
            ""
        } else if is_last {
            "└── "
        } else {
            "├── "
        };
        let _ = writeln!(out, "{prefix}{connector}{}", label(self.payload(id)));

        let child_prefix = if is_root {
            String::new()
        } else {
            format!("{prefix}{}", if is_last { "    " } else { "│   " })
        };
        let children = self.children(id);
        for (i, &child) in children.iter().enumerate() {
            let last = i == children.len() - 1;
            self.render_node(child, &child_prefix, last, false, label, out);
        }
    }
}

/// Iterator produced by [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        // Push children in reverse so the leftmost child is visited first.
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
