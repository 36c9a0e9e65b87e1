// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Singly-linked chains of characters. Nodes live in a NodePool and are referred to by NodeId
// handles; a chain is referred to by the handle of its head, and an empty chain is None. Every
// node has at most one predecessor, and the last node of a chain has no link. Unlinking a node
// frees its slot, which later allocations reuse.

use std::{iter::FusedIterator, ops::Index};

use log::trace;

use crate::errors::EditorError;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharNode {
    data: char,
    link: Option<NodeId>,
}

impl CharNode {
    pub fn data(&self) -> char {
        self.data
    }

    pub fn link(&self) -> Option<NodeId> {
        self.link
    }
}

/// Head and tail of a freshly built chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub head: NodeId,
    pub tail: NodeId,
}

#[derive(Clone, Debug, Default)]
pub struct NodePool {
    slots: Vec<Option<CharNode>>,
    free: Vec<usize>,
}

impl Index<NodeId> for NodePool {
    type Output = CharNode;

    fn index(&self, id: NodeId) -> &CharNode {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("stale node handle {:?}", id),
        }
    }
}

impl NodePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes currently allocated.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    fn node_mut(&mut self, id: NodeId) -> &mut CharNode {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("stale node handle {:?}", id),
        }
    }

    fn free_node(&mut self, id: NodeId) -> CharNode {
        match self.slots.get_mut(id.0).and_then(Option::take) {
            Some(node) => {
                self.free.push(id.0);
                node
            }
            None => panic!("node {:?} freed twice", id),
        }
    }

    // Handles of the nodes of a chain, head first.
    fn ids(&self, head: Option<NodeId>) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(head, move |&id| self[id].link)
    }

    // Tail of a non-empty chain.
    fn last_of(&self, head: NodeId) -> NodeId {
        self.ids(Some(head)).last().unwrap_or(head)
    }

    fn build_span(&mut self, values: impl IntoIterator<Item = char>) -> Option<Span> {
        let mut values = values.into_iter();
        let first = values.next()?;
        let head = self.alloc(first, None);
        let tail = values.fold(head, |tail, c| self.insert_after(tail, c));
        Some(Span { head, tail })
    }

    /// Allocates a node holding `data` whose successor is `link`.
    pub fn alloc(&mut self, data: char, link: Option<NodeId>) -> NodeId {
        let node = CharNode { data, link };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Builds a chain holding the characters of `text`, in order.
    pub fn build(&mut self, text: &str) -> Option<NodeId> {
        self.build_span(text.chars()).map(|span| span.head)
    }

    pub fn data(&self, id: NodeId) -> char {
        self[id].data
    }

    pub fn link(&self, id: NodeId) -> Option<NodeId> {
        self[id].link
    }

    pub fn set_data(&mut self, id: NodeId, data: char) {
        self.node_mut(id).data = data;
    }

    /// Makes `link` the successor of `id`. The chain that used to follow `id` is handed back; the
    /// caller either links it somewhere else or releases it.
    #[must_use = "the displaced chain must be re-linked or released"]
    pub fn set_link(&mut self, id: NodeId, link: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self.node_mut(id).link, link)
    }

    /// Places a new node holding `item` right after `node`, ahead of `node`'s old successor.
    /// Returns the new node.
    pub fn insert_after(&mut self, node: NodeId, item: char) -> NodeId {
        let successor = self[node].link;
        let new = self.alloc(item, successor);
        self.node_mut(node).link = Some(new);
        new
    }

    /// Unlinks and frees the node following `node`, returning its character.
    pub fn remove_after(&mut self, node: NodeId) -> Result<char, EditorError> {
        let doomed = self[node].link.ok_or_else(|| {
            EditorError::MissingReference(format!("node {:?} has no successor", node))
        })?;
        let after = self[doomed].link;
        self.node_mut(node).link = after;
        Ok(self.free_node(doomed).data)
    }

    /// Deep copy of the chain starting at `source`.
    pub fn copy_list(&mut self, source: Option<NodeId>) -> Option<NodeId> {
        self.copy_list_with_tail(source).map(|span| span.head)
    }

    /// Deep copy of the chain starting at `source`, with the copy's tail for cheap extension.
    pub fn copy_list_with_tail(&mut self, source: Option<NodeId>) -> Option<Span> {
        let source = source?;
        let first = self[source].data;
        let head = self.alloc(first, None);
        let mut tail = head;
        let mut cursor = self[source].link;
        while let Some(id) = cursor {
            let value = self[id].data;
            tail = self.insert_after(tail, value);
            cursor = self[id].link;
        }
        Some(Span { head, tail })
    }

    /// Copies the nodes from `start` through `end` inclusive. `end` must be reachable from
    /// `start`; nothing is allocated if it is not.
    pub fn copy_range(&mut self, start: Option<NodeId>, end: NodeId) -> Result<Span, EditorError> {
        let start = start.ok_or_else(|| {
            EditorError::MissingReference(String::from("range start is absent"))
        })?;
        let mut values = Vec::new();
        let mut found = false;
        for id in self.ids(Some(start)) {
            values.push(self[id].data);
            if id == end {
                found = true;
                break;
            }
        }
        if !found {
            return Err(EditorError::InvalidRange(String::from(
                "end node was not found on the list",
            )));
        }
        self.build_span(values).ok_or_else(|| {
            EditorError::InvalidRange(String::from("empty range"))
        })
    }

    pub fn list_length(&self, head: Option<NodeId>) -> usize {
        self.ids(head).count()
    }

    /// 1-based positional lookup. `Ok(None)` if the chain is shorter than `position`.
    pub fn node_at_position(
        &self,
        head: Option<NodeId>,
        position: usize,
    ) -> Result<Option<NodeId>, EditorError> {
        if position == 0 {
            return Err(EditorError::InvalidArgument(String::from(
                "position is not positive",
            )));
        }
        Ok(self.ids(head).nth(position - 1))
    }

    /// First node holding `target`.
    pub fn search(&self, head: Option<NodeId>, target: char) -> Option<NodeId> {
        self.ids(head).find(|&id| self[id].data == target)
    }

    pub fn last_node(&self, head: Option<NodeId>) -> Option<NodeId> {
        self.ids(head).last()
    }

    /// Appends `value` at the end of the chain and returns its head, which is a new one-node
    /// chain if `head` was empty.
    pub fn tail_insert(&mut self, head: Option<NodeId>, value: char) -> NodeId {
        match head {
            None => self.alloc(value, None),
            Some(head) => {
                let tail = self.last_of(head);
                self.insert_after(tail, value);
                head
            }
        }
    }

    /// Frees the head node and returns the rest of the chain.
    pub fn remove_head(&mut self, head: NodeId) -> Option<NodeId> {
        self.free_node(head).link
    }

    /// Unlinks the last node without freeing it. Returns the remaining chain (None if `head` was
    /// the only node) and the detached node.
    pub fn detach_tail(&mut self, head: NodeId) -> (Option<NodeId>, NodeId) {
        let mut before = None;
        let mut cursor = head;
        while let Some(next) = self[cursor].link {
            before = Some(cursor);
            cursor = next;
        }
        match before {
            None => (None, cursor),
            Some(before) => {
                self.node_mut(before).link = None;
                (Some(head), cursor)
            }
        }
    }

    /// Frees the last node and returns the remaining chain.
    pub fn remove_tail(&mut self, head: NodeId) -> Option<NodeId> {
        let (rest, tail) = self.detach_tail(head);
        let removed = self.free_node(tail);
        trace!("removed tail {:?}", removed.data);
        rest
    }

    /// Frees every node of a chain. Returns how many were freed.
    pub fn release(&mut self, head: Option<NodeId>) -> usize {
        let mut freed = 0;
        let mut cursor = head;
        while let Some(id) = cursor {
            cursor = self.free_node(id).link;
            freed += 1;
        }
        freed
    }

    /// The characters of a chain, in order. The iterator is cheap to clone, so the sequence can
    /// be walked again from the start.
    pub fn chars(&self, head: Option<NodeId>) -> Chars<'_> {
        Chars { pool: self, next: head }
    }

    pub fn collect_string(&self, head: Option<NodeId>) -> String {
        self.chars(head).collect()
    }
}

#[derive(Clone, Debug)]
pub struct Chars<'a> {
    pool: &'a NodePool,
    next: Option<NodeId>,
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let node = &self.pool[self.next?];
        self.next = node.link;
        Some(node.data)
    }
}

impl FusedIterator for Chars<'_> {}
