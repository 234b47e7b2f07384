use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::ptr;
use std::str::FromStr;

/// Error returned by operations that need at least one element in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("list is empty")]
    Empty,
}

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(value: T, next: Option<Box<Node<T>>>) -> Node<T> {
        Node { value, next }
    }
}

/// A singly-linked list with owned nodes.
///
/// `head` owns the chain; `tail` is a non-owning cursor to the final node so
/// that `append` and `last` stay O(1). It is null exactly when the list is
/// empty, and otherwise always addresses a node inside this list's own chain.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    tail: *mut Node<T>,
    size: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: ptr::null_mut(),
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Borrows the front value, or fails on an empty list.
    pub fn first(&self) -> Result<&T, ListError> {
        match self.head.as_deref() {
            Some(node) => Ok(&node.value),
            None => Err(ListError::Empty),
        }
    }

    /// Borrows the back value, or fails on an empty list.
    pub fn last(&self) -> Result<&T, ListError> {
        if self.tail.is_null() {
            return Err(ListError::Empty);
        }
        // tail is non-null, so it addresses the final node of our own chain,
        // and &self keeps that chain alive for the borrow we hand out.
        Ok(unsafe { &(*self.tail).value })
    }

    /// Adds `item` at the back of the list in O(1).
    pub fn append(&mut self, item: T) {
        let mut node: Box<Node<T>> = Box::new(Node::new(item, None));
        let raw: *mut Node<T> = &mut *node;
        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // The old tail node is owned by our chain; hanging the new node
            // off it hands ownership of the box to the chain as well.
            unsafe { (*self.tail).next = Some(node) };
        }
        self.tail = raw;
        self.size += 1;
    }

    /// Adds `item` at the front of the list in O(1).
    pub fn prepend(&mut self, item: T) {
        let mut node: Box<Node<T>> = Box::new(Node::new(item, self.head.take()));
        if self.tail.is_null() {
            self.tail = &mut *node;
        }
        self.head = Some(node);
        self.size += 1;
    }

    /// Inserts `item` so that it ends up at position `index`.
    ///
    /// The index is clamped into `[0, size]`: 0 inserts at the front and
    /// anything past the end lands at the back. Out-of-range positions are
    /// never an error. O(index).
    pub fn insert_at(&mut self, item: T, index: usize) {
        if index == 0 {
            self.prepend(item);
            return;
        }
        if index >= self.size {
            self.append(item);
            return;
        }
        // 0 < index < size: splice after the (index - 1)th node. The bounds
        // checks above guarantee the walk lands on a node.
        let mut prev = self.head.as_deref_mut();
        for _ in 0..index - 1 {
            prev = prev.and_then(|node| node.next.as_deref_mut());
        }
        match prev {
            Some(node) => {
                let rest = node.next.take();
                node.next = Some(Box::new(Node::new(item, rest)));
                self.size += 1;
            }
            None => self.append(item),
        }
    }

    /// Unlinks and returns the value at position `index`.
    ///
    /// Fails only when the list is empty; otherwise the index is clamped into
    /// `[0, size - 1]`. The rest of the chain is left intact. O(index).
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let index = index.min(self.size.saturating_sub(1));
        if index == 0 {
            let mut node = self.head.take().ok_or(ListError::Empty)?;
            self.head = node.next.take();
            if self.head.is_none() {
                self.tail = ptr::null_mut();
            }
            self.size -= 1;
            return Ok(node.value);
        }
        // index >= 1, so there is a node in front of the one being removed.
        let mut prev = self.head.as_deref_mut().ok_or(ListError::Empty)?;
        for _ in 0..index - 1 {
            prev = prev.next.as_deref_mut().ok_or(ListError::Empty)?;
        }
        let mut removed = prev.next.take().ok_or(ListError::Empty)?;
        prev.next = removed.next.take();
        if prev.next.is_none() {
            // The removed node was the last one.
            self.tail = prev;
        }
        self.size -= 1;
        Ok(removed.value)
    }

    /// Position of the first element equal to `item`, 0-based.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut current = &self.head;
        let mut index = 0;
        while let Some(node) = current {
            if node.value == *item {
                return Some(index);
            }
            index += 1;
            current = &node.next;
        }
        None
    }

    /// Splices `item` in right after the first element equal to `anchor`.
    ///
    /// Returns false, leaving the list untouched, when no element matches.
    pub fn insert_after(&mut self, anchor: &T, item: T) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.value == *anchor {
                let rest = node.next.take();
                let mut new_node = Box::new(Node::new(item, rest));
                if new_node.next.is_none() {
                    // The anchor was the last node; the new one is now.
                    self.tail = &mut *new_node;
                }
                node.next = Some(new_node);
                self.size += 1;
                return true;
            }
            current = node.next.as_deref_mut();
        }
        false
    }

    /// Splices `item` in right before the first element equal to `anchor`.
    ///
    /// Returns false, leaving the list untouched, when no element matches.
    pub fn insert_before(&mut self, anchor: &T, item: T) -> bool
    where
        T: PartialEq,
    {
        let mut link = &mut self.head;
        while link.is_some() {
            let found = matches!(link.as_deref(), Some(node) if node.value == *anchor);
            if found {
                // Boxes keep their heap address when moved, so the tail
                // cursor stays valid even when the anchor is the only node.
                let anchor_node = link.take();
                *link = Some(Box::new(Node::new(item, anchor_node)));
                self.size += 1;
                return true;
            }
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        false
    }

    /// Drops every node, iteratively, leaving the list empty.
    ///
    /// Each node's link is detached before the node goes away, so teardown of
    /// arbitrarily long chains runs in constant stack space.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.tail = ptr::null_mut();
        self.size = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Replaces the contents with values parsed from `source`.
    ///
    /// Reading consumes the first non-blank line and appends one value per
    /// whitespace-separated token. An unparsable token ends the read early
    /// and silently; whatever was appended before it stays. Only transport
    /// errors are reported.
    pub fn read_from<R: BufRead>(&mut self, source: &mut R) -> io::Result<()>
    where
        T: FromStr,
    {
        self.clear();
        let mut line = String::new();
        loop {
            line.clear();
            if source.read_line(&mut line)? == 0 {
                return Ok(());
            }
            if !line.trim().is_empty() {
                break;
            }
        }
        for token in line.split_whitespace() {
            match token.parse() {
                Ok(item) => self.append(item),
                Err(_) => break,
            }
        }
        Ok(())
    }

    /// `read_from` attached to the named file.
    pub fn read_from_path<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()>
    where
        T: FromStr,
    {
        let mut reader = BufReader::new(File::open(path)?);
        self.read_from(&mut reader)
    }

    /// Writes every element as `<separator><value>`, in order, with no
    /// trailing newline. An empty list writes nothing.
    pub fn write_to<W: Write>(&self, sink: &mut W, separator: char) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for item in self {
            write!(sink, "{}{}", separator, item)?;
        }
        Ok(())
    }

    /// `write_to` attached to the named file.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P, separator: char) -> io::Result<()>
    where
        T: fmt::Display,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer, separator)?;
        writer.flush()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut copy = LinkedList::new();
        for item in self {
            copy.append(item.clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in source {
            self.append(item.clone());
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        let mut current_a = &self.head;
        let mut current_b = &other.head;
        loop {
            let Some(node_a) = current_a else { break };
            let Some(node_b) = current_b else { break };
            if node_a.value != node_b.value {
                return false;
            }
            current_a = &node_a.next;
            current_b = &node_b.next;
        }
        true
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Formats the list the way it goes over a stream: `write_to` with `'='` as
/// the separator, so `[1, 2, 3]` comes out as `=1=2=3`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self {
            write!(f, "={}", item)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_at(0).ok()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}
