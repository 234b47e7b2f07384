//! A generic singly-linked list with positional and value-anchored editing,
//! plus helpers for moving lists over text streams.

pub mod linked_list;

pub use crate::linked_list::{IntoIter, Iter, LinkedList, ListError};
