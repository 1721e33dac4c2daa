#![deny(warnings)]

use std::fmt;
use std::io::{self, Write};
use std::iter::FusedIterator;

use log::trace;

type Link = Option<Box<Node>>;

struct Node {
    value: i32,
    next: Link,
}

/// A singly linked list of `i32` that only ever grows at the head.
pub struct List {
    head: Link,
}

/// Puts `value` in front of `list` and returns the result as the new list.
///
/// ```
/// use slist::{construct, List};
///
/// let list = construct(2, construct(4, List::new()));
/// assert_eq!(list.to_string(), "2 -> 4");
/// ```
pub fn construct(value: i32, list: List) -> List {
    trace!("construct {}", value);
    List {
        head: Some(Box::new(Node {
            value,
            next: list.into_head(),
        })),
    }
}

impl List {
    pub fn new() -> List {
        List { head: None }
    }

    pub fn push_front(&mut self, value: i32) {
        trace!("push_front {}", value);
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    // Moves the chain out; `List` has a `Drop` impl, so the field can't be
    // destructured directly.
    fn into_head(mut self) -> Link {
        self.head.take()
    }

    /// Number of nodes, counted by walking the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Index of the first node holding `target`, scanning from the head.
    pub fn position(&self, target: i32) -> Option<usize> {
        self.iter().position(|value| value == target)
    }

    /// Like [`List::position`], but reports a miss as `-1`.
    pub fn index_of(&self, target: i32) -> isize {
        match self.position(target) {
            Some(i) => i as isize,
            None => -1,
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Writes the list as `a -> b -> c` followed by a newline. An empty list
    /// writes nothing.
    pub fn print_list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", self)
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for List {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
            for value in values {
                write!(f, " -> {}", value)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Builds the list by head insertion, so the last value yielded ends up at
/// the head.
impl FromIterator<i32> for List {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = List::new();
        for value in iter {
            list.push_front(value);
        }
        list
    }
}

/// Head-to-tail traversal of a [`List`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a List {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
