use std::collections::VecDeque;

/// The queue primitive the stacks are built on.
///
/// Insertion happens at the back, removal and inspection at the front.
/// The stacks in this crate never see the backing storage, so they
/// cannot reach for random access or back-removal.
pub struct Fifo<T> {
    inner: VecDeque<T>,
}

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Self {
            inner: VecDeque::new(),
        }
    }

    /// add a value at the back.
    /// Returns a reference to the value in its stored position.
    pub fn enqueue(&mut self, value: T) -> &T {
        self.inner.push_back(value);
        match self.inner.back() {
            Some(stored) => stored,
            None => unreachable!(),
        }
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    /// move the front element to the back, keeping the relative order
    /// of all other elements. Does nothing on an empty queue.
    pub fn rotate(&mut self) {
        if let Some(front) = self.inner.pop_front() {
            self.inner.push_back(front);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
