use crate::{Stack, fifo::Fifo};

/// Stack over a single FIFO.
///
/// `push` pays for the LIFO order up front: after appending, the whole
/// queue is rotated until the new element reaches the front. From then
/// on the front is always the top of the stack, so `pop` and `top` are
/// plain front operations.
pub struct OneQueueStack<T> {
    fifo: Fifo<T>,
}

impl<T> OneQueueStack<T> {
    pub fn new() -> Self {
        Self { fifo: Fifo::new() }
    }

    /// O(n): one enqueue plus a full rotation of the queue.
    pub fn push(&mut self, value: T) {
        self.fifo.enqueue(value);
        for _ in 1..self.fifo.len() {
            self.fifo.rotate();
        }
    }

    /// O(1). Returns `None` on an empty stack.
    pub fn pop(&mut self) -> Option<T> {
        self.fifo.dequeue()
    }

    /// O(1). Returns `None` on an empty stack.
    pub fn top(&self) -> Option<&T> {
        self.fifo.peek()
    }

    pub fn len(&self) -> usize {
        self.fifo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fifo.is_empty()
    }
}

impl<T> Default for OneQueueStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for OneQueueStack<T> {
    fn push(&mut self, value: T) {
        OneQueueStack::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        OneQueueStack::pop(self)
    }

    fn top(&mut self) -> Option<&T> {
        OneQueueStack::top(self)
    }

    fn len(&self) -> usize {
        OneQueueStack::len(self)
    }

    fn is_empty(&self) -> bool {
        OneQueueStack::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_newest_at_the_front() {
        let mut stack = OneQueueStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        // drain the backing queue front to back without popping the
        // stack: the invariant puts the elements in reverse push order
        let mut order = Vec::new();
        while let Some(value) = stack.fifo.dequeue() {
            order.push(value);
        }
        assert_eq!(vec![3, 2, 1], order);
    }

    #[test]
    fn front_is_top_mid_sequence() {
        let mut stack = OneQueueStack::new();
        stack.push(10);
        stack.push(20);
        assert_eq!(Some(&20), stack.fifo.peek());
        stack.push(30);
        assert_eq!(Some(&30), stack.fifo.peek());
        assert_eq!(Some(30), stack.pop());
        assert_eq!(Some(&20), stack.fifo.peek());
    }
}
