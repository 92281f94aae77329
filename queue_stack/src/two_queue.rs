use crate::{Stack, fifo::Fifo};

/// Stack over a pair of FIFOs.
///
/// `push` appends to whichever queue currently plays the primary role.
/// `pop` rotates all but the last element into the scratch queue,
/// extracts the last one (the top) and hands the primary role to the
/// scratch queue. Between calls one queue holds every element and the
/// other is empty.
///
/// The roles swap by flipping an index; queue contents are never
/// exchanged.
pub struct TwoQueueStack<T> {
    queues: [Fifo<T>; 2],
    primary: usize,
}

impl<T> TwoQueueStack<T> {
    pub fn new() -> Self {
        Self {
            queues: [Fifo::new(), Fifo::new()],
            primary: 0,
        }
    }

    /// O(1): a single enqueue on the primary queue.
    pub fn push(&mut self, value: T) {
        self.queues[self.primary].enqueue(value);
    }

    /// O(n): rotates everything but the top into the scratch queue.
    /// Returns `None` on an empty stack.
    pub fn pop(&mut self) -> Option<T> {
        let (primary, scratch) = self.role_split();
        while primary.len() > 1 {
            match primary.dequeue() {
                Some(front) => scratch.enqueue(front),
                None => break,
            };
        }
        let top = primary.dequeue()?;
        self.primary ^= 1;
        Some(top)
    }

    /// O(n): a full `pop` followed by re-enqueueing the element, as a
    /// single call. Returns `None` on an empty stack (nothing is
    /// re-enqueued in that case).
    pub fn top(&mut self) -> Option<&T> {
        let value = self.pop()?;
        Some(self.queues[self.primary].enqueue(value))
    }

    pub fn len(&self) -> usize {
        self.queues[self.primary].len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues[self.primary].is_empty()
    }

    fn role_split(&mut self) -> (&mut Fifo<T>, &mut Fifo<T>) {
        let [first, second] = &mut self.queues;
        if self.primary == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }
}

impl<T> Default for TwoQueueStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for TwoQueueStack<T> {
    fn push(&mut self, value: T) {
        TwoQueueStack::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        TwoQueueStack::pop(self)
    }

    fn top(&mut self) -> Option<&T> {
        TwoQueueStack::top(self)
    }

    fn len(&self) -> usize {
        TwoQueueStack::len(self)
    }

    fn is_empty(&self) -> bool {
        TwoQueueStack::is_empty(self)
    }
}
