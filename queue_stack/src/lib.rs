mod fifo;
mod one_queue;
mod two_queue;


pub use one_queue::OneQueueStack;
pub use two_queue::TwoQueueStack;

/// The stack contract both queue-backed strategies implement.
///
/// `pop` and `top` signal underflow by returning `None`; no operation
/// panics. `top` takes `&mut self` because the two-queue strategy has
/// to rotate its queues to reach the element, even for a read.
pub trait Stack<T> {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn top(&mut self) -> Option<&T>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}
