//! A blocking handoff queue.
//!
//! Every push waits for a matching pop and vice versa: nothing is buffered.

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, TrySendError, bounded};
use thiserror::Error;

/// Failure of a non-blocking or timed push. The rejected item is handed back.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum PushError<T> {
    #[error("no consumer was waiting to take the item")]
    NoConsumer(T),
    #[error("no consumer took the item within {1:?}")]
    Timeout(T, Duration),
}

impl<T> PushError<T> {
    /// Recovers the item that could not be handed over.
    pub fn into_inner(self) -> T {
        match self {
            Self::NoConsumer(item) | Self::Timeout(item, _) => item,
        }
    }
}

/// Failure of a non-blocking or timed pop.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum PopError {
    #[error("no producer was waiting to hand over an item")]
    Empty,
    #[error("no producer handed over an item within {0:?}")]
    Timeout(Duration),
}

/// A rendezvous queue: `push` blocks until a consumer calls `pop`, and `pop`
/// blocks until a producer calls `push`.
///
/// Clones share the same channel, so one clone can be moved to a producer
/// thread and another to a consumer thread.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use lanes::BlockingQueue;
///
/// let queue = BlockingQueue::new();
/// let producer = queue.clone();
/// let handle = thread::spawn(move || {
///     for i in 0..3 {
///         producer.push(i);
///     }
/// });
/// let received: Vec<i32> = (0..3).map(|_| queue.pop()).collect();
/// handle.join().unwrap();
/// assert_eq!(received, [0, 1, 2]);
/// ```
#[derive(Debug)]
pub struct BlockingQueue<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
}

impl<T> Clone for BlockingQueue<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            rx: self.rx.clone(),
        }
    }
}

impl<T> BlockingQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = bounded(0);
        Self { tx, rx }
    }

    /// Hands `item` to a consumer, blocking until one takes it.
    pub fn push(&self, item: T) {
        // The queue holds its own receiver, so the channel cannot disconnect.
        self.tx.send(item).expect("`BlockingQueue::push()` - channel disconnected!");
    }

    /// Takes an item from a producer, blocking until one arrives.
    pub fn pop(&self) -> T {
        self.rx.recv().expect("`BlockingQueue::pop()` - channel disconnected!")
    }

    /// Hands `item` over only if a consumer is already blocked in `pop`.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::NoConsumer`] with the item when nobody is waiting.
    pub fn try_push(&self, item: T) -> Result<(), PushError<T>> {
        self.tx.try_send(item).map_err(|err| match err {
            TrySendError::Full(item) | TrySendError::Disconnected(item) => PushError::NoConsumer(item),
        })
    }

    /// Like [`push`](Self::push), but gives up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Timeout`] with the item when no consumer showed up in time.
    pub fn push_timeout(&self, item: T, timeout: Duration) -> Result<(), PushError<T>> {
        self.tx.send_timeout(item, timeout).map_err(|err| PushError::Timeout(err.into_inner(), timeout))
    }

    /// Takes an item only if a producer is already blocked in `push`.
    ///
    /// # Errors
    ///
    /// Returns [`PopError::Empty`] when nobody is waiting.
    pub fn try_pop(&self) -> Result<T, PopError> {
        self.rx.try_recv().map_err(|err| match err {
            TryRecvError::Empty | TryRecvError::Disconnected => PopError::Empty,
        })
    }

    /// Like [`pop`](Self::pop), but gives up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`PopError::Timeout`] when no producer showed up in time.
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T, PopError> {
        self.rx.recv_timeout(timeout).map_err(|err| match err {
            RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected => PopError::Timeout(timeout),
        })
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
