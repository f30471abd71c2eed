use std::future::Future;

use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::repaint::Repaint;

/// The spawned task went away without producing a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lost;

/// The receiving half of a spawned task, polled once per frame.
pub struct Fut<T> {
    recv: oneshot::Receiver<T>,
}

impl<T> Fut<T>
where
    T: Send + 'static,
{
    pub fn spawn(fut: impl Future<Output = T> + Send + 'static, repaint: impl Repaint) -> Self {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(fut.await);
            repaint.repaint();
        });
        Self { recv: rx }
    }

    #[cfg(test)]
    pub fn ready(value: T) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(value);
        Self { recv: rx }
    }

    pub fn try_resolve(&mut self) -> Option<Result<T, Lost>> {
        match self.recv.try_recv() {
            Ok(value) => Some(Ok(value)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(Lost)),
        }
    }
}
