use super::{Fut, Lost};

/// At most one in-flight task. While busy, the control that started it
/// should stay disabled.
pub struct Pending<T> {
    fut: Option<Fut<T>>,
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self { fut: None }
    }
}

impl<T> Pending<T>
where
    T: Send + 'static,
{
    pub fn start(&mut self, fut: Fut<T>) {
        if self.fut.replace(fut).is_some() {
            log::warn!("replaced a request that was still in flight");
        }
    }

    pub const fn is_busy(&self) -> bool {
        self.fut.is_some()
    }

    pub fn poll(&mut self) -> Option<T> {
        let result = self.fut.as_mut()?.try_resolve()?;
        self.fut.take();
        match result {
            Ok(value) => Some(value),
            Err(Lost) => {
                log::error!("background task ended without a result");
                None
            }
        }
    }
}
