//! Page-lifetime task scoping.
//!
//! A page creates one [`TaskScope`] on mount and runs its fetches through it.
//! When the page unmounts it calls [`TaskScope::cancel`] (or drops the scope)
//! and any request still in flight resolves to [`ClientError::Cancelled`]
//! instead of updating state that no longer exists.

use futures::future::{AbortHandle, Abortable};
use std::{
    future::Future,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};
use tracing::debug;

use crate::error::ClientError;

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    handles: Mutex<Vec<AbortHandle>>,
}

/// Cancellation scope shared by the tasks of one page. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct TaskScope {
    inner: Arc<Inner>,
}

impl TaskScope {
    /// Create an open scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `future` inside the scope.
    ///
    /// # Errors
    /// Returns [`ClientError::Cancelled`] if the scope is cancelled before or
    /// while the future runs.
    pub async fn run<F, T>(&self, future: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        {
            let mut handles = self
                .inner
                .handles
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if self.is_cancelled() {
                return Err(ClientError::Cancelled);
            }
            handles.retain(|handle| !handle.is_aborted());
            handles.push(handle);
        }

        match Abortable::new(future, registration).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Cancelled),
        }
    }

    /// Abort every task started in this scope and refuse new ones.
    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        let handles = std::mem::take(
            &mut *self
                .inner
                .handles
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        debug!(tasks = handles.len(), "cancelling page tasks");
        for handle in handles {
            handle.abort();
        }
    }

    /// Whether [`TaskScope::cancel`] has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }
}
