use std::ops::{Deref, DerefMut};

use tracing::error;

use crate::interpreter::evaluator::{core::Context, environment::Frame};

/// Guard that owns one pushed call frame.
///
/// The guard dereferences to the [`Context`] it was created from. Dropping it
/// pops the frame, so the frame is removed on every exit path of the call,
/// including `?` returns and unwinding.
pub struct ScopedContext<'g, 'p> {
    context: &'g mut Context<'p>,
}

impl Drop for ScopedContext<'_, '_> {
    fn drop(&mut self) {
        if let Err(e) = self.context.env.pop() {
            error!("frame guard found no frame to pop: {e}");
        }
    }
}

impl<'p> Deref for ScopedContext<'_, 'p> {
    type Target = Context<'p>;

    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl DerefMut for ScopedContext<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

impl<'p> Context<'p> {
    /// Pushes `frame` and returns a guard that pops it when dropped.
    pub(crate) fn scoped(&mut self, frame: Frame) -> ScopedContext<'_, 'p> {
        self.env.push(frame);
        ScopedContext { context: self }
    }
}
