//! A behavior that declares nothing and handles nothing.

use std::any::Any;

use crate::behavior::Behavior;

/// Placeholder behavior.  Useful as a registry default and in tests that
/// need an attachable behavior without any wiring.
#[derive(Default)]
pub struct NoopBehavior;

impl Behavior for NoopBehavior {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
