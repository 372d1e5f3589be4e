use std::any::Any;

use crate::{Dep, StateError, Updater};

/// A manual action run through [`crate::StateCtx::dispatch`].
///
/// Commands must not block. Work that finishes later reports back by sending a
/// new compute value through the updater.
pub trait Command: Any {
    fn run(&self, deps: Dep<'_>, updater: Updater) -> Result<(), StateError>;
}
