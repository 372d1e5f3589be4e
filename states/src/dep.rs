use std::any::type_name;

use crate::{Compute, State, StateCtx, StateError};

/// Read-only view of the store handed to a running command.
#[derive(Debug, Clone, Copy)]
pub struct Dep<'a> {
    ctx: &'a StateCtx,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(ctx: &'a StateCtx) -> Self {
        Self { ctx }
    }

    pub fn get_state_ref<T: State>(&self) -> Result<&'a T, StateError> {
        self.ctx.state::<T>()
    }

    pub fn get_compute_ref<T: Compute>(&self) -> Result<&'a T, StateError> {
        self.ctx
            .cached::<T>()
            .ok_or_else(|| StateError::compute_not_found(type_name::<T>(), "command dependency"))
    }
}
