use std::{
    any::{Any, TypeId, type_name},
    collections::BTreeMap,
};

use flume::Receiver;
use log::{debug, warn};

use crate::{Command, Compute, Dep, State, StateError, Updater, updater::Update};

/// The store. Owned by the UI thread; other threads only see an [`Updater`].
#[derive(Debug)]
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn Any>>,
    computes: BTreeMap<TypeId, Box<dyn Any>>,
    commands: BTreeMap<TypeId, Box<dyn Any>>,

    updater: Updater,
    recv: Receiver<Update>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            updater: Updater::new(send),
            recv,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .ok_or_else(|| StateError::state_not_found(type_name::<T>(), "state read"))?
            .downcast_ref::<T>()
            .ok_or(StateError::TypeMismatch {
                name: type_name::<T>(),
            })
    }

    pub fn state_mut<T: State>(&mut self) -> Result<&mut T, StateError> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .ok_or_else(|| StateError::state_not_found(type_name::<T>(), "state write"))?
            .downcast_mut::<T>()
            .ok_or(StateError::TypeMismatch {
                name: type_name::<T>(),
            })
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    /// Returns the last synced value of a compute.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    /// Runs a recorded command against the current store.
    ///
    /// Compute updates the command makes become visible after the next
    /// [`Self::sync_computes`].
    pub fn dispatch<C: Command>(&self) -> Result<(), StateError> {
        let command = self
            .commands
            .get(&TypeId::of::<C>())
            .and_then(|boxed| boxed.downcast_ref::<C>())
            .ok_or(StateError::CommandNotFound {
                name: type_name::<C>(),
            })?;

        debug!("Dispatching {}", type_name::<C>());
        command.run(Dep::new(self), self.updater())
    }

    pub fn updater(&self) -> Updater {
        self.updater.clone()
    }

    /// Applies every queued compute update. Returns how many were applied.
    pub fn sync_computes(&mut self) -> usize {
        let mut applied = 0;

        for (id, value) in self.recv.try_iter() {
            match self.computes.get_mut(&id) {
                Some(slot) => {
                    let value: Box<dyn Any> = value;
                    *slot = value;
                    applied += 1;
                }
                None => warn!("sync_computes: dropping update for unrecorded compute {id:?}"),
            }
        }

        applied
    }
}
