use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

use crate::Compute;

pub(crate) type Update = (TypeId, Box<dyn Any + Send>);

/// Write handle for computes, safe to move into background callbacks.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    /// Queues `compute` to replace the cached value on the next sync.
    pub fn set<T: Compute>(&self, compute: T) {
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(compute)))
            .is_err()
        {
            warn!(
                "Updater: store dropped, discarding update for {}",
                type_name::<T>()
            );
        }
    }
}
