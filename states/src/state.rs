use std::{any::Any, fmt::Debug};

/// A value owned by the UI thread and addressed by its type.
///
/// States are read by commands through [`crate::Dep`] and mutated directly by
/// widgets through [`crate::StateCtx::state_mut`].
pub trait State: Any + Debug + Default {}
