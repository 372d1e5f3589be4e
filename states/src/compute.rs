use std::{any::Any, fmt::Debug};

/// A cached value that is only replaced through an [`crate::Updater`].
///
/// Values must be `Send` because updates usually arrive from HTTP callbacks
/// running on a background thread.
pub trait Compute: Any + Debug + Send {}
