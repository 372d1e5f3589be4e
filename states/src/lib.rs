//! Type-indexed application store shared by the business and UI layers.
//!
//! The store keeps three kinds of entries, each addressed by its Rust type:
//! - [`State`]: plain values owned and mutated by the UI thread.
//! - [`Compute`]: cached values written through an [`Updater`], possibly from
//!   another thread, and applied on the UI thread by [`StateCtx::sync_computes`].
//! - [`Command`]: manual actions run by [`StateCtx::dispatch`].

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod state;
mod updater;

pub use command::Command;
pub use compute::Compute;
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::StateError;
pub use state::State;
pub use updater::Updater;
