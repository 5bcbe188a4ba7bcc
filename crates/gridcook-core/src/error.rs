//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` or wrap it as one variant — whichever keeps the
//! error sites clean.

use thiserror::Error;

use crate::{Action, Key, SlotId};

/// Errors raised by configuration and key-table validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{slot} out of range for {num_slots} agent slots")]
    SlotOutOfRange { slot: SlotId, num_slots: usize },

    #[error("key {0} bound more than once")]
    DuplicateKey(Key),

    #[error("key {0} bound to the neutral action")]
    NeutralBinding(Key),

    #[error("no key bound to action {0}")]
    UnboundAction(Action),
}

/// Shorthand result type for core validation.
pub type CoreResult<T> = Result<T, CoreError>;
