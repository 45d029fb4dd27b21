//! Synchronous session dispatcher and its event log.

/// Event payloads recorded by a session.
pub mod events;
/// Session state and command dispatch.
pub mod handle;
