//! Mode implementations.

/// Single-shot prompt handler.
pub mod ask;

/// Interactive chat mode handler.
pub mod chat;
