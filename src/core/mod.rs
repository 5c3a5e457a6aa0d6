//! Core simulation – the snippet corpus, per-row state machine, and row pool.
//!
//! Nothing in this module depends on any TUI or rendering crate, so the
//! whole animation can be stepped and inspected from tests without a
//! terminal.

pub mod corpus;
pub mod pool;
pub mod row;
