//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* row states and turns them into cells on the
//! terminal.  Nothing here mutates the simulation.

pub mod canvas;
pub mod layout;
pub mod theme;
