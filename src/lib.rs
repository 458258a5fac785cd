//! Word frequency table for a block of text.
//!
//! [`model`] turns text into word counts and sorted views of them, [`app`]
//! holds the on-screen state, and [`ui`] draws it in the terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod ui;

pub use error::{Result, WordTallyError};
