//! UI layer: transcript projection, panel state, and egui panels.

pub mod panels;
pub mod state;
pub mod theme;
pub mod transcript;
