//! Repository functions for the domain layer.

pub mod color_wheel;
pub mod selected_colors;
