//! Adapters for external dependencies.

pub mod color_wheel_sea;
pub mod selected_colors_sea;
