pub mod color_wheel;
pub mod selected_colors;
