pub mod color_wheel_entries;
pub mod selected_colors;
