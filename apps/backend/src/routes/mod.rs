use actix_web::web;

pub mod color_wheel;
pub mod health;
pub mod selected_colors;

/// Register every route. Shared by `main.rs` and the test harness so both
/// serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Palette: /color-wheel/**
    cfg.service(web::scope("/color-wheel").configure(color_wheel::configure_routes));

    // Selection: /selected-colors/**
    cfg.service(web::scope("/selected-colors").configure(selected_colors::configure_routes));
}
