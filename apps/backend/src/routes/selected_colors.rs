use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::color_wheel::DeletedResponse;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{EntryId, ValidatedJson};
use crate::repos::selected_colors::SelectedEntry;
use crate::services::selected_colors::{self, MixedColor};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddSelectedColorRequest {
    pub hex: String,
    #[serde(default)]
    pub custom: bool,
}

async fn list_selected(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let colors: Vec<SelectedEntry> = with_txn(&app_state, |txn| {
        Box::pin(async move {
            selected_colors::list_selected(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(colors))
}

async fn add_selected(
    app_state: web::Data<AppState>,
    body: ValidatedJson<AddSelectedColorRequest>,
) -> Result<HttpResponse, AppError> {
    let AddSelectedColorRequest { hex, custom } = body.into_inner();

    let color: SelectedEntry = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            selected_colors::add_selected(txn, &hex, custom)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(color))
}

async fn remove_selected(
    app_state: web::Data<AppState>,
    id: EntryId,
) -> Result<HttpResponse, AppError> {
    let EntryId(id) = id;

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            selected_colors::remove_selected(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeletedResponse::ok()))
}

async fn mix_selected(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mixed: MixedColor = with_txn(&app_state, |txn| {
        Box::pin(async move {
            selected_colors::mix_selected(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(mixed))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(vec!["", "/"])
            .route(web::get().to(list_selected))
            .route(web::post().to(add_selected)),
    )
    // registered before /{id} so "mix" is never parsed as an id
    .service(web::resource("/mix").route(web::get().to(mix_selected)))
    .service(web::resource("/{id}").route(web::delete().to(remove_selected)));
}
