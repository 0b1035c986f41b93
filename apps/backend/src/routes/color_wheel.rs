use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{EntryId, ValidatedJson};
use crate::repos::color_wheel::PaletteEntry;
use crate::services::color_wheel;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddPaletteEntryRequest {
    pub hex: String,
    #[serde(default = "default_removable")]
    pub removable: bool,
}

fn default_removable() -> bool {
    true
}

/// Acknowledgement body for successful deletes.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub ok: bool,
}

impl DeletedResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

async fn list_entries(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let entries: Vec<PaletteEntry> = with_txn(&app_state, |txn| {
        Box::pin(async move {
            color_wheel::list_entries(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(entries))
}

async fn add_entry(
    app_state: web::Data<AppState>,
    body: ValidatedJson<AddPaletteEntryRequest>,
) -> Result<HttpResponse, AppError> {
    let AddPaletteEntryRequest { hex, removable } = body.into_inner();

    let entry: PaletteEntry = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            color_wheel::add_entry(txn, &hex, removable)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(entry))
}

async fn remove_entry(
    app_state: web::Data<AppState>,
    id: EntryId,
) -> Result<HttpResponse, AppError> {
    let EntryId(id) = id;

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            color_wheel::remove_entry(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeletedResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(vec!["", "/"])
            .route(web::get().to(list_entries))
            .route(web::post().to(add_entry)),
    )
    .service(web::resource("/{id}").route(web::delete().to(remove_entry)));
}
