//! Selected colors repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::selected_colors_sea as adapter;
use crate::domain::HexColor;
use crate::entities::selected_colors;
use crate::errors::domain::{DomainError, NotFoundKind};

/// A color the user has picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedEntry {
    pub id: i64,
    pub hex: String,
    pub custom: bool,
}

impl From<selected_colors::Model> for SelectedEntry {
    fn from(model: selected_colors::Model) -> Self {
        Self {
            id: model.id,
            hex: model.hex,
            custom: model.custom,
        }
    }
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<SelectedEntry>, DomainError> {
    let rows = adapter::find_all(conn).await?;
    Ok(rows.into_iter().map(SelectedEntry::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<SelectedEntry>, DomainError> {
    let row = adapter::find_by_id(conn, id).await?;
    Ok(row.map(SelectedEntry::from))
}

pub async fn find_by_hex<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hex: &HexColor,
) -> Result<Option<SelectedEntry>, DomainError> {
    let row = adapter::find_by_hex(conn, hex.as_str()).await?;
    Ok(row.map(SelectedEntry::from))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hex: &HexColor,
    custom: bool,
) -> Result<SelectedEntry, DomainError> {
    let row = adapter::insert(conn, hex.as_str(), custom).await?;
    Ok(SelectedEntry::from(row))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    match adapter::delete_by_id(conn, id).await? {
        0 => Err(DomainError::not_found(
            NotFoundKind::SelectedColor,
            format!("Selected color {id} not found"),
        )),
        _ => Ok(()),
    }
}
