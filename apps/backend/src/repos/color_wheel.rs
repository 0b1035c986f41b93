//! Color wheel repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::color_wheel_sea as adapter;
use crate::domain::HexColor;
use crate::entities::color_wheel_entries;
use crate::errors::domain::{DomainError, NotFoundKind};

/// A color available for selection on the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub id: i64,
    pub hex: String,
    pub removable: bool,
}

impl From<color_wheel_entries::Model> for PaletteEntry {
    fn from(model: color_wheel_entries::Model) -> Self {
        Self {
            id: model.id,
            hex: model.hex,
            removable: model.removable,
        }
    }
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<PaletteEntry>, DomainError> {
    let rows = adapter::find_all(conn).await?;
    Ok(rows.into_iter().map(PaletteEntry::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<PaletteEntry>, DomainError> {
    let row = adapter::find_by_id(conn, id).await?;
    Ok(row.map(PaletteEntry::from))
}

pub async fn find_by_hex<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hex: &HexColor,
) -> Result<Option<PaletteEntry>, DomainError> {
    let row = adapter::find_by_hex(conn, hex.as_str()).await?;
    Ok(row.map(PaletteEntry::from))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hex: &HexColor,
    removable: bool,
) -> Result<PaletteEntry, DomainError> {
    let row = adapter::insert(conn, hex.as_str(), removable).await?;
    Ok(PaletteEntry::from(row))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    match adapter::delete_by_id(conn, id).await? {
        0 => Err(DomainError::not_found(
            NotFoundKind::PaletteEntry,
            format!("Color wheel entry {id} not found"),
        )),
        _ => Ok(()),
    }
}
