//! Selected colors: listing, adding, removal and mixing.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{mix, HexColor};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::repos::selected_colors::{self, SelectedEntry};

/// Result of averaging the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixedColor {
    pub hex: HexColor,
    pub count: usize,
}

pub async fn list_selected<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<SelectedEntry>, DomainError> {
    selected_colors::list(conn).await
}

pub async fn add_selected<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hex: &str,
    custom: bool,
) -> Result<SelectedEntry, DomainError> {
    let hex = HexColor::parse(hex)?;

    if selected_colors::find_by_hex(conn, &hex).await?.is_some() {
        debug!(hex = %hex, "selected.duplicate_rejected");
        return Err(DomainError::conflict(
            ConflictKind::DuplicateHex,
            format!("Color {hex} is already selected"),
        ));
    }

    let entry = selected_colors::create(conn, &hex, custom).await?;
    info!(id = entry.id, hex = %entry.hex, custom, "selected.color_added");
    Ok(entry)
}

pub async fn remove_selected<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    if selected_colors::find_by_id(conn, id).await?.is_none() {
        return Err(DomainError::not_found(
            NotFoundKind::SelectedColor,
            format!("Selected color {id} not found"),
        ));
    }

    selected_colors::delete(conn, id).await?;
    info!(id, "selected.color_removed");
    Ok(())
}

/// Average of every selected color; grey when nothing is selected.
pub async fn mix_selected<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<MixedColor, DomainError> {
    let rows = selected_colors::list(conn).await?;
    let colors = rows
        .iter()
        .map(|row| {
            HexColor::parse(&row.hex).map_err(|_| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("invalid hex '{}' stored for selected color {}", row.hex, row.id),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MixedColor {
        hex: mix(&colors),
        count: colors.len(),
    })
}
