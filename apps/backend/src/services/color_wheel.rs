//! Color wheel operations: listing, adding, guarded removal and seeding.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::domain::HexColor;
use crate::errors::domain::{ConflictKind, DomainError, ForbiddenKind, NotFoundKind};
use crate::repos::color_wheel::{self, PaletteEntry};

pub async fn list_entries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<PaletteEntry>, DomainError> {
    color_wheel::list(conn).await
}

/// Add a color to the wheel.
///
/// The existence check gives a friendly error for the common case; the
/// unique index on `hex` catches concurrent inserts, which surface as the
/// same `DuplicateHex` conflict.
pub async fn add_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hex: &str,
    removable: bool,
) -> Result<PaletteEntry, DomainError> {
    let hex = HexColor::parse(hex)?;

    if color_wheel::find_by_hex(conn, &hex).await?.is_some() {
        debug!(hex = %hex, "palette.duplicate_rejected");
        return Err(DomainError::conflict(
            ConflictKind::DuplicateHex,
            format!("Color {hex} already exists in the color wheel"),
        ));
    }

    let entry = color_wheel::create(conn, &hex, removable).await?;
    info!(id = entry.id, hex = %entry.hex, removable, "palette.entry_added");
    Ok(entry)
}

/// Remove a user-added color. Seeded entries are protected.
pub async fn remove_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    let entry = color_wheel::find_by_id(conn, id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::PaletteEntry,
            format!("Color wheel entry {id} not found"),
        )
    })?;

    if !entry.removable {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotRemovable,
            format!("Color {} cannot be removed from the color wheel", entry.hex),
        ));
    }

    color_wheel::delete(conn, id).await?;
    info!(id, hex = %entry.hex, "palette.entry_removed");
    Ok(())
}

/// Ensure every default color exists, protected from removal.
///
/// Idempotent: each default is canonicalized first, and colors already
/// present in canonical form are left alone.
/// Returns the number of entries inserted.
pub async fn seed_default_palette<C, S>(conn: &C, defaults: &[S]) -> Result<usize, DomainError>
where
    C: ConnectionTrait + Send + Sync,
    S: AsRef<str>,
{
    let mut inserted = 0;

    for raw in defaults {
        let hex = HexColor::parse(raw.as_ref())?;
        if color_wheel::find_by_hex(conn, &hex).await?.is_none() {
            color_wheel::create(conn, &hex, false).await?;
            inserted += 1;
        }
    }

    info!(defaults = defaults.len(), inserted, "palette.seeded");
    Ok(inserted)
}
