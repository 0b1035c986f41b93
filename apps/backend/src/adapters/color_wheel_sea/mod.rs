//! SeaORM adapter for color wheel entries.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::color_wheel_entries;

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<color_wheel_entries::Model>, sea_orm::DbErr> {
    color_wheel_entries::Entity::find()
        .order_by_asc(color_wheel_entries::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<color_wheel_entries::Model>, sea_orm::DbErr> {
    color_wheel_entries::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_hex<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hex: &str,
) -> Result<Option<color_wheel_entries::Model>, sea_orm::DbErr> {
    color_wheel_entries::Entity::find()
        .filter(color_wheel_entries::Column::Hex.eq(hex))
        .one(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hex: &str,
    removable: bool,
) -> Result<color_wheel_entries::Model, sea_orm::DbErr> {
    let active = color_wheel_entries::ActiveModel {
        id: NotSet,
        hex: Set(hex.to_string()),
        removable: Set(removable),
    };
    active.insert(conn).await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = color_wheel_entries::Entity::delete_by_id(id)
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
