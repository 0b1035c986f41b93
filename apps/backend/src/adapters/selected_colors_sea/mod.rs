//! SeaORM adapter for selected colors.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::selected_colors;

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<selected_colors::Model>, sea_orm::DbErr> {
    selected_colors::Entity::find()
        .order_by_asc(selected_colors::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<selected_colors::Model>, sea_orm::DbErr> {
    selected_colors::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_hex<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hex: &str,
) -> Result<Option<selected_colors::Model>, sea_orm::DbErr> {
    selected_colors::Entity::find()
        .filter(selected_colors::Column::Hex.eq(hex))
        .one(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hex: &str,
    custom: bool,
) -> Result<selected_colors::Model, sea_orm::DbErr> {
    let active = selected_colors::ActiveModel {
        id: NotSet,
        hex: Set(hex.to_string()),
        custom: Set(custom),
    };
    active.insert(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = selected_colors::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}
