use backend::adapters::selected_colors_sea;
use backend::db::require_db;
use backend::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use backend::services::selected_colors::{
    add_selected, list_selected, mix_selected, remove_selected,
};
use backend::{AppError, ErrorCode};

use crate::support::build_test_state;

#[tokio::test]
async fn test_add_and_remove_selected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let first = add_selected(db, "#112233", false).await?;
    let second = add_selected(db, "#445566", true).await?;
    assert!(second.id > first.id);
    assert!(second.custom);

    let listed = list_selected(db).await?;
    assert_eq!(listed, vec![first.clone(), second.clone()]);

    remove_selected(db, first.id).await?;
    assert_eq!(list_selected(db).await?, vec![second]);

    Ok(())
}

#[tokio::test]
async fn test_duplicate_selected_is_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    add_selected(db, "#abc", false).await?;
    let err = add_selected(db, "#AABBCC", true)
        .await
        .expect_err("duplicate should be rejected");
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::DuplicateHex, _)
    ));

    Ok(())
}

#[tokio::test]
async fn test_remove_unknown_selected_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let err = remove_selected(db, 1)
        .await
        .expect_err("unknown id should fail");
    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::SelectedColor, _)
    ));

    Ok(())
}

#[tokio::test]
async fn test_mix_rounds_half_up() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    add_selected(db, "#000000", false).await?;
    add_selected(db, "#010101", false).await?;

    let mixed = mix_selected(db).await?;
    assert_eq!(mixed.hex.as_str(), "#010101");
    assert_eq!(mixed.count, 2);

    Ok(())
}

#[tokio::test]
async fn test_mix_with_corrupt_row_is_data_corruption() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    selected_colors_sea::insert(db, "not-a-color", false).await?;

    let err = mix_selected(db).await.expect_err("corrupt row should fail");
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));

    let app_err = AppError::from(err);
    assert_eq!(app_err.code(), ErrorCode::DataCorruption);

    Ok(())
}
