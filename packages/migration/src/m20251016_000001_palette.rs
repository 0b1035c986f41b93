use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum ColorWheelEntries {
    Table,
    Id,
    Hex,
    Removable,
}

#[derive(Iden)]
enum SelectedColors {
    Table,
    Id,
    Hex,
    Custom,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // color_wheel_entries
        manager
            .create_table(
                Table::create()
                    .table(ColorWheelEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ColorWheelEntries::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(ColorWheelEntries::Hex).string().not_null())
                    .col(
                        ColumnDef::new(ColorWheelEntries::Removable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // hex is the identity users see; duplicates are rejected by the store itself
        manager
            .create_index(
                Index::create()
                    .name("ux_color_wheel_entries_hex")
                    .table(ColorWheelEntries::Table)
                    .col(ColorWheelEntries::Hex)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // selected_colors
        manager
            .create_table(
                Table::create()
                    .table(SelectedColors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SelectedColors::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(SelectedColors::Hex).string().not_null())
                    .col(
                        ColumnDef::new(SelectedColors::Custom)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_selected_colors_hex")
                    .table(SelectedColors::Table)
                    .col(SelectedColors::Hex)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ux_selected_colors_hex")
                    .table(SelectedColors::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SelectedColors::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_color_wheel_entries_hex")
                    .table(ColorWheelEntries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ColorWheelEntries::Table).to_owned())
            .await?;

        Ok(())
    }
}
