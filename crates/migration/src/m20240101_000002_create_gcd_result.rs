//! Create `gcd_results` table with FK to `users`.
//!
//! One row per computation; the division steps are kept as a JSON
//! array-of-objects column rather than a normalized child table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GcdResult::Table)
                    .if_not_exists()
                    .col(big_integer(GcdResult::Id).primary_key().auto_increment())
                    .col(uuid(GcdResult::UserId).not_null())
                    .col(big_integer(GcdResult::A).not_null())
                    .col(big_integer(GcdResult::B).not_null())
                    .col(big_integer(GcdResult::Result).not_null())
                    .col(json(GcdResult::Steps).not_null())
                    .col(timestamp_with_time_zone(GcdResult::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gcd_result_user")
                            .from(GcdResult::Table, GcdResult::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GcdResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GcdResult {
    #[sea_orm(iden = "gcd_results")]
    Table,
    Id,
    UserId,
    A,
    B,
    Result,
    Steps,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}
