use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // GcdResult: owner lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_gcd_result_user")
                    .table(GcdResult::Table)
                    .col(GcdResult::UserId)
                    .to_owned(),
            )
            .await?;

        // GcdResult: newest-first history listing
        manager
            .create_index(
                Index::create()
                    .name("idx_gcd_result_created_at")
                    .table(GcdResult::Table)
                    .col(GcdResult::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_gcd_result_user")
                    .table(GcdResult::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_gcd_result_created_at")
                    .table(GcdResult::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum GcdResult {
    #[sea_orm(iden = "gcd_results")]
    Table,
    UserId,
    CreatedAt,
}
