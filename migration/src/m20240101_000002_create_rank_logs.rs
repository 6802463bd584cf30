use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_keywords::Keywords;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create rank_logs table
        manager
            .create_table(
                Table::create()
                    .table(RankLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RankLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RankLogs::KeywordId).big_integer().not_null())
                    .col(ColumnDef::new(RankLogs::Rank).integer())
                    .col(ColumnDef::new(RankLogs::PositionUrl).string())
                    .col(
                        ColumnDef::new(RankLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rank_logs_keyword_id")
                            .from(RankLogs::Table, RankLogs::KeywordId)
                            .to(Keywords::Table, Keywords::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rank_logs_keyword_id")
                    .table(RankLogs::Table)
                    .col(RankLogs::KeywordId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rank_logs_created_at")
                    .table(RankLogs::Table)
                    .col(RankLogs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RankLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RankLogs {
    Table,
    Id,
    KeywordId,
    Rank,
    PositionUrl,
    CreatedAt,
}
