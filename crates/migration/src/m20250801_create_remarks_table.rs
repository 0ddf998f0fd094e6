use sea_orm_migration::prelude::*;

use crate::m20250801_create_reservations_table::Reservations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Remarks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Remarks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Remarks::Agent).string().not_null())
                    .col(ColumnDef::new(Remarks::Content).text().not_null())
                    .col(ColumnDef::new(Remarks::Importance).text().not_null())
                    .col(ColumnDef::new(Remarks::ReservationId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-remarks-reservation_id")
                            .from(Remarks::Table, Remarks::ReservationId)
                            .to(Reservations::Table, Reservations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Remarks are always looked up through their reservation
        manager
            .create_index(
                Index::create()
                    .name("idx_remarks_reservation_id")
                    .table(Remarks::Table)
                    .col(Remarks::ReservationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Remarks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Remarks {
    Table,
    Id,
    Agent,
    Content,
    Importance,
    ReservationId,
}
