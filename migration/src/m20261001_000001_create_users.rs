use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Users::Table)
          .if_not_exists()
          .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
          .col(ColumnDef::new(Users::FirstName).string().not_null())
          .col(ColumnDef::new(Users::LastName).string().not_null())
          .col(ColumnDef::new(Users::Email).string().not_null())
          .col(ColumnDef::new(Users::Mobile).string().not_null())
          .col(ColumnDef::new(Users::Password).string().not_null())
          .col(ColumnDef::new(Users::SponsorId).string().not_null())
          .col(ColumnDef::new(Users::ParentSponsorId).string().null())
          .col(
            ColumnDef::new(Users::ReferralCount)
              .integer()
              .not_null()
              .default(0),
          )
          .col(ColumnDef::new(Users::Balance).double().not_null().default(0.0))
          .col(
            ColumnDef::new(Users::TotalInvestment)
              .double()
              .not_null()
              .default(0.0),
          )
          .col(
            ColumnDef::new(Users::TotalWithdrawn)
              .double()
              .not_null()
              .default(0.0),
          )
          .col(
            ColumnDef::new(Users::KycStatus)
              .string()
              .not_null()
              .default("pending"),
          )
          .col(
            ColumnDef::new(Users::IsAdmin).boolean().not_null().default(false),
          )
          .col(ColumnDef::new(Users::CreatedAt).date_time().not_null())
          .col(ColumnDef::new(Users::UpdatedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    // Uniqueness lives in the store so a lost check-then-insert race
    // fails loudly instead of writing a duplicate.
    for (name, col) in [
      ("idx_users_email", Users::Email),
      ("idx_users_mobile", Users::Mobile),
      ("idx_users_sponsor_id", Users::SponsorId),
    ] {
      manager
        .create_index(
          Index::create()
            .name(name)
            .table(Users::Table)
            .col(col)
            .unique()
            .to_owned(),
        )
        .await?;
    }

    manager
      .create_index(
        Index::create()
          .name("idx_users_parent_sponsor_id")
          .table(Users::Table)
          .col(Users::ParentSponsorId)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Users {
  Table,
  Id,
  FirstName,
  LastName,
  Email,
  Mobile,
  Password,
  SponsorId,
  ParentSponsorId,
  ReferralCount,
  Balance,
  TotalInvestment,
  TotalWithdrawn,
  KycStatus,
  IsAdmin,
  CreatedAt,
  UpdatedAt,
}
