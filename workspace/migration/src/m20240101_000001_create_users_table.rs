use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(users_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

fn users_table() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(pk_auto(Users::Id))
        .col(string_len(Users::Password, 128))
        .col(timestamp_with_time_zone_null(Users::LastLogin))
        .col(boolean(Users::IsSuperuser).default(false))
        .col(string_len_null(Users::Username, 150))
        .col(string_len(Users::FirstName, 150).default(""))
        .col(string_len(Users::LastName, 150).default(""))
        // Nullable, so accounts without an email never collide
        .col(string_len_null(Users::Email, 254).unique_key())
        .col(boolean(Users::IsStaff).default(false))
        .col(boolean(Users::IsActive).default(false))
        .col(timestamp_with_time_zone(Users::DateJoined))
        .col(string_len(Users::PhoneNumber, 128).unique_key())
        .col(string_len(Users::ActivationCode, 50).default(""))
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Password,
    LastLogin,
    IsSuperuser,
    Username,
    FirstName,
    LastName,
    Email,
    IsStaff,
    IsActive,
    DateJoined,
    PhoneNumber,
    ActivationCode,
}
