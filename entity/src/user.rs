use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    /// Normalized lookup key derived from `username`, see [`username_to_uid`]
    #[sea_orm(unique)]
    pub uid: String,
    pub email: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Normalizes a username into the `uid` column value.
///
/// Dots are dropped and the result is lowercased, so `Fred.Bloggs` and `fredbloggs`
/// refer to the same account.
pub fn username_to_uid(username: &str) -> String {
    username.replace('.', "").to_lowercase()
}
