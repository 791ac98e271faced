//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

use domain::{User, UserData};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            password: model.password,
        }
    }
}

/// Only the fields present in the mapping are sent to the database.
impl From<UserData> for ActiveModel {
    fn from(data: UserData) -> Self {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: data.name.map_or(ActiveValue::NotSet, ActiveValue::Set),
            email: data.email.map_or(ActiveValue::NotSet, ActiveValue::Set),
            password: data.password.map_or(ActiveValue::NotSet, ActiveValue::Set),
        }
    }
}
