//! Organisational unit database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::OrganisationalUnit;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organisational_unit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for OrganisationalUnit {
    fn from(model: Model) -> Self {
        OrganisationalUnit {
            id: Some(model.id),
            name: model.name,
        }
    }
}
