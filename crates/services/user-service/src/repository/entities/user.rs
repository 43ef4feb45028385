//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Gender, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "demo_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub sur_name: String,
    pub gender: Option<String>,
    pub organisational_unit_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organisational_unit::Entity",
        from = "Column::OrganisationalUnitId",
        to = "super::organisational_unit::Column::Id",
        on_delete = "SetNull"
    )]
    OrganisationalUnit,
}

impl Related<super::organisational_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrganisationalUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: Some(model.id),
            email: model.email,
            first_name: model.first_name,
            sur_name: model.sur_name,
            gender: model.gender.as_deref().and_then(Gender::from_label),
            organisational_unit_id: model.organisational_unit_id,
        }
    }
}
