use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Double")]
    pub sum: f64,
    pub location: String,
    pub added_on: DateTimeUtc,
    pub currency: String, // e.g. "lei", "EUR"
    #[sea_orm(column_name = "type")]
    pub reservation_type: String, // e.g. "stay"
    pub departure_time: DateTimeUtc,
    pub arrival_time: DateTimeUtc,
    pub documents: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::remarks::Entity")]
    Remarks,
}

impl Related<super::remarks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Remarks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
