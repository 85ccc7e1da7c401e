use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "country")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::airport::Entity")]
    Airport,
}

impl Related<super::airport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
