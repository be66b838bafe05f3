use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "league")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub league_name: String,
    pub admin_id: String,
    pub season_id: String,
    pub password: String,
    pub active: bool,
    pub paid_for: i32,
    pub money: bool,
    pub free: bool,
    pub spreads: bool,
    pub double_enabled: bool,
    pub banker: bool,
    pub double_type: i32,
    pub entry_fee: f64,
    pub weekly_fee: f64,
    pub first_place_percent: i32,
    pub second_place_percent: i32,
    pub third_place_percent: i32,
    pub fourth_place_percent: i32,
    pub fifth_place_percent: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Season,
    #[sea_orm(has_many = "super::player_league::Entity")]
    PlayerLeague,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::player_league::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerLeague.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
