use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    /// Comma-delimited genre tags, e.g. `Rock n Roll`.
    #[sea_orm(default_value = "")]
    pub genres: String,

    #[sea_orm(default_value = false)]
    pub seeking_venue: bool,
    #[sea_orm(column_type = "Text")]
    pub seeking_description: Option<String>,

    #[sea_orm(has_many)]
    pub shows: HasMany<super::show::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
