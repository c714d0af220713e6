//! Social media post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use contents_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "social_media_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub platform: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub tone: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub hashtags: String,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub link: Option<String>,
    /// `timestamp(6)`, defaulted by the database at insert.
    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            platform: model.platform,
            title: model.title,
            tone: model.tone,
            content: model.content,
            hashtags: model.hashtags,
            link: model.link,
            created_at: model.created_at,
        }
    }
}

/// Conversion from validated input to an ActiveModel.
///
/// `id` and `created_at` stay `NotSet`: the database assigns them on insert
/// and an update built from this never touches them.
impl From<NewPost> for ActiveModel {
    fn from(fields: NewPost) -> Self {
        Self {
            platform: Set(fields.platform),
            title: Set(fields.title),
            tone: Set(fields.tone),
            content: Set(fields.content),
            hashtags: Set(fields.hashtags),
            link: Set(fields.link),
            ..Default::default()
        }
    }
}
