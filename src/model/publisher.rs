use crate::dto::publisher::{PaginatedPublishersDto, PublisherDto};

/// Privilege values accepted for a publisher.
pub const PRIVILEGES: &[&str] = &["publisher", "ministerial_servant", "elder"];

#[derive(Debug, Clone, PartialEq)]
pub struct PublisherParam {
    pub id: i32,
    pub group_id: Option<i32>,
    pub group_name: Option<String>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub privilege: String,
    pub pioneer: bool,
    pub active: bool,
}

impl PublisherParam {
    /// Converts an entity model, attaching the already-resolved group name.
    pub fn from_entity(entity: entity::publisher::Model, group_name: Option<String>) -> Self {
        Self {
            id: entity.id,
            group_id: entity.group_id,
            group_name,
            name: entity.name,
            phone: entity.phone,
            email: entity.email,
            privilege: entity.privilege,
            pioneer: entity.pioneer,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> PublisherDto {
        PublisherDto {
            id: self.id,
            group_id: self.group_id,
            group_name: self.group_name,
            name: self.name,
            phone: self.phone,
            email: self.email,
            privilege: self.privilege,
            pioneer: self.pioneer,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePublisherParams {
    pub congregation_id: i32,
    pub group_id: Option<i32>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub privilege: String,
    pub pioneer: bool,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct UpdatePublisherParams {
    pub id: i32,
    pub congregation_id: i32,
    pub group_id: Option<i32>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub privilege: String,
    pub pioneer: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPublishers {
    pub publishers: Vec<PublisherParam>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPublishers {
    pub fn into_dto(self) -> PaginatedPublishersDto {
        PaginatedPublishersDto {
            publishers: self
                .publishers
                .into_iter()
                .map(PublisherParam::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
