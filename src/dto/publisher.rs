use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PublisherDto {
    pub id: i32,
    pub group_id: Option<i32>,
    pub group_name: Option<String>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// "publisher", "ministerial_servant" or "elder".
    pub privilege: String,
    pub pioneer: bool,
    pub active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePublisherDto {
    pub group_id: Option<i32>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub privilege: String,
    #[serde(default)]
    pub pioneer: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePublisherDto {
    pub group_id: Option<i32>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub privilege: String,
    pub pioneer: bool,
    pub active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPublishersDto {
    pub publishers: Vec<PublisherDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
