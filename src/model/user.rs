use crate::dto::user::{PaginatedUsersDto, UserDto};

/// A user together with their granted permission scopes.
///
/// The password hash is deliberately absent; it stays inside the data and
/// auth layers.
#[derive(Debug, Clone, PartialEq)]
pub struct UserParam {
    pub id: i32,
    pub congregation_id: i32,
    pub email: String,
    pub name: String,
    pub admin: bool,
    pub scopes: Vec<String>,
}

impl UserParam {
    pub fn from_entity(entity: entity::user::Model, scopes: Vec<String>) -> Self {
        Self {
            id: entity.id,
            congregation_id: entity.congregation_id,
            email: entity.email,
            name: entity.name,
            admin: entity.admin,
            scopes,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            admin: self.admin,
            scopes: self.scopes,
        }
    }
}

/// Parameters for creating a new user account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub congregation_id: i32,
    pub email: String,
    /// Already hashed; plaintext never crosses the service boundary.
    pub password_hash: String,
    pub name: String,
    pub admin: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<UserParam>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(UserParam::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
