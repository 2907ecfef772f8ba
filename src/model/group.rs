use crate::dto::group::GroupDto;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupParam {
    pub id: i32,
    pub name: String,
    pub publisher_count: u64,
}

impl GroupParam {
    pub fn from_entity(entity: entity::publisher_group::Model, publisher_count: u64) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            publisher_count,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            publisher_count: self.publisher_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub congregation_id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateGroupParams {
    pub id: i32,
    pub congregation_id: i32,
    pub name: String,
}
