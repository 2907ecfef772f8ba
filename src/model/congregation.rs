use crate::dto::congregation::CongregationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct CongregationParam {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub meeting_weekday: i32,
    pub meeting_time: String,
}

impl CongregationParam {
    pub fn from_entity(entity: entity::congregation::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            meeting_weekday: entity.meeting_weekday,
            meeting_time: entity.meeting_time,
        }
    }

    pub fn into_dto(self) -> CongregationDto {
        CongregationDto {
            id: self.id,
            name: self.name,
            city: self.city,
            meeting_weekday: self.meeting_weekday,
            meeting_time: self.meeting_time,
        }
    }
}

/// Parameters for creating a congregation during first-time setup.
#[derive(Debug, Clone)]
pub struct CreateCongregationParams {
    pub name: String,
    pub city: String,
    pub meeting_weekday: i32,
    pub meeting_time: String,
}

/// Parameters for updating the congregation's settings.
#[derive(Debug, Clone)]
pub struct UpdateCongregationParams {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub meeting_weekday: i32,
    pub meeting_time: String,
}
