use chrono::NaiveDate;

use crate::dto::cleaning::CleaningAssignmentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct CleaningAssignmentParam {
    pub id: i32,
    pub week_start: NaiveDate,
    pub group_id: i32,
    pub group_name: String,
}

impl CleaningAssignmentParam {
    pub fn from_entity(entity: entity::cleaning_assignment::Model, group_name: String) -> Self {
        Self {
            id: entity.id,
            week_start: entity.week_start,
            group_id: entity.group_id,
            group_name,
        }
    }

    pub fn into_dto(self) -> CleaningAssignmentDto {
        CleaningAssignmentDto {
            id: self.id,
            week_start: self.week_start,
            group_id: self.group_id,
            group_name: self.group_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCleaningAssignmentParams {
    pub congregation_id: i32,
    pub week_start: NaiveDate,
    pub group_id: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateCleaningAssignmentParams {
    pub id: i32,
    pub congregation_id: i32,
    pub week_start: NaiveDate,
    pub group_id: i32,
}
