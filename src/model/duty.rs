use chrono::NaiveDate;

use crate::dto::duty::DutyAssignmentDto;

/// Duty kinds accepted for a mechanical-duty assignment.
pub const DUTIES: &[&str] = &["sound", "microphones", "platform", "attendant"];

#[derive(Debug, Clone, PartialEq)]
pub struct DutyAssignmentParam {
    pub id: i32,
    pub date: NaiveDate,
    pub duty: String,
    pub publisher_id: i32,
    pub publisher_name: String,
}

impl DutyAssignmentParam {
    pub fn from_entity(entity: entity::duty_assignment::Model, publisher_name: String) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            duty: entity.duty,
            publisher_id: entity.publisher_id,
            publisher_name,
        }
    }

    pub fn into_dto(self) -> DutyAssignmentDto {
        DutyAssignmentDto {
            id: self.id,
            date: self.date,
            duty: self.duty,
            publisher_id: self.publisher_id,
            publisher_name: self.publisher_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDutyAssignmentParams {
    pub congregation_id: i32,
    pub date: NaiveDate,
    pub duty: String,
    pub publisher_id: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateDutyAssignmentParams {
    pub id: i32,
    pub congregation_id: i32,
    pub date: NaiveDate,
    pub duty: String,
    pub publisher_id: i32,
}
