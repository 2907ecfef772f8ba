use chrono::NaiveDate;

use crate::dto::program::{MeetingProgramDto, ProgramPartDto};

/// Sections of the midweek meeting program.
pub const SECTIONS: &[&str] = &["treasures", "ministry", "living"];

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramPartParam {
    pub id: i32,
    pub section: String,
    pub title: String,
    pub duration_minutes: i32,
    pub assignee_id: Option<i32>,
    pub assistant_id: Option<i32>,
    pub position: i32,
}

impl ProgramPartParam {
    pub fn from_entity(entity: entity::program_part::Model) -> Self {
        Self {
            id: entity.id,
            section: entity.section,
            title: entity.title,
            duration_minutes: entity.duration_minutes,
            assignee_id: entity.assignee_id,
            assistant_id: entity.assistant_id,
            position: entity.position,
        }
    }

    pub fn into_dto(self) -> ProgramPartDto {
        ProgramPartDto {
            id: self.id,
            section: self.section,
            title: self.title,
            duration_minutes: self.duration_minutes,
            assignee_id: self.assignee_id,
            assistant_id: self.assistant_id,
            position: self.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingProgramParam {
    pub id: i32,
    pub week_start: NaiveDate,
    pub chairman_id: Option<i32>,
    pub parts: Vec<ProgramPartParam>,
}

impl MeetingProgramParam {
    pub fn from_entity(
        entity: entity::meeting_program::Model,
        parts: Vec<ProgramPartParam>,
    ) -> Self {
        Self {
            id: entity.id,
            week_start: entity.week_start,
            chairman_id: entity.chairman_id,
            parts,
        }
    }

    pub fn into_dto(self) -> MeetingProgramDto {
        MeetingProgramDto {
            id: self.id,
            week_start: self.week_start,
            chairman_id: self.chairman_id,
            parts: self
                .parts
                .into_iter()
                .map(ProgramPartParam::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProgramPartParams {
    pub section: String,
    pub title: String,
    pub duration_minutes: i32,
    pub assignee_id: Option<i32>,
    pub assistant_id: Option<i32>,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct CreateMeetingProgramParams {
    pub congregation_id: i32,
    pub week_start: NaiveDate,
    pub chairman_id: Option<i32>,
    pub parts: Vec<CreateProgramPartParams>,
}

/// Update replaces the whole part list of the program.
#[derive(Debug, Clone)]
pub struct UpdateMeetingProgramParams {
    pub id: i32,
    pub congregation_id: i32,
    pub week_start: NaiveDate,
    pub chairman_id: Option<i32>,
    pub parts: Vec<CreateProgramPartParams>,
}
