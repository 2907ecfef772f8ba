use chrono::NaiveDate;

use crate::dto::territory::{TerritoryAssignmentDto, TerritoryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct TerritoryParam {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub description: Option<String>,
    /// True while an open (unreturned) assignment exists.
    pub checked_out: bool,
}

impl TerritoryParam {
    pub fn from_entity(entity: entity::territory::Model, checked_out: bool) -> Self {
        Self {
            id: entity.id,
            number: entity.number,
            name: entity.name,
            description: entity.description,
            checked_out,
        }
    }

    pub fn into_dto(self) -> TerritoryDto {
        TerritoryDto {
            id: self.id,
            number: self.number,
            name: self.name,
            description: self.description,
            checked_out: self.checked_out,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTerritoryParams {
    pub congregation_id: i32,
    pub number: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateTerritoryParams {
    pub id: i32,
    pub congregation_id: i32,
    pub number: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TerritoryAssignmentParam {
    pub id: i32,
    pub territory_id: i32,
    pub publisher_id: i32,
    pub publisher_name: String,
    pub assigned_on: NaiveDate,
    pub returned_on: Option<NaiveDate>,
}

impl TerritoryAssignmentParam {
    pub fn from_entity(entity: entity::territory_assignment::Model, publisher_name: String) -> Self {
        Self {
            id: entity.id,
            territory_id: entity.territory_id,
            publisher_id: entity.publisher_id,
            publisher_name,
            assigned_on: entity.assigned_on,
            returned_on: entity.returned_on,
        }
    }

    pub fn into_dto(self) -> TerritoryAssignmentDto {
        TerritoryAssignmentDto {
            id: self.id,
            territory_id: self.territory_id,
            publisher_id: self.publisher_id,
            publisher_name: self.publisher_name,
            assigned_on: self.assigned_on,
            returned_on: self.returned_on,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssignTerritoryParams {
    pub territory_id: i32,
    pub publisher_id: i32,
    pub assigned_on: NaiveDate,
}
