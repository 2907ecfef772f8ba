use chrono::NaiveDate;

use crate::dto::cart::{
    CartLocationDto, CartPublisherDto, CartSlotDto, GenerateReportDto,
};

/// How many publishers fit on one cart shift.
pub const SLOT_CAPACITY: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLocationParam {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

impl CartLocationParam {
    pub fn from_entity(entity: entity::cart_location::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> CartLocationDto {
        CartLocationDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCartLocationParams {
    pub congregation_id: i32,
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateCartLocationParams {
    pub id: i32,
    pub congregation_id: i32,
    pub name: String,
    pub address: Option<String>,
}

/// A cart slot with its location name and assigned publishers resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSlotParam {
    pub id: i32,
    pub location_id: i32,
    pub location_name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub fixed: bool,
    /// (publisher id, publisher name) pairs.
    pub publishers: Vec<(i32, String)>,
}

impl CartSlotParam {
    pub fn from_entity(
        entity: entity::cart_slot::Model,
        location_name: String,
        publishers: Vec<(i32, String)>,
    ) -> Self {
        Self {
            id: entity.id,
            location_id: entity.location_id,
            location_name,
            date: entity.date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            fixed: entity.fixed,
            publishers,
        }
    }

    pub fn into_dto(self) -> CartSlotDto {
        CartSlotDto {
            id: self.id,
            location_id: self.location_id,
            location_name: self.location_name,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            fixed: self.fixed,
            publishers: self
                .publishers
                .into_iter()
                .map(|(id, name)| CartPublisherDto { id, name })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCartSlotParams {
    pub location_id: i32,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub fixed: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateCartSlotParams {
    pub id: i32,
    pub congregation_id: i32,
    pub location_id: i32,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub fixed: bool,
}

/// Counters accumulated by one projection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub created_slots: u32,
    pub copied_assignments: u32,
    pub skipped_slots: u32,
}

impl GenerateReport {
    pub fn into_dto(self) -> GenerateReportDto {
        GenerateReportDto {
            created_slots: self.created_slots,
            copied_assignments: self.copied_assignments,
            skipped_slots: self.skipped_slots,
        }
    }
}
