use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{data::territory::TerritoryRepository, model::territory::AssignTerritoryParams};

mod assignment;
mod create;
mod delete;
