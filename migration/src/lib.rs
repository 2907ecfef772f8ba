pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_congregation_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_permission_table;
mod m20260105_000004_create_publisher_group_table;
mod m20260105_000005_create_publisher_table;
mod m20260106_000006_create_territory_table;
mod m20260106_000007_create_territory_assignment_table;
mod m20260106_000008_create_cart_location_table;
mod m20260106_000009_create_cart_slot_table;
mod m20260106_000010_create_cart_assignment_table;
mod m20260107_000011_create_cleaning_assignment_table;
mod m20260107_000012_create_duty_assignment_table;
mod m20260107_000013_create_meeting_program_table;
mod m20260107_000014_create_program_part_table;
mod m20260108_000015_create_speaker_table;
mod m20260108_000016_create_talk_table;
mod m20260108_000017_create_talk_schedule_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_congregation_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_permission_table::Migration),
            Box::new(m20260105_000004_create_publisher_group_table::Migration),
            Box::new(m20260105_000005_create_publisher_table::Migration),
            Box::new(m20260106_000006_create_territory_table::Migration),
            Box::new(m20260106_000007_create_territory_assignment_table::Migration),
            Box::new(m20260106_000008_create_cart_location_table::Migration),
            Box::new(m20260106_000009_create_cart_slot_table::Migration),
            Box::new(m20260106_000010_create_cart_assignment_table::Migration),
            Box::new(m20260107_000011_create_cleaning_assignment_table::Migration),
            Box::new(m20260107_000012_create_duty_assignment_table::Migration),
            Box::new(m20260107_000013_create_meeting_program_table::Migration),
            Box::new(m20260107_000014_create_program_part_table::Migration),
            Box::new(m20260108_000015_create_speaker_table::Migration),
            Box::new(m20260108_000016_create_talk_table::Migration),
            Box::new(m20260108_000017_create_talk_schedule_table::Migration),
        ]
    }
}
