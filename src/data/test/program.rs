use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::program::ProgramRepository,
    model::program::{
        CreateMeetingProgramParams, CreateProgramPartParams, UpdateMeetingProgramParams,
    },
};

fn monday(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn part(section: &str, title: &str, position: i32) -> CreateProgramPartParams {
    CreateProgramPartParams {
        section: section.to_string(),
        title: title.to_string(),
        duration_minutes: 10,
        assignee_id: None,
        assistant_id: None,
        position,
    }
}

/// Tests creating a program inserts its parts in order.
///
/// Expected: Ok with parts returned by ascending position
#[tokio::test]
async fn creates_program_with_parts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_program_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let repo = ProgramRepository::new(db);

    let program = repo
        .create(CreateMeetingProgramParams {
            congregation_id: congregation.id,
            week_start: monday(2026, 3, 2),
            chairman_id: None,
            parts: vec![
                part("treasures", "Spiritual Gems", 1),
                part("treasures", "Opening Talk", 0),
                part("living", "Congregation Study", 2),
            ],
        })
        .await?;

    let parts = repo.parts_for_program(program.id).await?;

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].title, "Opening Talk");
    assert_eq!(parts[1].title, "Spiritual Gems");
    assert_eq!(parts[2].title, "Congregation Study");

    Ok(())
}

/// Tests that updating a program replaces its whole part list.
///
/// Expected: Ok with old parts gone and new parts present
#[tokio::test]
async fn update_replaces_parts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_program_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let repo = ProgramRepository::new(db);

    let program = repo
        .create(CreateMeetingProgramParams {
            congregation_id: congregation.id,
            week_start: monday(2026, 3, 2),
            chairman_id: None,
            parts: vec![part("treasures", "Old Part", 0)],
        })
        .await?;

    repo.update(UpdateMeetingProgramParams {
        id: program.id,
        congregation_id: congregation.id,
        week_start: monday(2026, 3, 2),
        chairman_id: None,
        parts: vec![
            part("ministry", "First Conversation", 0),
            part("living", "Local Needs", 1),
        ],
    })
    .await?
    .unwrap();

    let parts = repo.parts_for_program(program.id).await?;

    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(|p| p.title != "Old Part"));

    Ok(())
}

/// Tests the week existence check and range listing.
///
/// Expected: existence scoped per congregation, listing bounded by range
#[tokio::test]
async fn checks_weeks_and_ranges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_program_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let other = factory::create_congregation(db).await?;
    let repo = ProgramRepository::new(db);

    for day in [2, 9, 16] {
        repo.create(CreateMeetingProgramParams {
            congregation_id: congregation.id,
            week_start: monday(2026, 3, day),
            chairman_id: None,
            parts: vec![part("treasures", "Talk", 0)],
        })
        .await?;
    }

    assert!(repo
        .week_exists(congregation.id, monday(2026, 3, 2), None)
        .await?);
    assert!(!repo.week_exists(other.id, monday(2026, 3, 2), None).await?);

    let programs = repo
        .get_in_range(
            congregation.id,
            Some(monday(2026, 3, 9)),
            Some(monday(2026, 3, 16)),
        )
        .await?;
    assert_eq!(programs.len(), 2);

    Ok(())
}

/// Tests that deleting a program cascades to its parts.
///
/// Expected: Ok with no parts left behind
#[tokio::test]
async fn delete_cascades_to_parts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_program_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let repo = ProgramRepository::new(db);

    let program = repo
        .create(CreateMeetingProgramParams {
            congregation_id: congregation.id,
            week_start: monday(2026, 3, 2),
            chairman_id: None,
            parts: vec![part("treasures", "Talk", 0), part("living", "Study", 1)],
        })
        .await?;

    assert!(repo.delete(program.id, congregation.id).await?);

    let remaining = entity::prelude::ProgramPart::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}
