use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{data::duty::DutyRepository, model::duty::CreateDutyAssignmentParams};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Tests creating and listing duties with the publisher resolved.
///
/// Expected: Ok with duties ordered by date then duty name
#[tokio::test]
async fn creates_and_lists_duties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let publisher = factory::create_publisher(db, congregation.id).await?;
    let repo = DutyRepository::new(db);

    repo.create(CreateDutyAssignmentParams {
        congregation_id: congregation.id,
        date: date(2026, 3, 7),
        duty: "sound".to_string(),
        publisher_id: publisher.id,
    })
    .await?;
    repo.create(CreateDutyAssignmentParams {
        congregation_id: congregation.id,
        date: date(2026, 3, 7),
        duty: "attendant".to_string(),
        publisher_id: publisher.id,
    })
    .await?;

    let duties = repo.get_in_range(congregation.id, None, None).await?;

    assert_eq!(duties.len(), 2);
    assert_eq!(duties[0].0.duty, "attendant");
    assert_eq!(duties[1].0.duty, "sound");
    assert_eq!(
        duties[0].1.as_ref().map(|p| p.name.clone()),
        Some(publisher.name)
    );

    Ok(())
}

/// Tests the (date, duty) existence check.
///
/// Expected: true for a covered duty, false for another duty or when
/// excluded
#[tokio::test]
async fn checks_duty_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let publisher = factory::create_publisher(db, congregation.id).await?;
    let repo = DutyRepository::new(db);

    let assignment = repo
        .create(CreateDutyAssignmentParams {
            congregation_id: congregation.id,
            date: date(2026, 3, 7),
            duty: "platform".to_string(),
            publisher_id: publisher.id,
        })
        .await?;

    assert!(repo
        .duty_exists_at(congregation.id, date(2026, 3, 7), "platform", None)
        .await?);
    assert!(!repo
        .duty_exists_at(
            congregation.id,
            date(2026, 3, 7),
            "platform",
            Some(assignment.id)
        )
        .await?);
    assert!(!repo
        .duty_exists_at(congregation.id, date(2026, 3, 7), "microphones", None)
        .await?);

    Ok(())
}

/// Tests the range filter bounds.
///
/// Expected: Ok with only duties inside the range
#[tokio::test]
async fn filters_by_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let publisher = factory::create_publisher(db, congregation.id).await?;
    let repo = DutyRepository::new(db);

    for (day, duty) in [(7, "sound"), (14, "sound"), (21, "sound")] {
        repo.create(CreateDutyAssignmentParams {
            congregation_id: congregation.id,
            date: date(2026, 3, day),
            duty: duty.to_string(),
            publisher_id: publisher.id,
        })
        .await?;
    }

    let duties = repo
        .get_in_range(
            congregation.id,
            Some(date(2026, 3, 10)),
            Some(date(2026, 3, 20)),
        )
        .await?;

    assert_eq!(duties.len(), 1);
    assert_eq!(duties[0].0.date, date(2026, 3, 14));

    Ok(())
}
