use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::cleaning::CleaningRepository,
    model::cleaning::{CreateCleaningAssignmentParams, UpdateCleaningAssignmentParams},
};

fn monday(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Tests creating and listing cleaning weeks with the group resolved.
///
/// Expected: Ok with weeks ordered and group attached
#[tokio::test]
async fn creates_and_lists_weeks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let group = factory::create_group(db, congregation.id).await?;
    let repo = CleaningRepository::new(db);

    repo.create(CreateCleaningAssignmentParams {
        congregation_id: congregation.id,
        week_start: monday(2026, 3, 9),
        group_id: group.id,
    })
    .await?;
    repo.create(CreateCleaningAssignmentParams {
        congregation_id: congregation.id,
        week_start: monday(2026, 3, 2),
        group_id: group.id,
    })
    .await?;

    let weeks = repo.get_in_range(congregation.id, None, None).await?;

    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].0.week_start, monday(2026, 3, 2));
    assert_eq!(weeks[1].0.week_start, monday(2026, 3, 9));
    assert_eq!(weeks[0].1.as_ref().map(|g| g.id), Some(group.id));

    Ok(())
}

/// Tests the week existence check used before inserts and updates.
///
/// Expected: true for a taken week, false when excluded or free
#[tokio::test]
async fn checks_week_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let group = factory::create_group(db, congregation.id).await?;
    let repo = CleaningRepository::new(db);

    let assignment = repo
        .create(CreateCleaningAssignmentParams {
            congregation_id: congregation.id,
            week_start: monday(2026, 3, 2),
            group_id: group.id,
        })
        .await?;

    assert!(repo
        .week_exists(congregation.id, monday(2026, 3, 2), None)
        .await?);
    assert!(!repo
        .week_exists(congregation.id, monday(2026, 3, 2), Some(assignment.id))
        .await?);
    assert!(!repo
        .week_exists(congregation.id, monday(2026, 3, 9), None)
        .await?);

    Ok(())
}

/// Tests updating and deleting a cleaning week.
///
/// Expected: Ok with the update persisted and the delete scoped
#[tokio::test]
async fn updates_and_deletes_week() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let other_congregation = factory::create_congregation(db).await?;
    let group = factory::create_group(db, congregation.id).await?;
    let repo = CleaningRepository::new(db);

    let assignment = repo
        .create(CreateCleaningAssignmentParams {
            congregation_id: congregation.id,
            week_start: monday(2026, 3, 2),
            group_id: group.id,
        })
        .await?;

    let updated = repo
        .update(UpdateCleaningAssignmentParams {
            id: assignment.id,
            congregation_id: congregation.id,
            week_start: monday(2026, 3, 16),
            group_id: group.id,
        })
        .await?
        .unwrap();
    assert_eq!(updated.week_start, monday(2026, 3, 16));

    assert!(!repo.delete(assignment.id, other_congregation.id).await?);
    assert!(repo.delete(assignment.id, congregation.id).await?);

    Ok(())
}
