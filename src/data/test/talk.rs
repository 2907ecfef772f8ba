use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::talk::{SpeakerRepository, TalkRepository, TalkScheduleRepository},
    model::talk::CreateTalkScheduleParams,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Tests the outline-number existence check.
///
/// Expected: true for a taken number, false when excluded or free
#[tokio::test]
async fn checks_outline_number_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_talk_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let talk = factory::create_talk(db, congregation.id).await?;
    let repo = TalkRepository::new(db);

    assert!(repo
        .number_exists(congregation.id, talk.number, None)
        .await?);
    assert!(!repo
        .number_exists(congregation.id, talk.number, Some(talk.id))
        .await?);
    assert!(!repo.number_exists(congregation.id, 99999, None).await?);

    Ok(())
}

/// Tests the schedule date existence check.
///
/// Expected: true for a taken date, false when excluded or free
#[tokio::test]
async fn checks_schedule_date_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_talk_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let speaker = factory::create_speaker(db, congregation.id).await?;
    let repo = TalkScheduleRepository::new(db);

    let scheduled = repo
        .create(CreateTalkScheduleParams {
            congregation_id: congregation.id,
            date: date(2026, 3, 7),
            speaker_id: speaker.id,
            talk_id: None,
        })
        .await?;

    assert!(repo
        .date_exists(congregation.id, date(2026, 3, 7), None)
        .await?);
    assert!(!repo
        .date_exists(congregation.id, date(2026, 3, 7), Some(scheduled.id))
        .await?);
    assert!(!repo
        .date_exists(congregation.id, date(2026, 3, 14), None)
        .await?);

    Ok(())
}

/// Tests listing the schedule with speaker and outline resolved.
///
/// Expected: Ok with names attached, ordered by date
#[tokio::test]
async fn lists_schedule_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_talk_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let speaker = factory::create_speaker(db, congregation.id).await?;
    let talk = factory::create_talk(db, congregation.id).await?;
    let repo = TalkScheduleRepository::new(db);

    repo.create(CreateTalkScheduleParams {
        congregation_id: congregation.id,
        date: date(2026, 3, 14),
        speaker_id: speaker.id,
        talk_id: Some(talk.id),
    })
    .await?;
    repo.create(CreateTalkScheduleParams {
        congregation_id: congregation.id,
        date: date(2026, 3, 7),
        speaker_id: speaker.id,
        talk_id: None,
    })
    .await?;

    let schedule = repo.get_in_range(congregation.id, None, None).await?;

    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0].0.date, date(2026, 3, 7));
    assert_eq!(schedule[0].2, None);
    assert_eq!(
        schedule[1].1.as_ref().map(|s| s.name.clone()),
        Some(speaker.name)
    );
    assert_eq!(
        schedule[1].2.as_ref().map(|t| t.theme.clone()),
        Some(talk.theme)
    );

    Ok(())
}

/// Tests that deleting a speaker cascades to their scheduled talks.
///
/// Expected: Ok with schedule entries removed
#[tokio::test]
async fn speaker_delete_cascades_to_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_talk_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let speaker = factory::create_speaker(db, congregation.id).await?;

    TalkScheduleRepository::new(db)
        .create(CreateTalkScheduleParams {
            congregation_id: congregation.id,
            date: date(2026, 3, 7),
            speaker_id: speaker.id,
            talk_id: None,
        })
        .await?;

    assert!(SpeakerRepository::new(db)
        .delete(speaker.id, congregation.id)
        .await?);

    let remaining = entity::prelude::TalkSchedule::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}
