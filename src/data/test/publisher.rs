use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{group::GroupRepository, publisher::PublisherRepository},
    model::publisher::{CreatePublisherParams, UpdatePublisherParams},
};

fn create_params(congregation_id: i32, name: &str) -> CreatePublisherParams {
    CreatePublisherParams {
        congregation_id,
        group_id: None,
        name: name.to_string(),
        phone: None,
        email: None,
        privilege: "publisher".to_string(),
        pioneer: false,
        active: true,
    }
}

/// Tests creating then fetching a publisher returns the same field values.
///
/// Expected: Ok with matching fields
#[tokio::test]
async fn creates_and_fetches_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let repo = PublisherRepository::new(db);

    let created = repo.create(create_params(congregation.id, "Ana Souza")).await?;

    let fetched = repo
        .find_in_congregation(created.id, congregation.id)
        .await?
        .unwrap();
    assert_eq!(fetched.name, "Ana Souza");
    assert_eq!(fetched.privilege, "publisher");
    assert!(fetched.active);

    Ok(())
}

/// Tests updating a publisher's fields.
///
/// Expected: Ok with the new values persisted
#[tokio::test]
async fn updates_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let group = factory::create_group(db, congregation.id).await?;
    let repo = PublisherRepository::new(db);

    let created = repo.create(create_params(congregation.id, "Bruno Lima")).await?;

    let updated = repo
        .update(UpdatePublisherParams {
            id: created.id,
            congregation_id: congregation.id,
            group_id: Some(group.id),
            name: "Bruno Lima".to_string(),
            phone: Some("11987654321".to_string()),
            email: None,
            privilege: "elder".to_string(),
            pioneer: true,
            active: true,
        })
        .await?
        .unwrap();

    assert_eq!(updated.group_id, Some(group.id));
    assert_eq!(updated.privilege, "elder");
    assert!(updated.pioneer);

    Ok(())
}

/// Tests that deleting a group clears the group of its publishers.
///
/// Expected: Ok with publisher kept but group_id set to NULL
#[tokio::test]
async fn group_delete_clears_publisher_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let group = factory::create_group(db, congregation.id).await?;
    let publisher = factory::PublisherFactory::new(db, congregation.id)
        .group_id(group.id)
        .build()
        .await?;

    let group_repo = GroupRepository::new(db);
    assert!(group_repo.delete(group.id, congregation.id).await?);

    let repo = PublisherRepository::new(db);
    let survivor = repo
        .find_in_congregation(publisher.id, congregation.id)
        .await?
        .unwrap();
    assert_eq!(survivor.group_id, None);

    Ok(())
}

/// Tests pagination with a group filter.
///
/// Expected: Ok with only the group's members returned
#[tokio::test]
async fn paginates_with_group_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let group = factory::create_group(db, congregation.id).await?;

    factory::PublisherFactory::new(db, congregation.id)
        .group_id(group.id)
        .build()
        .await?;
    factory::create_publisher(db, congregation.id).await?;

    let repo = PublisherRepository::new(db);

    let (all, total) = repo.get_paginated(congregation.id, None, 0, 10).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(total, 2);

    let (filtered, total) = repo
        .get_paginated(congregation.id, Some(group.id), 0, 10)
        .await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(total, 1);
    assert_eq!(
        filtered[0].1.as_ref().map(|g| g.id),
        Some(group.id)
    );

    Ok(())
}

/// Tests the exact-name lookup used by the PDF import.
///
/// Expected: Ok(Some) for an existing name, Ok(None) otherwise
#[tokio::test]
async fn finds_publisher_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_publisher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let repo = PublisherRepository::new(db);

    repo.create(create_params(congregation.id, "Carla Dias")).await?;

    assert!(repo
        .find_by_name(congregation.id, "Carla Dias")
        .await?
        .is_some());
    assert!(repo
        .find_by_name(congregation.id, "Nobody Here")
        .await?
        .is_none());

    Ok(())
}
