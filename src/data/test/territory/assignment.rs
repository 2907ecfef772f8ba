use super::*;

/// Tests that a new assignment is open and discoverable.
///
/// Expected: Ok with the open assignment returned
#[tokio::test]
async fn creates_open_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_territory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let territory = factory::create_territory(db, congregation.id).await?;
    let publisher = factory::create_publisher(db, congregation.id).await?;
    let repo = TerritoryRepository::new(db);

    assert!(repo.open_assignment(territory.id).await?.is_none());

    let assignment = repo
        .create_assignment(AssignTerritoryParams {
            territory_id: territory.id,
            publisher_id: publisher.id,
            assigned_on: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        })
        .await?;

    let open = repo.open_assignment(territory.id).await?.unwrap();
    assert_eq!(open.id, assignment.id);
    assert_eq!(open.returned_on, None);

    Ok(())
}

/// Tests that closing an assignment sets the return date and clears the
/// open state.
///
/// Expected: Ok with returned_on set and no open assignment left
#[tokio::test]
async fn closes_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_territory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let territory = factory::create_territory(db, congregation.id).await?;
    let publisher = factory::create_publisher(db, congregation.id).await?;
    let repo = TerritoryRepository::new(db);

    let assignment = repo
        .create_assignment(AssignTerritoryParams {
            territory_id: territory.id,
            publisher_id: publisher.id,
            assigned_on: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        })
        .await?;

    let returned_on = NaiveDate::from_ymd_opt(2026, 4, 6).unwrap();
    let closed = repo.close_assignment(assignment, returned_on).await?;

    assert_eq!(closed.returned_on, Some(returned_on));
    assert!(repo.open_assignment(territory.id).await?.is_none());

    Ok(())
}

/// Tests that history lists assignments newest first with the publisher
/// resolved.
///
/// Expected: Ok with two entries in descending order of checkout date
#[tokio::test]
async fn history_is_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_territory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let territory = factory::create_territory(db, congregation.id).await?;
    let publisher = factory::create_publisher(db, congregation.id).await?;
    let repo = TerritoryRepository::new(db);

    let first = repo
        .create_assignment(AssignTerritoryParams {
            territory_id: territory.id,
            publisher_id: publisher.id,
            assigned_on: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        })
        .await?;
    repo.close_assignment(first, NaiveDate::from_ymd_opt(2026, 2, 2).unwrap())
        .await?;

    repo.create_assignment(AssignTerritoryParams {
        territory_id: territory.id,
        publisher_id: publisher.id,
        assigned_on: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    })
    .await?;

    let history = repo.assignment_history(territory.id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(
        history[0].0.assigned_on,
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    );
    assert_eq!(
        history[1].0.assigned_on,
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    );
    assert_eq!(
        history[0].1.as_ref().map(|p| p.name.clone()),
        Some(publisher.name)
    );

    Ok(())
}
