use super::*;

/// Tests that deleting a territory cascades to its assignment history.
///
/// Expected: Ok with territory and assignments removed
#[tokio::test]
async fn delete_cascades_to_assignments() -> Result<(), DbErr> {
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

    repo.create_assignment(AssignTerritoryParams {
        territory_id: territory.id,
        publisher_id: publisher.id,
        assigned_on: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    })
    .await?;

    assert!(repo.delete(territory.id, congregation.id).await?);

    let remaining = entity::prelude::TerritoryAssignment::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests that deletion is scoped to the congregation.
///
/// Expected: Ok(false) for a foreign congregation id
#[tokio::test]
async fn delete_is_scoped_to_congregation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_territory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_congregation(db).await?;
    let other = factory::create_congregation(db).await?;
    let territory = factory::create_territory(db, home.id).await?;
    let repo = TerritoryRepository::new(db);

    assert!(!repo.delete(territory.id, other.id).await?);
    assert!(repo
        .find_in_congregation(territory.id, home.id)
        .await?
        .is_some());

    Ok(())
}
