use super::*;

use crate::model::territory::{CreateTerritoryParams, UpdateTerritoryParams};

/// Tests creating then fetching a territory returns the same field values.
///
/// Expected: Ok with matching number, name and description
#[tokio::test]
async fn creates_and_fetches_territory() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_territory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let repo = TerritoryRepository::new(db);

    let created = repo
        .create(CreateTerritoryParams {
            congregation_id: congregation.id,
            number: 12,
            name: "North Side".to_string(),
            description: Some("Between the river and the mall".to_string()),
        })
        .await?;

    let fetched = repo
        .find_in_congregation(created.id, congregation.id)
        .await?
        .unwrap();
    assert_eq!(fetched.number, 12);
    assert_eq!(fetched.name, "North Side");
    assert_eq!(
        fetched.description.as_deref(),
        Some("Between the river and the mall")
    );

    Ok(())
}

/// Tests the card-number existence check.
///
/// Expected: true for a taken number, false when excluded or free
#[tokio::test]
async fn checks_number_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_territory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let territory = factory::create_territory(db, congregation.id).await?;
    let repo = TerritoryRepository::new(db);

    assert!(repo
        .number_exists(congregation.id, territory.number, None)
        .await?);
    // A territory doesn't conflict with its own number on update.
    assert!(!repo
        .number_exists(congregation.id, territory.number, Some(territory.id))
        .await?);
    assert!(!repo.number_exists(congregation.id, 99999, None).await?);

    Ok(())
}

/// Tests that numbers are independent across congregations.
///
/// Expected: false for the same number in another congregation
#[tokio::test]
async fn numbers_are_scoped_per_congregation() -> Result<(), DbErr> {
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

    assert!(!repo.number_exists(other.id, territory.number, None).await?);

    Ok(())
}

/// Tests updating a territory's fields.
///
/// Expected: Ok with the new values persisted
#[tokio::test]
async fn updates_territory() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_territory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let territory = factory::create_territory(db, congregation.id).await?;
    let repo = TerritoryRepository::new(db);

    let updated = repo
        .update(UpdateTerritoryParams {
            id: territory.id,
            congregation_id: congregation.id,
            number: territory.number,
            name: "Renamed".to_string(),
            description: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, None);

    Ok(())
}
