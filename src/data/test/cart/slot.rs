use super::*;

use crate::model::cart::CreateCartSlotParams;

/// Tests creating then fetching a slot returns the same field values.
///
/// Expected: Ok with matching date and times
#[tokio::test]
async fn creates_and_fetches_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let location = factory::create_location(db, congregation.id).await?;
    let repo = CartSlotRepository::new(db);

    let created = repo
        .create(CreateCartSlotParams {
            location_id: location.id,
            date: date(2026, 3, 2),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            fixed: true,
        })
        .await?;

    let fetched = repo
        .find_in_congregation(created.id, congregation.id)
        .await?
        .unwrap();
    assert_eq!(fetched.date, date(2026, 3, 2));
    assert_eq!(fetched.start_time, "09:00");
    assert_eq!(fetched.end_time, "11:00");
    assert!(fetched.fixed);

    Ok(())
}

/// Tests the (location, date, start time) existence check.
///
/// Expected: true for a taken slot, false when excluded or free
#[tokio::test]
async fn checks_slot_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let location = factory::create_location(db, congregation.id).await?;
    let slot = factory::create_slot(db, location.id, date(2026, 3, 2)).await?;
    let repo = CartSlotRepository::new(db);

    assert!(repo
        .exists_at(location.id, slot.date, &slot.start_time, None)
        .await?);
    assert!(!repo
        .exists_at(location.id, slot.date, &slot.start_time, Some(slot.id))
        .await?);
    assert!(!repo
        .exists_at(location.id, slot.date, "15:00", None)
        .await?);

    Ok(())
}

/// Tests range listing is ordered by date then start time.
///
/// Expected: Ok with slots sorted and bounded by the range
#[tokio::test]
async fn lists_slots_in_range_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let location = factory::create_location(db, congregation.id).await?;
    let repo = CartSlotRepository::new(db);

    factory::CartSlotFactory::new(db, location.id)
        .date(date(2026, 3, 9))
        .build()
        .await?;
    factory::CartSlotFactory::new(db, location.id)
        .date(date(2026, 3, 2))
        .start_time("14:00")
        .end_time("16:00")
        .build()
        .await?;
    factory::CartSlotFactory::new(db, location.id)
        .date(date(2026, 3, 2))
        .build()
        .await?;
    factory::CartSlotFactory::new(db, location.id)
        .date(date(2026, 4, 1))
        .build()
        .await?;

    let slots = repo
        .get_in_range(congregation.id, Some(date(2026, 3, 1)), Some(date(2026, 3, 31)))
        .await?;

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0].date, date(2026, 3, 2));
    assert_eq!(slots[0].start_time, "09:00");
    assert_eq!(slots[1].start_time, "14:00");
    assert_eq!(slots[2].date, date(2026, 3, 9));

    Ok(())
}

/// Tests finding the latest fixed date and the fixed slots of its week.
///
/// Expected: Ok with only fixed slots of the requested week returned
#[tokio::test]
async fn finds_fixed_template_week() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let location = factory::create_location(db, congregation.id).await?;
    let repo = CartSlotRepository::new(db);

    factory::CartSlotFactory::new(db, location.id)
        .date(date(2026, 3, 2))
        .fixed(true)
        .build()
        .await?;
    factory::CartSlotFactory::new(db, location.id)
        .date(date(2026, 3, 4))
        .fixed(true)
        .build()
        .await?;
    // Loose slot in the same week must not join the template.
    factory::CartSlotFactory::new(db, location.id)
        .date(date(2026, 3, 5))
        .build()
        .await?;

    assert_eq!(
        repo.latest_fixed_date(congregation.id).await?,
        Some(date(2026, 3, 4))
    );

    let template = repo
        .fixed_slots_in_week(congregation.id, date(2026, 3, 2))
        .await?;
    assert_eq!(template.len(), 2);
    assert!(template.iter().all(|s| s.fixed));

    Ok(())
}

/// Tests that deleting a location cascades to slots and assignments.
///
/// Expected: Ok with no slots or assignments left
#[tokio::test]
async fn location_delete_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let location = factory::create_location(db, congregation.id).await?;
    let slot = factory::create_slot(db, location.id, date(2026, 3, 2)).await?;
    let publisher = factory::create_publisher(db, congregation.id).await?;

    CartAssignmentRepository::new(db)
        .create(slot.id, publisher.id)
        .await?;

    let location_repo = CartLocationRepository::new(db);
    assert!(location_repo.delete(location.id, congregation.id).await?);

    assert_eq!(entity::prelude::CartSlot::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CartAssignment::find().count(db).await?, 0);

    Ok(())
}
