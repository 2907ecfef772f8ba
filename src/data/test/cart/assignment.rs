use super::*;

/// Tests slot membership and occupancy counting.
///
/// Expected: Ok with the assignment visible in both checks
#[tokio::test]
async fn tracks_slot_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let location = factory::create_location(db, congregation.id).await?;
    let slot = factory::create_slot(db, location.id, date(2026, 3, 2)).await?;
    let publisher = factory::create_publisher(db, congregation.id).await?;
    let repo = CartAssignmentRepository::new(db);

    assert_eq!(repo.count_for_slot(slot.id).await?, 0);
    assert!(!repo.exists(slot.id, publisher.id).await?);

    repo.create(slot.id, publisher.id).await?;

    assert_eq!(repo.count_for_slot(slot.id).await?, 1);
    assert!(repo.exists(slot.id, publisher.id).await?);

    let publishers = repo.publishers_for_slot(slot.id).await?;
    assert_eq!(publishers, vec![(publisher.id, publisher.name)]);

    Ok(())
}

/// Tests the same-date-and-time booking check across slots.
///
/// Expected: true for a clashing slot at another location, false for a
/// different time
#[tokio::test]
async fn detects_double_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let first_location = factory::create_location(db, congregation.id).await?;
    let second_location = factory::create_location(db, congregation.id).await?;
    let slot = factory::create_slot(db, first_location.id, date(2026, 3, 2)).await?;
    let publisher = factory::create_publisher(db, congregation.id).await?;
    let repo = CartAssignmentRepository::new(db);

    repo.create(slot.id, publisher.id).await?;

    // Same date and start time at another location still counts.
    let clashing = factory::create_slot(db, second_location.id, date(2026, 3, 2)).await?;
    assert!(repo
        .publisher_booked_at(publisher.id, date(2026, 3, 2), "09:00", Some(clashing.id))
        .await?);

    assert!(!repo
        .publisher_booked_at(publisher.id, date(2026, 3, 2), "15:00", None)
        .await?);

    Ok(())
}

/// Tests removing a publisher from a slot.
///
/// Expected: Ok(true) on removal, Ok(false) when not assigned
#[tokio::test]
async fn removes_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let location = factory::create_location(db, congregation.id).await?;
    let slot = factory::create_slot(db, location.id, date(2026, 3, 2)).await?;
    let publisher = factory::create_publisher(db, congregation.id).await?;
    let repo = CartAssignmentRepository::new(db);

    repo.create(slot.id, publisher.id).await?;

    assert!(repo.delete(slot.id, publisher.id).await?);
    assert!(!repo.delete(slot.id, publisher.id).await?);
    assert_eq!(repo.count_for_slot(slot.id).await?, 0);

    Ok(())
}
