use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{permission::PermissionRepository, user::UserRepository},
    model::user::CreateUserParams,
};

fn user_params(congregation_id: i32, email: &str) -> CreateUserParams {
    CreateUserParams {
        congregation_id,
        email: email.to_string(),
        password_hash: "$argon2id$dummy".to_string(),
        name: "Test User".to_string(),
        admin: false,
    }
}

/// Tests creating then fetching a user returns the same field values.
///
/// Expected: Ok with matching email, name and admin flag
#[tokio::test]
async fn creates_and_fetches_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let repo = UserRepository::new(db);

    let created = repo
        .create(user_params(congregation.id, "ana@example.org"))
        .await?;

    let fetched = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.email, "ana@example.org");
    assert_eq!(fetched.name, "Test User");
    assert!(!fetched.admin);

    let by_email = repo.find_by_email("ana@example.org").await?;
    assert_eq!(by_email.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests that deleting a user cascades to their permission rows.
///
/// Expected: Ok with permissions removed alongside the user
#[tokio::test]
async fn delete_cascades_to_permissions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let congregation = factory::create_congregation(db).await?;
    let repo = UserRepository::new(db);
    let permission_repo = PermissionRepository::new(db);

    let user = repo
        .create(user_params(congregation.id, "bruno@example.org"))
        .await?;
    permission_repo
        .replace_scopes(user.id, &["carts".to_string(), "territories".to_string()])
        .await?;

    assert!(repo.delete(user.id, congregation.id).await?);

    let remaining = entity::prelude::Permission::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests that deletion is scoped to the congregation.
///
/// Expected: Ok(false) when the user belongs to another congregation
#[tokio::test]
async fn delete_is_scoped_to_congregation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_congregation(db).await?;
    let other = factory::create_congregation(db).await?;
    let repo = UserRepository::new(db);

    let user = repo.create(user_params(home.id, "carla@example.org")).await?;

    assert!(!repo.delete(user.id, other.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_some());

    Ok(())
}

/// Tests counting all users across congregations.
///
/// Expected: Ok with every account counted
#[tokio::test]
async fn counts_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_congregation(db).await?;
    let second = factory::create_congregation(db).await?;
    let repo = UserRepository::new(db);

    assert_eq!(repo.count_all().await?, 0);

    repo.create(user_params(first.id, "a@example.org")).await?;
    repo.create(user_params(second.id, "b@example.org")).await?;

    assert_eq!(repo.count_all().await?, 2);

    Ok(())
}
