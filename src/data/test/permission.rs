use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{permission::PermissionRepository, user::UserRepository},
    model::user::CreateUserParams,
};

async fn seed_user(db: &sea_orm::DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    let congregation = factory::create_congregation(db).await?;

    UserRepository::new(db)
        .create(CreateUserParams {
            congregation_id: congregation.id,
            email: format!("user{}@example.org", congregation.id),
            password_hash: "$argon2id$dummy".to_string(),
            name: "Test User".to_string(),
            admin: false,
        })
        .await
}

/// Tests replacing scopes and reading them back sorted.
///
/// Expected: Ok with the new scope set
#[tokio::test]
async fn replaces_and_lists_scopes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = seed_user(db).await?;
    let repo = PermissionRepository::new(db);

    repo.replace_scopes(user.id, &["territories".to_string(), "carts".to_string()])
        .await?;

    assert_eq!(
        repo.scopes_for_user(user.id).await?,
        vec!["carts".to_string(), "territories".to_string()]
    );

    repo.replace_scopes(user.id, &["programs".to_string()]).await?;

    assert_eq!(repo.scopes_for_user(user.id).await?, vec!["programs".to_string()]);

    Ok(())
}

/// Tests that duplicate scopes in the input collapse to one row.
///
/// Expected: Ok with a single row for the repeated scope
#[tokio::test]
async fn deduplicates_scopes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = seed_user(db).await?;
    let repo = PermissionRepository::new(db);

    repo.replace_scopes(user.id, &["carts".to_string(), "carts".to_string()])
        .await?;

    assert_eq!(repo.scopes_for_user(user.id).await?, vec!["carts".to_string()]);

    Ok(())
}

/// Tests the scope membership check.
///
/// Expected: true for a granted scope, false otherwise
#[tokio::test]
async fn checks_scope_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = seed_user(db).await?;
    let repo = PermissionRepository::new(db);

    repo.replace_scopes(user.id, &["cleaning".to_string()]).await?;

    assert!(repo.has_scope(user.id, "cleaning").await?);
    assert!(!repo.has_scope(user.id, "talks").await?);

    Ok(())
}
