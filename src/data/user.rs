use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::user::CreateUserParams;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Counts every user account across the instance.
    ///
    /// Used at startup to decide whether the one-time setup code must be
    /// generated.
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Creates a new user account with an already-hashed password.
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            name: ActiveValue::Set(params.name),
            admin: ActiveValue::Set(params.admin),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets paginated users of a congregation, ordered by name.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Page of users and the total row count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        congregation_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let query = entity::prelude::User::find()
            .filter(entity::user::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::user::Column::Name);

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Deletes a user. Permission rows go with it via FK cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - The user existed and was deleted
    /// - `Ok(false)` - No such user in this congregation
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        user.delete(self.db).await?;

        Ok(true)
    }
}
