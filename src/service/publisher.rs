use sea_orm::DatabaseConnection;

use crate::{
    data::{group::GroupRepository, publisher::PublisherRepository},
    error::AppError,
    model::publisher::{
        CreatePublisherParams, PaginatedPublishers, PublisherParam, UpdatePublisherParams,
        PRIVILEGES,
    },
};

pub struct PublisherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublisherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated publishers, optionally filtered to one group.
    pub async fn get_paginated(
        &self,
        congregation_id: i32,
        group_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPublishers, AppError> {
        let repo = PublisherRepository::new(self.db);

        let (rows, total) = repo
            .get_paginated(congregation_id, group_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedPublishers {
            publishers: rows
                .into_iter()
                .map(|(publisher, group)| {
                    PublisherParam::from_entity(publisher, group.map(|g| g.name))
                })
                .collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn get_by_id(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<PublisherParam>, AppError> {
        let repo = PublisherRepository::new(self.db);

        let Some(publisher) = repo.find_in_congregation(id, congregation_id).await? else {
            return Ok(None);
        };

        let group_name = self
            .resolve_group_name(publisher.group_id, congregation_id)
            .await?;

        Ok(Some(PublisherParam::from_entity(publisher, group_name)))
    }

    /// Creates a publisher after validating privilege and group.
    ///
    /// # Returns
    /// - `Ok(publisher)` - Created publisher
    /// - `Err(AppError::BadRequest)` - Unknown privilege or group not in this
    ///   congregation
    pub async fn create(
        &self,
        params: CreatePublisherParams,
    ) -> Result<PublisherParam, AppError> {
        validate_privilege(&params.privilege)?;
        self.validate_group(params.group_id, params.congregation_id)
            .await?;

        let repo = PublisherRepository::new(self.db);
        let congregation_id = params.congregation_id;

        let publisher = repo.create(params).await?;
        let group_name = self
            .resolve_group_name(publisher.group_id, congregation_id)
            .await?;

        Ok(PublisherParam::from_entity(publisher, group_name))
    }

    /// Updates a publisher.
    /// Returns None if the publisher doesn't exist in this congregation.
    pub async fn update(
        &self,
        params: UpdatePublisherParams,
    ) -> Result<Option<PublisherParam>, AppError> {
        validate_privilege(&params.privilege)?;
        self.validate_group(params.group_id, params.congregation_id)
            .await?;

        let repo = PublisherRepository::new(self.db);
        let congregation_id = params.congregation_id;

        let Some(publisher) = repo.update(params).await? else {
            return Ok(None);
        };

        let group_name = self
            .resolve_group_name(publisher.group_id, congregation_id)
            .await?;

        Ok(Some(PublisherParam::from_entity(publisher, group_name)))
    }

    /// Deletes a publisher and its assignments (FK cascade).
    /// Returns false if the publisher doesn't exist in this congregation.
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, AppError> {
        let repo = PublisherRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
    }

    async fn validate_group(
        &self,
        group_id: Option<i32>,
        congregation_id: i32,
    ) -> Result<(), AppError> {
        let Some(group_id) = group_id else {
            return Ok(());
        };

        let group_repo = GroupRepository::new(self.db);
        if group_repo
            .find_in_congregation(group_id, congregation_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Group {} does not exist",
                group_id
            )));
        }

        Ok(())
    }

    async fn resolve_group_name(
        &self,
        group_id: Option<i32>,
        congregation_id: i32,
    ) -> Result<Option<String>, AppError> {
        let Some(group_id) = group_id else {
            return Ok(None);
        };

        let group_repo = GroupRepository::new(self.db);
        Ok(group_repo
            .find_in_congregation(group_id, congregation_id)
            .await?
            .map(|g| g.name))
    }
}

fn validate_privilege(privilege: &str) -> Result<(), AppError> {
    if !PRIVILEGES.contains(&privilege) {
        return Err(AppError::BadRequest(format!(
            "Unknown privilege '{}', expected one of: {}",
            privilege,
            PRIVILEGES.join(", ")
        )));
    }

    Ok(())
}
