use sea_orm::DatabaseConnection;

use crate::{
    data::group::GroupRepository,
    error::AppError,
    model::group::{CreateGroupParams, GroupParam, UpdateGroupParams},
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all groups of the congregation with member counts.
    pub async fn get_all(&self, congregation_id: i32) -> Result<Vec<GroupParam>, AppError> {
        let repo = GroupRepository::new(self.db);

        let groups = repo.get_all_with_counts(congregation_id).await?;

        Ok(groups
            .into_iter()
            .map(|(group, count)| GroupParam::from_entity(group, count))
            .collect())
    }

    pub async fn create(&self, params: CreateGroupParams) -> Result<GroupParam, AppError> {
        let repo = GroupRepository::new(self.db);

        let group = repo.create(params).await?;

        Ok(GroupParam::from_entity(group, 0))
    }

    /// Renames a group.
    /// Returns None if the group doesn't exist in this congregation.
    pub async fn update(&self, params: UpdateGroupParams) -> Result<Option<GroupParam>, AppError> {
        let repo = GroupRepository::new(self.db);
        let congregation_id = params.congregation_id;

        let Some(group) = repo.update(params).await? else {
            return Ok(None);
        };

        // Re-read the count so the response matches a subsequent list call.
        let counts = repo.get_all_with_counts(congregation_id).await?;
        let count = counts
            .iter()
            .find(|(g, _)| g.id == group.id)
            .map(|(_, c)| *c)
            .unwrap_or(0);

        Ok(Some(GroupParam::from_entity(group, count)))
    }

    /// Deletes a group; member publishers lose their group reference.
    /// Returns false if the group doesn't exist in this congregation.
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, AppError> {
        let repo = GroupRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
    }
}
