use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::program::{
    CreateMeetingProgramParams, CreateProgramPartParams, UpdateMeetingProgramParams,
};

pub struct ProgramRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgramRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets programs of a congregation within an optional week range, ordered
    /// by week.
    pub async fn get_in_range(
        &self,
        congregation_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<entity::meeting_program::Model>, DbErr> {
        let mut query = entity::prelude::MeetingProgram::find()
            .filter(entity::meeting_program::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::meeting_program::Column::WeekStart);

        if let Some(from) = from {
            query = query.filter(entity::meeting_program::Column::WeekStart.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::meeting_program::Column::WeekStart.lte(to));
        }

        query.all(self.db).await
    }

    /// Gets the parts of a program in display order.
    pub async fn parts_for_program(
        &self,
        program_id: i32,
    ) -> Result<Vec<entity::program_part::Model>, DbErr> {
        entity::prelude::ProgramPart::find()
            .filter(entity::program_part::Column::ProgramId.eq(program_id))
            .order_by_asc(entity::program_part::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::meeting_program::Model>, DbErr> {
        entity::prelude::MeetingProgram::find_by_id(id)
            .filter(entity::meeting_program::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    /// Checks whether a program already exists for the week, optionally
    /// ignoring one program (for updates).
    pub async fn week_exists(
        &self,
        congregation_id: i32,
        week_start: NaiveDate,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::MeetingProgram::find()
            .filter(entity::meeting_program::Column::CongregationId.eq(congregation_id))
            .filter(entity::meeting_program::Column::WeekStart.eq(week_start));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::meeting_program::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Creates a program with its parts.
    pub async fn create(
        &self,
        params: CreateMeetingProgramParams,
    ) -> Result<entity::meeting_program::Model, DbErr> {
        let program = entity::meeting_program::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            week_start: ActiveValue::Set(params.week_start),
            chairman_id: ActiveValue::Set(params.chairman_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_parts(program.id, params.parts).await?;

        Ok(program)
    }

    /// Updates a program and replaces its whole part list.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated program
    /// - `Ok(None)` - Program not found or not in this congregation
    pub async fn update(
        &self,
        params: UpdateMeetingProgramParams,
    ) -> Result<Option<entity::meeting_program::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let program_id = existing.id;

        let mut active: entity::meeting_program::ActiveModel = existing.into();
        active.week_start = ActiveValue::Set(params.week_start);
        active.chairman_id = ActiveValue::Set(params.chairman_id);
        let program = active.update(self.db).await?;

        entity::prelude::ProgramPart::delete_many()
            .filter(entity::program_part::Column::ProgramId.eq(program_id))
            .exec(self.db)
            .await?;

        self.insert_parts(program_id, params.parts).await?;

        Ok(Some(program))
    }

    /// Deletes a program and, via FK cascade, its parts.
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(program) = self.find_in_congregation(id, congregation_id).await? else {
            return Ok(false);
        };

        program.delete(self.db).await?;

        Ok(true)
    }

    async fn insert_parts(
        &self,
        program_id: i32,
        parts: Vec<CreateProgramPartParams>,
    ) -> Result<(), DbErr> {
        for part in parts {
            entity::program_part::ActiveModel {
                program_id: ActiveValue::Set(program_id),
                section: ActiveValue::Set(part.section),
                title: ActiveValue::Set(part.title),
                duration_minutes: ActiveValue::Set(part.duration_minutes),
                assignee_id: ActiveValue::Set(part.assignee_id),
                assistant_id: ActiveValue::Set(part.assistant_id),
                position: ActiveValue::Set(part.position),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
