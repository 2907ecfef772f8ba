use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::talk::{CreateTalkScheduleParams, UpdateTalkScheduleParams};

pub struct TalkScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TalkScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets scheduled talks within an optional date range, ordered by date.
    ///
    /// Speaker and outline are resolved in separate lookups per row; schedule
    /// listings are small (one row per meeting week).
    pub async fn get_in_range(
        &self,
        congregation_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<
        Vec<(
            entity::talk_schedule::Model,
            Option<entity::speaker::Model>,
            Option<entity::talk::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::TalkSchedule::find()
            .filter(entity::talk_schedule::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::talk_schedule::Column::Date);

        if let Some(from) = from {
            query = query.filter(entity::talk_schedule::Column::Date.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::talk_schedule::Column::Date.lte(to));
        }

        let rows = query.all(self.db).await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let speaker = entity::prelude::Speaker::find_by_id(row.speaker_id)
                .one(self.db)
                .await?;
            let talk = match row.talk_id {
                Some(talk_id) => entity::prelude::Talk::find_by_id(talk_id).one(self.db).await?,
                None => None,
            };
            result.push((row, speaker, talk));
        }

        Ok(result)
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::talk_schedule::Model>, DbErr> {
        entity::prelude::TalkSchedule::find_by_id(id)
            .filter(entity::talk_schedule::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    /// Checks whether a talk is already scheduled on the date, optionally
    /// ignoring one row (for updates).
    pub async fn date_exists(
        &self,
        congregation_id: i32,
        date: NaiveDate,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::TalkSchedule::find()
            .filter(entity::talk_schedule::Column::CongregationId.eq(congregation_id))
            .filter(entity::talk_schedule::Column::Date.eq(date));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::talk_schedule::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        params: CreateTalkScheduleParams,
    ) -> Result<entity::talk_schedule::Model, DbErr> {
        entity::talk_schedule::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            date: ActiveValue::Set(params.date),
            speaker_id: ActiveValue::Set(params.speaker_id),
            talk_id: ActiveValue::Set(params.talk_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        params: UpdateTalkScheduleParams,
    ) -> Result<Option<entity::talk_schedule::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::talk_schedule::ActiveModel = existing.into();
        active.date = ActiveValue::Set(params.date);
        active.speaker_id = ActiveValue::Set(params.speaker_id);
        active.talk_id = ActiveValue::Set(params.talk_id);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(scheduled) = self.find_in_congregation(id, congregation_id).await? else {
            return Ok(false);
        };

        scheduled.delete(self.db).await?;

        Ok(true)
    }
}
