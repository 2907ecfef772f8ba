//! AI-assisted PDF bulk import.
//!
//! Both importers run the same pipeline: validate the upload is base64, send
//! the PDF to the extraction service with a prompt describing the expected
//! JSON, normalize the model's output through the strict validators in
//! [`validate`], and only then insert rows. A malformed model response fails
//! the whole request before anything is written.

pub mod validate;

use base64::Engine;
use sea_orm::DatabaseConnection;

use crate::{
    ai::ExtractionClient,
    data::{program::ProgramRepository, publisher::PublisherRepository},
    error::AppError,
    model::{
        program::{CreateMeetingProgramParams, CreateProgramPartParams},
        publisher::CreatePublisherParams,
    },
    service::import::validate::SkippedRow,
};

const PUBLISHER_PROMPT: &str = "\
Extract every congregation member listed in this PDF. Respond with JSON only, \
no commentary, in this exact shape: \
{\"publishers\": [{\"name\": \"...\", \"phone\": \"...\", \"email\": \"...\", \
\"privilege\": \"publisher|ministerial_servant|elder\", \"pioneer\": false}]}. \
Use null for unknown fields. Do not invent members that are not in the document.";

const PROGRAM_PROMPT: &str = "\
Extract the weekly meeting schedule from this meeting workbook PDF. Respond \
with JSON only, no commentary, in this exact shape: \
{\"weeks\": [{\"week_start\": \"YYYY-MM-DD\", \"parts\": [{\"section\": \
\"treasures|ministry|living\", \"title\": \"...\", \"duration_minutes\": 10}]}]}. \
week_start is the Monday of the week. List parts in the order they appear. Do \
not invent parts that are not in the document.";

/// Result of a bulk import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: u32,
    pub skipped: Vec<SkippedRow>,
}

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
    extraction: &'a ExtractionClient,
}

impl<'a> ImportService<'a> {
    pub fn new(db: &'a DatabaseConnection, extraction: &'a ExtractionClient) -> Self {
        Self { db, extraction }
    }

    /// Imports publishers from a PDF member list.
    ///
    /// Rows that fail validation are reported, not inserted; publishers whose
    /// exact name already exists are skipped so re-importing the same PDF is
    /// harmless.
    pub async fn import_publishers(
        &self,
        congregation_id: i32,
        pdf_base64: &str,
    ) -> Result<ImportReport, AppError> {
        validate_base64(pdf_base64)?;

        let value = self
            .extraction
            .extract_json(pdf_base64, PUBLISHER_PROMPT)
            .await?;

        let (rows, mut skipped) = validate::normalize_publishers(&value)?;

        let repo = PublisherRepository::new(self.db);
        let mut imported = 0u32;

        for row in rows {
            if repo
                .find_by_name(congregation_id, &row.name)
                .await?
                .is_some()
            {
                skipped.push(SkippedRow {
                    name: row.name,
                    reason: "publisher already exists".to_string(),
                });
                continue;
            }

            repo.create(CreatePublisherParams {
                congregation_id,
                group_id: None,
                name: row.name,
                phone: row.phone,
                email: row.email,
                privilege: row.privilege,
                pioneer: row.pioneer,
                active: true,
            })
            .await?;
            imported += 1;
        }

        tracing::info!(
            "Imported {} publishers, skipped {}",
            imported,
            skipped.len()
        );

        Ok(ImportReport { imported, skipped })
    }

    /// Imports meeting programs from a workbook PDF.
    ///
    /// Weeks that already have a program are skipped; part positions follow
    /// the order the document listed them.
    pub async fn import_programs(
        &self,
        congregation_id: i32,
        pdf_base64: &str,
    ) -> Result<ImportReport, AppError> {
        validate_base64(pdf_base64)?;

        let value = self
            .extraction
            .extract_json(pdf_base64, PROGRAM_PROMPT)
            .await?;

        let (weeks, mut skipped) = validate::normalize_programs(&value)?;

        let repo = ProgramRepository::new(self.db);
        let mut imported = 0u32;

        for week in weeks {
            if repo
                .week_exists(congregation_id, week.week_start, None)
                .await?
            {
                skipped.push(SkippedRow {
                    name: week.week_start.to_string(),
                    reason: "week already has a program".to_string(),
                });
                continue;
            }

            let parts = week
                .parts
                .into_iter()
                .enumerate()
                .map(|(position, part)| CreateProgramPartParams {
                    section: part.section,
                    title: part.title,
                    duration_minutes: part.duration_minutes,
                    assignee_id: None,
                    assistant_id: None,
                    position: position as i32,
                })
                .collect();

            repo.create(CreateMeetingProgramParams {
                congregation_id,
                week_start: week.week_start,
                chairman_id: None,
                parts,
            })
            .await?;
            imported += 1;
        }

        tracing::info!(
            "Imported {} program weeks, skipped {}",
            imported,
            skipped.len()
        );

        Ok(ImportReport { imported, skipped })
    }
}

fn validate_base64(pdf_base64: &str) -> Result<(), AppError> {
    if pdf_base64.is_empty() {
        return Err(AppError::BadRequest("Empty PDF upload".to_string()));
    }

    base64::engine::general_purpose::STANDARD
        .decode(pdf_base64)
        .map_err(|_| AppError::BadRequest("PDF upload is not valid base64".to_string()))?;

    Ok(())
}
