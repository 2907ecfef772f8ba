use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        import::{ImportPdfDto, ImportReportDto, SkippedRowDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::import::{ImportReport, ImportService},
    state::AppState,
};

/// Tag for grouping PDF-import endpoints in OpenAPI documentation
pub static IMPORT_TAG: &str = "import";

/// Bulk-import publishers from a PDF member list.
///
/// The PDF is sent to the document-extraction service; extracted rows are
/// validated and normalized before anything is inserted. Rows that fail
/// validation or name an existing publisher are reported as skipped.
#[utoipa::path(
    post,
    path = "/api/import/publishers",
    tag = IMPORT_TAG,
    request_body = ImportPdfDto,
    responses(
        (status = 200, description = "Import report", body = ImportReportDto),
        (status = 400, description = "Upload is not valid base64", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'publishers' scope", body = ErrorDto),
        (status = 500, description = "Extraction or database failure", body = ErrorDto)
    ),
)]
pub async fn import_publishers(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ImportPdfDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Publishers])
        .await?;

    let service = ImportService::new(&state.db, &state.extraction);

    let report = service
        .import_publishers(user.congregation_id, &payload.pdf_base64)
        .await?;

    Ok((StatusCode::OK, Json(into_dto(report))))
}

/// Bulk-import weekly meeting programs from a workbook PDF.
///
/// Weeks that already have a program are skipped so the same workbook can be
/// uploaded twice without duplicating anything.
#[utoipa::path(
    post,
    path = "/api/import/programs",
    tag = IMPORT_TAG,
    request_body = ImportPdfDto,
    responses(
        (status = 200, description = "Import report", body = ImportReportDto),
        (status = 400, description = "Upload is not valid base64", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'programs' scope", body = ErrorDto),
        (status = 500, description = "Extraction or database failure", body = ErrorDto)
    ),
)]
pub async fn import_programs(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ImportPdfDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Programs])
        .await?;

    let service = ImportService::new(&state.db, &state.extraction);

    let report = service
        .import_programs(user.congregation_id, &payload.pdf_base64)
        .await?;

    Ok((StatusCode::OK, Json(into_dto(report))))
}

fn into_dto(report: ImportReport) -> ImportReportDto {
    ImportReportDto {
        imported: report.imported,
        skipped: report
            .skipped
            .into_iter()
            .map(|row| SkippedRowDto {
                name: row.name,
                reason: row.reason,
            })
            .collect(),
    }
}
