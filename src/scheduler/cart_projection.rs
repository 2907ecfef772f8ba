use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::cart::CartService};

/// How far ahead the fixed cart schedule should always reach, in weeks.
const HORIZON_WEEKS: u32 = 4;

/// Starts the cart schedule projection scheduler.
///
/// Runs daily at 03:00 and tops up every congregation's fixed cart schedule
/// so it stays [`HORIZON_WEEKS`] ahead, using the same projection service as
/// the generate endpoint. Errors are logged and do not stop the job.
///
/// # Arguments
/// - `db` - Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 0 3 * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = top_up_fixed_schedules(&db).await {
                tracing::error!("Error topping up cart schedules: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cart schedule projection scheduler started");

    Ok(())
}

/// Projects fixed cart schedules forward for every congregation that has
/// fallen below the horizon.
async fn top_up_fixed_schedules(db: &DatabaseConnection) -> Result<(), AppError> {
    let today = Utc::now().date_naive();
    let congregations = entity::prelude::Congregation::find().all(db).await?;

    for congregation in congregations {
        let service = CartService::new(db);

        let weeks = service
            .weeks_below_horizon(congregation.id, today, HORIZON_WEEKS)
            .await?;
        if weeks == 0 {
            continue;
        }

        // The generate endpoint caps a single run; an instance that was down
        // for a long time catches up over consecutive nights.
        match service
            .generate_fixed_schedules(congregation.id, weeks.min(26))
            .await
        {
            Ok(report) => {
                tracing::info!(
                    "Topped up cart schedules for congregation {}: {} slots, {} assignments",
                    congregation.id,
                    report.created_slots,
                    report.copied_assignments
                );
            }
            Err(e) => {
                tracing::error!(
                    "Failed to top up cart schedules for congregation {}: {}",
                    congregation.id,
                    e
                );
            }
        }
    }

    Ok(())
}
