//! Server-side notification promotion saga.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use omni_core::config::events::EventsConfig;
use omni_core::error::AppError;
use omni_core::result::AppResult;
use omni_core::traits::DocumentStore;
use omni_database::repositories::{
    EventRepository, NotificationRepository, ProfessionalRepository, ReportRepository,
};
use omni_entity::event::{Attachment, EventType, FileSlot, HealthEvent};
use omni_entity::notification::{NotificationPayload, NotificationStatus};
use omni_entity::professional::CreateProfessional;
use omni_entity::report::ReportStatus;

use crate::event::service::{EventInput, EventService};

/// Promotes a lab notification into an event with a stored result file.
///
/// The whole flow runs server-side as a saga: the event insert and the
/// notification archive commit atomically, then the embedded file is
/// written to storage and attached. If storage or the attach fails, the
/// event is removed and the notification restored to pending, so no
/// half-promoted event survives.
#[derive(Debug, Clone)]
pub struct PromotionService {
    event_service: EventService,
    events: Arc<EventRepository>,
    professionals: Arc<ProfessionalRepository>,
    notifications: Arc<NotificationRepository>,
    reports: Arc<ReportRepository>,
    store: Arc<dyn DocumentStore>,
    config: EventsConfig,
    storage_timeout: Duration,
}

impl PromotionService {
    /// Create a new promotion service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        event_service: EventService,
        events: Arc<EventRepository>,
        professionals: Arc<ProfessionalRepository>,
        notifications: Arc<NotificationRepository>,
        reports: Arc<ReportRepository>,
        store: Arc<dyn DocumentStore>,
        config: EventsConfig,
        storage_timeout: Duration,
    ) -> Self {
        Self {
            event_service,
            events,
            professionals,
            notifications,
            reports,
            store,
            config,
            storage_timeout,
        }
    }

    /// Promote a pending lab notification into an event.
    pub async fn promote(&self, user_id: Uuid, notification_id: Uuid) -> AppResult<HealthEvent> {
        let notification = self
            .notifications
            .find_by_id(notification_id)
            .await?
            .filter(|n| n.user_id == user_id)
            .ok_or_else(|| AppError::not_found("Notification not found"))?;

        if !notification.is_pending() {
            return Err(AppError::conflict("Notification has already been processed"));
        }

        let lab = match &notification.payload.0 {
            NotificationPayload::Lab(lab) => lab.clone(),
            NotificationPayload::Report(_) => {
                return Err(AppError::validation(
                    "Notification does not carry a lab report",
                ));
            }
        };

        let content = BASE64.decode(&lab.report.file_content).map_err(|_| {
            AppError::validation("Notification report content is not valid base64")
        })?;

        // Resolve the requesting doctor to a professional, creating one
        // on first sight.
        let professional = match self
            .professionals
            .find_by_name(user_id, &lab.doctor_name)
            .await?
        {
            Some(existing) => existing,
            None => {
                self.professionals
                    .create(&CreateProfessional {
                        user_id,
                        name: lab.doctor_name.clone(),
                        specialty: Some(self.config.promotion_professional_specialty.clone()),
                    })
                    .await?
            }
        };

        // Event insert + notification archive commit together.
        let event = self
            .event_service
            .create(
                user_id,
                EventInput {
                    title: format!("Laudo: {}", lab.report.file_name),
                    description: Some(self.config.promotion_description.clone()),
                    observation: None,
                    date: lab.exam_date.clone(),
                    start_time: self.config.promotion_start_time.clone(),
                    end_time: self.config.promotion_end_time.clone(),
                    event_type: EventType::Exam,
                    professional_id: professional.id,
                    attachments: Vec::new(),
                    notification_id: Some(notification_id),
                },
            )
            .await?;

        let path = format!("{}/result-{}", event.id, lab.report.file_name);
        if let Err(e) = self.write_with_retry(&path, Bytes::from(content)).await {
            self.compensate(event.id, notification_id).await;
            return Err(e);
        }

        let attachment = Attachment {
            slot: FileSlot::Result,
            name: lab.report.file_name.clone(),
            url: self.store.public_url(&path),
            upload_date: Some(Utc::now().date_naive()),
            expiry_date: None,
        };
        let updated = match self
            .event_service
            .set_attachments(event.id, std::slice::from_ref(&attachment))
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                if let Err(delete_err) = self.store.delete(&path).await {
                    warn!(%path, error = %delete_err, "Failed to remove uploaded file during rollback");
                }
                self.compensate(event.id, notification_id).await;
                return Err(e);
            }
        };

        // A referenced report is stamped viewed; a failure here is
        // logged but does not undo the promotion.
        if let Some(report_id) = lab.report_id {
            if let Err(e) = self.reports.set_status(report_id, ReportStatus::Viewed).await {
                warn!(%report_id, error = %e, "Failed to mark report as viewed");
            }
        }

        info!(%notification_id, event_id = %event.id, "Notification promoted to event");
        Ok(updated)
    }

    /// Write to storage, bounded by the configured timeout, retrying
    /// once on failure.
    async fn write_with_retry(&self, path: &str, data: Bytes) -> AppResult<()> {
        let first = self.timed_write(path, data.clone()).await;
        match first {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(%path, error = %e, "Storage write failed, retrying once");
                self.timed_write(path, data).await
            }
        }
    }

    async fn timed_write(&self, path: &str, data: Bytes) -> AppResult<()> {
        match tokio::time::timeout(self.storage_timeout, self.store.write(path, data)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::storage(format!("Storage write timed out: {path}"))),
        }
    }

    /// Undo a partial promotion: drop the created event and restore the
    /// notification to pending.
    async fn compensate(&self, event_id: Uuid, notification_id: Uuid) {
        if let Err(e) = self.events.delete(event_id).await {
            error!(%event_id, error = %e, "Promotion rollback failed to delete event");
        }
        if let Err(e) = self
            .notifications
            .set_status(notification_id, NotificationStatus::Pending)
            .await
        {
            error!(%notification_id, error = %e, "Promotion rollback failed to restore notification");
        }
    }
}
