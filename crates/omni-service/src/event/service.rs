//! Event lifecycle orchestration: create, update, and delete.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use omni_core::error::{AppError, ErrorKind};
use omni_core::result::AppResult;
use omni_core::traits::DocumentStore;
use omni_database::repositories::{EventRepository, NotificationRepository};
use omni_entity::event::{Attachment, CreateEvent, EventType, HealthEvent, UpdateEvent};
use omni_entity::notification::NotificationStatus;

use crate::event::slots::{reconcile_slots, ReconcileOutcome};
use crate::schedule::{normalize_event_date, ranges_overlap, validate_event_times};

/// Raw event fields as submitted by a caller.
///
/// Date and times arrive as text and are validated and normalized by
/// the service before anything touches the database.
#[derive(Debug, Clone)]
pub struct EventInput {
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional observation.
    pub observation: Option<String>,
    /// Calendar date, `YYYY-MM-DD` or a full timestamp.
    pub date: String,
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
    /// Kind of occurrence.
    pub event_type: EventType,
    /// Professional the event is booked with.
    pub professional_id: Uuid,
    /// Attachments supplied with the request.
    pub attachments: Vec<Attachment>,
    /// Source notification to archive in the same transaction.
    pub notification_id: Option<Uuid>,
}

/// Result of an update: either the new row or a result-slot conflict
/// that requires the caller's confirmation before anything changes.
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    /// The event was updated.
    Updated(HealthEvent),
    /// A result document already exists; nothing was persisted.
    ResultConflict {
        /// User-facing confirmation prompt.
        prompt: String,
    },
}

/// Orchestrates event create/update/delete.
///
/// Creation serializes per (professional, day) through an advisory lock
/// so the overlap read and the insert cannot race a concurrent create.
/// Updates deliberately skip the overlap check, which lets a user fix a
/// conflicting booking in place.
#[derive(Debug, Clone)]
pub struct EventService {
    pool: PgPool,
    events: Arc<EventRepository>,
    notifications: Arc<NotificationRepository>,
    store: Arc<dyn DocumentStore>,
    storage_timeout: Duration,
}

impl EventService {
    /// Create a new event service.
    pub fn new(
        pool: PgPool,
        events: Arc<EventRepository>,
        notifications: Arc<NotificationRepository>,
        store: Arc<dyn DocumentStore>,
        storage_timeout: Duration,
    ) -> Self {
        Self {
            pool,
            events,
            notifications,
            store,
            storage_timeout,
        }
    }

    /// Create an event, rejecting time conflicts for the professional.
    ///
    /// When `notification_id` is set, the notification is archived in
    /// the same transaction as the insert; neither half commits alone.
    pub async fn create(&self, user_id: Uuid, input: EventInput) -> AppResult<HealthEvent> {
        self.check_required(&input)?;
        let date = normalize_event_date(&input.date)?;

        // Same well-formedness and one-per-slot rules as an update.
        let attachments = match reconcile_slots(&[], &input.attachments, true)? {
            ReconcileOutcome::Merged(merged) => merged,
            ReconcileOutcome::ResultConflict { prompt } => {
                return Err(AppError::conflict(prompt));
            }
        };

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        self.events
            .lock_professional_day(&mut tx, input.professional_id, date)
            .await?;

        let day = self
            .events
            .find_by_professional_date_tx(&mut tx, input.professional_id, date)
            .await?;
        let conflicting = day.iter().any(|existing| {
            ranges_overlap(
                &existing.start_time,
                &existing.end_time,
                &input.start_time,
                &input.end_time,
            )
        });
        if conflicting {
            return Err(AppError::conflict(
                "Conflito de horário: já existe um evento para este profissional neste período",
            ));
        }

        let created = self
            .events
            .insert_tx(
                &mut tx,
                &CreateEvent {
                    title: input.title,
                    description: input.description,
                    observation: input.observation,
                    date,
                    start_time: input.start_time,
                    end_time: input.end_time,
                    event_type: input.event_type,
                    user_id,
                    professional_id: input.professional_id,
                    attachments,
                },
            )
            .await?;

        if let Some(notification_id) = input.notification_id {
            let archived = self
                .notifications
                .set_status_tx(&mut tx, notification_id, NotificationStatus::Archived)
                .await?;
            if !archived {
                return Err(AppError::not_found("Notification not found"));
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        info!(event_id = %created.id, %user_id, "Event created");
        Ok(created)
    }

    /// Update an event in place.
    ///
    /// Attachments pass through the slot reconciler; a result-slot
    /// conflict aborts the whole update with a confirmation prompt and
    /// no field is persisted. No overlap re-check is performed.
    pub async fn update(&self, input: EventInput, id: Uuid, overwrite: bool) -> AppResult<UpdateOutcome> {
        self.check_required(&input)?;
        let date = normalize_event_date(&input.date)?;

        let existing = self
            .events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let attachments = if input.attachments.is_empty() {
            existing.attachments.0.clone()
        } else {
            match reconcile_slots(&existing.attachments.0, &input.attachments, overwrite)? {
                ReconcileOutcome::Merged(merged) => merged,
                ReconcileOutcome::ResultConflict { prompt } => {
                    return Ok(UpdateOutcome::ResultConflict { prompt });
                }
            }
        };

        let data = UpdateEvent {
            id,
            title: input.title,
            description: input.description,
            observation: input.observation,
            date,
            start_time: input.start_time,
            end_time: input.end_time,
            event_type: input.event_type,
            professional_id: input.professional_id,
            attachments,
        };

        let updated = if let Some(notification_id) = input.notification_id {
            let mut tx = self.pool.begin().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
            })?;
            let updated = self
                .events
                .update_tx(&mut tx, &data)
                .await?
                .ok_or_else(|| AppError::not_found("Event not found"))?;
            let archived = self
                .notifications
                .set_status_tx(&mut tx, notification_id, NotificationStatus::Archived)
                .await?;
            if !archived {
                return Err(AppError::not_found("Notification not found"));
            }
            tx.commit().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
            })?;
            updated
        } else {
            self.events
                .update(&data)
                .await?
                .ok_or_else(|| AppError::not_found("Event not found"))?
        };

        info!(event_id = %id, "Event updated");
        Ok(UpdateOutcome::Updated(updated))
    }

    /// Delete an event, optionally removing its stored documents.
    ///
    /// File removal is best-effort and bounded by the storage timeout;
    /// a missing or unreachable file is logged and never blocks the
    /// row deletion.
    pub async fn delete(&self, id: Uuid, delete_files: bool) -> AppResult<()> {
        let event = self
            .events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        if delete_files {
            for attachment in &event.attachments.0 {
                let Some(path) = self.store.path_from_url(&attachment.url) else {
                    warn!(event_id = %id, url = %attachment.url, "Attachment URL outside storage, skipping");
                    continue;
                };
                match tokio::time::timeout(self.storage_timeout, self.store.delete(&path)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        warn!(event_id = %id, %path, error = %e, "Failed to delete attachment file")
                    }
                    Err(_) => {
                        warn!(event_id = %id, %path, "Timed out deleting attachment file")
                    }
                }
            }
        }

        let removed = self.events.delete(id).await?;
        if !removed {
            return Err(AppError::not_found("Event not found"));
        }
        info!(event_id = %id, delete_files, "Event deleted");
        Ok(())
    }

    /// Replace only the attachment list of an event.
    pub async fn set_attachments(
        &self,
        id: Uuid,
        attachments: &[Attachment],
    ) -> AppResult<HealthEvent> {
        self.events
            .update_attachments(id, attachments)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))
    }

    /// List a user's events, newest date first.
    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<HealthEvent>> {
        self.events.find_by_user(user_id).await
    }

    fn check_required(&self, input: &EventInput) -> AppResult<()> {
        if input.title.trim().is_empty() {
            return Err(AppError::validation("Título é obrigatório"));
        }
        let validation = validate_event_times(&input.date, &input.start_time, &input.end_time);
        if !validation.is_valid() {
            return Err(AppError::validation(validation.message()));
        }
        Ok(())
    }
}
