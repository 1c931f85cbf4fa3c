//! Repository view assembly over live data.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use omni_core::result::AppResult;
use omni_database::repositories::{EventRepository, ProfessionalRepository};

use crate::repository::view::{build_view, RepositoryView};

/// Serves the per-user document repository view.
#[derive(Debug, Clone)]
pub struct RepositoryService {
    events: Arc<EventRepository>,
    professionals: Arc<ProfessionalRepository>,
}

impl RepositoryService {
    /// Create a new repository view service.
    pub fn new(events: Arc<EventRepository>, professionals: Arc<ProfessionalRepository>) -> Self {
        Self {
            events,
            professionals,
        }
    }

    /// Build the view for a user, optionally filtered by a search term.
    pub async fn view(&self, user_id: Uuid, search: Option<&str>) -> AppResult<RepositoryView> {
        let events = self.events.find_by_user(user_id).await?;
        let names: HashMap<Uuid, String> = self
            .professionals
            .find_by_user(user_id)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();
        Ok(build_view(events, &names, search))
    }
}
