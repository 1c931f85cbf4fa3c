//! Event scheduling and promotion configuration.

use serde::{Deserialize, Serialize};

/// Settings for the event lifecycle and notification promotion services.
///
/// These were implicit constants in earlier revisions; they are injected
/// into the services at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Description applied to events promoted from a lab notification when
    /// the caller supplies no observation.
    #[serde(default = "default_promotion_description")]
    pub promotion_description: String,
    /// Specialty assigned to professionals auto-created during promotion.
    #[serde(default = "default_specialty")]
    pub promotion_professional_specialty: String,
    /// Start time (`HH:MM`) given to promoted events.
    #[serde(default = "default_promotion_start")]
    pub promotion_start_time: String,
    /// End time (`HH:MM`) given to promoted events.
    #[serde(default = "default_promotion_end")]
    pub promotion_end_time: String,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            promotion_description: default_promotion_description(),
            promotion_professional_specialty: default_specialty(),
            promotion_start_time: default_promotion_start(),
            promotion_end_time: default_promotion_end(),
        }
    }
}

fn default_promotion_description() -> String {
    "laudo enviado pelo app Omni".to_string()
}

fn default_specialty() -> String {
    "A ser definido".to_string()
}

fn default_promotion_start() -> String {
    "09:00".to_string()
}

fn default_promotion_end() -> String {
    "09:30".to_string()
}
