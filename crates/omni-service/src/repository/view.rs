//! Pure projection of a user's events into the repository view.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use omni_entity::event::{FileSlot, HealthEvent};

/// One event with its professional's name resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryEntry {
    /// The event itself, attachments included.
    #[serde(flatten)]
    pub event: HealthEvent,
    /// Resolved name of the event's professional.
    pub professional_name: String,
}

/// Events sharing a calendar date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryGroup {
    /// The shared date.
    pub date: NaiveDate,
    /// Events on that date, in start-time order.
    pub events: Vec<RepositoryEntry>,
}

/// Count of documents in one slot category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCount {
    /// Slot category.
    pub slot: FileSlot,
    /// Number of documents across all events.
    pub count: usize,
}

/// The assembled repository view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryView {
    /// Date groups, newest first, after filtering.
    pub groups: Vec<RepositoryGroup>,
    /// Per-slot document counts over ALL events, unaffected by the
    /// filter.
    pub summary: Vec<SlotCount>,
    /// Total document count over all events.
    pub total_documents: usize,
}

/// Assemble the repository view from a user's events.
///
/// The search term filters case-insensitively over event title,
/// professional name, and attachment names; the document summary is
/// computed before filtering.
pub fn build_view(
    events: Vec<HealthEvent>,
    professional_names: &HashMap<Uuid, String>,
    search: Option<&str>,
) -> RepositoryView {
    let (summary, total_documents) = summarize_slots(&events);

    let entries: Vec<RepositoryEntry> = events
        .into_iter()
        .map(|event| {
            let professional_name = professional_names
                .get(&event.professional_id)
                .cloned()
                .unwrap_or_default();
            RepositoryEntry {
                event,
                professional_name,
            }
        })
        .filter(|entry| match search {
            Some(term) if !term.trim().is_empty() => matches_filter(entry, term),
            _ => true,
        })
        .collect();

    RepositoryView {
        groups: group_by_date(entries),
        summary,
        total_documents,
    }
}

/// Whether an entry matches a case-insensitive substring filter over
/// its title, professional name, and attachment names.
fn matches_filter(entry: &RepositoryEntry, term: &str) -> bool {
    let term = term.to_lowercase();
    entry.event.title.to_lowercase().contains(&term)
        || entry.professional_name.to_lowercase().contains(&term)
        || entry
            .event
            .attachments
            .0
            .iter()
            .any(|a| a.name.to_lowercase().contains(&term))
}

/// Group entries by date, newest date first.
///
/// Entries arrive already ordered (date descending, start ascending),
/// so adjacent runs share a date.
fn group_by_date(entries: Vec<RepositoryEntry>) -> Vec<RepositoryGroup> {
    let mut groups: Vec<RepositoryGroup> = Vec::new();
    for entry in entries {
        match groups.last_mut() {
            Some(group) if group.date == entry.event.date => group.events.push(entry),
            _ => groups.push(RepositoryGroup {
                date: entry.event.date,
                events: vec![entry],
            }),
        }
    }
    groups
}

/// Count documents per slot across all events, in display order.
fn summarize_slots(events: &[HealthEvent]) -> (Vec<SlotCount>, usize) {
    let mut total = 0;
    let summary = FileSlot::ALL
        .iter()
        .map(|&slot| {
            let count = events
                .iter()
                .flat_map(|e| e.attachments.0.iter())
                .filter(|a| a.slot == slot)
                .count();
            total += count;
            SlotCount { slot, count }
        })
        .filter(|c| c.count > 0)
        .collect();
    (summary, total)
}
