//! File-slot reconciliation for event attachments.

use omni_core::error::AppError;
use omni_core::result::AppResult;
use omni_entity::event::{Attachment, FileSlot};

/// Prompt returned when an incoming result document would replace an
/// existing one without explicit confirmation.
pub const RESULT_OVERWRITE_PROMPT: &str =
    "Já existe um laudo para este evento. Deseja sobrescrever?";

/// Outcome of merging incoming attachments into an event's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The merged attachment list, ready to persist.
    Merged(Vec<Attachment>),
    /// A result document already exists and overwrite was not
    /// signalled. Nothing may be persisted, including unrelated slots
    /// supplied in the same call.
    ResultConflict {
        /// User-facing confirmation prompt.
        prompt: String,
    },
}

/// Merge incoming attachments into the current list, keyed by slot.
///
/// At most one attachment survives per slot; when the caller supplies
/// several for the same slot, the last one in input order wins.
/// Replacing a stored result document with a different one requires
/// `overwrite`; sending back the stored one unchanged is a no-op. The
/// whole merge is atomic per request: a result-slot conflict aborts it
/// entirely, even for unrelated slots.
pub fn reconcile_slots(
    current: &[Attachment],
    incoming: &[Attachment],
    overwrite: bool,
) -> AppResult<ReconcileOutcome> {
    for att in incoming {
        if !att.is_well_formed() {
            return Err(AppError::validation(format!(
                "Malformed attachment for slot '{}': name and url are required",
                att.slot
            )));
        }
    }

    // Last entry per slot wins.
    let mut replacements: Vec<Attachment> = Vec::new();
    for att in incoming {
        replacements.retain(|existing| existing.slot != att.slot);
        replacements.push(att.clone());
    }

    let stored_result = current.iter().find(|a| a.slot == FileSlot::Result);
    let incoming_result = replacements.iter().find(|a| a.slot == FileSlot::Result);
    if let (Some(stored), Some(replacement)) = (stored_result, incoming_result) {
        // An edit round-trips the full attachment list, so the stored
        // result coming back unchanged is not an overwrite.
        let same_document = stored.name == replacement.name && stored.url == replacement.url;
        if !overwrite && !same_document {
            return Ok(ReconcileOutcome::ResultConflict {
                prompt: RESULT_OVERWRITE_PROMPT.to_string(),
            });
        }
    }

    let mut merged: Vec<Attachment> = current
        .iter()
        .filter(|a| !replacements.iter().any(|r| r.slot == a.slot))
        .cloned()
        .collect();
    merged.extend(replacements);
    Ok(ReconcileOutcome::Merged(merged))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn att(slot: FileSlot, name: &str) -> Attachment {
        Attachment {
            slot,
            name: name.to_string(),
            url: format!("/uploads/e1/{}-{name}", slot.as_str()),
            upload_date: None,
            expiry_date: None,
        }
    }

    #[test]
    fn test_merge_into_empty_list() {
        let incoming = vec![att(FileSlot::Request, "pedido.pdf")];
        match reconcile_slots(&[], &incoming, false).unwrap() {
            ReconcileOutcome::Merged(merged) => assert_eq!(merged, incoming),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_merge_is_idempotent_per_slot() {
        let current = vec![att(FileSlot::Invoice, "nf.pdf")];
        let incoming = vec![att(FileSlot::Invoice, "nf.pdf")];
        match reconcile_slots(&current, &incoming, false).unwrap() {
            ReconcileOutcome::Merged(merged) => {
                assert_eq!(merged.len(), 1);
                assert_eq!(merged[0], current[0]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_last_duplicate_slot_wins() {
        let incoming = vec![
            att(FileSlot::Invoice, "nf-velha.pdf"),
            att(FileSlot::Invoice, "nf-nova.pdf"),
        ];
        match reconcile_slots(&[], &incoming, false).unwrap() {
            ReconcileOutcome::Merged(merged) => {
                assert_eq!(merged.len(), 1);
                assert_eq!(merged[0].name, "nf-nova.pdf");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_resending_stored_result_is_not_a_conflict() {
        let current = vec![
            att(FileSlot::Result, "hemograma.pdf"),
            att(FileSlot::Invoice, "nf.pdf"),
        ];
        let incoming = vec![
            att(FileSlot::Result, "hemograma.pdf"),
            att(FileSlot::Certificate, "atestado.pdf"),
        ];
        match reconcile_slots(&current, &incoming, false).unwrap() {
            ReconcileOutcome::Merged(merged) => {
                assert_eq!(merged.len(), 3);
                assert!(merged.iter().any(|a| a.name == "hemograma.pdf"));
                assert!(merged.iter().any(|a| a.name == "atestado.pdf"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_renamed_result_still_conflicts() {
        let current = vec![att(FileSlot::Result, "hemograma.pdf")];
        let incoming = vec![att(FileSlot::Result, "hemograma-novo.pdf")];
        match reconcile_slots(&current, &incoming, false).unwrap() {
            ReconcileOutcome::ResultConflict { prompt } => {
                assert_eq!(prompt, RESULT_OVERWRITE_PROMPT);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_result_conflict_aborts_whole_merge() {
        let current = vec![att(FileSlot::Result, "hemograma.pdf")];
        let incoming = vec![
            att(FileSlot::Invoice, "nf.pdf"),
            att(FileSlot::Result, "hemograma-v2.pdf"),
        ];
        match reconcile_slots(&current, &incoming, false).unwrap() {
            ReconcileOutcome::ResultConflict { prompt } => {
                assert_eq!(prompt, RESULT_OVERWRITE_PROMPT);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_overwrite_replaces_result_and_keeps_others() {
        let current = vec![
            att(FileSlot::Result, "hemograma.pdf"),
            att(FileSlot::Certificate, "atestado.pdf"),
        ];
        let incoming = vec![att(FileSlot::Result, "hemograma-v2.pdf")];
        match reconcile_slots(&current, &incoming, true).unwrap() {
            ReconcileOutcome::Merged(merged) => {
                assert_eq!(merged.len(), 2);
                assert!(merged.iter().any(|a| a.name == "atestado.pdf"));
                assert!(merged.iter().any(|a| a.name == "hemograma-v2.pdf"));
                assert!(!merged.iter().any(|a| a.name == "hemograma.pdf"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_unrelated_slot_passes_despite_existing_result() {
        let current = vec![att(FileSlot::Result, "hemograma.pdf")];
        let incoming = vec![att(FileSlot::Invoice, "nf.pdf")];
        match reconcile_slots(&current, &incoming, false).unwrap() {
            ReconcileOutcome::Merged(merged) => {
                assert_eq!(merged.len(), 2);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_attachment_rejected() {
        let incoming = vec![Attachment {
            slot: FileSlot::Request,
            name: String::new(),
            url: "/uploads/e1/request-x.pdf".to_string(),
            upload_date: None,
            expiry_date: None,
        }];
        let err = reconcile_slots(&[], &incoming, false).unwrap_err();
        assert_eq!(err.kind, omni_core::error::ErrorKind::Validation);
    }
}
