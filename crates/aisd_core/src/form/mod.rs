use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{Incident, Severity};
use crate::error::AppError;
use crate::store::IncidentStore;

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormState {
    Hidden,
    Editing,
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    Title,
    Severity,
    Description,
}

/// In-progress incident. `id` and `reported_at` are only assigned on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    /// `None` when the selector was cleared or given an unknown label.
    pub severity: Option<Severity>,
    pub description: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            severity: Some(Severity::Low),
            description: String::new(),
        }
    }
}

impl Draft {
    fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty() && self.severity.is_some()
    }
}

/// Entry form for new incidents.
///
/// `Hidden -> Editing` on open; any state `-> Hidden` on close or successful submit, which
/// also discards the draft. A failed submit moves to `Invalid` and the draft stays editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentDraftForm {
    state: FormState,
    draft: Draft,
}

impl Default for IncidentDraftForm {
    fn default() -> Self {
        Self {
            state: FormState::Hidden,
            draft: Draft::default(),
        }
    }
}

impl IncidentDraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_visible(&self) -> bool {
        self.state != FormState::Hidden
    }

    /// Inline error text; empty when there is none.
    pub fn error_message(&self) -> &str {
        match &self.state {
            FormState::Invalid(msg) => msg.as_str(),
            _ => "",
        }
    }

    pub fn open(&mut self) {
        if self.state == FormState::Hidden {
            self.draft = Draft::default();
            self.state = FormState::Editing;
            tracing::debug!("incident form opened");
        }
    }

    pub fn close(&mut self) {
        self.draft = Draft::default();
        self.state = FormState::Hidden;
        tracing::debug!("incident form closed");
    }

    pub fn toggle(&mut self) {
        if self.is_visible() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Ignored while hidden. Does not clear a pending validation error.
    pub fn update_field(&mut self, field: DraftField, value: &str) {
        if !self.is_visible() {
            tracing::debug!(?field, "ignoring edit on hidden incident form");
            return;
        }
        match field {
            DraftField::Title => self.draft.title = value.to_string(),
            DraftField::Description => self.draft.description = value.to_string(),
            DraftField::Severity => self.draft.severity = value.parse().ok(),
        }
    }

    /// Validate the draft and, if complete, append it to `store` stamped with `now`.
    ///
    /// The new id is `store.len() + 1`. Returns the stored incident.
    pub fn submit(
        &mut self,
        store: &mut IncidentStore,
        now: OffsetDateTime,
    ) -> Result<Incident, AppError> {
        if !self.is_visible() {
            return Err(AppError::form_not_open());
        }

        let severity = match self.draft.severity {
            Some(sev) if self.draft.is_complete() => sev,
            _ => {
                tracing::debug!("incident submit rejected: missing fields");
                self.state = FormState::Invalid(REQUIRED_FIELDS_MESSAGE.to_string());
                return Err(AppError::required_fields());
            }
        };

        let draft = std::mem::take(&mut self.draft);
        let incident = Incident {
            id: store.next_id(),
            title: draft.title,
            severity,
            reported_at: now,
            description: draft.description,
        };
        store.append(incident.clone());
        self.state = FormState::Hidden;
        tracing::debug!(id = incident.id, "incident submitted");

        Ok(incident)
    }

    pub fn submit_now(&mut self, store: &mut IncidentStore) -> Result<Incident, AppError> {
        self.submit(store, OffsetDateTime::now_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_draft_defaults_to_low() {
        let mut form = IncidentDraftForm::new();
        assert_eq!(form.state(), &FormState::Hidden);
        form.open();
        assert_eq!(form.state(), &FormState::Editing);
        assert_eq!(form.draft().severity, Some(Severity::Low));
        assert_eq!(form.error_message(), "");
    }

    #[test]
    fn edits_while_hidden_are_ignored() {
        let mut form = IncidentDraftForm::new();
        form.update_field(DraftField::Title, "ghost");
        assert_eq!(form.draft(), &Draft::default());
    }

    #[test]
    fn unknown_severity_label_unsets_the_field() {
        let mut form = IncidentDraftForm::new();
        form.open();
        form.update_field(DraftField::Severity, "Critical");
        assert_eq!(form.draft().severity, Some(Severity::Critical));
        form.update_field(DraftField::Severity, "");
        assert_eq!(form.draft().severity, None);
    }

    #[test]
    fn submit_while_hidden_is_rejected_without_showing_form() {
        let mut form = IncidentDraftForm::new();
        let mut store = IncidentStore::new();
        let err = form.submit_now(&mut store).unwrap_err();
        assert_eq!(err.code, "FORM_NOT_OPEN");
        assert!(!err.is_validation());
        assert!(!form.is_visible());
        assert!(store.is_empty());
    }
}
