//! Console session buffers.
//!
//! The admin console works through two scratch buffers: the editor buffer
//! (one workshop-shaped form used for both creation and editing) and the
//! enrollment form. Neither has identity beyond the current session; the
//! catalog is the only durable-in-process state.

use std::fmt;
use tracing::debug;

use crate::catalog::WorkshopCatalog;
use crate::errors::CatalogError;
use crate::workshop::{EnrollmentReceipt, EnrollmentRequest, Workshop, WorkshopDraft};

/// What a successful editor submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: String },
    Updated { id: String },
}

impl SubmitOutcome {
    pub fn id(&self) -> &str {
        match self {
            SubmitOutcome::Created { id } | SubmitOutcome::Updated { id } => id,
        }
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitOutcome::Created { .. } => write!(f, "Workshop created and published."),
            SubmitOutcome::Updated { .. } => write!(f, "Workshop updated successfully."),
        }
    }
}

/// Form buffer mirroring one workshop, shared by the create and edit paths.
/// While `editing` holds an id, submission updates that workshop; otherwise
/// it creates a new one.
#[derive(Debug, Default)]
pub struct EditorBuffer {
    pub draft: WorkshopDraft,
    editing: Option<String>,
}

impl EditorBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an existing workshop into the form for editing.
    pub fn begin_edit(&mut self, workshop: &Workshop) {
        debug!(id = %workshop.id, "editor buffer loaded for edit");
        self.draft = WorkshopDraft::from_workshop(workshop);
        self.editing = Some(workshop.id.clone());
    }

    /// The id of the workshop being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Reset the form to the empty template and drop the edit target.
    pub fn clear(&mut self) {
        self.draft = WorkshopDraft::default();
        self.editing = None;
    }

    /// If the given workshop was being edited, reset the form. Called
    /// after a deletion so the buffer never points at a removed record.
    pub fn forget_deleted(&mut self, id: &str) {
        if self.editing.as_deref() == Some(id) {
            debug!(id, "edit target deleted, clearing editor buffer");
            self.clear();
        }
    }

    /// Submit the form against the catalog. Creates or updates depending
    /// on whether an edit target is active. On success the buffer resets
    /// to the empty template; on failure it is left intact so the user
    /// can correct the fields.
    pub fn submit(
        &mut self,
        catalog: &mut WorkshopCatalog,
    ) -> Result<SubmitOutcome, CatalogError> {
        let outcome = match self.editing.clone() {
            Some(id) => {
                catalog.update(&id, self.draft.clone())?;
                SubmitOutcome::Updated { id }
            }
            None => {
                let created = catalog.create(self.draft.clone())?;
                SubmitOutcome::Created {
                    id: created.id.clone(),
                }
            }
        };

        self.clear();
        Ok(outcome)
    }
}

/// Enrollment form buffer. A successful submission clears only the student
/// fields; the workshop selection is retained for back-to-back sign-ups.
#[derive(Debug, Default)]
pub struct EnrollmentForm {
    pub workshop_id: String,
    pub student_name: String,
    pub student_email: String,
}

impl EnrollmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-select a workshop, as the UI does with the first catalog entry.
    pub fn with_selection(workshop_id: impl Into<String>) -> Self {
        EnrollmentForm {
            workshop_id: workshop_id.into(),
            ..Self::default()
        }
    }

    pub fn submit(
        &mut self,
        catalog: &mut WorkshopCatalog,
    ) -> Result<EnrollmentReceipt, CatalogError> {
        let request = EnrollmentRequest {
            workshop_id: self.workshop_id.clone(),
            student_name: self.student_name.clone(),
            student_email: self.student_email.clone(),
        };
        let receipt = catalog.enroll(&request)?;

        self.student_name.clear();
        self.student_email.clear();
        Ok(receipt)
    }
}
