//! Workshop Catalog
//!
//! The authoritative in-memory list of workshops plus the enrollment roster.
//! The catalog is an explicit service object constructed once at startup with
//! an injected seed; every mutation goes through it and runs to completion
//! before the next, so no locking discipline applies. Nothing here survives
//! process exit.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::CatalogError;
use crate::workshop::{
    EnrollmentReceipt, EnrollmentRecord, EnrollmentRequest, Workshop, WorkshopDraft,
    WorkshopStatus,
};

/// Category filter for catalog listings. `All` is the sentinel the UI uses
/// when no category is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter from user input. The literal "all" (any casing)
    /// selects everything; anything else is an exact category match.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(trimmed.to_string())
        }
    }
}

/// Aggregate statistics derived from the catalog on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Count of all workshops regardless of status
    pub total: usize,
    pub active: usize,
    pub canceled: usize,
    /// Sum of `capacity - enrolled` over active workshops only
    pub available_seats: u32,
}

/// Owns the workshop list and the enrollment roster.
#[derive(Debug, Default)]
pub struct WorkshopCatalog {
    workshops: Vec<Workshop>,
    roster: Vec<EnrollmentRecord>,
}

impl WorkshopCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an initial set of workshops.
    pub fn with_seed(seed: Vec<Workshop>) -> Self {
        info!(count = seed.len(), "catalog seeded");
        WorkshopCatalog {
            workshops: seed,
            roster: Vec::new(),
        }
    }

    /// All workshops matching the filter, in insertion order.
    pub fn list(&self, filter: &CategoryFilter) -> Vec<&Workshop> {
        match filter {
            CategoryFilter::All => self.workshops.iter().collect(),
            CategoryFilter::Category(category) => self
                .workshops
                .iter()
                .filter(|w| &w.category == category)
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Workshop> {
        self.workshops.iter().find(|w| w.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.workshops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.workshops.len()
    }

    /// Recompute the aggregate statistics from the current list.
    pub fn stats(&self) -> CatalogStats {
        let active = self
            .workshops
            .iter()
            .filter(|w| w.status.is_active())
            .count();
        let canceled = self.workshops.len() - active;
        let available_seats = self
            .workshops
            .iter()
            .filter(|w| w.status.is_active())
            .map(Workshop::available_seats)
            .sum();

        CatalogStats {
            total: self.workshops.len(),
            active,
            canceled,
            available_seats,
        }
    }

    /// Validate the draft and append a new workshop with a fresh id.
    /// New workshops always start with zero enrollments and active status.
    pub fn create(&mut self, draft: WorkshopDraft) -> Result<&Workshop, CatalogError> {
        draft.validate()?;

        let workshop = Workshop {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            location: draft.location,
            category: draft.category,
            // validate() guarantees date and time are present
            date: draft.date.ok_or(CatalogError::Validation {
                reason: crate::errors::ValidationReason::EmptyDate,
            })?,
            time: draft.time.ok_or(CatalogError::Validation {
                reason: crate::errors::ValidationReason::EmptyTime,
            })?,
            capacity: draft.capacity,
            enrolled: 0,
            status: WorkshopStatus::Active,
        };

        info!(id = %workshop.id, title = %workshop.title, "workshop created");
        self.workshops.push(workshop);
        Ok(self.workshops.last().unwrap())
    }

    /// Replace every field of the matching workshop with the draft,
    /// preserving the original id and list position.
    pub fn update(&mut self, id: &str, draft: WorkshopDraft) -> Result<&Workshop, CatalogError> {
        draft.validate()?;

        let workshop = self
            .workshops
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        workshop.title = draft.title;
        workshop.description = draft.description;
        workshop.location = draft.location;
        workshop.category = draft.category;
        if let Some(date) = draft.date {
            workshop.date = date;
        }
        if let Some(time) = draft.time {
            workshop.time = time;
        }
        workshop.capacity = draft.capacity;
        workshop.enrolled = draft.enrolled;

        info!(id = %workshop.id, title = %workshop.title, "workshop updated");
        Ok(workshop)
    }

    /// Flip the workshop's status to canceled. Canceling an already
    /// canceled workshop is a no-op that still succeeds; seat counts are
    /// untouched either way. Unknown ids are an explicit error rather
    /// than the silent no-op of the original UI.
    pub fn cancel(&mut self, id: &str) -> Result<&Workshop, CatalogError> {
        let workshop = self
            .workshops
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        if workshop.status == WorkshopStatus::Canceled {
            debug!(id = %workshop.id, "cancel on already-canceled workshop");
        } else {
            workshop.status = WorkshopStatus::Canceled;
            info!(id = %workshop.id, title = %workshop.title, "workshop canceled");
        }
        Ok(workshop)
    }

    /// Remove the workshop entirely, regardless of status or enrollments.
    /// Returns the removed record.
    pub fn delete(&mut self, id: &str) -> Result<Workshop, CatalogError> {
        let position = self
            .workshops
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        let removed = self.workshops.remove(position);
        info!(id = %removed.id, title = %removed.title, "workshop deleted");
        Ok(removed)
    }

    /// Reserve one seat for the student. Fails without touching the
    /// catalog when the workshop is missing, canceled, or full; on success
    /// the target's enrolled count goes up by exactly one and the student
    /// is appended to the roster.
    pub fn enroll(
        &mut self,
        request: &EnrollmentRequest,
    ) -> Result<EnrollmentReceipt, CatalogError> {
        let workshop = self
            .workshops
            .iter_mut()
            .find(|w| w.id == request.workshop_id)
            .ok_or_else(|| {
                warn!(id = %request.workshop_id, "enrollment into unknown workshop");
                CatalogError::NotFound {
                    id: request.workshop_id.clone(),
                }
            })?;

        if workshop.status == WorkshopStatus::Canceled {
            warn!(id = %workshop.id, "enrollment into canceled workshop rejected");
            return Err(CatalogError::CanceledWorkshop {
                id: workshop.id.clone(),
            });
        }

        if workshop.is_full() {
            warn!(
                id = %workshop.id,
                capacity = workshop.capacity,
                "enrollment into full workshop rejected"
            );
            return Err(CatalogError::CapacityExceeded {
                id: workshop.id.clone(),
                capacity: workshop.capacity,
            });
        }

        workshop.enrolled += 1;
        let receipt = EnrollmentReceipt {
            workshop_id: workshop.id.clone(),
            workshop_title: workshop.title.clone(),
            seats_remaining: workshop.available_seats(),
        };

        info!(
            id = %receipt.workshop_id,
            student = %request.student_name,
            seats_remaining = receipt.seats_remaining,
            "enrollment registered"
        );
        self.roster.push(EnrollmentRecord {
            workshop_id: request.workshop_id.clone(),
            student_name: request.student_name.clone(),
            student_email: request.student_email.clone(),
            registered_at: chrono::Utc::now(),
        });

        Ok(receipt)
    }

    /// Roster entries for one workshop, oldest first.
    pub fn roster(&self, workshop_id: &str) -> Vec<&EnrollmentRecord> {
        self.roster
            .iter()
            .filter(|r| r.workshop_id == workshop_id)
            .collect()
    }
}
