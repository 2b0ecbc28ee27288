//! Workshop Data Model
//!
//! Core record types for the workshop catalog: the workshop itself, its
//! lifecycle status, the editor draft buffer, and enrollment payloads.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CatalogError, ValidationReason};

/// Lifecycle states of a workshop. Canceled is terminal - there is no
/// operation that flips a workshop back to active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkshopStatus {
    Active,
    Canceled,
}

impl WorkshopStatus {
    pub fn is_active(self) -> bool {
        matches!(self, WorkshopStatus::Active)
    }
}

impl fmt::Display for WorkshopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkshopStatus::Active => "active",
            WorkshopStatus::Canceled => "canceled",
        };
        write!(f, "{}", label)
    }
}

/// One offered session in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workshop {
    /// Opaque unique identifier, assigned at creation, immutable thereafter
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Maximum seats, always >= 1
    pub capacity: u32,
    /// Current seat count, `enrolled <= capacity` holds after every mutation
    pub enrolled: u32,
    pub status: WorkshopStatus,
}

impl Workshop {
    /// Seats still open for enrollment
    pub fn available_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled)
    }

    pub fn is_full(&self) -> bool {
        self.enrolled >= self.capacity
    }
}

/// Editor form buffer: a candidate workshop without identity or status.
/// `date`/`time` are optional so an untouched form is distinguishable from
/// a filled one during validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkshopDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub capacity: u32,
    pub enrolled: u32,
}

impl WorkshopDraft {
    /// Populate the draft from an existing workshop, for editing.
    pub fn from_workshop(workshop: &Workshop) -> Self {
        WorkshopDraft {
            title: workshop.title.clone(),
            description: workshop.description.clone(),
            location: workshop.location.clone(),
            category: workshop.category.clone(),
            date: Some(workshop.date),
            time: Some(workshop.time),
            capacity: workshop.capacity,
            enrolled: workshop.enrolled,
        }
    }

    /// Check the required fields. Title, date and time must be present;
    /// capacity must be at least 1 and never below the enrolled count.
    /// Category, location and description are intentionally unchecked.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let reason = if self.title.trim().is_empty() {
            Some(ValidationReason::EmptyTitle)
        } else if self.date.is_none() {
            Some(ValidationReason::EmptyDate)
        } else if self.time.is_none() {
            Some(ValidationReason::EmptyTime)
        } else if self.capacity == 0 {
            Some(ValidationReason::ZeroCapacity)
        } else if self.enrolled > self.capacity {
            Some(ValidationReason::EnrolledExceedsCapacity {
                enrolled: self.enrolled,
                capacity: self.capacity,
            })
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CatalogError::Validation { reason }),
            None => Ok(()),
        }
    }
}

/// A request to reserve one seat in a workshop for a named student.
/// Name and email are accepted as-is; the source system never validated
/// their format or uniqueness and neither do we.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    pub workshop_id: String,
    pub student_name: String,
    pub student_email: String,
}

/// Roster entry kept by the catalog for every successful enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub workshop_id: String,
    pub student_name: String,
    pub student_email: String,
    pub registered_at: DateTime<Utc>,
}

/// Confirmation returned to the caller after a seat is reserved.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentReceipt {
    pub workshop_id: String,
    pub workshop_title: String,
    pub seats_remaining: u32,
}
