//! Pay computation for time entries.
//!
//! Both the per-employee summary and the admin salary report go through
//! [`calculate`], so the rate rule lives in exactly one place.

use serde::{Deserialize, Serialize};

use crate::db::entities::{time_entry, user};

/// Description substrings that mark travel work. Matched case-insensitively
/// anywhere in the text.
pub const DELEGATION_MARKERS: [&str; 2] = ["delegacja", "delegację"];

pub fn is_delegation(description: Option<&str>) -> bool {
    let Some(description) = description else {
        return false;
    };
    let folded = description.to_lowercase();
    DELEGATION_MARKERS
        .iter()
        .any(|marker| folded.contains(marker))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConfig {
    pub hourly_rate: f64,
    /// Zero means "not configured": flagged entries pay the standard rate.
    pub hourly_rate_delegation: f64,
}

impl RateConfig {
    pub fn applicable_rate(&self, delegation: bool) -> f64 {
        if delegation && self.hourly_rate_delegation > 0.0 {
            self.hourly_rate_delegation
        } else {
            self.hourly_rate
        }
    }
}

impl From<&user::Model> for RateConfig {
    fn from(user: &user::Model) -> Self {
        Self {
            hourly_rate: user.hourly_rate,
            hourly_rate_delegation: user.hourly_rate_delegation,
        }
    }
}

pub trait BillableEntry {
    fn hours(&self) -> f64;
    fn description(&self) -> Option<&str>;
}

impl BillableEntry for time_entry::Model {
    fn hours(&self) -> f64 {
        self.hours
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryInput {
    pub hours: f64,
    pub description: Option<String>,
}

impl BillableEntry for EntryInput {
    fn hours(&self) -> f64 {
        self.hours
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct SalaryTotals {
    pub total_hours: f64,
    /// Hours billed as delegation work, after the zero-rate fallback.
    pub delegation_hours: f64,
    pub total_salary: f64,
}

pub fn calculate<E: BillableEntry>(rates: &RateConfig, entries: &[E]) -> SalaryTotals {
    entries
        .iter()
        .fold(SalaryTotals::default(), |mut totals, entry| {
            let hours = entry.hours();
            let delegation = is_delegation(entry.description());
            totals.total_hours += hours;
            totals.total_salary += hours * rates.applicable_rate(delegation);
            if delegation && rates.hourly_rate_delegation > 0.0 {
                totals.delegation_hours += hours;
            }
            totals
        })
}

/// Plain-data form of a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryInput {
    pub hourly_rate: f64,
    #[serde(default)]
    pub hourly_rate_delegation: f64,
    pub entries: Vec<EntryInput>,
}

impl SalaryInput {
    pub fn compute(&self) -> SalaryTotals {
        let rates = RateConfig {
            hourly_rate: self.hourly_rate,
            hourly_rate_delegation: self.hourly_rate_delegation,
        };
        calculate(&rates, &self.entries)
    }
}
