use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::error::FormErrors;
use crate::forms::ALL_OPTION;
use crate::models::{FilterPatch, KioskStatus, KioskType, QueryParams};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filter panel input. Submitting it replaces every filter it covers; the
/// keyword box is handled separately.
#[derive(Clone, PartialEq, Debug, Default, Deserialize, Validate)]
pub struct KioskFilterForm {
    /// `YYYY-MM-DD` or empty.
    pub start_date: String,
    /// `YYYY-MM-DD` or empty.
    pub end_date: String,
    /// Status code, `all` or empty.
    pub status: String,
    /// Type code, `all` or empty.
    pub kiosk_type: String,
    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: String,
    #[validate(length(max = 100, message = "Search must be at most 100 characters"))]
    pub search: String,
}

impl KioskFilterForm {
    /// Prefills the panel from the active query.
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            start_date: format_date(params.start_date),
            end_date: format_date(params.end_date),
            status: params
                .status_filter
                .map(|s| s.as_str().to_string())
                .unwrap_or_else(|| ALL_OPTION.to_string()),
            kiosk_type: if params.type_filter.is_empty() {
                ALL_OPTION.to_string()
            } else {
                params.type_filter.clone()
            },
            location: params.location_filter.clone().unwrap_or_default(),
            search: params.search.clone(),
        }
    }

    /// Validates the input against `today` and turns it into a patch for
    /// the list store.
    pub fn to_patch(&self, today: NaiveDate) -> Result<FilterPatch, FormErrors> {
        let trimmed = self.trimmed();
        let mut errors = FormErrors::new();
        if let Err(e) = trimmed.validate() {
            errors.extend_from(&e);
        }

        let start_date = parse_date("start_date", &trimmed.start_date, today, &mut errors);
        let end_date = parse_date("end_date", &trimmed.end_date, today, &mut errors);
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                errors.add("end_date", "End date must not be before the start date");
            }
        }

        let status_filter = if is_unrestricted(&trimmed.status) {
            None
        } else {
            match trimmed.status.parse::<KioskStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    errors.add("status", "Unknown status");
                    None
                }
            }
        };

        let type_filter = if is_unrestricted(&trimmed.kiosk_type) {
            String::new()
        } else {
            match trimmed.kiosk_type.parse::<KioskType>() {
                Ok(kiosk_type) => kiosk_type.code().to_string(),
                Err(_) => {
                    errors.add("kiosk_type", "Unknown kiosk type");
                    String::new()
                }
            }
        };

        errors.into_result()?;

        let location = (!trimmed.location.is_empty()).then_some(trimmed.location);
        Ok(FilterPatch {
            keyword: None,
            type_filter: Some(type_filter),
            search: Some(trimmed.search),
            start_date: Some(start_date),
            end_date: Some(end_date),
            status_filter: Some(status_filter),
            location_filter: Some(location),
        })
    }

    fn trimmed(&self) -> Self {
        Self {
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            status: self.status.trim().to_string(),
            kiosk_type: self.kiosk_type.trim().to_string(),
            location: self.location.trim().to_string(),
            search: self.search.trim().to_string(),
        }
    }
}

fn is_unrestricted(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(ALL_OPTION)
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date(
    field: &str,
    raw: &str,
    today: NaiveDate,
    errors: &mut FormErrors,
) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) if date > today => {
            errors.add(field, "Date cannot be in the future");
            None
        }
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, "Use the YYYY-MM-DD format");
            None
        }
    }
}
