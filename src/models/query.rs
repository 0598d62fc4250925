// ============================================================================
// QUERY PARAMS - page / sort / filter state driving the kiosk list fetch
// ============================================================================

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::models::kiosk::KioskStatus;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current list query. The list store owns one of these and changes it only
/// through the transition methods below.
#[derive(Clone, PartialEq, Debug)]
pub struct QueryParams {
    pub page: u32,
    pub page_size: u32,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub keyword: String,
    /// Sent as `kioskTp`
    pub type_filter: String,
    pub search: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status_filter: Option<KioskStatus>,
    pub location_filter: Option<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::new(
            CONFIG.list_config.default_page_size,
            &CONFIG.list_config.default_sort_by,
        )
    }
}

/// Partial filter update. `None` leaves a field alone; for the optional
/// fields `Some(None)` clears it.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterPatch {
    pub keyword: Option<String>,
    pub type_filter: Option<String>,
    pub search: Option<String>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub status_filter: Option<Option<KioskStatus>>,
    pub location_filter: Option<Option<String>>,
}

impl FilterPatch {
    /// Patch that resets every filter field.
    pub fn cleared() -> Self {
        Self {
            keyword: Some(String::new()),
            type_filter: Some(String::new()),
            search: Some(String::new()),
            start_date: Some(None),
            end_date: Some(None),
            status_filter: Some(None),
            location_filter: Some(None),
        }
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        Self {
            keyword: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn search(value: impl Into<String>) -> Self {
        Self {
            search: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl QueryParams {
    pub fn new(page_size: u32, sort_by: &str) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            sort_by: sort_by.to_string(),
            sort_order: SortOrder::Asc,
            keyword: String::new(),
            type_filter: String::new(),
            search: String::new(),
            start_date: None,
            end_date: None,
            status_filter: None,
            location_filter: None,
        }
    }

    /// Moves to page `n` (1-based). Filters are untouched.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Changes ordering; the page stays where it is.
    pub fn set_sort(&mut self, sort_by: &str, order: SortOrder) {
        self.sort_by = sort_by.to_string();
        self.sort_order = order;
    }

    /// Merges `patch` and goes back to the first page.
    pub fn apply_filter(&mut self, patch: FilterPatch) {
        if let Some(keyword) = patch.keyword {
            self.keyword = keyword;
        }
        if let Some(type_filter) = patch.type_filter {
            self.type_filter = type_filter;
        }
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(status) = patch.status_filter {
            self.status_filter = status;
        }
        if let Some(location) = patch.location_filter {
            self.location_filter = location.filter(|l| !l.is_empty());
        }
        self.page = 1;
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// True when the filter fields (not paging or sorting) are equal.
    pub fn same_filters(&self, other: &QueryParams) -> bool {
        self.keyword == other.keyword
            && self.type_filter == other.type_filter
            && self.search == other.search
            && self.start_date == other.start_date
            && self.end_date == other.end_date
            && self.status_filter == other.status_filter
            && self.location_filter == other.location_filter
    }

    /// Query parameters in wire order; unset and empty values are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("pageRowNum", self.page_size.to_string()),
        ];

        let mut push = |key: &'static str, value: &str| {
            if !value.is_empty() {
                pairs.push((key, value.to_string()));
            }
        };

        push("sortBy", &self.sort_by);
        push("sortOrder", self.sort_order.as_str());
        push("keyword", &self.keyword);
        push("kioskTp", &self.type_filter);
        if let Some(status) = self.status_filter {
            push("status", status.as_str());
        }
        if let Some(location) = &self.location_filter {
            push("location", location);
        }
        push("search", &self.search);
        if let Some(start) = self.start_date {
            push("startDate", &start.format("%Y-%m-%d").to_string());
        }
        if let Some(end) = self.end_date {
            push("endDate", &end.format("%Y-%m-%d").to_string());
        }

        pairs
    }

    /// URL-encoded query string (without the leading `?`).
    pub fn query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}
