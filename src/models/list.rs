use serde::{Deserialize, Deserializer};

use crate::models::kiosk::Kiosk;

/// Number of pages needed for `total` rows at `page_size` rows per page.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total.div_ceil(page_size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One fetched page. Each successful fetch replaces the previous snapshot
/// as a whole.
#[derive(Clone, PartialEq, Debug)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_count: u32,
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_count: 0,
        }
    }
}

impl<T> ListResult<T> {
    /// Builds a snapshot, deriving `page_count` from the row total.
    pub fn new(items: Vec<T>, total_count: u64, page_size: u32) -> Self {
        Self {
            items,
            total_count,
            page_count: page_count(total_count, page_size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page numbers for a pagination control around `current`. `None` marks
    /// a gap. Two pages are kept at each edge, two before and four after
    /// the current one.
    pub fn page_window(&self, current: u32) -> Vec<Option<u32>> {
        page_window(self.page_count, current, 2, 2, 4, 2)
    }
}

fn page_window(
    total_pages: u32,
    current_page: u32,
    left_edge: u32,
    left_current: u32,
    right_current: u32,
    right_edge: u32,
) -> Vec<Option<u32>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let current_page = current_page.clamp(1, last_page);
    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Raw body of `GET kiosk`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct KioskListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list_data: Vec<Kiosk>,
    #[serde(default)]
    pub list_total: ListTotal,
}

impl KioskListResponse {
    pub fn into_result(self, page_size: u32) -> Result<ListResult<Kiosk>, String> {
        let total = self.list_total.value()?;
        Ok(ListResult::new(self.list_data, total, page_size))
    }
}

/// `listTotal` arrives either as a number or as a numeric string.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ListTotal {
    Number(u64),
    Text(String),
}

impl Default for ListTotal {
    fn default() -> Self {
        ListTotal::Number(0)
    }
}

impl ListTotal {
    pub fn value(&self) -> Result<u64, String> {
        match self {
            ListTotal::Number(n) => Ok(*n),
            ListTotal::Text(text) if text.trim().is_empty() => Ok(0),
            ListTotal::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| format!("listTotal is not a number: {:?}", text)),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
