use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{Incident, Severity};
use crate::error::AppError;
use crate::normalize::dates::parse_date_bound;

/// Number of incident cards shown per page.
pub const PAGE_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    pub fn matches(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(wanted) => wanted == severity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::Only(sev) => sev.as_str(),
        }
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(SeverityFilter::All);
        }
        s.parse::<Severity>().map(SeverityFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::Oldest => "Oldest",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Newest" => Ok(SortOrder::Newest),
            "Oldest" => Ok(SortOrder::Oldest),
            other => Err(AppError::unknown_sort_order(other)),
        }
    }
}

/// User-controlled list parameters.
///
/// Dates are kept exactly as typed into the date pickers; they are parsed on every pipeline
/// run and anything unparseable counts as "no bound".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewState {
    pub severity_filter: SeverityFilter,
    pub search_query: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_order: SortOrder,
    /// 1-based.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            severity_filter: SeverityFilter::All,
            search_query: String::new(),
            start_date: None,
            end_date: None,
            sort_order: SortOrder::Newest,
            current_page: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisiblePage {
    pub page: Vec<Incident>,
    pub total_pages: usize,
    pub current_page: usize,
    pub filtered_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl VisiblePage {
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

pub fn total_pages(filtered_count: usize) -> usize {
    filtered_count.div_ceil(PAGE_SIZE).max(1)
}

fn matches_search(incident: &Incident, query_lower: &str) -> bool {
    query_lower.is_empty() || incident.title.to_lowercase().contains(query_lower)
}

fn within_range(
    incident: &Incident,
    start: Option<OffsetDateTime>,
    end: Option<OffsetDateTime>,
) -> bool {
    start.map_or(true, |s| incident.reported_at >= s)
        && end.map_or(true, |e| incident.reported_at <= e)
}

/// Severity, search and date-range filters, in that order, preserving input order.
pub fn filter_incidents<'a>(records: &'a [Incident], view: &ViewState) -> Vec<&'a Incident> {
    let query_lower = view.search_query.to_lowercase();
    let start = view.start_date.as_deref().and_then(parse_date_bound);
    let end = view.end_date.as_deref().and_then(parse_date_bound);

    records
        .iter()
        .filter(|inc| view.severity_filter.matches(inc.severity))
        .filter(|inc| matches_search(inc, &query_lower))
        .filter(|inc| within_range(inc, start, end))
        .collect()
}

/// Stable sort on `reported_at`; equal timestamps keep their filtered order.
pub fn sort_incidents(incidents: &mut [&Incident], order: SortOrder) {
    match order {
        SortOrder::Newest => incidents.sort_by(|a, b| b.reported_at.cmp(&a.reported_at)),
        SortOrder::Oldest => incidents.sort_by(|a, b| a.reported_at.cmp(&b.reported_at)),
    }
}

/// Filter, sort and paginate `records` for display.
///
/// Pure: the same inputs always produce the same page. `view.current_page` is not clamped;
/// a page past the end comes back empty and it is up to the caller to move back.
pub fn compute_visible_page(records: &[Incident], view: &ViewState) -> VisiblePage {
    let mut filtered = filter_incidents(records, view);
    sort_incidents(&mut filtered, view.sort_order);

    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count);
    let current_page = view.current_page.max(1);

    let start = (current_page - 1).saturating_mul(PAGE_SIZE);
    let page = filtered
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    VisiblePage {
        page,
        total_pages,
        current_page,
        filtered_count,
        has_prev: current_page > 1,
        has_next: current_page < total_pages,
    }
}
