use time::OffsetDateTime;

use crate::demo::seed_store;
use crate::domain::Incident;
use crate::error::AppError;
use crate::form::{DraftField, IncidentDraftForm};
use crate::store::IncidentStore;
use crate::view::{compute_visible_page, SeverityFilter, SortOrder, ViewState, VisiblePage};

/// One dashboard session: the only owner of the incident list, the list controls and the
/// entry form. Each method corresponds to a single UI event.
///
/// Filter and sort changes pull `current_page` back inside `1..=total_pages`, so narrowing a
/// search never strands the user on an empty page.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    store: IncidentStore,
    view: ViewState,
    form: IncidentDraftForm,
}

impl Dashboard {
    pub fn new(store: IncidentStore) -> Self {
        Self {
            store,
            view: ViewState::default(),
            form: IncidentDraftForm::new(),
        }
    }

    pub fn with_demo_seed() -> Result<Self, AppError> {
        Ok(Self::new(seed_store()?))
    }

    pub fn store(&self) -> &IncidentStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn form(&self) -> &IncidentDraftForm {
        &self.form
    }

    pub fn visible_page(&self) -> VisiblePage {
        compute_visible_page(self.store.all(), &self.view)
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.view.search_query = query.to_string();
        self.clamp_page();
    }

    pub fn set_severity_filter(&mut self, filter: SeverityFilter) {
        self.view.severity_filter = filter;
        self.clamp_page();
    }

    /// Raw date-picker values; empty strings clear a bound.
    pub fn set_date_range(&mut self, start: &str, end: &str) {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        self.view.start_date = non_empty(start);
        self.view.end_date = non_empty(end);
        self.clamp_page();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.view.sort_order = order;
        self.clamp_page();
    }

    pub fn toggle_sort_order(&mut self) {
        self.set_sort_order(self.view.sort_order.toggled());
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.view.current_page = page.max(1);
    }

    /// No-op on the last page.
    pub fn next_page(&mut self) {
        if self.visible_page().has_next {
            self.view.current_page += 1;
        }
    }

    /// No-op on the first page.
    pub fn prev_page(&mut self) {
        if self.view.current_page > 1 {
            self.view.current_page -= 1;
        }
    }

    pub fn open_form(&mut self) {
        self.form.open();
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    pub fn toggle_form(&mut self) {
        self.form.toggle();
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: &str) {
        self.form.update_field(field, value);
    }

    pub fn submit_form(&mut self, now: OffsetDateTime) -> Result<Incident, AppError> {
        let incident = self.form.submit(&mut self.store, now)?;
        self.clamp_page();
        Ok(incident)
    }

    fn clamp_page(&mut self) {
        let total = self.visible_page().total_pages;
        self.view.current_page = self.view.current_page.clamp(1, total);
    }
}
