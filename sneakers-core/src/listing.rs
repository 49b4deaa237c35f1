use crate::catalog::{ProductId, ProductRecord};
use crate::error::FetchError;
use crate::favorites::Favorites;
use crate::pagination::{PageRequest, PageResult, Paginator};
use log::{debug, warn};
use std::fmt;

const FETCH_FAILED_MESSAGE: &str = "Failed to fetch sneakers";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Loading,
    Success,
    Error,
}

/// Everything the listing screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingViewState {
    pub status: ListingStatus,
    pub items: Vec<ProductRecord>,
    pub page: usize,
    /// Page the in-flight load asked for; `page` is the last one applied.
    pub loading_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub is_refreshing: bool,
    pub error: Option<String>,
}

impl ListingViewState {
    pub fn new() -> Self {
        Self {
            status: ListingStatus::Loading,
            items: Vec::new(),
            page: 1,
            loading_page: 1,
            total_pages: 0,
            total_items: 0,
            is_refreshing: false,
            error: None,
        }
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// A blocking spinner replaces the whole list only for a first-page load
    /// that is not a pull-to-refresh.
    pub fn show_full_screen_loader(&self) -> bool {
        self.status == ListingStatus::Loading && self.loading_page == 1 && !self.is_refreshing
    }

    /// Loading a later page keeps the screen and spins in the footer.
    pub fn show_footer_loader(&self) -> bool {
        self.status == ListingStatus::Loading && self.loading_page > 1
    }

    /// With nothing left to show, an error takes the whole screen.
    pub fn show_full_screen_error(&self) -> bool {
        self.status == ListingStatus::Error && self.items.is_empty()
    }
}

impl Default for ListingViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies one started load. Only the most recently issued ticket may
/// change the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    page: PageRequest,
}

impl LoadTicket {
    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer load was started before this one finished; result dropped.
    Stale,
}

/// Owns the listing state and drives it from paginator results.
///
/// Event-loop frontends call one of the `begin_*` methods, run
/// [`fetch_page`] off the UI thread and hand the result back to
/// [`ListingController::apply`]. Sequential callers use the async
/// `load_page` / `refresh` / `change_page` wrappers.
#[derive(Debug)]
pub struct ListingController {
    paginator: Paginator,
    state: ListingViewState,
    favorites: Favorites,
    latest_seq: u64,
}

impl ListingController {
    pub fn new(paginator: Paginator) -> Self {
        Self {
            paginator,
            state: ListingViewState::new(),
            favorites: Favorites::new(),
            latest_seq: 0,
        }
    }

    pub fn state(&self) -> &ListingViewState {
        &self.state
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn begin_load(&mut self, page: PageRequest) -> LoadTicket {
        self.latest_seq += 1;
        self.state.status = ListingStatus::Loading;
        self.state.loading_page = page.page_number();
        debug!(
            "listing load #{} started for page {}",
            self.latest_seq,
            page.page_number()
        );
        LoadTicket {
            seq: self.latest_seq,
            page,
        }
    }

    /// Reload page 1 behind a non-blocking refresh indicator.
    pub fn begin_refresh(&mut self) -> LoadTicket {
        self.state.is_refreshing = true;
        self.begin_load(PageRequest::first())
    }

    /// Switch pages. The previous page's items are dropped immediately.
    pub fn begin_change_page(&mut self, page: PageRequest) -> LoadTicket {
        self.state.items.clear();
        self.begin_load(page)
    }

    pub fn apply<E: fmt::Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<PageResult<ProductRecord>, E>,
    ) -> ApplyOutcome {
        if ticket.seq != self.latest_seq {
            debug!(
                "dropping result of load #{} (latest is #{})",
                ticket.seq, self.latest_seq
            );
            return ApplyOutcome::Stale;
        }

        self.state.is_refreshing = false;
        match result {
            Ok(page) => {
                self.state.items = page.items;
                self.state.page = page.current_page;
                self.state.total_pages = page.total_pages;
                self.state.total_items = page.total_items;
                self.state.status = ListingStatus::Success;
                self.state.error = None;
            }
            Err(e) => {
                warn!("listing load #{} failed: {}", ticket.seq, e);
                // Items still on screen stay there.
                self.state.status = ListingStatus::Error;
                self.state.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        ApplyOutcome::Applied
    }

    pub async fn load_page(&mut self, page: PageRequest) -> ApplyOutcome {
        let ticket = self.begin_load(page);
        let result = fetch_page(self.paginator.clone(), ticket).await;
        self.apply(ticket, result)
    }

    pub async fn refresh(&mut self) -> ApplyOutcome {
        let ticket = self.begin_refresh();
        let result = fetch_page(self.paginator.clone(), ticket).await;
        self.apply(ticket, result)
    }

    pub async fn change_page(&mut self, page: PageRequest) -> ApplyOutcome {
        let ticket = self.begin_change_page(page);
        let result = fetch_page(self.paginator.clone(), ticket).await;
        self.apply(ticket, result)
    }

    /// Retry after an error; same as a refresh.
    pub async fn retry(&mut self) -> ApplyOutcome {
        self.refresh().await
    }

    pub fn toggle_favorite(&mut self, id: &ProductId) -> bool {
        self.favorites.toggle(id)
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }
}

/// Run the fetch for `ticket`. Owns its inputs so it can be moved into a
/// spawned task.
pub async fn fetch_page(
    paginator: Paginator,
    ticket: LoadTicket,
) -> Result<PageResult<ProductRecord>, FetchError> {
    paginator.get_page(ticket.page()).await
}
