// src/domain/view_state.rs
//
// Browse state for one listing screen: filters, view mode, current
// page, scroll offset, filter-panel visibility. The state is restored
// on mount with a fixed precedence per field — transient navigation
// state first, then the session-scoped store (view mode and page only),
// then hard defaults — and view mode and page are written through to
// the store on every change so a plain reload within the session
// resumes where the visitor left off.

use crate::domain::pagination::PageSlice;
use crate::state_store::StateStore;

/// Grid of small cards vs. stacked wide cards. The mode also decides the
/// page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Tile,
    List,
}

impl ViewMode {
    pub fn page_size(self) -> usize {
        match self {
            ViewMode::Tile => 60,
            ViewMode::List => 20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Tile => "tile",
            ViewMode::List => "list",
        }
    }

    /// Lenient parse for query params and stored values; anything
    /// unrecognized is treated as absent.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tile" => Some(ViewMode::Tile),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

/// The bundle captured when the visitor follows a card to a detail page,
/// echoed back verbatim by the detail page's back action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot<F> {
    pub filters: F,
    pub view_mode: ViewMode,
    pub current_page: usize,
    pub scroll_position: u32,
    pub filter_panel_open: bool,
}

/// Per-field incoming state for a mount. Each field is independently
/// optional: a search handoff may carry only filters, a back navigation
/// carries everything.
#[derive(Debug, Clone, Default)]
pub struct MountState<F> {
    pub filters: Option<F>,
    pub view_mode: Option<ViewMode>,
    pub current_page: Option<usize>,
    pub scroll_position: Option<u32>,
    pub filter_panel_open: Option<bool>,
}

impl<F> From<NavigationSnapshot<F>> for MountState<F> {
    fn from(snap: NavigationSnapshot<F>) -> Self {
        Self {
            filters: Some(snap.filters),
            view_mode: Some(snap.view_mode),
            current_page: Some(snap.current_page),
            scroll_position: Some(snap.scroll_position),
            filter_panel_open: Some(snap.filter_panel_open),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScreenState<F> {
    /// Key prefix for the session store ("properties", "projects").
    screen: &'static str,
    pub filters: F,
    pub view_mode: ViewMode,
    pub current_page: usize,
    pub scroll_position: u32,
    pub filter_panel_open: bool,
}

impl<F: Clone + Default> ScreenState<F> {
    /// Restore state for a screen mount.
    ///
    /// Precedence per field: the transient mount state, then the session
    /// store (view mode and current page only — filters and scroll never
    /// outlive the navigation that carried them), then defaults. The
    /// resolved view mode and page are written back so the store always
    /// reflects the state the visitor actually sees.
    pub fn mount(screen: &'static str, incoming: MountState<F>, store: &dyn StateStore) -> Self {
        let view_mode = incoming
            .view_mode
            .or_else(|| store.get(&key(screen, "view-mode")).as_deref().and_then(ViewMode::parse))
            .unwrap_or_default();

        let current_page = incoming
            .current_page
            .or_else(|| stored_page(store, screen))
            .filter(|&p| p >= 1)
            .unwrap_or(1);

        let state = Self {
            screen,
            filters: incoming.filters.unwrap_or_default(),
            view_mode,
            current_page,
            scroll_position: incoming.scroll_position.unwrap_or(0),
            filter_panel_open: incoming.filter_panel_open.unwrap_or(false),
        };
        state.persist(store);
        state
    }

    /// Switching view mode changes the page size, so the page resets
    /// to 1.
    pub fn set_view_mode(&mut self, mode: ViewMode, store: &dyn StateStore) {
        if mode != self.view_mode {
            self.view_mode = mode;
            self.current_page = 1;
        }
        self.persist(store);
    }

    /// Page-jump request. Out-of-range targets are a silent no-op.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize, store: &dyn StateStore) {
        if page >= 1 && page <= total_pages {
            self.current_page = page;
            self.persist(store);
        }
    }

    /// Any filter change restarts browsing from page 1.
    pub fn set_filters(&mut self, filters: F, store: &dyn StateStore) {
        self.filters = filters;
        self.current_page = 1;
        self.persist(store);
    }

    /// Derive the visible slice for the current page, reconciling the
    /// page against the filtered length: if the filtered set shrank
    /// below the current page, the state snaps back to page 1 and the
    /// correction is persisted.
    pub fn paginate(&mut self, filtered_len: usize, store: &dyn StateStore) -> PageSlice {
        let slice = PageSlice::derive(filtered_len, self.current_page, self.view_mode.page_size());
        if slice.current_page != self.current_page {
            self.current_page = slice.current_page;
            self.persist(store);
        }
        slice
    }

    /// Capture the bundle attached to a detail navigation.
    pub fn snapshot(&self) -> NavigationSnapshot<F> {
        NavigationSnapshot {
            filters: self.filters.clone(),
            view_mode: self.view_mode,
            current_page: self.current_page,
            scroll_position: self.scroll_position,
            filter_panel_open: self.filter_panel_open,
        }
    }

    fn persist(&self, store: &dyn StateStore) {
        store.set(&key(self.screen, "view-mode"), self.view_mode.as_str());
        store.set(
            &key(self.screen, "current-page"),
            &self.current_page.to_string(),
        );
    }
}

fn key(screen: &str, field: &str) -> String {
    format!("{screen}-{field}")
}

/// Stored pages are plain stringified integers; anything malformed (or a
/// stored 0) fails soft to "nothing stored".
fn stored_page(store: &dyn StateStore, screen: &str) -> Option<usize> {
    store
        .get(&key(screen, "current-page"))?
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&p| p >= 1)
}
