//! Navigation bar state
//!
//! Tracks the active route, the mobile menu, and whether the page has been
//! scrolled far enough to dim the bar. Route switching itself belongs to the
//! host: selecting an item only produces a [`NavRequest`].

use std::fmt;
use std::str::FromStr;

use edupilot_core::{CyclerError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::disclosure::Disclosure;

/// Scroll offset past which the bar switches to its translucent style
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = 50.0;

/// Top-level site sections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    Courses,
    LiveClasses,
    AiHub,
    Contact,
    About,
}

impl Route {
    /// Every route in menu order
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Courses,
        Route::LiveClasses,
        Route::AiHub,
        Route::Contact,
        Route::About,
    ];

    /// Stable identifier
    pub fn id(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Courses => "courses",
            Route::LiveClasses => "live-classes",
            Route::AiHub => "ai-hub",
            Route::Contact => "contact",
            Route::About => "about",
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Courses => "Courses",
            Route::LiveClasses => "Live Classes",
            Route::AiHub => "AI Hub",
            Route::Contact => "Contact Us",
            Route::About => "About Us",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Route {
    type Err = CyclerError;

    fn from_str(s: &str) -> Result<Self> {
        Route::ALL
            .into_iter()
            .find(|route| route.id() == s)
            .ok_or_else(|| CyclerError::UnknownRoute(s.to_string()))
    }
}

/// What the host should do after a navigation interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRequest {
    Navigate(Route),
    Logout,
}

/// A menu entry as rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub active: bool,
}

/// Navigation bar interaction state
#[derive(Clone, Debug)]
pub struct NavBar {
    active: Route,
    mobile_menu: Disclosure,
    scrolled: bool,
    threshold_px: f32,
}

impl NavBar {
    pub fn new(active: Route, threshold_px: f32) -> Result<Self> {
        if !threshold_px.is_finite() || threshold_px < 0.0 {
            return Err(CyclerError::config(
                "scroll_threshold_px",
                format!("must be a non-negative finite number, got {threshold_px}"),
            ));
        }

        Ok(Self {
            active,
            mobile_menu: Disclosure::default(),
            scrolled: false,
            threshold_px,
        })
    }

    /// Menu entries with the active one marked
    pub fn items(&self) -> impl Iterator<Item = NavItem> + '_ {
        Route::ALL.into_iter().map(move |route| NavItem {
            route,
            label: route.label(),
            active: route == self.active,
        })
    }

    /// Pick a route from the bar or the mobile menu
    ///
    /// Always closes the mobile menu.
    pub fn select(&mut self, route: Route) -> NavRequest {
        self.mobile_menu.close();
        if self.active != route {
            debug!(from = %self.active, to = %route, "navigation selected");
        }
        self.active = route;
        NavRequest::Navigate(route)
    }

    /// Pick a route by id
    pub fn select_id(&mut self, id: &str) -> Result<NavRequest> {
        let route = id.parse()?;
        Ok(self.select(route))
    }

    pub fn logout(&mut self) -> NavRequest {
        self.mobile_menu.close();
        NavRequest::Logout
    }

    /// Keep the highlighted route in sync with the host's current page
    pub fn set_active(&mut self, route: Route) {
        self.active = route;
    }

    pub fn active(&self) -> Route {
        self.active
    }

    /// Flip the mobile menu, returning whether it is open
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu.toggle()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu.is_open()
    }

    /// Feed the page's vertical scroll offset
    ///
    /// Returns `true` when the scrolled style changed.
    pub fn on_scroll(&mut self, offset_px: f32) -> bool {
        let scrolled = offset_px > self.threshold_px;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self {
            active: Route::Home,
            mobile_menu: Disclosure::default(),
            scrolled: false,
            threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}
