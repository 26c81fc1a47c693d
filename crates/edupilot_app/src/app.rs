//! Application orchestrator
//!
//! [`App`] owns the navigation bar and exactly one mounted view. Guests see
//! the landing slides; logging in mounts the dashboard and unlocks the other
//! routes. Switching routes unmounts the old view (cancelling its timers)
//! before dropping it, and [`App::frame`] is the only path by which time
//! reaches the mounted view.
//!
//! Authentication itself is not modelled: login and logout run whatever
//! hooks the host registered and flip the session flag.

use edupilot_widgets::{NavBar, NavItem, NavRequest, Route};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::views::{AboutView, CoursesView, HomeView, View, ViewSnapshot};

/// Host callback run on login or logout
pub type SessionHook = Box<dyn FnMut()>;

/// Hour used for the dashboard greeting until the host provides one
pub const DEFAULT_HOUR: u32 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    Guest,
    Member,
}

/// The view currently on screen
pub enum MountedView {
    /// Landing slides shown to guests
    Landing(AboutView),
    About(AboutView),
    Courses(CoursesView),
    Home(HomeView),
    /// Routes without interactive state
    Placeholder(Route),
}

impl MountedView {
    fn build(route: Route, config: &AppConfig, hour: u32) -> edupilot_core::Result<Self> {
        Ok(match route {
            Route::Home => MountedView::Home(HomeView::new(config, hour)?),
            Route::Courses => MountedView::Courses(CoursesView::new(config)?),
            Route::About => MountedView::About(AboutView::new(config)?),
            Route::LiveClasses | Route::AiHub | Route::Contact => MountedView::Placeholder(route),
        })
    }

    /// Route this view answers to; `None` for the guest landing page
    pub fn route(&self) -> Option<Route> {
        match self {
            MountedView::Landing(_) => None,
            MountedView::About(_) => Some(Route::About),
            MountedView::Courses(_) => Some(Route::Courses),
            MountedView::Home(_) => Some(Route::Home),
            MountedView::Placeholder(route) => Some(*route),
        }
    }

    pub fn as_view(&self) -> Option<&dyn View> {
        match self {
            MountedView::Landing(view) | MountedView::About(view) => Some(view as &dyn View),
            MountedView::Courses(view) => Some(view as &dyn View),
            MountedView::Home(view) => Some(view as &dyn View),
            MountedView::Placeholder(_) => None,
        }
    }

    pub fn as_view_mut(&mut self) -> Option<&mut dyn View> {
        match self {
            MountedView::Landing(view) | MountedView::About(view) => Some(view as &mut dyn View),
            MountedView::Courses(view) => Some(view as &mut dyn View),
            MountedView::Home(view) => Some(view as &mut dyn View),
            MountedView::Placeholder(_) => None,
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        match self {
            MountedView::Landing(view) | MountedView::About(view) => view.snapshot(),
            MountedView::Courses(view) => view.snapshot(),
            MountedView::Home(view) => view.snapshot(),
            MountedView::Placeholder(route) => ViewSnapshot::Placeholder { route: *route },
        }
    }
}

/// Top-level application state
pub struct App {
    config: AppConfig,
    nav: NavBar,
    session: Session,
    view: MountedView,
    hour: u32,
    on_login: Option<SessionHook>,
    on_logout: Option<SessionHook>,
}

impl App {
    /// Validate the configuration and mount the guest landing page
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let nav = NavBar::new(Route::Home, config.navigation.scroll_threshold_px)?;
        let view = MountedView::Landing(AboutView::new(&config)?);
        info!("application started");

        Ok(Self {
            config,
            nav,
            session: Session::Guest,
            view,
            hour: DEFAULT_HOUR,
            on_login: None,
            on_logout: None,
        })
    }

    /// Run `hook` whenever a guest logs in
    pub fn with_login_hook(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_login = Some(Box::new(hook));
        self
    }

    /// Run `hook` whenever a member logs out
    pub fn with_logout_hook(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_logout = Some(Box::new(hook));
        self
    }

    /// Set the local hour used for the dashboard greeting
    ///
    /// Takes effect the next time the dashboard mounts.
    pub fn set_hour(&mut self, hour: u32) -> Result<()> {
        crate::views::Greeting::for_hour(hour)?;
        self.hour = hour;
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn mounted(&self) -> &MountedView {
        &self.view
    }

    /// Enter the member area and show the dashboard
    ///
    /// A no-op for a session that is already logged in.
    pub fn login(&mut self) -> Result<()> {
        if self.session == Session::Member {
            return Ok(());
        }

        self.mount(Route::Home)?;
        self.session = Session::Member;
        self.nav.set_active(Route::Home);
        if let Some(hook) = self.on_login.as_mut() {
            hook();
        }
        info!("logged in");
        Ok(())
    }

    /// Leave the member area and return to the landing slides
    pub fn logout(&mut self) -> Result<()> {
        let request = self.nav.logout();
        self.handle(request)
    }

    /// Select a route from the navigation bar
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        if self.session != Session::Member {
            warn!(%route, "navigation rejected for guest");
            return Err(AppError::NotLoggedIn(route));
        }
        let request = self.nav.select(route);
        self.handle(request)
    }

    /// Select a route by its id, e.g. `"live-classes"`
    pub fn navigate_id(&mut self, id: &str) -> Result<()> {
        let route: Route = id.parse()?;
        self.navigate(route)
    }

    fn handle(&mut self, request: NavRequest) -> Result<()> {
        match request {
            NavRequest::Navigate(route) => {
                if self.view.route() != Some(route) {
                    self.mount(route)?;
                }
                Ok(())
            }
            NavRequest::Logout => {
                if self.session == Session::Guest {
                    return Ok(());
                }
                let landing = MountedView::Landing(AboutView::new(&self.config)?);
                self.replace(landing);
                self.session = Session::Guest;
                self.nav.set_active(Route::Home);
                if let Some(hook) = self.on_logout.as_mut() {
                    hook();
                }
                info!("logged out");
                Ok(())
            }
        }
    }

    fn mount(&mut self, route: Route) -> Result<()> {
        let next = MountedView::build(route, &self.config, self.hour)?;
        self.replace(next);
        Ok(())
    }

    /// Swap in `next`, tearing down the previous view first
    fn replace(&mut self, next: MountedView) {
        if let Some(view) = self.view.as_view_mut() {
            view.unmount();
        }
        let previous = std::mem::replace(&mut self.view, next);
        debug!(from = ?previous.route(), to = ?self.view.route(), "view mounted");
    }

    /// Forward elapsed frame time to the mounted view
    pub fn frame(&mut self, dt_ms: u32) -> Result<()> {
        if let Some(view) = self.view.as_view_mut() {
            view.frame(dt_ms)?;
        }
        Ok(())
    }

    /// Feed the page scroll offset to the navigation bar
    pub fn on_scroll(&mut self, offset_px: f32) -> bool {
        self.nav.on_scroll(offset_px)
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.nav.toggle_mobile_menu()
    }

    /// Whether the mounted view has any timer scheduled
    pub fn has_pending_work(&self) -> bool {
        self.view.as_view().is_some_and(|view| view.has_pending_work())
    }

    pub fn about_mut(&mut self) -> Result<&mut AboutView> {
        match &mut self.view {
            MountedView::Landing(view) | MountedView::About(view) => Ok(view),
            _ => Err(AppError::ViewNotMounted { expected: "about" }),
        }
    }

    pub fn courses_mut(&mut self) -> Result<&mut CoursesView> {
        match &mut self.view {
            MountedView::Courses(view) => Ok(view),
            _ => Err(AppError::ViewNotMounted { expected: "courses" }),
        }
    }

    pub fn home_mut(&mut self) -> Result<&mut HomeView> {
        match &mut self.view {
            MountedView::Home(view) => Ok(view),
            _ => Err(AppError::ViewNotMounted { expected: "home" }),
        }
    }

    pub fn snapshot(&self) -> AppSnapshot {
        let nav = (self.session == Session::Member).then(|| NavSnapshot {
            items: self.nav.items().collect(),
            scrolled: self.nav.is_scrolled(),
            mobile_menu_open: self.nav.is_mobile_menu_open(),
        });

        AppSnapshot {
            session: self.session,
            route: self.view.route(),
            nav,
            view: self.view.snapshot(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AppSnapshot {
    pub session: Session,
    pub route: Option<Route>,
    /// Only rendered for members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav: Option<NavSnapshot>,
    pub view: ViewSnapshot,
}

#[derive(Clone, Debug, Serialize)]
pub struct NavSnapshot {
    pub items: Vec<NavItem>,
    pub scrolled: bool,
    pub mobile_menu_open: bool,
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_on_landing() {
        let app = app();
        assert_eq!(app.session(), Session::Guest);
        assert!(matches!(app.mounted(), MountedView::Landing(_)));
        assert!(app.has_pending_work());
        assert!(app.snapshot().nav.is_none());
    }

    #[test]
    fn test_guest_cannot_navigate() {
        let mut app = app();
        assert!(matches!(
            app.navigate(Route::Courses),
            Err(AppError::NotLoggedIn(Route::Courses))
        ));
        assert!(matches!(app.mounted(), MountedView::Landing(_)));
    }

    #[test]
    fn test_login_logout_hooks() {
        let logins = Rc::new(Cell::new(0));
        let logouts = Rc::new(Cell::new(0));
        let (l, o) = (logins.clone(), logouts.clone());

        let mut app = app()
            .with_login_hook(move || l.set(l.get() + 1))
            .with_logout_hook(move || o.set(o.get() + 1));

        app.login().unwrap();
        app.login().unwrap();
        assert_eq!(logins.get(), 1);
        assert_eq!(app.mounted().route(), Some(Route::Home));

        app.logout().unwrap();
        assert_eq!(logouts.get(), 1);
        assert_eq!(app.session(), Session::Guest);
        assert!(matches!(app.mounted(), MountedView::Landing(_)));
    }

    #[test]
    fn test_navigation_swaps_views() {
        let mut app = app();
        app.login().unwrap();

        app.navigate(Route::Courses).unwrap();
        assert!(app.courses_mut().is_ok());
        assert!(app.home_mut().is_err());
        assert!(!app.has_pending_work());

        app.navigate_id("live-classes").unwrap();
        assert!(matches!(
            app.mounted(),
            MountedView::Placeholder(Route::LiveClasses)
        ));
        assert!(app.navigate_id("blog").is_err());
    }

    #[test]
    fn test_renavigating_keeps_view_state() {
        let mut app = app();
        app.login().unwrap();
        app.navigate(Route::Courses).unwrap();
        app.courses_mut().unwrap().next_page();

        app.navigate(Route::Courses).unwrap();
        assert_eq!(app.courses_mut().unwrap().grid().current_page(), 1);

        // leaving and coming back builds a fresh grid
        app.navigate(Route::Home).unwrap();
        app.navigate(Route::Courses).unwrap();
        assert_eq!(app.courses_mut().unwrap().grid().current_page(), 0);
    }

    #[test]
    fn test_frame_reaches_mounted_view() {
        let mut app = app();
        app.frame(300).unwrap();
        assert_eq!(app.about_mut().unwrap().typed_text(), "Hi!");
    }

    #[test]
    fn test_set_hour_validates() {
        let mut app = app();
        assert!(app.set_hour(24).is_err());
        app.set_hour(18).unwrap();
        app.login().unwrap();
        assert_eq!(
            app.home_mut().unwrap().greeting(),
            crate::views::Greeting::Evening
        );
    }
}
