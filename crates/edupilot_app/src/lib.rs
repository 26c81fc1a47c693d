//! EduPilot Application
//!
//! Site content, per-page views and the orchestrator that mounts them.
//!
//! # Features
//!
//! - **Configuration**: optional `edupilot.toml` with per-field defaults
//! - **Landing / About**: slide deck, typed greeting, testimonial marquee, FAQ
//! - **Courses**: paged catalog grid with page buttons and caption
//! - **Home**: greeting pulse, to-do list, chat widget
//! - **Orchestrator**: session, navigation and a single frame entry point
//!
//! # Example
//!
//! ```rust
//! use edupilot_app::{App, AppConfig};
//! use edupilot_widgets::Route;
//!
//! let mut app = App::new(AppConfig::default()).unwrap();
//! app.frame(300).unwrap();
//! assert_eq!(app.about_mut().unwrap().typed_text(), "Hi!");
//!
//! app.login().unwrap();
//! app.navigate(Route::Courses).unwrap();
//! let courses = app.courses_mut().unwrap();
//! assert_eq!(courses.page_info(), "Page 1 of 2 • Showing 6 of 12 courses");
//! ```

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod views;

pub use app::{App, AppSnapshot, MountedView, NavSnapshot, Session, SessionHook};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use views::{AboutView, CoursesView, Greeting, HomeView, View, ViewSnapshot};
