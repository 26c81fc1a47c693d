//! Views
//!
//! A view owns the primitives behind one page. It is created when the
//! orchestrator mounts its route and dropped on unmount, so no timer or
//! scroller state survives navigation.

mod about;
mod courses;
mod home;

pub use about::{AboutSnapshot, AboutView, FaqEntry, MarqueeCard, MarqueeRowSnapshot};
pub use courses::{CourseStat, CoursesSnapshot, CoursesView};
pub use home::{Greeting, HomeSnapshot, HomeView};

use edupilot_core::Result;
use serde::Serialize;

/// Behaviour shared by every mounted view
pub trait View {
    /// Forward elapsed frame time to the view's animations
    fn frame(&mut self, dt_ms: u32) -> Result<()>;

    /// Cancel every pending timer ahead of teardown
    fn unmount(&mut self);

    /// Whether any timer is still scheduled
    fn has_pending_work(&self) -> bool;

    /// Serializable render state
    fn snapshot(&self) -> ViewSnapshot;
}

/// Render state of whichever view is mounted
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ViewSnapshot {
    About(AboutSnapshot),
    Courses(CoursesSnapshot),
    Home(HomeSnapshot),
    /// A route with no interactive state
    Placeholder { route: edupilot_widgets::Route },
}
