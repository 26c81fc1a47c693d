//! Course catalog grid

use edupilot_core::{ItemCollection, Result};
use edupilot_widgets::{PageButton, PageMove, PageSummary, PageWindow};
use serde::Serialize;

use super::{View, ViewSnapshot};
use crate::config::AppConfig;
use crate::content::{self, Course};

pub struct CoursesView {
    grid: PageWindow<Course>,
    max_buttons: usize,
}

impl CoursesView {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_catalog(content::course_catalog(), config)
    }

    /// Build the grid over a caller-supplied catalog
    pub fn with_catalog(catalog: ItemCollection<Course>, config: &AppConfig) -> Result<Self> {
        let grid = PageWindow::new(catalog, config.catalog.page_size)?;
        // page_buttons only fails for a zero-width window
        grid.page_buttons(config.catalog.page_buttons)?;
        Ok(Self {
            grid,
            max_buttons: config.catalog.page_buttons,
        })
    }

    pub fn next_page(&mut self) -> PageMove {
        self.grid.advance()
    }

    pub fn previous_page(&mut self) -> PageMove {
        self.grid.retreat()
    }

    /// Jump to a 0-based page
    pub fn go_to_page(&mut self, page: usize) -> Result<PageMove> {
        self.grid.go_to(page)
    }

    pub fn visible_courses(&self) -> &[Course] {
        self.grid.visible_items()
    }

    pub fn grid(&self) -> &PageWindow<Course> {
        &self.grid
    }

    /// Caption under the grid, e.g. "Page 1 of 2 • Showing 6 of 12 courses"
    pub fn page_info(&self) -> String {
        format!("{} courses", self.grid.summary())
    }

    fn stats(&self) -> Vec<CourseStat> {
        let catalog = self.grid.collection();
        let average = if catalog.is_empty() {
            0.0
        } else {
            catalog.iter().map(Course::rating).sum::<f32>() / catalog.len() as f32
        };

        vec![
            CourseStat {
                label: "Courses Available",
                value: format!("{}+", catalog.len()),
            },
            CourseStat {
                label: "Students Enrolled",
                value: "10K+".to_string(),
            },
            CourseStat {
                label: "Average Rating",
                value: format!("{average:.1}"),
            },
        ]
    }
}

impl View for CoursesView {
    fn frame(&mut self, _dt_ms: u32) -> Result<()> {
        Ok(())
    }

    fn unmount(&mut self) {}

    fn has_pending_work(&self) -> bool {
        false
    }

    fn snapshot(&self) -> ViewSnapshot {
        // checked in with_catalog
        let buttons = self
            .grid
            .page_buttons(self.max_buttons)
            .map(|buttons| buttons.into_vec())
            .unwrap_or_default();

        ViewSnapshot::Courses(CoursesSnapshot {
            stats: self.stats(),
            courses: self.grid.visible_items().to_vec(),
            summary: self.grid.summary(),
            page_info: self.page_info(),
            buttons,
            previous_enabled: self.grid.has_previous(),
            next_enabled: self.grid.has_next(),
        })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CourseStat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CoursesSnapshot {
    pub stats: Vec<CourseStat>,
    pub courses: Vec<Course>,
    pub summary: PageSummary,
    pub page_info: String,
    pub buttons: Vec<PageButton>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}
