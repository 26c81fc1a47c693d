//! Landing / About page
//!
//! Four slides: the hero with the typed greeting, services, the testimonial
//! marquee and the FAQ accordion. The greeting types only while the hero is
//! the current slide and starts over from an empty heading whenever the hero
//! comes back into view.

use edupilot_animation::{CyclicScroller, MarqueeRows, RevealState, TypedTextAnimator};
use edupilot_core::{Direction, ItemCollection, Result};
use edupilot_widgets::{ExclusiveToggleSet, PageMove, PageWindow};
use serde::Serialize;
use tracing::debug;

use super::{View, ViewSnapshot};
use crate::config::AppConfig;
use crate::content::{self, Faq, Service, Slide, Testimonial};

pub struct AboutView {
    slides: PageWindow<Slide>,
    typing: TypedTextAnimator,
    marquee: MarqueeRows<Testimonial>,
    faq: ExclusiveToggleSet<Faq>,
    services: ItemCollection<Service>,
}

impl AboutView {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let slides = PageWindow::new(content::slides(), 1)?;
        let typing = TypedTextAnimator::new(
            config.typing.text.clone(),
            config.typing.tick_interval_ms,
        )?;

        // Configured rows take testimonial content in order, wrapping when
        // more rows are configured than there are testimonial sets.
        let sources = content::testimonial_rows();
        let rows = config
            .marquee
            .rows
            .iter()
            .zip(sources.iter().cycle())
            .map(|(row, items)| {
                CyclicScroller::new(items.clone(), row.period_seconds, row.direction)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut view = Self {
            slides,
            typing,
            marquee: MarqueeRows::new(rows),
            faq: ExclusiveToggleSet::new(content::faqs()),
            services: content::services(),
        };
        view.sync_typing();
        Ok(view)
    }

    pub fn current_slide(&self) -> Slide {
        self.slides.visible_items()[0]
    }

    pub fn slide_index(&self) -> usize {
        self.slides.current_page()
    }

    pub fn next_slide(&mut self) -> PageMove {
        let moved = self.slides.advance();
        self.sync_typing();
        moved
    }

    pub fn previous_slide(&mut self) -> PageMove {
        let moved = self.slides.retreat();
        self.sync_typing();
        moved
    }

    pub fn show_slide(&mut self, index: usize) -> Result<PageMove> {
        let moved = self.slides.go_to(index)?;
        self.sync_typing();
        Ok(moved)
    }

    /// Open or close FAQ `index`, returning whether it is now open
    pub fn toggle_faq(&mut self, index: usize) -> Result<bool> {
        self.faq.toggle(index)
    }

    /// Heading text as currently typed
    pub fn typed_text(&self) -> &str {
        self.typing.visible_text()
    }

    pub fn typing(&self) -> &TypedTextAnimator {
        &self.typing
    }

    pub fn marquee(&self) -> &MarqueeRows<Testimonial> {
        &self.marquee
    }

    pub fn faq(&self) -> &ExclusiveToggleSet<Faq> {
        &self.faq
    }

    fn sync_typing(&mut self) {
        let on_hero = self.current_slide() == Slide::Hero;
        self.typing.set_trigger(on_hero);
        debug!(slide = ?self.current_slide(), typing = on_hero, "about slide shown");
    }
}

impl View for AboutView {
    fn frame(&mut self, dt_ms: u32) -> Result<()> {
        self.typing.advance(dt_ms);
        self.marquee.tick(f64::from(dt_ms) / 1000.0)
    }

    fn unmount(&mut self) {
        self.typing.deactivate();
    }

    fn has_pending_work(&self) -> bool {
        self.typing.is_tick_pending()
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::About(AboutSnapshot::capture(self))
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AboutSnapshot {
    pub slide: Slide,
    pub slide_index: usize,
    pub slide_count: usize,
    pub title: &'static str,
    pub heading: String,
    pub heading_complete: bool,
    pub services: Vec<Service>,
    pub marquee: Vec<MarqueeRowSnapshot>,
    pub faqs: Vec<FaqEntry>,
}

#[derive(Clone, Debug, Serialize)]
pub struct MarqueeRowSnapshot {
    pub direction: Direction,
    pub period_seconds: f64,
    pub offset_percent: f64,
    /// Doubled render sequence
    pub cards: Vec<MarqueeCard>,
}

#[derive(Clone, Debug, Serialize)]
pub struct MarqueeCard {
    pub student: usize,
    pub text: &'static str,
    pub rating: u8,
}

#[derive(Clone, Debug, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    /// Present only while the entry is open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<&'static str>,
    pub open: bool,
}

impl AboutSnapshot {
    fn capture(view: &AboutView) -> Self {
        let marquee = view
            .marquee
            .rows()
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                let row_len = row.collection().len();
                MarqueeRowSnapshot {
                    direction: row.direction(),
                    period_seconds: row.period_seconds(),
                    offset_percent: row.offset_percent(),
                    cards: row
                        .rendered_items()
                        .map(|(source, item)| MarqueeCard {
                            student: content::student_number(row_index, source, row_len),
                            text: item.text,
                            rating: item.rating,
                        })
                        .collect(),
                }
            })
            .collect();

        let faqs = view
            .faq
            .entries()
            .map(|(faq, open)| FaqEntry {
                question: faq.question,
                answer: open.then_some(faq.answer),
                open,
            })
            .collect();

        let slide = view.current_slide();
        Self {
            slide,
            slide_index: view.slide_index(),
            slide_count: view.slides.page_count(),
            title: slide.title(),
            heading: view.typing.visible_text().to_string(),
            heading_complete: view.typing.state() == RevealState::Complete,
            services: view.services.iter().cloned().collect(),
            marquee,
            faqs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> AboutView {
        AboutView::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_typing_starts_on_hero() {
        let mut about = view();
        assert_eq!(about.current_slide(), Slide::Hero);
        assert_eq!(about.typed_text(), "");
        assert!(about.has_pending_work());

        about.frame(500).unwrap();
        assert_eq!(about.typed_text(), "Hi! I");
    }

    #[test]
    fn test_leaving_hero_cancels_typing() {
        let mut about = view();
        about.frame(300).unwrap();
        assert_eq!(about.typed_text(), "Hi!");

        about.next_slide();
        assert_eq!(about.current_slide(), Slide::Services);
        assert_eq!(about.typed_text(), "");
        assert!(!about.has_pending_work());

        // time passing off the hero reveals nothing
        about.frame(1_000).unwrap();
        assert_eq!(about.typed_text(), "");

        about.previous_slide();
        assert_eq!(about.typed_text(), "");
        about.frame(100).unwrap();
        assert_eq!(about.typed_text(), "H");
    }

    #[test]
    fn test_full_greeting() {
        let mut about = view();
        about.frame(1_700).unwrap();
        assert_eq!(about.typed_text(), "Hi! I am Rishika!");
        assert!(!about.has_pending_work());

        let snapshot = AboutSnapshot::capture(&about);
        assert!(snapshot.heading_complete);
        assert_eq!(snapshot.slide_count, 4);
    }

    #[test]
    fn test_marquee_rows_move_independently() {
        let mut about = view();
        about.frame(7_500).unwrap();

        let rows = about.marquee().rows();
        assert_eq!(rows.len(), 3);
        assert!((rows[0].offset_percent() - -12.5).abs() < 1e-9);
        // 7.5 s into a 25 s reverse pass
        assert!((rows[1].offset_percent() - -35.0).abs() < 1e-9);
    }

    #[test]
    fn test_faq_snapshot_shows_only_open_answer() {
        let mut about = view();
        about.show_slide(3).unwrap();
        assert!(about.toggle_faq(2).unwrap());

        let snapshot = AboutSnapshot::capture(&about);
        assert_eq!(snapshot.slide, Slide::Faq);
        let open: Vec<_> = snapshot.faqs.iter().filter(|f| f.open).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].question, "Can I access courses offline?");
        assert!(open[0].answer.is_some());
        assert!(snapshot.faqs[0].answer.is_none());
    }

    #[test]
    fn test_marquee_cards_are_doubled() {
        let snapshot = AboutSnapshot::capture(&view());
        let second = &snapshot.marquee[1];
        assert_eq!(second.cards.len(), 8);
        assert_eq!(second.cards[0].student, 5);
        assert_eq!(second.cards[4].student, 5);
        assert_eq!(second.direction, Direction::Reverse);
    }

    #[test]
    fn test_unmount_cancels_typing() {
        let mut about = view();
        about.frame(200).unwrap();
        about.unmount();
        assert!(!about.has_pending_work());
        assert_eq!(about.typing().state(), RevealState::Idle);
    }
}
