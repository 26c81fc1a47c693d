//! Member dashboard
//!
//! Greeting with a periodic attention pulse, quick stats, the to-do list,
//! recent activity, upcoming events and the floating chat widget.

use std::fmt;

use edupilot_animation::PulseTimer;
use edupilot_core::{CyclerError, Result};
use edupilot_widgets::chat::{CHAT_PLACEHOLDER, CHAT_TITLE};
use edupilot_widgets::{ChatMessage, ChatWidget, TodoItem, TodoList};
use serde::Serialize;
use tracing::debug;

use super::{View, ViewSnapshot};
use crate::config::AppConfig;
use crate::content::{self, Activity, Event, QuickStat};

/// Time-of-day greeting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Greeting for a 24-hour clock hour
    pub fn for_hour(hour: u32) -> Result<Self> {
        match hour {
            0..=11 => Ok(Greeting::Morning),
            12..=16 => Ok(Greeting::Afternoon),
            17..=23 => Ok(Greeting::Evening),
            _ => Err(CyclerError::input(format!("hour must be 0..=23, got {hour}"))),
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
        };
        f.write_str(text)
    }
}

pub struct HomeView {
    user_name: String,
    greeting: Greeting,
    pulse: PulseTimer,
    todos: TodoList,
    chat: ChatWidget,
}

impl HomeView {
    /// Mount the dashboard for the given local hour
    pub fn new(config: &AppConfig, hour: u32) -> Result<Self> {
        let greeting = Greeting::for_hour(hour)?;
        let pulse = PulseTimer::new(
            config.dashboard.pulse_interval_ms,
            config.dashboard.pulse_ms,
        )?;
        debug!(%greeting, user = %config.dashboard.user_name, "dashboard mounted");

        Ok(Self {
            user_name: config.dashboard.user_name.clone(),
            greeting,
            pulse,
            todos: TodoList::new(content::todo_items()),
            chat: ChatWidget::new(),
        })
    }

    pub fn greeting(&self) -> Greeting {
        self.greeting
    }

    /// Whether the greeting is mid-jiggle
    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_pulsing()
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn toggle_todo(&mut self, index: usize) -> Result<bool> {
        self.todos.toggle(index)
    }

    pub fn chat(&self) -> &ChatWidget {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatWidget {
        &mut self.chat
    }
}

impl View for HomeView {
    fn frame(&mut self, dt_ms: u32) -> Result<()> {
        self.pulse.advance(dt_ms);
        Ok(())
    }

    fn unmount(&mut self) {
        self.pulse.stop();
    }

    fn has_pending_work(&self) -> bool {
        self.pulse.is_running()
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::Home(HomeSnapshot {
            greeting: format!("{}, {}!", self.greeting, self.user_name),
            pulsing: self.pulse.is_pulsing(),
            quick_stats: content::quick_stats(),
            todos: self.todos.items().to_vec(),
            pending_todos: self.todos.pending_count(),
            recent_activities: content::recent_activities(),
            upcoming_events: content::upcoming_events(),
            chat: ChatSnapshot {
                title: CHAT_TITLE,
                placeholder: CHAT_PLACEHOLDER,
                open: self.chat.is_open(),
                draft: self.chat.draft().to_string(),
                transcript: self.chat.transcript().to_vec(),
            },
        })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct HomeSnapshot {
    pub greeting: String,
    pub pulsing: bool,
    pub quick_stats: Vec<QuickStat>,
    pub todos: Vec<TodoItem>,
    pub pending_todos: usize,
    pub recent_activities: Vec<Activity>,
    pub upcoming_events: Vec<Event>,
    pub chat: ChatSnapshot,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatSnapshot {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub open: bool,
    pub draft: String,
    pub transcript: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(Greeting::for_hour(0), Ok(Greeting::Morning));
        assert_eq!(Greeting::for_hour(11), Ok(Greeting::Morning));
        assert_eq!(Greeting::for_hour(12), Ok(Greeting::Afternoon));
        assert_eq!(Greeting::for_hour(16), Ok(Greeting::Afternoon));
        assert_eq!(Greeting::for_hour(17), Ok(Greeting::Evening));
        assert_eq!(Greeting::for_hour(23), Ok(Greeting::Evening));
        assert!(matches!(
            Greeting::for_hour(24),
            Err(CyclerError::InvalidInput { .. })
        ));
        assert_eq!(Greeting::Afternoon.to_string(), "Good Afternoon");
    }

    #[test]
    fn test_pulse_follows_frames() {
        let mut home = HomeView::new(&AppConfig::default(), 9).unwrap();
        assert!(!home.is_pulsing());

        home.frame(5_000).unwrap();
        assert!(home.is_pulsing());
        home.frame(499).unwrap();
        assert!(home.is_pulsing());
        home.frame(1).unwrap();
        assert!(!home.is_pulsing());
    }

    #[test]
    fn test_unmount_stops_pulse() {
        let mut home = HomeView::new(&AppConfig::default(), 9).unwrap();
        assert!(home.has_pending_work());
        home.unmount();
        assert!(!home.has_pending_work());

        home.frame(5_000).unwrap();
        assert!(!home.is_pulsing());
    }

    #[test]
    fn test_snapshot_greets_user() {
        let mut home = HomeView::new(&AppConfig::default(), 14).unwrap();
        home.toggle_todo(0).unwrap();

        let ViewSnapshot::Home(snapshot) = home.snapshot() else {
            panic!("expected home snapshot");
        };
        assert_eq!(snapshot.greeting, "Good Afternoon, Rishika!");
        assert_eq!(snapshot.pending_todos, 2);
        assert_eq!(snapshot.quick_stats.len(), 4);
        assert_eq!(snapshot.chat.title, "Chat Bot");
        assert!(!snapshot.chat.open);
    }

    #[test]
    fn test_chat_round_trip() {
        let mut home = HomeView::new(&AppConfig::default(), 20).unwrap();
        let chat = home.chat_mut();
        chat.open();
        chat.set_draft("hello");
        chat.send().unwrap();
        assert_eq!(home.chat().transcript().len(), 1);
    }

    #[test]
    fn test_invalid_hour_rejects_mount() {
        assert!(HomeView::new(&AppConfig::default(), 25).is_err());
    }
}
