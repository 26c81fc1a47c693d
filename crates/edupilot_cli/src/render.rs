//! Plain-text rendering of view snapshots

use std::fmt::Write;

use edupilot_app::content::Slide;
use edupilot_app::views::{AboutSnapshot, CoursesSnapshot, HomeSnapshot};
use edupilot_app::{AppSnapshot, NavSnapshot, ViewSnapshot};
use edupilot_widgets::PageButton;

const CURSOR: char = '|';

pub fn text(snapshot: &AppSnapshot) -> String {
    let mut out = String::new();
    if let Some(nav) = &snapshot.nav {
        nav_bar(&mut out, nav);
    }
    match &snapshot.view {
        ViewSnapshot::About(about) => about_page(&mut out, about),
        ViewSnapshot::Courses(courses) => courses_page(&mut out, courses),
        ViewSnapshot::Home(home) => home_page(&mut out, home),
        ViewSnapshot::Placeholder { route } => {
            let _ = writeln!(out, "{} (coming soon)", route.label());
        }
    }
    out
}

fn nav_bar(out: &mut String, nav: &NavSnapshot) {
    let items: Vec<String> = nav
        .items
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}  |  Logout", items.join("  "));
    let _ = writeln!(out);
}

fn stars(rating: u8) -> String {
    (0..5)
        .map(|i| if i < rating { '★' } else { '☆' })
        .collect()
}

fn about_page(out: &mut String, about: &AboutSnapshot) {
    let _ = writeln!(
        out,
        "== {} (slide {}/{}) ==",
        about.title,
        about.slide_index + 1,
        about.slide_count
    );

    match about.slide {
        Slide::Hero => {
            let _ = writeln!(out, "{}{CURSOR}", about.heading);
        }
        Slide::Services => {
            for service in &about.services {
                let _ = writeln!(out, "* {}: {}", service.title, service.description);
            }
        }
        Slide::Testimonials => {
            for (i, row) in about.marquee.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "row {} ({:?}, {}s) offset {:.2}%",
                    i + 1,
                    row.direction,
                    row.period_seconds,
                    row.offset_percent
                );
                for card in &row.cards {
                    let _ = writeln!(
                        out,
                        "  Student {:<3} {}  {}",
                        card.student,
                        stars(card.rating),
                        card.text
                    );
                }
            }
        }
        Slide::Faq => {
            for faq in &about.faqs {
                let marker = if faq.open { '-' } else { '+' };
                let _ = writeln!(out, "[{marker}] {}", faq.question);
                if let Some(answer) = faq.answer {
                    let _ = writeln!(out, "    {answer}");
                }
            }
        }
    }
}

fn courses_page(out: &mut String, courses: &CoursesSnapshot) {
    let _ = writeln!(out, "== Explore Our Courses ==");
    let stats: Vec<String> = courses
        .stats
        .iter()
        .map(|stat| format!("{} {}", stat.value, stat.label))
        .collect();
    let _ = writeln!(out, "{}", stats.join("  |  "));
    let _ = writeln!(out);

    for course in &courses.courses {
        let _ = writeln!(
            out,
            "#{:<3} {:<28} {:<13} {:>2}h  {:>4} students  {:.1}",
            course.id,
            course.title,
            course.level.to_string(),
            course.duration_hours,
            course.students,
            course.rating()
        );
    }
    let _ = writeln!(out);

    let mut bar = String::new();
    bar.push_str(if courses.previous_enabled { "<" } else { " " });
    for button in &courses.buttons {
        match button {
            PageButton::Page { number, current: true } => {
                let _ = write!(bar, " [{number}]");
            }
            PageButton::Page { number, current: false } => {
                let _ = write!(bar, " {number}");
            }
            PageButton::Ellipsis => bar.push_str(" …"),
        }
    }
    bar.push_str(if courses.next_enabled { " >" } else { "  " });
    let _ = writeln!(out, "{}", bar.trim_end());
    let _ = writeln!(out, "{}", courses.page_info);
}

fn home_page(out: &mut String, home: &HomeSnapshot) {
    let wiggle = if home.pulsing { " ~" } else { "" };
    let _ = writeln!(out, "== {}{wiggle} ==", home.greeting);

    for stat in &home.quick_stats {
        let _ = writeln!(out, "{:<18} {}", stat.label, stat.value);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "To-do ({} pending)", home.pending_todos);
    for todo in &home.todos {
        let check = if todo.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{check}] {}", todo.task);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recent activity");
    for activity in &home.recent_activities {
        let _ = writeln!(out, "  {} ({})", activity.title, activity.when);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Upcoming");
    for event in &home.upcoming_events {
        let _ = writeln!(
            out,
            "  {} - {} {} [{}]",
            event.title, event.date, event.time, event.kind
        );
    }

    let _ = writeln!(out);
    if home.chat.open {
        let _ = writeln!(out, "{} (open)", home.chat.title);
        for message in &home.chat.transcript {
            let _ = writeln!(out, "  {:?}: {}", message.author, message.text);
        }
        let draft = if home.chat.draft.is_empty() {
            home.chat.placeholder
        } else {
            home.chat.draft.as_str()
        };
        let _ = writeln!(out, "  > {draft}");
    } else {
        let _ = writeln!(out, "{} (closed)", home.chat.title);
    }
}
