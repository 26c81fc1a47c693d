//! Static site content
//!
//! Everything the views page, scroll or toggle through. Catalogs are built
//! fresh on each call so every mounted view owns its own collections.

use std::fmt;

use edupilot_core::ItemCollection;
use edupilot_widgets::TodoItem;
use serde::Serialize;

/// Course difficulty
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    const CYCLE: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: &'static str,
    pub level: Level,
    pub duration_hours: u32,
    pub students: u32,
    /// Tenths of a star, 40..=50
    pub rating_tenths: u8,
}

impl Course {
    pub fn rating(&self) -> f32 {
        f32::from(self.rating_tenths) / 10.0
    }
}

const COURSE_TOPICS: [&str; 5] = [
    "Web Development",
    "AI Programming",
    "Data Science",
    "Mobile App",
    "Cloud Computing",
];

const COURSE_DESCRIPTION: &str =
    "Master cutting-edge technologies with hands-on projects and real-world applications.";

/// Number of courses in the shipped catalog
pub const COURSE_COUNT: usize = 12;

/// The course catalog
///
/// Duration, enrolment and rating are derived from the course index so the
/// catalog renders identically on every run.
pub fn course_catalog() -> ItemCollection<Course> {
    (0..COURSE_COUNT)
        .map(|i| Course {
            id: i as u32 + 1,
            title: format!("Advanced {}", COURSE_TOPICS[i % COURSE_TOPICS.len()]),
            description: COURSE_DESCRIPTION,
            level: Level::CYCLE[i % Level::CYCLE.len()],
            duration_hours: 10 + (i as u32 * 7) % 20,
            students: 100 + (i as u32 * 379) % 1000,
            rating_tenths: 40 + (i as u8 * 3) % 11,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub text: &'static str,
    pub rating: u8,
}

const fn testimonial(text: &'static str, rating: u8) -> Testimonial {
    Testimonial { text, rating }
}

const TESTIMONIAL_ROWS: [[Testimonial; 4]; 3] = [
    [
        testimonial("Amazing courses that helped me land my dream job!", 5),
        testimonial("The AI tools are incredibly helpful for learning.", 5),
        testimonial("Rishika's teaching style is exceptional and engaging.", 4),
        testimonial("Best investment I made for my career development.", 5),
    ],
    [
        testimonial("The personalized mentoring changed my career path completely!", 5),
        testimonial("Interactive coding environments made learning so much easier.", 4),
        testimonial("Live classes are engaging and well-structured.", 5),
        testimonial("The community support is incredible and motivating.", 4),
    ],
    [
        testimonial("Certificates helped me get recognition at my workplace.", 5),
        testimonial("The AI Hub tools boosted my productivity significantly.", 4),
        testimonial("Offline access feature is perfect for my schedule.", 5),
        testimonial("30-day guarantee shows confidence in their quality.", 5),
    ],
];

/// One collection per marquee row
pub fn testimonial_rows() -> Vec<ItemCollection<Testimonial>> {
    TESTIMONIAL_ROWS
        .iter()
        .map(|row| row.iter().cloned().collect())
        .collect()
}

/// Display number of the student quoted by a testimonial
///
/// Rows are numbered consecutively: the first row quotes students 1..=4,
/// the second 5..=8, and so on.
pub fn student_number(row: usize, source_index: usize, row_len: usize) -> usize {
    row * row_len + source_index % row_len.max(1) + 1
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn services() -> ItemCollection<Service> {
    vec![
        Service {
            title: "Pre-Recorded Courses",
            description: "Comprehensive courses on latest technologies and tools with lifetime access and regular updates.",
        },
        Service {
            title: "Live Classes",
            description: "One-on-one or small group sessions tailored to your learning needs with expert instructors.",
        },
        Service {
            title: "AI Hub Access",
            description: "Cutting-edge AI tools to maximize your learning and boost productivity with exclusive features.",
        },
        Service {
            title: "Study Resources",
            description: "Access to PYQs, cheatsheets, and comprehensive materials for your field of study.",
        },
    ]
    .into()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn faqs() -> ItemCollection<Faq> {
    vec![
        Faq {
            question: "How do I get started with the courses?",
            answer: "Getting started is easy! Simply sign up for an account, browse our course catalog, and enroll in the courses that interest you. All courses come with detailed prerequisites and learning paths.",
        },
        Faq {
            question: "What are the prerequisites for AI courses?",
            answer: "Most of our AI courses require basic programming knowledge in Python. We also offer beginner-friendly courses that start from the fundamentals. Check each course description for specific requirements.",
        },
        Faq {
            question: "Can I access courses offline?",
            answer: "Yes! Once you enroll, you can download course materials and videos for offline viewing. However, some interactive elements and live sessions require an internet connection.",
        },
        Faq {
            question: "Do you offer one-on-one mentoring?",
            answer: "Absolutely! We provide personalized mentoring sessions with industry experts. You can book one-on-one sessions or join small group mentoring programs based on your learning goals.",
        },
        Faq {
            question: "What's included in the AI Hub?",
            answer: "The AI Hub includes access to cutting-edge AI tools, interactive coding environments, project templates, and exclusive resources to boost your productivity and learning experience.",
        },
        Faq {
            question: "How often are live classes conducted?",
            answer: "Live classes are conducted weekly for most courses. We also offer intensive bootcamps with daily sessions. All live classes are recorded and available for later viewing.",
        },
        Faq {
            question: "Can I get a refund if I'm not satisfied?",
            answer: "Yes, we offer a 30-day money-back guarantee. If you're not completely satisfied with your course within the first 30 days, we'll provide a full refund, no questions asked.",
        },
        Faq {
            question: "Do you provide certificates upon completion?",
            answer: "Yes! You'll receive a verified digital certificate upon successful completion of each course. These certificates are recognized by industry partners and can be shared on LinkedIn.",
        },
    ]
    .into()
}

/// Sections of the landing page, in scroll order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slide {
    Hero,
    Services,
    Testimonials,
    Faq,
}

impl Slide {
    pub const ALL: [Slide; 4] = [Slide::Hero, Slide::Services, Slide::Testimonials, Slide::Faq];

    pub fn title(self) -> &'static str {
        match self {
            Slide::Hero => "About Me",
            Slide::Services => "Our Services",
            Slide::Testimonials => "Student Success Stories",
            Slide::Faq => "Frequently Asked Questions",
        }
    }
}

pub fn slides() -> ItemCollection<Slide> {
    Slide::ALL.into_iter().collect()
}

/// Dashboard checklist seed
pub fn todo_items() -> Vec<TodoItem> {
    vec![
        TodoItem::new("Complete React Module 3", false),
        TodoItem::new("Submit AI Project Proposal", false),
        TodoItem::new("Join Live Class Tomorrow", false),
        TodoItem::new("Review Course Materials", true),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub fn quick_stats() -> Vec<QuickStat> {
    vec![
        QuickStat { label: "Courses Completed", value: "12" },
        QuickStat { label: "Current Streak", value: "15 days" },
        QuickStat { label: "Study Hours", value: "45h" },
        QuickStat { label: "Certificates", value: "8" },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Course,
    Community,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub title: &'static str,
    pub when: &'static str,
    pub kind: ActivityKind,
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity {
            title: "Completed JavaScript Basics",
            when: "2 hours ago",
            kind: ActivityKind::Course,
        },
        Activity {
            title: "Joined AI Study Group",
            when: "1 day ago",
            kind: ActivityKind::Community,
        },
    ]
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
}

pub fn upcoming_events() -> Vec<Event> {
    vec![
        Event {
            title: "React Advanced Concepts",
            date: "Tomorrow",
            time: "10:00 AM",
            kind: "Live Class",
        },
        Event {
            title: "AI Project Presentation",
            date: "Dec 15",
            time: "2:00 PM",
            kind: "Assignment",
        },
    ]
}
