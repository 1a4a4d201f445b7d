//! Built-in EduHack landing page, used when no page file is given.

use crate::page::{ContentNode, NavLink, PageDocument};
use crate::traits::PageReader;

/// Reader that ignores the path and returns the built-in page
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoPageReader;

impl DemoPageReader {
    pub fn new() -> Self {
        Self
    }
}

impl PageReader for DemoPageReader {
    fn read(&self, _path: &str) -> anyhow::Result<PageDocument> {
        Ok(demo_page())
    }
}

static DEMO_PAGE: once_cell::sync::Lazy<PageDocument> = once_cell::sync::Lazy::new(build_demo_page);

fn paragraphs<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<ContentNode> {
    texts.into_iter().map(ContentNode::paragraph).collect()
}

fn list<'a>(items: impl IntoIterator<Item = &'a str>) -> ContentNode {
    ContentNode::block().with_children(items.into_iter().map(ContentNode::list_item))
}

/// The built-in EduHack page
pub fn demo_page() -> PageDocument {
    DEMO_PAGE.clone()
}

fn build_demo_page() -> PageDocument {
    let hero = ContentNode::section("hero")
        .with_child(ContentNode::heading(1, "Welcome to EduHack"))
        .with_child(ContentNode::paragraph(
            "A weekend hackathon where students build tools that make learning better.",
        ))
        .with_child(
            ContentNode::block()
                .with_id("countdown")
                .with_child(ContentNode::paragraph("The event starts in")),
        );

    let about = ContentNode::section("about")
        .with_child(ContentNode::heading(2, "About the event"))
        .with_children(paragraphs([
            "EduHack brings together developers, designers and educators for 48 hours of building.",
            "Teams of up to four people work on open challenges proposed by schools and universities.",
        ]))
        .with_child(
            ContentNode::block()
                .with_child(ContentNode::heading(3, "Who can join"))
                .with_child(ContentNode::paragraph(
                    "Anyone enrolled in a school, university or bootcamp. No prior hackathon experience needed.",
                )),
        );

    let schedule = ContentNode::section("schedule")
        .with_child(ContentNode::heading(2, "Schedule"))
        .with_child(ContentNode::paragraph(
            "Schedule details here: the hackathon runs from Saturday morning to Sunday evening.",
        ))
        .with_child(ContentNode::heading(3, "Saturday"))
        .with_child(list([
            "09:00 Registration and breakfast",
            "10:00 Opening ceremony",
            "11:00 Hacking begins",
            "20:00 Mentor office hours",
        ]))
        .with_child(ContentNode::heading(3, "Sunday"))
        .with_child(list([
            "13:00 Submissions close",
            "14:00 Project demos",
            "17:00 Awards and closing",
        ]));

    let prizes = ContentNode::section("prizes")
        .with_child(ContentNode::heading(2, "Prizes"))
        .with_child(list([
            "First place: mentorship program and cloud credits",
            "Second place: developer hardware kits",
            "Best educational impact: pilot with a partner school",
        ]));

    let faq = ContentNode::section("faq")
        .with_child(ContentNode::heading(2, "Frequently asked questions"))
        .with_child(ContentNode::heading(4, "Is the event free?"))
        .with_child(ContentNode::paragraph("Yes. Meals, drinks and swag are included."))
        .with_child(ContentNode::heading(4, "Do I need a team?"))
        .with_child(ContentNode::paragraph(
            "No. A team formation session is held right after the opening ceremony.",
        ))
        .with_child(ContentNode::heading(4, "What should I bring?"))
        .with_child(ContentNode::paragraph("A laptop, a charger and your curiosity."));

    let contact = ContentNode::section("contact")
        .with_child(ContentNode::heading(2, "Contact"))
        .with_child(ContentNode::paragraph("Questions? Write to the organizing team at hello@eduhack.dev."))
        .with_child(
            ContentNode::block()
                .with_text("Sponsors and partners welcome")
                .mark_searchable(),
        );

    let footer = ContentNode::block()
        .with_id("footer")
        .with_child(ContentNode::paragraph("EduHack is organized by volunteers."));

    let root = ContentNode::block().with_children([hero, about, schedule, prizes, faq, contact, footer]);

    let mut page = PageDocument::new("EduHack", root);
    page.nav = vec![
        NavLink::new("Home", "#hero"),
        NavLink::new("About", "#about"),
        NavLink::new("Schedule", "#schedule"),
        NavLink::new("Prizes", "#prizes"),
        NavLink::new("FAQ", "#faq"),
        NavLink::new("Contact", "#contact"),
    ];
    page
}
