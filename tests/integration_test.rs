use eduhack::countdown::{remaining, MS_PER_DAY, MS_PER_HOUR};
use eduhack::search::{score, IndexedFragment, SCORE_CONTAINS, SCORE_PREFIX_BONUS};
use eduhack::{
    demo_page, parse_page, ContentIndex, ContentNode, Countdown, DemoPageReader, JsonPageReader,
    MemoryPreferenceStore, NavConfig, NavigationController, NodeRef, PageDocument, PageReader,
    PreferenceStore, Region, SearchOutcome, StoredTheme, ThemeController, ThemeMode, ThemePolicy,
    ThemeSurface,
};
use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::env;
use std::fs;
use std::rc::Rc;

/// Surface whose dark flag can be inspected from the test
#[derive(Clone, Default)]
struct TestSurface {
    dark: Rc<Cell<bool>>,
}

impl ThemeSurface for TestSurface {
    fn is_dark(&self) -> bool {
        self.dark.get()
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark.set(dark);
    }
}

/// Store that can be shared with the controller and read back afterwards
#[derive(Clone, Default)]
struct SharedStore {
    inner: Rc<RefCell<MemoryPreferenceStore>>,
}

impl PreferenceStore for SharedStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.inner.borrow().get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.inner.borrow_mut().set_string(key, value);
    }

    fn flush(&mut self) {
        self.inner.borrow_mut().flush();
    }
}

fn fragment(text: &str, region: &str) -> IndexedFragment {
    IndexedFragment {
        node: NodeRef::root(),
        text: text.to_string(),
        region_label: region.to_string(),
        region_id: region.to_string(),
        score: 0,
    }
}

#[test]
fn test_search_end_to_end() -> Result<()> {
    let index = ContentIndex::from_fragments(vec![
        fragment("Welcome to EduHack", "hero"),
        fragment("Schedule details here", "schedule"),
    ]);

    let outcome = index.search("sched");
    let results = outcome.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].region_id, "schedule");
    assert_eq!(results[0].score, SCORE_CONTAINS + SCORE_PREFIX_BONUS);

    let outcome = index.search("xyz");
    assert!(outcome.is_active());
    assert!(outcome.results().is_empty());

    assert_eq!(index.search("e"), SearchOutcome::Inactive);
    assert_eq!(index.search("  e  "), SearchOutcome::Inactive);

    // The index is not modified by searching
    assert!(index.fragments().iter().all(|f| f.score == 0));
    Ok(())
}

#[test]
fn test_ranking_is_stable_and_capped() -> Result<()> {
    let index = ContentIndex::from_fragments(vec![fragment("cat food", "a"), fragment("category", "b")]);
    let labels: Vec<String> = index.search("cat").results().iter().map(|r| r.region_label.clone()).collect();
    assert_eq!(labels, vec!["a", "b"]);

    let many = ContentIndex::from_fragments((0..20).map(|i| fragment(&format!("item {} of the list", i), "list")));
    let results = many.search("item");
    assert_eq!(results.results().len(), 8);
    assert!(results.results().windows(2).all(|w| w[0].score >= w[1].score));

    assert_eq!(score("Hello World", "world"), SCORE_CONTAINS);
    assert_eq!(score("Hello World", "HELLO"), SCORE_CONTAINS + SCORE_PREFIX_BONUS);
    assert_eq!(score("Hello World", "planet"), 0);
    Ok(())
}

#[test]
fn test_page_file_round_trip() -> Result<()> {
    let test_file = env::temp_dir().join("eduhack_integration_page.json");
    let test_file = test_file.to_str().unwrap();

    // Clean up any existing file
    let _ = fs::remove_file(test_file);

    let json = r##"{
        "title": "Mini Hack",
        "config": { "countdown_target": "2031-05-01T10:00:00", "particle_count": 5 },
        "nav": [ { "label": "Intro", "href": "#intro" } ],
        "root": {
            "kind": "block",
            "children": [
                {
                    "kind": "section",
                    "id": "intro",
                    "children": [
                        { "kind": { "heading": 1 }, "text": "Mini Hack" },
                        { "kind": "paragraph", "text": "Hi" },
                        { "kind": "paragraph", "text": "Hi!" }
                    ]
                },
                {
                    "kind": "block",
                    "children": [
                        { "kind": { "heading": 2 }, "text": "Untitled area" },
                        { "kind": "list_item", "text": "Orphan item" }
                    ]
                }
            ]
        }
    }"##;
    fs::write(test_file, json)?;

    let page = JsonPageReader::new().read(test_file)?;
    assert_eq!(page.title, "Mini Hack");
    assert_eq!(page.config.particle_count, 5);
    assert_eq!(page.config.preference_key, "theme");
    assert_eq!(page.nav[0].target_id(), Some("intro"));

    let index = ContentIndex::build(&page, &page.config.default_region_label);
    let texts: Vec<&str> = index.fragments().iter().map(|f| f.text.as_str()).collect();
    // Headings first, then paragraphs, then list items; "Hi" is too short
    assert_eq!(texts, vec!["Mini Hack", "Untitled area", "Hi!", "Orphan item"]);

    let orphan = &index.fragments()[3];
    assert_eq!(orphan.region_label, "General content");
    assert_eq!(orphan.region_id, "");

    // Serialize and parse back
    let reparsed = parse_page(&serde_json::to_string(&page)?)?;
    assert_eq!(reparsed, page);

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_missing_page_file_is_an_error() {
    let err = JsonPageReader::new().read("/nonexistent/eduhack.json").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/eduhack.json"));
}

#[test]
fn test_demo_page_through_reader() -> Result<()> {
    let page: PageDocument = DemoPageReader::new().read("")?;
    assert_eq!(page, demo_page());

    let index = ContentIndex::build(&page, &page.config.default_region_label);
    let outcome = index.search("welcome");
    assert_eq!(outcome.results()[0].region_id, "hero");
    assert_eq!(outcome.results()[0].score, 150);
    Ok(())
}

#[test]
fn test_theme_preference_lifecycle() -> Result<()> {
    let store = SharedStore::default();
    let surface = TestSurface::default();

    // First visit: nothing stored, follow the OS
    let mut controller = ThemeController::new(
        Box::new(store.clone()),
        Box::new(surface.clone()),
        "theme",
        ThemePolicy::UserToggleable,
    );
    controller.initialize(Some(ThemeMode::Dark));
    assert!(surface.dark.get());
    assert_eq!(controller.stored(), StoredTheme::Unset);
    assert_eq!(store.get_string("theme"), None);

    // OS flips while nothing is stored
    assert!(controller.on_ambient_change(ThemeMode::Light));
    assert!(!surface.dark.get());

    // Explicit choice sticks
    controller.toggle();
    assert_eq!(store.get_string("theme").as_deref(), Some("dark"));
    assert_eq!(store.inner.borrow().flush_count(), 1);
    assert!(!controller.on_ambient_change(ThemeMode::Light));
    assert!(surface.dark.get());

    // Next visit restores the choice regardless of the OS
    let next_surface = TestSurface::default();
    let mut next = ThemeController::new(
        Box::new(store.clone()),
        Box::new(next_surface.clone()),
        "theme",
        ThemePolicy::UserToggleable,
    );
    next.initialize(Some(ThemeMode::Light));
    assert_eq!(next.current(), ThemeMode::Dark);
    assert!(next_surface.dark.get());
    Ok(())
}

#[test]
fn test_countdown_runs_to_zero() -> Result<()> {
    let start = 1_800_000_000_000;
    let target = start + 2 * MS_PER_DAY + 5 * MS_PER_HOUR;

    let first = remaining(target, start);
    assert_eq!(first.time_left.days, 2);
    assert_eq!(first.time_left.hours, 5);

    let mut countdown = Countdown::new(target);
    let mut now = start;
    let mut ticks = 0;
    while countdown.is_running() {
        if countdown.tick(now).is_some() {
            ticks += 1;
        }
        now += 3_600_000;
    }
    assert!(ticks > 50);
    assert!(countdown.reading().expired);
    assert_eq!(countdown.reading().time_left.fields(), [0, 0, 0, 0]);
    Ok(())
}

#[test]
fn test_navigation_with_scroll_spy() -> Result<()> {
    let mut nav = NavigationController::new(NavConfig::default());
    nav.set_layout(
        vec![
            Region::new("hero", 0.0, 700.0),
            Region::new("about", 700.0, 500.0),
            Region::new("faq", 1200.0, 900.0),
        ],
        [
            ("hero".to_string(), 0.0),
            ("about".to_string(), 700.0),
            ("faq".to_string(), 1200.0),
        ],
    );

    assert_eq!(nav.on_scroll(0.0), Some("hero"));
    assert_eq!(nav.on_scroll(650.0), Some("about"));
    assert_eq!(nav.on_scroll(5000.0), Some("about"));

    // A region nested in a later-listed wrapper loses to the wrapper
    nav.set_layout(
        vec![Region::new("faq", 1200.0, 900.0), Region::new("page", 0.0, 3000.0)],
        [("faq".to_string(), 1200.0), ("page".to_string(), 0.0)],
    );
    assert_eq!(nav.on_scroll(1500.0), Some("page"));
    assert_eq!(nav.on_scroll(2950.0), Some("page"));

    // Narrow viewport uses the smaller offset
    nav.toggle_menu();
    assert!(nav.scroll_to_section("faq", 650.0, 400.0, 0.0));
    assert!(!nav.menu().is_open());
    assert_eq!(nav.animate(1.0), Some(1120.0));

    let page = demo_page();
    let sections: Vec<&str> = page.sections().iter().filter_map(|(_, n)| n.non_empty_id()).collect();
    assert_eq!(sections, vec!["hero", "about", "schedule", "prizes", "faq", "contact"]);
    assert!(page.find_by_id("countdown").is_some());
    assert!(page.root.children.iter().any(|c: &ContentNode| c.non_empty_id() == Some("footer")));
    Ok(())
}
