use chrono::{DateTime, TimeZone, Utc};
use responsive_panel::store::{BOOKMARKS_KEY, THEME_KEY};
use responsive_panel::{
    BookmarkList, Config, Effect, Event, MemoryStore, PanelController, PanelSize, SizeMode, Store,
    Theme, ThemeMode, Viewport,
};

fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, minute, 0).unwrap()
}

fn controller(store: MemoryStore) -> PanelController<MemoryStore> {
    let mut config = Config::embedded_default().unwrap();
    config.home = None;
    PanelController::new(store, config, Theme::Light)
}

fn bookmark(controller: &mut PanelController<MemoryStore>, address: &str, minute: u32) {
    controller.handle_at(Event::LoadAddress(address.to_owned()), at(minute));
    controller.handle_at(Event::AddBookmark, at(minute));
}

fn urls(controller: &PanelController<MemoryStore>) -> Vec<&str> {
    controller.bookmarks().iter().map(|b| b.url.as_str()).collect()
}

#[test]
fn adding_same_address_twice_keeps_one_record() {
    let mut controller = controller(MemoryStore::new());

    bookmark(&mut controller, "https://example.com", 0);
    bookmark(&mut controller, "https://example.com", 1);

    assert_eq!(urls(&controller), ["https://example.com"]);
}

#[test]
fn first_bookmark_on_empty_store() {
    let mut controller = controller(MemoryStore::new());

    bookmark(&mut controller, "example.com", 0);

    let list = controller.bookmarks();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "example.com");
    assert_eq!(list[0].url, "https://example.com");
    assert_eq!(list[0].added, at(0));
}

#[test]
fn remove_shifts_later_indices_down() {
    let mut controller = controller(MemoryStore::new());
    for (minute, host) in ["d.example", "c.example", "b.example", "a.example"]
        .into_iter()
        .enumerate()
    {
        bookmark(&mut controller, host, minute as u32);
    }
    assert_eq!(
        urls(&controller),
        [
            "https://a.example",
            "https://b.example",
            "https://c.example",
            "https://d.example"
        ]
    );

    controller.handle(Event::RemoveBookmark(1));

    assert_eq!(
        urls(&controller),
        ["https://a.example", "https://c.example", "https://d.example"]
    );
}

#[test]
fn removing_older_of_two_leaves_newest() {
    let mut controller = controller(MemoryStore::new());
    bookmark(&mut controller, "a.example", 0);
    bookmark(&mut controller, "b.example", 1);

    controller.handle(Event::RemoveBookmark(1));

    assert_eq!(urls(&controller), ["https://b.example"]);
}

#[test]
fn bookmarks_survive_rehydration() {
    let mut first = controller(MemoryStore::new());
    bookmark(&mut first, "a.example", 0);
    bookmark(&mut first, "https://www.b.example/page", 1);
    bookmark(&mut first, "c.example", 2);
    first.handle(Event::RemoveBookmark(2));
    let before = first.bookmarks().to_vec();

    let store = first.into_store();
    assert!(store.get(BOOKMARKS_KEY).is_some());
    let second = controller(store);

    assert_eq!(second.bookmarks(), before.as_slice());
}

#[test]
fn rows_are_rebuilt_after_each_mutation() {
    let mut controller = controller(MemoryStore::new());
    assert!(matches!(
        BookmarkList::build(controller.bookmarks()),
        BookmarkList::Placeholder(_)
    ));

    bookmark(&mut controller, "a.example", 0);
    bookmark(&mut controller, "b.example", 1);
    let effects = controller.handle(Event::RemoveBookmark(0));
    assert!(effects.contains(&Effect::RenderBookmarks));

    let BookmarkList::Rows(rows) = BookmarkList::build(controller.bookmarks()) else {
        panic!("expected rows");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].index, 0);
    assert_eq!(rows[0].title, "a.example");
}

#[test]
fn full_preset_returns_to_responsive() {
    let mut controller = controller(MemoryStore::new());
    let viewport = Viewport {
        width: 1000.0,
        height: 900.0,
        panel_top: 120.0,
    };
    controller.handle(Event::ViewportChanged(viewport));

    let custom = controller.handle(Event::SelectPreset(3));
    assert_eq!(
        custom,
        vec![Effect::ResizePanel(PanelSize {
            width: 375.0,
            height: 667.0
        })]
    );
    assert!(
        controller
            .handle(Event::ViewportChanged(Viewport {
                width: 1200.0,
                ..viewport
            }))
            .is_empty()
    );

    let full = controller.handle(Event::SelectPreset(0));

    assert_eq!(controller.size_mode(), SizeMode::Responsive);
    assert_eq!(controller.sizing().active_preset(), 0);
    assert_eq!(
        full,
        vec![Effect::ResizePanel(PanelSize {
            width: 1200.0,
            height: 675.0
        })]
    );
}

#[test]
fn dark_then_auto_resolves_to_system() {
    let mut controller = controller(MemoryStore::new());
    controller.handle(Event::SystemThemeChanged(Theme::Dark));

    controller.handle(Event::SelectTheme(ThemeMode::Dark));
    assert_eq!(controller.store().get(THEME_KEY).as_deref(), Some("dark"));

    controller.handle(Event::SystemThemeChanged(Theme::Light));
    let effects = controller.handle(Event::SelectTheme(ThemeMode::Auto));

    assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Light)]);
    assert_eq!(controller.theme_mode(), ThemeMode::Auto);
    assert_eq!(controller.store().get(THEME_KEY), None);
}

#[test]
fn stored_theme_is_restored() {
    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "dark".to_owned());

    let mut controller = controller(store);

    assert_eq!(controller.theme_mode(), ThemeMode::Dark);
    assert_eq!(controller.startup()[0], Effect::ApplyTheme(Theme::Dark));
}
