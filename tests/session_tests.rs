//! Session integration tests - the engines wired together as a host would

use vitrina::host::{FormStatus, HeroFrame, LoadingFrame, NotificationPhase, Session};
use vitrina::types::{ElementKind, RevealAction, RevealDecision, SectionExtent, SectionId};
use vitrina::{CoreError, EngineConfig, Theme};

fn page() -> Session {
    let mut session = Session::new(EngineConfig::default(), Theme::Dark).unwrap();
    session
        .set_layout(vec![
            SectionExtent::new("home", 0.0, 900.0).unwrap(),
            SectionExtent::new("about", 900.0, 700.0).unwrap(),
            SectionExtent::new("contact", 1600.0, 600.0).unwrap(),
        ])
        .unwrap();
    session
}

#[test]
fn scroll_highlights_section_slightly_early() {
    let mut session = page();

    // 0 + 70 header + 100 lookahead
    let frame = session.on_scroll(0.0);
    assert_eq!(frame.active_section, Some(SectionId::new("home")));
    assert!(frame.active_changed);
    assert!(!frame.header_scrolled);

    // 730 + 170 = 900, the first pixel of "about"
    let frame = session.on_scroll(730.0);
    assert_eq!(frame.active_section, Some(SectionId::new("about")));
    assert!(frame.active_changed);
    assert!(frame.header_scrolled);

    let frame = session.on_scroll(735.0);
    assert!(!frame.active_changed);
}

#[test]
fn highlight_is_kept_below_the_last_section() {
    let mut session = page();
    session.on_scroll(1500.0);
    assert_eq!(session.active_section(), Some(&SectionId::new("contact")));

    let frame = session.on_scroll(5000.0);
    assert_eq!(frame.active_section, Some(SectionId::new("contact")));
    assert!(!frame.active_changed);
}

#[test]
fn debounced_scroll_uses_latest_sample() {
    let mut session = page();
    session.queue_scroll(0, 0.0);
    session.queue_scroll(5, 400.0);
    session.queue_scroll(8, 800.0);

    assert!(session.poll_scroll(17).is_none());
    let frame = session.poll_scroll(18).unwrap();
    assert_eq!(frame.active_section, Some(SectionId::new("about")));
    assert!(session.poll_scroll(100).is_none());
}

#[test]
fn duplicate_or_negative_extents_are_rejected() {
    let mut session = page();
    let err = session
        .set_layout(vec![
            SectionExtent::new("a", 0.0, 10.0).unwrap(),
            SectionExtent::new("#a", 10.0, 10.0).unwrap(),
        ])
        .unwrap_err();
    assert_eq!(err, CoreError::duplicate_section("a"));

    assert!(matches!(
        SectionExtent::new("b", 0.0, -1.0),
        Err(CoreError::InvalidExtent { .. })
    ));
    assert!(SectionExtent::new("c", f64::NAN, 1.0).is_err());

    // The previous snapshot survives a rejected update
    assert_eq!(session.layout().len(), 3);
}

#[test]
fn navigation_scrolls_below_header_and_closes_menu() {
    let mut session = page();
    assert!(session.toggle_nav());

    let frame = session.navigate_to(&SectionId::new("#about")).unwrap();
    assert_eq!(frame.scroll_to, 830.0);
    assert!(frame.nav_closed);
    assert!(!session.is_nav_open());
    assert_eq!(session.active_section(), Some(&SectionId::new("about")));

    assert!(session.navigate_to(&SectionId::new("missing")).is_none());
}

#[test]
fn measured_header_height_shifts_targets() {
    let mut session = page();
    session.set_header_height(100.0);
    let frame = session.navigate_to(&SectionId::new("contact")).unwrap();
    assert_eq!(frame.scroll_to, 1500.0);
}

#[test]
fn wide_resize_closes_menu() {
    let mut session = page();
    session.toggle_nav();

    session.queue_resize(0, 500.0);
    let frame = session.poll_resize(250).unwrap();
    assert!(!frame.nav_closed);
    assert!(session.is_nav_open());

    session.queue_resize(300, 1024.0);
    assert!(session.poll_resize(400).is_none());
    let frame = session.poll_resize(550).unwrap();
    assert!(frame.nav_closed);
    assert!(!session.is_nav_open());
}

#[test]
fn intersection_reveals_each_target_once() {
    let mut session = page();
    let card = session.register_target(ElementKind::Generic);
    let skills = session.register_target(ElementKind::skill_group(vec![90.0, 80.0, 70.0]));

    assert!(session.on_intersection(card, false).unwrap().is_noop());
    assert!(!session.target(card).unwrap().has_fired_once());

    assert_eq!(
        session.on_intersection(card, true).unwrap(),
        RevealDecision::Reveal(RevealAction::FadeIn)
    );
    assert!(session.on_intersection(card, true).unwrap().is_noop());

    let decision = session.on_intersection(skills, true).unwrap();
    assert_eq!(decision.action().map(RevealAction::len), Some(3));
    assert!(session.on_intersection(skills, true).unwrap().is_noop());
}

#[test]
fn unknown_target_is_an_error() {
    let mut session = page();
    let mut other = page();
    let foreign = other.register_target(ElementKind::Generic);
    assert_eq!(
        session.on_intersection(foreign, true),
        Err(CoreError::UnknownTarget { id: 0 })
    );
}

#[test]
fn hero_followups_fire_counters_and_avatar_stats() {
    let mut session = page();
    let stats = session.register_hero_stats(vec![120, 50]);
    let avatar = session.register_avatar_stats(vec![95.0, 85.0, 75.0]);

    let followups = session.hero_followups();
    assert_eq!(followups.len(), 2);
    assert_eq!((followups[0].delay_ms, followups[0].target), (1000, stats));
    assert_eq!((followups[1].delay_ms, followups[1].target), (1500, avatar));

    match session.on_intersection(avatar, true).unwrap() {
        RevealDecision::Reveal(RevealAction::SkillBars(bars)) => {
            let delays: Vec<u64> = bars.iter().map(|bar| bar.start_delay_ms).collect();
            assert_eq!(delays, vec![0, 300, 600]);
        }
        other => panic!("Expected avatar bars, got {:?}", other),
    }

    match session.on_intersection(stats, true).unwrap() {
        RevealDecision::Reveal(RevealAction::Counters(counters)) => {
            assert_eq!(counters[0].values().last(), Some(120));
            assert_eq!(counters[1].values().last(), Some(50));
        }
        other => panic!("Expected counters, got {:?}", other),
    }
}

#[test]
fn hero_sequence_finishes_and_then_is_exhausted() {
    let mut session = page();
    let mut shown = 0;
    while let HeroFrame::Show { .. } = session.advance_hero().unwrap() {
        shown += 1;
    }
    assert_eq!(shown, 6);
    assert!(session.advance_hero().is_err());
}

#[test]
fn loading_frames_follow_original_timings() {
    let mut session = page();
    assert!(session.should_spawn_particle());
    assert_eq!(session.particle_interval_ms(), 200);

    let first = session.advance_loading().unwrap();
    assert_eq!(
        first,
        LoadingFrame::Progress {
            index: 0,
            percent: 15.0,
            status: "Cargando interfaz...".to_string(),
            next_delay_ms: 300,
        }
    );
    for _ in 0..5 {
        session.advance_loading().unwrap();
    }
    assert_eq!(
        session.advance_loading().unwrap(),
        LoadingFrame::Complete { next_delay_ms: 800 }
    );
    assert_eq!(
        session.advance_loading().unwrap(),
        LoadingFrame::FadeOut { next_delay_ms: 500 }
    );
    assert!(session.is_loading());
    assert_eq!(session.advance_loading().unwrap(), LoadingFrame::Hidden);
    assert!(!session.is_loading());
}

#[test]
fn typewriter_cycles_through_configured_messages() {
    let json = r#"{ "typewriter": { "messages": ["ab", "c"] } }"#;
    let config = EngineConfig::from_json(json).unwrap();
    let mut session = Session::new(config, Theme::Dark).unwrap();

    let frames: Vec<(String, u64)> = (0..6)
        .map(|_| {
            let frame = session.tick_typewriter();
            (frame.rendered, frame.next_delay_ms)
        })
        .collect();

    assert_eq!(
        frames,
        vec![
            ("a".to_string(), 100),
            ("ab".to_string(), 2000),
            ("a".to_string(), 50),
            ("".to_string(), 500),
            ("c".to_string(), 2000),
            ("".to_string(), 500),
        ]
    );
    assert_eq!(session.typewriter().message_index(), 0);
}

#[test]
fn empty_message_list_is_rejected() {
    let config = EngineConfig::from_json(r#"{ "typewriter": { "messages": [] } }"#).unwrap();
    assert!(matches!(
        Session::new(config, Theme::Dark),
        Err(CoreError::EmptyMessages)
    ));
}

#[test]
fn keys_drive_menu_accessibility_and_easter_egg() {
    let mut session = page();
    session.toggle_nav();

    let outcome = session.on_key("Escape", "Escape");
    assert!(outcome.nav_closed);
    assert_eq!(outcome.easter_egg_ms, None);

    session.on_key("Tab", "Tab");
    assert!(session.accessibility().keyboard_navigation);
    session.on_mouse_down();
    assert!(!session.accessibility().keyboard_navigation);

    let codes = [
        "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
        "ArrowRight", "KeyB", "KeyA",
    ];
    let fired: Vec<Option<u64>> = codes
        .iter()
        .map(|code| session.on_key(code, code).easter_egg_ms)
        .collect();
    assert_eq!(fired.iter().filter(|f| f.is_some()).count(), 1);
    assert_eq!(fired[9], Some(5000));
}

#[test]
fn accessibility_preferences_are_recorded() {
    let mut session = page();
    session.on_key("Tab", "Tab");
    session.set_accessibility(true, false);
    let flags = session.accessibility();
    assert!(flags.reduced_motion);
    assert!(!flags.high_contrast);
    assert!(flags.keyboard_navigation);
}

#[test]
fn outside_click_closes_menu() {
    let mut session = page();
    assert!(!session.on_outside_click());
    session.toggle_nav();
    assert!(session.on_outside_click());
}

#[test]
fn theme_toggle_flips_between_dark_and_light() {
    let mut session = page();
    assert_eq!(session.toggle_theme(), Theme::Light);
    assert_eq!(session.toggle_theme(), Theme::Dark);
}

#[test]
fn contact_form_simulates_submission() {
    let mut session = page();
    assert!(session.submit_form(1000));
    assert_eq!(session.form_status(), &FormStatus::Sending);
    assert!(session.poll_form(2999).is_none());
    assert!(matches!(session.poll_form(3000), Some(FormStatus::Success(_))));

    assert!(session.submit_form(4000));
    assert!(session.fail_form(4100, "simulated outage"));
    assert!(matches!(session.form_status(), FormStatus::Error(_)));
}

#[test]
fn easter_egg_duration_follows_config() {
    let mut config = EngineConfig::default();
    config.effects.easter_egg_ms = 1200;
    let mut session = Session::new(config, Theme::Dark).unwrap();

    let codes = [
        "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
        "ArrowRight", "KeyB", "KeyA",
    ];
    let last = codes.iter().map(|code| session.on_key(code, code)).last().unwrap();
    assert_eq!(last.easter_egg_ms, Some(1200));
}

#[test]
fn slow_page_load_is_flagged() {
    let session = page();
    assert!(!session.report_load_time(1200));
    assert!(!session.report_load_time(3000));
    assert!(session.report_load_time(3001));
}

#[test]
fn shown_message_runs_its_timeline() {
    let mut session = page();
    session.show_message("Copiado", None, 0);
    assert_eq!(session.notifications()[0].kind, "info");

    let phases: Vec<Vec<NotificationPhase>> = [100, 3000, 3300]
        .iter()
        .map(|&now| {
            session
                .poll_notifications(now)
                .iter()
                .map(|notification| notification.phase)
                .collect()
        })
        .collect();
    assert_eq!(
        phases,
        vec![
            vec![NotificationPhase::Visible],
            vec![NotificationPhase::Leaving],
            vec![NotificationPhase::Removed],
        ]
    );
    assert!(session.notifications().is_empty());
}
