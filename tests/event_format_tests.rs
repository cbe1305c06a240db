use geoclock_rs::ClockError;
use geoclock_rs::core::{EventList, GeoEvent, dataset};
use geoclock_rs::render::Color;

#[test]
fn cambrian_explosion_formats_as_reference() {
    let events = dataset::event_list().expect("valid event list");
    let cambrian = events
        .events()
        .iter()
        .find(|event| event.name == "Cambrian Explosion")
        .expect("cambrian present");

    // 0.42 * 60 = 25.2 rounds down to 25 minutes.
    assert_eq!(cambrian.clock_label(), "21 hours and 25 minutes");
    assert_eq!(
        cambrian.list_label(),
        "Cambrian Explosion: 21 hours and 25 minutes"
    );
}

#[test]
fn whole_hour_event_has_zero_minutes() {
    let events = dataset::event_list().expect("valid event list");
    let oxygenation = events
        .events()
        .iter()
        .find(|event| event.name == "Photosynthesis and Oxygenation")
        .expect("oxygenation present");
    assert_eq!(oxygenation.clock_label(), "8 hours and 0 minutes");
}

#[test]
fn holocene_keeps_the_reference_sixty_minute_artifact() {
    // 23.999 h: 0.999 * 60 = 59.94 rounds to 60, exactly as the reference
    // displays it. The rule is pinned, not "fixed".
    let events = dataset::event_list().expect("valid event list");
    let holocene = events
        .events()
        .iter()
        .find(|event| event.name == "Holocene Epoch")
        .expect("holocene present");
    assert_eq!(holocene.clock_label(), "23 hours and 60 minutes");
}

#[test]
fn dataset_has_fifteen_events_in_order() {
    let events = dataset::event_list().expect("valid event list");
    assert_eq!(events.len(), 15);
    assert_eq!(events.events()[0].name, "Formation of Earth");
    assert_eq!(events.events()[14].name, "Holocene Epoch");

    // Chronological ordering is expected of the shipped dataset even
    // though EventList does not enforce it for arbitrary inputs.
    for pair in events.events().windows(2) {
        assert!(pair[0].time_hours <= pair[1].time_hours);
    }
}

#[test]
fn out_of_range_event_is_rejected() {
    let events = vec![GeoEvent::new(
        "tomorrow",
        Color::from_rgb8(0x00, 0x00, 0xff),
        24.5,
        "tomorrow",
    )];
    let err = EventList::new(events).expect_err("out of range must fail");
    assert!(matches!(err, ClockError::InvalidDataset(_)));
}

#[test]
fn unordered_events_are_allowed() {
    let events = vec![
        GeoEvent::new("late", Color::from_rgb8(0x00, 0x00, 0xff), 20.0, "late"),
        GeoEvent::new("early", Color::from_rgb8(0x00, 0xff, 0x00), 2.0, "early"),
    ];
    let list = EventList::new(events).expect("unordered list is valid");
    assert_eq!(list.len(), 2);
}
