//! The fixed geological datasets.
//!
//! Both tables are immutable constants compiled into the crate; there is
//! no external configuration surface for them. Earth's ~4.54 billion
//! years are compressed onto a conceptual 24-hour day.

use crate::core::era::{Era, EraTable};
use crate::core::event::{EventList, GeoEvent};
use crate::error::ClockResult;
use crate::render::Color;

/// Geological eras covering the full day, Hadean through Quaternary.
pub const GEOLOGICAL_ERAS: [Era; 7] = [
    Era::new("Hadean", Color::from_rgb8(0xff, 0x41, 0x36), 0.0, 0.5),
    Era::new("Archaean", Color::from_rgb8(0xff, 0x85, 0x1b), 0.5, 14.5),
    Era::new("Proterozoic", Color::from_rgb8(0xff, 0xdc, 0x00), 14.5, 23.0),
    Era::new("Paleozoic", Color::from_rgb8(0x2e, 0xcc, 0x40), 23.0, 23.544),
    Era::new("Mesozoic", Color::from_rgb8(0x39, 0xcc, 0xcc), 23.544, 23.854),
    Era::new("Cenozoic", Color::from_rgb8(0x00, 0x74, 0xd9), 23.854, 23.9978),
    Era::new(
        "Quaternary",
        Color::from_rgb8(0xb1, 0x0d, 0xc9),
        23.9978,
        24.0,
    ),
];

/// Point events overlaid on the era pie, in chronological order.
pub const GEOLOGICAL_EVENTS: [GeoEvent; 15] = [
    GeoEvent::new(
        "Formation of Earth",
        Color::from_rgb8(0xff, 0x41, 0x36),
        0.0,
        "Formation of Earth",
    ),
    GeoEvent::new(
        "Formation of the Moon",
        Color::from_rgb8(0xff, 0x85, 0x1b),
        0.5,
        "Formation of the Moon",
    ),
    GeoEvent::new(
        "Formation of First Crust and Oceans",
        Color::from_rgb8(0xff, 0xdc, 0x00),
        1.2,
        "Formation of First Crust and Oceans",
    ),
    GeoEvent::new(
        "First Evidence of Life",
        Color::from_rgb8(0x2e, 0xcc, 0x40),
        4.4,
        "First Evidence of Life",
    ),
    GeoEvent::new(
        "Photosynthesis and Oxygenation",
        Color::from_rgb8(0x39, 0xcc, 0xcc),
        8.0,
        "Photosynthesis and Oxygenation",
    ),
    GeoEvent::new(
        "Eukaryotic Cells Appear",
        Color::from_rgb8(0x00, 0x74, 0xd9),
        16.0,
        "Eukaryotic Cells Appear",
    ),
    GeoEvent::new(
        "Cambrian Explosion",
        Color::from_rgb8(0xb1, 0x0d, 0xc9),
        21.42,
        "Cambrian Explosion",
    ),
    GeoEvent::new(
        "Ordovician-Silurian Extinction",
        Color::from_rgb8(0x85, 0x14, 0x4b),
        21.85,
        "Ordovician-Silurian Extinction",
    ),
    GeoEvent::new(
        "Age of Fishes",
        Color::from_rgb8(0xff, 0x85, 0x1b),
        22.25,
        "Age of Fishes",
    ),
    GeoEvent::new(
        "Permian-Triassic Extinction",
        Color::from_rgb8(0xff, 0x41, 0x36),
        22.96,
        "Permian-Triassic Extinction",
    ),
    GeoEvent::new(
        "Mesozoic Era",
        Color::from_rgb8(0x39, 0xcc, 0xcc),
        23.0,
        "Mesozoic Era",
    ),
    GeoEvent::new(
        "Cretaceous-Paleogene Extinction",
        Color::from_rgb8(0x2e, 0xcc, 0x40),
        23.66,
        "Cretaceous-Paleogene Extinction",
    ),
    GeoEvent::new(
        "Neogene Period",
        Color::from_rgb8(0xff, 0xdc, 0x00),
        23.93,
        "Neogene Period",
    ),
    GeoEvent::new(
        "Quaternary Period",
        Color::from_rgb8(0x00, 0x74, 0xd9),
        23.97,
        "Quaternary Period",
    ),
    GeoEvent::new(
        "Holocene Epoch",
        Color::from_rgb8(0xb1, 0x0d, 0xc9),
        23.999,
        "Holocene Epoch",
    ),
];

/// Validated era table for the fixed dataset.
pub fn era_table() -> ClockResult<EraTable> {
    EraTable::new(GEOLOGICAL_ERAS.to_vec())
}

/// Validated event list for the fixed dataset.
pub fn event_list() -> ClockResult<EventList> {
    EventList::new(GEOLOGICAL_EVENTS.to_vec())
}
