pub mod clock;
pub mod dataset;
pub mod era;
pub mod event;
pub mod types;

pub use clock::{ClockScale, HOUR_ANCHORS, HourAnchor};
pub use era::{Era, EraTable};
pub use event::{EventList, GeoEvent};
pub use types::{RadialGeometry, Viewport};
