use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::clock::ClockScale;
use crate::core::{EraTable, RadialGeometry};
use crate::error::ClockResult;
use crate::interaction::PointerClick;
use crate::render::Color;

/// One pie wedge derived from one era.
///
/// Angular span uses the offset clock convention, so the first wedge
/// starts at the top of the circle and spans proceed clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeSlice {
    pub index: usize,
    pub value_hours: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Color,
}

type WedgeBuf = SmallVec<[WedgeSlice; 8]>;

/// Precomputed wedge set for the era table.
#[derive(Debug, Clone, PartialEq)]
pub struct PieModel {
    slices: WedgeBuf,
}

impl PieModel {
    /// Builds one wedge per era; wedge magnitude is `end − start`.
    ///
    /// The table sums to 24 hours, so the angular spans tile the full
    /// circle without normalization.
    pub fn from_eras(eras: &EraTable, scale: ClockScale) -> ClockResult<Self> {
        let mut slices = WedgeBuf::with_capacity(eras.len());
        for (index, era) in eras.eras().iter().enumerate() {
            slices.push(WedgeSlice {
                index,
                value_hours: era.duration_hours(),
                start_angle: scale.angle_of(era.start_hours)?,
                end_angle: scale.angle_of(era.end_hours)?,
                color: era.color,
            });
        }
        Ok(Self { slices })
    }

    #[must_use]
    pub fn slices(&self) -> &[WedgeSlice] {
        &self.slices
    }

    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value_hours).sum()
    }

    /// Resolves a click to the wedge under the cursor.
    ///
    /// Mirrors a nearest-with-intersection hit mode: the pointer must lie
    /// inside the pie disc. The wedge whose half-open angular span
    /// contains the pointer angle wins (boundary angles belong to the
    /// later wedge); rounding cases that fall between spans resolve to
    /// the nearest span edge.
    #[must_use]
    pub fn wedge_at(&self, click: PointerClick, geometry: RadialGeometry) -> Option<usize> {
        if !click.is_finite() || !geometry.contains(click.x, click.y) {
            return None;
        }

        let scale = ClockScale::new();
        let raw = (click.y - geometry.center_y).atan2(click.x - geometry.center_x);
        let pointer_angle = scale.normalize_pointer_angle(raw);

        if let Some(slice) = self
            .slices
            .iter()
            .find(|slice| pointer_angle >= slice.start_angle && pointer_angle < slice.end_angle)
        {
            return Some(slice.index);
        }

        self.slices
            .iter()
            .min_by_key(|slice| OrderedFloat(edge_distance(slice, pointer_angle)))
            .map(|slice| slice.index)
    }
}

fn edge_distance(slice: &WedgeSlice, angle: f64) -> f64 {
    (angle - slice.start_angle)
        .abs()
        .min((angle - slice.end_angle).abs())
}
