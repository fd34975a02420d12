use std::f64::consts::TAU;

/// Multiplier on the element size for the arc length between neighbours.
const SPACING: f64 = 1.1;
/// Smallest angular step, so the core of the spiral does not bunch up.
const MIN_STEP: f64 = 0.2;
/// Radial growth per full turn, as a fraction of the element size.
const GROWTH: f64 = 0.8;
/// Extra radial push while still inside the first element's footprint.
const CORE_NUDGE: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralSlot {
    pub radius: f64,
    pub angle: f64,
}

/// Lay out evenly spaced elements of `element_size` on an outward spiral, stopping before
/// `max_radius`.
///
/// Each step advances the angle by the element's share of the current circumference (at least
/// `MIN_STEP`) and the radius by the matching fraction of one turn's growth.
pub fn spiral_layout(max_radius: f64, element_size: f64) -> Vec<SpiralSlot> {
    let mut out = Vec::new();
    if !max_radius.is_finite() || !element_size.is_finite() || element_size <= 0.0 {
        return out;
    }

    let mut radius = 0.0f64;
    let mut angle = 0.0f64;
    while radius < max_radius {
        out.push(SpiralSlot { radius, angle });

        let circumference = TAU * radius;
        let step = element_size * SPACING / if circumference > 0.0 { circumference } else { 1.0 };
        angle += step.max(MIN_STEP);
        radius += element_size * GROWTH * (step / TAU);
        if radius < element_size {
            radius += CORE_NUDGE;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/texture/spiral.rs"]
mod tests;
