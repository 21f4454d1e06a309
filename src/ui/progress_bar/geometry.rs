// SPDX-License-Identifier: MPL-2.0
//! Pure geometry for the progress bar layers.
//!
//! Everything here maps a time offset and a progress fraction to plain point
//! lists; the canvas layer turns them into paths. Keeping the math free of
//! widget types makes the drawing contracts testable.

use std::f32::consts::{PI, TAU};

/// Sampling step along the liquid surface, in pixels.
const WAVE_SAMPLE_STEP: f32 = 2.0;

/// Wavelengths spanned by the liquid surface across the filled width.
const WAVES_PER_FILL: f32 = 4.0;

/// Smoothstep easing used for fill transitions and the glow pulse.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Maps a wrapping phase in `[0, 1)` to a triangle wave in `[0, 1]`.
#[must_use]
pub fn triangle(phase: f32) -> f32 {
    1.0 - (2.0 * phase.rem_euclid(1.0) - 1.0).abs()
}

/// Width of the filled portion of a track: `fraction * track_width`,
/// with the fraction clamped to `[0, 1]` (NaN maps to empty).
#[must_use]
pub fn fill_width(fraction: f32, track_width: f32) -> f32 {
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0) * track_width
}

/// Closed capsule outline of `width` x `height`, as a point list.
///
/// Both end caps are approximated by `segments` line segments each. Widths
/// below the cap diameter degenerate to a circle.
#[must_use]
pub fn capsule(width: f32, height: f32, segments: usize) -> Vec<(f32, f32)> {
    let radius = height / 2.0;
    let width = width.max(height);
    let segments = segments.max(1);

    let mut points = Vec::with_capacity(2 * segments + 4);
    points.push((radius, 0.0));
    points.push((width - radius, 0.0));

    // Right cap, top to bottom
    for i in 0..=segments {
        let angle = -PI / 2.0 + PI * i as f32 / segments as f32;
        points.push((
            width - radius + radius * angle.cos(),
            radius + radius * angle.sin(),
        ));
    }

    points.push((radius, height));

    // Left cap, bottom to top
    for i in 0..=segments {
        let angle = PI / 2.0 + PI * i as f32 / segments as f32;
        points.push((radius + radius * angle.cos(), radius + radius * angle.sin()));
    }

    points
}

/// Liquid surface polyline across the filled width.
///
/// The surface oscillates around the vertical mid-line with the given
/// amplitude; `offset` in `[0, 1)` scrolls the wave horizontally.
#[must_use]
pub fn wave_surface(offset: f32, fill_width: f32, height: f32, amplitude: f32) -> Vec<(f32, f32)> {
    if fill_width <= 0.0 {
        return Vec::new();
    }

    let mid = height / 2.0;
    let wave_length = (fill_width / WAVES_PER_FILL).max(f32::EPSILON);
    let mut points = Vec::new();

    let mut x = 0.0;
    while x < fill_width {
        let relative = x / wave_length;
        let y = mid + ((relative + offset * 2.0) * TAU).sin() * amplitude;
        points.push((x, y));
        x += WAVE_SAMPLE_STEP;
    }
    points.push((fill_width, mid));

    points
}

/// One electric strand between the track ends.
///
/// `frequency` full sine half-periods span the width; `offset` in `[0, 1)`
/// travels the discharge along the strand.
#[must_use]
pub fn electric_polyline(
    width: f32,
    height: f32,
    amplitude: f32,
    frequency: f32,
    offset: f32,
    steps: usize,
) -> Vec<(f32, f32)> {
    let mid = height / 2.0;
    let steps = steps.max(1);

    (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            let x = width * t;
            let y = mid + (t * PI * frequency + offset * TAU).sin() * amplitude;
            (x, y)
        })
        .collect()
}

/// Horizontal offset of the traveling energy streak within the fill.
#[must_use]
pub fn streak_offset(wave_offset: f32, fill_width: f32) -> f32 {
    wave_offset * 0.5 * fill_width - fill_width * 0.1
}
