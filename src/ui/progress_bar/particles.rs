// SPDX-License-Identifier: MPL-2.0
//! Energy particles scattered over the progress track.
//!
//! Particles are generated once, in normalized track coordinates, and never
//! move horizontally: one becomes visible when the liquid fill passes its
//! position, with only a small vertical wobble afterwards.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::f32::consts::TAU;

/// Vertical wobble amplitude, in pixels.
const WOBBLE_AMPLITUDE: f32 = 2.0;

/// Colors a particle may take.
pub const PARTICLE_COLORS: [Color; 4] = [
    palette::NEON_CYAN,
    palette::NEON_MAGENTA,
    palette::NEON_AMBER,
    palette::NEON_SPRING,
];

/// A single decorative particle, in normalized track coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyParticle {
    /// Horizontal position as a fraction of the track width.
    pub x: f32,
    /// Vertical position as a fraction of the track height.
    pub y: f32,
    /// Diameter in pixels.
    pub size: f32,
    pub color: Color,
    pub opacity: f32,
    pub scale: f32,
    /// Wobble phase offset in radians.
    pub phase: f32,
}

/// Linear congruential generator for particle parameters.
///
/// Deterministic, so a given seed always produces the same particle field;
/// good enough for cosmetics and keeps the crate free of a PRNG dependency.
#[derive(Debug, Clone, Copy)]
pub struct Lcg(u32);

impl Lcg {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }

    /// Next sample in `[0, 1)`.
    pub fn next(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(1_103_515_245).wrapping_add(12345);
        (self.0 >> 16) as f32 / 65536.0
    }

    /// Next sample in `[lo, hi)`.
    pub fn next_in(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next() * (hi - lo)
    }
}

/// Generates the particle field for a track.
#[must_use]
pub fn generate(count: usize, seed: u32) -> Vec<EnergyParticle> {
    let mut rng = Lcg::new(seed);
    (0..count)
        .map(|_| {
            let color_index = (rng.next() * PARTICLE_COLORS.len() as f32) as usize;
            EnergyParticle {
                x: rng.next(),
                y: rng.next_in(0.1, 0.9),
                size: rng.next_in(2.0, 6.0),
                color: PARTICLE_COLORS[color_index.min(PARTICLE_COLORS.len() - 1)],
                opacity: rng.next_in(0.4, 0.9),
                scale: rng.next_in(0.8, 1.2),
                phase: rng.next_in(0.0, TAU),
            }
        })
        .collect()
}

/// Particles inside the current fill: `x <= fill_fraction`.
pub fn visible(
    particles: &[EnergyParticle],
    fill_fraction: f32,
) -> impl Iterator<Item = &EnergyParticle> {
    particles
        .iter()
        .filter(move |particle| particle.x <= fill_fraction)
}

/// Vertical wobble of a particle at the given wave offset.
#[must_use]
pub fn wobble(wave_offset: f32, phase: f32) -> f32 {
    (wave_offset * TAU + phase).sin() * WOBBLE_AMPLITUDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(20, 12345), generate(20, 12345));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generate(20, 1), generate(20, 2));
    }

    #[test]
    fn generated_parameters_are_in_declared_ranges() {
        for particle in generate(64, 12345) {
            assert!((0.0..1.0).contains(&particle.x));
            assert!((0.1..0.9).contains(&particle.y));
            assert!((2.0..6.0).contains(&particle.size));
            assert!((0.4..0.9).contains(&particle.opacity));
            assert!((0.8..1.2).contains(&particle.scale));
            assert!((0.0..TAU).contains(&particle.phase));
            assert!(PARTICLE_COLORS.contains(&particle.color));
        }
    }

    #[test]
    fn visibility_follows_the_fill() {
        let particles = generate(64, 12345);

        assert_eq!(visible(&particles, 0.0).count(), 0);
        assert_eq!(visible(&particles, 1.0).count(), particles.len());

        for particle in visible(&particles, 0.5) {
            assert!(particle.x <= 0.5);
        }

        // Visibility only grows as the fill advances
        let half = visible(&particles, 0.5).count();
        let more = visible(&particles, 0.75).count();
        assert!(more >= half);
    }

    #[test]
    fn wobble_is_bounded() {
        for i in 0..100 {
            let offset = i as f32 / 100.0;
            assert!(wobble(offset, 1.3).abs() <= WOBBLE_AMPLITUDE + 1e-4);
        }
    }

    #[test]
    fn requested_count_is_generated() {
        assert_eq!(generate(0, 7).len(), 0);
        assert_eq!(generate(33, 7).len(), 33);
    }
}
