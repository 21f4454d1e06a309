// SPDX-License-Identifier: MPL-2.0
//! Layered animated progress bar: dark track, liquid fill with a wavy
//! surface, traveling energy streak, particles, electric strands, and a
//! pulsing plasma border.
//!
//! The only numeric contract is the fill: its width equals
//! `fraction * track_width` once the short easing transition settles. All
//! other layers run on independent, non-terminating clocks that never gate
//! or alter the reported progress.

pub mod geometry;
pub mod particles;

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use particles::EnergyParticle;
use std::fmt;

/// Duration of the eased fill transition.
pub const FILL_EASE_SECS: f32 = 0.4;

/// Period of the wave offset clock.
const WAVE_PERIOD_SECS: f32 = 2.0;

/// Period of the electric discharge clock.
const ELECTRIC_PERIOD_SECS: f32 = 0.8;

/// One sweep of the plasma glow; a full autoreverse cycle is two sweeps.
const GLOW_SWEEP_SECS: f32 = 1.5;

/// Lower bound of the plasma glow opacity.
const GLOW_MIN: f32 = 0.5;

/// Amplitude of the liquid surface, in pixels.
const WAVE_AMPLITUDE: f32 = 3.0;

/// Line segments per capsule end cap.
const CAP_SEGMENTS: usize = 16;

/// Sample count per electric strand.
const ELECTRIC_STEPS: usize = 50;

/// Number of electric strands.
const ELECTRIC_STRANDS: usize = 3;

/// Seed for the particle field.
const PARTICLE_SEED: u32 = 0x00F0_51A7;

/// Spectrum bands suggesting the leading-to-trailing fill gradient.
const FILL_BANDS: [Color; 5] = [
    palette::NEON_CYAN,
    palette::NEON_AZURE,
    palette::NEON_VIOLET,
    palette::NEON_ROSE,
    palette::NEON_EMBER,
];

/// Upper bound on a single animation step, so a stalled event loop does not
/// teleport the transition.
const MAX_FRAME_SECS: f32 = 0.1;

/// Eased interpolation from the previously displayed fill to a new target.
#[derive(Debug, Clone, Copy)]
struct FillTransition {
    from: f32,
    target: f32,
    elapsed: f32,
}

impl Default for FillTransition {
    fn default() -> Self {
        Self {
            from: 0.0,
            target: 0.0,
            elapsed: FILL_EASE_SECS,
        }
    }
}

impl FillTransition {
    fn set_target(&mut self, fraction: f32) {
        if (fraction - self.target).abs() <= f32::EPSILON {
            return;
        }
        self.from = self.value();
        self.target = fraction;
        self.elapsed = 0.0;
    }

    fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(FILL_EASE_SECS);
    }

    fn value(&self) -> f32 {
        if self.elapsed >= FILL_EASE_SECS {
            self.target
        } else {
            let t = geometry::ease_in_out(self.elapsed / FILL_EASE_SECS);
            self.from + (self.target - self.from) * t
        }
    }
}

/// Wrapping phases of the decorative clocks, each in `[0, 1)`.
#[derive(Debug, Clone, Copy, Default)]
struct Clocks {
    wave: f32,
    electric: f32,
    glow: f32,
}

impl Clocks {
    fn advance(&mut self, dt: f32) {
        self.wave = (self.wave + dt / WAVE_PERIOD_SECS).fract();
        self.electric = (self.electric + dt / ELECTRIC_PERIOD_SECS).fract();
        self.glow = (self.glow + dt / (2.0 * GLOW_SWEEP_SECS)).fract();
    }

    fn wave_offset(&self) -> f32 {
        self.wave
    }

    fn electric_offset(&self) -> f32 {
        self.electric
    }

    /// Plasma glow opacity, easing back and forth in `[GLOW_MIN, 1]`.
    fn glow(&self) -> f32 {
        GLOW_MIN + (1.0 - GLOW_MIN) * geometry::ease_in_out(geometry::triangle(self.glow))
    }
}

/// Progress bar state: the authoritative fill target, its eased transition,
/// the decorative clocks, and the particle field.
pub struct State {
    transition: FillTransition,
    clocks: Clocks,
    particles: Vec<EnergyParticle>,
    cache: Cache,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("target", &self.transition.target)
            .field("fill", &self.fill_fraction())
            .field("particles", &self.particles.len())
            .finish()
    }
}

impl State {
    #[must_use]
    pub fn new(particle_count: usize) -> Self {
        Self {
            transition: FillTransition::default(),
            clocks: Clocks::default(),
            particles: particles::generate(particle_count, PARTICLE_SEED),
            cache: Cache::default(),
        }
    }

    /// Sets the authoritative fill fraction; the displayed fill eases toward
    /// it over [`FILL_EASE_SECS`].
    pub fn set_target(&mut self, fraction: f32) {
        self.transition.set_target(fraction.clamp(0.0, 1.0));
        self.cache.clear();
    }

    /// The authoritative fill fraction last reported.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.transition.target
    }

    /// The fill fraction currently displayed.
    #[must_use]
    pub fn fill_fraction(&self) -> f32 {
        self.transition.value()
    }

    /// Whether the eased transition has settled on the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transition.elapsed >= FILL_EASE_SECS
    }

    /// Advances all animation clocks by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_FRAME_SECS);
        self.transition.advance(dt);
        self.clocks.advance(dt);
        self.cache.clear();
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        Canvas::new(Bar { state: self })
            .width(Length::Fixed(sizing::BAR_WIDTH))
            .height(Length::Fixed(sizing::BAR_HEIGHT))
            .into()
    }
}

/// Canvas program rendering all bar layers from the shared [`State`].
struct Bar<'a> {
    state: &'a State,
}

impl<Message> canvas::Program<Message> for Bar<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .state
            .cache
            .draw(renderer, bounds.size(), |frame| {
                let width = frame.width();
                let height = frame.height();

                let track = closed_path(&geometry::capsule(width, height, CAP_SEGMENTS));
                frame.fill(&track, palette::TRACK_NAVY);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(1.0).with_color(Color {
                        a: 0.4,
                        ..palette::NEON_CYAN
                    }),
                );

                let fraction = self.state.fill_fraction();
                let fill_width = geometry::fill_width(fraction, width);
                if fill_width > 0.0 {
                    self.draw_fill(frame, fill_width, height);
                    self.draw_particles(frame, width, height, fraction);
                    self.draw_electric(frame, fill_width, height);
                    self.draw_border(frame, fill_width, height);
                }
            });

        vec![geometry]
    }
}

impl Bar<'_> {
    fn draw_fill(&self, frame: &mut canvas::Frame, fill_width: f32, height: f32) {
        // The capsule cannot be narrower than its cap diameter; the numeric
        // fill contract lives in `geometry::fill_width`, not in this shape.
        let shape_width = fill_width.max(height);
        let fill = closed_path(&geometry::capsule(shape_width, height, CAP_SEGMENTS));
        frame.fill(&fill, palette::NEON_AZURE);

        // Spectrum bands across the straight section of the capsule
        let radius = height / 2.0;
        let straight = (shape_width - 2.0 * radius).max(0.0);
        if straight > 0.0 {
            let band_width = straight / FILL_BANDS.len() as f32;
            for (i, color) in FILL_BANDS.iter().enumerate() {
                let band = Path::rectangle(
                    Point::new(radius + band_width * i as f32, 0.0),
                    Size::new(band_width, height),
                );
                frame.fill(&band, Color { a: 0.55, ..*color });
            }
        }

        let wave_offset = self.state.clocks.wave_offset();

        // Liquid surface, with a second slower line for depth
        let surface =
            geometry::wave_surface(wave_offset, fill_width, height, WAVE_AMPLITUDE);
        if surface.len() > 1 {
            frame.stroke(
                &open_path(&surface),
                Stroke::default().with_width(1.5).with_color(Color {
                    a: 0.5,
                    ..palette::WHITE
                }),
            );
        }
        let inner = geometry::wave_surface(
            wave_offset * 0.7,
            fill_width,
            height,
            WAVE_AMPLITUDE * 0.6,
        );
        if inner.len() > 1 {
            frame.stroke(
                &open_path(&inner),
                Stroke::default().with_width(1.0).with_color(Color {
                    a: 0.3,
                    ..palette::WHITE
                }),
            );
        }

        // Traveling energy streak
        let streak_width = fill_width * 0.2;
        if streak_width > 0.0 {
            let x = geometry::streak_offset(wave_offset, fill_width)
                .clamp(0.0, (fill_width - streak_width).max(0.0));
            let streak = Path::rectangle(
                Point::new(x, 0.0),
                Size::new(streak_width.min(fill_width), height),
            );
            frame.fill(
                &streak,
                Color {
                    a: 0.25,
                    ..palette::WHITE
                },
            );
        }
    }

    fn draw_particles(
        &self,
        frame: &mut canvas::Frame,
        width: f32,
        height: f32,
        fraction: f32,
    ) {
        let wave_offset = self.state.clocks.wave_offset();
        for particle in particles::visible(&self.state.particles, fraction) {
            let center = Point::new(
                particle.x * width,
                particle.y * height + particles::wobble(wave_offset, particle.phase),
            );
            let radius = particle.size * particle.scale / 2.0;

            // Soft halo first, bright core on top
            frame.fill(
                &Path::circle(center, radius * 1.8),
                Color {
                    a: particle.opacity * 0.3,
                    ..particle.color
                },
            );
            frame.fill(
                &Path::circle(center, radius),
                Color {
                    a: particle.opacity,
                    ..particle.color
                },
            );
        }
    }

    fn draw_electric(&self, frame: &mut canvas::Frame, fill_width: f32, height: f32) {
        let offset = self.state.clocks.electric_offset();
        for i in 0..ELECTRIC_STRANDS {
            let strand = geometry::electric_polyline(
                fill_width,
                height,
                (i + 1) as f32 * 1.5,
                (i + 2) as f32,
                offset,
                ELECTRIC_STEPS,
            );
            let base = if i % 2 == 0 {
                palette::WHITE
            } else {
                palette::NEON_CYAN
            };
            frame.stroke(
                &open_path(&strand),
                Stroke::default()
                    .with_width(0.5)
                    .with_color(Color { a: 0.7, ..base }),
            );
        }
    }

    fn draw_border(&self, frame: &mut canvas::Frame, fill_width: f32, height: f32) {
        let glow = self.state.clocks.glow();
        let outline = closed_path(&geometry::capsule(
            fill_width.max(height),
            height,
            CAP_SEGMENTS,
        ));
        frame.stroke(
            &outline,
            Stroke::default().with_width(2.0).with_color(Color {
                a: glow,
                ..palette::NEON_CYAN
            }),
        );
    }
}

/// Builds a closed path from an outline point list.
fn closed_path(points: &[(f32, f32)]) -> Path {
    let mut builder = canvas::path::Builder::new();
    if let Some((first, rest)) = points.split_first() {
        builder.move_to(Point::new(first.0, first.1));
        for (x, y) in rest {
            builder.line_to(Point::new(*x, *y));
        }
        builder.close();
    }
    builder.build()
}

/// Builds an open polyline path from a point list.
fn open_path(points: &[(f32, f32)]) -> Path {
    let mut builder = canvas::path::Builder::new();
    if let Some((first, rest)) = points.split_first() {
        builder.move_to(Point::new(first.0, first.1));
        for (x, y) in rest {
            builder.line_to(Point::new(*x, *y));
        }
    }
    builder.build()
}
