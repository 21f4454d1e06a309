// SPDX-License-Identifier: MPL-2.0
//! Canvas-drawn logo mark: a neon ring holding two liquid wave lines.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Fraction of the canvas taken by the mark at pulse scale 1.0.
const MARK_EXTENT: f32 = 0.9;

/// Wave cycles across a chord of the ring.
const WAVE_CYCLES: f32 = 2.0;

/// Sample count per wave line.
const WAVE_SAMPLES: usize = 40;

/// Pulsing logo mark widget.
pub struct LogoMark {
    cache: Cache,
    scale: f32,
}

impl LogoMark {
    #[must_use]
    pub fn new(scale: f32) -> Self {
        Self {
            cache: Cache::default(),
            scale,
        }
    }

    /// Creates a Canvas widget from this mark.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::LOGO))
            .height(Length::Fixed(sizing::LOGO))
            .into()
    }
}

impl<Message> canvas::Program<Message> for LogoMark {
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
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius =
                    frame.width().min(frame.height()) / 2.0 * MARK_EXTENT * self.scale;

                // Dark face behind the waves
                frame.fill(&Path::circle(center, radius), palette::TRACK_NAVY);

                // Two liquid lines across chords of the ring
                for (offset, fraction, color) in [
                    (0.0_f32, -0.15_f32, palette::NEON_CYAN),
                    (0.5, 0.2, palette::NEON_AZURE),
                ] {
                    let y = center.y + radius * fraction;
                    let half_chord = chord_half_width(radius, radius * fraction);
                    if half_chord <= 0.0 {
                        continue;
                    }

                    let mut builder = canvas::path::Builder::new();
                    for i in 0..=WAVE_SAMPLES {
                        let t = i as f32 / WAVE_SAMPLES as f32;
                        let x = center.x - half_chord + 2.0 * half_chord * t;
                        let wave_y =
                            y + ((t * WAVE_CYCLES + offset) * TAU).sin() * radius * 0.06;
                        let point = Point::new(x, wave_y);
                        if i == 0 {
                            builder.move_to(point);
                        } else {
                            builder.line_to(point);
                        }
                    }
                    frame.stroke(
                        &builder.build(),
                        Stroke::default()
                            .with_width(2.0)
                            .with_color(Color { a: 0.9, ..color })
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }

                // Outer ring
                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(3.0)
                        .with_color(palette::NEON_CYAN),
                );
            });

        vec![geometry]
    }
}

/// Half-width of a circle chord at vertical distance `dy` from the center.
fn chord_half_width(radius: f32, dy: f32) -> f32 {
    let squared = radius * radius - dy * dy;
    if squared <= 0.0 {
        0.0
    } else {
        squared.sqrt() * 0.92
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chord_shrinks_toward_the_rim() {
        let middle = chord_half_width(50.0, 0.0);
        let near_rim = chord_half_width(50.0, 45.0);
        assert!(middle > near_rim);
        assert_eq!(chord_half_width(50.0, 50.0), 0.0);
        assert_eq!(chord_half_width(50.0, 60.0), 0.0);
    }
}
