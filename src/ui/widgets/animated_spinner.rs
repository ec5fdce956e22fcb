// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while a generation request is in flight.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const STROKE_WIDTH: f32 = 3.0;
const RING_ALPHA: f32 = 0.25;
/// Line segments approximating the half-circle arc.
const ARC_SEGMENTS: u32 = 30;

/// A half-circle arc spinning over a faint full ring.
///
/// The widget holds no timer of its own; the application tick advances
/// `rotation` and rebuilds the view.
pub struct AnimatedSpinner {
    cache: Cache,
    /// Arc offset in radians.
    rotation: f32,
    color: Color,
    diameter: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            diameter: sizing::ICON_XL,
        }
    }

    /// Wraps the spinner in a fixed-size canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let diameter = self.diameter;
        Canvas::new(self)
            .width(Length::Fixed(diameter))
            .height(Length::Fixed(diameter))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
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
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;
                let point_at = |angle: f32| {
                    Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    )
                };

                // Faint full ring the arc travels on.
                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(Color {
                            a: RING_ALPHA,
                            ..self.color
                        }),
                );

                // Half circle starting at twelve o'clock plus the rotation.
                let start = self.rotation - PI / 2.0;
                let mut arc = canvas::path::Builder::new();
                arc.move_to(point_at(start));
                #[allow(clippy::cast_precision_loss)]
                for segment in 1..=ARC_SEGMENTS {
                    arc.line_to(point_at(start + PI * segment as f32 / ARC_SEGMENTS as f32));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
