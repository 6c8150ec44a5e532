// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/overlay.rs
//
// Region overlay widget: guide lines, preview and committed regions drawn
// over the fitted image, with mouse input mapped back to image pixels.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
    },
};

use crate::app::message::AppMessage;
use crate::app::tool::{PointerButton, PointerEvent, Session};
use crate::config::AppConfig;
use crate::constant::{COMMITTED_COLOR, CROSSHAIR_COLOR, PREVIEW_COLOR};
use crate::domain::{self, Region};

fn rgb([r, g, b]: [f32; 3]) -> Color {
    Color::from_rgb(r, g, b)
}

pub struct RegionOverlay {
    img_width: u32,
    img_height: u32,
    session: Session,
    region_stroke: f32,
    crosshair_stroke: f32,
    show_crosshair: bool,
}

impl RegionOverlay {
    pub fn new(session: &Session, config: &AppConfig) -> Self {
        let (img_width, img_height) = session.image_size();
        Self {
            img_width,
            img_height,
            session: session.clone(),
            region_stroke: config.region_stroke,
            crosshair_stroke: config.crosshair_stroke,
            show_crosshair: config.show_crosshair,
        }
    }

    /// Scale at which the image fits the bounds (content fit: contain).
    fn fit_scale(&self, bounds: &Rectangle) -> f32 {
        let scale_x = bounds.width / self.img_width.max(1) as f32;
        let scale_y = bounds.height / self.img_height.max(1) as f32;
        scale_x.min(scale_y)
    }

    /// Screen rectangle covered by the centered, fitted image.
    fn image_rect(&self, bounds: &Rectangle) -> Rectangle {
        let scale = self.fit_scale(bounds);
        let width = self.img_width as f32 * scale;
        let height = self.img_height as f32 * scale;
        Rectangle::new(
            Point::new(
                bounds.x + (bounds.width - width) / 2.0,
                bounds.y + (bounds.height - height) / 2.0,
            ),
            Size::new(width, height),
        )
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn screen_to_image(&self, bounds: &Rectangle, point: Point) -> domain::Point {
        let scale = self.fit_scale(bounds);
        let area = self.image_rect(bounds);

        let x = ((point.x - area.x) / scale).max(0.0).min(self.img_width as f32);
        let y = ((point.y - area.y) / scale).max(0.0).min(self.img_height as f32);
        domain::Point::new(x as u32, y as u32)
    }

    fn image_to_screen(&self, bounds: &Rectangle, point: domain::Point) -> Point {
        let scale = self.fit_scale(bounds);
        let area = self.image_rect(bounds);
        Point::new(
            area.x + point.x as f32 * scale,
            area.y + point.y as f32 * scale,
        )
    }

    fn draw_region(&self, renderer: &mut Renderer, bounds: &Rectangle, region: &Region, color: Color) {
        let top_left = self.image_to_screen(bounds, region.top_left());
        let bottom_right = self.image_to_screen(bounds, region.bottom_right());
        let w = (bottom_right.x - top_left.x).max(self.region_stroke);
        let h = (bottom_right.y - top_left.y).max(self.region_stroke);
        let stroke = self.region_stroke;

        // Top
        draw_quad(renderer, Rectangle::new(top_left, Size::new(w, stroke)), color);
        // Bottom
        draw_quad(
            renderer,
            Rectangle::new(Point::new(top_left.x, top_left.y + h - stroke), Size::new(w, stroke)),
            color,
        );
        // Left
        draw_quad(renderer, Rectangle::new(top_left, Size::new(stroke, h)), color);
        // Right
        draw_quad(
            renderer,
            Rectangle::new(Point::new(top_left.x + w - stroke, top_left.y), Size::new(stroke, h)),
            color,
        );
    }

    fn draw_crosshair(&self, renderer: &mut Renderer, bounds: &Rectangle, pointer: domain::Point) {
        let area = self.image_rect(bounds);
        let at = self.image_to_screen(bounds, pointer);
        let half = self.crosshair_stroke / 2.0;
        let color = rgb(CROSSHAIR_COLOR);

        draw_quad(
            renderer,
            Rectangle::new(Point::new(at.x - half, area.y), Size::new(self.crosshair_stroke, area.height)),
            color,
        );
        draw_quad(
            renderer,
            Rectangle::new(Point::new(area.x, at.y - half), Size::new(area.width, self.crosshair_stroke)),
            color,
        );
    }
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color) {
    renderer.fill_quad(
        Quad {
            bounds,
            ..Quad::default()
        },
        color,
    );
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for RegionOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        if let Some(pointer) = self.session.pointer() {
            if self.show_crosshair {
                self.draw_crosshair(renderer, &bounds, pointer);
            }
        }

        if let Some(preview) = self.session.preview() {
            self.draw_region(renderer, &bounds, &preview, rgb(PREVIEW_COLOR));
        }

        for region in self.session.regions() {
            self.draw_region(renderer, &bounds, region, rgb(COMMITTED_COLOR));
        }
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();
        let over_image = cursor.position_over(self.image_rect(&bounds));

        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(pos) = over_image {
                    let point = self.screen_to_image(&bounds, pos);
                    shell.publish(AppMessage::Pointer(PointerEvent::Moved(point)));
                    return Status::Captured;
                }
                if self.session.pointer().is_some() {
                    shell.publish(AppMessage::PointerLeft);
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if self.session.pointer().is_some() {
                    shell.publish(AppMessage::PointerLeft);
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(button)) => {
                let button = match button {
                    Button::Left => PointerButton::Primary,
                    Button::Right => PointerButton::Secondary,
                    Button::Middle => PointerButton::Tertiary,
                    _ => return Status::Ignored,
                };
                if let Some(pos) = over_image {
                    let point = self.screen_to_image(&bounds, pos);
                    shell.publish(AppMessage::Pointer(PointerEvent::Pressed(button, point)));
                    return Status::Captured;
                }
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(self.image_rect(&layout.bounds())) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a> From<RegionOverlay> for Element<'a, AppMessage> {
    fn from(overlay: RegionOverlay) -> Self {
        Self::new(overlay)
    }
}

pub fn region_overlay(session: &Session, config: &AppConfig) -> RegionOverlay {
    RegionOverlay::new(session, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tool::ToolKind;

    fn overlay(width: u32, height: u32) -> RegionOverlay {
        let session = Session::new(ToolKind::BoundingBox, width, height);
        RegionOverlay::new(&session, &AppConfig::default())
    }

    #[test]
    fn image_is_fitted_and_centered() {
        let o = overlay(200, 100);
        let bounds = Rectangle::new(Point::new(0.0, 0.0), Size::new(400.0, 400.0));
        let area = o.image_rect(&bounds);
        assert_eq!(area, Rectangle::new(Point::new(0.0, 100.0), Size::new(400.0, 200.0)));
    }

    #[test]
    fn screen_points_map_to_image_pixels() {
        let o = overlay(200, 100);
        let bounds = Rectangle::new(Point::new(10.0, 20.0), Size::new(400.0, 400.0));

        assert_eq!(o.screen_to_image(&bounds, Point::new(10.0, 120.0)), domain::Point::new(0, 0));
        assert_eq!(o.screen_to_image(&bounds, Point::new(210.0, 220.0)), domain::Point::new(100, 50));
        // Outside the image clamps to its border.
        assert_eq!(o.screen_to_image(&bounds, Point::new(500.0, 500.0)), domain::Point::new(200, 100));
    }

    #[test]
    fn image_to_screen_inverts_mapping() {
        let o = overlay(200, 100);
        let bounds = Rectangle::new(Point::new(0.0, 0.0), Size::new(400.0, 400.0));
        let p = domain::Point::new(50, 25);
        assert_eq!(o.screen_to_image(&bounds, o.image_to_screen(&bounds, p)), p);
    }
}
