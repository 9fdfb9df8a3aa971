//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
use crate::widgets::{event_children, update_children, visit_children};
use crate::*;

/// Clipped viewport that shifts its children by a wheel-driven offset.
///
/// Children are positioned in content space; the viewport adds `offset` to their origin. The
/// offset stays within [`ScrollBounds`] after every change, and nested scrollables consume the
/// wheel innermost first.
pub struct Scrollable<W: Widget = Box<dyn Widget>> {
    id: WidgetId,
    /// Left edge relative to the parent origin.
    pub x: i32,
    /// Top edge relative to the parent origin.
    pub y: i32,
    /// Viewport width.
    pub width: i32,
    /// Viewport height.
    pub height: i32,
    /// Background color, or the style's text background when unset.
    pub bg_color: Option<Color>,
    /// Pixels per wheel notch, or the style's scroll multiplier when unset.
    pub scroll_speed: Option<i32>,
    /// Plain wheel scrolls horizontally and shift+wheel vertically.
    pub swap_scroll: bool,
    children: Vec<W>,
    offset: Vec2i,
    bounds: ScrollBounds,
    inside: bool,
    hovered: bool,
}

impl<W: Widget> Scrollable<W> {
    /// Creates an empty viewport; fails if a bound pair is inverted.
    pub fn new(x: i32, y: i32, width: i32, height: i32, bounds: ScrollBounds) -> Result<Self, ConfigError> {
        bounds.validate()?;
        Ok(Self {
            id: WidgetId::next(),
            x,
            y,
            width,
            height,
            bg_color: None,
            scroll_speed: None,
            swap_scroll: false,
            children: Vec::new(),
            offset: bounds.clamp(Vec2i::default()),
            bounds,
            inside: false,
            hovered: false,
        })
    }

    /// Viewport without bounds.
    pub fn unbounded(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id: WidgetId::next(),
            x,
            y,
            width,
            height,
            bg_color: None,
            scroll_speed: None,
            swap_scroll: false,
            children: Vec::new(),
            offset: Vec2i::default(),
            bounds: ScrollBounds::NONE,
            inside: false,
            hovered: false,
        }
    }

    /// Scrolled content.
    pub fn children(&self) -> &[W] { &self.children }

    /// Mutable scrolled content.
    pub fn children_mut(&mut self) -> &mut Vec<W> { &mut self.children }

    /// Adds content drawn above the existing children.
    pub fn push(&mut self, child: W) { self.children.push(child); }

    /// Current offset.
    pub fn offset(&self) -> Vec2i { self.offset }

    /// Moves the content; the result is clamped to the bounds.
    pub fn set_offset(&mut self, offset: Vec2i) { self.offset = self.bounds.clamp(offset); }

    /// Offset limits.
    pub fn bounds(&self) -> ScrollBounds { self.bounds }

    /// Replaces the limits and re-clamps the offset.
    pub fn set_bounds(&mut self, bounds: ScrollBounds) -> Result<(), ConfigError> {
        bounds.validate()?;
        self.bounds = bounds;
        self.clamp();
        Ok(())
    }

    /// Pulls the offset back inside the bounds.
    pub fn clamp(&mut self) { self.offset = self.bounds.clamp(self.offset); }

    /// Returns `true` if the pointer was over the viewport on the last event pass.
    pub fn is_pointer_inside(&self) -> bool { self.inside }

    fn viewport(&self, x: i32, y: i32) -> Recti { rect(x + self.x, y + self.y, self.width, self.height) }

    fn apply_wheel(&mut self, delta: i32, shift: bool, speed: i32) {
        let step = delta * speed;
        match ScrollAxis::for_wheel(shift, self.swap_scroll) {
            ScrollAxis::Horizontal => self.offset.x += step,
            ScrollAxis::Vertical => self.offset.y += step,
        }
        self.clamp();
    }
}

impl Scrollable<Box<dyn Widget>> {
    /// Boxes and adds a child.
    pub fn add(&mut self, child: impl Widget + 'static) { self.children.push(Box::new(child)); }
}

impl<W: Widget> Bounded for Scrollable<W> {
    fn position(&self) -> Vec2i { vec2(self.x, self.y) }
    fn size(&self) -> Dimensioni { Dimensioni::new(self.width, self.height) }
    fn set_position(&mut self, pos: Vec2i) {
        self.x = pos.x;
        self.y = pos.y;
    }
    fn set_size(&mut self, size: Dimensioni) {
        self.width = size.width;
        self.height = size.height;
    }
}

impl<W: Widget> Widget for Scrollable<W> {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        let view = self.viewport(x, y);
        let (cx, cy) = (view.x + self.offset.x, view.y + self.offset.y);
        let children = &mut self.children;
        ui.with_clip(view, |ui| event_children(children, ui, cx, cy));

        self.inside = ui.collides(view);
        self.hovered = self.inside && ui.claim_hover(self.id);
        if self.inside {
            if let Some(delta) = ui.input_mut().take_scroll() {
                let speed = self.scroll_speed.unwrap_or(ui.style().scroll_multiplier);
                self.apply_wheel(delta, ui.input().shift(), speed);
            }
            if ui.middle_mouse_down() {
                self.offset = self.bounds.home();
                ui.cancel_mouse_event();
            }
        }
        self.clamp();
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        let view = self.viewport(x, y);
        canvas.push_clip_rect(view);
        canvas.draw_rect(view, self.bg_color.unwrap_or(ui.style().text_bg_color));
        update_children(&mut self.children, ui, canvas, view.x + self.offset.x, view.y + self.offset.y);
        canvas.pop_clip_rect();
    }

    fn state(&self) -> ControlState {
        ControlState {
            hovered: self.hovered,
            ..ControlState::default()
        }
    }

    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) { visit_children(&mut self.children, f) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::RecordingRenderer;
    use std::time::Duration;

    fn vertical(top: i32, bottom: i32) -> ScrollBounds {
        ScrollBounds {
            top: Some(top),
            bottom: Some(bottom),
            ..ScrollBounds::NONE
        }
    }

    fn viewport(bounds: ScrollBounds) -> Scrollable {
        match Scrollable::new(0, 0, 100, 100, bounds) {
            Ok(s) => s,
            Err(e) => panic!("valid bounds rejected: {e}"),
        }
    }

    fn wheel(ui: &mut Ui, n: u64, delta: i32, w: &mut dyn Widget) {
        ui.input_mut().scroll(delta);
        ui.begin_frame(Duration::from_millis(n * 16));
        w.event(ui, 0, 0);
        ui.end_frame();
    }

    #[test]
    fn repeated_wheel_is_pinned_at_the_bound() {
        let mut ui = Ui::with_screen(200, 200);
        ui.input_mut().mousemove(50, 50);
        let mut s = viewport(vertical(0, -100));
        s.scroll_speed = Some(15);
        for n in 0..3 {
            wheel(&mut ui, n, -5, &mut s);
        }
        assert_eq!(s.offset().y, -100);
        assert_eq!(s.offset().x, 0);
    }

    #[test]
    fn shift_and_swap_pick_the_horizontal_axis() {
        let mut ui = Ui::with_screen(200, 200);
        ui.input_mut().mousemove(50, 50);
        let mut s = viewport(ScrollBounds::NONE);
        s.scroll_speed = Some(10);
        ui.input_mut().keydown(KeyMode::SHIFT);
        wheel(&mut ui, 0, -1, &mut s);
        assert_eq!((s.offset().x, s.offset().y), (-10, 0));
        ui.input_mut().keyup(KeyMode::SHIFT);
        s.swap_scroll = true;
        wheel(&mut ui, 1, -1, &mut s);
        assert_eq!((s.offset().x, s.offset().y), (-20, 0));
    }

    #[test]
    fn wheel_outside_the_viewport_is_ignored() {
        let mut ui = Ui::with_screen(300, 300);
        ui.input_mut().mousemove(250, 250);
        let mut s = viewport(ScrollBounds::NONE);
        wheel(&mut ui, 0, -3, &mut s);
        assert_eq!(s.offset().y, 0);
        assert!(!s.is_pointer_inside());
    }

    #[test]
    fn innermost_viewport_consumes_the_wheel() {
        let mut ui = Ui::with_screen(300, 300);
        ui.input_mut().mousemove(20, 20);
        let mut outer = viewport(ScrollBounds::NONE);
        let inner: Scrollable = Scrollable::unbounded(10, 10, 40, 40);
        outer.add(inner);
        wheel(&mut ui, 0, -1, &mut outer);
        assert_eq!(outer.offset().y, 0);
        let inner_state = outer.children()[0].state();
        assert!(inner_state.hovered);
    }

    #[test]
    fn middle_click_returns_home() {
        let mut ui = Ui::with_screen(200, 200);
        let bounds = ScrollBounds {
            left: Some(5),
            ..vertical(7, -50)
        };
        let mut s = viewport(bounds);
        s.set_offset(vec2(-40, -40));
        assert_eq!((s.offset().x, s.offset().y), (-40, -40));
        ui.input_mut().mousedown(50, 50, MouseButton::MIDDLE);
        ui.begin_frame(Duration::ZERO);
        s.event(&mut ui, 0, 0);
        assert_eq!((s.offset().x, s.offset().y), (5, 7));
        assert!(!ui.middle_mouse_down());
    }

    #[test]
    fn inverted_bounds_fail_construction() {
        assert!(Scrollable::<Box<dyn Widget>>::new(0, 0, 1, 1, vertical(-10, 0)).is_err());
        let mut s = viewport(vertical(0, -10));
        assert!(s.set_bounds(vertical(-10, 0)).is_err());
        assert!(s.set_bounds(vertical(0, -5)).is_ok());
    }

    #[test]
    fn children_are_hidden_outside_the_viewport() {
        let mut ui = Ui::with_screen(300, 300);
        let mut s = viewport(ScrollBounds::NONE);
        s.add(Panel::new(0, 150, 10, 10, Color::rgb(1, 1, 1)));
        s.add(Panel::new(0, 20, 10, 10, Color::rgb(1, 1, 1)));
        s.set_offset(vec2(0, -10));

        // the panel at y 140 lies outside the viewport and must not be hoverable
        ui.input_mut().mousemove(5, 145);
        ui.begin_frame(Duration::ZERO);
        s.event(&mut ui, 0, 0);
        assert_eq!(ui.hover_claimant(), None);

        let mut canvas = Canvas::new(Dimensioni::new(300, 300));
        s.update(&ui, &mut canvas, 0, 0);
        let mut renderer = RecordingRenderer::default();
        canvas.render(&mut renderer, Color::default());
        assert_eq!(renderer.rects, vec![(0, 0, 100, 100), (0, 10, 10, 10)]);
    }
}
