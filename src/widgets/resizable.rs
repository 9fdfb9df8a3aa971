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

const HANDLE: i32 = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Size range a [`Resizable`] can be dragged to.
pub struct SizeLimits {
    /// Smallest width, at least 1.
    pub min_width: i32,
    /// Smallest height, at least 1.
    pub min_height: i32,
    /// Largest width, unbounded when unset.
    pub max_width: Option<i32>,
    /// Largest height, unbounded when unset.
    pub max_height: Option<i32>,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_width: 1,
            min_height: 1,
            max_width: None,
            max_height: None,
        }
    }
}

fn check(what: &'static str, value: i32, ok: bool, expected: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { what, value, expected })
    }
}

impl SizeLimits {
    fn validate(&self, width: i32, height: i32) -> Result<(), ConfigError> {
        check("min_width", self.min_width, 0 < self.min_width && self.min_width <= width, "0 < min_width <= width")?;
        check("min_height", self.min_height, 0 < self.min_height && self.min_height <= height, "0 < min_height <= height")?;
        if let Some(max) = self.max_width {
            check("max_width", max, self.min_width <= max, "max_width >= min_width")?;
        }
        if let Some(max) = self.max_height {
            check("max_height", max, self.min_height <= max, "max_height >= min_height")?;
        }
        Ok(())
    }

    // handles sit one pixel outside the body
    fn clamp_handle(min: i32, max: Option<i32>, pos: i32) -> i32 {
        let pos = pos.max(min + 1);
        match max {
            Some(max) => pos.min(max + 1),
            None => pos,
        }
    }
}

/// Panel that can be moved by its body and resized from its right edge, bottom edge and corner.
pub struct Resizable {
    body: Draggable,
    bg: Panel,
    right: Draggable,
    down: Draggable,
    corner: Draggable,
    /// Size range.
    pub limits: SizeLimits,
    /// Allows moving the panel by dragging its body.
    pub can_drag: bool,
    /// Content drawn over the background.
    pub children: Vec<Box<dyn Widget>>,
}

impl Resizable {
    /// Creates a resizable panel; fails unless `0 < min <= size` and `min <= max` on both axes.
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: Color, limits: SizeLimits) -> Result<Self, ConfigError> {
        limits.validate(width, height)?;
        let mut r = Self {
            body: Draggable::new(x, y, width, height),
            bg: Panel::new(0, 0, width, height, color),
            right: Draggable::locked(0, 0, HANDLE, HANDLE, false, true),
            down: Draggable::locked(0, 0, HANDLE, HANDLE, true, false),
            corner: Draggable::new(0, 0, HANDLE, HANDLE),
            limits,
            can_drag: true,
            children: Vec::new(),
        };
        r.place_handles();
        Ok(r)
    }

    /// Adds a child drawn over the background.
    pub fn push(&mut self, child: impl Widget + 'static) { self.children.push(Box::new(child)); }

    /// Left edge relative to the parent origin.
    pub fn x(&self) -> i32 { self.body.x }
    /// Top edge relative to the parent origin.
    pub fn y(&self) -> i32 { self.body.y }
    /// Current width.
    pub fn width(&self) -> i32 { self.body.width }
    /// Current height.
    pub fn height(&self) -> i32 { self.body.height }

    /// Returns `true` while the body or any handle is being dragged.
    pub fn is_held(&self) -> bool { self.body.is_held() || self.right.is_held() || self.down.is_held() || self.corner.is_held() }

    fn place_handles(&mut self) {
        let (w, h) = (self.body.width, self.body.height);
        self.right.x = w + 1;
        self.right.y = 0;
        self.right.height = h;
        self.down.x = 0;
        self.down.y = h + 1;
        self.down.width = w;
        self.corner.x = w + 1;
        self.corner.y = h + 1;
        tie(&self.body, &mut self.bg, true);
    }

    fn apply_handles(&mut self) {
        let l = self.limits;
        if self.right.is_held() {
            self.right.x = SizeLimits::clamp_handle(l.min_width, l.max_width, self.right.x);
            self.corner.x = self.right.x;
        }
        if self.down.is_held() {
            self.down.y = SizeLimits::clamp_handle(l.min_height, l.max_height, self.down.y);
            self.corner.y = self.down.y;
        }
        if self.corner.is_held() {
            self.corner.x = SizeLimits::clamp_handle(l.min_width, l.max_width, self.corner.x);
            self.corner.y = SizeLimits::clamp_handle(l.min_height, l.max_height, self.corner.y);
            self.right.x = self.corner.x;
            self.down.y = self.corner.y;
        }
        self.body.width = self.right.x - 1;
        self.body.height = self.down.y - 1;
        self.place_handles();
    }
}

impl Bounded for Resizable {
    fn position(&self) -> Vec2i { self.body.position() }
    fn size(&self) -> Dimensioni { self.body.size() }
    fn set_position(&mut self, pos: Vec2i) { self.body.set_position(pos); }
    fn set_size(&mut self, size: Dimensioni) {
        let l = self.limits;
        let width = SizeLimits::clamp_handle(l.min_width, l.max_width, size.width + 1) - 1;
        let height = SizeLimits::clamp_handle(l.min_height, l.max_height, size.height + 1) - 1;
        self.body.set_size(Dimensioni::new(width, height));
        self.place_handles();
    }
}

impl Widget for Resizable {
    fn id(&self) -> WidgetId { self.body.id() }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        let (ox, oy) = (x + self.body.x, y + self.body.y);
        event_children(&mut self.children, ui, ox, oy);
        self.corner.event(ui, ox, oy);
        self.down.event(ui, ox, oy);
        self.right.event(ui, ox, oy);
        self.body.drag(ui, x, y, self.can_drag);
        self.apply_handles();
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        let (ox, oy) = (x + self.body.x, y + self.body.y);
        self.bg.update(ui, canvas, ox, oy);
        update_children(&mut self.children, ui, canvas, ox, oy);
    }

    fn state(&self) -> ControlState {
        ControlState {
            hovered: self.body.is_hovered(),
            held: self.is_held(),
            focused: false,
        }
    }

    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) { visit_children(&mut self.children, f) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn frame(ui: &mut Ui, n: u64, r: &mut Resizable) {
        ui.begin_frame(Duration::from_millis(n * 16));
        r.event(ui, 0, 0);
        ui.end_frame();
    }

    fn panel(limits: SizeLimits) -> Resizable {
        match Resizable::new(10, 10, 100, 60, Color::rgb(1, 1, 1), limits) {
            Ok(r) => r,
            Err(e) => panic!("valid resizable rejected: {e}"),
        }
    }

    #[test]
    fn invalid_limits_are_rejected() {
        let too_big = SizeLimits { min_width: 200, ..SizeLimits::default() };
        assert!(matches!(
            Resizable::new(0, 0, 100, 100, Color::default(), too_big),
            Err(ConfigError::InvalidDimension { what: "min_width", .. })
        ));
        let zero = SizeLimits { min_height: 0, ..SizeLimits::default() };
        assert!(Resizable::new(0, 0, 100, 100, Color::default(), zero).is_err());
        let inverted = SizeLimits {
            min_width: 50,
            max_width: Some(10),
            ..SizeLimits::default()
        };
        assert!(Resizable::new(0, 0, 100, 100, Color::default(), inverted).is_err());
    }

    #[test]
    fn right_handle_resizes_and_respects_minimum() {
        let mut ui = Ui::with_screen(400, 400);
        let mut r = panel(SizeLimits { min_width: 40, ..SizeLimits::default() });
        // right handle spans x 111..116 in screen space
        ui.input_mut().mousedown(113, 30, MouseButton::LEFT);
        frame(&mut ui, 0, &mut r);
        assert!(r.is_held());

        ui.input_mut().mousemove(153, 30);
        frame(&mut ui, 1, &mut r);
        assert_eq!(r.width(), 140);
        assert_eq!(r.height(), 60);

        ui.input_mut().mousemove(0, 30);
        frame(&mut ui, 2, &mut r);
        assert_eq!(r.width(), 40);
    }

    #[test]
    fn corner_respects_maximum_on_both_axes() {
        let mut ui = Ui::with_screen(400, 400);
        let limits = SizeLimits {
            max_width: Some(150),
            max_height: Some(80),
            ..SizeLimits::default()
        };
        let mut r = panel(limits);
        ui.input_mut().mousedown(113, 73, MouseButton::LEFT);
        frame(&mut ui, 0, &mut r);
        ui.input_mut().mousemove(393, 393);
        frame(&mut ui, 1, &mut r);
        assert_eq!((r.width(), r.height()), (150, 80));
    }

    #[test]
    fn body_drag_moves_without_resizing() {
        let mut ui = Ui::with_screen(400, 400);
        let mut r = panel(SizeLimits::default());
        ui.input_mut().mousedown(20, 20, MouseButton::LEFT);
        frame(&mut ui, 0, &mut r);
        ui.input_mut().mousemove(70, 40);
        frame(&mut ui, 1, &mut r);
        assert_eq!((r.x(), r.y(), r.width(), r.height()), (60, 30, 100, 60));

        r.can_drag = false;
        ui.input_mut().mouseup(70, 40, MouseButton::LEFT);
        frame(&mut ui, 2, &mut r);
        ui.input_mut().mousedown(70, 40, MouseButton::LEFT);
        frame(&mut ui, 3, &mut r);
        assert!(!r.is_held());
    }
}
