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
use crate::*;

const SPLIT_THICKNESS: i32 = 4;
const SPLIT_HALF: i32 = SPLIT_THICKNESS / 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Orientation of a [`Collapsible`]; the name gives where the main pane sits.
pub enum SplitType {
    /// Vertical divider, main pane on the left, aside on the right.
    VerticalLeft,
    /// Vertical divider, main pane on the right, aside on the left.
    VerticalRight,
    /// Horizontal divider, main pane on top, aside below.
    HorizontalTop,
    /// Horizontal divider, main pane at the bottom, aside above.
    HorizontalBottom,
}

impl SplitType {
    /// Returns `true` for orientations with a vertical divider.
    pub fn is_vertical(&self) -> bool { matches!(self, Self::VerticalLeft | Self::VerticalRight) }

    /// Returns `true` if the aside pane sits before the divider.
    fn aside_first(&self) -> bool { matches!(self, Self::VerticalRight | Self::HorizontalBottom) }
}

/// Two scroll panes separated by a draggable divider; the aside pane snaps shut when dragged
/// below `split_min`.
///
/// Both panes always share the full extent along the split axis. The divider line sits at the
/// splitter position plus half its thickness.
pub struct Collapsible<M: Widget = Box<dyn Widget>, A: Widget = Box<dyn Widget>> {
    id: WidgetId,
    /// Left edge relative to the parent origin.
    pub x: i32,
    /// Top edge relative to the parent origin.
    pub y: i32,
    /// Container width.
    pub width: i32,
    /// Container height.
    pub height: i32,
    /// Smallest aside extent that survives releasing the splitter.
    pub split_min: i32,
    /// Allows the user to move the divider.
    pub split_draggable: bool,
    /// Divider color, or the style's split color when unset.
    pub split_color: Option<Color>,
    split_type: SplitType,
    split_size: i32,
    split_visible: bool,
    main: Scrollable<M>,
    aside: Scrollable<A>,
    splitter: Draggable,
}

impl<M: Widget, A: Widget> Collapsible<M, A> {
    /// Creates a split container whose aside pane starts `split_size` pixels wide (or tall).
    pub fn new(x: i32, y: i32, width: i32, height: i32, split_type: SplitType, split_size: i32) -> Result<Self, ConfigError> {
        if width <= 0 {
            return Err(ConfigError::InvalidDimension { what: "width", value: width, expected: "> 0" });
        }
        if height <= 0 {
            return Err(ConfigError::InvalidDimension { what: "height", value: height, expected: "> 0" });
        }
        let extent = if split_type.is_vertical() { width } else { height };
        if !(0..=extent).contains(&split_size) {
            return Err(ConfigError::InvalidDimension {
                what: "split_size",
                value: split_size,
                expected: "0 <= split_size <= extent",
            });
        }

        let splitter = if split_type.is_vertical() {
            Draggable::locked(0, 0, SPLIT_THICKNESS, height, false, true)
        } else {
            Draggable::locked(0, 0, width, SPLIT_THICKNESS, true, false)
        };
        let mut c = Self {
            id: WidgetId::next(),
            x,
            y,
            width,
            height,
            split_min: 1,
            split_draggable: true,
            split_color: None,
            split_type,
            split_size,
            split_visible: split_size > 0,
            main: Scrollable::unbounded(0, 0, width, height),
            aside: Scrollable::unbounded(0, 0, width, height),
            splitter,
        };
        c.open_aside();
        c.layout();
        Ok(c)
    }

    /// Orientation.
    pub fn split_type(&self) -> SplitType { self.split_type }

    /// Main pane.
    pub fn main(&self) -> &Scrollable<M> { &self.main }
    /// Mutable main pane.
    pub fn main_mut(&mut self) -> &mut Scrollable<M> { &mut self.main }
    /// Aside pane.
    pub fn aside(&self) -> &Scrollable<A> { &self.aside }
    /// Mutable aside pane.
    pub fn aside_mut(&mut self) -> &mut Scrollable<A> { &mut self.aside }

    /// Returns `true` while the aside pane is open.
    pub fn split_visible(&self) -> bool { self.split_visible }

    /// Opens the aside pane at its initial size, or snaps it shut.
    pub fn set_split_visible(&mut self, visible: bool) {
        if visible {
            if self.aside_extent() == 0 {
                self.open_aside();
            }
        } else {
            self.collapse();
        }
        self.layout();
    }

    /// Splitter handle, positioned relative to the container.
    pub fn splitter(&self) -> &Draggable { &self.splitter }

    fn extent(&self) -> i32 {
        if self.split_type.is_vertical() {
            self.width
        } else {
            self.height
        }
    }

    fn splitter_pos(&self) -> i32 {
        if self.split_type.is_vertical() {
            self.splitter.x
        } else {
            self.splitter.y
        }
    }

    fn set_splitter_pos(&mut self, pos: i32) {
        let pos = pos.clamp(-SPLIT_HALF, self.extent() - SPLIT_HALF);
        if self.split_type.is_vertical() {
            self.splitter.x = pos;
        } else {
            self.splitter.y = pos;
        }
    }

    /// Coordinate of the divider line along the split axis.
    pub fn divider(&self) -> i32 { self.splitter_pos() + SPLIT_HALF }

    /// Moves the divider line, clamped to the container.
    pub fn set_divider(&mut self, divider: i32) {
        self.set_splitter_pos(divider - SPLIT_HALF);
        self.layout();
    }

    fn aside_extent(&self) -> i32 {
        if self.split_type.aside_first() {
            self.divider()
        } else {
            self.extent() - self.divider()
        }
    }

    fn open_aside(&mut self) {
        let divider = if self.split_type.aside_first() { self.split_size } else { self.extent() - self.split_size };
        self.set_splitter_pos(divider - SPLIT_HALF);
    }

    fn collapse(&mut self) {
        let divider = if self.split_type.aside_first() { 0 } else { self.extent() };
        self.set_splitter_pos(divider - SPLIT_HALF);
    }

    /// Sizes both panes from the splitter and snaps the aside shut when it is too small.
    fn layout(&mut self) {
        if !self.splitter.is_held() && self.aside_extent() < self.split_min {
            self.collapse();
        }
        self.split_visible = self.aside_extent() > 0;

        let (w, h, d) = (self.width, self.height, self.divider());
        let (main, aside) = match self.split_type {
            SplitType::VerticalLeft => (rect(0, 0, d, h), rect(d, 0, w - d, h)),
            SplitType::VerticalRight => (rect(d, 0, w - d, h), rect(0, 0, d, h)),
            SplitType::HorizontalTop => (rect(0, 0, w, d), rect(0, d, w, h - d)),
            SplitType::HorizontalBottom => (rect(0, d, w, h - d), rect(0, 0, w, d)),
        };
        place(&mut self.main, main);
        place(&mut self.aside, aside);

        if self.split_type.is_vertical() {
            self.splitter.height = h;
            self.splitter.lock_vertical = true;
            self.splitter.lock_horizontal = !self.split_draggable;
        } else {
            self.splitter.width = w;
            self.splitter.lock_horizontal = true;
            self.splitter.lock_vertical = !self.split_draggable;
        }
    }
}

fn place(pane: &mut dyn Bounded, r: Recti) {
    pane.set_position(vec2(r.x, r.y));
    pane.set_size(Dimensioni::new(r.width, r.height));
}

impl<M: Widget, A: Widget> Bounded for Collapsible<M, A> {
    fn position(&self) -> Vec2i { vec2(self.x, self.y) }
    fn size(&self) -> Dimensioni { Dimensioni::new(self.width, self.height) }
    fn set_position(&mut self, pos: Vec2i) {
        self.x = pos.x;
        self.y = pos.y;
    }
    fn set_size(&mut self, size: Dimensioni) {
        self.width = size.width;
        self.height = size.height;
        let pos = self.splitter_pos();
        self.set_splitter_pos(pos);
        self.layout();
    }
}

impl<M: Widget, A: Widget> Widget for Collapsible<M, A> {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        let (ox, oy) = (x + self.x, y + self.y);
        self.layout();
        self.splitter.event(ui, ox, oy);
        let pos = self.splitter_pos();
        self.set_splitter_pos(pos);
        self.layout();

        let bounds = rect(ox, oy, self.width, self.height);
        let (main, aside, visible) = (&mut self.main, &mut self.aside, self.split_visible);
        ui.with_clip(bounds, |ui| {
            main.event(ui, ox, oy);
            if visible {
                aside.event(ui, ox, oy);
            }
        });
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        let (ox, oy) = (x + self.x, y + self.y);
        canvas.push_clip_rect(rect(ox, oy, self.width, self.height));
        if self.split_visible {
            self.aside.update(ui, canvas, ox, oy);
        }
        self.main.update(ui, canvas, ox, oy);
        self.splitter.update(ui, canvas, ox, oy);

        let color = self.split_color.unwrap_or(ui.style().split_color);
        let s = &self.splitter;
        let bar = if s.is_hovered() && self.split_draggable {
            rect(ox + s.x, oy + s.y, s.width, s.height)
        } else if self.split_type.is_vertical() {
            rect(ox + s.x + SPLIT_HALF, oy + s.y, 1, s.height)
        } else {
            rect(ox + s.x, oy + s.y + SPLIT_HALF, s.width, 1)
        };
        canvas.draw_rect(bar, color);
        canvas.pop_clip_rect();
    }

    fn state(&self) -> ControlState {
        ControlState {
            hovered: self.splitter.is_hovered(),
            held: self.splitter.is_held(),
            focused: false,
        }
    }

    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) {
        f(&mut self.main);
        f(&mut self.aside);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn split(split_type: SplitType, w: i32, h: i32, size: i32) -> Collapsible {
        match Collapsible::new(0, 0, w, h, split_type, size) {
            Ok(c) => c,
            Err(e) => panic!("valid split rejected: {e}"),
        }
    }

    fn frame(ui: &mut Ui, n: u64, c: &mut Collapsible) {
        ui.begin_frame(Duration::from_millis(n * 16));
        c.event(ui, 0, 0);
        ui.end_frame();
    }

    #[test]
    fn initial_layout_per_orientation() {
        let c = split(SplitType::VerticalLeft, 400, 300, 150);
        assert_eq!((c.main().width, c.aside().x, c.aside().width), (250, 250, 150));
        let c = split(SplitType::VerticalRight, 400, 300, 150);
        assert_eq!((c.aside().width, c.main().x, c.main().width), (150, 150, 250));
        let c = split(SplitType::HorizontalTop, 400, 300, 100);
        assert_eq!((c.main().height, c.aside().y, c.aside().height), (200, 200, 100));
        let c = split(SplitType::HorizontalBottom, 400, 300, 100);
        assert_eq!((c.aside().height, c.main().y, c.main().height), (100, 100, 200));
    }

    #[test]
    fn panes_always_fill_the_extent() {
        for split_type in [SplitType::VerticalLeft, SplitType::VerticalRight, SplitType::HorizontalTop, SplitType::HorizontalBottom] {
            let mut c = split(split_type, 400, 300, 100);
            c.split_min = 0;
            let extent = if split_type.is_vertical() { 400 } else { 300 };
            for divider in (-10..=extent + 10).step_by(7) {
                c.set_divider(divider);
                let total = if split_type.is_vertical() {
                    c.main().width + c.aside().width
                } else {
                    c.main().height + c.aside().height
                };
                assert_eq!(total, extent, "{split_type:?} at {divider}");
            }
        }
    }

    #[test]
    fn releasing_below_min_snaps_the_aside_shut() {
        let mut ui = Ui::with_screen(800, 600);
        let mut c = split(SplitType::VerticalRight, 400, 300, 150);
        c.split_min = 50;
        assert_eq!(c.splitter().x, 148);

        ui.input_mut().mousedown(149, 100, MouseButton::LEFT);
        frame(&mut ui, 0, &mut c);
        assert!(c.splitter().is_held());

        ui.input_mut().mousemove(21, 100);
        frame(&mut ui, 1, &mut c);
        assert_eq!(c.splitter().x, 20);
        assert!(c.split_visible());

        ui.input_mut().mouseup(21, 100, MouseButton::LEFT);
        frame(&mut ui, 2, &mut c);
        assert_eq!(c.aside().width, 0);
        assert!(!c.split_visible());
        assert_eq!(c.main().width, 400);
    }

    #[test]
    fn fixed_divider_ignores_drags() {
        let mut ui = Ui::with_screen(800, 600);
        let mut c = split(SplitType::VerticalLeft, 400, 300, 100);
        c.split_draggable = false;
        ui.input_mut().mousedown(300, 50, MouseButton::LEFT);
        frame(&mut ui, 0, &mut c);
        ui.input_mut().mousemove(100, 50);
        frame(&mut ui, 1, &mut c);
        assert_eq!(c.divider(), 300);
    }

    #[test]
    fn visibility_toggle_restores_the_initial_size() {
        let mut c = split(SplitType::HorizontalTop, 400, 300, 80);
        c.set_split_visible(false);
        assert_eq!((c.aside().height, c.main().height), (0, 300));
        c.set_split_visible(true);
        assert_eq!((c.aside().height, c.main().height), (80, 220));
        assert!(c.split_visible());
    }

    #[test]
    fn out_of_range_split_is_rejected() {
        assert!(Collapsible::<Box<dyn Widget>, Box<dyn Widget>>::new(0, 0, 100, 100, SplitType::VerticalLeft, 150).is_err());
        assert!(Collapsible::<Box<dyn Widget>, Box<dyn Widget>>::new(0, 0, 0, 100, SplitType::VerticalLeft, 0).is_err());
    }
}
