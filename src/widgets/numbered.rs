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
use tracing::warn;

use crate::*;

const GUTTER: i32 = 75;
const MIN_WIDTH: i32 = 200;

fn numbers(lines: usize) -> String { (1..=lines.max(1)).map(|n| format!("{n:>9}")).collect::<Vec<_>>().join("\n") }

/// Text editor with a line-number gutter that scrolls together with the text.
pub struct NumberedTextArea {
    id: WidgetId,
    split: Collapsible<TextBox, MultilineLabel>,
    numbered_lines: usize,
}

impl NumberedTextArea {
    /// Creates an empty editor; fails when narrower than 200 pixels.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, ConfigError> {
        if width < MIN_WIDTH {
            return Err(ConfigError::InvalidDimension { what: "width", value: width, expected: ">= 200" });
        }
        let mut split = Collapsible::new(x, y, width, height, SplitType::VerticalRight, GUTTER)?;
        split.split_draggable = false;

        let mut gutter = MultilineLabel::new(0, 0, &numbers(1));
        gutter.min_width = GUTTER;
        gutter.min_height = height;
        split.aside_mut().push(gutter);
        split.aside_mut().set_bounds(ScrollBounds {
            left: Some(0),
            top: Some(0),
            right: Some(0),
            bottom: Some(0),
        })?;

        split.main_mut().push(TextBox::new(2, 0, width - GUTTER, height, ""));
        split.main_mut().set_bounds(ScrollBounds {
            left: Some(0),
            top: Some(0),
            right: None,
            bottom: Some(0),
        })?;

        Ok(Self {
            id: WidgetId::next(),
            split,
            numbered_lines: 1,
        })
    }

    /// The editing widget.
    pub fn text_box(&self) -> &TextBox { &self.split.main().children()[0] }

    /// The editing widget, mutable.
    pub fn text_box_mut(&mut self) -> &mut TextBox { &mut self.split.main_mut().children_mut()[0] }

    /// The line-number gutter.
    pub fn gutter(&self) -> &MultilineLabel { &self.split.aside().children()[0] }

    /// Whole text.
    pub fn content(&self) -> String { self.text_box().content() }

    /// Replaces the text.
    pub fn set_content(&mut self, content: &str) { self.text_box_mut().set_content(content); }

    /// Vertical scroll offset shared by the text and the gutter.
    pub fn scroll_y(&self) -> i32 { self.split.main().offset().y }

    fn sync_offsets(&mut self) {
        let main = self.split.main().offset();
        let aside = self.split.aside().offset();
        if self.split.main().is_pointer_inside() {
            self.split.aside_mut().set_offset(vec2(aside.x, main.y));
        } else if self.split.aside().is_pointer_inside() {
            self.split.main_mut().set_offset(vec2(main.x, aside.y));
        }
    }

    fn sync_lines(&mut self, line_height: i32) {
        let lines = self.text_box().buffer().line_count();
        if lines != self.numbered_lines {
            self.numbered_lines = lines;
            self.split.aside_mut().children_mut()[0].set_content(&numbers(lines));
        }
        let bottom = Some(-line_height * (lines as i32 - 1));
        let main_bounds = ScrollBounds { bottom, ..self.split.main().bounds() };
        let aside_bounds = ScrollBounds { bottom, ..self.split.aside().bounds() };
        for res in [self.split.main_mut().set_bounds(main_bounds), self.split.aside_mut().set_bounds(aside_bounds)] {
            if let Err(e) = res {
                warn!(error = %e, "line gutter bounds rejected");
            }
        }
    }
}

impl Bounded for NumberedTextArea {
    fn position(&self) -> Vec2i { self.split.position() }
    fn size(&self) -> Dimensioni { self.split.size() }
    fn set_position(&mut self, pos: Vec2i) { self.split.set_position(pos); }
    fn set_size(&mut self, size: Dimensioni) {
        self.split.set_size(size);
        let tb = self.text_box_mut();
        tb.min_width = size.width - GUTTER;
        tb.min_height = size.height;
        self.split.aside_mut().children_mut()[0].min_height = size.height;
    }
}

impl Widget for NumberedTextArea {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        self.split.event(ui, x, y);
        self.sync_offsets();
        self.sync_lines(ui.font().line_height());
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) { self.split.update(ui, canvas, x, y); }

    fn state(&self) -> ControlState { self.text_box().state() }

    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) { f(&mut self.split) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const LH: i32 = 18;

    fn area() -> NumberedTextArea {
        match NumberedTextArea::new(0, 0, 300, 100) {
            Ok(a) => a,
            Err(e) => panic!("valid area rejected: {e}"),
        }
    }

    fn frame(ui: &mut Ui, n: u64, a: &mut NumberedTextArea) {
        ui.begin_frame(Duration::from_millis(n * 16));
        a.event(ui, 0, 0);
        ui.end_frame();
    }

    #[test]
    fn narrow_areas_are_rejected() {
        assert!(matches!(NumberedTextArea::new(0, 0, 199, 100), Err(ConfigError::InvalidDimension { what: "width", .. })));
    }

    #[test]
    fn gutter_counts_lines() {
        let mut ui = Ui::with_screen(400, 400);
        let mut a = area();
        a.set_content("a\nb\nc");
        frame(&mut ui, 0, &mut a);
        assert_eq!(a.gutter().content(), "        1\n        2\n        3");
        assert_eq!(a.gutter().line_count(), 3);
    }

    #[test]
    fn wheel_over_the_text_scrolls_both_panes() {
        let mut ui = Ui::with_screen(400, 400);
        let mut a = area();
        a.set_content(&"x\n".repeat(9));
        frame(&mut ui, 0, &mut a);

        ui.input_mut().mousemove(150, 50);
        ui.input_mut().scroll(-1);
        frame(&mut ui, 1, &mut a);
        assert_eq!(a.scroll_y(), -15);
        assert_eq!(a.split.aside().offset().y, -15);

        // ten lines allow scrolling by nine line heights at most
        ui.input_mut().scroll(-100);
        frame(&mut ui, 2, &mut a);
        assert_eq!(a.scroll_y(), -LH * 9);
        assert_eq!(a.split.aside().offset().y, -LH * 9);
    }

    #[test]
    fn wheel_over_the_gutter_scrolls_the_text() {
        let mut ui = Ui::with_screen(400, 400);
        let mut a = area();
        a.set_content(&"x\n".repeat(4));
        frame(&mut ui, 0, &mut a);
        ui.input_mut().mousemove(20, 50);
        ui.input_mut().scroll(-1);
        frame(&mut ui, 1, &mut a);
        assert_eq!(a.split.aside().offset().y, -15);
        assert_eq!(a.scroll_y(), -15);
    }
}
