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

/// Frames a freshly opened popup ignores, so the click that opened it does not close it.
const ARM_FRAMES: u32 = 10;

/// Called once when a popup is closed or replaced.
pub type CloseCallback = Box<dyn FnMut()>;

/// Modal box centered on screen above every layer.
///
/// A popup is shown with [`Ui::open_popup`]. A translucent mask covers the screen behind it and
/// clicking the mask closes the popup.
pub struct Popup {
    id: WidgetId,
    /// Body width.
    pub width: i32,
    /// Body height.
    pub height: i32,
    /// Widgets positioned relative to the body.
    pub children: Vec<Box<dyn Widget>>,
    on_close: Option<CloseCallback>,
    mask: Button,
    body: Panel,
    tick: u32,
    open: bool,
    x: i32,
    y: i32,
}

impl Popup {
    /// Creates a popup with an empty body.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            id: WidgetId::next(),
            width,
            height,
            children: Vec::new(),
            on_close: None,
            mask: Button::new(0, 0, 1, 1, ""),
            body: Panel::new(0, 0, width, height, Color::default()),
            tick: 0,
            open: false,
            x: 0,
            y: 0,
        }
    }

    /// Adds a child to the body.
    pub fn push(&mut self, child: impl Widget + 'static) { self.children.push(Box::new(child)); }

    /// Sets the close callback.
    pub fn with_on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Returns `true` between being opened and being closed.
    pub fn is_open(&self) -> bool { self.open }

    /// Screen position of the body, as laid out on the last event pass.
    pub fn position(&self) -> Vec2i { vec2(self.x, self.y) }

    pub(crate) fn arm(&mut self) {
        self.tick = ARM_FRAMES;
        self.open = true;
    }

    pub(crate) fn notify_closed(&mut self) {
        self.open = false;
        if let Some(f) = self.on_close.as_mut() {
            f();
        }
    }

    fn layout(&mut self, ui: &Ui) {
        let screen = ui.screen();
        let style = ui.style();
        self.x = (screen.width - self.width) / 2;
        self.y = (screen.height - self.height) / 2;
        (self.body.width, self.body.height) = (self.width, self.height);
        self.body.color = style.popup_bg_color;
        (self.mask.width, self.mask.height) = (screen.width, screen.height);
        self.mask.bg_color = Some(style.popup_fade_color);
        self.mask.hover_color = Some(style.popup_fade_color);
        self.mask.click_color = Some(style.popup_fade_color);
    }
}

impl Widget for Popup {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        if self.tick > 0 {
            self.tick -= 1;
            return;
        }
        self.layout(ui);
        let (bx, by) = (x + self.x, y + self.y);
        event_children(&mut self.children, ui, bx, by);
        self.body.event(ui, bx, by);
        self.mask.event(ui, x, y);
        if self.mask.clicked() {
            self.open = false;
        }
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        if self.tick > 0 {
            return;
        }
        self.layout(ui);
        let (bx, by) = (x + self.x, y + self.y);
        self.mask.update(ui, canvas, x, y);
        self.body.update(ui, canvas, bx, by);
        update_children(&mut self.children, ui, canvas, bx, by);
    }

    fn state(&self) -> ControlState {
        ControlState {
            hovered: self.body.is_hovered(),
            ..ControlState::default()
        }
    }

    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) { visit_children(&mut self.children, f) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn frame(ui: &mut Ui, n: u64) {
        ui.begin_frame(Duration::from_millis(n * 16));
        if let Some(mut popup) = ui.take_popup() {
            popup.event(ui, 0, 0);
            ui.restore_popup(popup);
        }
        ui.end_frame();
    }

    fn counting_popup(closed: &Rc<Cell<u32>>) -> Popup {
        let closed = closed.clone();
        Popup::new(100, 50).with_on_close(move || closed.set(closed.get() + 1))
    }

    #[test]
    fn ignores_input_while_arming() {
        let mut ui = Ui::with_screen(400, 300);
        let closed = Rc::new(Cell::new(0));
        ui.open_popup(counting_popup(&closed));
        ui.input_mut().mousedown(5, 5, MouseButton::LEFT);
        frame(&mut ui, 0);
        assert!(ui.popup_open());
        assert_eq!(closed.get(), 0);
    }

    #[test]
    fn clicking_the_mask_closes_it() {
        let mut ui = Ui::with_screen(400, 300);
        let closed = Rc::new(Cell::new(0));
        ui.open_popup(counting_popup(&closed));
        for n in 0..ARM_FRAMES as u64 {
            frame(&mut ui, n);
        }
        // inside the centered body: nothing happens
        ui.input_mut().mousedown(200, 150, MouseButton::LEFT);
        frame(&mut ui, 20);
        assert!(ui.popup_open());
        ui.input_mut().mouseup(200, 150, MouseButton::LEFT);
        frame(&mut ui, 21);

        ui.input_mut().mousedown(5, 5, MouseButton::LEFT);
        frame(&mut ui, 22);
        assert!(!ui.popup_open());
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn opening_another_popup_closes_the_first() {
        let mut ui = Ui::with_screen(400, 300);
        let closed = Rc::new(Cell::new(0));
        ui.open_popup(counting_popup(&closed));
        ui.open_popup(Popup::new(10, 10));
        assert_eq!(closed.get(), 1);
        assert!(ui.popup_open());
    }

    #[test]
    fn a_child_can_close_its_popup() {
        let mut ui = Ui::with_screen(400, 300);
        let closed = Rc::new(Cell::new(0));
        let mut popup = counting_popup(&closed);
        let callbacks = ButtonCallbacks {
            on_left_click: Some(Box::new(|ui: &mut Ui| ui.close_popup())),
            ..ButtonCallbacks::default()
        };
        popup.push(Button::with_callbacks(0, 0, 20, 20, "x", callbacks));
        ui.open_popup(popup);
        for n in 0..ARM_FRAMES as u64 {
            frame(&mut ui, n);
        }
        // body sits at (150, 125)
        ui.input_mut().mousedown(155, 130, MouseButton::LEFT);
        frame(&mut ui, 20);
        assert!(!ui.popup_open());
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn body_is_centered() {
        let mut ui = Ui::with_screen(400, 300);
        ui.open_popup(Popup::new(100, 50));
        for n in 0..=ARM_FRAMES as u64 {
            frame(&mut ui, n);
        }
        match ui.take_popup() {
            Some(p) => assert_eq!((p.position().x, p.position().y), (150, 125)),
            None => panic!("popup should still be open"),
        }
    }
}
