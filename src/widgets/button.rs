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

/// Callback fired on an interaction edge.
pub type UiCallback = Box<dyn FnMut(&mut Ui)>;

/// Hook that draws extra decoration over the button body, given its screen rect.
pub type RenderHook = Box<dyn FnMut(&Ui, &mut Canvas, Recti)>;

#[derive(Default)]
/// Behaviour hooks of a [`Button`].
pub struct ButtonCallbacks {
    /// Left button pressed over the button.
    pub on_left_click: Option<UiCallback>,
    /// Left button released after a press on the button.
    pub off_left_click: Option<UiCallback>,
    /// Right button pressed over the button.
    pub on_right_click: Option<UiCallback>,
    /// Right button released after a press on the button.
    pub off_right_click: Option<UiCallback>,
    /// Pointer started hovering.
    pub on_hover: Option<UiCallback>,
    /// Pointer stopped hovering.
    pub off_hover: Option<UiCallback>,
    /// Drawn after the body and label, before the children.
    pub pre_render: Option<RenderHook>,
}

fn fire(cb: &mut Option<UiCallback>, ui: &mut Ui) {
    if let Some(cb) = cb.as_mut() {
        cb(ui);
    }
}

/// Clickable rectangle with a text label.
pub struct Button {
    id: WidgetId,
    /// Left edge relative to the parent origin.
    pub x: i32,
    /// Top edge relative to the parent origin.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Label drawn at the top-left corner.
    pub text: String,
    /// Idle body color, or the style's button color when unset.
    pub bg_color: Option<Color>,
    /// Body color while hovered.
    pub hover_color: Option<Color>,
    /// Body color while pressed.
    pub click_color: Option<Color>,
    /// Label color.
    pub text_color: Option<Color>,
    /// Interaction hooks.
    pub callbacks: ButtonCallbacks,
    /// Optional right-click action run by the root.
    pub on_context: Option<ContextAction>,
    /// Widgets drawn on top of the button.
    pub children: Vec<Box<dyn Widget>>,
    hovered: bool,
    lheld: bool,
    rheld: bool,
    clicked: bool,
}

impl Button {
    /// Creates a button drawn in the style colors.
    pub fn new(x: i32, y: i32, width: i32, height: i32, text: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            x,
            y,
            width,
            height,
            text: text.into(),
            bg_color: None,
            hover_color: None,
            click_color: None,
            text_color: None,
            callbacks: ButtonCallbacks::default(),
            on_context: None,
            children: Vec::new(),
            hovered: false,
            lheld: false,
            rheld: false,
            clicked: false,
        }
    }

    /// Creates a button with interaction hooks.
    pub fn with_callbacks(x: i32, y: i32, width: i32, height: i32, text: impl Into<String>, callbacks: ButtonCallbacks) -> Self {
        Self { callbacks, ..Self::new(x, y, width, height, text) }
    }

    /// Adds a child drawn over the button.
    pub fn push(&mut self, child: impl Widget + 'static) { self.children.push(Box::new(child)); }

    /// Returns `true` on the frame the left button was pressed on this button.
    pub fn clicked(&self) -> bool { self.clicked }

    /// Returns `true` while a left press that started on the button is held.
    pub fn is_left_held(&self) -> bool { self.lheld }

    /// Returns `true` while a right press that started on the button is held.
    pub fn is_right_held(&self) -> bool { self.rheld }

    /// Returns `true` if the button held the hover claim on the last event pass.
    pub fn is_hovered(&self) -> bool { self.hovered }

    fn body_color(&self, style: &Style) -> Color {
        if self.lheld {
            self.click_color.unwrap_or(style.button_click_color)
        } else if self.hovered {
            self.hover_color.unwrap_or(style.button_hover_color)
        } else {
            self.bg_color.unwrap_or(style.button_color)
        }
    }
}

implement_bounded!(Button);

impl Widget for Button {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        event_children(&mut self.children, ui, x + self.x, y + self.y);

        self.clicked = false;
        let was_hovered = self.hovered;
        let r = rect(x + self.x, y + self.y, self.width, self.height);
        if ui.collides(r) && ui.claim_hover(self.id) {
            self.hovered = true;
            if !was_hovered {
                fire(&mut self.callbacks.on_hover, ui);
            }
            if ui.left_mouse_down() {
                fire(&mut self.callbacks.on_left_click, ui);
                ui.cancel_mouse_event();
                self.lheld = true;
                self.clicked = true;
            }
            if ui.right_mouse_down() {
                fire(&mut self.callbacks.on_right_click, ui);
                ui.cancel_mouse_event();
                self.rheld = true;
            }
        } else {
            self.hovered = false;
            if was_hovered {
                fire(&mut self.callbacks.off_hover, ui);
            }
        }

        if ui.left_mouse_up() {
            if self.lheld {
                fire(&mut self.callbacks.off_left_click, ui);
            }
            self.lheld = false;
        }
        if ui.right_mouse_up() {
            if self.rheld {
                fire(&mut self.callbacks.off_right_click, ui);
            }
            self.rheld = false;
        }
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        let r = rect(x + self.x, y + self.y, self.width, self.height);
        canvas.push_clip_rect(r);
        canvas.draw_rect(r, self.body_color(ui.style()));
        let fg = self.text_color.unwrap_or(ui.style().text_color);
        canvas.draw_text(ui.font(), &self.text, vec2(r.x + 1, r.y + 1), fg);
        if let Some(hook) = self.callbacks.pre_render.as_mut() {
            hook(ui, canvas, r);
        }
        canvas.pop_clip_rect();
        update_children(&mut self.children, ui, canvas, r.x, r.y);
    }

    fn state(&self) -> ControlState {
        ControlState {
            hovered: self.hovered,
            held: self.lheld || self.rheld,
            focused: false,
        }
    }

    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) { visit_children(&mut self.children, f) }

    fn context_action(&mut self) -> Option<&mut ContextAction> { self.on_context.as_mut() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn counter() -> (Rc<Cell<u32>>, UiCallback) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, Box::new(move |_ui: &mut Ui| c.set(c.get() + 1)))
    }

    fn step(ui: &mut Ui, frame: u64, widgets: &mut [&mut Button]) {
        ui.begin_frame(Duration::from_millis(frame * 16));
        for w in widgets.iter_mut() {
            w.event(ui, 0, 0);
        }
        ui.end_frame();
    }

    #[test]
    fn press_and_release_fires_each_callback_once() {
        let mut ui = Ui::with_screen(100, 100);
        let (pressed, on_left_click) = counter();
        let (released, off_left_click) = counter();
        let callbacks = ButtonCallbacks {
            on_left_click: Some(on_left_click),
            off_left_click: Some(off_left_click),
            ..ButtonCallbacks::default()
        };
        let mut button = Button::with_callbacks(10, 10, 40, 20, "ok", callbacks);

        ui.input_mut().mousemove(20, 20);
        step(&mut ui, 0, &mut [&mut button]);
        ui.input_mut().mousedown(20, 20, MouseButton::LEFT);
        step(&mut ui, 1, &mut [&mut button]);
        assert!(button.clicked());
        step(&mut ui, 2, &mut [&mut button]);
        assert!(!button.clicked());
        assert!(button.is_left_held());
        ui.input_mut().mouseup(20, 20, MouseButton::LEFT);
        step(&mut ui, 3, &mut [&mut button]);

        assert_eq!(pressed.get(), 1);
        assert_eq!(released.get(), 1);
        assert!(!button.is_left_held());
    }

    #[test]
    fn overlapping_buttons_only_fire_the_topmost() {
        let mut ui = Ui::with_screen(100, 100);
        let (top_count, top_cb) = counter();
        let (below_count, below_cb) = counter();
        let mut top = Button::with_callbacks(0, 0, 50, 50, "top", ButtonCallbacks { on_left_click: Some(top_cb), ..Default::default() });
        let mut below = Button::with_callbacks(0, 0, 50, 50, "below", ButtonCallbacks { on_left_click: Some(below_cb), ..Default::default() });

        ui.input_mut().mousedown(25, 25, MouseButton::LEFT);
        step(&mut ui, 0, &mut [&mut top, &mut below]);
        assert_eq!(top_count.get(), 1);
        assert_eq!(below_count.get(), 0);
        assert!(top.is_hovered() && !below.is_hovered());
    }

    #[test]
    fn hover_edges_fire_on_enter_and_leave() {
        let mut ui = Ui::with_screen(100, 100);
        let (entered, on_hover) = counter();
        let (left, off_hover) = counter();
        let callbacks = ButtonCallbacks {
            on_hover: Some(on_hover),
            off_hover: Some(off_hover),
            ..ButtonCallbacks::default()
        };
        let mut button = Button::with_callbacks(0, 0, 10, 10, "", callbacks);
        ui.input_mut().mousemove(5, 5);
        step(&mut ui, 0, &mut [&mut button]);
        step(&mut ui, 1, &mut [&mut button]);
        ui.input_mut().mousemove(50, 50);
        step(&mut ui, 2, &mut [&mut button]);
        assert_eq!((entered.get(), left.get()), (1, 1));
    }
}
