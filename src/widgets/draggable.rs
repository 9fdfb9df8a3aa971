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

/// Invisible handle that follows the pointer while the left button is held on it.
pub struct Draggable {
    id: WidgetId,
    /// Left edge relative to the parent origin.
    pub x: i32,
    /// Top edge relative to the parent origin.
    pub y: i32,
    /// Width of the grab area.
    pub width: i32,
    /// Height of the grab area.
    pub height: i32,
    /// Keeps `x` fixed while dragging.
    pub lock_horizontal: bool,
    /// Keeps `y` fixed while dragging.
    pub lock_vertical: bool,
    /// Widgets carried along with the handle.
    pub children: Vec<Box<dyn Widget>>,
    held: bool,
    hovered: bool,
    hx: i32,
    hy: i32,
}

impl Draggable {
    /// Creates a handle free to move on both axes.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id: WidgetId::next(),
            x,
            y,
            width,
            height,
            lock_horizontal: false,
            lock_vertical: false,
            children: Vec::new(),
            held: false,
            hovered: false,
            hx: 0,
            hy: 0,
        }
    }

    /// Creates a handle constrained by the given axis locks.
    pub fn locked(x: i32, y: i32, width: i32, height: i32, lock_horizontal: bool, lock_vertical: bool) -> Self {
        Self {
            lock_horizontal,
            lock_vertical,
            ..Self::new(x, y, width, height)
        }
    }

    /// Adds a carried child.
    pub fn push(&mut self, child: impl Widget + 'static) { self.children.push(Box::new(child)); }

    /// Returns `true` while the handle is being dragged.
    pub fn is_held(&self) -> bool { self.held }

    /// Returns `true` if the handle held the hover claim on the last event pass.
    pub fn is_hovered(&self) -> bool { self.hovered }

    fn release(&mut self, ui: &mut Ui) {
        self.held = false;
        ui.release_gesture(self.id);
    }

    /// Runs the grab and follow logic for a handle whose parent origin is `(x, y)`.
    pub(crate) fn drag(&mut self, ui: &mut Ui, x: i32, y: i32, grabbable: bool) {
        let p = ui.mouse_pos();
        self.hovered = ui.collides(rect(x + self.x, y + self.y, self.width, self.height)) && ui.claim_hover(self.id);

        if ui.left_mouse_down() {
            if !self.hovered {
                self.release(ui);
            } else if grabbable && ui.begin_gesture(self.id) {
                ui.cancel_mouse_event();
                self.held = true;
                self.hx = p.x - (x + self.x);
                self.hy = p.y - (y + self.y);
            }
        } else if ui.left_mouse_up() {
            self.release(ui);
        }

        if self.held {
            if !self.lock_horizontal {
                self.x = (p.x - self.hx) - x;
            }
            if !self.lock_vertical {
                self.y = (p.y - self.hy) - y;
            }
        }
    }
}

implement_bounded!(Draggable);

impl Widget for Draggable {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        event_children(&mut self.children, ui, x + self.x, y + self.y);
        self.drag(ui, x, y, true);
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) { update_children(&mut self.children, ui, canvas, x + self.x, y + self.y); }

    fn state(&self) -> ControlState {
        ControlState {
            hovered: self.hovered,
            held: self.held,
            focused: false,
        }
    }

    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) { visit_children(&mut self.children, f) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn frame(ui: &mut Ui, n: u64, widgets: &mut [&mut Draggable]) {
        ui.begin_frame(Duration::from_millis(n * 16));
        for w in widgets.iter_mut() {
            w.event(ui, 0, 0);
        }
        ui.end_frame();
    }

    #[test]
    fn follows_the_pointer_keeping_the_grab_offset() {
        let mut ui = Ui::with_screen(200, 200);
        let mut handle = Draggable::new(10, 10, 20, 20);
        ui.input_mut().mousedown(15, 18, MouseButton::LEFT);
        frame(&mut ui, 0, &mut [&mut handle]);
        assert!(handle.is_held());
        assert_eq!(ui.gesture_claimant(), Some(handle.id()));

        ui.input_mut().mousemove(55, 48);
        frame(&mut ui, 1, &mut [&mut handle]);
        assert_eq!((handle.x, handle.y), (50, 40));

        ui.input_mut().mouseup(55, 48, MouseButton::LEFT);
        frame(&mut ui, 2, &mut [&mut handle]);
        assert!(!handle.is_held());
        assert_eq!(ui.gesture_claimant(), None);
    }

    #[test]
    fn locked_axis_stays_put() {
        let mut ui = Ui::with_screen(200, 200);
        let mut handle = Draggable::locked(0, 0, 10, 10, false, true);
        ui.input_mut().mousedown(5, 5, MouseButton::LEFT);
        frame(&mut ui, 0, &mut [&mut handle]);
        ui.input_mut().mousemove(40, 90);
        frame(&mut ui, 1, &mut [&mut handle]);
        assert_eq!((handle.x, handle.y), (35, 0));
    }

    #[test]
    fn only_one_overlapping_handle_is_picked_up() {
        let mut ui = Ui::with_screen(200, 200);
        let mut top = Draggable::new(0, 0, 50, 50);
        let mut below = Draggable::new(0, 0, 50, 50);
        ui.input_mut().mousedown(10, 10, MouseButton::LEFT);
        frame(&mut ui, 0, &mut [&mut top, &mut below]);
        assert!(top.is_held());
        assert!(!below.is_held());
        let hovered = [top.state().hovered, below.state().hovered];
        assert_eq!(hovered.iter().filter(|h| **h).count(), 1);
    }
}
