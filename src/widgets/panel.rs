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

/// Filled rectangle that holds children and stops clicks from reaching widgets beneath it.
pub struct Panel {
    id: WidgetId,
    /// Left edge relative to the parent origin.
    pub x: i32,
    /// Top edge relative to the parent origin.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Fill color; fully transparent panels draw nothing.
    pub color: Color,
    /// Child widgets, positioned relative to the panel.
    pub children: Vec<Box<dyn Widget>>,
    /// Optional right-click action.
    pub on_context: Option<ContextAction>,
    hovered: bool,
}

impl Panel {
    /// Creates an empty panel.
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        Self {
            id: WidgetId::next(),
            x,
            y,
            width,
            height,
            color,
            children: Vec::new(),
            on_context: None,
            hovered: false,
        }
    }

    /// Adds a child drawn above the existing ones.
    pub fn push(&mut self, child: impl Widget + 'static) { self.children.push(Box::new(child)); }

    /// Returns `true` if the panel held the hover claim on the last event pass.
    pub fn is_hovered(&self) -> bool { self.hovered }
}

implement_bounded!(Panel);

impl Widget for Panel {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        event_children(&mut self.children, ui, x + self.x, y + self.y);
        self.hovered = ui.collides(rect(x + self.x, y + self.y, self.width, self.height)) && ui.claim_hover(self.id);
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        canvas.draw_rect(rect(x + self.x, y + self.y, self.width, self.height), self.color);
        update_children(&mut self.children, ui, canvas, x + self.x, y + self.y);
    }

    fn state(&self) -> ControlState {
        ControlState {
            hovered: self.hovered,
            ..ControlState::default()
        }
    }

    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) { visit_children(&mut self.children, f) }

    fn context_action(&mut self) -> Option<&mut ContextAction> { self.on_context.as_mut() }
}
