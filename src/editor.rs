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
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::*;

/// Traversal root: owns the shared [`Ui`] state, the layered widget tree and the draw list.
///
/// Each [`Editor::frame`] snapshots input, runs the event pass front-to-back (popup first,
/// then layers from the highest index), dispatches a right click to the hovered widget's
/// context action, runs the render pass back-to-front and replays it to the renderer.
pub struct Editor {
    ui: Ui,
    root: Layered,
    canvas: Canvas,
    running: bool,
}

impl Editor {
    /// Creates an editor with the default style, font and clipboard.
    pub fn new(width: i32, height: i32) -> Self { Self::from_ui(Ui::with_screen(width, height)) }

    /// Creates an editor around host supplied collaborators.
    pub fn with_parts(style: Style, font: Box<dyn Font>, clipboard: Box<dyn Clipboard>, width: i32, height: i32) -> Self {
        Self::from_ui(Ui::new(style, font, clipboard, Dimensioni::new(width, height)))
    }

    fn from_ui(ui: Ui) -> Self {
        let mut root = Layered::new(0, 0);
        root.add_layer(0);
        let canvas = Canvas::new(ui.screen());
        Self { ui, root, canvas, running: true }
    }

    /// Ensures `layer` exists.
    pub fn add_layer(&mut self, layer: i32) { self.root.add_layer(layer); }

    /// Adds a widget on top of `layer`.
    pub fn push(&mut self, layer: i32, widget: impl Widget + 'static) { self.root.push(layer, widget); }

    /// Layered widget tree.
    pub fn root(&self) -> &Layered { &self.root }

    /// Mutable widget tree.
    pub fn root_mut(&mut self) -> &mut Layered { &mut self.root }

    /// Shared state.
    pub fn ui(&self) -> &Ui { &self.ui }

    /// Mutable shared state.
    pub fn ui_mut(&mut self) -> &mut Ui { &mut self.ui }

    /// Input queue the host feeds between frames.
    pub fn input_mut(&mut self) -> &mut Input { self.ui.input_mut() }

    /// Shows a popup above every layer.
    pub fn open_popup(&mut self, popup: Popup) { self.ui.open_popup(popup); }

    /// Adapts to a new window size.
    pub fn resize(&mut self, width: i32, height: i32) {
        let dim = Dimensioni::new(width, height);
        self.ui.set_screen(dim);
        self.canvas.resize(dim);
    }

    /// Returns `false` once [`Editor::stop`] was called.
    pub fn is_running(&self) -> bool { self.running }

    /// Asks [`Editor::run`] to return after the current frame.
    pub fn stop(&mut self) {
        debug!("editor stop requested");
        self.running = false;
    }

    /// Runs one frame at host time `now` and replays it to `renderer`.
    pub fn frame<R: Renderer + ?Sized>(&mut self, now: Duration, renderer: &mut R) {
        self.ui.begin_frame(now);

        if let Some(mut popup) = self.ui.take_popup() {
            popup.event(&mut self.ui, 0, 0);
            self.ui.restore_popup(popup);
        }

        let right_click = self.ui.right_mouse_down();
        self.root.event(&mut self.ui, 0, 0);
        trace!(hover = ?self.ui.hover_claimant(), gesture = ?self.ui.gesture_claimant(), "event pass done");

        if right_click {
            if let Some(id) = self.ui.hover_claimant() {
                self.dispatch_context(id);
            }
        }

        self.root.update(&self.ui, &mut self.canvas, 0, 0);
        if let Some(mut popup) = self.ui.take_popup() {
            popup.update(&self.ui, &mut self.canvas, 0, 0);
            self.ui.restore_popup_silently(popup);
        }

        self.ui.end_frame();
        let clear = self.ui.style().clear_color;
        self.canvas.render(renderer, clear);
    }

    fn dispatch_context(&mut self, id: WidgetId) {
        let ui = &mut self.ui;
        let outcome = with_widget(&mut self.root, id, &mut |w| w.context_action().map(|action| action(&mut *ui)));
        if let Some(Some(Err(e))) = outcome {
            warn!(widget = id.raw(), error = %e, "context action failed");
        }
    }

    /// Runs frames until [`Editor::stop`] is called. `pump` feeds host events into the editor
    /// and returns the current host time; it may call `stop` itself.
    pub fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R, mut pump: impl FnMut(&mut Self) -> Duration) {
        while self.running {
            let now = pump(self);
            if !self.running {
                break;
            }
            self.frame(now, renderer);
        }
    }
}
