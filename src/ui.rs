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

use tracing::debug;

use crate::{collides, Clipboard, Dimensioni, Font, Input, MemoryClipboard, MonoFont, Popup, Recti, Style, Vec2i, Widget, WidgetId};

/// State shared by every widget during a frame.
///
/// Widgets receive `&mut Ui` in the event pass, where they may claim hover, start gestures or
/// take text focus, and `&Ui` in the render pass.
pub struct Ui {
    input: Input,
    hover: Option<WidgetId>,
    gesture: Option<WidgetId>,
    text_focus: Option<WidgetId>,
    hit_clip: Vec<Recti>,
    style: Style,
    font: Box<dyn Font>,
    clipboard: Box<dyn Clipboard>,
    screen: Dimensioni,
    now: Duration,
    popup: Option<Popup>,
    close_requested: bool,
}

impl Ui {
    /// Creates the shared state with host supplied collaborators.
    pub fn new(style: Style, font: Box<dyn Font>, clipboard: Box<dyn Clipboard>, screen: Dimensioni) -> Self {
        Self {
            input: Input::with_repeat(style.key_repeat_delay(), style.key_repeat_interval()),
            hover: None,
            gesture: None,
            text_focus: None,
            hit_clip: Vec::new(),
            style,
            font,
            clipboard,
            screen,
            now: Duration::ZERO,
            popup: None,
            close_requested: false,
        }
    }

    /// Shared state with the default style, a fixed-metric font and an in-memory clipboard.
    pub fn with_screen(width: i32, height: i32) -> Self {
        let style = Style::default();
        let font = MonoFont::with_size(style.text_size);
        Self::new(style, Box::new(font), Box::new(MemoryClipboard::default()), Dimensioni::new(width, height))
    }

    pub(crate) fn begin_frame(&mut self, now: Duration) {
        self.now = now;
        self.input.prelude(now);
        self.hover = None;
        self.hit_clip.clear();
        if self.gesture.is_some() && self.input.mouse_buttons().is_none() && self.input.previous_mouse_buttons().is_none() {
            debug!(claimant = ?self.gesture, "releasing orphaned gesture");
            self.gesture = None;
        }
    }

    pub(crate) fn end_frame(&mut self) { self.input.epilogue(); }

    /// Input snapshot of the current frame.
    pub fn input(&self) -> &Input { &self.input }

    /// Mutable input, for the host to feed events between frames.
    pub fn input_mut(&mut self) -> &mut Input { &mut self.input }

    /// Shared style.
    pub fn style(&self) -> &Style { &self.style }

    /// Font used to measure and lay out text.
    pub fn font(&self) -> &dyn Font { self.font.as_ref() }

    /// Screen size in pixels.
    pub fn screen(&self) -> Dimensioni { self.screen }

    pub(crate) fn set_screen(&mut self, screen: Dimensioni) { self.screen = screen; }

    /// Host time of the current frame.
    pub fn now(&self) -> Duration { self.now }

    /// Pointer position in screen coordinates.
    pub fn mouse_pos(&self) -> Vec2i { self.input.mouse_pos() }

    /// Left button went down this frame and no widget cancelled it yet.
    pub fn left_mouse_down(&self) -> bool { self.input.left_mouse_down() }
    /// Left button went up this frame.
    pub fn left_mouse_up(&self) -> bool { self.input.left_mouse_up() }
    /// Middle button went down this frame.
    pub fn middle_mouse_down(&self) -> bool { self.input.middle_mouse_down() }
    /// Right button went down this frame.
    pub fn right_mouse_down(&self) -> bool { self.input.right_mouse_down() }
    /// Right button went up this frame.
    pub fn right_mouse_up(&self) -> bool { self.input.right_mouse_up() }

    /// Swallows this frame's mouse edges so no other widget reacts to the same click.
    pub fn cancel_mouse_event(&mut self) { self.input.cancel_mouse_event(); }

    /// Inclusive hit test of the pointer against `r`, restricted to the visible clip regions.
    pub fn collides(&self, r: Recti) -> bool {
        let p = self.input.mouse_pos();
        collides(p, r) && self.hit_clip.iter().all(|clip| collides(p, *clip))
    }

    /// Runs `f` with hit testing restricted to `clip`.
    pub fn with_clip<R>(&mut self, clip: Recti, f: impl FnOnce(&mut Self) -> R) -> R {
        self.hit_clip.push(clip);
        let res = f(self);
        self.hit_clip.pop();
        res
    }

    /// Claims hover for `id`; succeeds if nobody claimed it this frame or `id` already holds it.
    pub fn claim_hover(&mut self, id: WidgetId) -> bool {
        match self.hover {
            None => {
                self.hover = Some(id);
                true
            }
            Some(holder) => holder == id,
        }
    }

    /// Widget that claimed hover this frame.
    pub fn hover_claimant(&self) -> Option<WidgetId> { self.hover }

    /// Starts a drag or press gesture; fails while another widget holds one.
    pub fn begin_gesture(&mut self, id: WidgetId) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        debug!(widget = id.raw(), "gesture claimed");
        self.gesture = Some(id);
        true
    }

    /// Ends the gesture if `id` holds it.
    pub fn release_gesture(&mut self, id: WidgetId) {
        if self.gesture == Some(id) {
            debug!(widget = id.raw(), "gesture released");
            self.gesture = None;
        }
    }

    /// Widget holding the gesture claim.
    pub fn gesture_claimant(&self) -> Option<WidgetId> { self.gesture }

    /// Gives text focus to `id`, or clears it.
    pub fn set_text_focus(&mut self, id: Option<WidgetId>) {
        if self.text_focus != id {
            debug!(widget = ?id.map(WidgetId::raw), "text focus changed");
            self.text_focus = id;
        }
    }

    /// Widget receiving typed keys.
    pub fn text_focus(&self) -> Option<WidgetId> { self.text_focus }

    /// Returns `true` if `id` receives typed keys.
    pub fn has_text_focus(&self, id: WidgetId) -> bool { self.text_focus == Some(id) }

    /// Reads the clipboard.
    pub fn clipboard_get(&mut self) -> String { self.clipboard.get() }

    /// Writes the clipboard.
    pub fn clipboard_set(&mut self, text: &str) { self.clipboard.set(text) }

    /// Shows `popup` above every layer, closing the one already shown.
    pub fn open_popup(&mut self, mut popup: Popup) {
        self.set_text_focus(None);
        popup.arm();
        debug!(popup = popup.id().raw(), "popup opened");
        if let Some(mut old) = self.popup.replace(popup) {
            old.notify_closed();
        }
    }

    /// Closes the active popup, including one whose own children call this during its pass.
    pub fn close_popup(&mut self) {
        match self.popup.take() {
            Some(mut popup) => {
                debug!(popup = popup.id().raw(), "popup closed");
                popup.notify_closed();
            }
            None => self.close_requested = true,
        }
    }

    /// Returns `true` while a popup is shown.
    pub fn popup_open(&self) -> bool { self.popup.is_some() }

    pub(crate) fn take_popup(&mut self) -> Option<Popup> {
        self.close_requested = false;
        self.popup.take()
    }

    /// Puts a popup back after its pass; yields to one opened in the meantime.
    pub(crate) fn restore_popup(&mut self, mut popup: Popup) {
        let close = std::mem::take(&mut self.close_requested);
        if self.popup.is_some() || close || !popup.is_open() {
            debug!(popup = popup.id().raw(), "popup closed");
            popup.notify_closed();
        } else {
            self.popup = Some(popup);
        }
    }

    pub(crate) fn restore_popup_silently(&mut self, popup: Popup) {
        if self.popup.is_none() {
            self.popup = Some(popup);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rect, MouseButton};

    #[test]
    fn first_hover_claim_wins() {
        let mut ui = Ui::with_screen(100, 100);
        let (a, b) = (WidgetId::next(), WidgetId::next());
        assert!(ui.claim_hover(a));
        assert!(!ui.claim_hover(b));
        assert!(ui.claim_hover(a));
        assert_eq!(ui.hover_claimant(), Some(a));
        ui.begin_frame(Duration::from_millis(16));
        assert_eq!(ui.hover_claimant(), None);
    }

    #[test]
    fn gesture_is_exclusive_until_released() {
        let mut ui = Ui::with_screen(100, 100);
        let (a, b) = (WidgetId::next(), WidgetId::next());
        assert!(ui.begin_gesture(a));
        assert!(!ui.begin_gesture(b));
        ui.release_gesture(b);
        assert_eq!(ui.gesture_claimant(), Some(a));
        ui.release_gesture(a);
        assert!(ui.begin_gesture(b));
    }

    #[test]
    fn clip_limits_hit_testing() {
        let mut ui = Ui::with_screen(100, 100);
        ui.input_mut().mousemove(50, 50);
        ui.begin_frame(Duration::ZERO);
        let target = rect(40, 40, 20, 20);
        assert!(ui.collides(target));
        let inside = ui.with_clip(rect(0, 0, 30, 30), |ui| ui.collides(target));
        assert!(!inside);
        assert!(ui.collides(target));
    }

    #[test]
    fn orphaned_gesture_is_released_once_buttons_are_up() {
        let mut ui = Ui::with_screen(100, 100);
        let id = WidgetId::next();
        ui.input_mut().mousedown(0, 0, MouseButton::LEFT);
        ui.begin_frame(Duration::ZERO);
        assert!(ui.begin_gesture(id));
        ui.input_mut().mouseup(0, 0, MouseButton::LEFT);
        ui.begin_frame(Duration::from_millis(16));
        assert_eq!(ui.gesture_claimant(), Some(id));
        ui.begin_frame(Duration::from_millis(32));
        assert_eq!(ui.gesture_claimant(), None);
    }

    #[test]
    fn opening_a_popup_drops_text_focus() {
        let mut ui = Ui::with_screen(200, 200);
        ui.set_text_focus(Some(WidgetId::next()));
        ui.open_popup(Popup::new(50, 50));
        assert!(ui.popup_open());
        assert_eq!(ui.text_focus(), None);
        ui.close_popup();
        assert!(!ui.popup_open());
    }
}
