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

use crate::{vec2, KeyMode, MouseButton, Vec2i};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A typed key delivered to the focused text widget.
pub enum KeyToken {
    /// Printable character.
    Char(char),
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Return or keypad enter.
    Enter,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Escape.
    Escape,
    /// Ctrl+Z (redo when shift is held).
    Undo,
    /// Ctrl+X.
    Cut,
    /// Ctrl+C.
    Copy,
    /// Ctrl+V.
    Paste,
    /// Ctrl+A.
    SelectAll,
    /// Ctrl+S.
    Save,
}

impl KeyToken {
    /// Maps a character as produced by a terminal style keyboard layer, where control
    /// shortcuts arrive as ASCII control codes.
    pub fn from_char(c: char) -> Self {
        match c {
            '\x1a' => Self::Undo,
            '\x18' => Self::Cut,
            '\x03' => Self::Copy,
            '\x16' => Self::Paste,
            '\x01' => Self::SelectAll,
            '\x13' => Self::Save,
            '\x08' => Self::Backspace,
            '\x7f' => Self::Delete,
            '\x1b' => Self::Escape,
            '\t' => Self::Tab,
            '\n' | '\r' => Self::Enter,
            c => Self::Char(c),
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct HeldKey {
    token: KeyToken,
    since: Option<Duration>,
    last_repeat: Duration,
}

#[derive(Clone, Debug)]
/// Per-frame input snapshot.
///
/// The host feeds raw events between frames; [`Input::prelude`] freezes them into the
/// previous/current pair used for edge detection.
pub struct Input {
    mouse_pos: Vec2i,
    mouse_down: MouseButton,
    prev_mouse: MouseButton,
    cur_mouse: MouseButton,
    key_mods: KeyMode,
    held: Vec<HeldKey>,
    pending: Vec<KeyToken>,
    typed: Vec<KeyToken>,
    pending_scroll: i32,
    scroll: i32,
    repeat_delay: Duration,
    repeat_interval: Duration,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2i::default(),
            mouse_down: MouseButton::NONE,
            prev_mouse: MouseButton::NONE,
            cur_mouse: MouseButton::NONE,
            key_mods: KeyMode::NONE,
            held: Vec::new(),
            pending: Vec::new(),
            typed: Vec::new(),
            pending_scroll: 0,
            scroll: 0,
            repeat_delay: Duration::from_millis(800),
            repeat_interval: Duration::from_millis(50),
        }
    }
}

impl Input {
    /// Creates an input with explicit key repeat timing.
    pub fn with_repeat(delay: Duration, interval: Duration) -> Self {
        Self {
            repeat_delay: delay,
            repeat_interval: interval,
            ..Self::default()
        }
    }

    /// Updates the current mouse pointer position.
    pub fn mousemove(&mut self, x: i32, y: i32) { self.mouse_pos = vec2(x, y); }

    /// Records that the specified mouse button was pressed.
    pub fn mousedown(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down |= btn;
    }

    /// Records that the specified mouse button was released.
    pub fn mouseup(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down &= !btn;
    }

    /// Records wheel movement; positive values scroll content down towards its start.
    pub fn scroll(&mut self, delta: i32) { self.pending_scroll += delta; }

    /// Records that a modifier key was pressed.
    pub fn keydown(&mut self, key: KeyMode) { self.key_mods |= key; }

    /// Records that a modifier key was released.
    pub fn keyup(&mut self, key: KeyMode) { self.key_mods &= !key; }

    /// Records a key press that produces a token; the token repeats while held.
    pub fn key_pressed(&mut self, token: KeyToken) {
        self.pending.push(token);
        if !self.held.iter().any(|h| h.token == token) {
            self.held.push(HeldKey {
                token,
                since: None,
                last_repeat: Duration::ZERO,
            });
        }
    }

    /// Records that a repeating key was released.
    pub fn key_released(&mut self, token: KeyToken) { self.held.retain(|h| h.token != token); }

    /// Appends one-shot text, mapping control codes to their shortcut tokens.
    pub fn text(&mut self, text: &str) { self.pending.extend(text.chars().map(KeyToken::from_char)); }

    /// Freezes pending host events into this frame's snapshot.
    pub fn prelude(&mut self, now: Duration) {
        self.prev_mouse = self.cur_mouse;
        self.cur_mouse = self.mouse_down;
        self.scroll = self.pending_scroll;
        self.pending_scroll = 0;
        self.typed.clear();
        self.typed.append(&mut self.pending);

        for key in self.held.iter_mut() {
            let since = *key.since.get_or_insert(now);
            let held_for = now.saturating_sub(since);
            if held_for > self.repeat_delay && now.saturating_sub(key.last_repeat) >= self.repeat_interval {
                key.last_repeat = now;
                self.typed.push(key.token);
            }
        }
    }

    /// Clears per-frame state once every widget has seen it.
    pub fn epilogue(&mut self) {
        self.typed.clear();
        self.scroll = 0;
    }

    /// Pointer position in screen coordinates.
    pub fn mouse_pos(&self) -> Vec2i { self.mouse_pos }

    /// Buttons held on this frame's snapshot.
    pub fn mouse_buttons(&self) -> MouseButton { self.cur_mouse }

    /// Buttons held on the previous frame's snapshot.
    pub fn previous_mouse_buttons(&self) -> MouseButton { self.prev_mouse }

    fn pressed(&self, btn: MouseButton) -> bool { !self.prev_mouse.intersects(btn) && self.cur_mouse.intersects(btn) }

    fn released(&self, btn: MouseButton) -> bool { self.prev_mouse.intersects(btn) && !self.cur_mouse.intersects(btn) }

    /// Left button went down this frame.
    pub fn left_mouse_down(&self) -> bool { self.pressed(MouseButton::LEFT) }
    /// Left button went up this frame.
    pub fn left_mouse_up(&self) -> bool { self.released(MouseButton::LEFT) }
    /// Middle button went down this frame.
    pub fn middle_mouse_down(&self) -> bool { self.pressed(MouseButton::MIDDLE) }
    /// Middle button went up this frame.
    pub fn middle_mouse_up(&self) -> bool { self.released(MouseButton::MIDDLE) }
    /// Right button went down this frame.
    pub fn right_mouse_down(&self) -> bool { self.pressed(MouseButton::RIGHT) }
    /// Right button went up this frame.
    pub fn right_mouse_up(&self) -> bool { self.released(MouseButton::RIGHT) }
    /// Left button is held on this frame's snapshot.
    pub fn left_mouse_held(&self) -> bool { self.cur_mouse.is_left() }

    /// Makes the previous snapshot equal the current one so no later widget sees an edge.
    pub fn cancel_mouse_event(&mut self) { self.prev_mouse = self.cur_mouse; }

    /// Active modifier keys.
    pub fn key_state(&self) -> KeyMode { self.key_mods }

    /// Returns `true` while shift is held.
    pub fn shift(&self) -> bool { self.key_mods.is_shift() }

    /// Tokens typed this frame, including key repeats.
    pub fn typed(&self) -> &[KeyToken] { &self.typed }

    /// Wheel delta of this frame that no widget consumed yet.
    pub fn scroll_delta(&self) -> i32 { self.scroll }

    /// Consumes the wheel delta so outer scroll containers do not also react.
    pub fn take_scroll(&mut self) -> Option<i32> {
        match std::mem::take(&mut self.scroll) {
            0 => None,
            delta => Some(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    #[test]
    fn left_down_is_edge_triggered() {
        let mut input = Input::default();
        input.mousedown(0, 0, MouseButton::LEFT);
        input.prelude(ms(0));
        assert!(input.left_mouse_down());
        input.epilogue();
        input.prelude(ms(16));
        assert!(!input.left_mouse_down());
        assert!(input.left_mouse_held());
        input.mouseup(0, 0, MouseButton::LEFT);
        input.prelude(ms(32));
        assert!(input.left_mouse_up());
        assert!(!input.left_mouse_held());
    }

    #[test]
    fn cancel_suppresses_edges_for_the_rest_of_the_frame() {
        let mut input = Input::default();
        input.mousedown(0, 0, MouseButton::LEFT | MouseButton::RIGHT);
        input.prelude(ms(0));
        assert!(input.right_mouse_down());
        input.cancel_mouse_event();
        assert!(!input.left_mouse_down());
        assert!(!input.right_mouse_down());
    }

    #[test]
    fn control_codes_map_to_shortcuts() {
        assert_eq!(KeyToken::from_char('\x1a'), KeyToken::Undo);
        assert_eq!(KeyToken::from_char('\r'), KeyToken::Enter);
        assert_eq!(KeyToken::from_char('q'), KeyToken::Char('q'));
    }

    #[test]
    fn held_key_repeats_after_delay() {
        let mut input = Input::default();
        input.key_pressed(KeyToken::Left);
        input.prelude(ms(1000));
        assert_eq!(input.typed(), &[KeyToken::Left]);
        input.epilogue();

        input.prelude(ms(1500));
        assert!(input.typed().is_empty());

        input.prelude(ms(1900));
        assert_eq!(input.typed(), &[KeyToken::Left]);
        input.prelude(ms(1920));
        assert!(input.typed().is_empty());
        input.prelude(ms(1950));
        assert_eq!(input.typed(), &[KeyToken::Left]);

        input.key_released(KeyToken::Left);
        input.prelude(ms(2500));
        assert!(input.typed().is_empty());
    }

    #[test]
    fn scroll_is_consumed_once() {
        let mut input = Input::default();
        input.scroll(-2);
        input.prelude(ms(0));
        assert_eq!(input.take_scroll(), Some(-2));
        assert_eq!(input.take_scroll(), None);
        input.prelude(ms(16));
        assert_eq!(input.scroll_delta(), 0);
    }
}
