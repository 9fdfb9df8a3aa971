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
#![deny(missing_docs)]
//! `editor-ui` is a retained-mode widget toolkit for in-house editors and game clients.
//! Widgets live in a tree owned by an [`Editor`]; every frame the editor runs an event pass
//! front-to-back, where widgets claim hover and drag gestures, followed by a render pass
//! back-to-front that records draw commands for a host supplied [`Renderer`].

use std::sync::atomic::{AtomicU64, Ordering};

mod canvas;
mod clipboard;
mod editor;
mod error;
mod input;
mod scroll;
mod style;
mod text_layout;
#[cfg(feature = "ttf")]
mod ttf;
mod ui;
mod widgets;

pub use canvas::*;
pub use clipboard::*;
pub use editor::*;
pub use error::*;
pub use input::*;
pub use rs_math3d::*;
pub use scroll::*;
pub use style::*;
pub use text_layout::*;
#[cfg(feature = "ttf")]
pub use ttf::*;
pub use ui::*;
pub use widgets::*;

use bitflags::*;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Mouse button state as a bitset.
    pub struct MouseButton : u32 {
        /// Left mouse button.
        const LEFT = 1;
        /// Right mouse button.
        const RIGHT = 2;
        /// Middle mouse button.
        const MIDDLE = 4;
        /// No buttons pressed.
        const NONE = 0;
    }
}

impl MouseButton {
    /// Returns `true` if the middle button is pressed.
    pub fn is_middle(&self) -> bool { self.intersects(Self::MIDDLE) }
    /// Returns `true` if right is pressed.
    pub fn is_right(&self) -> bool { self.intersects(Self::RIGHT) }
    /// Returns `true` if left is pressed.
    pub fn is_left(&self) -> bool { self.intersects(Self::LEFT) }
    /// Returns `true` if no buttons are pressed.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Modifier keys held by the user.
    pub struct KeyMode : u32 {
        /// No modifiers.
        const NONE = 0;
        /// Either shift key.
        const SHIFT = 1;
        /// Either control key.
        const CTRL = 2;
        /// Either alt key.
        const ALT = 4;
    }
}

impl KeyMode {
    /// Returns `true` if no modifiers are held.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
    /// Returns `true` if shift is held.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
    /// Returns `true` if control is held.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CTRL) }
    /// Returns `true` if alt is held.
    pub fn is_alt(&self) -> bool { self.intersects(Self::ALT) }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque color from its RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
}

impl TryFrom<Vec<u8>> for Color {
    type Error = ConfigError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        match value.as_slice() {
            [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(color(*r, *g, *b, *a)),
            other => Err(ConfigError::InvalidColor(other.len())),
        }
    }
}

impl From<Color> for Vec<u8> {
    fn from(c: Color) -> Self { vec![c.r, c.g, c.b, c.a] }
}

#[derive(Copy, Clone, Default, Debug)]
/// Interaction flags a widget reports after its event pass.
pub struct ControlState {
    /// Widget holds the hover claim this frame.
    pub hovered: bool,
    /// Widget holds a drag or press gesture.
    pub held: bool,
    /// Widget owns text focus.
    pub focused: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
/// Identity used for hover, gesture and text focus claims.
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    /// Allocates a fresh process-unique id.
    pub fn next() -> Self { Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed)) }

    /// Returns the raw numeric value.
    pub fn raw(self) -> u64 { self.0 }
}

/// Callback run by the editor when a widget holding the hover claim is right clicked.
pub type ContextAction = Box<dyn FnMut(&mut Ui) -> Result<(), CallbackError>>;

/// A node in the widget tree.
///
/// `event` runs during the front-to-back pass and is the only place a widget may claim input.
/// `update` runs during the back-to-front pass and receives the shared state read-only.
/// Both receive the absolute origin of the parent's coordinate space.
pub trait Widget {
    /// Identity used by the claim protocol.
    fn id(&self) -> WidgetId;
    /// Reacts to the current input snapshot.
    fn event(&mut self, ui: &mut Ui, x: i32, y: i32);
    /// Records draw commands for this widget and its children.
    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32);
    /// Interaction flags observed during the last event pass.
    fn state(&self) -> ControlState { ControlState::default() }
    /// Visits each direct child.
    fn for_each_child(&mut self, _f: &mut dyn FnMut(&mut dyn Widget)) {}
    /// Right-click action, if the widget carries one.
    fn context_action(&mut self) -> Option<&mut ContextAction> { None }
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn id(&self) -> WidgetId { (**self).id() }
    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) { (**self).event(ui, x, y) }
    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) { (**self).update(ui, canvas, x, y) }
    fn state(&self) -> ControlState { (**self).state() }
    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) { (**self).for_each_child(f) }
    fn context_action(&mut self) -> Option<&mut ContextAction> { (**self).context_action() }
}

/// Walks `widget` and its descendants until `id` is found, then runs `f` on it.
pub fn with_widget<R>(widget: &mut dyn Widget, id: WidgetId, f: &mut dyn FnMut(&mut dyn Widget) -> R) -> Option<R> {
    if widget.id() == id {
        return Some(f(widget));
    }
    let mut found = None;
    widget.for_each_child(&mut |child| {
        if found.is_none() {
            found = with_widget(child, id, &mut *f);
        }
    });
    found
}

/// Position and size of a widget in its parent's coordinate space.
pub trait Bounded {
    /// Top-left corner.
    fn position(&self) -> Vec2i;
    /// Width and height.
    fn size(&self) -> Dimensioni;
    /// Moves the widget.
    fn set_position(&mut self, pos: Vec2i);
    /// Resizes the widget.
    fn set_size(&mut self, size: Dimensioni);
}

/// Copies the controller's size (and position unless `size_only`) onto `child`.
pub fn tie(controller: &dyn Bounded, child: &mut dyn Bounded, size_only: bool) {
    if !size_only {
        child.set_position(controller.position());
    }
    child.set_size(controller.size());
}

/// Generates a [`Bounded`] impl for widgets exposing `x`, `y`, `width` and `height` fields.
macro_rules! implement_bounded {
    ($ty:ty) => {
        impl $crate::Bounded for $ty {
            fn position(&self) -> $crate::Vec2i { $crate::vec2(self.x, self.y) }
            fn size(&self) -> $crate::Dimensioni { $crate::Dimensioni::new(self.width, self.height) }
            fn set_position(&mut self, pos: $crate::Vec2i) {
                self.x = pos.x;
                self.y = pos.y;
            }
            fn set_size(&mut self, size: $crate::Dimensioni) {
                self.width = size.width;
                self.height = size.height;
            }
        }
    };
}
pub(crate) use implement_bounded;

pub(crate) static UNCLIPPED_RECT: Recti = Recti {
    x: 0,
    y: 0,
    width: i32::MAX,
    height: i32::MAX,
};

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Inclusive hit test: both the far and the near edges count as inside.
pub fn collides(p: Vec2i, r: Recti) -> bool { r.x <= p.x && p.x <= r.x + r.width && r.y <= p.y && p.y <= r.y + r.height }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collides_is_inclusive_on_both_edges() {
        let r = rect(10, 10, 20, 5);
        assert!(collides(vec2(10, 10), r));
        assert!(collides(vec2(30, 15), r));
        assert!(!collides(vec2(31, 15), r));
        assert!(!collides(vec2(9, 12), r));
    }

    #[test]
    fn color_parses_three_or_four_components() {
        assert_eq!(Color::try_from(vec![1, 2, 3]).ok(), Some(Color::rgb(1, 2, 3)));
        assert_eq!(Color::try_from(vec![1, 2, 3, 4]).ok(), Some(color(1, 2, 3, 4)));
        assert!(matches!(Color::try_from(vec![1, 2]), Err(ConfigError::InvalidColor(2))));
    }

    #[test]
    fn widget_ids_are_unique() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn tie_copies_size_and_optionally_position() {
        let controller = Panel::new(5, 6, 70, 80, Color::rgb(0, 0, 0));
        let mut child = Panel::new(0, 0, 1, 1, Color::rgb(0, 0, 0));
        tie(&controller, &mut child, true);
        assert_eq!((child.x, child.y, child.width, child.height), (0, 0, 70, 80));
        tie(&controller, &mut child, false);
        assert_eq!((child.x, child.y), (5, 6));
    }

    #[test]
    fn with_widget_finds_nested_children() {
        let mut inner = Panel::new(0, 0, 1, 1, Color::rgb(0, 0, 0));
        let target = inner.id();
        inner.push(Label::new(0, 0, "x"));
        let mut outer = Panel::new(0, 0, 10, 10, Color::rgb(0, 0, 0));
        outer.push(inner);
        let mut root: Box<dyn Widget> = Box::new(outer);
        let found = with_widget(root.as_mut(), target, &mut |w| w.id());
        assert_eq!(found, Some(target));
        assert_eq!(with_widget(root.as_mut(), WidgetId::next(), &mut |w| w.id()), None);
    }
}
