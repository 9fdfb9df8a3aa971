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
use crate::{vec2, ConfigError, Vec2i};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Axis a wheel notch is applied to.
pub enum ScrollAxis {
    /// Moves content up and down.
    Vertical,
    /// Moves content left and right.
    Horizontal,
}

impl ScrollAxis {
    /// Plain wheel scrolls vertically; shift, or a swapped container, scrolls horizontally.
    pub fn for_wheel(shift: bool, swap: bool) -> Self {
        if shift ^ swap {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Optional offset limits of a scroll container.
///
/// Offsets grow negative as content scrolls towards its end, so `left`/`top` are the largest
/// allowed offsets and `right`/`bottom` the smallest.
pub struct ScrollBounds {
    /// Largest horizontal offset.
    pub left: Option<i32>,
    /// Largest vertical offset.
    pub top: Option<i32>,
    /// Smallest horizontal offset.
    pub right: Option<i32>,
    /// Smallest vertical offset.
    pub bottom: Option<i32>,
}

impl ScrollBounds {
    /// No limits on either axis.
    pub const NONE: Self = Self {
        left: None,
        top: None,
        right: None,
        bottom: None,
    };

    /// Fails when a bound pair is ordered the wrong way round.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(left), Some(right)) = (self.left, self.right) {
            if left < right {
                return Err(ConfigError::InvalidBounds {
                    axis: "horizontal",
                    max: left,
                    min: right,
                });
            }
        }
        if let (Some(top), Some(bottom)) = (self.top, self.bottom) {
            if top < bottom {
                return Err(ConfigError::InvalidBounds {
                    axis: "vertical",
                    max: top,
                    min: bottom,
                });
            }
        }
        Ok(())
    }

    /// Clamps one axis of an offset.
    pub fn clamp_axis(&self, axis: ScrollAxis, value: i32) -> i32 {
        let (max, min) = match axis {
            ScrollAxis::Horizontal => (self.left, self.right),
            ScrollAxis::Vertical => (self.top, self.bottom),
        };
        let mut value = value;
        if let Some(max) = max {
            value = value.min(max);
        }
        if let Some(min) = min {
            value = value.max(min);
        }
        value
    }

    /// Clamps both axes of an offset.
    pub fn clamp(&self, offset: Vec2i) -> Vec2i { vec2(self.clamp_axis(ScrollAxis::Horizontal, offset.x), self.clamp_axis(ScrollAxis::Vertical, offset.y)) }

    /// Offset a middle click returns to.
    pub fn home(&self) -> Vec2i { vec2(self.left.unwrap_or(0), self.top.unwrap_or(0)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(top: i32, bottom: i32) -> ScrollBounds {
        ScrollBounds {
            top: Some(top),
            bottom: Some(bottom),
            ..ScrollBounds::NONE
        }
    }

    #[test]
    fn clamp_pins_to_bounds() {
        let b = vertical(0, -100);
        assert_eq!(b.clamp_axis(ScrollAxis::Vertical, -225), -100);
        assert_eq!(b.clamp_axis(ScrollAxis::Vertical, 40), 0);
        assert_eq!(b.clamp_axis(ScrollAxis::Vertical, -50), -50);
        assert_eq!(b.clamp_axis(ScrollAxis::Horizontal, 999), 999);
    }

    #[test]
    fn clamp_is_idempotent() {
        let b = ScrollBounds {
            left: Some(0),
            right: Some(-30),
            ..vertical(10, -10)
        };
        for x in -100..100 {
            for y in [-50, -10, 0, 10, 50] {
                let once = b.clamp(vec2(x, y));
                let twice = b.clamp(once);
                assert_eq!((once.x, once.y), (twice.x, twice.y));
            }
        }
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(vertical(0, -10).validate().is_ok());
        assert!(matches!(vertical(-10, 0).validate(), Err(ConfigError::InvalidBounds { axis: "vertical", .. })));
        let b = ScrollBounds {
            left: Some(-5),
            right: Some(5),
            ..ScrollBounds::NONE
        };
        assert!(b.validate().is_err());
    }

    #[test]
    fn home_falls_back_to_zero() {
        let h = vertical(7, -3).home();
        assert_eq!((h.x, h.y), (0, 7));
    }

    #[test]
    fn shift_xor_swap_picks_the_axis() {
        assert_eq!(ScrollAxis::for_wheel(false, false), ScrollAxis::Vertical);
        assert_eq!(ScrollAxis::for_wheel(true, false), ScrollAxis::Horizontal);
        assert_eq!(ScrollAxis::for_wheel(false, true), ScrollAxis::Horizontal);
        assert_eq!(ScrollAxis::for_wheel(true, true), ScrollAxis::Vertical);
    }
}
