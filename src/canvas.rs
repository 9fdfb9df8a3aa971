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
use crate::{rect, Color, Dimensioni, Recti, Vec2i, UNCLIPPED_RECT};

/// Trait implemented by render backends that replay the recorded frame.
pub trait Renderer {
    /// Begins a new frame with the viewport size and clear color.
    fn begin(&mut self, width: i32, height: i32, clr: Color);
    /// Restricts subsequent drawing to `rect`.
    fn set_clip(&mut self, rect: Recti);
    /// Fills a rectangle.
    fn draw_rect(&mut self, rect: Recti, color: Color);
    /// Draws a run of monospace text with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Vec2i, color: Color);
    /// Ends the frame and presents it.
    fn end(&mut self);
}

/// Describes the interface widgets use to measure text.
///
/// Text widgets assume a monospace face, so one advance width covers every glyph.
pub trait Font {
    /// Returns the font's display name.
    fn name(&self) -> &str;
    /// Returns the base pixel size of the font.
    fn get_size(&self) -> usize;
    /// Horizontal advance of a single glyph.
    fn char_width(&self) -> i32;
    /// Height of one line of text.
    fn line_height(&self) -> i32;
    /// Width of a run of text.
    fn text_width(&self, text: &str) -> i32 { text.chars().count() as i32 * self.char_width() }
}

#[derive(Clone, Debug)]
/// Fixed-metric font used when the host has not loaded a real face.
pub struct MonoFont {
    name: String,
    size: usize,
    char_width: i32,
    line_height: i32,
}

impl MonoFont {
    /// Creates a font with explicit metrics.
    pub fn new(name: impl Into<String>, size: usize, char_width: i32, line_height: i32) -> Self {
        Self {
            name: name.into(),
            size,
            char_width: char_width.max(1),
            line_height: line_height.max(1),
        }
    }

    /// Approximates metrics of a typical monospace face at `size` pixels.
    pub fn with_size(size: usize) -> Self {
        let px = size.max(1) as i32;
        Self::new("mono", size, (px * 3 / 5).max(1), px + px / 5)
    }
}

impl Default for MonoFont {
    fn default() -> Self { Self::new("mono", 16, 8, 16) }
}

impl Font for MonoFont {
    fn name(&self) -> &str { &self.name }
    fn get_size(&self) -> usize { self.size }
    fn char_width(&self) -> i32 { self.char_width }
    fn line_height(&self) -> i32 { self.line_height }
}

#[derive(PartialEq, Copy, Clone, Debug)]
#[repr(u32)]
/// Describes whether a rectangle is clipped by the current scissor.
pub enum Clip {
    /// Rectangle is fully visible.
    None = 0,
    /// Rectangle is partially visible.
    Part = 1,
    /// Rectangle is fully clipped away.
    All = 2,
}

/// Draw command recorded during the render pass.
pub enum Command {
    /// Sets the renderer clip rectangle.
    Clip {
        /// Rect to clip against.
        rect: Recti,
    },
    /// Draws a solid rectangle.
    Rect {
        /// Target rectangle.
        rect: Recti,
        /// Fill color.
        color: Color,
    },
    /// Draws text.
    Text {
        /// Top-left text position.
        pos: Vec2i,
        /// Text color.
        color: Color,
        /// UTF-8 string to render.
        text: String,
    },
}

/// Records the frame as a list of [`Command`]s and tracks nested clip regions.
pub struct Canvas {
    dim: Dimensioni,
    commands: Vec<Command>,
    clip_stack: Vec<Recti>,
}

impl Canvas {
    /// Creates an empty canvas for a viewport of the given size.
    pub fn new(dim: Dimensioni) -> Self {
        Self {
            dim,
            commands: Vec::new(),
            clip_stack: Vec::new(),
        }
    }

    /// Viewport size.
    pub fn dimension(&self) -> Dimensioni { self.dim }

    /// Changes the viewport size.
    pub fn resize(&mut self, dim: Dimensioni) { self.dim = dim; }

    /// Commands recorded since the last [`Canvas::render`].
    pub fn commands(&self) -> &[Command] { &self.commands }

    /// Innermost clip region.
    pub fn current_clip_rect(&self) -> Recti { self.clip_stack.last().copied().unwrap_or(UNCLIPPED_RECT) }

    /// Pushes a clip region intersected with the current one.
    pub fn push_clip_rect(&mut self, rect: Recti) {
        let last = self.current_clip_rect();
        self.clip_stack.push(rect.intersect(&last).unwrap_or_default());
    }

    /// Pops the innermost clip region.
    pub fn pop_clip_rect(&mut self) { self.clip_stack.pop(); }

    /// Classifies `r` against the current clip region.
    pub fn check_clip(&self, r: Recti) -> Clip {
        let cr = self.current_clip_rect();
        if r.x > cr.x + cr.width || r.x + r.width < cr.x || r.y > cr.y + cr.height || r.y + r.height < cr.y {
            return Clip::All;
        }
        if r.x >= cr.x && r.x + r.width <= cr.x + cr.width && r.y >= cr.y && r.y + r.height <= cr.y + cr.height {
            return Clip::None;
        }
        Clip::Part
    }

    fn push_command(&mut self, cmd: Command) { self.commands.push(cmd); }

    /// Fills `rect`, clipped to the current region.
    pub fn draw_rect(&mut self, rect: Recti, color: Color) {
        if color.a == 0 {
            return;
        }
        if let Some(rect) = rect.intersect(&self.current_clip_rect()) {
            if rect.width > 0 && rect.height > 0 {
                self.push_command(Command::Rect { rect, color });
            }
        }
    }

    /// Draws a one pixel outline around `r`.
    pub fn draw_box(&mut self, r: Recti, color: Color) {
        self.draw_rect(rect(r.x + 1, r.y, r.width - 2, 1), color);
        self.draw_rect(rect(r.x + 1, r.y + r.height - 1, r.width - 2, 1), color);
        self.draw_rect(rect(r.x, r.y, 1, r.height), color);
        self.draw_rect(rect(r.x + r.width - 1, r.y, 1, r.height), color);
    }

    /// Draws text measured with `font`; partially visible runs are bracketed by clip commands.
    pub fn draw_text(&mut self, font: &dyn Font, text: &str, pos: Vec2i, color: Color) {
        if text.is_empty() {
            return;
        }
        let r = rect(pos.x, pos.y, font.text_width(text), font.line_height());
        let clipped = self.check_clip(r);
        match clipped {
            Clip::All => return,
            Clip::Part => {
                let clip = self.current_clip_rect();
                self.push_command(Command::Clip { rect: clip });
            }
            Clip::None => (),
        }
        self.push_command(Command::Text {
            text: String::from(text),
            pos,
            color,
        });
        if clipped != Clip::None {
            self.push_command(Command::Clip { rect: UNCLIPPED_RECT });
        }
    }

    /// Replays and clears the recorded commands.
    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R, clear: Color) {
        renderer.begin(self.dim.width, self.dim.height, clear);
        for command in self.commands.drain(0..) {
            match command {
                Command::Clip { rect } => renderer.set_clip(rect),
                Command::Rect { rect, color } => renderer.draw_rect(rect, color),
                Command::Text { pos, color, text } => renderer.draw_text(&text, pos, color),
            }
        }
        renderer.end();
        self.clip_stack.clear();
    }
}
