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
use std::fs;
use std::path::Path;

use fontdue::{FontSettings, Metrics};

use crate::{ConfigError, Font};

/// Monospace font measured from a TrueType or OpenType face.
pub struct TtfFont {
    name: String,
    size: usize,
    char_width: i32,
    line_height: i32,
    face: fontdue::Font,
}

impl TtfFont {
    /// Parses a face from memory and measures it at `size` pixels.
    pub fn from_bytes(name: impl Into<String>, data: &[u8], size: usize) -> Result<Self, ConfigError> {
        let px = size.max(1) as f32;
        let settings = FontSettings { scale: px, ..FontSettings::default() };
        let face = fontdue::Font::from_bytes(data, settings).map_err(|e| ConfigError::Font(e.to_string()))?;
        let Metrics { advance_width, .. } = face.metrics('M', px);
        let line_height = face
            .horizontal_line_metrics(px)
            .map(|m| m.new_line_size.ceil() as i32)
            .unwrap_or(size as i32 + size as i32 / 5);
        Ok(Self {
            name: name.into(),
            size,
            char_width: (advance_width.round() as i32).max(1),
            line_height: line_height.max(1),
            face,
        })
    }

    /// Loads a face from disk; the file name becomes the font name.
    pub fn from_file(path: impl AsRef<Path>, size: usize) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("ttf").to_string();
        Self::from_bytes(name, &data, size)
    }
}

impl Font for TtfFont {
    fn name(&self) -> &str { &self.name }
    fn get_size(&self) -> usize { self.size }
    fn char_width(&self) -> i32 { self.char_width }
    fn line_height(&self) -> i32 { self.line_height }

    fn text_width(&self, text: &str) -> i32 {
        let px = self.size.max(1) as f32;
        text.chars().map(|c| self.face.metrics(c, px).advance_width).sum::<f32>().round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_a_font_error() {
        assert!(matches!(TtfFont::from_bytes("junk", &[0, 1, 2, 3], 15), Err(ConfigError::Font(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(TtfFont::from_file("/nonexistent/font.ttf", 15), Err(ConfigError::Io(_))));
    }
}
