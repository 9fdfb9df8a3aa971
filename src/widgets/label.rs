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
use crate::*;

/// Single line of static text on a background strip.
pub struct Label {
    id: WidgetId,
    /// Left edge relative to the parent origin.
    pub x: i32,
    /// Top edge relative to the parent origin.
    pub y: i32,
    /// Smallest background width.
    pub min_width: i32,
    /// Displayed text.
    pub text: String,
    /// Text color, or the style's text color when unset.
    pub text_color: Option<Color>,
    /// Background color, or the style's text background when unset.
    pub bg_color: Option<Color>,
}

impl Label {
    /// Creates a label drawn in the style colors.
    pub fn new(x: i32, y: i32, text: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            x,
            y,
            min_width: 1,
            text: text.into(),
            text_color: None,
            bg_color: None,
        }
    }

    /// Replaces the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) { self.text = text.into(); }
}

impl Widget for Label {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, _ui: &mut Ui, _x: i32, _y: i32) {}

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        let font = ui.font();
        let width = font.text_width(&self.text).max(self.min_width);
        let bg = self.bg_color.unwrap_or(ui.style().text_bg_color);
        canvas.draw_rect(rect(x + self.x, y + self.y, width, font.line_height()), bg);
        let fg = self.text_color.unwrap_or(ui.style().text_color);
        canvas.draw_text(font, &self.text, vec2(x + self.x, y + self.y), fg);
    }
}

/// Block of static text, optionally colored with ANSI escapes.
pub struct MultilineLabel {
    id: WidgetId,
    /// Left edge relative to the parent origin.
    pub x: i32,
    /// Top edge relative to the parent origin.
    pub y: i32,
    /// Smallest background width.
    pub min_width: i32,
    /// Smallest background height.
    pub min_height: i32,
    /// Text color for uncolored runs, or the style's text color when unset.
    pub text_color: Option<Color>,
    /// Background color, or the style's text background when unset.
    pub bg_color: Option<Color>,
    content: String,
    lines: Vec<Vec<(Option<Color>, String)>>,
}

impl MultilineLabel {
    /// Creates a label holding plain `content`.
    pub fn new(x: i32, y: i32, content: &str) -> Self {
        let mut label = Self {
            id: WidgetId::next(),
            x,
            y,
            min_width: 1,
            min_height: 1,
            text_color: None,
            bg_color: None,
            content: String::new(),
            lines: Vec::new(),
        };
        label.set_content(content);
        label
    }

    /// Plain text without escapes.
    pub fn content(&self) -> &str { &self.content }

    /// Number of displayed lines.
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Replaces the text; every run uses the label's text color.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.lines = content.split('\n').map(|line| vec![(None, line.to_string())]).collect();
    }

    /// Replaces the text with ANSI marked-up `text`; escapes select the run colors.
    pub fn set_colored_content(&mut self, text: &str) {
        // sentinel marks runs drawn in the label color
        const UNSET: Color = Color { r: 0, g: 0, b: 0, a: 0 };
        self.content = strip_ansi(text);
        self.lines = parse_ansi(text, UNSET)
            .into_iter()
            .map(|line| line.into_iter().map(|(c, run)| ((c != UNSET).then_some(c), run)).collect())
            .collect();
    }

    /// Background size for the current content.
    pub fn measure(&self, font: &dyn Font) -> Dimensioni {
        let widest = self
            .lines
            .iter()
            .map(|line| line.iter().map(|(_, run)| font.text_width(run)).sum::<i32>())
            .max()
            .unwrap_or(0);
        let height = self.lines.len() as i32 * font.line_height();
        Dimensioni::new(widest.max(self.min_width), height.max(self.min_height))
    }
}

impl Widget for MultilineLabel {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, _ui: &mut Ui, _x: i32, _y: i32) {}

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        let font = ui.font();
        let size = self.measure(font);
        let bg = self.bg_color.unwrap_or(ui.style().text_bg_color);
        canvas.draw_rect(rect(x + self.x, y + self.y, size.width, size.height), bg);

        let fg = self.text_color.unwrap_or(ui.style().text_color);
        let lh = font.line_height();
        for (row, line) in self.lines.iter().enumerate() {
            let mut px = x + self.x;
            let py = y + self.y + row as i32 * lh;
            for (c, run) in line {
                canvas.draw_text(font, run, vec2(px, py), c.unwrap_or(fg));
                px += font.text_width(run);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::RecordingRenderer;

    #[test]
    fn colored_content_strips_escapes() {
        let mut label = MultilineLabel::new(0, 0, "");
        label.set_colored_content("a\x1b[38;2;200;0;0mb\x1b[0m\nc");
        assert_eq!(label.content(), "ab\nc");
        assert_eq!(label.line_count(), 2);
    }

    #[test]
    fn multiline_runs_are_laid_out_left_to_right() {
        let ui = Ui::with_screen(200, 200);
        let cw = ui.font().char_width();
        let lh = ui.font().line_height();
        let mut label = MultilineLabel::new(3, 4, "");
        label.set_colored_content("ab\x1b[38;2;1;2;3mcd\nef");

        let mut canvas = Canvas::new(Dimensioni::new(200, 200));
        label.update(&ui, &mut canvas, 0, 0);
        let mut renderer = RecordingRenderer::default();
        canvas.render(&mut renderer, Color::default());
        assert_eq!(
            renderer.texts,
            vec![("ab".to_string(), 3, 4), ("cd".to_string(), 3 + 2 * cw, 4), ("ef".to_string(), 3, 4 + lh)]
        );
        assert_eq!(renderer.rects, vec![(3, 4, 4 * cw, 2 * lh)]);
    }

    #[test]
    fn label_background_respects_min_width() {
        let ui = Ui::with_screen(200, 200);
        let mut label = Label::new(0, 0, "x");
        label.min_width = 100;
        let mut canvas = Canvas::new(Dimensioni::new(200, 200));
        label.update(&ui, &mut canvas, 10, 10);
        let mut renderer = RecordingRenderer::default();
        canvas.render(&mut renderer, Color::default());
        assert_eq!(renderer.rects, vec![(10, 10, 100, ui.font().line_height())]);
        assert_eq!(renderer.texts, vec![("x".to_string(), 10, 10)]);
    }
}
