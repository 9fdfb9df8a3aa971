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
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::warn;

use crate::*;

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap_or_else(|e| panic!("line break pattern: {e}")));

/// Called with the content when the user commits a text box.
pub type EnterCallback = Box<dyn FnMut(&str) -> Result<(), CallbackError>>;

/// Called on Ctrl+S with the content, the ordered selection and the cursor.
pub type SaveCallback = Box<dyn FnMut(&str, Option<&Selection>, Cursor) -> Result<(), CallbackError>>;

const CURSOR_WIDTH: i32 = 2;

fn report(what: &str, res: Result<(), CallbackError>) {
    if let Err(e) = res {
        warn!(callback = what, error = %e, "text box callback failed");
    }
}

/// Editable text on top of a [`TextBuffer`].
///
/// Grows to fit its content and never shrinks below `min_width` x `min_height`. Typed keys are
/// only processed while the box owns text focus.
pub struct TextBox {
    id: WidgetId,
    /// Left edge relative to the parent origin.
    pub x: i32,
    /// Top edge relative to the parent origin.
    pub y: i32,
    /// Smallest width.
    pub min_width: i32,
    /// Smallest height.
    pub min_height: i32,
    /// Enter and Escape commit instead of editing; pasted line breaks become spaces.
    pub single_line: bool,
    /// When set, only these characters can be typed.
    pub whitelist: Option<String>,
    /// Characters that can never be typed.
    pub blacklist: Option<String>,
    /// Text color, or the style's text color when unset.
    pub text_color: Option<Color>,
    /// Background color, or the style's text background when unset.
    pub bg_color: Option<Color>,
    /// Selection color, or the style's highlight when unset.
    pub highlight_color: Option<Color>,
    /// Cursor color, or the style's cursor color when unset.
    pub cursor_color: Option<Color>,
    /// Fires on Enter and, for single-line boxes, on Escape.
    pub on_enter: Option<EnterCallback>,
    /// Fires on Ctrl+S.
    pub on_save: Option<SaveCallback>,
    /// Right-click action.
    pub on_context: Option<ContextAction>,
    buffer: TextBuffer,
    colorizer: Box<dyn Colorizer>,
    width: i32,
    height: i32,
    focused: bool,
    hovered: bool,
    dragging: bool,
    last_activity: Duration,
}

impl TextBox {
    /// Creates a multi-line box.
    pub fn new(x: i32, y: i32, min_width: i32, min_height: i32, content: &str) -> Self {
        Self {
            id: WidgetId::next(),
            x,
            y,
            min_width,
            min_height,
            single_line: false,
            whitelist: None,
            blacklist: None,
            text_color: None,
            bg_color: None,
            highlight_color: None,
            cursor_color: None,
            on_enter: None,
            on_save: None,
            on_context: None,
            buffer: TextBuffer::new(content),
            colorizer: Box::new(PlainColorizer),
            width: min_width,
            height: min_height,
            focused: false,
            hovered: false,
            dragging: false,
            last_activity: Duration::ZERO,
        }
    }

    /// Creates a single-line box.
    pub fn single_line(x: i32, y: i32, min_width: i32, content: &str) -> Self {
        Self {
            single_line: true,
            ..Self::new(x, y, min_width, 1, &LINE_BREAKS.replace_all(content, " "))
        }
    }

    /// Applies the tab size and history limit of `style`.
    pub fn configure(&mut self, style: &Style) {
        self.buffer.set_tab_size(style.tab_size);
        self.buffer.set_history_limit(style.history_limit);
    }

    /// Replaces the syntax colorizer.
    pub fn set_colorizer(&mut self, colorizer: impl Colorizer + 'static) { self.colorizer = Box::new(colorizer); }

    /// Underlying text engine.
    pub fn buffer(&self) -> &TextBuffer { &self.buffer }

    /// Mutable text engine.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer { &mut self.buffer }

    /// Whole text.
    pub fn content(&self) -> String { self.buffer.content() }

    /// Replaces the text.
    pub fn set_content(&mut self, content: &str) { self.buffer.set_content(content); }

    /// Returns `true` if the box owned text focus on the last event pass.
    pub fn is_focused(&self) -> bool { self.focused }

    /// Current width, fitted to the content on every event pass.
    pub fn width(&self) -> i32 { self.width }

    /// Current height, fitted to the content on every event pass.
    pub fn height(&self) -> i32 { self.height }

    fn fit(&mut self, font: &dyn Font) {
        let cw = font.char_width();
        let lh = font.line_height();
        self.width = ((self.buffer.longest_line() as i32 + 1) * cw).max(self.min_width);
        self.height = (self.buffer.line_count() as i32 * lh).max(self.min_height);
    }

    fn accepts(&self, c: char) -> bool {
        if self.single_line && c == '\n' {
            return false;
        }
        let allowed = self.whitelist.as_ref().is_none_or(|w| w.contains(c));
        let blocked = self.blacklist.as_ref().is_some_and(|b| b.contains(c));
        allowed && !blocked
    }

    fn fire_enter(&mut self) {
        let content = self.buffer.content();
        if let Some(cb) = self.on_enter.as_mut() {
            report("on_enter", cb(&content));
        }
    }

    fn fire_save(&mut self) {
        let content = self.buffer.content();
        let selection = self.buffer.selection_range();
        let cursor = self.buffer.cursor();
        if let Some(cb) = self.on_save.as_mut() {
            report("on_save", cb(&content, selection.as_ref(), cursor));
        }
    }

    fn handle_mouse(&mut self, ui: &mut Ui, body: Recti) {
        let (cw, lh) = (ui.font().char_width(), ui.font().line_height());
        let p = ui.mouse_pos();
        let target = self.buffer.cursor_from_point(p.x - body.x, p.y - body.y, cw, lh);

        if ui.left_mouse_down() {
            if self.hovered && ui.begin_gesture(self.id) {
                ui.cancel_mouse_event();
                ui.set_text_focus(Some(self.id));
                self.dragging = true;
                self.last_activity = ui.now();
                if ui.input().shift() {
                    self.buffer.extend_to(target);
                } else {
                    self.buffer.clear_selection();
                    self.buffer.set_cursor(target);
                }
            } else if !self.hovered && ui.has_text_focus(self.id) {
                ui.set_text_focus(None);
            }
        } else if ui.left_mouse_up() {
            self.dragging = false;
            ui.release_gesture(self.id);
        } else if self.dragging && ui.input().left_mouse_held() {
            self.buffer.extend_to(target);
        }

        if !ui.input().left_mouse_held() {
            self.dragging = false;
        }
    }

    fn handle_keys(&mut self, ui: &mut Ui) {
        let typed = ui.input().typed().to_vec();
        if typed.is_empty() {
            return;
        }
        let shift = ui.input().shift();
        self.last_activity = ui.now();
        for token in typed {
            match token {
                KeyToken::Up => self.buffer.move_up(shift),
                KeyToken::Down => self.buffer.move_down(shift),
                KeyToken::Left => self.buffer.move_left(shift),
                KeyToken::Right => self.buffer.move_right(shift),
                KeyToken::Enter if self.single_line => {
                    ui.set_text_focus(None);
                    self.fire_enter();
                }
                KeyToken::Enter => {
                    self.buffer.newline();
                    self.fire_enter();
                }
                KeyToken::Escape => {
                    ui.set_text_focus(None);
                    if self.single_line {
                        self.fire_enter();
                    }
                }
                KeyToken::Tab => self.buffer.tab(),
                KeyToken::Backspace => self.buffer.backspace(),
                KeyToken::Delete => self.buffer.delete_forward(),
                KeyToken::Undo if shift => self.buffer.redo(),
                KeyToken::Undo => self.buffer.undo(),
                KeyToken::Cut => {
                    if let Some(text) = self.buffer.selected_text() {
                        ui.clipboard_set(&text);
                        self.buffer.replace_selection("");
                        self.buffer.save_history();
                    }
                }
                KeyToken::Copy => {
                    if let Some(text) = self.buffer.selected_text() {
                        ui.clipboard_set(&text);
                    }
                }
                KeyToken::Paste => {
                    let text = ui.clipboard_get();
                    if self.single_line {
                        self.buffer.insert_str(&LINE_BREAKS.replace_all(&text, " "));
                    } else {
                        self.buffer.insert_str(&text);
                    }
                }
                KeyToken::SelectAll => self.buffer.select_all(),
                KeyToken::Save => {
                    self.fire_save();
                    self.buffer.save_history();
                }
                KeyToken::Char(c) if self.accepts(c) => self.buffer.insert_char(c),
                KeyToken::Char(_) => {}
            }
            // Enter or Escape may have dropped focus; the rest of the frame's keys go nowhere
            if !ui.has_text_focus(self.id) {
                break;
            }
        }
    }

    fn cursor_visible(&self, ui: &Ui) -> bool {
        let blink = ui.style().cursor_blink().as_millis();
        ui.now().saturating_sub(self.last_activity).as_millis() % blink < blink / 2
    }
}

impl Bounded for TextBox {
    fn position(&self) -> Vec2i { vec2(self.x, self.y) }
    fn size(&self) -> Dimensioni { Dimensioni::new(self.width, self.height) }
    fn set_position(&mut self, pos: Vec2i) {
        self.x = pos.x;
        self.y = pos.y;
    }
    fn set_size(&mut self, size: Dimensioni) {
        self.min_width = size.width;
        self.min_height = size.height;
        self.width = self.width.max(size.width);
        self.height = self.height.max(size.height);
    }
}

impl Widget for TextBox {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        self.fit(ui.font());
        let body = rect(x + self.x, y + self.y, self.width, self.height);
        self.hovered = ui.collides(body) && ui.claim_hover(self.id);
        self.handle_mouse(ui, body);
        if ui.has_text_focus(self.id) {
            self.handle_keys(ui);
        }
        self.focused = ui.has_text_focus(self.id);
        if !self.focused {
            self.dragging = false;
        }
        self.fit(ui.font());
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        let font = ui.font();
        let style = ui.style();
        let (cw, lh) = (font.char_width(), font.line_height());
        let body = rect(x + self.x, y + self.y, self.width, self.height);
        canvas.draw_rect(body, self.bg_color.unwrap_or(style.text_bg_color));

        let highlight = self.highlight_color.unwrap_or(style.text_highlight);
        for r in self.buffer.highlight_rects(cw, lh) {
            canvas.draw_rect(rect(body.x + r.x, body.y + r.y, r.width, r.height), highlight);
        }

        let clip = canvas.current_clip_rect();
        let fg = self.text_color.unwrap_or(style.text_color);
        for row in 0..self.buffer.line_count() {
            let py = body.y + row as i32 * lh;
            if py + lh < clip.y || py > clip.y.saturating_add(clip.height) {
                continue;
            }
            let mut px = body.x;
            for (c, run) in self.colorizer.colorize(&self.buffer.line_text(row), fg) {
                canvas.draw_text(font, &run, vec2(px, py), c);
                px += font.text_width(&run);
            }
        }

        if self.focused && self.cursor_visible(ui) {
            let cursor = self.buffer.cursor();
            let at = rect(body.x + cursor.col as i32 * cw, body.y + cursor.line as i32 * lh, CURSOR_WIDTH, lh);
            canvas.draw_rect(at, self.cursor_color.unwrap_or(style.cursor_color));
        }
    }

    fn state(&self) -> ControlState {
        ControlState {
            hovered: self.hovered,
            held: self.dragging,
            focused: self.focused,
        }
    }

    fn context_action(&mut self) -> Option<&mut ContextAction> { self.on_context.as_mut() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    // default style font: 9 px columns, 18 px lines
    const CW: i32 = 9;
    const LH: i32 = 18;

    fn frame(ui: &mut Ui, n: u64, tb: &mut TextBox) {
        ui.begin_frame(Duration::from_millis(n * 16));
        tb.event(ui, 0, 0);
        ui.end_frame();
    }

    fn click(ui: &mut Ui, n: u64, tb: &mut TextBox, x: i32, y: i32) {
        ui.input_mut().mousedown(x, y, MouseButton::LEFT);
        frame(ui, n, tb);
        ui.input_mut().mouseup(x, y, MouseButton::LEFT);
        frame(ui, n + 1, tb);
    }

    fn focused_box(ui: &mut Ui, content: &str) -> TextBox {
        let mut tb = TextBox::new(0, 0, 200, 100, content);
        click(ui, 0, &mut tb, 0, 0);
        assert!(tb.is_focused());
        tb
    }

    #[test]
    fn click_places_the_cursor_on_the_nearest_cell() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = TextBox::new(0, 0, 200, 100, "hello\nworld");
        click(&mut ui, 0, &mut tb, 2 * CW + 5, LH + 3);
        assert_eq!(tb.buffer().cursor(), Cursor::new(1, 3));
        assert_eq!(ui.text_focus(), Some(tb.id()));
        assert_eq!(ui.gesture_claimant(), None);
    }

    #[test]
    fn shift_click_extends_from_the_old_cursor() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = focused_box(&mut ui, "abcdef");
        ui.input_mut().keydown(KeyMode::SHIFT);
        click(&mut ui, 2, &mut tb, 4 * CW, 2);
        assert_eq!(tb.buffer().selected_text().as_deref(), Some("abcd"));
    }

    #[test]
    fn drag_selects_text() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = TextBox::new(0, 0, 200, 100, "abcdef");
        ui.input_mut().mousedown(CW, 2, MouseButton::LEFT);
        frame(&mut ui, 0, &mut tb);
        ui.input_mut().mousemove(4 * CW, 2);
        frame(&mut ui, 1, &mut tb);
        assert_eq!(tb.buffer().selected_text().as_deref(), Some("bcd"));
    }

    #[test]
    fn typing_goes_to_the_focused_box_only() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = focused_box(&mut ui, "");
        ui.input_mut().text("hi");
        frame(&mut ui, 2, &mut tb);
        assert_eq!(tb.content(), "hi");

        let mut other = TextBox::new(0, 300, 50, 50, "");
        ui.input_mut().text("x");
        frame(&mut ui, 3, &mut other);
        assert_eq!(other.content(), "");
    }

    #[test]
    fn enter_splits_the_line_in_multi_line_mode() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = focused_box(&mut ui, "abcd");
        tb.buffer_mut().set_cursor(Cursor::new(0, 2));
        ui.input_mut().key_pressed(KeyToken::Enter);
        ui.input_mut().key_released(KeyToken::Enter);
        frame(&mut ui, 2, &mut tb);
        assert_eq!(tb.content(), "ab\ncd");
        assert!(tb.is_focused());
    }

    #[test]
    fn single_line_enter_commits_and_unfocuses() {
        let mut ui = Ui::with_screen(400, 400);
        let committed = Rc::new(RefCell::new(String::new()));
        let sink = committed.clone();
        let mut tb = TextBox::single_line(0, 0, 200, "");
        tb.on_enter = Some(Box::new(move |text: &str| {
            *sink.borrow_mut() = text.to_string();
            Ok(())
        }));
        click(&mut ui, 0, &mut tb, 1, 1);
        ui.input_mut().text("go\nignored");
        frame(&mut ui, 2, &mut tb);
        assert_eq!(committed.borrow().as_str(), "go");
        assert!(!tb.is_focused());
        assert_eq!(tb.content(), "go");
    }

    #[test]
    fn single_line_paste_flattens_line_breaks() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = TextBox::single_line(0, 0, 200, "");
        click(&mut ui, 0, &mut tb, 1, 1);
        ui.clipboard_set("a\n\nb\r\nc");
        ui.input_mut().text("\x16");
        frame(&mut ui, 2, &mut tb);
        assert_eq!(tb.content(), "a b c");
    }

    #[test]
    fn cut_then_paste_moves_text() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = focused_box(&mut ui, "one two");
        tb.buffer_mut().select(Cursor::new(0, 0), Cursor::new(0, 4));
        ui.input_mut().text("\x18");
        frame(&mut ui, 2, &mut tb);
        assert_eq!(tb.content(), "two");
        tb.buffer_mut().set_cursor(Cursor::new(0, 3));
        ui.input_mut().text("\x16");
        frame(&mut ui, 3, &mut tb);
        assert_eq!(tb.content(), "twoone ");
    }

    #[test]
    fn filters_reject_characters() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = focused_box(&mut ui, "");
        tb.whitelist = Some("0123456789.".to_string());
        tb.blacklist = Some(".".to_string());
        ui.input_mut().text("1a.2");
        frame(&mut ui, 2, &mut tb);
        assert_eq!(tb.content(), "12");
    }

    #[test]
    fn save_reports_selection_and_cursor() {
        let mut ui = Ui::with_screen(400, 400);
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        let mut tb = focused_box(&mut ui, "ab\ncd");
        tb.on_save = Some(Box::new(move |content: &str, selection: Option<&Selection>, cursor: Cursor| {
            *sink.borrow_mut() = Some((content.to_string(), selection.cloned(), cursor));
            Ok(())
        }));
        tb.buffer_mut().select(Cursor::new(0, 1), Cursor::new(1, 1));
        ui.input_mut().text("\x13");
        frame(&mut ui, 2, &mut tb);
        let expected = Selection {
            text: "b\nc".to_string(),
            start: 1,
            end: 4,
        };
        assert_eq!(*seen.borrow(), Some(("ab\ncd".to_string(), Some(expected), Cursor::new(1, 1))));
    }

    #[test]
    fn ctrl_z_and_shift_ctrl_z_walk_history() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = focused_box(&mut ui, "");
        ui.input_mut().text("ab ");
        frame(&mut ui, 2, &mut tb);
        ui.input_mut().text("\x1a");
        frame(&mut ui, 3, &mut tb);
        assert_eq!(tb.content(), "");
        ui.input_mut().keydown(KeyMode::SHIFT);
        ui.input_mut().text("\x1a");
        frame(&mut ui, 4, &mut tb);
        assert_eq!(tb.content(), "ab ");
    }

    #[test]
    fn clicking_elsewhere_drops_focus() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = focused_box(&mut ui, "abc");
        click(&mut ui, 2, &mut tb, 390, 390);
        assert!(!tb.is_focused());
    }

    #[test]
    fn grows_with_content() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = TextBox::new(0, 0, 10, 10, "abcd\nef\ng");
        frame(&mut ui, 0, &mut tb);
        assert_eq!((tb.width(), tb.height()), (5 * CW, 3 * LH));
    }

    #[test]
    fn renders_selection_text_and_cursor() {
        let mut ui = Ui::with_screen(400, 400);
        let mut tb = focused_box(&mut ui, "abc");
        tb.buffer_mut().select(Cursor::new(0, 1), Cursor::new(0, 3));
        let mut canvas = Canvas::new(Dimensioni::new(400, 400));
        ui.begin_frame(Duration::from_millis(32));
        tb.update(&ui, &mut canvas, 10, 10);
        let mut renderer = crate::canvas::tests::RecordingRenderer::default();
        canvas.render(&mut renderer, Color::default());
        assert_eq!(renderer.rects, vec![(10, 10, 200, 100), (10 + CW, 10, 2 * CW, LH), (10 + 3 * CW, 10, 2, LH)]);
        assert_eq!(renderer.texts, vec![("abc".to_string(), 10, 10)]);
    }
}
