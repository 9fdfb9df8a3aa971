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
use std::collections::VecDeque;

use tracing::debug;

use crate::{rect, Recti};

/// Characters whose insertion or deletion records an undo checkpoint.
pub const HISTORY_TRIGGERS: &str = " \n:.,/;'\"[]{}-=_+<>?|\\~`!@#$%^&*()";

/// Default number of undo snapshots kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Default indentation width.
pub const DEFAULT_TAB_SIZE: usize = 4;

fn is_trigger(c: char) -> bool { HISTORY_TRIGGERS.contains(c) }

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Insertion point; `col` counts characters and may equal the line length.
pub struct Cursor {
    /// Zero based line.
    pub line: usize,
    /// Zero based column.
    pub col: usize,
}

impl Cursor {
    /// Creates a cursor.
    pub const fn new(line: usize, col: usize) -> Self { Self { line, col } }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Selected text together with its character offsets in the content.
pub struct Selection {
    /// Selected text, lines joined by `\n`.
    pub text: String,
    /// Offset of the first selected character.
    pub start: usize,
    /// Offset just past the last selected character.
    pub end: usize,
}

/// Editable multi-line text with a cursor, an optional selection and undo history.
///
/// Lines never contain `\n` and there is always at least one line. Every mutation keeps the
/// cursor and selection inside the text. History snapshots are whole contents, newest first;
/// the initial content is the oldest snapshot.
#[derive(Clone, Debug)]
pub struct TextBuffer {
    lines: Vec<Vec<char>>,
    cursor: Cursor,
    // anchor, moving end
    selection: Option<(Cursor, Cursor)>,
    history: VecDeque<String>,
    future: Vec<String>,
    history_limit: usize,
    tab_size: usize,
}

impl Default for TextBuffer {
    fn default() -> Self { Self::new("") }
}

impl TextBuffer {
    /// Creates a buffer holding `content` with the default tab size and history limit.
    pub fn new(content: &str) -> Self { Self::with_limits(content, DEFAULT_TAB_SIZE, DEFAULT_HISTORY_LIMIT) }

    /// Creates a buffer with explicit tab size and history limit (both at least 1).
    pub fn with_limits(content: &str, tab_size: usize, history_limit: usize) -> Self {
        let mut history = VecDeque::new();
        history.push_front(content.to_string());
        Self {
            lines: split_lines(content),
            cursor: Cursor::default(),
            selection: None,
            history,
            future: Vec::new(),
            history_limit: history_limit.max(1),
            tab_size: tab_size.max(1),
        }
    }

    /// Whole text, lines joined by `\n`.
    pub fn content(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(line.iter());
        }
        out
    }

    /// Replaces the text; the cursor is clamped and the selection cleared.
    pub fn set_content(&mut self, content: &str) {
        self.lines = split_lines(content);
        self.cursor = self.clamp(self.cursor);
        self.selection = None;
    }

    /// Number of lines, at least 1.
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Characters of line `line`, empty when out of range.
    pub fn line_chars(&self, line: usize) -> &[char] { self.lines.get(line).map(|l| l.as_slice()).unwrap_or(&[]) }

    /// Text of line `line`, empty when out of range.
    pub fn line_text(&self, line: usize) -> String { self.line_chars(line).iter().collect() }

    /// Length of line `line` in characters.
    pub fn line_len(&self, line: usize) -> usize { self.line_chars(line).len() }

    /// All lines as strings.
    pub fn lines(&self) -> Vec<String> { self.lines.iter().map(|l| l.iter().collect()).collect() }

    /// Length of the longest line in characters.
    pub fn longest_line(&self) -> usize { self.lines.iter().map(Vec::len).max().unwrap_or(0) }

    /// Indentation width.
    pub fn tab_size(&self) -> usize { self.tab_size }

    /// Changes the indentation width (at least 1).
    pub fn set_tab_size(&mut self, tab_size: usize) { self.tab_size = tab_size.max(1); }

    /// Changes the number of kept checkpoints (at least 1), dropping the oldest ones.
    pub fn set_history_limit(&mut self, limit: usize) {
        self.history_limit = limit.max(1);
        self.history.truncate(self.history_limit);
    }

    /// Current cursor.
    pub fn cursor(&self) -> Cursor { self.cursor }

    /// Moves the cursor, clamped to the text; the selection is kept.
    pub fn set_cursor(&mut self, cursor: Cursor) { self.cursor = self.clamp(cursor); }

    fn clamp(&self, c: Cursor) -> Cursor {
        let line = c.line.min(self.lines.len() - 1);
        Cursor::new(line, c.col.min(self.lines[line].len()))
    }

    /// Raw selection as `(anchor, end)`.
    pub fn selection(&self) -> Option<(Cursor, Cursor)> { self.selection }

    /// Selection bounds in text order.
    pub fn ordered_selection(&self) -> Option<(Cursor, Cursor)> { self.selection.map(|(a, b)| if a <= b { (a, b) } else { (b, a) }) }

    /// Selects from `anchor` to `end` and puts the cursor at `end`; empty ranges clear the selection.
    pub fn select(&mut self, anchor: Cursor, end: Cursor) {
        let (anchor, end) = (self.clamp(anchor), self.clamp(end));
        self.cursor = end;
        self.selection = if anchor == end { None } else { Some((anchor, end)) };
    }

    /// Selects the whole text.
    pub fn select_all(&mut self) {
        let last = self.lines.len() - 1;
        self.select(Cursor::default(), Cursor::new(last, self.lines[last].len()));
    }

    /// Drops the selection, keeping the cursor.
    pub fn clear_selection(&mut self) { self.selection = None; }

    /// Moves the cursor to `to`, growing the selection from its anchor or from the old cursor.
    pub fn extend_to(&mut self, to: Cursor) {
        let anchor = self.selection.map(|(a, _)| a).unwrap_or(self.cursor);
        self.select(anchor, to);
    }

    /// Selected text, lines joined by `\n`.
    pub fn selected_text(&self) -> Option<String> {
        let (s, e) = self.ordered_selection()?;
        let mut out = String::new();
        for line in s.line..=e.line {
            let chars = &self.lines[line];
            let from = if line == s.line { s.col } else { 0 };
            let to = if line == e.line { e.col } else { chars.len() };
            if line > s.line {
                out.push('\n');
            }
            out.extend(chars[from..to].iter());
        }
        Some(out)
    }

    /// Replaces the selection with `text`, leaving the cursor after it. Returns `false` without a
    /// selection.
    pub fn replace_selection(&mut self, text: &str) -> bool {
        let Some((s, e)) = self.ordered_selection() else {
            return false;
        };
        let tail: Vec<char> = self.lines[e.line][e.col..].to_vec();
        self.lines[s.line].truncate(s.col);
        self.lines.drain(s.line + 1..=e.line);
        self.lines[s.line].extend(tail);
        self.edited();
        self.selection = None;
        self.cursor = s;
        self.insert_raw(text);
        true
    }

    // any edit invalidates the redo stack
    fn edited(&mut self) { self.future.clear(); }

    // inserts text at the cursor, splitting on newlines
    fn insert_raw(&mut self, text: &str) {
        self.edited();
        let Cursor { line, col } = self.cursor;
        let tail: Vec<char> = self.lines[line].split_off(col);
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            self.lines[line].extend(first.chars());
        }
        let mut cur = line;
        for part in parts {
            cur += 1;
            self.lines.insert(cur, part.chars().collect());
        }
        let end_col = self.lines[cur].len();
        self.lines[cur].extend(tail);
        self.cursor = Cursor::new(cur, end_col);
    }

    /// Types one character over the selection; boundary characters record a checkpoint.
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.newline();
            return;
        }
        self.replace_selection("");
        self.lines[self.cursor.line].insert(self.cursor.col, c);
        self.cursor.col += 1;
        self.edited();
        if is_trigger(c) {
            self.save_history();
        }
    }

    /// Pastes possibly multi-line text over the selection and records a checkpoint.
    pub fn insert_str(&mut self, text: &str) {
        self.replace_selection("");
        self.insert_raw(text);
        self.save_history();
    }

    /// Splits the line at the cursor; the remainder after the cursor becomes the next line.
    pub fn newline(&mut self) {
        self.replace_selection("");
        self.insert_raw("\n");
        self.save_history();
    }

    /// Indents to the next tab stop when only whitespace precedes the cursor, otherwise inserts
    /// a full tab width of spaces.
    pub fn tab(&mut self) {
        self.replace_selection("");
        let Cursor { line, col } = self.cursor;
        let leading_ws = self.lines[line][..col].iter().all(|c| c.is_whitespace());
        let n = if leading_ws { self.tab_size - col % self.tab_size } else { self.tab_size };
        self.insert_raw(&" ".repeat(n));
        self.save_history();
    }

    /// Deletes the selection or the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        if self.replace_selection("") {
            return;
        }
        let Cursor { line, col } = self.cursor;
        if col > 0 {
            let c = self.lines[line].remove(col - 1);
            self.cursor.col -= 1;
            self.edited();
            if is_trigger(c) {
                self.save_history();
            }
        } else if line > 0 {
            let tail = self.lines.remove(line);
            self.cursor = Cursor::new(line - 1, self.lines[line - 1].len());
            self.lines[line - 1].extend(tail);
            self.edited();
            self.save_history();
        }
    }

    /// Deletes the selection or the character after the cursor, joining lines at the line end.
    pub fn delete_forward(&mut self) {
        if self.replace_selection("") {
            return;
        }
        let Cursor { line, col } = self.cursor;
        if col < self.lines[line].len() {
            let c = self.lines[line].remove(col);
            self.edited();
            if is_trigger(c) {
                self.save_history();
            }
        } else if line + 1 < self.lines.len() {
            let next = self.lines.remove(line + 1);
            self.lines[line].extend(next);
            self.edited();
            self.save_history();
        }
    }

    /// Moves one character left, wrapping to the end of the previous line.
    pub fn move_left(&mut self, extend: bool) {
        if !extend {
            if let Some((s, _)) = self.ordered_selection() {
                self.cursor = s;
                self.selection = None;
                return;
            }
        }
        let Cursor { line, col } = self.cursor;
        let to = if col > 0 {
            Cursor::new(line, col - 1)
        } else if line > 0 {
            Cursor::new(line - 1, self.lines[line - 1].len())
        } else {
            self.cursor
        };
        self.go(to, extend);
    }

    /// Moves one character right, wrapping to the start of the next line.
    pub fn move_right(&mut self, extend: bool) {
        if !extend {
            if let Some((_, e)) = self.ordered_selection() {
                self.cursor = e;
                self.selection = None;
                return;
            }
        }
        let Cursor { line, col } = self.cursor;
        let to = if col < self.lines[line].len() {
            Cursor::new(line, col + 1)
        } else if line + 1 < self.lines.len() {
            Cursor::new(line + 1, 0)
        } else {
            self.cursor
        };
        self.go(to, extend);
    }

    /// Moves one line up keeping the column where possible; on the first line moves to column 0.
    pub fn move_up(&mut self, extend: bool) {
        if !extend {
            if let Some((s, _)) = self.ordered_selection() {
                self.selection = None;
                self.cursor = s;
            }
        }
        let Cursor { line, col } = self.cursor;
        let to = if line == 0 { Cursor::new(0, 0) } else { self.clamp(Cursor::new(line - 1, col)) };
        self.go(to, extend);
    }

    /// Moves one line down keeping the column where possible; on the last line moves to its end.
    pub fn move_down(&mut self, extend: bool) {
        if !extend {
            if let Some((_, e)) = self.ordered_selection() {
                self.selection = None;
                self.cursor = e;
            }
        }
        let Cursor { line, col } = self.cursor;
        let last = self.lines.len() - 1;
        let to = if line == last { Cursor::new(last, self.lines[last].len()) } else { self.clamp(Cursor::new(line + 1, col)) };
        self.go(to, extend);
    }

    fn go(&mut self, to: Cursor, extend: bool) {
        if extend {
            self.extend_to(to);
        } else {
            self.cursor = to;
            self.selection = None;
        }
    }

    /// Records the content as a checkpoint if it differs from the newest one; clears redo.
    pub fn save_history(&mut self) {
        let content = self.content();
        if self.history.front() == Some(&content) {
            return;
        }
        self.history.push_front(content);
        self.future.clear();
        while self.history.len() > self.history_limit {
            self.history.pop_back();
        }
        debug!(snapshots = self.history.len(), "history checkpoint");
    }

    /// Number of stored checkpoints, the initial content included.
    pub fn history_len(&self) -> usize { self.history.len() }

    /// Number of states that [`TextBuffer::redo`] can restore.
    pub fn future_len(&self) -> usize { self.future.len() }

    /// Steps back one checkpoint; unsaved edits are checkpointed first so they can be redone.
    pub fn undo(&mut self) {
        if self.history.front() != Some(&self.content()) {
            self.save_history();
        }
        if self.history.len() > 1 {
            if let Some(newest) = self.history.pop_front() {
                self.future.push(newest);
            }
        }
        if let Some(snapshot) = self.history.front().cloned() {
            self.set_content(&snapshot);
        }
    }

    /// Re-applies the most recently undone checkpoint.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.future.pop() {
            self.set_content(&snapshot);
            self.history.push_front(snapshot);
        }
    }

    /// Character offset of `cursor` in [`TextBuffer::content`].
    pub fn index_of(&self, cursor: Cursor) -> usize {
        let c = self.clamp(cursor);
        self.lines[..c.line].iter().map(|l| l.len() + 1).sum::<usize>() + c.col
    }

    /// Selected text with its offsets, as handed to save callbacks.
    pub fn selection_range(&self) -> Option<Selection> {
        let (s, e) = self.ordered_selection()?;
        Some(Selection {
            text: self.selected_text()?,
            start: self.index_of(s),
            end: self.index_of(e),
        })
    }

    /// Highlight rectangles of the selection relative to the text origin, one per line.
    ///
    /// Lines fully or partially covered up to their end get one extra cell for the newline.
    pub fn highlight_rects(&self, char_width: i32, line_height: i32) -> Vec<Recti> {
        let Some((s, e)) = self.ordered_selection() else {
            return Vec::new();
        };
        (s.line..=e.line)
            .map(|line| {
                let from = if line == s.line { s.col } else { 0 };
                let to = if line == e.line { e.col } else { self.lines[line].len() + 1 };
                rect(from as i32 * char_width, line as i32 * line_height, (to - from) as i32 * char_width, line_height)
            })
            .collect()
    }

    /// Cursor nearest to a point relative to the text origin: row by floor, column by rounding.
    pub fn cursor_from_point(&self, dx: i32, dy: i32, char_width: i32, line_height: i32) -> Cursor {
        let row = dy.div_euclid(line_height.max(1)).max(0) as usize;
        let cw = char_width.max(1);
        let col = ((dx.max(0) + cw / 2) / cw) as usize;
        self.clamp(Cursor::new(row, col))
    }
}

fn split_lines(content: &str) -> Vec<Vec<char>> { content.split('\n').map(|l| l.chars().collect()).collect() }

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(buf: &mut TextBuffer, text: &str) {
        for c in text.chars() {
            buf.insert_char(c);
        }
    }

    #[test]
    fn enter_splits_at_the_cursor() {
        let mut buf = TextBuffer::new("ab\ncd");
        buf.set_cursor(Cursor::new(0, 2));
        buf.newline();
        assert_eq!(buf.content(), "ab\n\ncd");
        assert_eq!(buf.cursor(), Cursor::new(1, 0));

        let mut buf = TextBuffer::new("abcd");
        buf.set_cursor(Cursor::new(0, 1));
        buf.newline();
        assert_eq!(buf.lines(), vec!["a".to_string(), "bcd".to_string()]);
    }

    #[test]
    fn typing_checkpoints_at_boundaries() {
        let mut buf = TextBuffer::new("");
        typed(&mut buf, "hello world");
        assert_eq!(buf.history_len(), 2);
        buf.save_history();
        assert_eq!(buf.history_len(), 3);
        buf.save_history();
        assert_eq!(buf.history_len(), 3);
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let mut buf = TextBuffer::new("start");
        buf.set_cursor(Cursor::new(0, 5));
        let edits = ["a", "b\nc", "d"];
        for e in edits {
            buf.insert_str(e);
        }
        let after = buf.content();
        for _ in edits {
            buf.undo();
        }
        assert_eq!(buf.content(), "start");
        for _ in edits {
            buf.redo();
        }
        assert_eq!(buf.content(), after);
        assert_eq!(buf.future_len(), 0);
    }

    #[test]
    fn undo_checkpoints_unsaved_edits_first() {
        let mut buf = TextBuffer::new("");
        typed(&mut buf, "abc");
        buf.undo();
        assert_eq!(buf.content(), "");
        buf.redo();
        assert_eq!(buf.content(), "abc");
    }

    #[test]
    fn typing_after_undo_drops_the_redo_stack() {
        let mut buf = TextBuffer::new("");
        typed(&mut buf, "ab ");
        buf.undo();
        assert_eq!(buf.future_len(), 1);
        typed(&mut buf, "x");
        assert_eq!(buf.future_len(), 0);
        buf.redo();
        assert_eq!(buf.content(), "x");

        let mut buf = TextBuffer::new("");
        typed(&mut buf, "cd ");
        buf.undo();
        buf.set_content("q");
        buf.set_cursor(Cursor::new(0, 1));
        buf.backspace();
        assert_eq!(buf.future_len(), 0);
        buf.redo();
        assert_eq!(buf.content(), "");
    }

    #[test]
    fn undo_with_a_single_snapshot_reapplies_it() {
        let mut buf = TextBuffer::new("same");
        buf.undo();
        assert_eq!(buf.content(), "same");
        assert_eq!(buf.history_len(), 1);
    }

    #[test]
    fn history_is_bounded() {
        let mut buf = TextBuffer::with_limits("", 4, 3);
        typed(&mut buf, "a b c d e ");
        assert_eq!(buf.history_len(), 3);
    }

    #[test]
    fn replacing_a_selection_with_nothing_shrinks_by_its_length() {
        let mut buf = TextBuffer::new("hello\nbig\nworld");
        buf.select(Cursor::new(2, 2), Cursor::new(0, 3));
        let selected = buf.selected_text().unwrap_or_default();
        assert_eq!(selected, "lo\nbig\nwo");
        let before = buf.content().chars().count();
        assert!(buf.replace_selection(""));
        assert_eq!(buf.content().chars().count(), before - selected.chars().count());
        assert_eq!(buf.content(), "helrld");
        assert_eq!(buf.selected_text(), None);
        assert_eq!(buf.cursor(), Cursor::new(0, 3));
    }

    #[test]
    fn zero_width_selection_is_dropped() {
        let mut buf = TextBuffer::new("abc");
        buf.select(Cursor::new(0, 1), Cursor::new(0, 1));
        assert_eq!(buf.selection(), None);
    }

    #[test]
    fn shift_movement_extends_and_plain_movement_collapses() {
        let mut buf = TextBuffer::new("abc\ndef");
        buf.set_cursor(Cursor::new(0, 1));
        buf.move_right(true);
        buf.move_down(true);
        assert_eq!(buf.selected_text().as_deref(), Some("bc\nde"));
        buf.move_left(false);
        assert_eq!(buf.selection(), None);
        assert_eq!(buf.cursor(), Cursor::new(0, 1));
    }

    #[test]
    fn arrows_wrap_and_pin_at_the_ends() {
        let mut buf = TextBuffer::new("ab\ncdef");
        buf.set_cursor(Cursor::new(0, 2));
        buf.move_right(false);
        assert_eq!(buf.cursor(), Cursor::new(1, 0));
        buf.move_left(false);
        assert_eq!(buf.cursor(), Cursor::new(0, 2));
        buf.move_up(false);
        assert_eq!(buf.cursor(), Cursor::new(0, 0));
        buf.set_cursor(Cursor::new(1, 4));
        buf.move_up(false);
        assert_eq!(buf.cursor(), Cursor::new(0, 2));
        buf.move_down(false);
        buf.move_down(false);
        assert_eq!(buf.cursor(), Cursor::new(1, 4));
    }

    #[test]
    fn backspace_and_delete_join_lines() {
        let mut buf = TextBuffer::new("ab\ncd");
        buf.set_cursor(Cursor::new(1, 0));
        buf.backspace();
        assert_eq!(buf.content(), "abcd");
        assert_eq!(buf.cursor(), Cursor::new(0, 2));
        buf.set_content("ab\ncd");
        buf.set_cursor(Cursor::new(0, 2));
        buf.delete_forward();
        assert_eq!(buf.content(), "abcd");
        assert_eq!(buf.cursor(), Cursor::new(0, 2));
        buf.set_cursor(Cursor::new(0, 0));
        buf.backspace();
        assert_eq!(buf.content(), "abcd");
    }

    #[test]
    fn tab_pads_to_the_next_stop_in_leading_whitespace() {
        let mut buf = TextBuffer::new("  x");
        buf.set_cursor(Cursor::new(0, 2));
        buf.tab();
        assert_eq!(buf.content(), "    x");
        buf.set_cursor(Cursor::new(0, 5));
        buf.tab();
        assert_eq!(buf.content(), "    x    ");
    }

    #[test]
    fn multi_line_paste_lands_the_cursor_after_it() {
        let mut buf = TextBuffer::new("[]");
        buf.set_cursor(Cursor::new(0, 1));
        buf.insert_str("a\nbc");
        assert_eq!(buf.content(), "[a\nbc]");
        assert_eq!(buf.cursor(), Cursor::new(1, 2));
    }

    #[test]
    fn offsets_count_newlines() {
        let mut buf = TextBuffer::new("ab\ncde");
        assert_eq!(buf.index_of(Cursor::new(1, 1)), 4);
        buf.select(Cursor::new(0, 1), Cursor::new(1, 2));
        let info = buf.selection_range();
        assert_eq!(
            info,
            Some(Selection {
                text: "b\ncd".to_string(),
                start: 1,
                end: 5,
            })
        );
    }

    #[test]
    fn highlight_covers_each_selected_line() {
        let mut buf = TextBuffer::new("abc\nde\nfgh");
        buf.select(Cursor::new(0, 1), Cursor::new(2, 2));
        let rects: Vec<_> = buf.highlight_rects(10, 20).into_iter().map(|r| (r.x, r.y, r.width, r.height)).collect();
        assert_eq!(rects, vec![(10, 0, 30, 20), (0, 20, 30, 20), (0, 40, 20, 20)]);
    }

    #[test]
    fn point_maps_to_the_nearest_cell() {
        let buf = TextBuffer::new("abcd\nef");
        assert_eq!(buf.cursor_from_point(14, 5, 10, 20), Cursor::new(0, 1));
        assert_eq!(buf.cursor_from_point(16, 25, 10, 20), Cursor::new(1, 2));
        assert_eq!(buf.cursor_from_point(500, 500, 10, 20), Cursor::new(1, 2));
        assert_eq!(buf.cursor_from_point(-5, -5, 10, 20), Cursor::new(0, 0));
    }
}
