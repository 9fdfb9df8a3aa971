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

use regex::Regex;

use crate::Color;

/// A run of text drawn in one color.
pub type ColoredRun = (Color, String);

/// Splits a line of logical text into colored runs.
///
/// Text widgets call this once per visible line; the engine itself never looks at colors.
pub trait Colorizer {
    /// Returns the colored runs for `line`; concatenated they must equal `line`.
    fn colorize(&self, line: &str, default: Color) -> Vec<ColoredRun>;
}

#[derive(Copy, Clone, Debug, Default)]
/// Draws every line in the default color.
pub struct PlainColorizer;

impl Colorizer for PlainColorizer {
    fn colorize(&self, line: &str, default: Color) -> Vec<ColoredRun> { vec![(default, line.to_string())] }
}

impl<F: Fn(&str, Color) -> Vec<ColoredRun>> Colorizer for F {
    fn colorize(&self, line: &str, default: Color) -> Vec<ColoredRun> { self(line, default) }
}

/// Adapts a highlighter that marks text up with 24-bit ANSI color escapes.
pub struct AnsiColorizer<F: Fn(&str) -> String> {
    markup: F,
}

impl<F: Fn(&str) -> String> AnsiColorizer<F> {
    /// Wraps `markup`, which returns its input with `ESC[38;2;R;G;Bm` / `ESC[0m` escapes added.
    pub fn new(markup: F) -> Self { Self { markup } }
}

impl<F: Fn(&str) -> String> Colorizer for AnsiColorizer<F> {
    fn colorize(&self, line: &str, default: Color) -> Vec<ColoredRun> {
        let marked = (self.markup)(line);
        parse_ansi(&marked, default).into_iter().next().unwrap_or_default()
    }
}

static ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[(?:\d+;?)*m").unwrap_or_else(|e| panic!("escape pattern: {e}")));

static FOREGROUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\x1b\[38;2;(\d+);(\d+);(\d+)m$").unwrap_or_else(|e| panic!("foreground pattern: {e}")));

/// Removes every ANSI SGR escape from `text`.
pub fn strip_ansi(text: &str) -> String { ESCAPE.replace_all(text, "").into_owned() }

fn channel(s: &str) -> u8 { s.parse::<u32>().map(|v| v.min(255) as u8).unwrap_or(0) }

fn push_run(line: &mut Vec<ColoredRun>, lines: &mut Vec<Vec<ColoredRun>>, run: &str, current: Color) {
    let mut parts = run.split('\n');
    if let Some(first) = parts.next() {
        if !first.is_empty() {
            line.push((current, first.to_string()));
        }
    }
    for part in parts {
        lines.push(std::mem::take(line));
        if !part.is_empty() {
            line.push((current, part.to_string()));
        }
    }
}

/// Splits ANSI marked-up text into lines of colored runs.
///
/// A foreground escape stays active across line breaks until `ESC[0m` restores `default`;
/// other escapes are dropped.
pub fn parse_ansi(text: &str, default: Color) -> Vec<Vec<ColoredRun>> {
    let mut lines = Vec::new();
    let mut line: Vec<ColoredRun> = Vec::new();
    let mut current = default;

    let mut last = 0;
    for m in ESCAPE.find_iter(text) {
        push_run(&mut line, &mut lines, &text[last..m.start()], current);
        let esc = m.as_str();
        if let Some(caps) = FOREGROUND.captures(esc) {
            current = Color::rgb(channel(&caps[1]), channel(&caps[2]), channel(&caps[3]));
        } else if esc == "\x1b[0m" {
            current = default;
        }
        last = m.end();
    }
    push_run(&mut line, &mut lines, &text[last..], current);
    lines.push(line);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::rgb(255, 255, 255);

    #[test]
    fn colored_runs_are_nameable_from_the_crate_root() {
        let runs: Vec<crate::ColoredRun> = PlainColorizer.colorize("abc", WHITE);
        assert_eq!(runs, vec![(WHITE, "abc".to_string())]);
    }

    #[test]
    fn strip_removes_all_escapes() {
        assert_eq!(strip_ansi("\x1b[38;2;1;2;3mred\x1b[0m plain\x1b[1m"), "red plain");
    }

    #[test]
    fn parse_splits_colors_and_lines() {
        let lines = parse_ansi("a\x1b[38;2;10;20;30mbc\nd\x1b[0me", WHITE);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], vec![(WHITE, "a".to_string()), (Color::rgb(10, 20, 30), "bc".to_string())]);
        assert_eq!(lines[1], vec![(Color::rgb(10, 20, 30), "d".to_string()), (WHITE, "e".to_string())]);
    }

    #[test]
    fn empty_lines_are_kept() {
        let lines = parse_ansi("x\n\ny", WHITE);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn ansi_colorizer_wraps_a_markup_function() {
        let keyword = AnsiColorizer::new(|line: &str| line.replace("fn", "\x1b[38;2;200;0;0mfn\x1b[0m"));
        let segs = keyword.colorize("fn main", WHITE);
        assert_eq!(segs, vec![(Color::rgb(200, 0, 0), "fn".to_string()), (WHITE, " main".to_string())]);
    }

    #[test]
    fn closures_are_colorizers() {
        let upper = |line: &str, c: Color| vec![(c, line.to_uppercase())];
        assert_eq!(upper.colorize("ab", WHITE), vec![(WHITE, "AB".to_string())]);
        assert_eq!(PlainColorizer.colorize("ab", WHITE), vec![(WHITE, "ab".to_string())]);
    }
}
