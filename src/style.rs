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
use std::io::Read;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{color, Color, ConfigError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Visual constants and tunables shared by every widget.
///
/// Colors are written as `[r, g, b]` or `[r, g, b, a]` arrays; keys missing from a style file
/// keep their default value.
pub struct Style {
    /// Font name or path handed to the host font loader.
    pub font: String,
    /// Pixel size of the UI font.
    pub text_size: usize,
    /// Default text color.
    pub text_color: Color,
    /// Default background behind text widgets.
    pub text_bg_color: Color,
    /// Selection highlight color.
    pub text_highlight: Color,
    /// Text cursor color.
    pub cursor_color: Color,
    /// Resting button background.
    pub button_color: Color,
    /// Button background while hovered.
    pub button_hover_color: Color,
    /// Button background while pressed.
    pub button_click_color: Color,
    /// Collapsible divider color.
    pub split_color: Color,
    /// Full-screen mask drawn behind a popup.
    pub popup_fade_color: Color,
    /// Popup body background.
    pub popup_bg_color: Color,
    /// Color the frame is cleared to.
    pub clear_color: Color,
    /// Width of a tab stop in columns.
    pub tab_size: usize,
    /// Pixels scrolled per wheel notch.
    pub scroll_multiplier: i32,
    /// Hold time before a key starts repeating, in milliseconds.
    pub key_repeat_delay_ms: u64,
    /// Time between two repeats, in milliseconds.
    pub key_repeat_interval_ms: u64,
    /// Full blink period of the text cursor, in milliseconds.
    pub cursor_blink_ms: u64,
    /// Maximum number of undo snapshots kept per text buffer.
    pub history_limit: usize,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: "PTMono-Regular.ttf".to_string(),
            text_size: 15,
            text_color: Color::rgb(204, 204, 204),
            text_bg_color: Color::rgb(31, 31, 31),
            text_highlight: color(38, 79, 120, 180),
            cursor_color: Color::rgb(190, 190, 190),
            button_color: Color::rgb(31, 31, 31),
            button_hover_color: Color::rgb(50, 50, 50),
            button_click_color: Color::rgb(70, 70, 70),
            split_color: Color::rgb(70, 70, 70),
            popup_fade_color: color(0, 0, 0, 127),
            popup_bg_color: Color::rgb(24, 24, 24),
            clear_color: Color::rgb(24, 24, 24),
            tab_size: 4,
            scroll_multiplier: 15,
            key_repeat_delay_ms: 800,
            key_repeat_interval_ms: 50,
            cursor_blink_ms: 1000,
            history_limit: 256,
        }
    }
}

impl Style {
    /// Parses a style from JSON, filling missing keys with defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let style: Style = serde_json::from_str(text)?;
        style.validate()
    }

    /// Reads and parses a style file.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ConfigError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json(&text)
    }

    /// Serializes the style back to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> { Ok(serde_json::to_string_pretty(self)?) }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.text_size == 0 {
            return Err(ConfigError::InvalidDimension {
                what: "text_size",
                value: 0,
                expected: "> 0",
            });
        }
        if self.tab_size == 0 {
            return Err(ConfigError::InvalidDimension {
                what: "tab_size",
                value: 0,
                expected: "> 0",
            });
        }
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidDimension {
                what: "history_limit",
                value: 0,
                expected: "> 0",
            });
        }
        Ok(self)
    }

    /// Key repeat delay as a [`Duration`].
    pub fn key_repeat_delay(&self) -> Duration { Duration::from_millis(self.key_repeat_delay_ms) }

    /// Key repeat interval as a [`Duration`].
    pub fn key_repeat_interval(&self) -> Duration { Duration::from_millis(self.key_repeat_interval_ms) }

    /// Cursor blink period as a [`Duration`].
    pub fn cursor_blink(&self) -> Duration { Duration::from_millis(self.cursor_blink_ms.max(1)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let style = Style::from_json(r#"{ "text_size": 18, "text_color": [1, 2, 3] }"#).unwrap();
        assert_eq!(style.text_size, 18);
        assert_eq!(style.text_color, Color::rgb(1, 2, 3));
        assert_eq!(style.scroll_multiplier, 15);
        assert_eq!(style.tab_size, 4);
    }

    #[test]
    fn four_channel_colors_keep_alpha() {
        let style = Style::from_json(r#"{ "popup_fade_color": [0, 0, 0, 64] }"#).unwrap();
        assert_eq!(style.popup_fade_color, color(0, 0, 0, 64));
    }

    #[test]
    fn bad_color_is_a_config_error() {
        assert!(matches!(Style::from_json(r#"{ "text_color": [1, 2] }"#), Err(ConfigError::Json(_))));
    }

    #[test]
    fn zero_tab_size_is_rejected() {
        assert!(matches!(Style::from_json(r#"{ "tab_size": 0 }"#), Err(ConfigError::InvalidDimension { what: "tab_size", .. })));
    }

    #[test]
    fn round_trips_through_json() {
        let style = Style::default();
        let text = style.to_json().unwrap();
        assert_eq!(Style::from_json(&text).unwrap(), style);
    }

    #[test]
    fn reads_from_any_reader() {
        let style = Style::from_reader(&b"{ \"scroll_multiplier\": 30 }"[..]).unwrap();
        assert_eq!(style.scroll_multiplier, 30);
    }
}
