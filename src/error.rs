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
use thiserror::Error;

/// Programmer errors caught when a widget or style is constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A scroll bound pair is ordered the wrong way round.
    #[error("invalid {axis} scroll bounds: {max} must be >= {min}")]
    InvalidBounds {
        /// Axis the bounds belong to.
        axis: &'static str,
        /// Bound that must be the larger one (left or top).
        max: i32,
        /// Bound that must be the smaller one (right or bottom).
        min: i32,
    },

    /// A size is zero, negative or outside its allowed range.
    #[error("invalid {what}: {value} (expected {expected})")]
    InvalidDimension {
        /// Name of the dimension.
        what: &'static str,
        /// Offending value.
        value: i32,
        /// Human readable constraint.
        expected: &'static str,
    },

    /// A color did not have three or four channels.
    #[error("color needs 3 or 4 channels, got {0}")]
    InvalidColor(usize),

    /// Style file could not be parsed.
    #[error("style parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Style or font file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Font data could not be parsed.
    #[error("font error: {0}")]
    Font(String),
}

/// Failure reported by a user callback.
#[derive(Debug, Error)]
pub enum CallbackError {
    /// Plain message.
    #[error("{0}")]
    Message(String),

    /// Any other error raised by the callback.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<&str> for CallbackError {
    fn from(msg: &str) -> Self { Self::Message(msg.to_string()) }
}

impl From<String> for CallbackError {
    fn from(msg: String) -> Self { Self::Message(msg) }
}
