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
use std::collections::BTreeMap;

use crate::widgets::{event_children, update_children, visit_children};
use crate::*;

/// Children grouped into numbered layers; higher layers are drawn above lower ones.
pub struct Layered {
    id: WidgetId,
    /// Left edge relative to the parent origin.
    pub x: i32,
    /// Top edge relative to the parent origin.
    pub y: i32,
    layers: BTreeMap<i32, Vec<Box<dyn Widget>>>,
}

impl Default for Layered {
    fn default() -> Self { Self::new(0, 0) }
}

impl Layered {
    /// Creates an empty stack of layers.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            id: WidgetId::next(),
            x,
            y,
            layers: BTreeMap::new(),
        }
    }

    /// Ensures `layer` exists.
    pub fn add_layer(&mut self, layer: i32) { self.layers.entry(layer).or_default(); }

    /// Adds a widget on top of `layer`, creating the layer if needed.
    pub fn push(&mut self, layer: i32, widget: impl Widget + 'static) { self.push_boxed(layer, Box::new(widget)); }

    /// Adds an already boxed widget on top of `layer`.
    pub fn push_boxed(&mut self, layer: i32, widget: Box<dyn Widget>) { self.layers.entry(layer).or_default().push(widget); }

    /// Removes and returns the widget with `id` from whichever layer holds it.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        self.layers.values_mut().find_map(|layer| {
            let pos = layer.iter().position(|w| w.id() == id)?;
            Some(layer.remove(pos))
        })
    }

    /// Widgets of `layer`, bottom first.
    pub fn layer(&self, layer: i32) -> &[Box<dyn Widget>] { self.layers.get(&layer).map(|l| l.as_slice()).unwrap_or(&[]) }

    /// Layer indices, lowest first.
    pub fn layer_indices(&self) -> impl Iterator<Item = i32> + '_ { self.layers.keys().copied() }

    /// Total number of widgets over all layers.
    pub fn len(&self) -> usize { self.layers.values().map(Vec::len).sum() }

    /// Returns `true` if no layer holds a widget.
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl Widget for Layered {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        for layer in self.layers.values_mut().rev() {
            event_children(layer, ui, x + self.x, y + self.y);
        }
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        for layer in self.layers.values_mut() {
            update_children(layer, ui, canvas, x + self.x, y + self.y);
        }
    }

    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) {
        for layer in self.layers.values_mut() {
            visit_children(layer, f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::RecordingRenderer;
    use std::time::Duration;

    #[test]
    fn higher_layer_claims_first_and_draws_last() {
        let mut ui = Ui::with_screen(100, 100);
        let mut root = Layered::new(0, 0);
        let top = Panel::new(0, 0, 50, 50, Color::rgb(1, 1, 1));
        let top_id = top.id();
        root.push(5, top);
        root.push(-1, Panel::new(0, 0, 60, 60, Color::rgb(2, 2, 2)));
        root.push(-1, Panel::new(0, 0, 70, 70, Color::rgb(3, 3, 3)));

        ui.input_mut().mousemove(10, 10);
        ui.begin_frame(Duration::ZERO);
        root.event(&mut ui, 0, 0);
        assert_eq!(ui.hover_claimant(), Some(top_id));

        let mut canvas = Canvas::new(Dimensioni::new(100, 100));
        root.update(&ui, &mut canvas, 0, 0);
        let mut renderer = RecordingRenderer::default();
        canvas.render(&mut renderer, Color::default());
        assert_eq!(renderer.rects, vec![(0, 0, 60, 60), (0, 0, 70, 70), (0, 0, 50, 50)]);
    }

    #[test]
    fn remove_finds_widgets_in_any_layer() {
        let mut root = Layered::default();
        root.add_layer(3);
        let label = Label::new(0, 0, "x");
        let id = label.id();
        root.push(2, label);
        assert_eq!(root.layer_indices().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(root.len(), 1);
        assert!(root.remove(id).is_some());
        assert!(root.is_empty());
        assert!(root.layer(2).is_empty());
    }
}
