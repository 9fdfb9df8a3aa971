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
use tracing::{debug, warn};

use crate::widgets::{event_children, update_children};
use crate::*;

const DEFAULT_TAB_WIDTH: i32 = 75;
const STRIP_SCROLL_SPEED: i32 = 40;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Where the tab strip sits relative to the content area.
pub enum TabStyle {
    /// Horizontal strip above the content.
    Top,
    /// Horizontal strip below the content.
    Bottom,
    /// Vertical strip left of the content.
    Left,
    /// Vertical strip right of the content.
    Right,
    /// Column of full-width entries left of the content.
    Menu,
}

impl TabStyle {
    fn is_horizontal(self) -> bool { matches!(self, Self::Top | Self::Bottom) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Colors of the tab buttons.
pub struct TabColors {
    /// Inactive tab.
    pub unselected: Color,
    /// Inactive tab under the pointer.
    pub hovered: Color,
    /// Active tab.
    pub selected: Color,
    /// Tab label color, or the style's text color when unset.
    pub text: Option<Color>,
    /// Fill behind the strip where no tab is drawn.
    pub empty: Option<Color>,
    /// Fill behind the content area.
    pub content_bg: Option<Color>,
}

impl Default for TabColors {
    fn default() -> Self {
        Self {
            unselected: Color::rgb(150, 150, 150),
            hovered: Color::rgb(200, 200, 200),
            selected: Color::rgb(100, 100, 100),
            text: None,
            empty: None,
            content_bg: None,
        }
    }
}

struct Tab {
    name: String,
    content: Vec<Box<dyn Widget>>,
}

enum Strip {
    Fixed(Vec<Button>),
    Scrolling(Scrollable<Button>),
}

impl Strip {
    fn buttons(&self) -> &[Button] {
        match self {
            Self::Fixed(buttons) => buttons,
            Self::Scrolling(s) => s.children(),
        }
    }

    fn buttons_mut(&mut self) -> &mut Vec<Button> {
        match self {
            Self::Fixed(buttons) => buttons,
            Self::Scrolling(s) => s.children_mut(),
        }
    }
}

/// Content area with a strip of named tabs; only the active tab's content is shown.
pub struct Tabs {
    id: WidgetId,
    /// Left edge of the content area relative to the parent origin.
    pub x: i32,
    /// Top edge of the content area relative to the parent origin.
    pub y: i32,
    /// Content area width.
    pub width: i32,
    /// Content area height.
    pub height: i32,
    /// Space before the first tab along the strip.
    pub tab_buffer: i32,
    /// Length of a tab along the strip (width of a menu entry).
    pub tab_width: i32,
    /// Thickness of the strip, or the font line height plus 2 when unset.
    pub tab_height: Option<i32>,
    /// Gap between two tabs.
    pub tab_padding: i32,
    /// Tab colors.
    pub colors: TabColors,
    style: TabStyle,
    tabs: Vec<Tab>,
    strip: Strip,
    active: Option<usize>,
}

impl Tabs {
    /// Creates an empty tab container; fails unless the content area has a positive size.
    pub fn new(x: i32, y: i32, width: i32, height: i32, style: TabStyle) -> Result<Self, ConfigError> {
        for (what, value) in [("width", width), ("height", height)] {
            if value <= 0 {
                return Err(ConfigError::InvalidDimension { what, value, expected: "> 0" });
            }
        }
        Ok(Self {
            id: WidgetId::next(),
            x,
            y,
            width,
            height,
            tab_buffer: 0,
            tab_width: DEFAULT_TAB_WIDTH,
            tab_height: None,
            tab_padding: 0,
            colors: TabColors::default(),
            style,
            tabs: Vec::new(),
            strip: Strip::Fixed(Vec::new()),
            active: None,
        })
    }

    /// Hosts the tabs in a scroll container sized to the strip; tabs shrink to their labels.
    pub fn with_scrolling_strip(mut self) -> Self {
        let buttons = std::mem::take(self.strip.buttons_mut());
        let mut area = Scrollable::unbounded(0, 0, 1, 1);
        area.scroll_speed = Some(STRIP_SCROLL_SPEED);
        area.swap_scroll = self.style.is_horizontal();
        for b in buttons {
            area.push(b);
        }
        self.strip = Strip::Scrolling(area);
        self
    }

    /// Strip placement.
    pub fn style(&self) -> TabStyle { self.style }

    /// Tab names in strip order.
    pub fn tab_names(&self) -> impl Iterator<Item = &str> { self.tabs.iter().map(|t| t.name.as_str()) }

    fn index_of(&self, name: &str) -> Option<usize> { self.tabs.iter().position(|t| t.name == name) }

    /// Adds a tab, or replaces the content of an existing tab with the same name. The first tab
    /// added to an empty container becomes active.
    pub fn add_tab(&mut self, name: &str, content: Vec<Box<dyn Widget>>) {
        if let Some(i) = self.index_of(name) {
            self.tabs[i].content = content;
            return;
        }
        self.tabs.push(Tab { name: name.to_string(), content });
        self.strip.buttons_mut().push(Button::new(0, 0, self.tab_width, 1, name));
        if self.tabs.len() == 1 && self.active.is_none() {
            self.active = Some(0);
        }
    }

    /// Appends a widget to a tab's content; returns `false` if the tab does not exist.
    pub fn add_content(&mut self, name: &str, widget: impl Widget + 'static) -> bool {
        match self.index_of(name) {
            Some(i) => {
                self.tabs[i].content.push(Box::new(widget));
                true
            }
            None => false,
        }
    }

    /// Adds a widget drawn over the tab button itself.
    pub fn add_tab_child(&mut self, name: &str, widget: impl Widget + 'static) -> bool {
        match self.index_of(name) {
            Some(i) => {
                self.strip.buttons_mut()[i].push(widget);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the content widget with `id` from a tab.
    pub fn remove_content(&mut self, name: &str, id: WidgetId) -> Option<Box<dyn Widget>> {
        let i = self.index_of(name)?;
        let tab = &mut self.tabs[i];
        let pos = tab.content.iter().position(|w| w.id() == id)?;
        Some(tab.content.remove(pos))
    }

    /// Renames a tab, keeping its content and active state; fails if `old` is missing or `new`
    /// is taken.
    pub fn rename_tab(&mut self, old: &str, new: &str) -> bool {
        if self.index_of(new).is_some() {
            return false;
        }
        let Some(i) = self.index_of(old) else {
            return false;
        };
        self.tabs[i].name = new.to_string();
        self.strip.buttons_mut()[i].text = new.to_string();
        true
    }

    /// Removes a tab and returns its content; no tab is active afterwards.
    pub fn remove_tab(&mut self, name: &str) -> Option<Vec<Box<dyn Widget>>> {
        let i = self.index_of(name)?;
        self.strip.buttons_mut().remove(i);
        self.active = None;
        Some(self.tabs.remove(i).content)
    }

    /// Name of the tab whose content is shown.
    pub fn active_tab(&self) -> Option<&str> { self.active.map(|i| self.tabs[i].name.as_str()) }

    /// Shows the tab called `name`; returns `false` if it does not exist.
    pub fn set_active_tab(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(i) => {
                self.activate(i);
                true
            }
            None => false,
        }
    }

    fn activate(&mut self, i: usize) {
        if self.active != Some(i) {
            debug!(tab = %self.tabs[i].name, "tab switched");
            self.active = Some(i);
        }
    }

    /// Screen-independent rect of tab `i`, relative to the parent origin.
    pub fn tab_rect(&self, i: usize) -> Option<Recti> {
        let b = self.strip.buttons().get(i)?;
        Some(match &self.strip {
            Strip::Fixed(_) => rect(self.x + b.x, self.y + b.y, b.width, b.height),
            Strip::Scrolling(s) => rect(s.x + s.offset().x + b.x, s.y + s.offset().y + b.y, b.width, b.height),
        })
    }

    /// Rect of the strip relative to the parent origin.
    fn strip_rect(&self, th: i32) -> Recti {
        let (x, y, w, h, buf) = (self.x, self.y, self.width, self.height, self.tab_buffer);
        match self.style {
            TabStyle::Top => rect(x + buf, y - th, w - buf, th),
            TabStyle::Bottom => rect(x + buf, y + h, w - buf, th),
            TabStyle::Left => rect(x - th, y + buf, th, h - buf),
            TabStyle::Right => rect(x + w, y + buf, th, h - buf),
            TabStyle::Menu => rect(x - self.tab_width, y + buf, self.tab_width, h - buf),
        }
    }

    fn layout(&mut self, font: &dyn Font) {
        let th = self.tab_height.unwrap_or(font.line_height() + 2);
        let (tw, pad, buf) = (self.tab_width, self.tab_padding, self.tab_buffer);
        let (w, h) = (self.width, self.height);
        let style = self.style;
        let strip_area = self.strip_rect(th);

        match &mut self.strip {
            Strip::Fixed(buttons) => {
                for (i, b) in buttons.iter_mut().enumerate() {
                    let along = i as i32 * (tw + 1 + pad);
                    let r = match style {
                        TabStyle::Top => rect(buf + along, -th, tw, th),
                        TabStyle::Bottom => rect(buf + along, h, tw, th),
                        TabStyle::Left => rect(-th, buf + along, th, tw),
                        TabStyle::Right => rect(w, buf + along, th, tw),
                        TabStyle::Menu => rect(-tw, buf + i as i32 * (th + pad), tw, th),
                    };
                    (b.x, b.y, b.width, b.height) = (r.x, r.y, r.width, r.height);
                }
            }
            Strip::Scrolling(area) => {
                (area.x, area.y, area.width, area.height) = (strip_area.x, strip_area.y, strip_area.width, strip_area.height);
                area.bg_color = self.colors.empty;
                let mut total = 0;
                for b in area.children_mut().iter_mut() {
                    let label = font.text_width(&b.text) + 2;
                    let r = match style {
                        TabStyle::Top | TabStyle::Bottom => rect(total, 0, label, th),
                        TabStyle::Left | TabStyle::Right => rect(0, total, th, label),
                        TabStyle::Menu => rect(0, total, tw, th),
                    };
                    (b.x, b.y, b.width, b.height) = (r.x, r.y, r.width, r.height);
                    total += match style {
                        TabStyle::Menu => th + pad,
                        _ => label + 1 + pad,
                    };
                }
                let bounds = if style.is_horizontal() {
                    ScrollBounds {
                        left: Some(0),
                        right: Some((strip_area.width - total).min(0)),
                        top: Some(0),
                        bottom: Some(0),
                    }
                } else {
                    ScrollBounds {
                        left: Some(0),
                        right: Some(0),
                        top: Some(0),
                        bottom: Some((strip_area.height - total).min(0)),
                    }
                };
                if let Err(e) = area.set_bounds(bounds) {
                    warn!(error = %e, "tab strip bounds rejected");
                }
            }
        }

        let colors = self.colors;
        let active = self.active;
        for (i, b) in self.strip.buttons_mut().iter_mut().enumerate() {
            let selected = active == Some(i);
            b.bg_color = Some(if selected { colors.selected } else { colors.unselected });
            b.hover_color = Some(if selected { colors.selected } else { colors.hovered });
            b.click_color = Some(colors.selected);
            b.text_color = colors.text;
        }
    }
}

impl Widget for Tabs {
    fn id(&self) -> WidgetId { self.id }

    fn event(&mut self, ui: &mut Ui, x: i32, y: i32) {
        self.layout(ui.font());
        let (cx, cy) = (x + self.x, y + self.y);
        if let Some(i) = self.active {
            event_children(&mut self.tabs[i].content, ui, cx, cy);
        }
        match &mut self.strip {
            Strip::Fixed(buttons) => event_children(buttons, ui, cx, cy),
            Strip::Scrolling(area) => area.event(ui, x, y),
        }
        if let Some(i) = self.strip.buttons().iter().position(Button::clicked) {
            self.activate(i);
        }
    }

    fn update(&mut self, ui: &Ui, canvas: &mut Canvas, x: i32, y: i32) {
        self.layout(ui.font());
        let th = self.tab_height.unwrap_or(ui.font().line_height() + 2);
        let (cx, cy) = (x + self.x, y + self.y);
        if let (Some(empty), Strip::Fixed(_)) = (self.colors.empty, &self.strip) {
            let s = self.strip_rect(th);
            canvas.draw_rect(rect(x + s.x, y + s.y, s.width, s.height), empty);
        }
        if let Some(bg) = self.colors.content_bg {
            canvas.draw_rect(rect(cx, cy, self.width, self.height), bg);
        }
        match &mut self.strip {
            Strip::Fixed(buttons) => update_children(buttons, ui, canvas, cx, cy),
            Strip::Scrolling(area) => area.update(ui, canvas, x, y),
        }
        if let Some(i) = self.active {
            update_children(&mut self.tabs[i].content, ui, canvas, cx, cy);
        }
    }

    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Widget)) {
        if let Some(i) = self.active {
            for w in self.tabs[i].content.iter_mut() {
                f(w);
            }
        }
        for b in self.strip.buttons_mut().iter_mut() {
            f(b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // default style font: 18 px lines, so tabs are 20 px thick
    const TH: i32 = 20;

    fn tabs(style: TabStyle) -> Tabs {
        let mut t = match Tabs::new(10, 50, 300, 200, style) {
            Ok(t) => t,
            Err(e) => panic!("valid tabs rejected: {e}"),
        };
        for name in ["a", "b", "c"] {
            t.add_tab(name, vec![Box::new(Panel::new(0, 0, 300, 200, Color::rgb(1, 1, 1)))]);
        }
        t
    }

    fn frame(ui: &mut Ui, n: u64, t: &mut Tabs) {
        ui.begin_frame(Duration::from_millis(n * 16));
        t.event(ui, 0, 0);
        ui.end_frame();
    }

    fn rect_tuple(r: Option<Recti>) -> Option<(i32, i32, i32, i32)> { r.map(|r| (r.x, r.y, r.width, r.height)) }

    #[test]
    fn first_tab_starts_active() {
        let t = tabs(TabStyle::Top);
        assert_eq!(t.active_tab(), Some("a"));
        assert_eq!(t.tab_names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn clicking_a_tab_activates_it() {
        let mut ui = Ui::with_screen(400, 400);
        let mut t = tabs(TabStyle::Top);
        frame(&mut ui, 0, &mut t);
        assert_eq!(rect_tuple(t.tab_rect(1)), Some((86, 50 - TH, 75, TH)));

        ui.input_mut().mousedown(100, 40, MouseButton::LEFT);
        frame(&mut ui, 1, &mut t);
        assert_eq!(t.active_tab(), Some("b"));
    }

    #[test]
    fn strip_geometry_follows_the_style() {
        let mut ui = Ui::with_screen(400, 400);
        let cases = [
            (TabStyle::Bottom, (10 + 76, 250, 75, TH)),
            (TabStyle::Left, (10 - TH, 50 + 76, TH, 75)),
            (TabStyle::Right, (310, 50 + 76, TH, 75)),
            (TabStyle::Menu, (10 - 75, 50 + TH, 75, TH)),
        ];
        for (n, (style, expected)) in cases.into_iter().enumerate() {
            let mut t = tabs(style);
            frame(&mut ui, n as u64, &mut t);
            assert_eq!(rect_tuple(t.tab_rect(1)), Some(expected), "{style:?}");
        }
    }

    #[test]
    fn only_the_active_content_receives_events() {
        let mut ui = Ui::with_screen(400, 400);
        let mut t = tabs(TabStyle::Top);
        let mut ids = Vec::new();
        t.for_each_child(&mut |w| ids.push(w.id()));
        let active_content = ids[0];
        ui.input_mut().mousemove(100, 100);
        frame(&mut ui, 0, &mut t);
        assert_eq!(ui.hover_claimant(), Some(active_content));
    }

    #[test]
    fn removing_the_active_tab_clears_it() {
        let mut t = tabs(TabStyle::Top);
        let removed = t.remove_tab("a");
        assert_eq!(removed.map(|c| c.len()), Some(1));
        assert_eq!(t.active_tab(), None);
        assert!(t.remove_tab("a").is_none());
        assert!(t.set_active_tab("c"));
        assert_eq!(t.active_tab(), Some("c"));
    }

    #[test]
    fn rename_keeps_content_and_selection() {
        let mut t = tabs(TabStyle::Top);
        assert!(t.rename_tab("a", "z"));
        assert!(!t.rename_tab("b", "z"));
        assert_eq!(t.active_tab(), Some("z"));
        let label = Label::new(0, 0, "x");
        let id = label.id();
        assert!(t.add_content("z", label));
        assert!(!t.add_content("missing", Label::new(0, 0, "y")));
        assert!(t.remove_content("z", id).is_some());
        assert!(t.remove_content("z", id).is_none());
    }

    #[test]
    fn remove_content_looks_only_in_the_named_tab() {
        let mut t = tabs(TabStyle::Top);
        let label = Label::new(0, 0, "x");
        let id = label.id();
        assert!(t.add_content("b", label));
        assert!(t.remove_content("a", id).is_none());
        assert!(t.remove_content("missing", id).is_none());
        assert!(t.remove_content("b", id).is_some());
    }

    #[test]
    fn scrolling_strip_is_bounded_by_its_labels() {
        let mut ui = Ui::with_screen(400, 400);
        let mut t = match Tabs::new(0, 100, 50, 100, TabStyle::Top) {
            Ok(t) => t.with_scrolling_strip(),
            Err(e) => panic!("valid tabs rejected: {e}"),
        };
        for name in ["alpha", "beta", "gamma"] {
            t.add_tab(name, Vec::new());
        }
        frame(&mut ui, 0, &mut t);
        // labels are 5, 4 and 5 columns of 9 px plus 2 px, each followed by a 1 px gap
        let total = (47 + 1) + (38 + 1) + (47 + 1);
        match &t.strip {
            Strip::Scrolling(area) => assert_eq!(area.bounds().right, Some(50 - total)),
            Strip::Fixed(_) => panic!("strip should scroll"),
        }

        ui.input_mut().mousemove(10, 90);
        ui.input_mut().scroll(-10);
        frame(&mut ui, 1, &mut t);
        assert_eq!(rect_tuple(t.tab_rect(0)).map(|r| r.0), Some(50 - total));
    }

    #[test]
    fn empty_content_area_is_rejected() {
        assert!(Tabs::new(0, 0, 0, 10, TabStyle::Top).is_err());
    }
}
