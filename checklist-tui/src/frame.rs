//! Positioned, styled text making up one screen.

use checklist::Rgb;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Text attributes of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
    pub fg: Option<Rgb>,
}

impl SpanStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub style: SpanStyle,
}

/// A screen worth of spans, clipped to the frame size.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    width: u16,
    height: u16,
    spans: Vec<Span>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            spans: Vec::new(),
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Put `text` at `(x, y)`, cut off at the right edge of the frame.
    pub fn text(&mut self, x: u16, y: u16, text: &str, style: SpanStyle) {
        if y >= self.height || x >= self.width {
            return;
        }
        let text = truncate(text, usize::from(self.width - x));
        if text.is_empty() {
            return;
        }
        self.spans.push(Span { x, y, text, style });
    }

    /// Text of row `y` with later spans drawn over earlier ones.
    #[cfg(test)]
    pub fn row_text(&self, y: u16) -> String {
        let mut cells = vec![' '; usize::from(self.width)];
        for span in self.spans.iter().filter(|span| span.y == y) {
            let mut col = usize::from(span.x);
            for c in span.text.chars() {
                if col < cells.len() {
                    cells[col] = c;
                }
                col += c.width().unwrap_or(0).max(1);
            }
        }
        cells.into_iter().collect::<String>().trim_end().to_string()
    }
}

/// Cut `text` to at most `max_width` terminal columns.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Greedy word wrap to `width` columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
