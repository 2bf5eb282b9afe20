use bitflags::bitflags;
use colored::{Color, ColoredString, Colorize};
use derive_new::new;

/// Named terminal colors used by the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    White,
}

impl Tone {
    fn ansi(self) -> Color {
        match self {
            Tone::Black => Color::Black,
            Tone::Red => Color::Red,
            Tone::Green => Color::Green,
            Tone::Yellow => Color::Yellow,
            Tone::Blue => Color::Blue,
            Tone::Cyan => Color::Cyan,
            Tone::White => Color::White,
        }
    }

    fn tmux_name(self) -> &'static str {
        match self {
            Tone::Black => "black",
            Tone::Red => "red",
            Tone::Green => "green",
            Tone::Yellow => "yellow",
            Tone::Blue => "blue",
            Tone::Cyan => "cyan",
            Tone::White => "white",
        }
    }
}

bitflags! {
    /// Text weight and slant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attrs: u8 {
        const BOLD = 1;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
    }
}

/// Semantic style of a prompt fragment. Encoding it into escape sequences is
/// the job of [`StyleRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paint {
    fg: Option<Tone>,
    bg: Option<Tone>,
    attrs: Attrs,
}

impl Paint {
    pub const fn plain() -> Self {
        Paint {
            fg: None,
            bg: None,
            attrs: Attrs::empty(),
        }
    }

    pub const fn fg(tone: Tone) -> Self {
        Paint {
            fg: Some(tone),
            ..Paint::plain()
        }
    }

    pub const fn attrs(attrs: Attrs) -> Self {
        Paint {
            attrs,
            ..Paint::plain()
        }
    }

    pub const fn on(self, tone: Tone) -> Self {
        Paint {
            bg: Some(tone),
            ..self
        }
    }

    pub const fn with(self, attrs: Attrs) -> Self {
        Paint {
            attrs: self.attrs.union(attrs),
            ..self
        }
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}

/// How escape sequences must be wrapped for the consumer of the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escape {
    /// Raw ANSI sequences.
    #[default]
    None,
    /// `\[` ... `\]` around every sequence, for `PS1`.
    Bash,
    /// `%{` ... `%}` around every sequence, for `PROMPT`.
    Zsh,
    /// tmux `#[...]` style markup instead of ANSI.
    Tmux,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    pub escape: Escape,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            color: true,
            escape: Escape::None,
        }
    }
}

/// Encodes [`Paint`] tags for the configured shell.
///
/// ANSI output goes through `colored`, so the caller decides whether colors
/// are forced when stdout is not a terminal (`colored::control::set_override`).
#[derive(Debug, Clone, Copy, new)]
pub struct StyleRenderer {
    options: RenderOptions,
}

impl StyleRenderer {
    pub fn paint(&self, text: &str, paint: Paint) -> String {
        if !self.options.color || paint.is_plain() {
            return text.to_string();
        }

        match self.options.escape {
            Escape::None => Self::ansi(text, paint).to_string(),
            Escape::Bash => wrap_sequences(&Self::ansi(text, paint).to_string(), r"\[", r"\]"),
            Escape::Zsh => wrap_sequences(&Self::ansi(text, paint).to_string(), "%{", "%}"),
            Escape::Tmux => Self::tmux(text, paint),
        }
    }

    fn ansi(text: &str, paint: Paint) -> ColoredString {
        let mut styled = text.normal();
        if let Some(fg) = paint.fg {
            styled = styled.color(fg.ansi());
        }
        if let Some(bg) = paint.bg {
            styled = styled.on_color(bg.ansi());
        }
        if paint.attrs.contains(Attrs::BOLD) {
            styled = styled.bold();
        }
        if paint.attrs.contains(Attrs::FAINT) {
            styled = styled.dimmed();
        }
        if paint.attrs.contains(Attrs::ITALIC) {
            styled = styled.italic();
        }
        styled
    }

    fn tmux(text: &str, paint: Paint) -> String {
        let mut parts = Vec::new();
        if let Some(fg) = paint.fg {
            parts.push(format!("fg={}", fg.tmux_name()));
        }
        if let Some(bg) = paint.bg {
            parts.push(format!("bg={}", bg.tmux_name()));
        }
        if paint.attrs.contains(Attrs::BOLD) {
            parts.push("bold".to_string());
        }
        if paint.attrs.contains(Attrs::FAINT) {
            parts.push("dim".to_string());
        }
        if paint.attrs.contains(Attrs::ITALIC) {
            parts.push("italics".to_string());
        }

        format!("#[{}]{}#[default]", parts.join(","), text)
    }
}

/// Surrounds every `ESC [ ... m` sequence with `open` and `close` so the
/// shell does not count it towards the prompt width.
fn wrap_sequences(ansi: &str, open: &str, close: &str) -> String {
    let mut wrapped = String::with_capacity(ansi.len() + 4 * (open.len() + close.len()));
    let mut rest = ansi;

    while let Some(start) = rest.find('\x1b') {
        wrapped.push_str(&rest[..start]);
        let sequence = &rest[start..];
        let end = sequence.find('m').map_or(sequence.len(), |i| i + 1);

        wrapped.push_str(open);
        wrapped.push_str(&sequence[..end]);
        wrapped.push_str(close);
        rest = &sequence[end..];
    }
    wrapped.push_str(rest);

    wrapped
}
