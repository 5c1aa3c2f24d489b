//! Colour theme loaded from `theme.conf` (key = value, hex colours).
//!
use ratatui::style::Color;
use std::path::Path;

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub error_fg: Color,
}

impl Theme {
    /// Dark default theme.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight_fg: Color::Yellow,
            highlight_bg: Color::Reset,
            error_fg: Color::LightRed,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x6c, 0x70, 0x86),        // overlay0
            title: Color::Rgb(0x89, 0xb4, 0xfa),        // blue
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            error_fg: Color::Rgb(0xf3, 0x8b, 0xa8),     // red
        }
    }

    /// Every configurable colour with its key in `theme.conf`, in file order.
    fn entries(&self) -> [(&'static str, Color); 11] {
        [
            ("text", self.text),
            ("muted", self.muted),
            ("title", self.title),
            ("border", self.border),
            ("header_bg", self.header_bg),
            ("header_fg", self.header_fg),
            ("status_bg", self.status_bg),
            ("status_fg", self.status_fg),
            ("highlight_fg", self.highlight_fg),
            ("highlight_bg", self.highlight_bg),
            ("error_fg", self.error_fg),
        ]
    }

    fn slot(&mut self, key: &str) -> Option<&mut Color> {
        Some(match key {
            "text" => &mut self.text,
            "muted" => &mut self.muted,
            "title" => &mut self.title,
            "border" => &mut self.border,
            "header_bg" => &mut self.header_bg,
            "header_fg" => &mut self.header_fg,
            "status_bg" => &mut self.status_bg,
            "status_fg" => &mut self.status_fg,
            "highlight_fg" => &mut self.highlight_fg,
            "highlight_bg" => &mut self.highlight_bg,
            "error_fg" => &mut self.error_fg,
            _ => return None,
        })
    }

    /// Load a theme from a `key = colour` file.
    ///
    /// Starts from [`Theme::mocha`] and overrides each colour the file names.
    /// Blank lines, `#` comments, unknown keys and unparsable colours are
    /// skipped; the latter two are logged.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to `theme.conf`.
    ///
    /// # Returns
    ///
    /// `Some(theme)` if the file is readable; `None` otherwise.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();

        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=').map(|(k, v)| (k.trim(), v.trim())) else {
                continue;
            };
            match (theme.slot(key), parse_color(val)) {
                (Some(slot), Some(color)) => *slot = color,
                (None, _) => tracing::warn!(key, "unknown theme key"),
                (Some(_), None) => tracing::warn!(key, val, "ignoring unparsable theme colour"),
            }
        }

        Some(theme)
    }

    /// Write the theme as `key = #RRGGBB` lines.
    ///
    /// # Arguments
    ///
    /// * `path` - Destination file; overwritten if it exists.
    ///
    /// # Returns
    ///
    /// `std::io::Result<()>` indicating success or failure.
    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        let mut buf = String::from(
            "# bus-roster theme\n# Colours: #RRGGBB, RRGGBB or 'reset'. Missing keys use the mocha palette.\n\n",
        );
        for (key, color) in self.entries() {
            buf.push_str(&format!("{key} = {}\n", color_to_str(color)));
        }
        std::fs::write(path, buf)
    }

    /// Read `path`, or create it with the mocha palette on first run.
    ///
    /// A file that exists but cannot be read falls back to mocha without
    /// being overwritten. Failing to write the default is logged, not fatal.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to `theme.conf`, usually from `config_file_write_path`.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let theme = Self::mocha();
        if let Err(e) = theme.write_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not write default theme");
        }
        theme
    }
}

/// Parse `#RRGGBB`, `RRGGBB` or `reset` (case-insensitive).
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("reset") {
        return Some(Color::Reset);
    }
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let rgb = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

/// Inverse of [`parse_color`]. Named ANSI colours (only used by [`Theme::dark`])
/// have no stable RGB value and are written as their nearest xterm hex.
fn color_to_str(c: Color) -> String {
    let (r, g, b) = match c {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0x00, 0x00, 0x00),
        Color::Gray => (0xc0, 0xc0, 0xc0),
        Color::DarkGray => (0x80, 0x80, 0x80),
        Color::Cyan => (0x00, 0xff, 0xff),
        Color::Yellow => (0xff, 0xff, 0x00),
        Color::LightRed => (0xff, 0x55, 0x55),
        Color::White => (0xff, 0xff, 0xff),
        _ => return "reset".to_string(),
    };
    format!("#{r:02X}{g:02X}{b:02X}")
}
