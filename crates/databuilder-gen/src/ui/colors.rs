use std::io::IsTerminal;

use clap::builder::styling::{AnsiColor, Color as ClapColor, RgbColor, Style, Styles};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// RGB triples for each role, per theme.
struct Palette {
  timestamp: (u8, u8, u8),
  primary: (u8, u8, u8),
  accent: (u8, u8, u8),
  success: (u8, u8, u8),
  label: (u8, u8, u8),
  value: (u8, u8, u8),
  muted: (u8, u8, u8),
}

const DARK: Palette = Palette {
  timestamp: (120, 144, 156),
  primary: (129, 199, 212),
  accent: (239, 118, 122),
  success: (152, 195, 121),
  label: (229, 192, 123),
  value: (224, 224, 224),
  muted: (110, 118, 129),
};

const LIGHT: Palette = Palette {
  timestamp: (96, 108, 118),
  primary: (0, 95, 135),
  accent: (175, 0, 65),
  success: (40, 120, 60),
  label: (135, 80, 0),
  value: (40, 40, 40),
  muted: (140, 140, 140),
};

pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn palette(&self) -> &'static Palette {
    match self.theme {
      Theme::Dark => &DARK,
      Theme::Light => &LIGHT,
    }
  }

  const fn pick(&self, rgb: (u8, u8, u8)) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    Color::Rgb {
      r: rgb.0,
      g: rgb.1,
      b: rgb.2,
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(self.palette().timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(self.palette().primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(self.palette().accent)
  }

  pub const fn success(&self) -> Color {
    self.pick(self.palette().success)
  }

  pub const fn label(&self) -> Color {
    self.pick(self.palette().label)
  }

  pub const fn value(&self) -> Color {
    self.pick(self.palette().value)
  }

  pub const fn muted(&self) -> Color {
    self.pick(self.palette().muted)
  }

  pub const fn clap_styles() -> Styles {
    const fn rgb((r, g, b): (u8, u8, u8)) -> Option<ClapColor> {
      Some(ClapColor::Rgb(RgbColor(r, g, b)))
    }

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(rgb(DARK.label)))
      .usage(Style::new().bold().fg_color(rgb(DARK.label)))
      .literal(Style::new().fg_color(rgb(DARK.success)))
      .placeholder(Style::new().fg_color(rgb(DARK.primary)))
      .error(Style::new().bold().fg_color(Some(ClapColor::Ansi(AnsiColor::Red))))
      .valid(Style::new().fg_color(rgb(DARK.success)))
      .invalid(Style::new().bold().fg_color(rgb(DARK.accent)))
  }
}

/// Converts a terminal color for use in `comfy_table` cells.
pub fn table_color(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(val) => ComfyColor::AnsiValue(val),
    Color::Black => ComfyColor::Black,
    Color::Red | Color::DarkRed => ComfyColor::Red,
    Color::Green | Color::DarkGreen => ComfyColor::Green,
    Color::Yellow | Color::DarkYellow => ComfyColor::Yellow,
    Color::Blue | Color::DarkBlue => ComfyColor::Blue,
    Color::Magenta | Color::DarkMagenta => ComfyColor::Magenta,
    Color::Cyan | Color::DarkCyan => ComfyColor::Cyan,
    Color::White => ComfyColor::White,
    Color::Grey | Color::DarkGrey => ComfyColor::Grey,
    Color::Reset => ComfyColor::Reset,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => std::env::var("COLORFGBG")
      .ok()
      .and_then(|value| theme_from_colorfgbg(&value))
      .unwrap_or(Theme::Dark),
  }
}

/// `COLORFGBG` is `fg;bg`; background codes 7 and 9-15 are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
  let background = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
  Some(if background == 7 || background > 8 {
    Theme::Light
  } else {
    Theme::Dark
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn disabled_colors_reset() {
    let colors = Colors::new(false, Theme::Light);
    assert_eq!(colors.primary(), Color::Reset);
    assert_eq!(colors.label(), Color::Reset);
  }

  #[test]
  fn enabled_colors_follow_theme() {
    let dark = Colors::new(true, Theme::Dark);
    let light = Colors::new(true, Theme::Light);
    assert_ne!(dark.primary(), light.primary());
    assert_eq!(table_color(dark.success()), ComfyColor::Rgb { r: 152, g: 195, b: 121 });
  }

  #[test]
  fn colorfgbg_parsing() {
    assert_eq!(theme_from_colorfgbg("15;0"), Some(Theme::Dark));
    assert_eq!(theme_from_colorfgbg("0;15"), Some(Theme::Light));
    assert_eq!(theme_from_colorfgbg("0;7"), Some(Theme::Light));
    assert_eq!(theme_from_colorfgbg("garbage"), None);
  }
}
