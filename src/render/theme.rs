use std::fmt;

use clap::ValueEnum;
use crossterm::style::Color;

/// Built-in color schemes. Cycled with [`ThemeKind::next`].
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
    Marine,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Light, ThemeKind::Dark, ThemeKind::Marine];

    /// The theme after this one, wrapping around.
    pub fn next(self) -> ThemeKind {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Marine,
            ThemeKind::Marine => ThemeKind::Light,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::Light => Theme {
                background: Color::Rgb { r: 240, g: 240, b: 240 },
                wall: Color::Rgb { r: 40, g: 40, b: 40 },
                floor: Color::Rgb { r: 255, g: 255, b: 255 },
                entrance: Color::Rgb { r: 60, g: 180, b: 75 },
                exit: Color::Rgb { r: 230, g: 25, b: 75 },
                player: Color::Rgb { r: 0, g: 90, b: 200 },
            },
            ThemeKind::Dark => Theme {
                background: Color::Rgb { r: 20, g: 20, b: 24 },
                wall: Color::Rgb { r: 200, g: 200, b: 210 },
                floor: Color::Rgb { r: 35, g: 35, b: 40 },
                entrance: Color::Rgb { r: 80, g: 200, b: 120 },
                exit: Color::Rgb { r: 240, g: 80, b: 80 },
                player: Color::Rgb { r: 250, g: 200, b: 60 },
            },
            ThemeKind::Marine => Theme {
                background: Color::Rgb { r: 10, g: 30, b: 60 },
                wall: Color::Rgb { r: 170, g: 220, b: 240 },
                floor: Color::Rgb { r: 20, g: 60, b: 110 },
                entrance: Color::Rgb { r: 90, g: 230, b: 200 },
                exit: Color::Rgb { r: 250, g: 140, b: 90 },
                player: Color::Rgb { r: 255, g: 255, b: 255 },
            },
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeKind::Light => write!(f, "light"),
            ThemeKind::Dark => write!(f, "dark"),
            ThemeKind::Marine => write!(f, "marine"),
        }
    }
}

/// Palette handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub wall: Color,
    pub floor: Color,
    pub entrance: Color,
    pub exit: Color,
    pub player: Color,
}

impl Default for Theme {
    fn default() -> Self {
        ThemeKind::default().theme()
    }
}
