use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    /// Draws the segments along which multi-line cuts were made
    #[serde(default = "default_true")]
    pub cut_lines: bool,
    /// Adds a coverage and stock label to the drawing
    #[serde(default = "default_true")]
    pub labels: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            cut_lines: true,
            labels: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub room_fill: &'static str,
    pub full_fill: &'static str,
    pub linear_cut_fill: &'static str,
    pub multi_line_cut_fill: &'static str,
    pub shape_cut_fill: &'static str,
    pub cut_line_stroke: &'static str,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        EARTH_TONES_THEME
    }
}

pub static EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    room_fill: "#CC824A",
    full_fill: "#FFC879",
    linear_cut_fill: "#E8B15F",
    multi_line_cut_fill: "#D29A4E",
    shape_cut_fill: "#BC8440",
    cut_line_stroke: "#FF0000",
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    room_fill: "#C3C3C3",
    full_fill: "#8F8F8F",
    linear_cut_fill: "#A3A3A3",
    multi_line_cut_fill: "#7A7A7A",
    shape_cut_fill: "#636363",
    cut_line_stroke: "#2D2D2D",
};

pub fn change_brightness(color: &str, fraction: f64) -> String {
    let mut color = color.to_string();
    if color.starts_with('#') {
        color.remove(0);
    }
    let mut r = u8::from_str_radix(&color[0..2], 16).unwrap();
    let mut g = u8::from_str_radix(&color[2..4], 16).unwrap();
    let mut b = u8::from_str_radix(&color[4..6], 16).unwrap();
    r = (r as f64 * fraction) as u8;
    g = (g as f64 * fraction) as u8;
    b = (b as f64 * fraction) as u8;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
