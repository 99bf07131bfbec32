//! CSS color parsing for layer colors.
//!
//! Layer colors arrive as free CSS strings. Connective fills need the same
//! color at reduced opacity, so colors are parsed into [`Rgba`] and written
//! back as `#rrggbbaa`.

use std::fmt;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scales the current alpha by `alpha / 255`.
    #[must_use]
    pub fn with_alpha_scaled(self, alpha: u8) -> Self {
        let scaled = (f64::from(self.a) * f64::from(alpha) / 255.0).round();
        Self {
            a: scaled.clamp(0.0, 255.0) as u8,
            ..self
        }
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// CSS hex notation; the alpha pair is only written when not opaque.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Parses hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), functional
/// (`rgb(..)`, `rgba(..)`) and a set of named colors.
#[must_use]
pub fn parse_css_color(text: &str) -> Option<Rgba> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(color) = parse_hex_color(trimmed) {
        return Some(color);
    }
    if let Some(color) = parse_functional_color(trimmed) {
        return Some(color);
    }
    named_color(trimmed)
}

fn parse_hex_color(text: &str) -> Option<Rgba> {
    let digits = text.strip_prefix('#')?;
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    let expanded = match digits.len() {
        3 | 4 => {
            let mut result = String::with_capacity(digits.len() * 2);
            for ch in digits.chars() {
                result.push(ch);
                result.push(ch);
            }
            result
        }
        6 | 8 => digits.to_owned(),
        _ => return None,
    };

    let channel = |index: usize| u8::from_str_radix(&expanded[index..index + 2], 16).ok();
    let alpha = if expanded.len() == 8 { channel(6)? } else { 255 };
    Some(Rgba::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
}

fn parse_functional_color(text: &str) -> Option<Rgba> {
    let lower = text.to_ascii_lowercase();
    let body = lower
        .strip_prefix("rgba")
        .or_else(|| lower.strip_prefix("rgb"))?
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let cleaned = body.replace('/', " ");
    let tokens: Vec<&str> = cleaned
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.len() != 3 && tokens.len() != 4 {
        return None;
    }

    let mut channels = [0_u8; 3];
    for (slot, token) in channels.iter_mut().zip(&tokens) {
        *slot = parse_channel(token)?;
    }
    let alpha = match tokens.get(3) {
        Some(token) => parse_alpha(token)?,
        None => 255,
    };

    Some(Rgba::rgba(channels[0], channels[1], channels[2], alpha))
}

fn parse_channel(token: &str) -> Option<u8> {
    let value = if let Some(percent) = token.strip_suffix('%') {
        percent.parse::<f64>().ok()? * 255.0 / 100.0
    } else {
        token.parse::<f64>().ok()?
    };
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}

fn parse_alpha(token: &str) -> Option<u8> {
    let value = if let Some(percent) = token.strip_suffix('%') {
        percent.parse::<f64>().ok()? / 100.0
    } else {
        token.parse::<f64>().ok()?
    };
    if !value.is_finite() {
        return None;
    }
    Some((value.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn named_color(text: &str) -> Option<Rgba> {
    match text.to_ascii_lowercase().as_str() {
        "white" => Some(Rgba::WHITE),
        "black" => Some(Rgba::BLACK),
        "red" => Some(Rgba::rgb(255, 0, 0)),
        "green" => Some(Rgba::rgb(0, 128, 0)),
        "lime" => Some(Rgba::rgb(0, 255, 0)),
        "blue" => Some(Rgba::rgb(0, 0, 255)),
        "yellow" => Some(Rgba::rgb(255, 255, 0)),
        "magenta" | "fuchsia" => Some(Rgba::rgb(255, 0, 255)),
        "cyan" | "aqua" => Some(Rgba::rgb(0, 255, 255)),
        "orange" => Some(Rgba::rgb(255, 165, 0)),
        "purple" => Some(Rgba::rgb(128, 0, 128)),
        "gray" | "grey" => Some(Rgba::rgb(128, 128, 128)),
        "silver" => Some(Rgba::rgb(192, 192, 192)),
        "brown" => Some(Rgba::rgb(165, 42, 42)),
        "tan" => Some(Rgba::rgb(210, 180, 140)),
        "khaki" => Some(Rgba::rgb(240, 230, 140)),
        "sienna" => Some(Rgba::rgb(160, 82, 45)),
        "peru" => Some(Rgba::rgb(205, 133, 63)),
        "olive" => Some(Rgba::rgb(128, 128, 0)),
        "navy" => Some(Rgba::rgb(0, 0, 128)),
        "transparent" => Some(Rgba::rgba(0, 0, 0, 0)),
        _ => None,
    }
}
