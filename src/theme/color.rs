//! Color string parsing, validation and the color functions used by derived
//! theme variables

use ratatui::style::Color;
use std::fmt;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Invalid hex color format: {0}")]
    InvalidHex(String),
    #[error("Unknown color name: {0}")]
    UnknownName(String),
    #[error("Invalid RGB values: {0}")]
    InvalidRgb(String),
    #[error("Invalid HSL values: {0}")]
    InvalidHsl(String),
}

/// A parsed color with 8-bit channels and a fractional alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Increase lightness by `amount` (fraction of the full HSL range)
    pub fn lighten(self, amount: f32) -> Self {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        let l = (l + amount.clamp(0.0, 1.0)).min(1.0);
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self { r, g, b, a: self.a }
    }

    /// Decrease lightness by `amount` (fraction of the full HSL range)
    pub fn darken(self, amount: f32) -> Self {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        let l = (l - amount.clamp(0.0, 1.0)).max(0.0);
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self { r, g, b, a: self.a }
    }

    /// Replace the alpha channel
    pub fn fade(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Opaque colors print as `#rrggbb`, translucent ones as `rgba(r, g, b, a)`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (self.a * 100.0).round() / 100.0;
            write!(f, "rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        if color.a == 0.0 {
            Color::Reset
        } else {
            Color::Rgb(color.r, color.g, color.b)
        }
    }
}

/// Returns true if `input` is a well-formed color string
pub fn is_valid_color(input: &str) -> bool {
    parse_color(input).is_ok()
}

/// Parse a color from various string formats
pub fn parse_color(input: &str) -> Result<Rgba, ColorParseError> {
    let input = input.trim();

    // Handle hex colors
    if input.starts_with('#') {
        return parse_hex_color(input);
    }

    let lower = input.to_lowercase();
    if let Some(args) = functional_args(&lower, "rgba").or_else(|| functional_args(&lower, "rgb"))
    {
        return parse_rgb_args(input, &args);
    }
    if let Some(args) = functional_args(&lower, "hsla").or_else(|| functional_args(&lower, "hsl"))
    {
        return parse_hsl_args(input, &args);
    }

    // Handle named colors
    parse_named_color(&lower).ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
}

/// Parse hex color in format #RGB, #RGBA, #RRGGBB or #RRGGBBAA
fn parse_hex_color(hex: &str) -> Result<Rgba, ColorParseError> {
    let digits = &hex[1..];
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
    };
    match digits.len() {
        3 | 4 => {
            // short form - expand each nibble, 17 = 255/15
            let mut values = [255u8; 4];
            for (i, value) in values.iter_mut().enumerate().take(digits.len()) {
                *value = channel(i..i + 1)? * 17;
            }
            Ok(Rgba {
                r: values[0],
                g: values[1],
                b: values[2],
                a: f32::from(values[3]) / 255.0,
            })
        }
        6 | 8 => {
            let a = if digits.len() == 8 {
                f32::from(channel(6..8)?) / 255.0
            } else {
                1.0
            };
            Ok(Rgba {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a,
            })
        }
        _ => Err(ColorParseError::InvalidHex(hex.to_string())),
    }
}

/// Split the comma separated arguments of `name(...)`
fn functional_args(lower: &str, name: &str) -> Option<Vec<String>> {
    let body = lower.strip_prefix(name)?.trim_start();
    let body = body.strip_prefix('(')?.strip_suffix(')')?;
    Some(body.split(',').map(|arg| arg.trim().to_string()).collect())
}

fn parse_rgb_args(input: &str, args: &[String]) -> Result<Rgba, ColorParseError> {
    let invalid = || ColorParseError::InvalidRgb(input.to_string());
    if args.len() != 3 && args.len() != 4 {
        return Err(invalid());
    }
    let mut channels = [0u8; 3];
    for (channel, arg) in channels.iter_mut().zip(args) {
        let value = match arg.strip_suffix('%') {
            Some(pct) => parse_unit(pct, 100.0).ok_or_else(invalid)? * 255.0,
            None => parse_unit(arg, 255.0).ok_or_else(invalid)?,
        };
        *channel = value.round() as u8;
    }
    let a = match args.get(3) {
        Some(arg) => parse_alpha(arg).ok_or_else(invalid)?,
        None => 1.0,
    };
    Ok(Rgba {
        r: channels[0],
        g: channels[1],
        b: channels[2],
        a,
    })
}

fn parse_hsl_args(input: &str, args: &[String]) -> Result<Rgba, ColorParseError> {
    let invalid = || ColorParseError::InvalidHsl(input.to_string());
    if args.len() != 3 && args.len() != 4 {
        return Err(invalid());
    }
    let h: f32 = args[0]
        .trim_end_matches("deg")
        .parse()
        .map_err(|_| invalid())?;
    if !h.is_finite() {
        return Err(invalid());
    }
    let s = args[1]
        .strip_suffix('%')
        .and_then(|v| parse_unit(v, 100.0))
        .ok_or_else(invalid)?;
    let l = args[2]
        .strip_suffix('%')
        .and_then(|v| parse_unit(v, 100.0))
        .ok_or_else(invalid)?;
    let a = match args.get(3) {
        Some(arg) => parse_alpha(arg).ok_or_else(invalid)?,
        None => 1.0,
    };
    let (r, g, b) = hsl_to_rgb(h.rem_euclid(360.0), s, l);
    Ok(Rgba { r, g, b, a })
}

/// Parse a number in `0..=max` and normalise it to `0.0..=1.0` (for `%`) or keep it
fn parse_unit(value: &str, max: f32) -> Option<f32> {
    let number: f32 = value.trim().parse().ok()?;
    if !(0.0..=max).contains(&number) {
        return None;
    }
    Some(if max == 100.0 { number / 100.0 } else { number })
}

fn parse_alpha(value: &str) -> Option<f32> {
    match value.strip_suffix('%') {
        Some(pct) => parse_unit(pct, 100.0),
        None => parse_unit(value, 1.0),
    }
}

/// CSS color keywords, sorted by name
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

/// Parse named color, expects a lowercase name
fn parse_named_color(name: &str) -> Option<Rgba> {
    if name == "transparent" {
        return Some(Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0.0,
        });
    }
    let index = NAMED_COLORS
        .binary_search_by(|(known, _)| known.cmp(&name))
        .ok()?;
    let [_, r, g, b] = NAMED_COLORS[index].1.to_be_bytes();
    Some(Rgba::opaque(r, g, b))
}

#[allow(clippy::many_single_char_names)]
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f32::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f32::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f32::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}

#[allow(clippy::many_single_char_names)]
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let h = h / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let to_u8 = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    (
        to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_rgb(p, q, h)),
        to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#ff0000").unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color("#00FF00").unwrap(), Rgba::opaque(0, 255, 0));
        assert_eq!(parse_color("#f00").unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color("#00f").unwrap(), Rgba::opaque(0, 0, 255));
        assert_eq!(parse_color("#ff000000").unwrap().a, 0.0);
        assert_eq!(parse_color("#f00f").unwrap().a, 1.0);
    }

    #[test]
    fn test_parse_functional_colors() {
        assert_eq!(
            parse_color("rgb(255, 0, 0)").unwrap(),
            Rgba::opaque(255, 0, 0)
        );
        assert_eq!(parse_color("rgba(0, 0, 0, 0.16)").unwrap().a, 0.16);
        assert_eq!(
            parse_color("rgb(100%, 0%, 0%)").unwrap(),
            Rgba::opaque(255, 0, 0)
        );
        assert_eq!(
            parse_color("hsl(0, 100%, 50%)").unwrap(),
            Rgba::opaque(255, 0, 0)
        );
        assert_eq!(
            parse_color("HSLA(120, 100%, 25%, 1)").unwrap(),
            Rgba::opaque(0, 128, 0)
        );
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("red").unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color("RED").unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color("grey").unwrap(), parse_color("gray").unwrap());
        assert_eq!(parse_color("transparent").unwrap().a, 0.0);
        assert_eq!(parse_color("darkblue").unwrap(), Rgba::opaque(0, 0, 139));
        assert_eq!(
            parse_color("RebeccaPurple").unwrap(),
            Rgba::opaque(102, 51, 153)
        );
        assert_eq!(parse_color("aliceblue").unwrap(), Rgba::opaque(240, 248, 255));
        assert_eq!(parse_color("yellowgreen").unwrap(), Rgba::opaque(154, 205, 50));
        assert!(is_valid_color("lightgoldenrodyellow"));
        assert!(!is_valid_color("darkbluish"));
    }

    #[test]
    fn named_colors_are_sorted_for_lookup() {
        assert!(NAMED_COLORS.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert_eq!(NAMED_COLORS.len(), 148);
    }

    #[test]
    fn test_invalid_colors() {
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("#ff00f").is_err());
        assert!(parse_color("invalid_color").is_err());
        assert!(parse_color("").is_err());
        assert!(parse_color("rgb(256, 0, 0)").is_err());
        assert!(parse_color("rgb(1, 2)").is_err());
        assert!(parse_color("hsl(0, 100, 50%)").is_err());
        assert!(!is_valid_color("1px"));
        assert!(!is_valid_color("notacolor"));
    }

    #[test]
    fn test_color_functions() {
        let gray = Rgba::opaque(128, 128, 128);
        assert_eq!(gray.lighten(1.0), Rgba::opaque(255, 255, 255));
        assert_eq!(gray.darken(1.0), Rgba::opaque(0, 0, 0));
        assert_eq!(Rgba::opaque(255, 0, 0).darken(0.25), Rgba::opaque(128, 0, 0));
        assert_eq!(gray.fade(0.5).to_string(), "rgba(128, 128, 128, 0.5)");
        assert_eq!(gray.to_string(), "#808080");
    }

    #[test]
    fn test_terminal_color_conversion() {
        assert_eq!(Color::from(Rgba::opaque(1, 2, 3)), Color::Rgb(1, 2, 3));
        assert_eq!(Color::from(parse_color("transparent").unwrap()), Color::Reset);
    }
}
