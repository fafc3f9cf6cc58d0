//! Web color text parsing.
//!
//! Accepted forms (ASCII case-insensitive, surrounding whitespace ignored):
//! - hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb()` / `rgba()`, comma or space separated, numbers or percentages
//! - `hsl()` / `hsla()`, hue in degrees, saturation/lightness as percentages
//! - CSS named colors and `transparent`

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, map, map_opt, map_res, opt},
    number::complete::recognize_float,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use super::Rgba;
use super::error::ColorParseError;

/// Parses a color string.
pub fn parse_color(input: &str) -> Result<Rgba, ColorParseError> {
    // CSS only skips ASCII whitespace around a value.
    let text = input.trim_matches(|c: char| c.is_ascii_whitespace());

    let parsed = if text.starts_with('#') {
        all_consuming(hex_color)(text).ok().map(|(_, c)| c)
    } else if let Ok((_, c)) = all_consuming(functional_color)(text) {
        Some(c)
    } else {
        named_color(text)
    };

    parsed.ok_or_else(|| {
        log::trace!("rejected color text {input:?}");
        ColorParseError::new(input)
    })
}

// ── hex ──────────────────────────────────────────────────────────────────

fn hex_color(input: &str) -> IResult<&str, Rgba> {
    preceded(
        char('#'),
        map_opt(take_while1(|c: char| c.is_ascii_hexdigit()), expand_hex),
    )(input)
}

fn expand_hex(hex: &str) -> Option<Rgba> {
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Rgba::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Rgba::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

// ── functional notation ──────────────────────────────────────────────────

fn functional_color(input: &str) -> IResult<&str, Rgba> {
    alt((rgb_function, hsl_function))(input)
}

fn rgb_function(input: &str) -> IResult<&str, Rgba> {
    let name = alt((tag_no_case("rgba"), tag_no_case("rgb")));
    preceded(
        terminated(name, multispace0),
        arguments(alt((
            map(
                tuple((channel, comma, channel, comma, channel, opt(preceded(comma, alpha)))),
                |(r, _, g, _, b, a)| Rgba::new(r, g, b, a.unwrap_or(255)),
            ),
            map(
                tuple((channel, multispace1, channel, multispace1, channel, opt(preceded(slash, alpha)))),
                |(r, _, g, _, b, a)| Rgba::new(r, g, b, a.unwrap_or(255)),
            ),
        ))),
    )(input)
}

fn hsl_function(input: &str) -> IResult<&str, Rgba> {
    let name = alt((tag_no_case("hsla"), tag_no_case("hsl")));
    preceded(
        terminated(name, multispace0),
        arguments(alt((
            map(
                tuple((hue, comma, percentage, comma, percentage, opt(preceded(comma, alpha)))),
                |(h, _, s, _, l, a)| hsl_to_rgba(h, s, l, a.unwrap_or(255)),
            ),
            map(
                tuple((hue, multispace1, percentage, multispace1, percentage, opt(preceded(slash, alpha)))),
                |(h, _, s, _, l, a)| hsl_to_rgba(h, s, l, a.unwrap_or(255)),
            ),
        ))),
    )(input)
}

/// Wraps an argument list parser in parentheses with optional inner padding.
fn arguments<'a, O>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(pair(char('('), multispace0), inner, pair(multispace0, char(')')))
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

fn slash(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char('/'), multispace0)(input)
}

fn number(input: &str) -> IResult<&str, f64> {
    map_res(recognize_float, str::parse::<f64>)(input)
}

/// Color channel: `0`–`255` or a percentage, clamped.
fn channel(input: &str) -> IResult<&str, u8> {
    map(pair(number, opt(char('%'))), |(v, pct)| {
        let unit = if pct.is_some() { v / 100.0 } else { v / 255.0 };
        unit_to_byte(unit)
    })(input)
}

/// Alpha: `0`–`1` or a percentage, clamped.
fn alpha(input: &str) -> IResult<&str, u8> {
    map(pair(number, opt(char('%'))), |(v, pct)| {
        let unit = if pct.is_some() { v / 100.0 } else { v };
        unit_to_byte(unit)
    })(input)
}

fn hue(input: &str) -> IResult<&str, f64> {
    terminated(number, opt(tag_no_case("deg")))(input)
}

/// Percentage as a fraction in `[0, 1]`.
fn percentage(input: &str) -> IResult<&str, f64> {
    map(terminated(number, char('%')), |v| (v / 100.0).clamp(0.0, 1.0))(input)
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hsl_to_rgba(hue_deg: f64, s: f64, l: f64, a: u8) -> Rgba {
    let h = hue_deg.rem_euclid(360.0) / 360.0;
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let rgb = Rgba::from_unit(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
        1.0,
    );
    rgb.with_alpha(a)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ── named colors ─────────────────────────────────────────────────────────

fn named_color(name: &str) -> Option<Rgba> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let name = name.to_ascii_lowercase();
    if name == "transparent" {
        return Some(Rgba::TRANSPARENT);
    }

    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, rgb)| Rgba::opaque((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

static NAMED_COLORS: &[(&str, u32)] = &[
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

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(src: &str) -> Rgba {
        parse_color(src).unwrap()
    }

    fn err(src: &str) {
        parse_color(src).unwrap_err();
    }

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn hex_short() {
        assert_eq!(ok("#f80"), Rgba::opaque(0xff, 0x88, 0x00));
    }

    #[test]
    fn hex_short_alpha() {
        assert_eq!(ok("#f808"), Rgba::new(0xff, 0x88, 0x00, 0x88));
    }

    #[test]
    fn hex_long() {
        assert_eq!(ok("#1A2b3C"), Rgba::opaque(0x1a, 0x2b, 0x3c));
        assert_eq!(ok("#1a2b3c80"), Rgba::new(0x1a, 0x2b, 0x3c, 0x80));
    }

    #[test]
    fn hex_bad_length() {
        err("#12345");
        err("#");
        err("#1234567890");
    }

    #[test]
    fn hex_bad_digit() {
        err("#xyz");
        err("#12345g");
    }

    // ── rgb ───────────────────────────────────────────────────────────────

    #[test]
    fn rgb_comma() {
        assert_eq!(ok("rgb(255, 0, 10)"), Rgba::opaque(255, 0, 10));
    }

    #[test]
    fn rgba_comma_alpha() {
        assert_eq!(ok("rgba(0,0,0,0.5)"), Rgba::new(0, 0, 0, 128));
    }

    #[test]
    fn rgb_space_and_slash_alpha() {
        assert_eq!(ok("rgb(10 20 30 / 50%)"), Rgba::new(10, 20, 30, 128));
    }

    #[test]
    fn rgb_percentages() {
        assert_eq!(ok("rgb(100%, 50%, 0%)"), Rgba::opaque(255, 128, 0));
    }

    #[test]
    fn rgb_clamps_channels() {
        assert_eq!(ok("rgb(300, -5, 12.4)"), Rgba::opaque(255, 0, 12));
    }

    #[test]
    fn rgb_case_and_padding() {
        assert_eq!(ok("  RGB( 1 , 2 , 3 )  "), Rgba::opaque(1, 2, 3));
    }

    #[test]
    fn rgb_malformed() {
        err("rgb(1, 2)");
        err("rgb(1, 2, 3");
        err("rgb(1, 2, 3) extra");
        err("rgb(a, b, c)");
    }

    // ── hsl ───────────────────────────────────────────────────────────────

    #[test]
    fn hsl_primaries() {
        assert_eq!(ok("hsl(0, 100%, 50%)"), Rgba::opaque(255, 0, 0));
        assert_eq!(ok("hsl(120deg 100% 50%)"), Rgba::opaque(0, 255, 0));
        assert_eq!(ok("hsl(240, 100%, 50%)"), Rgba::opaque(0, 0, 255));
    }

    #[test]
    fn hsl_grey_and_wrapped_hue() {
        assert_eq!(ok("hsl(42, 0%, 100%)"), Rgba::WHITE);
        assert_eq!(ok("hsl(-360, 100%, 50%)"), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn hsla_alpha() {
        assert_eq!(ok("hsla(0, 100%, 50%, 0)"), Rgba::new(255, 0, 0, 0));
    }

    #[test]
    fn hsl_requires_percentages() {
        err("hsl(0, 100, 50)");
    }

    // ── named ─────────────────────────────────────────────────────────────

    #[test]
    fn named_basic() {
        assert_eq!(ok("red"), Rgba::opaque(255, 0, 0));
        assert_eq!(ok("Black"), Rgba::BLACK);
        assert_eq!(ok("rebeccapurple"), Rgba::opaque(0x66, 0x33, 0x99));
    }

    #[test]
    fn named_transparent() {
        assert_eq!(ok("transparent"), Rgba::TRANSPARENT);
    }

    #[test]
    fn rejects_unknown() {
        err("not-a-color");
        err("");
        err("   ");
        err("reddish");
    }

    #[test]
    fn only_ascii_whitespace_is_trimmed() {
        assert_eq!(ok("\t\n rgb(255,0,0) \x0c"), Rgba::opaque(255, 0, 0));
        err("rgb(255,0,0)\u{a0}");
        err("\u{2003}red");
    }

    #[test]
    fn error_keeps_original_text() {
        assert_eq!(parse_color(" nope ").unwrap_err().input, " nope ");
    }
}
