//! Color notation normalization.
//!
//! Maps every supported SVG color notation (named colors, 3/6/8-digit hex)
//! to the canonical 8-digit `#AARRGGBB` form WPF brushes use. CSS functional
//! notation (`rgb()`, `hsl()`) is not supported.

/// Sentinel brush value for `none`/empty paints.
pub const TRANSPARENT: &str = "Transparent";

const OPAQUE_BLACK: &str = "#FF000000";

/// Normalize a color token to `#AARRGGBB`.
///
/// Alpha defaults to fully opaque. Unrecognized names and tokens fall back
/// to opaque black; a bad color is a local degradation, never a failure.
pub fn normalize_color(color: &str) -> String {
    if color.is_empty() || color == "none" {
        return TRANSPARENT.to_owned();
    }

    if let Some(hex) = color.strip_prefix('#') {
        match hex.len() {
            // Already carries an alpha channel.
            8 => return color.to_owned(),
            6 => return format!("#FF{hex}"),
            3 => {
                let mut out = String::with_capacity(9);
                out.push_str("#FF");
                for nibble in hex.chars() {
                    out.push(nibble);
                    out.push(nibble);
                }
                return out;
            }
            _ => {}
        }
    }

    named_color(&color.to_ascii_lowercase()).to_owned()
}

fn named_color(name: &str) -> &'static str {
    match name {
        "black" => OPAQUE_BLACK,
        "white" => "#FFFFFFFF",
        "red" => "#FFFF0000",
        "green" => "#FF00FF00",
        "blue" => "#FF0000FF",
        "yellow" => "#FFFFFF00",
        "cyan" => "#FF00FFFF",
        "magenta" => "#FFFF00FF",
        _ => OPAQUE_BLACK,
    }
}

/// Scale the alpha byte of a normalized `#AARRGGBB` color by a stop opacity.
///
/// Values that are not in canonical hex form (e.g. the transparent sentinel)
/// pass through unchanged.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_alpha(color: &str, opacity: f32) -> String {
    if opacity >= 1.0 || !color.starts_with('#') || color.len() != 9 {
        return color.to_owned();
    }
    let Ok(alpha) = u8::from_str_radix(&color[1..3], 16) else {
        return color.to_owned();
    };
    let scaled = (f32::from(alpha) * opacity.clamp(0.0, 1.0)).round() as u8;
    format!("#{scaled:02X}{}", &color[3..])
}
