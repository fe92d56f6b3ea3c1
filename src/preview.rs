//! Terminal inspection view for a token tree.
//!
//! Renders every flattened token as an aligned `name value` row, with a
//! color swatch appended for hex-color values. This is the terminal
//! counterpart of the design-system documentation page that shows palette
//! chips next to their values.

use console::Style;
use unicode_width::UnicodeWidthStr;

use crate::flatten::flatten;
use crate::token::{Group, Scalar, TokenTreeError};
use crate::util::{pad_to_width, parse_hex_color, rgb_to_ansi256};

const SWATCH: &str = "██████";

/// Renders an aligned, swatch-annotated listing of all tokens.
///
/// # Errors
///
/// Returns an error if the tree fails flattening validation.
///
/// # Example
///
/// ```rust
/// use mm_primitives::{preview, Group};
///
/// let tokens = Group::new()
///     .add("primary", "#FE5200")
///     .add("gap", "1em");
///
/// let view = preview::render(&tokens).unwrap();
/// assert!(view.contains("$primary"));
/// assert!(view.contains("1em"));
/// ```
pub fn render(tokens: &Group) -> Result<String, TokenTreeError> {
    let entries = flatten(tokens)?;
    let name_width = entries.iter().map(|e| e.name.width()).max().unwrap_or(0);

    let mut out = String::new();
    for entry in &entries {
        out.push_str(&pad_to_width(&entry.name, name_width));
        out.push_str("  ");
        out.push_str(&entry.value.to_string());

        if let Some(swatch) = swatch_for(&entry.value) {
            out.push_str("  ");
            out.push_str(&swatch);
        }
        out.push('\n');
    }
    Ok(out)
}

// Only hex-color text values get a swatch; everything else is shown bare.
fn swatch_for(value: &Scalar) -> Option<String> {
    let text = match value {
        Scalar::Text(s) => s,
        Scalar::Number(_) => return None,
    };
    let rgb = parse_hex_color(text)?;
    let style = Style::new().color256(rgb_to_ansi256(rgb));
    Some(style.apply_to(SWATCH).to_string())
}
