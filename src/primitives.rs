//! The canonical design primitives.
//!
//! This is the source of truth for the design system's values. The category
//! and leaf names below are a published contract: the generated variable
//! namespace (`$palette-functional-primary`, `$size-layout-gap-normal`, ...)
//! and the documentation surfaces are both derived from them, so renaming or
//! moving a token is a breaking change for every consumer of the stylesheet.
//!
//! Numeric-looking values (font weights, line heights) are authored as text
//! on purpose: they are emitted verbatim, exactly as written here.

use once_cell::sync::Lazy;

use crate::token::Group;

static PRIMITIVES: Lazy<Group> = Lazy::new(build);

/// Returns the canonical token tree.
///
/// The tree is built once and shared; it is immutable for the lifetime of
/// the process.
///
/// # Example
///
/// ```rust
/// use mm_primitives::primitives;
///
/// let tokens = primitives();
/// assert!(tokens.get("palette").is_some());
/// assert_eq!(tokens.leaf_count(), 27);
/// ```
pub fn primitives() -> &'static Group {
    &PRIMITIVES
}

fn build() -> Group {
    Group::new()
        .add("palette", palette())
        .add("size", size())
        .add("typography", typography())
}

fn palette() -> Group {
    Group::new().add(
        "functional",
        Group::new()
            .add("primary", "#FE5200")
            .add("secondary", "#018A42")
            .add("tertiary", "#01B8F2")
            .add("background", "#F7F7F7")
            .add("border", "#D9D9D9")
            .add("foreground", "#000000"),
    )
}

fn size() -> Group {
    Group::new().add(
        "layout",
        Group::new()
            .add(
                "gap",
                Group::new()
                    .add("condensed", "0.5em")
                    .add("normal", "1em")
                    .add("spacious", "1.5em"),
            )
            .add(
                "thickness",
                Group::new()
                    .add("thin", "0.5px")
                    .add("thick", "1px")
                    .add("thicker", "2px"),
            ),
    )
}

fn typography() -> Group {
    Group::new()
        .add(
            "weight",
            Group::new()
                .add("light", "300")
                .add("normal", "400")
                .add("medium", "500")
                .add("semibold", "600"),
        )
        .add(
            "family",
            Group::new()
                .add("sans", "'Pretendard'")
                .add("serif", "'Noto Serif Korean'")
                .add("mono", "'D2Coding'"),
        )
        .add(
            "dimension",
            Group::new()
                .add("small", dimension("14px"))
                .add("medium", dimension("16px"))
                .add("large", dimension("24px"))
                .add("xlarge", dimension("48px")),
        )
}

fn dimension(font_size: &str) -> Group {
    Group::new().add("size", font_size).add("height", "1.5")
}
