//! End-to-end build tests: canonical primitives through flatten and the
//! SCSS writer, checked against the published variable namespace.

use mm_primitives::{flatten, primitives, scss};

const EXPECTED_SCSS: &str = "\
$palette-functional-primary: #FE5200;
$palette-functional-secondary: #018A42;
$palette-functional-tertiary: #01B8F2;
$palette-functional-background: #F7F7F7;
$palette-functional-border: #D9D9D9;
$palette-functional-foreground: #000000;
$size-layout-gap-condensed: 0.5em;
$size-layout-gap-normal: 1em;
$size-layout-gap-spacious: 1.5em;
$size-layout-thickness-thin: 0.5px;
$size-layout-thickness-thick: 1px;
$size-layout-thickness-thicker: 2px;
$typography-weight-light: 300;
$typography-weight-normal: 400;
$typography-weight-medium: 500;
$typography-weight-semibold: 600;
$typography-family-sans: 'Pretendard';
$typography-family-serif: 'Noto Serif Korean';
$typography-family-mono: 'D2Coding';
$typography-dimension-small-size: 14px;
$typography-dimension-small-height: 1.5;
$typography-dimension-medium-size: 16px;
$typography-dimension-medium-height: 1.5;
$typography-dimension-large-size: 24px;
$typography-dimension-large-height: 1.5;
$typography-dimension-xlarge-size: 48px;
$typography-dimension-xlarge-height: 1.5;
";

#[test]
fn canonical_primitives_render_byte_identical_scss() {
    let entries = flatten(primitives()).unwrap();
    assert_eq!(scss::render(&entries), EXPECTED_SCSS);
}

#[test]
fn build_writes_the_rendered_text_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("dist").join("styles.scss");

    scss::write(primitives(), &dest).unwrap();

    assert_eq!(std::fs::read_to_string(&dest).unwrap(), EXPECTED_SCSS);
}

#[test]
fn build_leaves_no_temporary_files_behind() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("styles.scss");

    scss::write(primitives(), &dest).unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["styles.scss"]);
}

#[test]
fn json_round_trip_preserves_the_namespace() {
    // The canonical tree serialized to JSON and loaded back flattens to the
    // same declarations, weights keeping their authored string form.
    let json = serde_json::to_string(primitives()).unwrap();
    let loaded = mm_primitives::Group::from_json(&json).unwrap();

    let entries = flatten(&loaded).unwrap();
    assert_eq!(scss::render(&entries), EXPECTED_SCSS);
}
