//! Thematic classification of building features
//!
//! Classification is an ordered table walk rather than a chained
//! conditional: construction dates run through an ascending breakpoint
//! table, current-use codes through an exact-match category table. First
//! match wins; a date equal to a breakpoint falls into the upper bucket
//! because the comparison is strict.

use bv_core::ThematicMode;
use bv_data::feature::{attrs, Feature};
use chrono::{Datelike, NaiveDate};

use crate::color::ColorRgb;

/// Ascending construction-date breakpoints (January 1 of each year), each
/// paired with the color of the interval below it. Spectral ramp, 11 steps
/// together with [`DATE_OVERFLOW_COLOR`]. The pairing is fixed; the visual
/// legend depends on it.
pub const DATE_BREAKPOINTS: [(i32, ColorRgb); 10] = [
    (1900, ColorRgb::rgb(158, 1, 66)),
    (1920, ColorRgb::rgb(213, 62, 79)),
    (1940, ColorRgb::rgb(244, 109, 67)),
    (1950, ColorRgb::rgb(253, 174, 97)),
    (1960, ColorRgb::rgb(254, 224, 139)),
    (1970, ColorRgb::rgb(255, 255, 191)),
    (1980, ColorRgb::rgb(230, 245, 152)),
    (1990, ColorRgb::rgb(171, 221, 164)),
    (2000, ColorRgb::rgb(102, 194, 165)),
    (2010, ColorRgb::rgb(50, 136, 189)),
];

/// Color of the open interval above the last breakpoint. Also the fallback
/// for a missing or uncomparable construction date.
pub const DATE_OVERFLOW_COLOR: ColorRgb = ColorRgb::rgb(94, 79, 162);

/// Current-use category codes paired with their fixed colors. Bold palette.
/// Codes match by exact equality; no case or whitespace normalization.
pub const USE_CATEGORIES: [(&str, ColorRgb); 6] = [
    ("1_residential", ColorRgb::rgb(57, 105, 172)),
    ("2_agriculture", ColorRgb::rgb(17, 165, 121)),
    ("3_industrial", ColorRgb::rgb(127, 60, 141)),
    ("4_1_office", ColorRgb::rgb(242, 183, 1)),
    ("4_2_retail", ColorRgb::rgb(231, 63, 116)),
    ("4_3_publicServices", ColorRgb::rgb(128, 186, 90)),
];

/// Color for current-use codes outside the fixed category set
pub const OTHER_USE_COLOR: ColorRgb = ColorRgb::rgb(0, 134, 149);

/// Map a feature to its display color under the given thematic mode.
///
/// Pure and total: unknown or missing attribute values resolve to the
/// mode's fallback color. The output depends on `mode`, so results cached
/// per feature are invalid across a mode change.
pub fn classify(feature: &Feature, mode: ThematicMode) -> ColorRgb {
    match mode {
        ThematicMode::ConstructionDate => {
            construction_date_color(feature.date(attrs::CONSTRUCTION_DATE))
        }
        ThematicMode::CurrentUse => current_use_color(feature.text(attrs::CURRENT_USE)),
    }
}

/// Breakpoints are all January 1 dates, so strict-less-than against the
/// breakpoint date is exactly a strict year comparison.
fn construction_date_color(date: Option<NaiveDate>) -> ColorRgb {
    let Some(date) = date else {
        return DATE_OVERFLOW_COLOR;
    };

    for (year, color) in DATE_BREAKPOINTS {
        if date.year() < year {
            return color;
        }
    }
    DATE_OVERFLOW_COLOR
}

fn current_use_color(code: Option<&str>) -> ColorRgb {
    let Some(code) = code else {
        return OTHER_USE_COLOR;
    };

    USE_CATEGORIES
        .iter()
        .find(|(category, _)| *category == code)
        .map(|(_, color)| *color)
        .unwrap_or(OTHER_USE_COLOR)
}
