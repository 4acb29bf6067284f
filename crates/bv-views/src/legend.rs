//! Legend rows derived from the classification tables

use bv_core::ThematicMode;
use bv_layers::classify::{DATE_BREAKPOINTS, DATE_OVERFLOW_COLOR, OTHER_USE_COLOR, USE_CATEGORIES};
use bv_layers::color::ColorRgb;

/// One legend row: a label and its swatch color
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: ColorRgb,
}

/// Legend for the given mode, in display order.
///
/// Built from the classification tables themselves, so the legend cannot
/// drift from what the classifier actually returns.
pub fn legend_for_mode(mode: ThematicMode) -> Vec<LegendEntry> {
    match mode {
        ThematicMode::ConstructionDate => date_legend(),
        ThematicMode::CurrentUse => use_legend(),
    }
}

fn date_legend() -> Vec<LegendEntry> {
    let mut entries = Vec::with_capacity(DATE_BREAKPOINTS.len() + 1);
    let mut lower: Option<i32> = None;

    for (year, color) in DATE_BREAKPOINTS {
        let label = match lower {
            None => format!("before {year}"),
            Some(lower) => format!("{lower} to {year}"),
        };
        entries.push(LegendEntry { label, color });
        lower = Some(year);
    }

    if let Some(last) = lower {
        entries.push(LegendEntry {
            label: format!("{last} and later"),
            color: DATE_OVERFLOW_COLOR,
        });
    }
    entries
}

fn use_legend() -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = USE_CATEGORIES
        .iter()
        .map(|(code, color)| LegendEntry {
            label: (*code).to_string(),
            color: *color,
        })
        .collect();
    entries.push(LegendEntry {
        label: "other".to_string(),
        color: OTHER_USE_COLOR,
    });
    entries
}
