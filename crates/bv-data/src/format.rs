//! Tooltip markup for picked features

use crate::feature::{AttributeValue, Feature};

/// Render a feature's attributes as tooltip HTML.
///
/// Attribute order follows the feature's own order so tooltips are stable
/// across hovers. Names and values are escaped; the caller embeds the result
/// verbatim.
pub fn html_for_feature(feature: &Feature) -> String {
    let mut html = String::from("<div class=\"feature-tooltip\">");
    for (name, value) in feature.attributes() {
        html.push_str("<div><strong>");
        html.push_str(&escape(name));
        html.push_str("</strong>&nbsp;");
        html.push_str(&escape(&display_value(value)));
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn display_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Text(text) => text.clone(),
        AttributeValue::Number(number) => format!("{}", number),
        AttributeValue::Date(date) => date.format("%Y-%m-%d").to_string(),
        AttributeValue::Bool(flag) => flag.to_string(),
        AttributeValue::Null => "null".to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::attrs;

    #[test]
    fn renders_attributes_in_order() {
        let feature = Feature::new()
            .with_attribute(attrs::CURRENT_USE, "1_residential")
            .with_attribute(attrs::FLOORS_ABOVE_GROUND, 5.0);

        let html = html_for_feature(&feature);
        assert_eq!(
            html,
            "<div class=\"feature-tooltip\">\
             <div><strong>current_use</strong>&nbsp;1_residential</div>\
             <div><strong>number_floors_above_ground</strong>&nbsp;5</div>\
             </div>"
        );
    }

    #[test]
    fn escapes_markup_in_values() {
        let feature = Feature::new().with_attribute("name", "<b>\"Casa\" & Co</b>");
        let html = html_for_feature(&feature);
        assert!(html.contains("&lt;b&gt;&quot;Casa&quot; &amp; Co&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn empty_feature_renders_an_empty_container() {
        assert_eq!(
            html_for_feature(&Feature::new()),
            "<div class=\"feature-tooltip\"></div>"
        );
    }
}
