//! Feature records received from the data source

use chrono::NaiveDate;
use indexmap::IndexMap;

/// Date format the tile service emits for date-valued attributes
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Well-known attribute names on the buildings tileset
pub mod attrs {
    pub const CONSTRUCTION_DATE: &str = "construction_date";
    pub const CURRENT_USE: &str = "current_use";
    pub const FLOORS_ABOVE_GROUND: &str = "number_floors_above_ground";
}

/// Scalar attribute value attached to a feature
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
    Null,
}

impl AttributeValue {
    /// Interpret the value as a calendar date.
    ///
    /// Text values are parsed as `YYYY-MM-DD`, the format the tile service
    /// emits; anything else is not a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            AttributeValue::Date(date) => Some(*date),
            AttributeValue::Text(text) => NaiveDate::parse_from_str(text, DATE_FORMAT).ok(),
            _ => None,
        }
    }

    /// Interpret the value as a number. Numeric text coerces.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(value) => Some(*value),
            AttributeValue::Text(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Interpret the value as text. No coercion of other scalars.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value as f64)
    }
}

impl From<NaiveDate> for AttributeValue {
    fn from(value: NaiveDate) -> Self {
        AttributeValue::Date(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

/// Opaque handle to geometry owned by the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub u64);

/// An entity received from the data source: named attributes plus an opaque
/// geometry reference. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    attributes: IndexMap<String, AttributeValue>,
    geometry: Option<GeometryHandle>,
}

impl Feature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an attribute (builder style)
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Attach the geometry handle (builder style)
    pub fn with_geometry(mut self, geometry: GeometryHandle) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Raw attribute lookup
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Attribute as a date, if present and date-like
    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.attribute(name).and_then(AttributeValue::as_date)
    }

    /// Attribute as a number, if present and numeric
    pub fn number(&self, name: &str) -> Option<f64> {
        self.attribute(name).and_then(AttributeValue::as_number)
    }

    /// Attribute as text, if present and textual
    pub fn text(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(AttributeValue::as_text)
    }

    pub fn geometry(&self) -> Option<GeometryHandle> {
        self.geometry
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_dates_coerce() {
        let feature = Feature::new().with_attribute(attrs::CONSTRUCTION_DATE, "1987-06-15");
        let date = feature.date(attrs::CONSTRUCTION_DATE).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1987, 6, 15).unwrap());
    }

    #[test]
    fn malformed_dates_do_not_coerce() {
        let feature = Feature::new().with_attribute(attrs::CONSTRUCTION_DATE, "circa 1987");
        assert_eq!(feature.date(attrs::CONSTRUCTION_DATE), None);
    }

    #[test]
    fn numeric_text_coerces() {
        let feature = Feature::new().with_attribute(attrs::FLOORS_ABOVE_GROUND, "4");
        assert_eq!(feature.number(attrs::FLOORS_ABOVE_GROUND), Some(4.0));
    }

    #[test]
    fn non_numeric_values_are_not_numbers() {
        let feature = Feature::new()
            .with_attribute("a", "four")
            .with_attribute("b", true);
        assert_eq!(feature.number("a"), None);
        assert_eq!(feature.number("b"), None);
        assert_eq!(feature.number("missing"), None);
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let feature = Feature::new()
            .with_attribute("current_use", "1_residential")
            .with_attribute("construction_date", "1960-01-01")
            .with_attribute("area", 120.5);

        let names: Vec<&str> = feature.attributes().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["current_use", "construction_date", "area"]);
    }
}
