//! Editable component parameters.
//!
//! A [`Property`] pairs a value with the kind of editing it allows: free
//! text, a choice from a fixed list, a number, or a pair of numbers such as
//! an anchor point.

use lumen_core::{DrawError, Point, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Text(String),
    Int(i32),
    IntPair(i32, i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PropertyMode {
    #[default]
    Literal,
    Scrollable { options: Vec<String> },
    Numeric,
    NumericPair,
}

/// Deserialized values pass through [`Property::new`], so a stored layout
/// cannot hold a value its mode would reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PropertyRepr")]
pub struct Property {
    value: PropertyValue,
    mode: PropertyMode,
}

#[derive(Deserialize)]
struct PropertyRepr {
    value: PropertyValue,
    mode: PropertyMode,
}

impl TryFrom<PropertyRepr> for Property {
    type Error = DrawError;

    fn try_from(repr: PropertyRepr) -> Result<Self> {
        Self::new(repr.value, repr.mode)
    }
}

impl Property {
    pub fn new(value: PropertyValue, mode: PropertyMode) -> Result<Self> {
        match (&mode, &value) {
            (PropertyMode::Literal, _) => {}
            (PropertyMode::Scrollable { options }, PropertyValue::Text(text)) => {
                if !options.contains(text) {
                    return Err(DrawError::InvalidProperty(format!(
                        "{text:?} is not one of {options:?}"
                    )));
                }
            }
            (PropertyMode::Numeric, PropertyValue::Int(_)) => {}
            (PropertyMode::NumericPair, PropertyValue::IntPair(..)) => {}
            (mode, value) => {
                return Err(DrawError::InvalidProperty(format!(
                    "{value:?} cannot be edited as {mode:?}"
                )));
            }
        }
        Ok(Self { value, mode })
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            value: PropertyValue::Text(text.into()),
            mode: PropertyMode::Literal,
        }
    }

    pub fn numeric(value: i32) -> Self {
        Self {
            value: PropertyValue::Int(value),
            mode: PropertyMode::Numeric,
        }
    }

    pub fn point(point: Point) -> Self {
        Self {
            value: PropertyValue::IntPair(point.x, point.y),
            mode: PropertyMode::NumericPair,
        }
    }

    pub fn scrollable(value: impl Into<String>, options: Vec<String>) -> Result<Self> {
        Self::new(PropertyValue::Text(value.into()), PropertyMode::Scrollable { options })
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn mode(&self) -> &PropertyMode {
        &self.mode
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self.value {
            PropertyValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<Point> {
        match self.value {
            PropertyValue::IntPair(x, y) => Some(Point::new(x, y)),
            _ => None,
        }
    }

    /// Increment a numeric value by `dx`, or a pair by `(dx, dy)`.
    pub fn nudge(&mut self, dx: i32, dy: i32) -> Result<()> {
        match (&self.mode, &mut self.value) {
            (PropertyMode::Numeric, PropertyValue::Int(v)) => *v += dx,
            (PropertyMode::NumericPair, PropertyValue::IntPair(x, y)) => {
                *x += dx;
                *y += dy;
            }
            (mode, _) => {
                return Err(DrawError::InvalidProperty(format!(
                    "cannot nudge a {mode:?} property"
                )));
            }
        }
        Ok(())
    }

    /// Move `step` places through the options list, wrapping at either end.
    pub fn cycle(&mut self, step: i32) -> Result<()> {
        let PropertyMode::Scrollable { options } = &self.mode else {
            return Err(DrawError::InvalidProperty(format!(
                "cannot cycle a {:?} property",
                self.mode
            )));
        };
        let current = match &self.value {
            PropertyValue::Text(text) => options.iter().position(|o| o == text).unwrap_or(0),
            _ => 0,
        };
        if options.is_empty() {
            return Err(DrawError::InvalidProperty("no options to cycle through".into()));
        }
        let len = options.len() as i64;
        let next = (current as i64 + step as i64).rem_euclid(len) as usize;
        self.value = PropertyValue::Text(options[next].clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes() -> Vec<String> {
        ["once", "loop", "bounce"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn scrollable_requires_value_in_options() {
        assert!(Property::scrollable("loop", modes()).is_ok());
        assert!(Property::scrollable("spin", modes()).is_err());
        assert!(Property::scrollable("loop", vec![]).is_err());
    }

    #[test]
    fn numeric_mode_rejects_text() {
        let err =
            Property::new(PropertyValue::Text("3".into()), PropertyMode::Numeric).unwrap_err();
        assert!(matches!(err, DrawError::InvalidProperty(_)));
    }

    #[test]
    fn cycle_wraps_both_ways() {
        let mut p = Property::scrollable("bounce", modes()).unwrap();
        p.cycle(1).unwrap();
        assert_eq!(p.as_text(), Some("once"));
        p.cycle(-2).unwrap();
        assert_eq!(p.as_text(), Some("loop"));
    }

    #[test]
    fn deserializing_validates_the_value() {
        let ok: Property = toml::from_str(
            r#"
            value = { type = "text", value = "loop" }
            mode = { mode = "scrollable", options = ["once", "loop"] }
            "#,
        )
        .unwrap();
        assert_eq!(ok.as_text(), Some("loop"));

        let empty = toml::from_str::<Property>(
            r#"
            value = { type = "text", value = "loop" }
            mode = { mode = "scrollable", options = [] }
            "#,
        );
        assert!(empty.is_err());

        let mismatched = toml::from_str::<Property>(
            r#"
            value = { type = "text", value = "3" }
            mode = { mode = "numeric" }
            "#,
        );
        assert!(mismatched.is_err());
    }

    #[test]
    fn cycle_rejects_an_empty_list() {
        let mut p = Property {
            value: PropertyValue::Text("loop".into()),
            mode: PropertyMode::Scrollable { options: vec![] },
        };
        assert!(matches!(p.cycle(1), Err(DrawError::InvalidProperty(_))));
        assert_eq!(p.as_text(), Some("loop"));
    }

    #[test]
    fn nudge_moves_points_and_numbers() {
        let mut anchor = Property::point(Point::new(3, 4));
        anchor.nudge(-1, 2).unwrap();
        assert_eq!(anchor.as_point(), Some(Point::new(2, 6)));

        let mut weight = Property::numeric(1);
        weight.nudge(2, 99).unwrap();
        assert_eq!(weight.as_int(), Some(3));

        assert!(Property::literal("hello").nudge(1, 1).is_err());
        assert!(Property::numeric(1).cycle(1).is_err());
    }
}
