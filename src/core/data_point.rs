use serde::{Deserialize, Serialize};

use super::Attribute;

/// One survey row: a state and its six numeric attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub healthcare: f64,
    pub smokes: f64,
    pub obesity: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(state: impl Into<String>, abbr: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            abbr: abbr.into(),
            poverty: 0.0,
            age: 0.0,
            income: 0.0,
            healthcare: 0.0,
            smokes: 0.0,
            obesity: 0.0,
        }
    }

    #[must_use]
    pub fn with_value(mut self, attribute: Attribute, value: f64) -> Self {
        *self.value_mut(attribute) = value;
        self
    }

    #[must_use]
    pub fn value(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Poverty => self.poverty,
            Attribute::Age => self.age,
            Attribute::Income => self.income,
            Attribute::Healthcare => self.healthcare,
            Attribute::Smokes => self.smokes,
            Attribute::Obesity => self.obesity,
        }
    }

    fn value_mut(&mut self, attribute: Attribute) -> &mut f64 {
        match attribute {
            Attribute::Poverty => &mut self.poverty,
            Attribute::Age => &mut self.age,
            Attribute::Income => &mut self.income,
            Attribute::Healthcare => &mut self.healthcare,
            Attribute::Smokes => &mut self.smokes,
            Attribute::Obesity => &mut self.obesity,
        }
    }
}
