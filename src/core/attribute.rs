use std::fmt;

use serde::{Deserialize, Serialize};

/// Which chart axis an attribute or label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// One of the six numeric survey fields a viewer can plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Poverty,
    Age,
    Income,
    Healthcare,
    Smokes,
    Obesity,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Poverty,
        Attribute::Age,
        Attribute::Income,
        Attribute::Healthcare,
        Attribute::Smokes,
        Attribute::Obesity,
    ];

    /// Column/value key, also used as the clickable label's value.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Poverty => "poverty",
            Self::Age => "age",
            Self::Income => "income",
            Self::Healthcare => "healthcare",
            Self::Smokes => "smokes",
            Self::Obesity => "obesity",
        }
    }

    /// Human-readable axis label text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poverty => "In Poverty (%)",
            Self::Age => "Age (Median)",
            Self::Income => "Household Income (Median)",
            Self::Healthcare => "Lacks Healthcare (%)",
            Self::Smokes => "Smokes (%)",
            Self::Obesity => "Obesity (%)",
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Poverty | Self::Age | Self::Income => Axis::X,
            Self::Healthcare | Self::Smokes | Self::Obesity => Axis::Y,
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attribute| attribute.key() == key)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Attribute bound to the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAttribute {
    #[default]
    Poverty,
    Age,
    Income,
}

impl XAttribute {
    /// Label order top-to-bottom under the plot.
    pub const ALL: [XAttribute; 3] = [XAttribute::Poverty, XAttribute::Age, XAttribute::Income];

    #[must_use]
    pub const fn attribute(self) -> Attribute {
        match self {
            Self::Poverty => Attribute::Poverty,
            Self::Age => Attribute::Age,
            Self::Income => Attribute::Income,
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|x| x.attribute().key() == key)
    }
}

impl From<XAttribute> for Attribute {
    fn from(value: XAttribute) -> Self {
        value.attribute()
    }
}

/// Attribute bound to the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YAttribute {
    #[default]
    Healthcare,
    Smokes,
    Obesity,
}

impl YAttribute {
    /// Label order from the plot outwards.
    pub const ALL: [YAttribute; 3] = [
        YAttribute::Healthcare,
        YAttribute::Smokes,
        YAttribute::Obesity,
    ];

    #[must_use]
    pub const fn attribute(self) -> Attribute {
        match self {
            Self::Healthcare => Attribute::Healthcare,
            Self::Smokes => Attribute::Smokes,
            Self::Obesity => Attribute::Obesity,
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|y| y.attribute().key() == key)
    }
}

impl From<YAttribute> for Attribute {
    fn from(value: YAttribute) -> Self {
        value.attribute()
    }
}
