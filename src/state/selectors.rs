//! Enumerated choices offered by the detailed measurement form

use super::forms::{title_case, FieldDefinition};
use serde::{Deserialize, Serialize};

const KANDORA_FIELDS: [FieldDefinition; 13] = [
    FieldDefinition::required("Neck"),
    FieldDefinition::required("Shoulder"),
    FieldDefinition::required("Chest"),
    FieldDefinition::required("Front Cross"),
    FieldDefinition::required("Waist"),
    FieldDefinition::required("Sleeve Left"),
    FieldDefinition::required("Sleeve Right"),
    FieldDefinition::required("Arm Hole"),
    FieldDefinition::required("Bicep"),
    FieldDefinition::required("Wrist"),
    FieldDefinition::required("Base Width"),
    FieldDefinition::required("Border"),
    FieldDefinition::required("Length"),
];

const BODY_FIELDS: [FieldDefinition; 7] = [
    FieldDefinition::required("Neck"),
    FieldDefinition::required("Shoulder"),
    FieldDefinition::required("Chest"),
    FieldDefinition::required("Waist"),
    FieldDefinition::required("Sleeve"),
    FieldDefinition::required("Wrist"),
    FieldDefinition::required("Length"),
];

/// Garment being measured; selects the field set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    #[default]
    Kandora,
    Body,
}

impl GarmentType {
    pub fn next(&self) -> Self {
        match self {
            Self::Kandora => Self::Body,
            Self::Body => Self::Kandora,
        }
    }

    /// Short tab label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kandora => "Kandora",
            Self::Body => "Body",
        }
    }

    /// Value recorded under `MeasurementType`
    pub fn record_label(&self) -> &'static str {
        match self {
            Self::Kandora => "Kandora Measurement",
            Self::Body => "Body Measurement",
        }
    }

    /// Fields captured for this garment, in display order
    pub fn fields(&self) -> &'static [FieldDefinition] {
        match self {
            Self::Kandora => &KANDORA_FIELDS,
            Self::Body => &BODY_FIELDS,
        }
    }
}

/// How loosely the garment is cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fitting {
    Slim,
    #[default]
    Regular,
    Loose,
}

impl Fitting {
    pub const ALL: [Fitting; 3] = [Self::Regular, Self::Slim, Self::Loose];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Slim => "slim",
            Self::Regular => "regular",
            Self::Loose => "loose",
        }
    }

    /// "slim" -> "Slim Fit"
    pub fn label(&self) -> String {
        format!("{} Fit", title_case(self.code()))
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self, true)
    }

    pub fn prev(&self) -> Self {
        cycle(&Self::ALL, *self, false)
    }
}

/// Regional sizing convention used for neck and length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionalStyle {
    #[default]
    Arabic,
    Kuwaiti,
}

impl RegionalStyle {
    pub fn code(&self) -> char {
        match self {
            Self::Arabic => 'A',
            Self::Kuwaiti => 'K',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Arabic => "Arabic",
            Self::Kuwaiti => "Kuwaiti",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Arabic => Self::Kuwaiti,
            Self::Kuwaiti => Self::Arabic,
        }
    }
}

/// Shoulder slope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShoulderLine {
    #[default]
    Regular,
    Sloping,
    Square,
}

impl ShoulderLine {
    pub const ALL: [ShoulderLine; 3] = [Self::Regular, Self::Sloping, Self::Square];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Sloping => "sloping",
            Self::Square => "square",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.code())
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self, true)
    }

    pub fn prev(&self) -> Self {
        cycle(&Self::ALL, *self, false)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    all[next]
}
