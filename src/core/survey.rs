use crate::core::error::ValidationError;
use crate::core::label;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

const FREQUENCY_LABELS: &[&str] = &[
    "1 – never",
    "2 – less than once per week",
    "3 – once per week",
    "4 – 2–4 times per week",
    "5 – 5–6 times per week",
    "6 – daily",
    "7 – more than once per day",
];

const VEGETABLES_LABELS: &[&str] = &[
    "1 – daily",
    "2 – 5–6 times per week",
    "3 – 2–4 times per week",
    "4 – once per week",
    "5 – less than once per week",
    "6 – rarely",
    "7 – never",
];

const PHYSICAL_ACTIVITY_LABELS: &[&str] = &[
    "1 – 6–7 days",
    "2 – 5 days",
    "3 – 4 days",
    "4 – 3 days",
    "5 – 2 days",
    "6 – 1 day",
    "7 – 0 days",
];

const BREAKFAST_LABELS: &[&str] = &[
    "1 – every day",
    "2 – 4 days",
    "3 – 3 days",
    "4 – 2 days",
    "5 – 1 day",
    "6 – less often",
    "7 – never",
];

const TOOTH_BRUSHING_LABELS: &[&str] = &[
    "1 – twice per day or more",
    "2 – once per day",
    "3 – once per week",
    "4 – less often",
    "5 – never",
];

const FEEL_LOW_LABELS: &[&str] = &[
    "1 – never",
    "2 – rarely",
    "3 – monthly",
    "4 – weekly",
    "5 – several times per week",
    "6 – almost daily",
    "7 – daily",
];

const TALK_FATHER_LABELS: &[&str] = &[
    "1 – very easy",
    "2 – easy",
    "3 – rather easy",
    "4 – rather difficult",
    "5 – difficult",
    "6 – very difficult",
    "7 – not in contact",
];

/// A scored survey field. On every scale 1 is the healthiest answer and the
/// maximum is the worst.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    SoftDrinks,
    Sweets,
    Vegetables,
    PhysicalActivity,
    BreakfastWeekdays,
    ToothBrushing,
    FeelLow,
    TalkFather,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Self::SoftDrinks,
        Self::Sweets,
        Self::Vegetables,
        Self::PhysicalActivity,
        Self::BreakfastWeekdays,
        Self::ToothBrushing,
        Self::FeelLow,
        Self::TalkFather,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::SoftDrinks => "soft_drinks",
            Self::Sweets => "sweets",
            Self::Vegetables => "vegetables",
            Self::PhysicalActivity => "physical_activity",
            Self::BreakfastWeekdays => "breakfast_weekdays",
            Self::ToothBrushing => "tooth_brushing",
            Self::FeelLow => "feel_low",
            Self::TalkFather => "talk_father",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Self::SoftDrinks => "How many times a week does your child drink soft drinks?",
            Self::Sweets => "How many times a week does your child eat sweets?",
            Self::Vegetables => "How many times a week does your child eat vegetables?",
            Self::PhysicalActivity => {
                "On how many days per week is your child physically active for at least 60 minutes?"
            }
            Self::BreakfastWeekdays => {
                "On how many schooldays does your child usually eat breakfast?"
            }
            Self::ToothBrushing => "How often does your child brush their teeth?",
            Self::FeelLow => "How often does your child feel low or sad?",
            Self::TalkFather => {
                "How easy is it for your child to talk to their father about their problems?"
            }
        }
    }

    /// Ordered answer labels for this field, healthiest first.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::SoftDrinks | Self::Sweets => FREQUENCY_LABELS,
            Self::Vegetables => VEGETABLES_LABELS,
            Self::PhysicalActivity => PHYSICAL_ACTIVITY_LABELS,
            Self::BreakfastWeekdays => BREAKFAST_LABELS,
            Self::ToothBrushing => TOOTH_BRUSHING_LABELS,
            Self::FeelLow => FEEL_LOW_LABELS,
            Self::TalkFather => TALK_FATHER_LABELS,
        }
    }

    /// Top of the ordinal range. Derived from the label table so the scale
    /// width is declared in exactly one place.
    pub fn scale_max(self) -> u8 {
        self.labels().len() as u8
    }

    pub fn advice(self) -> &'static str {
        match self {
            Self::SoftDrinks => "offer water or milk instead of soft drinks on most days",
            Self::Sweets => "keep sweets for occasional treats rather than daily snacks",
            Self::Vegetables => "add a portion of vegetables to lunch and dinner",
            Self::PhysicalActivity => {
                "aim for at least 60 minutes of movement on most days; walking and play count"
            }
            Self::BreakfastWeekdays => {
                "prepare a quick breakfast the evening before so school mornings start with food"
            }
            Self::ToothBrushing => "build a brushing routine of twice per day, morning and bedtime",
            Self::FeelLow => {
                "make time to talk about feelings, and seek professional advice if low moods persist"
            }
            Self::TalkFather => {
                "create regular one-on-one moments where problems can come up naturally"
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Boy,
    Girl,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boy => write!(f, "boy"),
            Self::Girl => write!(f, "girl"),
        }
    }
}

/// One submission's answers, already reduced to ordinal values. Built once
/// per evaluation and never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct SurveyRecord {
    pub sex: Option<Sex>,
    pub age: Option<u8>,
    pub soft_drinks: u8,
    pub sweets: u8,
    pub vegetables: u8,
    pub physical_activity: u8,
    pub breakfast_weekdays: u8,
    pub tooth_brushing: u8,
    pub feel_low: u8,
    pub talk_father: u8,
}

impl SurveyRecord {
    pub fn value_of(&self, field: Field) -> u8 {
        match field {
            Field::SoftDrinks => self.soft_drinks,
            Field::Sweets => self.sweets,
            Field::Vegetables => self.vegetables,
            Field::PhysicalActivity => self.physical_activity,
            Field::BreakfastWeekdays => self.breakfast_weekdays,
            Field::ToothBrushing => self.tooth_brushing,
            Field::FeelLow => self.feel_low,
            Field::TalkFather => self.talk_father,
        }
    }

    /// The full label behind this field's value, if the value is in range.
    pub fn label_of(&self, field: Field) -> Option<&'static str> {
        let index = usize::from(self.value_of(field)).checked_sub(1)?;
        field.labels().get(index).copied()
    }
}

/// A single answer as written in the answers file: either the full label
/// text or the bare ordinal value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Value(u8),
    Label(String),
}

impl Answer {
    fn resolve(&self) -> Result<u8> {
        match self {
            Self::Value(value) => Ok(*value),
            Self::Label(text) => Ok(label::extract_number(text)?),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswersFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_drinks: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweets: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetables: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_activity: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast_weekdays: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooth_brushing: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feel_low: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talk_father: Option<Answer>,
}

impl AnswersFile {
    pub fn to_record(&self) -> Result<SurveyRecord> {
        Ok(SurveyRecord {
            sex: self.sex,
            age: self.age,
            soft_drinks: self.required(Field::SoftDrinks)?,
            sweets: self.required(Field::Sweets)?,
            vegetables: self.required(Field::Vegetables)?,
            physical_activity: self.required(Field::PhysicalActivity)?,
            breakfast_weekdays: self.required(Field::BreakfastWeekdays)?,
            tooth_brushing: self.required(Field::ToothBrushing)?,
            feel_low: self.required(Field::FeelLow)?,
            talk_father: self.required(Field::TalkFather)?,
        })
    }

    fn answer(&self, field: Field) -> Option<&Answer> {
        match field {
            Field::SoftDrinks => self.soft_drinks.as_ref(),
            Field::Sweets => self.sweets.as_ref(),
            Field::Vegetables => self.vegetables.as_ref(),
            Field::PhysicalActivity => self.physical_activity.as_ref(),
            Field::BreakfastWeekdays => self.breakfast_weekdays.as_ref(),
            Field::ToothBrushing => self.tooth_brushing.as_ref(),
            Field::FeelLow => self.feel_low.as_ref(),
            Field::TalkFather => self.talk_father.as_ref(),
        }
    }

    fn required(&self, field: Field) -> Result<u8> {
        let answer = self
            .answer(field)
            .ok_or(ValidationError::MissingField { field })?;
        answer
            .resolve()
            .with_context(|| format!("bad answer for {field}"))
    }
}

pub fn load_answers(path: &Path) -> Result<AnswersFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading answers file {}", path.display()))?;
    toml::from_str::<AnswersFile>(&content)
        .with_context(|| format!("failed parsing answers file {}", path.display()))
}

/// Starter answers file with every question at its healthiest label.
pub fn template_answers() -> AnswersFile {
    let healthiest = |field: Field| Some(Answer::Label(field.labels()[0].to_string()));
    AnswersFile {
        sex: Some(Sex::Boy),
        age: Some(12),
        soft_drinks: healthiest(Field::SoftDrinks),
        sweets: healthiest(Field::Sweets),
        vegetables: healthiest(Field::Vegetables),
        physical_activity: healthiest(Field::PhysicalActivity),
        breakfast_weekdays: healthiest(Field::BreakfastWeekdays),
        tooth_brushing: healthiest(Field::ToothBrushing),
        feel_low: healthiest(Field::FeelLow),
        talk_father: healthiest(Field::TalkFather),
    }
}

pub fn write_template(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing answers file: {}",
            path.display()
        );
    }

    let content = toml::to_string_pretty(&template_answers())
        .context("failed to serialize template answers")?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_declares_a_full_label_table() {
        for field in Field::ALL {
            assert_eq!(field.labels().len(), usize::from(field.scale_max()));
            for (idx, label_text) in field.labels().iter().enumerate() {
                let parsed = label::extract_number(label_text).expect("label parses");
                assert_eq!(usize::from(parsed), idx + 1, "ordinal order in {field}");
            }
        }
    }

    #[test]
    fn tooth_brushing_is_the_only_five_point_scale() {
        for field in Field::ALL {
            let expected = if field == Field::ToothBrushing { 5 } else { 7 };
            assert_eq!(field.scale_max(), expected);
        }
    }

    #[test]
    fn resolves_labels_and_bare_values() {
        let answers = AnswersFile {
            soft_drinks: Some(Answer::Label("3 – once per week".to_string())),
            sweets: Some(Answer::Value(2)),
            vegetables: Some(Answer::Label("1 – daily".to_string())),
            physical_activity: Some(Answer::Value(4)),
            breakfast_weekdays: Some(Answer::Value(1)),
            tooth_brushing: Some(Answer::Value(1)),
            feel_low: Some(Answer::Value(2)),
            talk_father: Some(Answer::Value(3)),
            ..AnswersFile::default()
        };

        let record = answers.to_record().expect("record builds");
        assert_eq!(record.soft_drinks, 3);
        assert_eq!(record.sweets, 2);
        assert_eq!(record.vegetables, 1);
        assert_eq!(record.physical_activity, 4);
    }

    #[test]
    fn missing_scored_field_is_rejected() {
        let answers = AnswersFile {
            soft_drinks: Some(Answer::Value(1)),
            ..AnswersFile::default()
        };

        let err = answers.to_record().expect_err("record must not build");
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::MissingField {
                field: Field::Sweets
            })
        );
    }

    #[test]
    fn parses_answers_toml_with_mixed_forms() {
        let input = r#"
sex = "girl"
age = 13
soft_drinks = "3 – once per week"
sweets = 2
vegetables = "1 – daily"
physical_activity = 4
breakfast_weekdays = 1
tooth_brushing = "2 – once per day"
feel_low = 2
talk_father = 3
"#;
        let answers = toml::from_str::<AnswersFile>(input).expect("toml parses");
        let record = answers.to_record().expect("record builds");
        assert_eq!(record.sex, Some(Sex::Girl));
        assert_eq!(record.age, Some(13));
        assert_eq!(record.tooth_brushing, 2);
    }

    #[test]
    fn template_round_trips_to_an_all_minimum_record() {
        let serialized = toml::to_string_pretty(&template_answers()).expect("serializes");
        let parsed = toml::from_str::<AnswersFile>(&serialized).expect("parses back");
        let record = parsed.to_record().expect("record builds");
        for field in Field::ALL {
            assert_eq!(record.value_of(field), 1);
        }
    }

    #[test]
    fn label_of_returns_none_out_of_range() {
        let mut record = template_answers().to_record().expect("record builds");
        assert_eq!(record.label_of(Field::Vegetables), Some("1 – daily"));
        record.tooth_brushing = 6;
        assert_eq!(record.label_of(Field::ToothBrushing), None);
    }
}
