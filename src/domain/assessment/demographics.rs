//! Demographic answers collected on the first step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Highest completed level of education, as offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Education {
    HighSchool,
    SomeCollege,
    Bachelors,
    Masters,
    Doctorate,
    Other,
}

impl Education {
    pub const ALL: [Education; 6] = [
        Education::HighSchool,
        Education::SomeCollege,
        Education::Bachelors,
        Education::Masters,
        Education::Doctorate,
        Education::Other,
    ];

    /// Form value (`high-school`, `some-college`, ...).
    pub fn slug(&self) -> &'static str {
        match self {
            Education::HighSchool => "high-school",
            Education::SomeCollege => "some-college",
            Education::Bachelors => "bachelors",
            Education::Masters => "masters",
            Education::Doctorate => "doctorate",
            Education::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Education::HighSchool => "High School",
            Education::SomeCollege => "Some College",
            Education::Bachelors => "Bachelor's Degree",
            Education::Masters => "Master's Degree",
            Education::Doctorate => "Doctorate",
            Education::Other => "Other",
        }
    }
}

impl FromStr for Education {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Education::ALL
            .iter()
            .find(|e| e.slug() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("education", format!("unknown level '{}'", s))
            })
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Male, Gender::Female, Gender::Other, Gender::PreferNotToSay];

    pub fn slug(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .iter()
            .find(|g| g.slug() == s)
            .copied()
            .ok_or_else(|| ValidationError::invalid_format("gender", format!("unknown value '{}'", s)))
    }
}

/// Addresses one demographic field for a narrow update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemographicField {
    Age,
    Occupation,
    Education,
    Location,
    Gender,
}

impl DemographicField {
    pub fn name(&self) -> &'static str {
        match self {
            DemographicField::Age => "age",
            DemographicField::Occupation => "occupation",
            DemographicField::Education => "education",
            DemographicField::Location => "location",
            DemographicField::Gender => "gender",
        }
    }
}

/// The five demographic answers. Free-text fields hold whatever the form
/// control holds; the enum fields are `None` until chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: String,
    pub occupation: String,
    pub education: Option<Education>,
    pub location: String,
    pub gender: Option<Gender>,
}

impl Demographics {
    /// Sets one field from its form value.
    ///
    /// An empty value clears the field. Enum fields reject unknown slugs and
    /// keep their previous value in that case.
    pub fn set(&mut self, field: DemographicField, value: &str) -> Result<(), ValidationError> {
        match field {
            DemographicField::Age => self.age = value.to_string(),
            DemographicField::Occupation => self.occupation = value.to_string(),
            DemographicField::Location => self.location = value.to_string(),
            DemographicField::Education => {
                self.education = if value.is_empty() { None } else { Some(value.parse()?) };
            }
            DemographicField::Gender => {
                self.gender = if value.is_empty() { None } else { Some(value.parse()?) };
            }
        }
        Ok(())
    }

    /// Returns true when all five fields are filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the fields still empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.age.is_empty() {
            missing.push("age");
        }
        if self.occupation.is_empty() {
            missing.push("occupation");
        }
        if self.education.is_none() {
            missing.push("education");
        }
        if self.location.is_empty() {
            missing.push("location");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        missing
    }

    /// Parses the age the way a number input reports it: leading integer
    /// digits after optional whitespace and sign. `None` when there are none.
    pub fn parsed_age(&self) -> Option<i64> {
        let trimmed = self.age.trim_start();
        let (sign, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse::<i64>().ok().map(|n| sign * n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Demographics {
        let mut d = Demographics::default();
        d.set(DemographicField::Age, "67").unwrap();
        d.set(DemographicField::Occupation, "Teacher").unwrap();
        d.set(DemographicField::Education, "masters").unwrap();
        d.set(DemographicField::Location, "Lisbon, Portugal").unwrap();
        d.set(DemographicField::Gender, "female").unwrap();
        d
    }

    #[test]
    fn default_is_incomplete_with_all_fields_missing() {
        let d = Demographics::default();
        assert!(!d.is_complete());
        assert_eq!(d.missing_fields().len(), 5);
    }

    #[test]
    fn filled_demographics_are_complete() {
        let d = filled();
        assert!(d.is_complete());
        assert_eq!(d.education, Some(Education::Masters));
        assert_eq!(d.gender, Some(Gender::Female));
    }

    #[test]
    fn clearing_a_field_makes_it_missing_again() {
        let mut d = filled();
        d.set(DemographicField::Location, "").unwrap();
        d.set(DemographicField::Education, "").unwrap();
        assert_eq!(d.missing_fields(), vec!["education", "location"]);
    }

    #[test]
    fn unknown_education_is_rejected_and_previous_value_kept() {
        let mut d = filled();
        assert!(d.set(DemographicField::Education, "phd").is_err());
        assert_eq!(d.education, Some(Education::Masters));
    }

    #[test]
    fn education_slugs_round_trip() {
        for e in Education::ALL {
            assert_eq!(e.slug().parse::<Education>().unwrap(), e);
        }
        let json = serde_json::to_string(&Education::HighSchool).unwrap();
        assert_eq!(json, "\"high-school\"");
    }

    #[test]
    fn gender_slugs_round_trip() {
        for g in Gender::ALL {
            assert_eq!(g.slug().parse::<Gender>().unwrap(), g);
        }
    }

    #[test]
    fn parsed_age_reads_leading_integer() {
        let mut d = Demographics::default();
        for (raw, expected) in [
            ("72", Some(72)),
            (" 45 years", Some(45)),
            ("61.9", Some(61)),
            ("-3", Some(-3)),
            ("abc", None),
            ("", None),
        ] {
            d.age = raw.to_string();
            assert_eq!(d.parsed_age(), expected, "input {:?}", raw);
        }
    }
}
