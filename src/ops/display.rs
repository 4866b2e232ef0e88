//! Display names for people and animals.
//!
//! The result variant follows the input variant: a human always gets a
//! `human_name`, an animal always gets an `animal_name`.

use serde::{Deserialize, Serialize};

use crate::data::model::{Record, Value};
use crate::error::{RecordError, Result};

/// Something that can be named: a person or an animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Subject {
    // Animal first: a record with a `name` is an animal even if it also
    // carries name parts.
    Animal {
        name: String,
    },
    Human {
        #[serde(rename = "firstname")]
        first_name: String,
        #[serde(rename = "lastname")]
        last_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayName {
    Human {
        #[serde(rename = "humanName")]
        human_name: String,
    },
    Animal {
        #[serde(rename = "animalName")]
        animal_name: String,
    },
}

impl Subject {
    /// Read a subject from a record: a `name` field makes an animal (and must
    /// be a string), otherwise both `firstname` and `lastname` must be strings.
    pub fn from_record(record: &Record) -> Result<Self> {
        let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_string);

        if let Some(name) = record.get("name") {
            return match name.as_str() {
                Some(name) => Ok(Subject::Animal {
                    name: name.to_string(),
                }),
                None => Err(RecordError::invalid("name", "a string", name.kind())),
            };
        }
        match (text("firstname"), text("lastname")) {
            (Some(first_name), Some(last_name)) => Ok(Subject::Human {
                first_name,
                last_name,
            }),
            _ => Err(RecordError::invalid(
                "subject",
                "a record with 'name' or 'firstname' and 'lastname'",
                &format!("keys {:?}", record.keys().collect::<Vec<_>>()),
            )),
        }
    }
}

pub fn display_name(subject: &Subject) -> DisplayName {
    match subject {
        Subject::Human {
            first_name,
            last_name,
        } => DisplayName::Human {
            human_name: format!("{first_name} {last_name}"),
        },
        Subject::Animal { name } => DisplayName::Animal {
            animal_name: name.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn human_gets_full_name() {
        let john = Subject::from_record(&record! { "firstname" => "John", "lastname" => "Doe" }).unwrap();
        assert_eq!(
            display_name(&john),
            DisplayName::Human {
                human_name: "John Doe".into()
            }
        );
    }

    #[test]
    fn animal_gets_its_name() {
        let dog = Subject::from_record(&record! { "name" => "Brownie" }).unwrap();
        assert_eq!(
            display_name(&dog),
            DisplayName::Animal {
                animal_name: "Brownie".into()
            }
        );
    }

    #[test]
    fn name_takes_precedence() {
        let rec = record! { "name" => "Rex", "firstname" => "A", "lastname" => "B" };
        assert!(matches!(Subject::from_record(&rec), Ok(Subject::Animal { .. })));
    }

    #[test]
    fn non_string_name_still_means_animal() {
        let rec = record! { "name" => Value::Null, "firstname" => "A", "lastname" => "B" };
        let err = Subject::from_record(&rec).unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidInput { argument: "name", found, .. } if found == "null"
        ));
    }

    #[test]
    fn incomplete_human_is_rejected() {
        let err = Subject::from_record(&record! { "firstname" => "John" }).unwrap_err();
        assert!(matches!(err, RecordError::InvalidInput { argument: "subject", .. }));
    }

    #[test]
    fn serde_shapes_match_records() {
        let subject: Subject = serde_json::from_str(r#"{"firstname":"Ada","lastname":"L"}"#).unwrap();
        let out = serde_json::to_string(&display_name(&subject)).unwrap();
        assert_eq!(out, r#"{"humanName":"Ada L"}"#);
    }
}
