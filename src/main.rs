mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value as JsonValue};

use cli::{Cli, Command};
use rusty_records::data::loader::{load_json_value, FileSource, RecordSource};
use rusty_records::data::{Record, Value};
use rusty_records::ops;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let records = FileSource::new(&cli.input).fetch()?;
    let output = execute(&cli.command, &records)?;

    let text = if cli.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{text}");
    Ok(())
}

fn execute(command: &Command, records: &[Record]) -> Result<JsonValue> {
    let output = match command {
        Command::RemoveKeys { keys } => {
            let remover = ops::KeyRemover::new(keys);
            JsonValue::Array(records.iter().map(|r| remover.apply(r).to_json()).collect())
        }
        Command::GroupBy { field } => {
            let groups = ops::group_by(records, field)?;
            // JSON object keys are strings; the group value is kept alongside.
            JsonValue::Array(
                groups
                    .into_iter()
                    .map(|(key, members)| {
                        json!({
                            "key": JsonValue::from(key),
                            "records": members.iter().map(Record::to_json).collect::<Vec<_>>(),
                        })
                    })
                    .collect(),
            )
        }
        Command::Merge { patch } => {
            let patch_val = load_json_value(patch)?;
            let merged = records
                .iter()
                .map(|r| ops::deep_merge_value(&Value::from(r.clone()), &patch_val).map(|m| m.to_json()))
                .collect::<rusty_records::Result<Vec<_>>>()
                .context("merging patch")?;
            JsonValue::Array(merged)
        }
        Command::Get { path } => {
            let values = records
                .iter()
                .map(|r| {
                    let root = Value::from(r.clone());
                    ops::get_deep_value(&root, path)
                        .map(|found| found.cloned().map(JsonValue::from).unwrap_or(JsonValue::Null))
                })
                .collect::<rusty_records::Result<Vec<_>>>()?;
            JsonValue::Array(values)
        }
        Command::Highest => {
            let rows = records
                .iter()
                .map(|r| {
                    ops::key_with_highest_value(r).map(|best| match best {
                        Some((key, value)) => json!({ "key": key, "value": value }),
                        None => JsonValue::Null,
                    })
                })
                .collect::<rusty_records::Result<Vec<_>>>()?;
            JsonValue::Array(rows)
        }
        Command::DisplayName => {
            let names = records
                .iter()
                .map(|r| -> Result<JsonValue> {
                    let subject = ops::Subject::from_record(r)?;
                    Ok(serde_json::to_value(ops::display_name(&subject))?)
                })
                .collect::<Result<Vec<_>>>()?;
            JsonValue::Array(names)
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_records::record;

    fn users() -> Vec<Record> {
        vec![
            record! { "name" => "John", "age" => 20 },
            record! { "name" => "Dave", "age" => 30 },
        ]
    }

    #[test]
    fn cli_parses_comma_separated_keys() {
        let cli = Cli::try_parse_from(["rusty-records", "users.json", "remove-keys", "--keys", "a,b"]).unwrap();
        match cli.command {
            Command::RemoveKeys { keys } => assert_eq!(keys, ["a", "b"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn group_by_emits_key_and_members() {
        let out = execute(&Command::GroupBy { field: "age".into() }, &users()).unwrap();
        assert_eq!(out[0]["key"], json!(20));
        assert_eq!(out[1]["records"][0]["name"], json!("Dave"));
    }

    #[test]
    fn get_reports_missing_as_null() {
        let cmd = Command::Get {
            path: vec!["nickname".into()],
        };
        assert_eq!(execute(&cmd, &users()).unwrap(), json!([null, null]));
    }

    #[test]
    fn highest_fails_on_text_values() {
        assert!(execute(&Command::Highest, &users()).is_err());
    }
}
