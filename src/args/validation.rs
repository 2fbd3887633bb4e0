use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    // split by semi-colon
    let files = file.split(';');
    for file in files {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json in the picks format
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Validate the picks json format
/// format we expect is this:
/// [{ "user_id": "abc", "display_name": "Name", "picks": {
///     "<tournament slug>": ["Golfer One", "Golfer Two", ...], ... } }]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(elements) = json.as_array() else {
        return Err("The json file is not in the correct format. Expected an array.".to_string());
    };

    let expected_keys = ["user_id", "display_name", "picks"];
    for element in elements {
        let Some(obj) = element.as_object() else {
            return Err(
                "The json file is not in the correct format. Expected an array of objects."
                    .to_string(),
            );
        };
        for key in obj.keys() {
            if !expected_keys.contains(&key.as_str()) {
                return Err(format!(
                    "The json file is not in the correct format. Expected keys: {expected_keys:?}"
                ));
            }
        }
        if !element["user_id"].is_string() {
            return Err(
                "The json key user_id is not in the correct format. Expected a string."
                    .to_string(),
            );
        }
        if !element["display_name"].is_string() {
            return Err(
                "The json key display_name is not in the correct format. Expected a string."
                    .to_string(),
            );
        }

        let picks = &element["picks"];
        if picks.is_null() {
            continue;
        }
        let Some(picks) = picks.as_object() else {
            return Err(
                "The json key picks is not in the correct format. Expected an object keyed by tournament."
                    .to_string(),
            );
        };
        for (slug, names) in picks {
            let all_strings = names
                .as_array()
                .is_some_and(|names| names.iter().all(Value::is_string));
            if !all_strings {
                return Err(format!(
                    "The picks for {slug} are not in the correct format. Expected an array of golfer names."
                ));
            }
        }
    }

    Ok(())
}
