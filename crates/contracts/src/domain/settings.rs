use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Report of an update archive import.
///
/// Sent both on success and, with `error` set, as a 4xx body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub log: Vec<ImportSection>,
}

impl ImportReport {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Log lines produced by one import module (`core`, `inventory`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Vec<ImportLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportLevel {
    Error,
    #[serde(other)]
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportLine {
    #[serde(rename = "type", default = "default_level")]
    pub level: ImportLevel,
    #[serde(default)]
    pub name: String,
    /// Usually a string; some importers report numbers or lists.
    #[serde(default)]
    pub value: Value,
}

fn default_level() -> ImportLevel {
    ImportLevel::Info
}

impl ImportLine {
    pub fn is_error(&self) -> bool {
        self.level == ImportLevel::Error
    }

    pub fn value_text(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// A PGP key row appended to the trusted keys table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyImported {
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_import_report() {
        let report: ImportReport = serde_json::from_str(
            r#"{"error":"Something went wrong!","log":[{"name":"core","value":[{"name":"Archive Error","value":"Not a valid archive","type":"error"}]}]}"#,
        )
        .unwrap();
        assert!(report.failed());
        let line = &report.log[0].value[0];
        assert!(line.is_error());
        assert_eq!(line.value_text(), "Not a valid archive");
    }

    #[test]
    fn unknown_level_is_info_and_numbers_render() {
        let line: ImportLine =
            serde_json::from_str(r#"{"name":"Molecules","value":12,"type":"success"}"#).unwrap();
        assert!(!line.is_error());
        assert_eq!(line.value_text(), "12");
    }

    #[test]
    fn successful_report_has_no_error() {
        let report: ImportReport =
            serde_json::from_str(r#"{"success":"Data successfully imported","log":[]}"#).unwrap();
        assert!(!report.failed());
    }
}
