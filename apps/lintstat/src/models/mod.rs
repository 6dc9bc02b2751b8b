//! Data models for ESLint JSON reports.
//!
//! Only `filePath` and `messages` are required. Every other field is a
//! best-effort lookup that falls back to its default when absent.

use serde::{Deserialize, Deserializer};

/// ESLint severity for warnings.
pub const SEVERITY_WARNING: u8 = 1;
/// ESLint severity for errors.
pub const SEVERITY_ERROR: u8 = 2;

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(transparent)]
/// A parsed report: one entry per linted file, in report order.
pub struct Report {
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
/// Lint messages for a single file.
pub struct FileEntry {
    pub file_path: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
/// A single lint message.
pub struct Message {
    #[serde(default)]
    pub rule_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub line: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub column: usize,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

impl Report {
    /// Append the entries of another report, keeping order.
    pub fn extend(&mut self, other: Report) {
        self.files.extend(other.files);
    }

    /// Total number of messages across all files.
    pub fn message_count(&self) -> usize {
        self.files.iter().map(|f| f.messages.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let r: Report = serde_json::from_str(
            r#"[{"filePath":"a.ts","messages":[{"ruleId":null,"line":3}]}]"#,
        )
        .unwrap();
        assert_eq!(r.files.len(), 1);
        let m = &r.files[0].messages[0];
        assert!(m.rule_id.is_none());
        assert_eq!(m.severity, 0);
        assert_eq!(m.line, 3);
        assert_eq!(m.column, 0);
    }

    #[test]
    fn test_null_numbers_fall_back_to_zero() {
        let r: Report = serde_json::from_str(
            r#"[{"filePath":"a.ts","messages":[
                {"ruleId":"no-explicit-any","severity":1,"line":null,"column":null},
                {"ruleId":"no-explicit-any","severity":null,"line":4,"column":2}
            ]}]"#,
        )
        .unwrap();
        let msgs = &r.files[0].messages;
        assert_eq!(msgs[0].line, 0);
        assert_eq!(msgs[0].severity, 1);
        assert_eq!(msgs[1].severity, 0);
        assert_eq!((msgs[1].line, msgs[1].column), (4, 2));
    }

    #[test]
    fn test_missing_messages_is_rejected() {
        let r = serde_json::from_str::<Report>(r#"[{"filePath":"a.ts"}]"#);
        assert!(r.is_err());
    }
}
