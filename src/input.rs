use serde::Deserialize;
use serde_json::Value;

use crate::config::MatchMode;

/// Placeholder label when a tool call carries no file path
pub const UNKNOWN_FILE: &str = "unknown";

/// Input JSON from Claude Code hook system
#[derive(Debug, Deserialize)]
pub struct ToolEvent {
    #[serde(default)]
    pub tool_name: String,
    /// Anything but an object reads as an empty mapping
    #[serde(default)]
    pub tool_input: Value,
    /// Only used for log context
    pub hook_event_name: Option<String>,
    pub session_id: Option<String>,
}

/// Which renderer a tool call is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Edit,
    Write,
    Other,
}

impl ToolKind {
    const EDIT_TOOL: &'static str = "edit_file";
    const WRITE_TOOL: &'static str = "write_file";

    pub fn classify(tool_name: &str, mode: MatchMode) -> Self {
        let matches = |tool: &str| match mode {
            MatchMode::Substring => tool_name.contains(tool),
            // MCP tools arrive as mcp__<server>__<tool>
            MatchMode::Exact => {
                tool_name == tool
                    || tool_name
                        .strip_suffix(tool)
                        .is_some_and(|prefix| prefix.ends_with("__"))
            }
        };

        if matches(Self::EDIT_TOOL) {
            ToolKind::Edit
        } else if matches(Self::WRITE_TOOL) {
            ToolKind::Write
        } else {
            ToolKind::Other
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Edit => "Edit",
            ToolKind::Write => "Write",
            ToolKind::Other => "Other",
        }
    }
}

/// Fields of an `edit_file` call
#[derive(Debug, PartialEq, Eq)]
pub struct EditPayload<'a> {
    pub file: &'a str,
    pub old_string: &'a str,
    pub new_string: &'a str,
}

/// Fields of a `write_file` call
#[derive(Debug, PartialEq, Eq)]
pub struct WritePayload<'a> {
    pub file: &'a str,
    pub content: &'a str,
}

/// Non-string values are treated the same as missing ones.
fn str_field<'a>(input: &'a Value, key: &str) -> Option<&'a str> {
    input.get(key).and_then(|v| v.as_str())
}

impl ToolEvent {
    pub fn kind(&self, mode: MatchMode) -> ToolKind {
        ToolKind::classify(&self.tool_name, mode)
    }

    fn file(&self) -> &str {
        str_field(&self.tool_input, "file").unwrap_or(UNKNOWN_FILE)
    }

    pub fn edit_payload(&self) -> EditPayload<'_> {
        EditPayload {
            file: self.file(),
            old_string: str_field(&self.tool_input, "old_string").unwrap_or_default(),
            new_string: str_field(&self.tool_input, "new_string").unwrap_or_default(),
        }
    }

    pub fn write_payload(&self) -> WritePayload<'_> {
        WritePayload {
            file: self.file(),
            content: str_field(&self.tool_input, "content").unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ToolEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_classify_substring() {
        let mode = MatchMode::Substring;
        assert_eq!(ToolKind::classify("edit_file", mode), ToolKind::Edit);
        assert_eq!(
            ToolKind::classify("mcp__catenary__edit_file", mode),
            ToolKind::Edit
        );
        assert_eq!(
            ToolKind::classify("mcp__catenary__write_file", mode),
            ToolKind::Write
        );
        assert_eq!(
            ToolKind::classify("my_edit_file_helper", mode),
            ToolKind::Edit
        );
        assert_eq!(ToolKind::classify("other_tool", mode), ToolKind::Other);
        assert_eq!(ToolKind::classify("", mode), ToolKind::Other);
    }

    #[test]
    fn test_classify_exact() {
        let mode = MatchMode::Exact;
        assert_eq!(ToolKind::classify("edit_file", mode), ToolKind::Edit);
        assert_eq!(ToolKind::classify("write_file", mode), ToolKind::Write);
        assert_eq!(
            ToolKind::classify("mcp__catenary__edit_file", mode),
            ToolKind::Edit
        );
        // Name merely containing the tool is not a match
        assert_eq!(
            ToolKind::classify("my_edit_file_helper", mode),
            ToolKind::Other
        );
        assert_eq!(ToolKind::classify("rewrite_file", mode), ToolKind::Other);
    }

    #[test]
    fn test_edit_payload_defaults() {
        let event = parse(r#"{"tool_name":"edit_file","tool_input":{}}"#);
        assert_eq!(
            event.edit_payload(),
            EditPayload {
                file: UNKNOWN_FILE,
                old_string: "",
                new_string: "",
            }
        );
    }

    #[test]
    fn test_edit_payload_fields() {
        let event = parse(
            r#"{"tool_name":"edit_file","tool_input":{"file":"x.txt","old_string":"a","new_string":"b"}}"#,
        );
        let payload = event.edit_payload();
        assert_eq!(payload.file, "x.txt");
        assert_eq!(payload.old_string, "a");
        assert_eq!(payload.new_string, "b");
    }

    #[test]
    fn test_non_string_fields_fall_back() {
        let event =
            parse(r#"{"tool_name":"write_file","tool_input":{"file":42,"content":null}}"#);
        assert_eq!(
            event.write_payload(),
            WritePayload {
                file: UNKNOWN_FILE,
                content: "",
            }
        );
    }

    #[test]
    fn test_missing_top_level_fields() {
        let event = parse("{}");
        assert_eq!(event.tool_name, "");
        assert!(event.tool_input.is_null());
        assert_eq!(event.kind(MatchMode::Substring), ToolKind::Other);
    }

    #[test]
    fn test_non_object_tool_input_reads_as_empty() {
        for json in [
            r#"{"tool_name":"other_tool","tool_input":"str"}"#,
            r#"{"tool_name":"other_tool","tool_input":null}"#,
            r#"{"tool_name":"edit_file","tool_input":[1]}"#,
        ] {
            let event = parse(json);
            let edit = event.edit_payload();
            assert_eq!(edit.file, UNKNOWN_FILE);
            assert_eq!(edit.old_string, "");
            assert_eq!(edit.new_string, "");
            assert_eq!(event.write_payload().content, "");
        }
    }
}
