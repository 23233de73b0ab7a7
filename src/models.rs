//! Frontend Models
//!
//! Data structures matching the list service API.

use serde::{Deserialize, Serialize};

/// Shopping list item as returned by the server.
///
/// `name` is already formatted for display (quantity and unit folded in,
/// e.g. "2 liters milk"). The server owns the collection; `id` is opaque
/// and never constructed client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Status reported by the server in command/mutation responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Warning,
    Error,
    /// Any status string the client does not know about.
    #[serde(other)]
    Other,
}

impl ResponseStatus {
    /// Styling for the voice-command path: warnings keep their own style,
    /// everything that is not success/warning renders as an error.
    pub fn voice_style(self) -> StatusKind {
        match self {
            ResponseStatus::Success => StatusKind::Success,
            ResponseStatus::Warning => StatusKind::Warning,
            _ => StatusKind::Error,
        }
    }

    /// Styling for mutation paths (edit/toggle/delete/clear): only success
    /// is success-styled, everything else is error-styled.
    pub fn mutation_style(self) -> StatusKind {
        match self {
            ResponseStatus::Success => StatusKind::Success,
            _ => StatusKind::Error,
        }
    }
}

/// Minimum response shape for every command/mutation endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub message: String,
}

/// Styling bucket for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Info => "status-message status-info",
            StatusKind::Success => "status-message status-success",
            StatusKind::Warning => "status-message status-warning",
            StatusKind::Error => "status-message status-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_item_ignores_extra_server_fields() {
        let json = r#"{
            "id": "abc123",
            "name": "2 liters milk",
            "note": "for Friday",
            "is_bought": false,
            "quantity": "2",
            "unit": "liters",
            "added_timestamp": 1724390000
        }"#;
        let item: ListItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "abc123");
        assert_eq!(item.name, "2 liters milk");
        assert_eq!(item.note.as_deref(), Some("for Friday"));
    }

    #[test]
    fn list_item_note_is_optional() {
        let item: ListItem = serde_json::from_str(r#"{"id": "x", "name": "milk"}"#).unwrap();
        assert_eq!(item.note, None);
    }

    #[test]
    fn api_response_decodes_known_statuses() {
        let resp: ApiResponse =
            serde_json::from_str(r#"{"status": "success", "message": "Added milk"}"#).unwrap();
        assert_eq!(resp.status, ResponseStatus::Success);
        assert_eq!(resp.message, "Added milk");

        let resp: ApiResponse =
            serde_json::from_str(r#"{"status": "warning", "message": "Already on the list"}"#)
                .unwrap();
        assert_eq!(resp.status, ResponseStatus::Warning);
    }

    #[test]
    fn api_response_unknown_status_maps_to_other() {
        let resp: ApiResponse =
            serde_json::from_str(r#"{"status": "info", "message": "Nothing to do"}"#).unwrap();
        assert_eq!(resp.status, ResponseStatus::Other);
    }

    #[test]
    fn voice_styling_keeps_warning_but_mutation_does_not() {
        assert_eq!(ResponseStatus::Warning.voice_style(), StatusKind::Warning);
        assert_eq!(ResponseStatus::Warning.mutation_style(), StatusKind::Error);

        assert_eq!(ResponseStatus::Success.voice_style(), StatusKind::Success);
        assert_eq!(ResponseStatus::Success.mutation_style(), StatusKind::Success);

        assert_eq!(ResponseStatus::Other.voice_style(), StatusKind::Error);
        assert_eq!(ResponseStatus::Other.mutation_style(), StatusKind::Error);
    }

    #[test]
    fn status_kind_css_classes() {
        assert_eq!(StatusKind::Success.css_class(), "status-message status-success");
        assert_eq!(StatusKind::Error.css_class(), "status-message status-error");
    }
}
