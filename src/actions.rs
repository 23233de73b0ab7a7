//! List Commands
//!
//! Dispatch table for per-item and whole-list actions. Rendering wires
//! buttons to a `ListCommand` value instead of ad-hoc callbacks, so the
//! action surface stays declarative and testable.
//!
//! Every command follows the same shape: call the service, then on any
//! server response set the status line, announce the message and trigger
//! a refresh, in that order and regardless of the reported status. A
//! transport failure announces a fixed fallback message and does not
//! refresh. No retries, no optimistic local updates.

use crate::api::{self, EditItemArgs};
use crate::context::AppContext;
use crate::models::{ApiResponse, StatusKind};
use crate::parser;
use crate::speech;

/// One user-triggered list action, keyed by the server-assigned item id
/// where the action targets a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    ToggleBought {
        item_id: String,
    },
    Delete {
        item_id: String,
    },
    /// Save of an inline edit. `name_input` is the raw edit-field text;
    /// the quantity/unit parser splits it before the request is sent.
    SaveEdit {
        item_id: String,
        name_input: String,
        note: String,
    },
    ClearList,
}

impl ListCommand {
    /// Fixed status text when the server cannot be reached.
    fn transport_error_status(&self) -> &'static str {
        match self {
            ListCommand::ToggleBought { .. } => "Error toggling item status.",
            ListCommand::Delete { .. } => "Error deleting item.",
            ListCommand::SaveEdit { .. } => "Error saving item.",
            ListCommand::ClearList => "Error clearing list.",
        }
    }

    /// Fixed spoken message when the server cannot be reached.
    fn transport_error_announcement(&self) -> &'static str {
        match self {
            ListCommand::ToggleBought { .. } => "Error toggling item status.",
            ListCommand::Delete { .. } => "Error deleting item.",
            ListCommand::SaveEdit { .. } => "Error saving item.",
            ListCommand::ClearList => "Error clearing your list.",
        }
    }
}

/// Run one command against the list service and report the outcome.
pub async fn dispatch(ctx: AppContext, command: ListCommand) {
    let clearing = matches!(command, ListCommand::ClearList);
    if clearing {
        ctx.set_status("Clearing shopping list...", StatusKind::Info);
        ctx.set_busy(true);
    }

    match run(&command).await {
        Ok(response) => {
            ctx.set_status(response.message.clone(), response.status.mutation_style());
            speech::announce(&response.message);
            ctx.reload();
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[API] {:?} failed: {err}", command).into());
            ctx.set_status(command.transport_error_status(), StatusKind::Error);
            speech::announce(command.transport_error_announcement());
        }
    }

    if clearing {
        ctx.set_busy(false);
    }
}

async fn run(command: &ListCommand) -> Result<ApiResponse, String> {
    match command {
        ListCommand::ToggleBought { item_id } => api::toggle_item_bought(item_id).await,
        ListCommand::Delete { item_id } => api::delete_item(item_id).await,
        ListCommand::SaveEdit {
            item_id,
            name_input,
            note,
        } => {
            let parsed = parser::parse(name_input);
            api::edit_item(&EditItemArgs {
                item_id,
                item_name: &parsed.item_name,
                quantity: &parsed.quantity,
                unit: &parsed.unit,
                note,
            })
            .await
        }
        ListCommand::ClearList => api::clear_list().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_edit_request_carries_parsed_fields() {
        // Editing "2 liters milk" to "3 liters milk" must send the split
        // fields, not the display string.
        let parsed = parser::parse("3 liters milk");
        let args = EditItemArgs {
            item_id: "abc123",
            item_name: &parsed.item_name,
            quantity: &parsed.quantity,
            unit: &parsed.unit,
            note: "",
        };
        let body: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&args).unwrap()).unwrap();
        assert_eq!(body["item_name"], "milk");
        assert_eq!(body["quantity"], "3");
        assert_eq!(body["unit"], "liters");
    }

    #[test]
    fn transport_error_messages_are_fixed_per_command() {
        let delete = ListCommand::Delete {
            item_id: "x".to_string(),
        };
        assert_eq!(delete.transport_error_status(), "Error deleting item.");
        assert_eq!(delete.transport_error_announcement(), "Error deleting item.");

        assert_eq!(
            ListCommand::ClearList.transport_error_status(),
            "Error clearing list."
        );
        assert_eq!(
            ListCommand::ClearList.transport_error_announcement(),
            "Error clearing your list."
        );
    }
}
