//! Delete confirmation: pending-delete state and the confirm dialog

use dioxus::prelude::*;
use notes_types::NoteId;

use super::list::RowAction;
use super::overlay::{focus_on_mount, is_dismiss_key};

/// Component-local state behind the confirm dialog.
///
/// Only one request is tracked; a second request replaces the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub open: bool,
    pub note_id: Option<NoteId>,
}

impl DeleteConfirmation {
    pub fn request(&mut self, id: NoteId) {
        self.open = true;
        self.note_id = Some(id);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.note_id = None;
    }

    pub fn pending(&self) -> Option<&NoteId> {
        if self.open {
            self.note_id.as_ref()
        } else {
            None
        }
    }
}

/// Route a row action. Returns the id to select, if any.
///
/// Delete requests only touch the confirmation state; selections leave any
/// pending confirmation as it is.
pub fn apply_row_action(confirm: &mut DeleteConfirmation, action: RowAction) -> Option<NoteId> {
    match action {
        RowAction::Select(id) => Some(id),
        RowAction::RequestDelete(id) => {
            confirm.request(id);
            None
        }
    }
}

#[component]
pub fn ConfirmDeleteDialog(
    is_open: bool,
    note_id: Option<NoteId>,
    on_close: Callback<()>,
    on_delete: Callback<NoteId>,
) -> Element {
    if !is_open {
        return rsx! {};
    }
    let Some(note_id) = note_id else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "confirm-dialog__backdrop",
            role: "dialog",
            aria_modal: "true",
            tabindex: "-1",
            onmounted: move |e| focus_on_mount(e),
            onclick: move |_| on_close.call(()),
            onkeydown: move |e| {
                if is_dismiss_key(&e.key()) {
                    on_close.call(());
                }
            },
            div {
                class: "confirm-dialog__panel",
                onclick: move |e| e.stop_propagation(),
                h3 { class: "confirm-dialog__title", "Delete note" }
                p {
                    class: "confirm-dialog__text",
                    "Are you sure you want to delete this note? This cannot be undone."
                }
                div {
                    class: "confirm-dialog__actions",
                    button {
                        r#type: "button",
                        class: "confirm-dialog__cancel",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "confirm-dialog__delete",
                        onclick: move |_| {
                            on_delete.call(note_id.clone());
                            on_close.call(());
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let confirm = DeleteConfirmation::default();
        assert!(!confirm.open);
        assert_eq!(confirm.pending(), None);
    }

    #[test]
    fn delete_request_opens_without_selecting() {
        let mut confirm = DeleteConfirmation::default();
        let selected = apply_row_action(&mut confirm, RowAction::RequestDelete("x".into()));
        assert_eq!(selected, None);
        assert!(confirm.open);
        assert_eq!(confirm.pending(), Some(&NoteId::from("x")));
    }

    #[test]
    fn row_activation_selects_without_opening_dialog() {
        let mut confirm = DeleteConfirmation::default();
        let selected = apply_row_action(&mut confirm, RowAction::Select("x".into()));
        assert_eq!(selected, Some(NoteId::from("x")));
        assert!(!confirm.open);
    }

    #[test]
    fn last_request_wins() {
        let mut confirm = DeleteConfirmation::default();
        confirm.request("a".into());
        confirm.request("b".into());
        assert_eq!(confirm.pending(), Some(&NoteId::from("b")));
    }

    #[test]
    fn selecting_keeps_pending_request() {
        let mut confirm = DeleteConfirmation::default();
        confirm.request("a".into());
        apply_row_action(&mut confirm, RowAction::Select("b".into()));
        assert_eq!(confirm.pending(), Some(&NoteId::from("a")));
    }

    #[test]
    fn close_resets_flag_and_id() {
        let mut confirm = DeleteConfirmation::default();
        confirm.request("a".into());
        confirm.close();
        assert_eq!(confirm, DeleteConfirmation::default());
    }
}
