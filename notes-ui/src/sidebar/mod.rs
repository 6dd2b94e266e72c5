//! Notes sidebar: desktop panel, mobile overlay and delete confirmation

use dioxus::prelude::*;
use notes_types::{Note, NoteId};

use crate::config::SidebarConfig;

pub mod dialog;
pub mod list;
pub mod overlay;
pub mod styles;
pub mod title;

pub use dialog::{apply_row_action, ConfirmDeleteDialog, DeleteConfirmation};
pub use list::{note_rows, NoteList, NoteRow, RowAction, RowStyle};
pub use overlay::{MobileOverlay, OverlayPhase, OverlayTransition};
pub use styles::SIDEBAR_STYLES;
pub use title::derive_title;

/// Both panels render the same `notes`/`current_note_id`, so they never drift apart.
///
/// Notes are never mutated here; creation, selection and deletion are
/// requested through the callbacks.
#[component]
pub fn Sidebar(
    notes: Vec<Note>,
    current_note_id: Option<NoteId>,
    sidebar_open: bool,
    on_set_sidebar_open: Callback<bool>,
    on_select_note: Callback<NoteId>,
    on_new_note: Callback<()>,
    on_delete_note: Callback<NoteId>,
) -> Element {
    let config = try_use_context::<SidebarConfig>().unwrap_or_default();
    let mut confirmation = use_signal(DeleteConfirmation::default);

    let on_row_action = use_callback(move |action: RowAction| {
        if let Some(id) = apply_row_action(&mut confirmation.write(), action) {
            on_select_note.call(id);
        }
    });
    let close_overlay = use_callback(move |_| on_set_sidebar_open.call(false));
    let close_dialog = use_callback(move |_| confirmation.write().close());

    let pending = confirmation.read().clone();
    let title = config.title.clone();
    let empty_label = config.empty_list_label.clone();

    rsx! {
        style { {SIDEBAR_STYLES} }

        ConfirmDeleteDialog {
            is_open: pending.open,
            note_id: pending.note_id.clone(),
            on_close: close_dialog,
            on_delete: on_delete_note,
        }

        MobileOverlay {
            open: sidebar_open,
            transition_ms: config.transition_ms,
            on_close: close_overlay,

            SidebarHeader { title: title.clone(), on_new_note }
            div {
                class: "mobile-overlay__list",
                NoteList {
                    notes: notes.clone(),
                    current_note_id: current_note_id.clone(),
                    empty_label: empty_label.clone(),
                    on_action: on_row_action,
                }
            }
        }

        div {
            class: "sidebar-desktop",
            div {
                class: "sidebar-desktop__scroll",
                SidebarHeader { title: title.clone(), on_new_note }
                NoteList {
                    notes: notes.clone(),
                    current_note_id: current_note_id.clone(),
                    empty_label: empty_label.clone(),
                    on_action: on_row_action,
                }
            }
        }
    }
}

#[component]
fn SidebarHeader(title: String, on_new_note: Callback<()>) -> Element {
    rsx! {
        div {
            class: "sidebar-header",
            h1 { class: "sidebar-header__title", "{title}" }
            button {
                r#type: "button",
                class: "sidebar-header__new",
                title: "New note",
                onclick: move |_| on_new_note.call(()),
                "+"
            }
        }
    }
}
