//! Note rows: view model and the list component shared by both panels

use dioxus::prelude::*;
use notes_types::{Note, NoteId};

use super::title::derive_title;

/// Visual variant of a note row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// The row of the current note
    Selected,
    /// Every other row, with hover affordance
    Neutral,
}

impl RowStyle {
    pub fn for_selection(is_selected: bool) -> Self {
        if is_selected {
            RowStyle::Selected
        } else {
            RowStyle::Neutral
        }
    }

    pub fn row_class(self) -> &'static str {
        match self {
            RowStyle::Selected => "note-row note-row--selected",
            RowStyle::Neutral => "note-row note-row--neutral",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            RowStyle::Selected => "note-row__icon note-row__icon--selected",
            RowStyle::Neutral => "note-row__icon note-row__icon--neutral",
        }
    }
}

/// What a row asks its owner to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Row body activated
    Select(NoteId),
    /// Nested delete trigger activated; never also a selection
    RequestDelete(NoteId),
}

/// Keys that activate a `role="button"` row, as they would a native button
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// Everything one rendered row needs
#[derive(Debug, Clone, PartialEq)]
pub struct NoteRow {
    pub id: NoteId,
    pub title: String,
    pub style: RowStyle,
}

/// Build one row per note, in list order.
///
/// A `current` id that matches no note highlights nothing.
pub fn note_rows(notes: &[Note], current: Option<&NoteId>) -> Vec<NoteRow> {
    notes
        .iter()
        .map(|note| NoteRow {
            id: note.id.clone(),
            title: derive_title(&note.body),
            style: RowStyle::for_selection(current == Some(&note.id)),
        })
        .collect()
}

#[component]
pub fn NoteList(
    notes: Vec<Note>,
    current_note_id: Option<NoteId>,
    empty_label: String,
    on_action: Callback<RowAction>,
) -> Element {
    let rows = note_rows(&notes, current_note_id.as_ref());

    rsx! {
        nav {
            class: "note-list",
            aria_label: "Sidebar",
            if rows.is_empty() {
                div { class: "note-list__empty", "{empty_label}" }
            }
            for row in rows {
                NoteRowItem {
                    key: "{row.id}",
                    row: row.clone(),
                    on_action,
                }
            }
        }
    }
}

#[component]
fn NoteRowItem(row: NoteRow, on_action: Callback<RowAction>) -> Element {
    let select_id = row.id.clone();
    let key_select_id = row.id.clone();
    let delete_id = row.id.clone();
    let title = row.title.clone();

    rsx! {
        div {
            class: "note-row-wrapper",
            title: "{title}",
            div {
                class: row.style.row_class(),
                role: "button",
                tabindex: "0",
                onclick: move |_| on_action.call(RowAction::Select(select_id.clone())),
                onkeydown: move |e| {
                    if is_activation_key(&e.key()) {
                        e.prevent_default();
                        on_action.call(RowAction::Select(key_select_id.clone()));
                    }
                },
                span { class: row.style.icon_class(), aria_hidden: "true", "✎" }
                h4 { class: "note-row__title", "{title}" }
                button {
                    r#type: "button",
                    class: "note-row__delete",
                    title: "Delete note",
                    // Nested in the row: the trigger must never also select the
                    // row, so neither clicks nor keys may reach the row handlers.
                    onclick: move |e| {
                        e.stop_propagation();
                        on_action.call(RowAction::RequestDelete(delete_id.clone()));
                    },
                    onkeydown: move |e| {
                        if is_activation_key(&e.key()) {
                            e.stop_propagation();
                        }
                    },
                    span { class: row.style.icon_class(), aria_hidden: "true", "🗑" }
                }
            }
        }
    }
}
