//! Host shell: owns the notes store and drives the sidebar through callbacks

use dioxus::prelude::*;
use notes_types::NoteId;

use crate::config::load_sidebar_config;
use crate::sidebar::Sidebar;
use crate::store::NoteStore;

const APP_STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #11111b; color: #cdd6f4; }

.notes-main { display: flex; flex-direction: column; min-height: 100vh; }

.notes-topbar {
    position: sticky;
    top: 0;
    display: flex;
    align-items: center;
    height: 4rem;
    padding: 0 1rem;
    background: #181825;
    border-bottom: 1px solid #313244;
}

.notes-topbar__open {
    background: transparent;
    border: none;
    color: inherit;
    font-size: 1.5rem;
    cursor: pointer;
}

.notes-pane { flex: 1; padding: 1.5rem; }
.notes-pane__body { margin: 0; white-space: pre-wrap; font-family: ui-monospace, monospace; }

.notes-empty { display: flex; flex-direction: column; align-items: center; gap: 1rem; padding-top: 20vh; }
.notes-empty__create {
    padding: 0.75rem 1.5rem;
    background: #a6e3a1;
    color: #1e1e2e;
    border: none;
    border-radius: 0.375rem;
    cursor: pointer;
}

@media (min-width: 768px) {
    .notes-main { padding-left: 16rem; }
    .notes-topbar { display: none; }
}
"#;

#[component]
pub fn NotesApp() -> Element {
    let config = use_context_provider(load_sidebar_config);
    let mut store = use_signal(NoteStore::new);
    let mut sidebar_open = use_signal(|| false);

    use_hook(|| {
        dioxus_logger::tracing::info!("Notes sidebar mounted (title: {})", config.title);
    });

    let placeholder = config.placeholder_body.clone();
    let new_note = use_callback(move |_| {
        store.write().create_note(placeholder.clone());
        sidebar_open.set(false);
    });

    let select_note = use_callback(move |id: NoteId| {
        if let Err(e) = store.write().select(&id) {
            dioxus_logger::tracing::warn!("Ignoring selection: {}", e);
        }
        sidebar_open.set(false);
    });

    let delete_note = use_callback(move |id: NoteId| {
        if let Err(e) = store.write().delete_note(&id) {
            dioxus_logger::tracing::warn!("Ignoring deletion: {}", e);
        }
    });

    let set_sidebar_open = use_callback(move |open: bool| sidebar_open.set(open));

    let snapshot = store.read().clone();
    let current = snapshot.current_note().cloned();

    rsx! {
        style { {APP_STYLES} }

        Sidebar {
            notes: snapshot.notes().to_vec(),
            current_note_id: snapshot.current_id(),
            sidebar_open: sidebar_open(),
            on_set_sidebar_open: set_sidebar_open,
            on_select_note: select_note,
            on_new_note: new_note,
            on_delete_note: delete_note,
        }

        div {
            class: "notes-main",
            div {
                class: "notes-topbar",
                button {
                    r#type: "button",
                    class: "notes-topbar__open",
                    onclick: move |_| set_sidebar_open.call(true),
                    span { class: "sr-only", "Open sidebar" }
                    span { aria_hidden: "true", "☰" }
                }
            }
            main {
                class: "notes-pane",
                if let Some(note) = current {
                    pre { class: "notes-pane__body", "{note.body}" }
                } else {
                    EmptyState { on_new_note: new_note }
                }
            }
        }
    }
}

#[component]
fn EmptyState(on_new_note: Callback<()>) -> Element {
    rsx! {
        div {
            class: "notes-empty",
            h1 { "You have no notes" }
            button {
                r#type: "button",
                class: "notes-empty__create",
                onclick: move |_| on_new_note.call(()),
                "Create one now"
            }
        }
    }
}
