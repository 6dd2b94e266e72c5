//! Sidebar stylesheet. The desktop/mobile split lives here, not in component logic.

pub const SIDEBAR_STYLES: &str = r#"
:root {
    --sidebar-bg: #1e1e2e;
    --sidebar-hover-bg: #313244;
    --sidebar-text: #d1d5db;
    --sidebar-text-strong: #ffffff;
    --accent-bg: #a6e3a1;
    --accent-bg-dark: #74c77a;
    --accent-text: #1e1e2e;
    --danger-bg: #e51f3a;
    --backdrop-bg: rgba(75, 85, 99, 0.75);
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
}

/* ── Desktop panel ── */
.sidebar-desktop {
    display: none;
}

@media (min-width: 768px) {
    .sidebar-desktop {
        position: fixed;
        top: 0;
        bottom: 0;
        display: flex;
        flex-direction: column;
        width: 16rem;
        background: var(--sidebar-bg);
    }

    .mobile-overlay {
        display: none;
    }
}

.sidebar-desktop__scroll {
    display: flex;
    flex: 1;
    flex-direction: column;
    overflow-y: auto;
    padding: 1.25rem 0 1rem;
}

/* ── Header ── */
.sidebar-header {
    display: flex;
    flex-shrink: 0;
    align-items: center;
    justify-content: space-around;
    padding: 0 1rem;
}

.sidebar-header__title {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    color: var(--sidebar-text-strong);
}

.sidebar-header__new {
    padding: 0.25rem 0.5rem;
    background: var(--accent-bg);
    color: var(--accent-text);
    border: none;
    border-radius: 0.375rem;
    cursor: pointer;
    font-size: 1.25rem;
    line-height: 1;
}

.sidebar-header__new:hover {
    background: var(--accent-bg-dark);
}

/* ── Note list ── */
.note-list {
    display: flex;
    flex: 1;
    flex-direction: column;
    gap: 0.25rem;
    margin-top: 1.25rem;
    padding: 0 0.5rem;
}

.note-list__empty {
    padding: 0.5rem;
    font-size: 0.875rem;
    color: var(--sidebar-text);
    opacity: 0.7;
}

.note-row-wrapper {
    width: 100%;
}

.note-row {
    display: flex;
    align-items: center;
    width: 100%;
    padding: 0.5rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
    overflow: hidden;
    box-sizing: border-box;
}

.note-row--selected {
    background: var(--accent-bg);
    color: var(--accent-text);
}

.note-row--neutral {
    color: var(--sidebar-text);
}

.note-row--neutral:hover {
    background: var(--sidebar-hover-bg);
    color: var(--sidebar-text-strong);
}

.note-row__icon {
    flex-shrink: 0;
    width: 1.5rem;
    text-align: center;
}

.note-row__icon--selected { color: var(--accent-text); }
.note-row__icon--neutral  { color: var(--sidebar-text-strong); }
.note-row--neutral:hover .note-row__icon--neutral { color: var(--sidebar-text); }

.note-row__title {
    flex: 1;
    margin: 0 0 0 0.75rem;
    font-weight: 700;
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.note-row__delete {
    padding: 0.125rem;
    background: transparent;
    border: none;
    border-radius: 50%;
    cursor: pointer;
    transition: transform 0.15s ease-out, background 0.15s ease-out, box-shadow 0.15s ease-out;
}

.note-row__delete:hover,
.note-row__delete:focus {
    outline: none;
    transform: translateY(-0.1rem) scale(1.3);
    background: var(--danger-bg);
    box-shadow: 0 1rem 2rem rgba(0, 0, 0, 0.2);
}

.note-row__delete:active {
    transform: translateY(0) scale(1.3);
}

/* ── Mobile overlay ── */
.mobile-overlay {
    position: relative;
    z-index: 40;
}

.mobile-overlay:focus,
.confirm-dialog__backdrop:focus {
    outline: none;
}

.mobile-overlay__backdrop {
    position: fixed;
    inset: 0;
    background: var(--backdrop-bg);
}

.mobile-overlay__frame {
    position: fixed;
    inset: 0;
    z-index: 40;
    display: flex;
}

.mobile-overlay__panel {
    position: relative;
    display: flex;
    flex: 1;
    flex-direction: column;
    width: 100%;
    max-width: 20rem;
    padding: 1.25rem 0 1rem;
    background: var(--sidebar-bg);
}

.mobile-overlay__close-wrap {
    position: absolute;
    top: 0;
    right: 0;
    margin-right: -3rem;
    padding-top: 0.5rem;
}

.mobile-overlay__close {
    display: flex;
    width: 2.5rem;
    height: 2.5rem;
    align-items: center;
    justify-content: center;
    background: transparent;
    border: none;
    border-radius: 50%;
    color: var(--sidebar-text-strong);
    font-size: 1.5rem;
    cursor: pointer;
}

.mobile-overlay__close:hover,
.mobile-overlay__close:focus {
    outline: none;
    box-shadow: inset 0 0 0 2px var(--sidebar-text-strong);
}

.mobile-overlay__spacer {
    width: 3.5rem;
    flex-shrink: 0;
}

.mobile-overlay__list {
    flex: 1;
    height: 0;
    overflow-y: auto;
}

@keyframes overlay-fade-in  { from { opacity: 0; } to { opacity: 1; } }
@keyframes overlay-fade-out { from { opacity: 1; } to { opacity: 0; } }
@keyframes overlay-slide-in  { from { transform: translateX(-100%); } to { transform: translateX(0); } }
@keyframes overlay-slide-out { from { transform: translateX(0); } to { transform: translateX(-100%); } }

.mobile-overlay__backdrop.is-entering,
.mobile-overlay__close-wrap.is-entering { animation: overlay-fade-in 300ms linear both; }
.mobile-overlay__backdrop.is-leaving,
.mobile-overlay__close-wrap.is-leaving  { animation: overlay-fade-out 300ms linear both; }
.mobile-overlay__panel.is-entering { animation: overlay-slide-in 300ms ease-in-out both; }
.mobile-overlay__panel.is-leaving  { animation: overlay-slide-out 300ms ease-in-out both; }

/* ── Confirm dialog ── */
.confirm-dialog__backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--backdrop-bg);
}

.confirm-dialog__panel {
    width: min(90vw, 28rem);
    padding: 1.5rem;
    background: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
}

.confirm-dialog__title {
    margin: 0 0 0.5rem;
    font-size: 1.125rem;
    color: #111827;
}

.confirm-dialog__text {
    margin: 0 0 1.25rem;
    font-size: 0.875rem;
    color: #4b5563;
}

.confirm-dialog__actions {
    display: flex;
    justify-content: flex-end;
    gap: 0.5rem;
}

.confirm-dialog__cancel,
.confirm-dialog__delete {
    padding: 0.5rem 1rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
    cursor: pointer;
}

.confirm-dialog__cancel {
    background: #ffffff;
    border: 1px solid #d1d5db;
    color: #374151;
}

.confirm-dialog__delete {
    background: var(--danger-bg);
    border: none;
    color: #ffffff;
}
"#;
