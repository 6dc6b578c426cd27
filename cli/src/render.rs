//! Plain markdown rendering of search output.

use glossa_search::{Resolved, SessionEvent};

pub(crate) fn event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Cleared => String::new(),
        SessionEvent::Results(resolved) => self::resolved(resolved),
    }
}

pub(crate) fn resolved(resolved: &Resolved) -> String {
    if resolved.is_no_match() {
        return "No matches found.".to_string();
    }

    let mut lines = Vec::new();
    for entry in resolved.entries() {
        lines.push(format!("# {}", entry.title()));
        lines.push(entry.body().to_string());
    }
    lines.join("\n")
}
