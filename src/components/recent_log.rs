//! Recent Log Component
//!
//! Collapsible dump of the lines the ring logger retained, newest last.

use leptos::prelude::*;
use ring_logger::RingLogger;

/// Rendered lines of the logger's ring, one per line
fn render_recent(logger: &RingLogger) -> String {
    logger
        .recent()
        .iter()
        .map(|line| line.render())
        .collect::<Vec<_>>()
        .join("\n")
}

#[component]
pub fn RecentLog() -> impl IntoView {
    // Absent when another logger was installed first
    let Some(logger) = use_context::<&'static RingLogger>() else {
        return ().into_any();
    };
    let (open, set_open) = signal(false);
    let (text, set_text) = signal(String::new());

    let toggle = move |_| {
        if !open.get_untracked() {
            set_text.set(render_recent(logger));
        }
        set_open.update(|open| *open = !*open);
    };

    view! {
        <section class="recent-log">
            <button type="button" class="recent-log-toggle" on:click=toggle>
                {move || if open.get() { "Hide recent activity" } else { "Show recent activity" }}
            </button>
            <Show when=move || open.get()>
                <pre class="recent-log-lines">{move || text.get()}</pre>
            </Show>
        </section>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Record};

    #[test]
    fn test_render_recent_lists_retained_lines_in_order() {
        let logger = RingLogger::new(LevelFilter::Info, 2);
        for message in ["[Main] Starting", "[Portal] Complaint 'A'", "[Portal] Complaint 'B'"] {
            logger.log(
                &Record::builder()
                    .level(Level::Info)
                    .target("portal")
                    .args(format_args!("{}", message))
                    .build(),
            );
        }

        let text = render_recent(&logger);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("portal [Portal] Complaint 'A'"));
        assert!(lines[1].ends_with("portal [Portal] Complaint 'B'"));
    }

    #[test]
    fn test_render_recent_empty_ring() {
        let logger = RingLogger::new(LevelFilter::Info, 5);
        assert_eq!(render_recent(&logger), "");
    }
}
