//! Complaint Gallery Component
//!
//! Read-only cards for every complaint submitted this session, oldest first.

use leptos::prelude::*;

use crate::context::use_portal;
use crate::models::Complaint;

/// Gallery footer text, e.g. "1 complaint" or "3 complaints"
fn complaint_count_label(count: usize) -> String {
    match count {
        1 => "1 complaint".to_string(),
        n => format!("{} complaints", n),
    }
}

#[component]
pub fn ComplaintGallery() -> impl IntoView {
    let ctx = use_portal();

    view! {
        <Show when=move || { ctx.complaint_count() > 0 }>
            <section class="complaint-gallery">
                <h2>"Recent Complaints"</h2>
                <div class="complaint-grid">
                    // The list is append-only, so the index is a stable key
                    <For
                        each=move || ctx.complaints().into_iter().enumerate()
                        key=|(index, _)| *index
                        children=move |(_, complaint)| view! { <ComplaintCard complaint=complaint /> }
                    />
                </div>
                <p class="complaint-count">{move || complaint_count_label(ctx.complaint_count())}</p>
            </section>
        </Show>
    }
}

#[component]
fn ComplaintCard(complaint: Complaint) -> impl IntoView {
    let timestamp = complaint.display_timestamp();
    let location = format!("{:.5}, {:.5}", complaint.location.lat, complaint.location.lng);
    let photo = complaint.photo.map(|photo| view! {
        <img class="complaint-photo" src=String::from(photo) alt="Complaint evidence" />
    });

    view! {
        <article class="complaint-card">
            <h3>{complaint.title}</h3>
            <p class="complaint-description">{complaint.description}</p>
            {photo}
            <p class="complaint-location">{location}</p>
            <p class="complaint-time">{timestamp}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label_is_singular_for_one() {
        assert_eq!(complaint_count_label(1), "1 complaint");
    }

    #[test]
    fn test_count_label_is_plural_otherwise() {
        assert_eq!(complaint_count_label(2), "2 complaints");
        assert_eq!(complaint_count_label(12), "12 complaints");
    }
}
