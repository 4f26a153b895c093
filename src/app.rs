//! Complaint Portal App
//!
//! Root component: header, complaint form and the gallery of submissions.

use leptos::prelude::*;
use reactive_stores::Store;
use ring_logger::RingLogger;

use crate::components::{ComplaintForm, ComplaintGallery, RecentLog};
use crate::config::AppConfig;
use crate::context::PortalContext;
use crate::store::PortalState;

#[component]
pub fn App(config: AppConfig, logger: Option<&'static RingLogger>) -> impl IntoView {
    let store = Store::new(PortalState::new(config.map.default_center));

    // Provide context to all children
    provide_context(PortalContext::new(store, config.reset_delay_ms));
    provide_context(config);
    if let Some(logger) = logger {
        provide_context(logger);
    }

    view! {
        <div class="portal-layout">
            <header class="portal-header">
                <div class="portal-header-inner">
                    <span class="portal-logo">"⚠"</span>
                    <h1>"Complaint Portal"</h1>
                </div>
            </header>

            <main class="portal-main">
                <div class="form-card">
                    <ComplaintForm />
                </div>
                <ComplaintGallery />
                <RecentLog />
            </main>
        </div>
    }
}
