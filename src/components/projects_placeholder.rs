use leptos::prelude::*;

#[component]
pub fn ProjectsPlaceholder() -> impl IntoView {
    view! {
        <div class="projects-placeholder" role="status">
            <div class="spinner" aria-hidden="true"></div>
            <p class="placeholder-text">"Loading projects..."</p>
        </div>
    }
}

/// Advisory shown when the cards come from the fallback set.
#[component]
pub fn FallbackNotice() -> impl IntoView {
    view! {
        <div class="fallback-notice glass" role="note">
            <p class="fallback-notice__title">
                "⚠️ Using demo projects (GitHub API temporarily unavailable)"
            </p>
            <p class="fallback-notice__hint">
                "Set FOLIO_SHOWCASE__OWNER to list your own repositories"
            </p>
        </div>
    }
}
