use leptos::{ev, prelude::*};

/// Window scroll offset, in pixels, past which the bar gets its backdrop.
const SCROLL_THRESHOLD: f64 = 50.0;

pub const SECTION_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

/// (href, label, icon)
pub const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("https://github.com", "GitHub", "/icons/github.svg"),
    ("https://linkedin.com", "LinkedIn", "/icons/linkedin.svg"),
    ("mailto:hello@example.com", "Email", "/icons/mail.svg"),
];

fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[component]
pub fn SocialLinks(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("social-links {class}")>
            {SOCIAL_LINKS
                .iter()
                .map(|&(href, label, icon)| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" title=label>
                            <img src=icon alt=label />
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    // no-op during SSR
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        set_scrolled.set(is_scrolled(offset));
    });
    on_cleanup(move || scroll_listener.remove());

    let links = move |on_mobile: bool| {
        SECTION_LINKS
            .iter()
            .map(move |&(href, label)| {
                view! {
                    <a
                        href=href
                        class="navbar__link"
                        on:click=move |_| {
                            if on_mobile {
                                set_menu_open.set(false);
                            }
                        }
                    >
                        {label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar" class:glass=move || scrolled.get()>
            <div class="navbar__inner">
                <a href="#home" class="navbar__brand gradient-text">"Portfolio"</a>
                <div class="navbar__links">{links(false)}</div>
                <SocialLinks class="navbar__social" />
                <button
                    class="navbar__toggle"
                    aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__mobile glass">
                    {links(true)}
                    <SocialLinks class="navbar__mobile-social" />
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn section_links_target_page_anchors() {
        assert!(SECTION_LINKS.iter().all(|(href, _)| href.starts_with('#')));
    }
}
