use leptos::{ev, html, prelude::*};

const STAGGER_STEP_MS: u64 = 100;

/// Share of the viewport an element's top edge has to cross before it reveals.
const VIEW_THRESHOLD: f64 = 0.9;

/// Entrance delay for the `index`th item of a staggered list.
pub fn stagger_delay_ms(index: usize) -> u64 {
    (index as u64).saturating_mul(STAGGER_STEP_MS)
}

fn is_in_view(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * VIEW_THRESHOLD
}

/// Wraps children in an element that fades in, after its stagger delay, once
/// it has been scrolled into view.
#[component]
pub fn Reveal(
    #[prop(default = 0)] index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {class}")
    };

    let node = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    let check = move || {
        if visible.get_untracked() {
            return;
        }
        let Some(el) = node.get_untracked() else {
            return;
        };
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default();
        if is_in_view(el.get_bounding_client_rect().top(), viewport) {
            set_visible.set(true);
        }
    };

    // above-the-fold items reveal as soon as they mount
    Effect::new(move |_| {
        if node.get().is_some() {
            check();
        }
    });

    let scroll_listener = window_event_listener(ev::scroll, move |_| check());
    on_cleanup(move || scroll_listener.remove());

    view! {
        <div
            node_ref=node
            class=class
            class:in-view=move || visible.get()
            style=format!("animation-delay: {}ms", stagger_delay_ms(index))
        >
            {children()}
        </div>
    }
}
