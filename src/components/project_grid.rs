use std::collections::HashSet;

use leptos::prelude::*;

use super::{ProjectCard, Reveal};
use crate::showcase::ShowcaseItem;

/// Pairs each item with its stagger index, keeping the first of any repeated
/// id so the grid's keys stay unique.
fn keyed_items(items: Vec<ShowcaseItem>) -> Vec<(usize, ShowcaseItem)> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id))
        .enumerate()
        .collect()
}

#[component]
pub fn ProjectGrid(items: Vec<ShowcaseItem>) -> impl IntoView {
    let items = keyed_items(items);

    view! {
        <div class="project-grid">
            <For
                each=move || items.clone()
                key=|(_, item)| item.id
                children=|(index, item)| {
                    view! {
                        <Reveal index=index>
                            <ProjectCard item=item />
                        </Reveal>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    view! {
        <p class="project-empty">"No public repositories yet"</p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::fallback_items;

    #[test]
    fn indexes_follow_listing_order() {
        let keyed = keyed_items(fallback_items());

        let order: Vec<_> = keyed.iter().map(|(index, item)| (*index, item.id)).collect();
        let expected: Vec<_> = fallback_items()
            .iter()
            .enumerate()
            .map(|(index, item)| (index, item.id))
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn repeated_ids_render_once() {
        let mut items = fallback_items();
        let mut copy = items[0].clone();
        copy.name = "duplicate".to_string();
        items.insert(1, copy);

        let keyed = keyed_items(items);

        assert_eq!(keyed.len(), fallback_items().len());
        assert_eq!(keyed[0].1.name, fallback_items()[0].name);
        assert_eq!(keyed[1].0, 1);
        assert_eq!(keyed[1].1.id, fallback_items()[1].id);
    }
}
