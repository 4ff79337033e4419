use leptos::prelude::*;

use super::navbar::{SocialLinks, SECTION_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <h3 class="gradient-text">"Portfolio"</h3>
                    <p>
                        "Passionate full-stack developer creating exceptional digital experiences "
                        "with modern technologies and innovative solutions."
                    </p>
                    <SocialLinks class="footer__social" />
                </div>
                <div>
                    <h4>"Quick Links"</h4>
                    <ul class="footer__links">
                        {SECTION_LINKS
                            .iter()
                            .map(|&(href, label)| view! { <li><a href=href>{label}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <address class="footer__contact">
                    <h4>"Contact"</h4>
                    <p>"San Francisco, CA"</p>
                    <p>"+1 (555) 123-4567"</p>
                    <p>"hello@example.com"</p>
                </address>
            </div>
            <div class="footer__bottom">
                <p>"Made with ♥ by Your Name"</p>
                <p>"© 2024 Portfolio. All rights reserved."</p>
            </div>
        </footer>
    }
}
