use yew::prelude::*;

use super::{
    icons::{Glyph, Logo, SvgIcon},
    sections::Reveal,
    ThemeContext,
};
use crate::{
    content::{NAV_LINKS, PROFILE, SOCIAL_LINKS},
    reveal::FOOTER_THRESHOLD,
};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<()>,
}

/// Anchor links for every section. Each activation reports through `on_navigate`.
fn nav_anchors(on_navigate: &Callback<()>) -> Html {
    NAV_LINKS
        .iter()
        .map(|link| {
            let on_navigate = on_navigate.clone();
            html! {
                <a
                    key={link.href}
                    href={link.href}
                    class="nav-link"
                    onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(()))}
                >
                    {link.label}
                </a>
            }
        })
        .collect()
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let theme_context = use_context::<ThemeContext>().unwrap_or_default();
    let theme = theme_context.theme;

    let on_theme_click = {
        let toggle = theme_context.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let on_menu_click = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let drawer = props.menu_open.then(|| {
        html! {
            <div id="mobile-drawer" class="mobile-drawer">
                <nav class="mobile-nav" aria-label="Mobile">
                    {nav_anchors(&props.on_navigate)}
                </nav>
            </div>
        }
    });

    html! {
        <header class="site-header">
            <div class="container header-bar">
                <a href="#home" class="logo-link" aria-label="Back to top">
                    <Logo />
                </a>
                <nav class="desktop-nav" aria-label="Primary">
                    {nav_anchors(&props.on_navigate)}
                </nav>
                <div class="header-actions">
                    <button
                        class="icon-button"
                        type="button"
                        aria-label={theme.toggle_label()}
                        aria-pressed={theme.is_dark().to_string()}
                        onclick={on_theme_click}
                    >
                        <SvgIcon glyph={if theme.is_dark() { Glyph::Sun } else { Glyph::Moon }} size={20} />
                    </button>
                    <button
                        class="icon-button menu-toggle"
                        type="button"
                        aria-label={if props.menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={props.menu_open.to_string()}
                        aria-controls="mobile-drawer"
                        onclick={on_menu_click}
                    >
                        <SvgIcon glyph={if props.menu_open { Glyph::Close } else { Glyph::Menu }} />
                    </button>
                </div>
            </div>
            {drawer}
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-social">
                <h3>{"Connect with me"}</h3>
                <Reveal threshold={FOOTER_THRESHOLD} class="social-row stagger">
                    { for SOCIAL_LINKS.iter().enumerate().map(|(index, link)| html! {
                        <a
                            key={link.label}
                            href={link.href}
                            class="social-link"
                            aria-label={link.label}
                            style={format!("--stagger: {index};")}
                        >
                            <SvgIcon glyph={Glyph::Content(link.icon)} size={32} />
                        </a>
                    }) }
                </Reveal>
            </div>
            <div class="footer-legal">
                <div class="container">
                    <p>{PROFILE.copyright}</p>
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollTopProps {
    pub on_click: Callback<()>,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
        <button class="scroll-top" type="button" aria-label="Scroll to top" {onclick}>
            <SvgIcon glyph={Glyph::ArrowUp} />
        </button>
    }
}
