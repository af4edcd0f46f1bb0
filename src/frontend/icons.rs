use yew::prelude::*;

use crate::content::Icon;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Content(Icon),
    Sun,
    Moon,
    Menu,
    Close,
    ArrowUp,
    Check,
}

fn paths(glyph: Glyph) -> Html {
    match glyph {
        Glyph::Content(Icon::Code) => html! {
            <>
                <polyline points="16 18 22 12 16 6" />
                <polyline points="8 6 2 12 8 18" />
            </>
        },
        Glyph::Content(Icon::Server) => html! {
            <>
                <rect width="20" height="8" x="2" y="2" rx="2" ry="2" />
                <rect width="20" height="8" x="2" y="14" rx="2" ry="2" />
                <line x1="6" x2="6.01" y1="6" y2="6" />
                <line x1="6" x2="6.01" y1="18" y2="18" />
            </>
        },
        Glyph::Content(Icon::Briefcase) => html! {
            <>
                <rect width="20" height="14" x="2" y="7" rx="2" ry="2" />
                <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" />
            </>
        },
        Glyph::Content(Icon::Bot) => html! {
            <>
                <path d="M12 8V4H8" />
                <rect width="16" height="12" x="4" y="8" rx="2" />
                <path d="M2 14h2" />
                <path d="M20 14h2" />
                <path d="M15 13v2" />
                <path d="M9 13v2" />
            </>
        },
        Glyph::Content(Icon::Smartphone) => html! {
            <>
                <rect width="14" height="20" x="5" y="2" rx="2" ry="2" />
                <path d="M12 18h.01" />
            </>
        },
        Glyph::Content(Icon::GraduationCap) => html! {
            <>
                <path d="M22 10v6M2 10l10-5 10 5-10 5z" />
                <path d="M6 12v5c3 3 9 3 12 0v-5" />
            </>
        },
        Glyph::Content(Icon::Github) => html! {
            <>
                <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
                <path d="M9 18c-4.51 2-5-2-7-2" />
            </>
        },
        Glyph::Content(Icon::Linkedin) => html! {
            <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                <rect width="4" height="12" x="2" y="9" />
                <circle cx="4" cy="4" r="2" />
            </>
        },
        Glyph::Content(Icon::Mail) => html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
        Glyph::Sun => html! {
            <>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
            </>
        },
        Glyph::Moon => html! { <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" /> },
        Glyph::Menu => html! { <path d="M4 6h16M4 12h16M4 18h16" /> },
        Glyph::Close => html! { <path d="M18 6 6 18M6 6l12 12" /> },
        Glyph::ArrowUp => html! { <path d="m5 12 7-7 7 7M12 19V5" /> },
        Glyph::Check => html! { <path d="M5 13l4 4L19 7" /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SvgIcon)]
pub fn svg_icon(props: &IconProps) -> Html {
    let size = props.size.to_string();

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(props.glyph)}
        </svg>
    }
}

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <svg class="logo" height="40" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <defs>
                <linearGradient id="logo-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" style="stop-color: #6366F1; stop-opacity: 1" />
                    <stop offset="100%" style="stop-color: #8B5CF6; stop-opacity: 1" />
                </linearGradient>
            </defs>
            <path d="M35 20 L15 50 L35 80" stroke="url(#logo-gradient)" stroke-width="12" fill="none" stroke-linecap="round" stroke-linejoin="round" />
            <path d="M47 75 L63 25" stroke="url(#logo-gradient)" stroke-width="10" fill="none" stroke-linecap="round" />
            <path d="M65 20 L85 50 L65 80" stroke="url(#logo-gradient)" stroke-width="12" fill="none" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}
