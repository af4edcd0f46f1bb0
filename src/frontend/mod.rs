mod browser;
mod effects;
mod hooks;
mod icons;
mod layout;
mod sections;

use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use self::{
    browser::{scroll_to_top, BrowserStorage, DocumentRoot},
    effects::BackgroundAnimation,
    hooks::use_scroll_offset,
    layout::{Footer, Header, ScrollTopButton},
    sections::{About, Contact, Experience, Hero, Projects, Skills},
};
use crate::{
    session::{UiAction, UiSession},
    theme::{Theme, ThemeStore},
};

/// The document-wide theme and its single updater.
#[derive(Clone, PartialEq, Default)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

impl Reducible for UiSession {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[function_component(App)]
fn app() -> Html {
    let store = use_mut_ref(|| ThemeStore::load(BrowserStorage::open(), DocumentRoot::default()));
    let theme = use_state(|| store.borrow().current());
    let session = use_reducer_eq(UiSession::default);

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            store.borrow_mut().apply_current();
            || ()
        });
    }

    let on_toggle_theme = {
        let store = store.clone();
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = store.borrow_mut().toggle();
            theme.set(next);
        })
    };

    {
        let session = session.dispatcher();
        use_scroll_offset(Callback::from(move |offset: f64| {
            session.dispatch(UiAction::Scrolled(offset));
        }));
    }

    let on_toggle_menu = {
        let session = session.dispatcher();
        Callback::from(move |_: ()| session.dispatch(UiAction::ToggleMenu))
    };

    let on_navigate = {
        let session = session.dispatcher();
        Callback::from(move |_: ()| session.dispatch(UiAction::NavActivated))
    };

    let theme_context = ThemeContext {
        theme: *theme,
        toggle: on_toggle_theme,
    };

    html! {
        <ContextProvider<ThemeContext> context={theme_context}>
            <a class="skip-link" href="#home">{"Skip to main content"}</a>
            <div class="page">
                if theme.is_dark() {
                    <BackgroundAnimation />
                }
                <Header
                    menu_open={session.menu_open}
                    {on_toggle_menu}
                    {on_navigate}
                />
                <main class="page-main">
                    <Hero />
                    <About />
                    <Skills />
                    <Projects />
                    <Experience />
                    <Contact />
                </main>
                <Footer />
                if session.scrolled_past_threshold {
                    <ScrollTopButton on_click={Callback::from(|_: ()| scroll_to_top())} />
                }
            </div>
        </ContextProvider<ThemeContext>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
