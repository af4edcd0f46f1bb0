use fastrand::Rng;
use yew::prelude::*;

use super::{browser::random_seed, hooks::use_typing};
use crate::{
    content::TAGLINES,
    motion::{generate_particles, PARTICLE_COUNT},
};

#[function_component(TypingEffect)]
pub fn typing_effect() -> Html {
    let state = use_typing(&TAGLINES);

    html! {
        <p class="typing-line" aria-live="polite">
            {state.text().to_string()}
            <span class="typing-caret" aria-hidden="true">{"|"}</span>
        </p>
    }
}

/// Ambient drifting smoke behind the page. Drawn once per mount.
#[function_component(BackgroundAnimation)]
pub fn background_animation() -> Html {
    let particles = use_memo((), |_| {
        let mut rng = Rng::with_seed(random_seed());
        generate_particles(&mut rng, PARTICLE_COUNT)
    });

    html! {
        <div class="smoke-field" aria-hidden="true">
            { for particles.iter().map(|particle| html! {
                <div class="smoke" style={particle.style()} />
            }) }
        </div>
    }
}
