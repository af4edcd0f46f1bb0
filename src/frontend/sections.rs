use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{
    browser::viewport_width,
    effects::TypingEffect,
    hooks::use_reveal,
    icons::{Glyph, SvgIcon},
};
use crate::{
    contact::{ContactField, ContactForm, FormStatus},
    content::{ProjectCard, SkillCategory, TimelineEntry, PROFILE, PROJECTS, SKILL_CATEGORIES, TIMELINE},
    reveal::{
        entrance_offset, ABOUT_THRESHOLD, CONTACT_THRESHOLD, PROJECTS_THRESHOLD, SKILLS_THRESHOLD,
        TIMELINE_THRESHOLD,
    },
};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Wrapper that gains `is-revealed` once it scrolls into view and keeps it.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, revealed) = use_reveal(props.threshold);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), revealed.then_some("is-revealed"))}
            style={props.style.clone()}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    id: AttrValue,
    title: AttrValue,
    #[prop_or_default]
    tinted: bool,
    #[prop_or_default]
    children: Html,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("section", props.tinted.then_some("section--tinted"))}>
            <div class="container">
                <h2 class="section-title">{props.title.clone()}</h2>
                {props.children.clone()}
            </div>
        </section>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero section--tinted">
            <div class="container hero-layout">
                <div class="hero-copy">
                    <h1 style="--stagger: 0;">
                        {"Hi, I'm "}
                        <span class="accent">{PROFILE.name}</span>
                    </h1>
                    <div class="hero-tagline" style="--stagger: 1;">
                        <TypingEffect />
                    </div>
                    <a href="#contact" class="cta-button" style="--stagger: 2;">{"Get In Touch"}</a>
                </div>
                <div class="hero-portrait">
                    <div class="portrait-frame">
                        <img src={PROFILE.portrait} alt={PROFILE.name} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Section id="about" title="About Me">
            <div class="about-layout">
                <Reveal threshold={ABOUT_THRESHOLD} class="slide-from-left about-image">
                    <div class="tilted-frame">
                        <img src={PROFILE.about_image} alt="About me" />
                    </div>
                </Reveal>
                <Reveal threshold={ABOUT_THRESHOLD} class="slide-from-right about-copy">
                    { for PROFILE.about.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </Reveal>
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    category: SkillCategory,
    index: usize,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let category = props.category;

    html! {
        <div class="card lift" style={format!("--stagger: {};", props.index)}>
            <div class="card-heading">
                <SvgIcon glyph={Glyph::Content(category.icon)} class="accent" />
                <h3>{category.title}</h3>
            </div>
            <ul class="skill-list">
                { for category.skills.iter().map(|skill| html! {
                    <li key={*skill}>
                        <SvgIcon glyph={Glyph::Check} size={16} class="check" />
                        {*skill}
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <Section id="skills" title="My Skills" tinted=true>
            <Reveal threshold={SKILLS_THRESHOLD} class="card-grid stagger">
                { for SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| html! {
                    <SkillCard key={category.title} category={*category} {index} />
                }) }
            </Reveal>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: ProjectCard,
    index: usize,
}

#[function_component(ProjectCardView)]
fn project_card_view(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <div class="card project-card lift" style={format!("--stagger: {};", props.index)}>
            <img class="project-image" src={project.image} alt={project.title} loading="lazy" />
            <div class="project-body">
                <h3>{project.title}</h3>
                <p class="muted">{project.description}</p>
                <div class="tag-row">
                    { for project.tags.iter().map(|tag| html! {
                        <span key={*tag} class="tag">{*tag}</span>
                    }) }
                </div>
                <div class="project-links">
                    <a href={project.live_link} target="_blank" rel="noopener noreferrer">{"Live Demo"}</a>
                    <a href={project.code_link} target="_blank" rel="noopener noreferrer">{"View Code"}</a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <Section id="projects" title="Featured Projects">
            <Reveal threshold={PROJECTS_THRESHOLD} class="card-grid stagger">
                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCardView key={project.title} project={*project} {index} />
                }) }
            </Reveal>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
struct TimelineItemProps {
    entry: TimelineEntry,
    viewport_width: f64,
}

#[function_component(TimelineItem)]
fn timeline_item(props: &TimelineItemProps) -> Html {
    let entry = props.entry;
    let (node, revealed) = use_reveal(TIMELINE_THRESHOLD);
    let offset = entrance_offset(entry.side, props.viewport_width);

    html! {
        <div
            ref={node}
            class={classes!("timeline-item", entry.side.layout_class(), revealed.then_some("is-revealed"))}
            style={format!("--enter-x: {offset}px;")}
        >
            <div class="timeline-spacer" />
            <div class="timeline-marker">
                <SvgIcon glyph={Glyph::Content(entry.icon)} />
            </div>
            <div class="card timeline-card">
                <p class="timeline-date">{entry.date}</p>
                <h3>{entry.title}</h3>
                <p class="timeline-org">{entry.organization}</p>
                <p class="muted">{entry.description}</p>
            </div>
        </div>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    let width = use_state(viewport_width);

    html! {
        <Section id="experience" title="Experience & Education" tinted=true>
            <div class="timeline">
                <div class="timeline-rail" />
                { for TIMELINE.iter().map(|entry| html! {
                    <TimelineItem key={entry.title} entry={*entry} viewport_width={*width} />
                }) }
            </div>
        </Section>
    }
}

pub enum ContactAction {
    Edit(ContactField, String),
    Submit,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.edit(field, value),
            // No endpoint is wired; a valid submission only clears the blocked state.
            ContactAction::Submit => {
                let _ = next.submit();
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    field: ContactField,
    value: AttrValue,
    error: Option<String>,
    on_edit: Callback<(ContactField, String)>,
}

#[function_component(FormField)]
fn form_field(props: &FieldProps) -> Html {
    let field = props.field;
    let error_id = format!("{}-error", field.id());
    let invalid = props.error.is_some();

    let control = if field == ContactField::Message {
        let on_edit = props.on_edit.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            on_edit.emit((field, value));
        });
        html! {
            <textarea
                id={field.id()}
                name={field.id()}
                rows="4"
                required=true
                value={props.value.clone()}
                aria-invalid={invalid.to_string()}
                aria-describedby={invalid.then(|| error_id.clone())}
                {oninput}
            />
        }
    } else {
        let on_edit = props.on_edit.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            on_edit.emit((field, value));
        });
        html! {
            <input
                type={if field == ContactField::Email { "email" } else { "text" }}
                id={field.id()}
                name={field.id()}
                required=true
                value={props.value.clone()}
                aria-invalid={invalid.to_string()}
                aria-describedby={invalid.then(|| error_id.clone())}
                {oninput}
            />
        }
    };

    html! {
        <div class={classes!("form-field", invalid.then_some("has-error"))}>
            <label for={field.id()}>{field.label()}</label>
            {control}
            if let Some(message) = props.error.clone() {
                <p id={error_id} class="field-error" role="alert">{message}</p>
            }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);

    let on_edit = {
        let form = form.dispatcher();
        Callback::from(move |(field, value): (ContactField, String)| {
            form.dispatch(ContactAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let form = form.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            form.dispatch(ContactAction::Submit);
        })
    };

    let status = match &form.status {
        FormStatus::Ready => Some(html! {
            <p class="form-status" role="status">{"Thanks! Your message is ready to send."}</p>
        }),
        FormStatus::Blocked(_) => Some(html! {
            <p class="form-status form-status--blocked" role="status">{"Please fix the highlighted fields."}</p>
        }),
        FormStatus::Editing => None,
    };

    html! {
        <Section id="contact" title="Get In Touch">
            <p class="section-lead muted">{PROFILE.contact_blurb}</p>
            <Reveal threshold={CONTACT_THRESHOLD} class="slide-up contact-panel">
                <form class="contact-form" novalidate=true {onsubmit}>
                    { for ContactField::ALL.into_iter().map(|field| html! {
                        <FormField
                            key={field.id()}
                            {field}
                            value={AttrValue::from(form.draft.value(field).to_string())}
                            error={form.issue_for(field).map(|issue| issue.message(field))}
                            on_edit={on_edit.clone()}
                        />
                    }) }
                    <button type="submit" class="submit-button">{"Send Message"}</button>
                    {status}
                </form>
            </Reveal>
        </Section>
    }
}
