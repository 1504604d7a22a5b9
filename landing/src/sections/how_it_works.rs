use super::{IconSvg, Reveal, Staggered};
use crate::content::{STEPS, Step};
use leptos::prelude::*;

/// Entrance index of the first step; feature cards take 3..=6.
const FIRST_STEP_INDEX: usize = 7;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="section">
            <Reveal>
                <h2 class="section-title">"How It Works"</h2>
            </Reveal>
            <div class="steps-grid">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| view! { <StepCard step={*step} index={FIRST_STEP_INDEX + i} /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StepCard(step: Step, index: usize) -> impl IntoView {
    view! {
        <Staggered index=index class="step-card">
            <IconSvg icon=step.icon />
            <div class="step-ordinal">{step.ordinal}</div>
            <h3 class="card-title">{step.title}</h3>
            <p class="card-description">{step.description}</p>
        </Staggered>
    }
}
