use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::config::WaitlistConfig;
use crate::utils::console;
use crate::waitlist::{
    submit, FieldUpdate, FormController, FounderStage, FundingStage, Notice, PainPoint, Role,
};

#[derive(Properties, PartialEq)]
pub struct EarlyAccessProps {
    #[prop_or_default]
    pub config: WaitlistConfig,
}

fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

/// The early access section: the form while editing, a confirmation once the
/// signup is accepted.
#[function_component(EarlyAccess)]
pub fn early_access(props: &EarlyAccessProps) -> Html {
    let config = props.config.clone();
    let controller = use_mut_ref(move || FormController::from_config(&config));
    let notice = use_state(|| None::<Notice>);
    let rerender = use_force_update();

    let update = {
        let controller = controller.clone();
        let rerender = rerender.clone();
        Callback::from(move |update: FieldUpdate| {
            if controller.borrow_mut().update_field(update) {
                rerender.force_update();
            }
        })
    };

    let onsubmit = {
        let controller = controller.clone();
        let notice = notice.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            let notice = notice.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                let on_submitting = {
                    let notice = notice.clone();
                    let rerender = rerender.clone();
                    move || {
                        console::log("Submitting waitlist signup");
                        notice.set(None);
                        rerender.force_update();
                    }
                };
                if let Some(settled) = submit(&*controller, on_submitting).await {
                    notice.set(Some(settled));
                }
                rerender.force_update();
            });
        })
    };

    let dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let form = controller.borrow();
    let draft = form.draft().clone();
    let is_submitting = form.is_submitting();
    let is_submitted = form.is_submitted();
    drop(form);

    if is_submitted {
        return html! {
            <section id="early-access" class="section bg-charcoal" data-testid="early-access-section">
                <NoticeBanner notice={(*notice).clone()} on_dismiss={dismiss} />
                <div class="container-custom narrow">
                    <div class="glass-active confirmation">
                        <div class="confirmation-icon">{"✦"}</div>
                        <h3>{"You're on the list"}</h3>
                        <p>
                            {"Thank you for your interest in FounderFund. We'll reach out soon with early access details."}
                        </p>
                    </div>
                </div>
            </section>
        };
    }

    let on_email = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update.emit(FieldUpdate::Email(input.value()));
        })
    };
    let on_role = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            update.emit(FieldUpdate::Role(Role::from_value(&select_value(&e))));
        })
    };
    let on_founder_stage = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            update.emit(FieldUpdate::FounderStage(FounderStage::from_value(&select_value(&e))));
        })
    };
    let on_funding_stage = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            update.emit(FieldUpdate::FundingStage(FundingStage::from_value(&select_value(&e))));
        })
    };
    let on_pain = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            update.emit(FieldUpdate::BiggestPain(PainPoint::from_value(&select_value(&e))));
        })
    };
    let on_detail = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update.emit(FieldUpdate::DetailedPain(area.value()));
        })
    };

    html! {
        <section id="early-access" class="section bg-charcoal" data-testid="early-access-section">
            <NoticeBanner notice={(*notice).clone()} on_dismiss={dismiss} />
            <div class="container-custom narrow">
                <p class="eyebrow centered">{"Early Access"}</p>
                <h2 class="section-title centered" data-testid="early-access-headline">
                    {"Shape the future of funding"}
                </h2>
                <p class="section-lead centered">
                    {"Your input helps us build the product that actually solves your problems."}
                </p>
                <form class="glass-active waitlist-form" {onsubmit} novalidate=true data-testid="waitlist-form">
                    <div class="form-field">
                        <label class="form-label">{"Email *"}</label>
                        <input
                            type="email"
                            class="form-input"
                            placeholder="you@company.com"
                            value={draft.email.clone()}
                            oninput={on_email}
                            data-testid="email-input"
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-label">{"I am a *"}</label>
                        <select class="form-input" onchange={on_role} data-testid="role-select">
                            <option value="" selected={draft.role.is_none()} disabled=true>{"Select your role"}</option>
                            { for Role::ALL.iter().map(|role| html! {
                                <option value={role.as_str()} selected={draft.role == Some(*role)}>{ role.label() }</option>
                            }) }
                        </select>
                    </div>
                    if draft.shows_founder_stage() {
                        <div class="form-field">
                            <label class="form-label">{"Startup Stage"}</label>
                            <select class="form-input" onchange={on_founder_stage} data-testid="founder-stage-select">
                                <option value="" selected={draft.founder_stage.is_none()} disabled=true>{"Select your stage"}</option>
                                { for FounderStage::ALL.iter().map(|stage| html! {
                                    <option value={stage.as_str()} selected={draft.founder_stage == Some(*stage)}>{ stage.label() }</option>
                                }) }
                            </select>
                        </div>
                    }
                    if draft.shows_funding_stage() {
                        <div class="form-field">
                            <label class="form-label">{"Investment Focus"}</label>
                            <select class="form-input" onchange={on_funding_stage} data-testid="funding-stage-select">
                                <option value="" selected={draft.funding_stage.is_none()} disabled=true>{"Select your focus"}</option>
                                { for FundingStage::ALL.iter().map(|stage| html! {
                                    <option value={stage.as_str()} selected={draft.funding_stage == Some(*stage)}>{ stage.label() }</option>
                                }) }
                            </select>
                        </div>
                    }
                    <div class="form-field">
                        <label class="form-label">{"Biggest pain in fundraising/deal flow *"}</label>
                        <select class="form-input" onchange={on_pain} data-testid="pain-select">
                            <option value="" selected={draft.biggest_pain.is_none()} disabled=true>{"Select your biggest challenge"}</option>
                            { for PainPoint::ALL.iter().map(|pain| html! {
                                <option value={pain.as_str()} selected={draft.biggest_pain == Some(*pain)}>{ pain.as_str() }</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-field">
                        <label class="form-label">{"Tell us more (optional)"}</label>
                        <textarea
                            class="form-input form-textarea"
                            placeholder="Describe your specific challenges with fundraising or deal flow..."
                            value={draft.detailed_pain.clone()}
                            oninput={on_detail}
                            data-testid="detailed-pain-textarea"
                        />
                    </div>
                    <button type="submit" class="btn-primary full-width" disabled={is_submitting} data-testid="submit-btn">
                        if is_submitting {
                            <span class="spinner"></span>{"Submitting..."}
                        } else {
                            {"Join the early access waitlist"}<span class="arrow">{"→"}</span>
                        }
                    </button>
                </form>
            </div>
        </section>
    }
}
