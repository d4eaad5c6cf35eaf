use yew::prelude::*;

use crate::components::currency_visual::CurrencyVisual;
use crate::components::scroll_to_section;

const PROBLEMS: [&str; 5] = [
    "Funding information is scattered across Twitter, LinkedIn, emails, Notion, and warm intros",
    "Founders send the same deck dozens of times with no visibility after applying",
    "Investors receive unstructured inbound pitches and lose track of conversations",
    "Follow-ups, feedback, and status updates are inconsistent or missing",
    "Everyone ends up tracking critical funding activity in fragile spreadsheets",
];

const STEPS: [(&str, &str, &str); 3] = [
    ("01", "Discover", "Find relevant funding opportunities or startups in one place"),
    ("02", "Apply", "Engage using a single profile instead of repeating information"),
    ("03", "Track", "Monitor conversations, interest, and outcomes in one clear dashboard"),
];

const FOUNDER_SEGMENTS: [&str; 4] = [
    "First-time founders",
    "Indie hackers and solo builders",
    "Early-stage startups",
    "Growth-stage startups",
];

const INVESTOR_SEGMENTS: [&str; 4] = [
    "Angel investors",
    "Micro-VCs and syndicates",
    "Institutional funds",
    "Family offices",
];

fn join_waitlist_button(testid: &'static str) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_section("early-access"));
    html! {
        <button class="btn-primary" {onclick} data-testid={testid}>
            {"Join the early access waitlist"}<span class="arrow">{"→"}</span>
        </button>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let to_problem = Callback::from(|_: MouseEvent| scroll_to_section("problem"));
    html! {
        <section class="hero" data-testid="hero-section">
            <CurrencyVisual />
            <div class="hero-overlay"></div>
            <div class="container-custom hero-content">
                <p class="eyebrow" data-testid="hero-tagline">
                    {"The Missing Layer Between Founders & Capital"}
                </p>
                <h1 class="hero-title" data-testid="hero-headline">
                    {"Find funding opportunities. "}
                    <span class="text-gradient-gold">{"Apply once."}</span>
                    {" Track everything."}
                </h1>
                <p class="hero-subtext" data-testid="hero-subtext">
                    {"FounderFund helps founders discover relevant investors, apply faster, and track responses. \
                      Investors discover aligned startups and manage inbound interest. \
                      Funds reduce noise, duplication, and missed opportunities across deal flow."}
                </p>
                <div class="hero-cta-group">
                    { join_waitlist_button("hero-primary-cta") }
                    <button class="btn-secondary" onclick={to_problem} data-testid="hero-secondary-cta">
                        {"Tell us your fundraising pain"}<span class="arrow">{"↓"}</span>
                    </button>
                </div>
            </div>
            <div class="scroll-indicator">
                <span>{"Scroll"}</span>
                <div class="scroll-line"></div>
            </div>
        </section>
    }
}

#[function_component(Problem)]
pub fn problem() -> Html {
    html! {
        <section id="problem" class="section bg-obsidian" data-testid="problem-section">
            <div class="container-custom">
                <p class="eyebrow">{"The Problem"}</p>
                <h2 class="section-title" data-testid="problem-headline">{"Fundraising is broken"}</h2>
                <div class="pain-grid">
                    { for PROBLEMS.iter().enumerate().map(|(index, text)| html! {
                        <div class="pain-card" data-testid={format!("problem-card-{}", index)}>
                            <span class="pain-dot"></span>
                            <p>{ *text }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Solution)]
pub fn solution() -> Html {
    html! {
        <section class="section bg-charcoal" data-testid="solution-section">
            <div class="container-custom">
                <p class="eyebrow">{"The Solution"}</p>
                <h2 class="section-title" data-testid="solution-headline">{"Three steps to clarity"}</h2>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(index, (number, title, description))| html! {
                        <div class="glass-card step" data-testid={format!("solution-step-{}", index)}>
                            <span class="step-number">{ *number }</span>
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn audience_card(key: &'static str, title: &'static str, segments: &[&'static str]) -> Html {
    html! {
        <div class="audience-card" data-testid={format!("audience-card-{}", key)}>
            <h3>{ title }</h3>
            <ul>
                { for segments.iter().map(|segment| html! { <li>{ *segment }</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Audience)]
pub fn audience() -> Html {
    html! {
        <section class="section bg-obsidian" data-testid="audience-section">
            <div class="container-custom">
                <p class="eyebrow">{"Who It's For"}</p>
                <h2 class="section-title" data-testid="audience-headline">
                    {"Built for both sides of the table"}
                </h2>
                <div class="audience-grid">
                    { audience_card("founders", "For Founders", &FOUNDER_SEGMENTS) }
                    { audience_card("investors", "For Investors", &INVESTOR_SEGMENTS) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Credibility)]
pub fn credibility() -> Html {
    html! {
        <section class="section bg-obsidian credibility" data-testid="credibility-section">
            <div class="container-custom narrow">
                <div class="gold-accent-line"></div>
                <p class="credibility-quote" data-testid="credibility-text-1">
                    {"\"Built by engineers who've experienced fundraising and deal-flow chaos firsthand.\""}
                </p>
                <p class="credibility-note" data-testid="credibility-text-2">
                    {"Currently validating with founders and investors across stages."}
                </p>
                <div class="gold-accent-line"></div>
                { join_waitlist_button("credibility-cta") }
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer" data-testid="footer">
            <div class="container-custom footer-inner">
                <span class="logo">{"FounderFund"}</span>
                <p>{"© FounderFund. The missing layer between founders & capital."}</p>
            </div>
        </footer>
    }
}
