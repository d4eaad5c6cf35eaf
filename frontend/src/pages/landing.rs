use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::sections::{Audience, Credibility, Footer, Hero, Problem, Solution};
use crate::components::waitlist_form::EarlyAccess;
use crate::config::WaitlistConfig;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }
    let config = use_memo(|_| WaitlistConfig::default(), ());

    let page_css = r#"
        html { scroll-behavior: smooth; }
        body {
            margin: 0;
            background: #050505;
            color: #F5F5F5;
            font-family: 'Inter', system-ui, sans-serif;
        }
        .landing-main { min-height: 100vh; background: #050505; }
        .container-custom { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; position: relative; z-index: 2; }
        .container-custom.narrow { max-width: 720px; text-align: center; }
        .bg-obsidian { background: #050505; }
        .bg-charcoal { background: #0F0F0F; }
        .section { padding: 6rem 0; position: relative; }
        .eyebrow {
            color: rgba(212, 175, 55, 0.6);
            font-size: 0.85rem;
            letter-spacing: 0.3em;
            text-transform: uppercase;
            margin-bottom: 1rem;
        }
        .centered { text-align: center; }
        .section-title {
            font-family: 'Playfair Display', serif;
            font-size: 2.75rem;
            font-weight: 400;
            margin: 0 0 3rem;
        }
        .section-lead { color: rgba(255, 255, 255, 0.6); font-size: 1.1rem; margin-bottom: 3rem; }
        .navbar { position: fixed; top: 0; left: 0; right: 0; z-index: 50; padding: 1.5rem 0; transition: all 0.5s; }
        .navbar-glass { padding: 1rem 0; background: rgba(5, 5, 5, 0.8); backdrop-filter: blur(12px); border-bottom: 1px solid rgba(255, 255, 255, 0.05); }
        .navbar-inner, .footer-inner { display: flex; align-items: center; justify-content: space-between; }
        .logo { color: #D4AF37; font-family: 'Playfair Display', serif; font-size: 1.5rem; font-weight: 600; text-decoration: none; }
        .btn-primary, .btn-secondary {
            display: inline-flex;
            align-items: center;
            justify-content: center;
            gap: 0.5rem;
            padding: 0.9rem 1.75rem;
            font-size: 0.95rem;
            cursor: pointer;
            border-radius: 2px;
            transition: all 0.3s ease;
        }
        .btn-primary { background: #D4AF37; color: #050505; border: 1px solid #D4AF37; }
        .btn-primary:hover { background: #E5C158; }
        .btn-primary:disabled { opacity: 0.6; cursor: not-allowed; }
        .btn-secondary { background: transparent; color: #F5F5F5; border: 1px solid rgba(255, 255, 255, 0.2); }
        .full-width { width: 100%; }
        .hero { position: relative; min-height: 100vh; display: flex; align-items: center; overflow: hidden; padding: 6rem 0 5rem; }
        .hero-overlay { position: absolute; inset: 0; background: linear-gradient(to bottom, #050505, transparent 40%, #050505); z-index: 1; }
        .hero-content { max-width: 56rem; }
        .hero-title { font-family: 'Playfair Display', serif; font-size: 4.25rem; font-weight: 500; line-height: 1.1; margin: 0 0 2rem; }
        .text-gradient-gold { background: linear-gradient(45deg, #D4AF37, #F4E4A6); -webkit-background-clip: text; -webkit-text-fill-color: transparent; }
        .hero-subtext { color: rgba(255, 255, 255, 0.7); font-size: 1.2rem; line-height: 1.7; max-width: 42rem; margin-bottom: 3rem; }
        .hero-cta-group { display: flex; gap: 1rem; flex-wrap: wrap; }
        .scroll-indicator { position: absolute; bottom: 2rem; left: 50%; transform: translateX(-50%); z-index: 2; display: flex; flex-direction: column; align-items: center; gap: 0.5rem; color: rgba(255, 255, 255, 0.3); font-size: 0.7rem; letter-spacing: 0.2em; text-transform: uppercase; }
        .scroll-line { width: 1px; height: 3rem; background: linear-gradient(to bottom, rgba(212, 175, 55, 0.5), transparent); }
        .pain-grid { display: grid; gap: 1.25rem; }
        .pain-card { display: flex; align-items: flex-start; gap: 1rem; padding: 1.5rem; border: 1px solid rgba(255, 255, 255, 0.06); background: rgba(255, 255, 255, 0.02); }
        .pain-card p { margin: 0; color: rgba(255, 255, 255, 0.8); font-size: 1.1rem; line-height: 1.6; }
        .pain-dot { width: 8px; height: 8px; margin-top: 0.6rem; border-radius: 50%; background: rgba(212, 175, 55, 0.6); flex-shrink: 0; }
        .steps-grid, .audience-grid { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
        .glass-card, .audience-card { padding: 2rem; border: 1px solid rgba(255, 255, 255, 0.08); background: rgba(255, 255, 255, 0.03); }
        .step-number { color: rgba(212, 175, 55, 0.3); font-family: 'Playfair Display', serif; font-size: 2.5rem; font-weight: 600; }
        .step p, .audience-card li { color: rgba(255, 255, 255, 0.6); line-height: 1.7; }
        .audience-card ul { list-style: none; padding: 0; }
        .audience-card li::before { content: "◦ "; color: rgba(212, 175, 55, 0.6); }
        .glass-active { padding: 3rem; border: 1px solid rgba(212, 175, 55, 0.2); background: rgba(255, 255, 255, 0.03); text-align: left; }
        .waitlist-form { display: flex; flex-direction: column; gap: 2rem; }
        .form-label { display: block; color: rgba(255, 255, 255, 0.6); font-size: 0.8rem; letter-spacing: 0.1em; text-transform: uppercase; margin-bottom: 0.5rem; }
        .form-input { width: 100%; padding: 0.75rem 0; background: transparent; color: #F5F5F5; border: 0; border-bottom: 1px solid rgba(255, 255, 255, 0.2); font-size: 1rem; outline: none; }
        .form-input:focus { border-bottom-color: #D4AF37; }
        .form-input option { background: #0F0F0F; }
        .form-textarea { min-height: 120px; padding: 0.75rem; border: 1px solid rgba(255, 255, 255, 0.1); resize: none; }
        .spinner { width: 16px; height: 16px; border: 2px solid #050505; border-top-color: transparent; border-radius: 50%; animation: spin 0.8s linear infinite; }
        @keyframes spin { to { transform: rotate(360deg); } }
        .confirmation { text-align: center; }
        .confirmation-icon { width: 4rem; height: 4rem; margin: 0 auto 1.5rem; border-radius: 50%; background: rgba(212, 175, 55, 0.1); color: #D4AF37; display: flex; align-items: center; justify-content: center; font-size: 1.75rem; }
        .confirmation h3 { font-family: 'Playfair Display', serif; font-size: 2.25rem; margin: 0 0 1rem; }
        .confirmation p { color: rgba(255, 255, 255, 0.6); font-size: 1.1rem; }
        .toast { position: fixed; top: 1.5rem; left: 50%; transform: translateX(-50%); z-index: 100; display: flex; align-items: center; gap: 1rem; padding: 0.9rem 1.25rem; background: #0A0A0A; border: 1px solid rgba(212, 175, 55, 0.2); color: #F5F5F5; }
        .toast-success { border-color: rgba(212, 175, 55, 0.5); }
        .toast-error { border-color: rgba(255, 99, 99, 0.5); }
        .toast-close { background: none; border: 0; color: inherit; font-size: 1.25rem; cursor: pointer; }
        .credibility-quote { color: rgba(255, 255, 255, 0.8); font-size: 1.25rem; line-height: 1.7; }
        .credibility-note { color: rgba(255, 255, 255, 0.5); margin-bottom: 3rem; }
        .gold-accent-line { width: 6rem; height: 1px; margin: 3rem auto; background: linear-gradient(to right, transparent, #D4AF37, transparent); }
        .footer { padding: 3rem 0; background: #0F0F0F; border-top: 1px solid rgba(255, 255, 255, 0.05); }
        .footer p { color: rgba(255, 255, 255, 0.4); font-size: 0.875rem; }
        @media (max-width: 768px) {
            .hero-title { font-size: 2.75rem; }
            .section-title { font-size: 2.25rem; }
            .nav-cta { display: none; }
            .glass-active { padding: 2rem; }
            .footer-inner { flex-direction: column; gap: 1rem; }
        }
    "#;

    html! {
        <main class="landing-main">
            <style>{page_css}</style>
            <Navbar />
            <Hero />
            <Problem />
            <Solution />
            <Audience />
            <EarlyAccess config={(*config).clone()} />
            <Credibility />
            <Footer />
        </main>
    }
}
