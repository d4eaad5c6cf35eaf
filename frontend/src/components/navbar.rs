use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::scroll_to_section;

const SCROLLED_AFTER_PX: f64 = 50.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(scroll_y > SCROLLED_AFTER_PX);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let join = Callback::from(|_: MouseEvent| scroll_to_section("early-access"));
    let nav_class = if *scrolled { "navbar navbar-glass" } else { "navbar" };

    html! {
        <nav class={nav_class}>
            <div class="container-custom navbar-inner">
                <a href="#" class="logo" data-testid="logo-link">{"FounderFund"}</a>
                <button class="btn-primary nav-cta" onclick={join} data-testid="nav-cta-btn">
                    {"Join Waitlist"}<span class="arrow">{"→"}</span>
                </button>
            </div>
        </nav>
    }
}
