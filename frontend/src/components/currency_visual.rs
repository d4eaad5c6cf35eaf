use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Floating banknote behind the hero. Rotation follows the scroll position.
#[function_component(CurrencyVisual)]
pub fn currency_visual() -> Html {
    let scroll_y = use_state(|| 0.0_f64);
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scroll_y = scroll_y.clone();
                        move || {
                            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                                scroll_y.set(y);
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

    let rotate_y = (*scroll_y * 0.05) % 360.0;
    let rotate_x = (*scroll_y * 0.002).sin() * 10.0;
    let bill_style = format!(
        "transform: translate(-50%, -50%) rotateY({:.2}deg) rotateX({:.2}deg) translateZ(50px);",
        rotate_y + 15.0,
        rotate_x
    );

    html! {
        <div class="currency-canvas" aria-hidden="true">
            <style>
            {r#"
                .currency-canvas {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                    perspective: 1000px;
                }
                .currency-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 600px;
                    height: 400px;
                    transform: translate(-50%, -50%);
                    background: radial-gradient(ellipse at center, rgba(212, 175, 55, 0.08) 0%, transparent 70%);
                    filter: blur(40px);
                }
                .currency-float {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    animation: float 6s ease-in-out infinite;
                }
                .currency-bill {
                    position: absolute;
                    width: 400px;
                    height: 200px;
                    transform-style: preserve-3d;
                    border: 1px solid rgba(212, 175, 55, 0.35);
                    border-radius: 2px;
                    background: linear-gradient(135deg, rgba(212, 175, 55, 0.12), rgba(10, 10, 10, 0.6) 60%, rgba(212, 175, 55, 0.08));
                    box-shadow: 0 30px 80px rgba(0, 0, 0, 0.6);
                }
                .currency-seal {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 90px;
                    height: 90px;
                    transform: translate(-50%, -50%);
                    border: 1px solid rgba(212, 175, 55, 0.5);
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: rgba(212, 175, 55, 0.8);
                    font-size: 2.5rem;
                    font-family: 'Playfair Display', serif;
                }
                .currency-corner {
                    position: absolute;
                    color: rgba(212, 175, 55, 0.6);
                    font-size: 1.25rem;
                    font-family: 'Playfair Display', serif;
                }
                .currency-corner.tl { top: 12px; left: 16px; }
                .currency-corner.br { bottom: 12px; right: 16px; }
                @keyframes float {
                    0%, 100% { margin-top: 0; }
                    50% { margin-top: -20px; }
                }
            "#}
            </style>
            <div class="currency-glow"></div>
            <div class="currency-float">
                <div class="currency-bill" style={bill_style}>
                    <span class="currency-corner tl">{"100"}</span>
                    <div class="currency-seal">{"$"}</div>
                    <span class="currency-corner br">{"100"}</span>
                </div>
            </div>
        </div>
    }
}
