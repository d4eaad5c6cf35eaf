use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem; background: #050505; color: #F5F5F5;">
            <h1 style="font-family: 'Playfair Display', serif; font-weight: 400;">{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>
                <span style="color: #D4AF37;">{"Back to FounderFund"}</span>
            </Link<Route>>
        </div>
    }
}
