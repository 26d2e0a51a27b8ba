use yew::prelude::*;

mod config;
mod components {
    pub mod countdown;
    pub mod modal;
    pub mod registration_form;
}
mod pages {
    pub mod landing;
}
mod registration {
    pub mod field_errors;
    pub mod flow;
    pub mod form;
    pub mod validator;
}
mod state {
    pub mod app;
    pub mod countdown;
    pub mod modal;
    pub mod scarcity;
    pub mod theme;
}
mod utils {
    pub mod analytics;
    pub mod storage;
    pub mod tasks;
}

use pages::landing::Landing;
use registration::flow::Submission;

#[function_component]
fn App() -> Html {
    let on_registered = Callback::from(|submission: Submission| {
        utils::analytics::track_registration(&submission);
    });

    html! {
        <Landing on_registered={Some(on_registered)} />
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
