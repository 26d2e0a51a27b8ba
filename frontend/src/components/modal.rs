use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::state::modal::ModalName;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub name: ModalName,
    pub open: bool,
    /// Fired by the close button and by clicks on the backdrop itself
    pub on_close: Callback<ModalName>,
    #[prop_or_default]
    pub on_backdrop: Option<Callback<ModalName>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let name = props.name;

    let onclick = {
        let on_close = props.on_close.clone();
        let on_backdrop = props.on_backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop_itself = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| el.id() == name.element_id())
                .unwrap_or(false);
            if on_backdrop_itself {
                match &on_backdrop {
                    Some(cb) => cb.emit(name),
                    None => on_close.emit(name),
                }
            }
        })
    };

    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(name))
    };

    html! {
        <div
            id={name.element_id()}
            class={classes!("modal", props.open.then_some("active"))}
            aria-hidden={(!props.open).to_string()}
            {onclick}
        >
            <div class={classes!("modal-content", props.class.clone())}>
                <button class="modal-close" onclick={on_close_button} aria-label="Close">
                    <i class="fas fa-times"></i>
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
