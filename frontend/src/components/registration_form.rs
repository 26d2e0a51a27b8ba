use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::registration::field_errors::FieldErrors;
use crate::registration::validator::FormField;
use crate::state::app::AppEvent;

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub fields: Vec<FormField>,
    pub errors: FieldErrors,
    pub submit_label: String,
    pub submit_disabled: bool,
    /// Shows the spinner next to the busy label
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub submitting: bool,
    #[prop_or_default]
    pub failure: Option<String>,
    pub dispatch: Callback<AppEvent>,
}

fn placeholder(field: &str) -> &'static str {
    match field {
        "name" => "Your full name",
        "email" => "you@example.com",
        "phone" => "+1 (555) 123-4567",
        _ => "",
    }
}

fn label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[function_component]
pub fn RegistrationForm(props: &RegistrationFormProps) -> Html {
    let onsubmit = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(AppEvent::Submit);
        })
    };

    let render_field = |field: &FormField| {
        let name = field.name.clone();
        let oninput = {
            let dispatch = props.dispatch.clone();
            let name = name.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                dispatch.emit(AppEvent::FieldInput {
                    field: name.clone(),
                    value: input.value(),
                });
            })
        };
        let onblur = {
            let dispatch = props.dispatch.clone();
            let name = name.clone();
            Callback::from(move |_: FocusEvent| {
                dispatch.emit(AppEvent::FieldBlur { field: name.clone() });
            })
        };
        let error = props.errors.message(&field.name);

        html! {
            <div class="form-group" key={name.clone()}>
                <label for={format!("reg-{}", name)}>{label(&name)}</label>
                <input
                    id={format!("reg-{}", name)}
                    name={name.clone()}
                    type={field.kind.input_type()}
                    class={classes!(props.errors.has_error(&field.name).then_some("invalid"))}
                    placeholder={placeholder(&name)}
                    required={field.required}
                    value={field.raw_value.clone()}
                    {oninput}
                    {onblur}
                />
                if let Some(message) = error {
                    <span class="error-message">{message.to_string()}</span>
                }
            </div>
        }
    };

    html! {
        <form id="registration-form" class="registration-form" novalidate={true} aria-busy={props.submitting.to_string()} {onsubmit}>
            { for props.fields.iter().map(render_field) }
            if let Some(failure) = props.failure.as_ref() {
                <div class="form-failure">{failure.clone()}</div>
            }
            <button type="submit" class="form-submit-btn" disabled={props.submit_disabled}>
                if props.busy {
                    <i class="fas fa-spinner fa-spin"></i>{" "}
                }
                {props.submit_label.clone()}
            </button>
            <p class="form-note">{"No spam. Unsubscribe anytime."}</p>
        </form>
    }
}
