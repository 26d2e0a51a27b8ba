use yew::prelude::*;

use crate::state::countdown::CountdownParts;

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    pub parts: CountdownParts,
}

#[function_component]
pub fn CountdownTimer(props: &CountdownTimerProps) -> Html {
    let parts = props.parts;
    html! {
        <div class="countdown-timer">
            <div class="countdown-unit">
                <span id="hours" class="countdown-value">{parts.hours_text()}</span>
                <span class="countdown-label">{"Hours"}</span>
            </div>
            <span class="countdown-separator">{":"}</span>
            <div class="countdown-unit">
                <span id="minutes" class="countdown-value">{parts.minutes_text()}</span>
                <span class="countdown-label">{"Minutes"}</span>
            </div>
            <span class="countdown-separator">{":"}</span>
            <div class="countdown-unit">
                <span id="seconds" class="countdown-value">{parts.seconds_text()}</span>
                <span class="countdown-label">{"Seconds"}</span>
            </div>
        </div>
    }
}
