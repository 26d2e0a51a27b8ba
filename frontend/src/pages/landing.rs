use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::countdown::CountdownTimer;
use crate::components::modal::Modal;
use crate::components::registration_form::RegistrationForm;
use crate::config::LandingConfig;
use crate::registration::flow::Submission;
use crate::state::app::{AppEvent, Followup, LandingApp};
use crate::state::modal::ModalName;
use crate::state::theme::Theme;
use crate::utils::storage::open_storage;
use crate::utils::tasks::BackgroundTasks;

/// Feeds events into the shared `LandingApp` and schedules whatever it asks for.
#[derive(Clone)]
struct Dispatcher {
    app: Rc<RefCell<LandingApp>>,
    redraw: Rc<UseForceUpdateHandle>,
    on_registered: Option<Callback<Submission>>,
}

impl Dispatcher {
    fn dispatch(&self, event: AppEvent) {
        // The borrow ends before any follow-up runs.
        let followups = self.app.borrow_mut().handle(event);
        self.redraw.force_update();

        for followup in followups {
            match followup {
                Followup::After { delay_ms, event } => {
                    let this = self.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(delay_ms).await;
                        this.dispatch(event);
                    });
                }
                Followup::Registered(submission) => {
                    if let Some(cb) = &self.on_registered {
                        cb.emit(submission);
                    }
                }
            }
        }
    }

    fn callback(&self) -> Callback<AppEvent> {
        let this = self.clone();
        Callback::from(move |event| this.dispatch(event))
    }
}

fn apply_scroll_lock(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    match body {
        Some(body) => {
            let overflow = if locked { "hidden" } else { "auto" };
            if let Err(e) = body.style().set_property("overflow", overflow) {
                log::warn!("failed to set body overflow: {:?}", e);
            }
        }
        None => log::error!("document body missing, cannot apply scroll lock"),
    }
}

fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("failed to set theme: {:?}", e);
            }
        }
        None => log::error!("document element missing, cannot apply theme"),
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Receives the submitted values once a registration completes
    #[prop_or_default]
    pub on_registered: Option<Callback<Submission>>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let app = use_mut_ref(|| {
        LandingApp::load(open_storage(), LandingConfig::default(), chrono::Utc::now())
    });
    let redraw = Rc::new(use_force_update());
    let dispatch = Dispatcher {
        app: app.clone(),
        redraw,
        on_registered: props.on_registered.clone(),
    }
    .callback();

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
    // Countdown, spots decay and auto popup; dropped on unmount
    {
        let dispatch = dispatch.clone();
        let config = app.borrow().config().clone();
        use_effect_with_deps(
            move |_| {
                let tasks = BackgroundTasks::start(&config, dispatch);
                move || drop(tasks)
            },
            (),
        );
    }

    let state = app.borrow();
    let scroll_locked = state.modals().scroll_locked();
    let theme = state.theme();

    use_effect_with_deps(
        move |locked| {
            apply_scroll_lock(*locked);
            || ()
        },
        scroll_locked,
    );
    use_effect_with_deps(
        move |theme| {
            apply_theme(*theme);
            || ()
        },
        theme,
    );

    let open = |name: ModalName| {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(AppEvent::OpenModal(name)))
    };
    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |name| dispatch.emit(AppEvent::CloseModal(name)))
    };
    let on_backdrop = {
        let dispatch = dispatch.clone();
        Callback::from(move |name| dispatch.emit(AppEvent::BackdropClicked(name)))
    };
    let toggle_theme = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(AppEvent::ToggleTheme))
    };
    let close_success = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(AppEvent::CloseModal(ModalName::Success)))
    };

    let spots_left = state.spots_left();
    let modals = state.modals();
    let submit = state.submit_control();

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <nav class="navbar" id="navbar">
                <div class="nav-logo">{"DigitalBoost"}</div>
                <div class="nav-actions">
                    <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle theme">
                        <i id="theme-icon" class={theme.icon_class()}></i>
                    </button>
                    <button id="sticky-register-btn" class="nav-cta" onclick={open(ModalName::Registration)}>
                        {"Register Free"}
                    </button>
                </div>
            </nav>

            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Grow Your Business Online in 30 Days"}</h1>
                    <p class="hero-subtitle">
                        {"A free live masterclass on the exact digital marketing playbook we use with our clients."}
                    </p>
                    <div class="hero-offer">
                        <p class="offer-label">{"Free registration closes in"}</p>
                        <CountdownTimer parts={state.clock()} />
                    </div>
                    <div class="hero-cta-group">
                        <button id="hero-register-btn" class="hero-cta" onclick={open(ModalName::Registration)}>
                            {"Reserve My Free Spot"}
                        </button>
                        <p class="spots-note">
                            {"Only "}<span id="spots-left" class="highlight">{spots_left}</span>{" spots left"}
                        </p>
                    </div>
                </div>
            </header>

            <section class="video-section">
                <h2>{"See what you'll learn"}</h2>
                <div id="video-thumbnail" class="video-thumbnail" onclick={open(ModalName::Video)}>
                    <img
                        src={format!("https://img.youtube.com/vi/{}/hqdefault.jpg", state.config().video_id)}
                        alt="Masterclass preview"
                        loading="lazy"
                    />
                    <div class="play-button"><i class="fas fa-play"></i></div>
                </div>
            </section>

            <section class="final-cta">
                <h2>{"Don't miss out"}</h2>
                <p>
                    {"Seats are limited to keep the session interactive. "}
                    <span id="final-spots-left" class="highlight">{spots_left}</span>{" spots remaining."}
                </p>
                <button id="final-register-btn" class="hero-cta" onclick={open(ModalName::Registration)}>
                    {"Claim Your Spot"}
                </button>
            </section>

            <Modal
                name={ModalName::Registration}
                open={modals.is_open(ModalName::Registration)}
                on_close={on_close.clone()}
                on_backdrop={on_backdrop.clone()}
            >
                <h3>{"Register for the Free Masterclass"}</h3>
                <p class="modal-subtitle">{format!("{} spots left", spots_left)}</p>
                <RegistrationForm
                    fields={state.form().fields().to_vec()}
                    errors={state.errors().clone()}
                    submit_label={submit.label().to_string()}
                    submit_disabled={submit.is_disabled()}
                    busy={submit.is_busy()}
                    submitting={state.submission().is_submitting()}
                    failure={state.failure().map(str::to_string)}
                    dispatch={dispatch.clone()}
                />
            </Modal>

            <Modal
                name={ModalName::Success}
                open={modals.is_open(ModalName::Success)}
                on_close={on_close.clone()}
                on_backdrop={on_backdrop.clone()}
                class="success-content"
            >
                <i class="fas fa-check-circle success-icon"></i>
                <h3>{"You're in!"}</h3>
                <p>{"Check your inbox for the confirmation and calendar invite."}</p>
                <button id="success-close" class="hero-cta" onclick={close_success}>{"Got it"}</button>
            </Modal>

            <Modal
                name={ModalName::Video}
                open={modals.is_open(ModalName::Video)}
                on_close={on_close}
                on_backdrop={on_backdrop}
                class="video-content"
            >
                if let Some(src) = modals.video_src() {
                    <iframe
                        id="video-iframe"
                        src={src.to_string()}
                        title="Masterclass preview"
                        allow="autoplay; encrypted-media"
                        allowfullscreen=true
                    ></iframe>
                }
            </Modal>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: var(--bg, #fff);
        color: var(--fg, #1a1a2e);
    }
    [data-theme="dark"] .landing-page {
        --bg: #0f0f1a;
        --fg: #e6e6f0;
    }
    .navbar {
        position: sticky;
        top: 0;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem 2rem;
        background: rgba(255, 255, 255, 0.9);
        z-index: 10;
    }
    [data-theme="dark"] .navbar {
        background: rgba(15, 15, 26, 0.9);
    }
    .nav-actions {
        display: flex;
        gap: 1rem;
    }
    .hero {
        padding: 6rem 2rem 4rem;
        text-align: center;
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        color: white;
    }
    .hero-title {
        font-size: 3rem;
        margin-bottom: 1rem;
    }
    .hero-cta, .nav-cta, .form-submit-btn {
        background: #ff6b6b;
        color: white;
        border: none;
        border-radius: 8px;
        padding: 0.9rem 2rem;
        font-size: 1.1rem;
        cursor: pointer;
    }
    .form-submit-btn:disabled {
        opacity: 0.7;
        cursor: wait;
    }
    .highlight {
        font-weight: 700;
        color: #ffd166;
    }
    .countdown-timer {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        font-variant-numeric: tabular-nums;
    }
    .countdown-value {
        display: block;
        font-size: 2rem;
        font-weight: 700;
    }
    .video-thumbnail {
        position: relative;
        max-width: 720px;
        margin: 0 auto;
        cursor: pointer;
    }
    .video-thumbnail img {
        width: 100%;
        border-radius: 12px;
    }
    .play-button {
        position: absolute;
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
        font-size: 3rem;
        color: white;
    }
    .video-section, .final-cta {
        padding: 4rem 2rem;
        text-align: center;
    }
    .modal {
        display: none;
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
        align-items: center;
        justify-content: center;
        z-index: 100;
    }
    .modal.active {
        display: flex;
    }
    .modal-content {
        position: relative;
        background: white;
        color: #1a1a2e;
        border-radius: 12px;
        padding: 2rem;
        width: min(480px, 92vw);
    }
    .video-content {
        width: min(900px, 96vw);
        padding: 0;
    }
    .video-content iframe {
        width: 100%;
        aspect-ratio: 16/9;
        border: none;
        border-radius: 12px;
    }
    .modal-close {
        position: absolute;
        top: 0.5rem;
        right: 0.5rem;
        background: none;
        border: none;
        font-size: 1.2rem;
        cursor: pointer;
    }
    .form-group {
        display: flex;
        flex-direction: column;
        margin-bottom: 1rem;
    }
    .form-group input {
        padding: 0.75rem;
        border: 2px solid #e0e0e0;
        border-radius: 8px;
    }
    .form-group input.invalid {
        border-color: #ff6b6b;
    }
    .error-message, .form-failure {
        color: #ff6b6b;
        font-size: 14px;
        margin-top: 5px;
        display: block;
    }
    .success-content {
        text-align: center;
    }
    .success-icon {
        font-size: 3rem;
        color: #06d6a0;
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 2rem;
        }
        .navbar {
            padding: 0.75rem 1rem;
        }
    }
"#;
