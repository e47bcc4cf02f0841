//! Validated form fields with inline error messages.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::validate::{
    self, validate_confirm, validate_field, validate_password, PasswordStrength,
};

/// Failsafe re-enable for submit buttons stuck in the processing state.
pub const SUBMIT_REENABLE_MS: u32 = 10_000;

/// Text-like input validated on blur; errors clear on the next keystroke.
#[component]
pub fn ValidatedInput(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = false)] required: bool,
    value: RwSignal<String>,
) -> impl IntoView {
    let error = RwSignal::new(None::<&'static str>);

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        value.set(input.value());
        error.set(None);
    };

    let on_blur = move |_ev: web_sys::FocusEvent| {
        error.set(validate_field(&value.get_untracked(), input_type, required));
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                name=name
                type=input_type
                required=required
                class:error=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=on_input
                on:blur=on_blur
            />
            {move || error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
        </div>
    }
}

/// Multiline input validated on blur.
#[component]
pub fn TextAreaField(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    #[prop(default = 8)] rows: u32,
    #[prop(default = false)] required: bool,
    value: RwSignal<String>,
) -> impl IntoView {
    let error = RwSignal::new(None::<&'static str>);

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let textarea: web_sys::HtmlTextAreaElement = target.unchecked_into();
        value.set(textarea.value());
        error.set(None);
    };

    let on_blur = move |_ev: web_sys::FocusEvent| {
        error.set(validate_field(&value.get_untracked(), "text", required));
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <textarea
                id=id
                name=name
                rows=rows
                required=required
                class:error=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=on_input
                on:blur=on_blur
            />
            {move || error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
        </div>
    }
}

/// Primary password field, optionally with a strength indicator that appears
/// on the first keystroke and updates as the user types.
#[component]
pub fn PasswordInput(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = false)] with_meter: bool,
    #[prop(default = true)] required: bool,
) -> impl IntoView {
    let error = RwSignal::new(None::<&'static str>);
    let touched = RwSignal::new(false);

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        value.set(input.value());
        touched.set(true);
        error.set(None);
    };

    let on_blur = move |_ev: web_sys::FocusEvent| {
        let text = value.get_untracked();
        error.set(
            validate_field(&text, "password", required)
                .or_else(|| validate_password(&text)),
        );
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                name=name
                type="password"
                required=required
                minlength=validate::MIN_PASSWORD_LEN.to_string()
                class:error=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=on_input
                on:blur=on_blur
            />
            {move || (with_meter && touched.get()).then(|| {
                let strength = PasswordStrength::evaluate(&value.get());
                view! {
                    <div class=format!("password-strength {}", strength.css_class())>
                        {strength.summary()}
                    </div>
                }
            })}
            {move || error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
        </div>
    }
}

/// Confirmation field checked against the primary password on every input.
#[component]
pub fn ConfirmPasswordInput(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    primary: Signal<String>,
) -> impl IntoView {
    let error = RwSignal::new(None::<&'static str>);

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        let text = input.value();
        error.set(validate_confirm(&text, &primary.get_untracked()));
        value.set(text);
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                name=name
                type="password"
                required=true
                class:error=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=on_input
            />
            {move || error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
        </div>
    }
}
