use leptos::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}

/// Success/error banners driven by a [`MessageState`] signal.
#[component]
pub fn FormMessages(messages: RwSignal<MessageState>) -> impl IntoView {
    view! {
        {move || {
            let state = messages.get();
            view! {
                {state.success.map(|msg| view! { <crate::components::layout::SuccessMessage message=msg /> })}
                {state.error.map(|msg| view! { <crate::components::layout::ErrorMessage message=msg /> })}
            }
        }}
    }
}

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] readonly: MaybeSignal<bool>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div class="space-y-1">
            <label for=id.clone() class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder.unwrap_or_default()
                class="block w-full rounded-md border border-border px-3 py-2 text-sm text-fg bg-surface focus:outline-none focus:ring-2 focus:ring-action-primary-focus read-only:bg-surface-muted"
                prop:value=move || value.get()
                readonly=move || readonly.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_label_and_readonly_flag() {
        let html = render_to_string(|| {
            let value = create_rw_signal("SE101".to_string());
            view! {
                <TextField
                    id="module-id"
                    label="Module ID"
                    value=value
                    on_input=Callback::new(|_| {})
                    readonly=true
                />
            }
        });
        assert!(html.contains("Module ID"));
        assert!(html.contains("readonly"));
    }
}
