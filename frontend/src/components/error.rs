use crate::api::{ApiError, ErrorKind};
use leptos::*;

/// Banner for a failed request or a rejected form. Backend errors show the
/// status code so raw payloads stay recognisable.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .filter(|e| e.kind() == ErrorKind::Backend)
                        .map(|e| {
                            let detail = e
                                .details
                                .as_ref()
                                .and_then(|d| d.as_str().map(str::to_string));
                            view! {
                                <div class="text-xs opacity-75">
                                    {"Code: "}{e.code.clone()}
                                    {detail.map(|d| format!(" ({})", d))}
                                </div>
                            }
                        })
                }}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn backend_error_shows_code_and_detail() {
        let html = render_to_string(move || {
            let error = ApiError::from_response_body(
                400,
                r#"{"message":"Failed to import student marks (OBE Format)","error":"Row 4 has no index number"}"#,
            );
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Failed to import student marks (OBE Format)"));
        assert!(html.contains("Code: REQUEST_REJECTED"));
        assert!(html.contains("Row 4 has no index number"));
    }

    #[test]
    fn validation_error_hides_code() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::validation("Please select a batch")));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Please select a batch"));
        assert!(!html.contains("Code:"));
    }
}
