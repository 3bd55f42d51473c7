//! Username/password login page.
//!
//! The page keeps a single `LoginForm` in a signal. Submission validates and
//! flips the loading flag synchronously, then the network half runs on a local
//! task and writes its result back into the same signal.

use auth::{LoginClient, LoginForm};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::login_config;
use crate::net::api::GlooTransport;
use crate::util::storage::BrowserStorage;

fn submit_label(is_loading: bool) -> &'static str {
    if is_loading { "Logging in..." } else { "Login" }
}

fn submit_class(is_loading: bool) -> &'static str {
    if is_loading {
        "login-button login-button--busy"
    } else {
        "login-button"
    }
}

/// Bind the browser adapters and a router `navigate` handle into a client.
fn login_client<F>(navigate: F) -> LoginClient<GlooTransport, BrowserStorage, impl Fn(&str)>
where
    F: Fn(&str, NavigateOptions),
{
    LoginClient::new(login_config(), GlooTransport, BrowserStorage, move |path: &str| {
        navigate(path, NavigateOptions::default());
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::new());
    let navigate = use_navigate();

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(Ok(credentials)) = form.try_update(LoginForm::begin_submit) else {
                return;
            };
            let client = login_client(navigate.clone());
            leptos::task::spawn_local(async move {
                let result = client.login(&credentials).await;
                form.update(|f| {
                    f.finish(result);
                });
            });
        }
    };

    let on_signup = move |_: leptos::ev::MouseEvent| {
        login_client(navigate.clone()).navigate_to_signup();
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <div class="login-field">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            class="login-input"
                            type="text"
                            required=true
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.username = value);
                            }
                        />
                    </div>
                    <div class="login-field">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            class="login-input"
                            type="password"
                            required=true
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = value);
                            }
                        />
                    </div>
                    <Show when=move || form.with(|f| f.error_message.is_some())>
                        <p class="login-error">{move || form.with(|f| f.error_message.unwrap_or_default())}</p>
                    </Show>
                    <div class="login-actions">
                        <button
                            type="submit"
                            class=move || submit_class(form.with(|f| f.is_loading))
                            disabled=move || form.with(|f| f.is_loading)
                        >
                            {move || submit_label(form.with(|f| f.is_loading))}
                        </button>
                        <button type="button" class="login-button login-button--secondary" on:click=on_signup>
                            "Sign Up"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
