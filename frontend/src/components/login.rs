use leptos::prelude::*;

use crate::auth::use_auth;
use crate::config::AppConfig;
use crate::web::guard::login_redirect_target;
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let config = use_context::<AppConfig>().unwrap_or_default();

    let (token, set_token) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = token.get().trim().to_string();
        if value.is_empty() {
            set_error_msg.set(Some("请输入访问令牌".to_string()));
            return;
        }
        set_error_msg.set(None);
        auth.set_token(value);

        let target = router
            .current_route()
            .with_untracked(|route| login_redirect_target(&config, route.query()));
        log::info!("[Login] Signed in, forwarding to {}.", target);
        router.replace(&target);
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"管理员登录"</h1>
                    <p class="text-base-content/70">"输入访问令牌进入管理后台"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {move || {
                            error_msg
                                .get()
                                .map(|msg| {
                                    view! {
                                        <div role="alert" class="alert alert-error text-sm py-2">
                                            <span>{msg}</span>
                                        </div>
                                    }
                                })
                        }}
                        <div class="form-control">
                            <label class="label" for="token">
                                <span class="label-text">"访问令牌"</span>
                            </label>
                            <input
                                id="token"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_token.set(event_target_value(&ev))
                                prop:value=token
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary">"登录"</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
