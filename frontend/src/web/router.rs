//! 路由服务模块 - 核心引擎
//!
//! 实现"请求 -> 守卫 -> 标题 -> 处理 -> 加载"的导航流程。
//! 首次加载、编程式导航、链接点击与浏览器前进后退都经过同一个守卫。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::document::{self, HistoryMode};
use super::guard::settle;
use super::route::ResolvedRoute;
use super::storage::BrowserStorage;
use crate::config::AppConfig;

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 守卫读取 LocalStorage 中的令牌；注入的认证信号只用于感知登出。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<ResolvedRoute>,
    set_route: WriteSignal<ResolvedRoute>,
    /// 认证状态（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
    config: StoredValue<AppConfig>,
}

impl RouterService {
    /// 创建路由服务，并对当前地址执行一次守卫
    fn new(is_authenticated: Signal<bool>, config: AppConfig) -> Self {
        let (current_route, set_route) = signal(ResolvedRoute::default());
        let router = Self {
            current_route,
            set_route,
            is_authenticated,
            config: StoredValue::new(config),
        };
        router.navigate_with(&document::current_full_path(), HistoryMode::Replace);
        router
    }

    /// 获取当前路由信号（页面、匹配链、参数）
    pub fn current_route(&self) -> ReadSignal<ResolvedRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_with(path, HistoryMode::Push);
    }

    /// 以替换当前历史记录的方式导航
    pub fn replace(&self, path: &str) {
        self.navigate_with(path, HistoryMode::Replace);
    }

    fn navigate_with(&self, path: &str, mode: HistoryMode) {
        let settlement = self
            .config
            .with_value(|config| settle(path, config, &BrowserStorage));

        // 标题总是在认证判断之前写入
        for title in &settlement.titles {
            document::set_title(title);
        }

        match settlement.route {
            Some(route) => {
                document::write_history(mode, &route.full_path);
                self.set_route.set(route);
            }
            None => log::error!("[Router] Too many redirects while navigating to {}.", path),
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            router.navigate_with(&document::current_full_path(), HistoryMode::Replace);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 登出时若停留在受保护页面，重新执行守卫
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if !is_auth && route.requires_auth() {
                log::info!("[Router] Auth state changed: logged out, re-checking {}.", route.full_path);
                router.navigate_with(&route.full_path, HistoryMode::Push);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>, config: AppConfig) -> RouterService {
    let router = RouterService::new(is_authenticated, config);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    config: AppConfig,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, config);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(&ResolvedRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || router.current_route().with(matcher)
}

/// 站内链接
///
/// 普通左键点击走路由守卫；带修饰键或非左键点击交给浏览器处理。
#[component]
pub fn RouterLink(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
