//! 科技博客前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `web::route`: 静态路由表与嵌套匹配（领域模型）
//! - `web::guard`: 导航守卫（纯逻辑）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth` / `stores`: 认证、文章、视频状态容器
//! - `components`: UI 组件层

pub mod auth;
pub mod config;
pub mod components {
    pub mod admin;
    pub mod articles;
    pub mod home;
    pub mod login;
}
pub mod stores {
    pub mod article;
    pub mod video;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，纯逻辑部分可在原生目标上测试。
pub mod web {
    pub mod document;
    pub mod guard;
    pub mod route;
    pub mod router;
    pub mod storage;
}

use leptos::prelude::*;

use crate::auth::AuthContext;
use crate::components::admin::{AdminArticlesPage, AdminHomePage, AdminShell, AdminVideosPage};
use crate::components::articles::{ArticleDetailPage, ArticlesPage};
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::config::AppConfig;
use crate::stores::article::ArticleStore;
use crate::stores::video::VideoStore;
use crate::web::route::{AppRoute, ResolvedRoute};
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 页面标识到视图工厂的映射；后台页面包裹在 `AdminShell` 中。
fn route_matcher(route: &ResolvedRoute) -> AnyView {
    match route.page() {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Articles => view! { <ArticlesPage /> }.into_any(),
        AppRoute::ArticleDetail => view! { <ArticleDetailPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Admin => view! { <AdminShell><AdminHomePage /></AdminShell> }.into_any(),
        AppRoute::AdminArticles => {
            view! { <AdminShell><AdminArticlesPage /></AdminShell> }.into_any()
        }
        AppRoute::AdminVideos => view! { <AdminShell><AdminVideosPage /></AdminShell> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    provide_context(config.clone());

    // 1. 创建认证上下文（从 LocalStorage 加载令牌）
    let auth_ctx = AuthContext::new(&config);
    provide_context(auth_ctx);

    // 2. 内容 Store，由根组件持有并注入
    provide_context(ArticleStore::new());
    provide_context(VideoStore::new());

    // 3. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated config=config>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
