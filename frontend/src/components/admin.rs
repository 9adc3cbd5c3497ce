//! 管理后台页面
//!
//! `AdminShell` 是 `/admin` 及其子路由共用的外壳，
//! 子页面只读取 Store；数据的获取与写入由外部 API 层负责。

use leptos::prelude::*;

use super::articles::StatusBanner;
use crate::auth::use_auth;
use crate::stores::article::use_article_store;
use crate::stores::video::use_video_store;
use crate::web::route::AppRoute;
use crate::web::router::{RouterLink, use_router};

/// 后台导航项
const NAV_ITEMS: &[(AppRoute, &str)] = &[
    (AppRoute::AdminArticles, "文章管理"),
    (AppRoute::AdminVideos, "视频管理"),
];

#[component]
pub fn AdminShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let user_label = move || {
        auth.state
            .with(|s| s.user.as_ref().map(|u| u.label().to_string()))
            .unwrap_or_else(|| "管理员".to_string())
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow">
                <div class="flex-1">
                    <RouterLink to="/admin" class="btn btn-ghost text-xl">"管理后台"</RouterLink>
                </div>
                <div class="flex-none gap-2">
                    <span class="text-sm">{user_label}</span>
                    <button class="btn btn-sm btn-outline" on:click=move |_| auth.logout()>
                        "退出登录"
                    </button>
                </div>
            </div>
            <div class="flex">
                <ul class="menu w-48 bg-base-100 min-h-[calc(100vh-4rem)]">
                    {NAV_ITEMS
                        .iter()
                        .map(|(page, label)| {
                            let page = *page;
                            let active = move || {
                                if router.current_route().with(|r| r.page()) == page {
                                    "active"
                                } else {
                                    ""
                                }
                            };
                            view! {
                                <li class=active>
                                    <RouterLink to=page.to_path()>{*label}</RouterLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <main class="flex-1 p-6">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let articles = use_article_store().state();
    let videos = use_video_store().state();

    view! {
        <div class="stats shadow">
            <div class="stat">
                <div class="stat-title">"文章"</div>
                <div class="stat-value">{move || articles.with(|s| s.articles.len())}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"视频"</div>
                <div class="stat-value">{move || videos.with(|s| s.videos.len())}</div>
            </div>
        </div>
    }
}

#[component]
pub fn AdminArticlesPage() -> impl IntoView {
    let state = use_article_store().state();

    view! {
        <h1 class="text-2xl font-bold mb-4">"文章管理"</h1>
        <StatusBanner
            loading=Signal::derive(move || state.with(|s| s.loading))
            error=Signal::derive(move || state.with(|s| s.error.clone()))
        />
        <table class="table bg-base-100">
            <thead>
                <tr>
                    <th>"标题"</th>
                    <th>"作者"</th>
                    <th>"发布时间"</th>
                    <th>"阅读量"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || state.get().articles
                    key=|article| article.id.clone()
                    children=|article| {
                        view! {
                            <tr>
                                <td>{article.title.clone()}</td>
                                <td>{article.author.clone()}</td>
                                <td>{article.published_at.format_date().unwrap_or_default()}</td>
                                <td>{article.views}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
pub fn AdminVideosPage() -> impl IntoView {
    let state = use_video_store().state();

    let progress = move || state.with(|s| s.upload_progress);

    view! {
        <h1 class="text-2xl font-bold mb-4">"视频管理"</h1>
        <StatusBanner
            loading=Signal::derive(move || state.with(|s| s.loading))
            error=Signal::derive(move || state.with(|s| s.error.clone()))
        />
        <Show when=move || { progress() > 0.0 }>
            <div class="mb-4">
                <span class="text-sm">{move || format!("上传进度 {:.0}%", progress())}</span>
                <progress class="progress progress-primary w-full" max="100" value=progress></progress>
            </div>
        </Show>
        <table class="table bg-base-100">
            <thead>
                <tr>
                    <th>"标题"</th>
                    <th>"时长"</th>
                    <th>"上传时间"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || state.get().videos
                    key=|video| video.id.clone()
                    children=|video| {
                        view! {
                            <tr>
                                <td>
                                    <a class="link" href=video.url.clone() target="_blank">
                                        {video.title.clone()}
                                    </a>
                                </td>
                                <td>{video.duration_label()}</td>
                                <td>{video.uploaded_at.format_datetime().unwrap_or_default()}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
