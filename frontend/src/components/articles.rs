use leptos::prelude::*;
use techblog_shared::Article;

use crate::stores::article::use_article_store;
use crate::web::route::article_path;
use crate::web::router::{RouterLink, use_router};

/// 加载中 / 错误提示，两者互不排斥
#[component]
pub fn StatusBanner(loading: Signal<bool>, error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="flex justify-center py-6">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        </Show>
        {move || {
            error
                .get()
                .map(|msg| {
                    view! {
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{msg}</span>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn ArticleCard(article: Article) -> impl IntoView {
    let date = article.published_at.format_date().unwrap_or_default();
    view! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <h2 class="card-title">
                    <RouterLink to=article_path(&article.id) class="link link-hover">
                        {article.title.clone()}
                    </RouterLink>
                </h2>
                <p class="text-base-content/70">{article.summary.clone()}</p>
                <div class="flex gap-2 text-xs text-base-content/50">
                    <span>{article.author.clone()}</span>
                    <span>{date}</span>
                    <span>{format!("{} 次阅读", article.views)}</span>
                </div>
                <div class="flex flex-wrap gap-1">
                    {article
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="badge badge-outline">{tag.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let store = use_article_store();
    let state = store.state();

    view! {
        <div class="container mx-auto max-w-3xl p-4 space-y-4">
            <h1 class="text-3xl font-bold">"文章列表"</h1>
            <StatusBanner
                loading=Signal::derive(move || state.with(|s| s.loading))
                error=Signal::derive(move || state.with(|s| s.error.clone()))
            />
            <Show
                when=move || state.with(|s| !s.articles.is_empty())
                fallback=move || {
                    view! {
                        <Show when=move || !state.with(|s| s.loading)>
                            <p class="text-base-content/60">"暂无文章"</p>
                        </Show>
                    }
                }
            >
                <div class="space-y-4">
                    <For
                        each=move || state.get().articles
                        key=|article| article.id.clone()
                        children=|article| view! { <ArticleCard article=article /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    let store = use_article_store();
    let state = store.state();
    let router = use_router();

    // 只读派生，不回写 Store
    let displayed = Memo::new(move |_| {
        let id = router
            .current_route()
            .with(|route| route.param("id").map(str::to_string));
        state.with(|s| s.displayed_article(id.as_deref()).cloned())
    });

    view! {
        <div class="container mx-auto max-w-3xl p-4 space-y-4">
            <RouterLink to="/articles" class="link link-primary">"← 返回列表"</RouterLink>
            <StatusBanner
                loading=Signal::derive(move || state.with(|s| s.loading))
                error=Signal::derive(move || state.with(|s| s.error.clone()))
            />
            {move || match displayed.get() {
                Some(article) => {
                    let date = article.published_at.format_datetime().unwrap_or_default();
                    view! {
                        <article class="prose max-w-none">
                            <h1>{article.title}</h1>
                            <p class="text-sm text-base-content/60">
                                {format!("{} · {}", article.author, date)}
                            </p>
                            <div class="whitespace-pre-wrap">{article.content}</div>
                        </article>
                    }
                    .into_any()
                }
                None => view! { <p class="text-base-content/60">"文章不存在或尚未加载"</p> }.into_any(),
            }}
        </div>
    }
}
