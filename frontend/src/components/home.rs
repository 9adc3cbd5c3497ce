use leptos::prelude::*;

use crate::stores::article::use_article_store;
use crate::web::route::article_path;
use crate::web::router::RouterLink;

/// 首页展示的最新文章数量
const LATEST_COUNT: usize = 5;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_article_store().state();

    view! {
        <div class="hero min-h-[40vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-5xl font-bold">"科技博客"</h1>
                    <p class="text-base-content/70">"记录技术、分享实践"</p>
                    <RouterLink to="/articles" class="btn btn-primary">"浏览文章"</RouterLink>
                </div>
            </div>
        </div>
        <div class="container mx-auto max-w-3xl p-4">
            <h2 class="text-xl font-semibold mb-2">"最新文章"</h2>
            <ul class="menu bg-base-100 rounded-box">
                {move || {
                    state.with(|s| {
                        s.articles
                            .iter()
                            .take(LATEST_COUNT)
                            .map(|article| {
                                let title = article.title.clone();
                                view! {
                                    <li>
                                        <RouterLink to=article_path(&article.id)>
                                            {title}
                                        </RouterLink>
                                    </li>
                                }
                            })
                            .collect_view()
                    })
                }}
            </ul>
        </div>
    }
}
