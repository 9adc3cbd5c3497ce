//! 文章 Store
//!
//! 纯容器：每个 setter 无条件替换对应字段，不排序、不去重、不合并。
//! 数据由外部 API 层获取后写入。

use leptos::prelude::*;
use techblog_shared::Article;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleState {
    pub articles: Vec<Article>,
    pub current_article: Option<Article>,
    pub loading: bool,
    /// 由外部写入的错误信息，核心从不解释其内容
    pub error: Option<String>,
}

impl ArticleState {
    pub fn set_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    pub fn set_current_article(&mut self, article: Option<Article>) {
        self.current_article = article;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// 详情页展示的文章（只读）
    ///
    /// `current_article` 与路由 id 一致（或没有 id）时优先使用，
    /// 否则在已加载的列表中查找。
    pub fn displayed_article(&self, id: Option<&str>) -> Option<&Article> {
        let Some(id) = id else {
            return self.current_article.as_ref();
        };
        self.current_article
            .as_ref()
            .filter(|a| a.id == id)
            .or_else(|| self.articles.iter().find(|a| a.id == id))
    }
}

/// 文章 Store，由应用根组件创建并注入 Context
#[derive(Clone, Copy)]
pub struct ArticleStore {
    state: RwSignal<ArticleState>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ArticleState::default()),
        }
    }

    /// 响应式只读访问
    pub fn state(&self) -> ReadSignal<ArticleState> {
        self.state.read_only()
    }

    pub fn set_articles(&self, articles: Vec<Article>) {
        self.state.update(|s| s.set_articles(articles));
    }

    pub fn set_current_article(&self, article: Option<Article>) {
        self.state.update(|s| s.set_current_article(article));
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.set_loading(loading));
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.update(|s| s.set_error(error));
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_article_store() -> ArticleStore {
    use_context::<ArticleStore>().expect("ArticleStore should be provided")
}
