//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的静态路由表、嵌套匹配规则及每条路由的属性。

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::config::LOGIN_PATH;

/// 路径段参数的编码集合：段分隔符、查询与锚点标记、`%` 以及空白引号尖括号
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// 未匹配任何路由时使用的页面标题
pub const NOT_FOUND_TITLE: &str = "页面未找到";

/// 应用页面标识
///
/// 路由表把 URL 映射到这里的某个页面，`RouterOutlet` 再把页面映射为视图。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Articles,
    /// 文章详情，`:id` 参数见 [`ResolvedRoute::param`]
    ArticleDetail,
    Login,
    /// 管理后台外壳 (需要认证)
    Admin,
    AdminArticles,
    AdminVideos,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为页面标识
    pub fn from_path(path: &str) -> Self {
        ResolvedRoute::resolve(path).page()
    }

    /// 获取页面对应的 URL path
    ///
    /// 文章详情返回路由模式 `/article/:id`，具体链接请使用 [`article_path`]。
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Articles => "/articles",
            Self::ArticleDetail => "/article/:id",
            Self::Login => LOGIN_PATH,
            Self::Admin => "/admin",
            Self::AdminArticles => "/admin/articles",
            Self::AdminVideos => "/admin/videos",
            Self::NotFound => "/404",
        }
    }
}

/// 文章详情页路径，id 按路径段编码
pub fn article_path(id: &str) -> String {
    format!("/article/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// 路由记录
///
/// 顶层记录的 `path` 以 `/` 开头，子路由的 `path` 相对父路由。
/// `:name` 段匹配恰好一个非空路径段。
#[derive(Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub page: AppRoute,
    pub title: &'static str,
    pub requires_auth: bool,
    pub children: &'static [RouteRecord],
}

const ADMIN_CHILDREN: &[RouteRecord] = &[
    RouteRecord {
        path: "articles",
        name: "AdminArticles",
        page: AppRoute::AdminArticles,
        title: "文章管理",
        requires_auth: false,
        children: &[],
    },
    RouteRecord {
        path: "videos",
        name: "AdminVideos",
        page: AppRoute::AdminVideos,
        title: "视频管理",
        requires_auth: false,
        children: &[],
    },
];

/// 静态路由表
///
/// 顺序决定匹配优先级：`/admin/login` 必须排在 `/admin` 之前。
pub static ROUTES: &[RouteRecord] = &[
    RouteRecord {
        path: "/",
        name: "Home",
        page: AppRoute::Home,
        title: "首页",
        requires_auth: false,
        children: &[],
    },
    RouteRecord {
        path: "/articles",
        name: "Articles",
        page: AppRoute::Articles,
        title: "文章列表",
        requires_auth: false,
        children: &[],
    },
    RouteRecord {
        path: "/article/:id",
        name: "ArticleDetail",
        page: AppRoute::ArticleDetail,
        title: "文章详情",
        requires_auth: false,
        children: &[],
    },
    RouteRecord {
        path: LOGIN_PATH,
        name: "Login",
        page: AppRoute::Login,
        title: "管理员登录",
        requires_auth: false,
        children: &[],
    },
    RouteRecord {
        path: "/admin",
        name: "Admin",
        page: AppRoute::Admin,
        title: "管理后台",
        requires_auth: true,
        children: ADMIN_CHILDREN,
    },
];

/// 将完整路径拆分为 (path, query, hash)
///
/// query 不含前导 `?`，hash 不含前导 `#`。
pub fn split_full_path(full_path: &str) -> (&str, &str, &str) {
    let (before_hash, hash) = full_path.split_once('#').unwrap_or((full_path, ""));
    let (path, query) = before_hash.split_once('?').unwrap_or((before_hash, ""));
    (path, query, hash)
}

/// 一次导航请求的解析结果：目标完整路径 + 从根到叶的匹配链
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub full_path: String,
    pub matched: Vec<&'static RouteRecord>,
    pub params: Vec<(&'static str, String)>,
}

impl Default for ResolvedRoute {
    fn default() -> Self {
        Self::resolve("/")
    }
}

impl ResolvedRoute {
    /// 在静态路由表中解析完整路径
    pub fn resolve(full_path: &str) -> Self {
        let (path, _, _) = split_full_path(full_path);
        let mut matched = Vec::new();
        let mut params = Vec::new();

        if let Some(segments) = path_segments(path) {
            match_records(ROUTES, &segments, &mut matched, &mut params);
        }

        Self {
            full_path: full_path.to_string(),
            matched,
            params,
        }
    }

    /// 叶子路由记录
    pub fn leaf(&self) -> Option<&'static RouteRecord> {
        self.matched.last().copied()
    }

    pub fn page(&self) -> AppRoute {
        self.leaf().map_or(AppRoute::NotFound, |r| r.page)
    }

    pub fn title(&self) -> &'static str {
        self.leaf().map_or(NOT_FOUND_TITLE, |r| r.title)
    }

    /// 匹配链中任一记录需要认证
    pub fn requires_auth(&self) -> bool {
        self.matched.iter().any(|r| r.requires_auth)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn query(&self) -> &str {
        split_full_path(&self.full_path).1
    }
}

/// 拆分路径段
///
/// 路径必须以 `/` 开头；允许一个尾随 `/`，其余空段视为不匹配。
fn path_segments(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return Some(Vec::new());
    }
    let segments: Vec<&str> = rest.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some(segments)
}

fn match_records(
    records: &'static [RouteRecord],
    segments: &[&str],
    matched: &mut Vec<&'static RouteRecord>,
    params: &mut Vec<(&'static str, String)>,
) -> bool {
    for record in records {
        let pattern: Vec<&'static str> =
            record.path.split('/').filter(|s| !s.is_empty()).collect();
        if pattern.len() > segments.len() {
            continue;
        }

        let mut captured = Vec::new();
        let all_match = pattern.iter().copied().zip(segments.iter().copied()).all(|(pat, seg)| {
            match pat.strip_prefix(':') {
                Some(name) => {
                    captured.push((name, percent_decode_str(seg).decode_utf8_lossy().into_owned()));
                    true
                }
                None => pat.eq_ignore_ascii_case(seg),
            }
        });
        if !all_match {
            continue;
        }

        let rest = &segments[pattern.len()..];
        if rest.is_empty() {
            matched.push(record);
            params.extend(captured);
            return true;
        }

        if !record.children.is_empty() {
            let mark = (matched.len(), params.len());
            matched.push(record);
            params.extend(captured);
            if match_records(record.children, rest, matched, params) {
                return true;
            }
            matched.truncate(mark.0);
            params.truncate(mark.1);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(route: &ResolvedRoute) -> Vec<&'static str> {
        route.matched.iter().map(|r| r.name).collect()
    }

    #[test]
    fn resolves_public_pages() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/articles"), AppRoute::Articles);
        assert_eq!(AppRoute::from_path("/admin/login"), AppRoute::Login);
    }

    #[test]
    fn nested_admin_routes_carry_parent_in_chain() {
        let route = ResolvedRoute::resolve("/admin/videos");
        assert_eq!(names(&route), vec!["Admin", "AdminVideos"]);
        assert_eq!(route.page(), AppRoute::AdminVideos);
        assert_eq!(route.title(), "视频管理");
        assert!(route.requires_auth());

        let shell = ResolvedRoute::resolve("/admin");
        assert_eq!(names(&shell), vec!["Admin"]);
        assert_eq!(shell.title(), "管理后台");
    }

    #[test]
    fn login_is_not_an_admin_child() {
        let route = ResolvedRoute::resolve("/admin/login");
        assert_eq!(names(&route), vec!["Login"]);
        assert!(!route.requires_auth());
    }

    #[test]
    fn article_id_is_extracted_and_decoded() {
        let route = ResolvedRoute::resolve("/article/rust%20async?from=home");
        assert_eq!(route.page(), AppRoute::ArticleDetail);
        assert_eq!(route.param("id"), Some("rust async"));
        assert_eq!(route.query(), "from=home");
    }

    #[test]
    fn article_path_round_trips_through_matching() {
        for id in ["42", "a/b", "x#y", "q?1", "50%off", "rust async", "文章", "%2F"] {
            let path = article_path(id);
            let route = ResolvedRoute::resolve(&path);
            assert_eq!(route.page(), AppRoute::ArticleDetail, "path {}", path);
            assert_eq!(route.param("id"), Some(id), "path {}", path);
        }
        assert_eq!(article_path("a/b"), "/article/a%2Fb");
    }

    #[test]
    fn to_path_of_static_pages_resolves_back() {
        for page in [
            AppRoute::Home,
            AppRoute::Articles,
            AppRoute::Login,
            AppRoute::Admin,
            AppRoute::AdminArticles,
            AppRoute::AdminVideos,
        ] {
            assert_eq!(AppRoute::from_path(page.to_path()), page);
        }
        assert_eq!(AppRoute::ArticleDetail.to_path(), "/article/:id");
    }

    #[test]
    fn login_route_uses_configured_login_path() {
        let config = crate::config::AppConfig::default();
        assert_eq!(AppRoute::from_path(&config.login_path), AppRoute::Login);
    }

    #[test]
    fn article_detail_requires_exactly_one_segment() {
        assert_eq!(AppRoute::from_path("/article"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/article/1/comments"), AppRoute::NotFound);
    }

    #[test]
    fn trailing_slash_and_case_are_tolerated() {
        assert_eq!(AppRoute::from_path("/articles/"), AppRoute::Articles);
        assert_eq!(AppRoute::from_path("/Admin/Videos"), AppRoute::AdminVideos);
        assert_eq!(AppRoute::from_path("/admin//videos"), AppRoute::NotFound);
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        let route = ResolvedRoute::resolve("/admin/settings");
        assert!(route.matched.is_empty());
        assert_eq!(route.page(), AppRoute::NotFound);
        assert_eq!(route.title(), NOT_FOUND_TITLE);
        assert!(!route.requires_auth());
        assert_eq!(AppRoute::from_path("articles"), AppRoute::NotFound);
    }

    #[test]
    fn split_full_path_separates_query_and_hash() {
        assert_eq!(
            split_full_path("/admin/videos?page=2#top"),
            ("/admin/videos", "page=2", "top")
        );
        assert_eq!(split_full_path("/a#x?y"), ("/a", "", "x?y"));
    }
}
