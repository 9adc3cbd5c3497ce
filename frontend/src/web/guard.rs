//! 导航守卫
//!
//! 每次导航（首次加载、编程式跳转、链接点击、浏览器前进后退）之前执行：
//! 先确定文档标题，再根据匹配链决定放行还是重定向到登录页。
//!
//! 守卫只检查令牌是否存在，不校验其有效性、过期时间或签名。
//! 这是已知的薄弱点，保持与登录流程的兼容，不要在这里悄悄加强。

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use super::route::{ResolvedRoute, split_full_path};
use super::storage::KeyValueStorage;
use crate::config::AppConfig;

/// 查询参数值的编码集合
///
/// `/ ? : @ = $ , ; ! ' ( ) * [ ] { } | ^` 等保持原样，
/// `& # +` 与空白、引号、尖括号、反斜杠、`%` 以及非 ASCII 字符被编码。
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'+')
    .add(b'#')
    .add(b'&');

/// 编码查询参数值，空格编码为 `+`
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE)
        .to_string()
        .replace("%20", "+")
}

/// 解码查询参数值，`+` 视为空格
pub fn decode_query_value(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// 在查询字符串（可带前导 `?`）中查找参数并解码
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| match pair.split_once('=') {
            Some((k, v)) => Some((k, v)),
            None if !pair.is_empty() => Some((pair, "")),
            None => None,
        })
        .find(|(k, _)| decode_query_value(k) == key)
        .map(|(_, v)| decode_query_value(v))
}

/// 守卫结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// 按原路径继续导航
    Proceed,
    /// 取消原导航，改为前往给定的完整路径
    Redirect(String),
}

/// 一次守卫执行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardDecision {
    /// 需要写入 `document.title` 的完整标题
    pub title: String,
    pub outcome: NavigationOutcome,
}

/// 单次导航允许的最大重定向次数
pub const MAX_REDIRECTS: usize = 8;

/// 登录页地址，携带原始完整路径
pub fn login_location(config: &AppConfig, original_full_path: &str) -> String {
    format!(
        "{}?{}={}",
        config.login_path,
        config.redirect_query_key,
        encode_query_value(original_full_path)
    )
}

/// **核心守卫逻辑**
///
/// 标题总是先于认证判断确定。匹配链中任一记录需要认证时读取持久化的令牌，
/// 缺失或为空则重定向到登录页；其余情况一律放行。不会失败。
pub fn resolve_navigation<S>(route: &ResolvedRoute, config: &AppConfig, storage: &S) -> GuardDecision
where
    S: KeyValueStorage + ?Sized,
{
    let title = config.document_title(route.title());

    if !route.requires_auth() {
        return GuardDecision {
            title,
            outcome: NavigationOutcome::Proceed,
        };
    }

    let has_token = storage
        .get(&config.token_key)
        .is_some_and(|token| !token.is_empty());

    let outcome = if has_token {
        NavigationOutcome::Proceed
    } else {
        NavigationOutcome::Redirect(login_location(config, &route.full_path))
    };

    GuardDecision { title, outcome }
}

/// 一次导航经过全部重定向后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// 按守卫执行顺序依次写入的标题
    pub titles: Vec<String>,
    /// 最终放行的路由；重定向超过上限时为 None
    pub route: Option<ResolvedRoute>,
}

/// 从目标路径开始反复执行守卫，直到放行或超过重定向上限
///
/// 每次重定向后对新地址重新匹配并再次守卫。
pub fn settle<S>(target: &str, config: &AppConfig, storage: &S) -> Settlement
where
    S: KeyValueStorage + ?Sized,
{
    let mut titles = Vec::new();
    let mut target = target.to_string();

    for _ in 0..=MAX_REDIRECTS {
        let route = ResolvedRoute::resolve(&target);
        let decision = resolve_navigation(&route, config, storage);
        titles.push(decision.title);

        match decision.outcome {
            NavigationOutcome::Proceed => {
                return Settlement {
                    titles,
                    route: Some(route),
                };
            }
            NavigationOutcome::Redirect(location) => {
                log::info!(
                    "[Router] Access to {} denied. Redirecting to {}.",
                    route.full_path,
                    location
                );
                target = location;
            }
        }
    }

    Settlement { titles, route: None }
}

/// 登录成功后的去向
///
/// 读取 `redirect` 参数；缺失、为空或不是站内绝对路径（必须以单个 `/` 开头）
/// 时回退到 `after_login_path`。
pub fn login_redirect_target(config: &AppConfig, query: &str) -> String {
    query_param(query, &config.redirect_query_key)
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
        .filter(|target| split_full_path(target).0 != config.login_path)
        .unwrap_or_else(|| config.after_login_path.clone())
}
