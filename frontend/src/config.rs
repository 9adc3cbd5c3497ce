//! 应用配置
//!
//! CSR 产物运行在浏览器中，没有运行时环境变量，
//! 可覆盖项通过构建时环境变量 (`option_env!`) 注入。

/// 站点名称，拼接在文档标题末尾
pub const DEFAULT_SITE_NAME: &str = "科技博客";
/// LocalStorage 中保存管理员令牌的键
pub const DEFAULT_TOKEN_KEY: &str = "admin_token";
/// 登录页路径
pub const LOGIN_PATH: &str = "/admin/login";
/// 登录重定向携带原始路径的查询参数名
pub const REDIRECT_QUERY_KEY: &str = "redirect";
/// 登录成功后没有 `redirect` 参数时的默认去向
pub const DEFAULT_AFTER_LOGIN_PATH: &str = "/admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub site_name: String,
    pub token_key: String,
    pub login_path: String,
    pub redirect_query_key: String,
    pub after_login_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            login_path: LOGIN_PATH.to_string(),
            redirect_query_key: REDIRECT_QUERY_KEY.to_string(),
            after_login_path: DEFAULT_AFTER_LOGIN_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// 读取构建时覆盖项 (`TECHBLOG_SITE_NAME`, `TECHBLOG_TOKEN_KEY`)
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("TECHBLOG_SITE_NAME"),
            option_env!("TECHBLOG_TOKEN_KEY"),
        )
    }

    fn with_overrides(site_name: Option<&str>, token_key: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(name) = site_name.map(str::trim).filter(|s| !s.is_empty()) {
            config.site_name = name.to_string();
        }
        if let Some(key) = token_key.map(str::trim).filter(|s| !s.is_empty()) {
            config.token_key = key.to_string();
        }
        config
    }

    /// 文档标题：`<页面标题> - <站点名>`
    pub fn document_title(&self, page_title: &str) -> String {
        format!("{} - {}", page_title, self.site_name)
    }
}

/// 构建时日志级别 (`TECHBLOG_LOG_LEVEL`)，无法解析时为 Info
pub fn build_log_level() -> log::Level {
    option_env!("TECHBLOG_LOG_LEVEL")
        .and_then(|s| s.parse().ok())
        .unwrap_or(log::Level::Info)
}
