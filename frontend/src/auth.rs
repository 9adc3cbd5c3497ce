//! 认证模块
//!
//! 管理管理员令牌与用户信息，与路由系统解耦。
//! 令牌的权威副本保存在 LocalStorage，内存中的副本在创建时从中加载。
//! 路由服务通过注入的认证信号感知登出。

use leptos::prelude::*;
use techblog_shared::User;

use crate::config::AppConfig;
use crate::web::storage::{BrowserStorage, KeyValueStorage};

/// 令牌持久化
///
/// 写入失败只记录警告，内存状态照常更新。
#[derive(Debug, Clone)]
pub struct TokenStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> TokenStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// 读取持久化的令牌，不存在时为空字符串
    pub fn load(&self) -> String {
        self.storage.get(&self.key).unwrap_or_default()
    }

    pub fn save(&self, token: &str) {
        if let Err(e) = self.storage.set(&self.key, token) {
            log::warn!("[Auth] Failed to persist token: {}", e);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("[Auth] Failed to remove persisted token: {}", e);
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// 认证状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// 管理员令牌，空字符串表示未认证
    pub token: String,
    /// 当前用户（仅内存）
    pub user: Option<User>,
}

impl AuthState {
    /// 从持久化存储加载
    pub fn hydrate<S: KeyValueStorage>(tokens: &TokenStore<S>) -> Self {
        Self {
            token: tokens.load(),
            user: None,
        }
    }

    /// 令牌非空即视为已认证，不做任何校验
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn set_token<S: KeyValueStorage>(&mut self, token: String, tokens: &TokenStore<S>) {
        tokens.save(&token);
        self.token = token;
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    pub fn logout<S: KeyValueStorage>(&mut self, tokens: &TokenStore<S>) {
        self.token.clear();
        self.user = None;
        tokens.clear();
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
    tokens: StoredValue<TokenStore<BrowserStorage>>,
}

impl AuthContext {
    /// 创建认证上下文，并从 LocalStorage 加载令牌
    pub fn new(config: &AppConfig) -> Self {
        let tokens = TokenStore::new(BrowserStorage, config.token_key.clone());
        let (state, set_state) = signal(AuthState::hydrate(&tokens));
        Self {
            state,
            set_state,
            tokens: StoredValue::new(tokens),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(AuthState::is_authenticated))
    }

    pub fn set_token(&self, token: String) {
        self.tokens.with_value(|tokens| {
            self.set_state.update(|state| state.set_token(token, tokens));
        });
    }

    pub fn set_user(&self, user: Option<User>) {
        self.set_state.update(|state| state.set_user(user));
    }

    /// 注销并清除状态
    ///
    /// 导航由路由服务的认证状态监听自动处理。
    pub fn logout(&self) {
        self.tokens.with_value(|tokens| {
            self.set_state.update(|state| state.logout(tokens));
        });
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::storage::MemoryStorage;

    const KEY: &str = "admin_token";

    fn tokens(storage: MemoryStorage) -> TokenStore<MemoryStorage> {
        TokenStore::new(storage, KEY)
    }

    fn admin() -> User {
        User {
            id: "u1".into(),
            username: "admin".into(),
            display_name: None,
            avatar_url: None,
        }
    }

    #[test]
    fn hydrates_from_persisted_token() {
        let state = AuthState::hydrate(&tokens(MemoryStorage::with_item(KEY, "persisted")));
        assert_eq!(state.token, "persisted");
        assert!(state.is_authenticated());
        assert!(state.user.is_none());

        let state = AuthState::hydrate(&tokens(MemoryStorage::new()));
        assert_eq!(state.token, "");
        assert!(!state.is_authenticated());
    }

    #[test]
    fn set_token_updates_memory_and_storage() {
        let tokens = tokens(MemoryStorage::new());
        let mut state = AuthState::hydrate(&tokens);

        state.set_token("abc".into(), &tokens);

        assert!(state.is_authenticated());
        assert_eq!(tokens.storage().get(KEY).as_deref(), Some("abc"));
    }

    #[test]
    fn empty_token_is_unauthenticated() {
        let tokens = tokens(MemoryStorage::new());
        let mut state = AuthState::default();
        state.set_token(String::new(), &tokens);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn logout_clears_token_user_and_storage() {
        let tokens = tokens(MemoryStorage::new());
        let mut state = AuthState::default();
        state.set_token("abc".into(), &tokens);
        state.set_user(Some(admin()));

        state.logout(&tokens);

        assert!(!state.is_authenticated());
        assert!(state.user.is_none());
        assert!(!tokens.storage().contains(KEY));
    }

    #[test]
    fn user_is_never_persisted() {
        let tokens = tokens(MemoryStorage::new());
        let mut state = AuthState::default();
        state.set_user(Some(admin()));
        assert_eq!(state.user, Some(admin()));
        assert!(!tokens.storage().contains(KEY));
    }

    #[test]
    fn storage_failure_still_updates_memory() {
        let tokens = tokens(MemoryStorage::read_only());
        let mut state = AuthState::default();

        state.set_token("abc".into(), &tokens);
        assert!(state.is_authenticated());
        assert_eq!(tokens.storage().get(KEY), None);

        state.logout(&tokens);
        assert!(!state.is_authenticated());
    }
}
