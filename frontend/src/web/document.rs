//! 浏览器 Document / History 封装
//!
//! 所有对 window.location、window.history 与 document.title 的操作集中在此。
//! 这些函数只在浏览器中调用；纯逻辑位于 `route` 与 `guard`。

use wasm_bindgen::JsValue;

/// 写入 History 的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// 新增历史记录（编程式导航、链接点击）
    Push,
    /// 替换当前记录（首次加载、前进后退、重定向链）
    Replace,
}

/// 获取当前浏览器完整路径（pathname + search + hash）
pub fn current_full_path() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    format!("{}{}{}", path, search, hash)
}

/// 设置文档标题
pub fn set_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// 写入 History 状态
pub fn write_history(mode: HistoryMode, full_path: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(full_path)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(full_path)),
    };
    if let Err(e) = result {
        log::warn!("[Router] History update for {} failed: {:?}", full_path, e);
    }
}
