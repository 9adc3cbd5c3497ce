use serde::{Deserialize, Serialize};

mod date;

pub use date::Timestamp;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 博客文章
///
/// 由外部 API 层获取后整体写入文章 Store，前端核心不做任何校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub published_at: Timestamp,
}

/// 视频条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub duration_secs: u32,
    #[serde(default)]
    pub uploaded_at: Timestamp,
}

impl Video {
    /// 时长格式化为 `mm:ss`，超过一小时为 `h:mm:ss`
    pub fn duration_label(&self) -> String {
        let secs = self.duration_secs;
        let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if h > 0 {
            format!("{}:{:02}:{:02}", h, m, s)
        } else {
            format!("{:02}:{:02}", m, s)
        }
    }
}

/// 管理员用户信息
///
/// 仅保存在内存中，从不持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    /// 界面显示用名称，未设置昵称时回退到用户名
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(duration_secs: u32) -> Video {
        Video {
            id: "v1".into(),
            title: "intro".into(),
            description: String::new(),
            url: "https://cdn.example.com/v1.mp4".into(),
            cover_url: None,
            duration_secs,
            uploaded_at: Timestamp::default(),
        }
    }

    #[test]
    fn article_deserializes_with_missing_optional_fields() {
        let json = r#"{"id":"42","title":"Rust 所有权"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, "42");
        assert!(article.tags.is_empty());
        assert!(article.cover_url.is_none());
    }

    #[test]
    fn published_at_is_plain_millis_on_the_wire() {
        let json = r#"{"id":"1","title":"t","published_at":1700000000000}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.published_at.as_millis(), 1_700_000_000_000);
    }

    #[test]
    fn video_duration_label() {
        assert_eq!(video(0).duration_label(), "00:00");
        assert_eq!(video(75).duration_label(), "01:15");
        assert_eq!(video(3725).duration_label(), "1:02:05");
    }

    #[test]
    fn user_label_prefers_display_name() {
        let mut user = User {
            id: "u1".into(),
            username: "admin".into(),
            display_name: None,
            avatar_url: None,
        };
        assert_eq!(user.label(), "admin");
        user.display_name = Some("站长".into());
        assert_eq!(user.label(), "站长");
    }
}
