//! 视频 Store

use leptos::prelude::*;
use techblog_shared::Video;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoState {
    pub videos: Vec<Video>,
    /// 上传进度，约定在 0..=100 之间，不做钳制
    pub upload_progress: f64,
    pub loading: bool,
    pub error: Option<String>,
}

impl VideoState {
    pub fn set_videos(&mut self, videos: Vec<Video>) {
        self.videos = videos;
    }

    pub fn set_upload_progress(&mut self, progress: f64) {
        self.upload_progress = progress;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

#[derive(Clone, Copy)]
pub struct VideoStore {
    state: RwSignal<VideoState>,
}

impl VideoStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(VideoState::default()),
        }
    }

    pub fn state(&self) -> ReadSignal<VideoState> {
        self.state.read_only()
    }

    pub fn set_videos(&self, videos: Vec<Video>) {
        self.state.update(|s| s.set_videos(videos));
    }

    pub fn set_upload_progress(&self, progress: f64) {
        self.state.update(|s| s.set_upload_progress(progress));
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.set_loading(loading));
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.update(|s| s.set_error(error));
    }
}

impl Default for VideoStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_video_store() -> VideoStore {
    use_context::<VideoStore>().expect("VideoStore should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use techblog_shared::Timestamp;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            url: format!("https://cdn.example.com/{}.mp4", id),
            cover_url: None,
            duration_secs: 60,
            uploaded_at: Timestamp::default(),
        }
    }

    #[test]
    fn defaults() {
        let state = VideoState::default();
        assert!(state.videos.is_empty());
        assert_eq!(state.upload_progress, 0.0);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn set_videos_replaces_list() {
        let mut state = VideoState::default();
        state.set_videos(vec![video("a"), video("b")]);
        state.set_videos(vec![video("c")]);
        assert_eq!(state.videos, vec![video("c")]);
    }

    #[test]
    fn upload_progress_is_stored_as_given() {
        let mut state = VideoState::default();
        state.set_upload_progress(42.5);
        assert_eq!(state.upload_progress, 42.5);

        state.set_upload_progress(120.0);
        assert_eq!(state.upload_progress, 120.0);
    }

    #[test]
    fn error_can_be_cleared_without_touching_loading() {
        let mut state = VideoState::default();
        state.set_loading(true);
        state.set_error(Some("上传失败".to_string()));
        state.set_error(None);
        assert!(state.loading);
        assert!(state.error.is_none());
    }
}
