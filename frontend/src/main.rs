use leptos::prelude::*;
use techblog_frontend::App;
use techblog_frontend::config::build_log_level;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();
    // 仅在重复初始化时失败，忽略即可
    let _ = console_log::init_with_level(build_log_level());
    mount_to_body(App);
}
