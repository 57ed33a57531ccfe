//! 协调器上下文
//!
//! `JokeBox` 不是 `Send`，因此放在 `LocalStorage` 中；组件只通过
//! [`AppContext`] 读取视图信号并调用协调器动作。

use std::future::Future;

use futures::future::LocalBoxFuture;
use jokebox::{JokeBox, TaskSpawner, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Spawns coordinator work on the Leptos local executor.
pub struct LeptosSpawner;

impl TaskSpawner for LeptosSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }
}

#[derive(Clone, Copy)]
pub struct AppContext {
    app: StoredValue<JokeBox, LocalStorage>,
    /// 最近一次状态快照
    pub view: RwSignal<ViewState>,
}

impl AppContext {
    pub fn new(app: JokeBox, view: RwSignal<ViewState>) -> Self {
        Self {
            app: StoredValue::new_local(app),
            view,
        }
    }

    pub fn app(&self) -> JokeBox {
        self.app.get_value()
    }

    /// 在本地执行器上运行一个协调器动作
    pub fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(JokeBox) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.app()));
    }
}

/// 从 Context 获取协调器
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found in context. Ensure App is mounted.")
}
