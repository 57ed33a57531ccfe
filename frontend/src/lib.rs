//! JokeBox 前端应用
//!
//! 核心库 `jokebox` 负责全部状态与业务逻辑，前端只做渲染：
//! - `context`: 协调器与视图信号的上下文
//! - `web::outlet`: 按当前可见区块渲染页面
//! - `components`: UI 组件层

mod components {
    pub mod dashboard;
    pub mod login;
    pub mod profile;
    pub mod register;
}
mod context;

pub(crate) mod web {
    pub mod console;
    mod http;
    pub mod outlet;

    pub use http::FetchHttpClient;
}

use std::rc::Rc;

use jokebox::api::JokeApiGateway;
use jokebox::config::{self, AppConfig};
use jokebox::firebase::{FirebaseAuth, FirestoreStore};
use jokebox::memory::{MemoryAuth, MemoryStore};
use jokebox::{JokeBox, Section, ViewState};
use leptos::prelude::*;
use tracing::{info, warn};

use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::context::{AppContext, LeptosSpawner, use_app};
use crate::web::FetchHttpClient;
use crate::web::outlet::SectionOutlet;

pub use crate::web::console::init_tracing;

/// 构建期注入的配置 (`option_env!` 只接受字面量)
fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        config::KEY_JOKE_ENDPOINT => option_env!("JOKEBOX_JOKE_ENDPOINT"),
        config::KEY_FIREBASE_API_KEY => option_env!("JOKEBOX_FIREBASE_API_KEY"),
        config::KEY_FIREBASE_PROJECT_ID => option_env!("JOKEBOX_FIREBASE_PROJECT_ID"),
        config::KEY_FIREBASE_AUTH_URL => option_env!("JOKEBOX_FIREBASE_AUTH_URL"),
        config::KEY_FIREBASE_TOKEN_URL => option_env!("JOKEBOX_FIREBASE_TOKEN_URL"),
        config::KEY_FIRESTORE_URL => option_env!("JOKEBOX_FIRESTORE_URL"),
        _ => None,
    };
    value.map(str::to_string)
}

fn build_app(config: &AppConfig) -> JokeBox {
    let http = FetchHttpClient;
    let jokes = Rc::new(JokeApiGateway::new(http, config.joke_endpoint.clone()));
    let spawner = Rc::new(LeptosSpawner);

    match &config.firebase {
        Some(firebase) => {
            info!(project_id = %firebase.project_id, "using Firebase backend");
            let auth = Rc::new(FirebaseAuth::new(http, firebase.clone()));
            let store = Rc::new(FirestoreStore::new(http, auth.clone(), firebase.clone()));
            JokeBox::new(auth, store, jokes, spawner)
        }
        None => {
            warn!("no Firebase project configured, accounts and jokes live in memory");
            JokeBox::new(
                Rc::new(MemoryAuth::new()),
                Rc::new(MemoryStore::new()),
                jokes,
                spawner,
            )
        }
    }
}

/// 区块匹配函数
fn section_matcher(section: Section) -> AnyView {
    match section {
        Section::Login => view! { <LoginPage /> }.into_any(),
        Section::Register => view! { <RegisterPage /> }.into_any(),
        Section::Dashboard => view! { <DashboardPage /> }.into_any(),
        Section::Profile => view! { <ProfilePage /> }.into_any(),
    }
}

/// 需要用户确认的提示框
#[component]
fn NoticeModal() -> impl IntoView {
    let ctx = use_app();
    let notice = move || ctx.view.with(|v| v.notice.clone());

    view! {
        <Show when=move || notice().is_some()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <p class="py-4">{move || notice().unwrap_or_default()}</p>
                    <div class="modal-action">
                        <button class="btn btn-primary" on:click=move |_| ctx.app().acknowledge_notice()>
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取配置并装配协调器
    let config = AppConfig::from_lookup(build_time_var);
    let app = build_app(&config);

    // 2. 协调器的每次状态变化都写入视图信号
    let view_state = RwSignal::new(ViewState::default());
    app.subscribe(move |state| view_state.set(state.clone()));

    provide_context(AppContext::new(app.clone(), view_state));

    // 3. 开始监听认证状态
    app.start();

    view! {
        <SectionOutlet matcher=section_matcher />
        <NoticeModal />
    }
}
