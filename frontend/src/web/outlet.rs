//! 区块出口组件
//!
//! 协调器保证任意时刻只有一个区块可见；这里只把当前区块映射为视图，
//! 不再做任何守卫或历史记录处理。

use jokebox::Section;
use leptos::prelude::*;

use crate::context::use_app;

/// 根据当前可见区块渲染对应的组件。
///
/// 仅在区块变化时重建视图，其余状态变化由各组件自行订阅。
#[component]
pub fn SectionOutlet(
    /// 区块匹配函数：接收当前区块，返回对应视图
    matcher: fn(Section) -> AnyView,
) -> impl IntoView {
    let ctx = use_app();
    let section = Memo::new(move |_| ctx.view.with(|v| v.section()));

    move || matcher(section.get())
}
