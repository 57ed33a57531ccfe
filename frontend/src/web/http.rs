//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 [`HttpClient`] 接口。

use async_trait::async_trait;
use jokebox::error::{JokeError, JokeResult};
use jokebox::request::{HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_error(context: &str, value: JsValue) -> JokeError {
    JokeError::network(format!("{}: {:?}", context, value))
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> JokeResult<HttpResponse> {
        let headers = Headers::new().map_err(|e| js_error("create headers", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("set header", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| js_error("build request", e))?;

        let window = web_sys::window().ok_or_else(|| JokeError::network("no window object"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("fetch", e))?;
        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| js_error("response cast", e))?;

        let promise = response.text().map_err(|e| js_error("read body", e))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("read body", e))?;

        Ok(HttpResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
