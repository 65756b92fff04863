//! Art Institute of Chicago API連携（ブラウザのfetch）

use artwork_picker_common::{
    page_url, parse_page_response, ArtworkPage, Error, PageSource, Result, DEFAULT_BASE_URL,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// fetch APIで作品ページを取得する取得元
#[derive(Clone, Debug)]
pub struct WebArtworkSource {
    base_url: String,
}

impl Default for WebArtworkSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl PageSource for WebArtworkSource {
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage> {
        let body = fetch_text(&page_url(&self.base_url, page)).await?;
        parse_page_response(&body)
    }
}

/// GETして本文を文字列で返す（2xx以外はStatusエラー）
async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Http("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    text.as_string()
        .ok_or_else(|| Error::Parse("response body is not a string".into()))
}

fn js_error(value: JsValue) -> Error {
    Error::Http(format!("{:?}", value))
}

/// 診断メッセージをブラウザのコンソールへ
pub fn report_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
