use std::collections::HashMap;

use js_sys::{ArrayBuffer, Uint8Array};
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::SycarexError;

pub async fn http_post_request(
    url: &str,
    headers: &HashMap<String, String>,
    body: &str,
) -> Result<(String, u16), SycarexError> {
    info!("http_post_request: {}", url);
    let window = web_sys::window().ok_or("No window available")?;

    let request_init = RequestInit::new();
    request_init.set_method("POST");
    request_init.set_mode(RequestMode::Cors);
    request_init.set_body(&JsValue::from_str(body));

    let headers_map = Headers::new().map_err(SycarexError::Js)?;
    for (key, value) in headers.iter() {
        headers_map.set(key, value).map_err(SycarexError::Js)?;
    }
    request_init.set_headers(&headers_map);

    let request = Request::new_with_str_and_init(url, &request_init)
        .map_err(SycarexError::Js)?;
    // fetch rejects before a response exists only on transport failure
    let response_js = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            SycarexError::Request(
                e.as_string()
                    .unwrap_or_else(|| format!("fetch failed: {}", url)),
            )
        })?;
    let response: Response =
        response_js.dyn_into().map_err(SycarexError::Js)?;

    let status = response.status();
    let body_js = JsFuture::from(response.array_buffer().map_err(SycarexError::Js)?)
        .await
        .map_err(SycarexError::Js)?;
    let buffer: ArrayBuffer = body_js.dyn_into().map_err(SycarexError::Js)?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    let body = String::from_utf8_lossy(&bytes).to_string();
    Ok((body, status))
}
