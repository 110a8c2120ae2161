use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use super::{TranslateError, Translator};
use crate::languages::LanguagePair;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Translator backed by the public Google Translate web endpoint.
///
/// One blocking request per non-empty payload, separated by `delay`.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    delay: Duration,
}

impl GoogleTranslator {
    pub fn new() -> Result<Self, TranslateError> {
        Self::with_settings(DEFAULT_ENDPOINT, DEFAULT_DELAY)
    }

    pub fn with_settings(
        endpoint: impl Into<String>,
        delay: Duration,
    ) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .user_agent(concat!("bilingual-pdf/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            delay,
        })
    }

    fn translate_one(&self, text: &str, pair: &LanguagePair) -> Result<String, TranslateError> {
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", pair.source.as_str()),
                ("tl", pair.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?
            .error_for_status()?
            .text()?;
        parse_response(&body)
    }
}

impl Translator for GoogleTranslator {
    fn translate(
        &self,
        payloads: &[String],
        pair: &LanguagePair,
    ) -> Result<Vec<String>, TranslateError> {
        let mut results = Vec::with_capacity(payloads.len());
        let mut sent = 0usize;

        for (index, payload) in payloads.iter().enumerate() {
            if payload.is_empty() {
                results.push(String::new());
                continue;
            }
            if sent > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            log::info!("Translating block {}/{}", index + 1, payloads.len());

            let translated = self
                .translate_one(payload, pair)
                .map_err(|e| TranslateError::Block {
                    index,
                    source: Box::new(e),
                })?;
            results.push(translated);
            sent += 1;
        }

        log::info!("Translated {sent} of {} blocks", payloads.len());
        Ok(results)
    }
}

/// Extracts the translation from a `translate_a/single` response.
///
/// The body is a nested array whose first element lists the translated
/// segments; the translated text of each segment is its first element.
pub fn parse_response(body: &str) -> Result<String, TranslateError> {
    let value: Value = serde_json::from_str(body)?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::UnexpectedResponse("missing segment list".to_string()))?;

    let mut out = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            out.push_str(text);
        }
    }
    Ok(out)
}
