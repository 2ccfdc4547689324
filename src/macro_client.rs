//! HTTP adapter for the image-macro rendering service.

use anyhow::Result;
use log::{debug, info};
use serde::Serialize;

/// Form parameters for a macro render request
#[derive(Serialize)]
struct MacroRequest<'a> {
    image: &'a str,
    top: &'a str,
    bottom: &'a str,
}

/// Outcome of a macro render request that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Non-empty response body: an opaque generated-image token
    Image(String),
    /// The server answered with an empty body
    Empty,
}

/// Client for the macro rendering server and the image host.
///
/// Stateless between invocations; one POST per render, no retry, no timeout
/// beyond the transport default.
#[derive(Clone)]
pub struct MacroClient {
    macro_server: String,
    image_host: String,
    client: reqwest::Client,
}

impl MacroClient {
    pub fn new(macro_server: String, image_host: String) -> Self {
        MacroClient {
            macro_server,
            image_host,
            client: reqwest::Client::new(),
        }
    }

    /// Ask the macro server to composite the captions onto a template.
    ///
    /// The response body is the only signal: a non-empty body is the token of
    /// the generated image, an empty body means the render failed. Transport
    /// errors surface as `Err`.
    pub async fn render(&self, template_id: &str, top: &str, bottom: &str) -> Result<RenderOutcome> {
        info!(
            "Requesting macro render | template: {} | top: '{}' | bottom: '{}'",
            template_id, top, bottom
        );

        let response = self
            .client
            .post(self.macro_endpoint())
            .form(&MacroRequest {
                image: template_id,
                top,
                bottom,
            })
            .send()
            .await?;

        let body = response.text().await?;

        if body.is_empty() {
            debug!("Macro server returned an empty body");
            Ok(RenderOutcome::Empty)
        } else {
            debug!("Macro server returned token of {} bytes", body.len());
            Ok(RenderOutcome::Image(body))
        }
    }

    fn macro_endpoint(&self) -> String {
        format!("{}/macro", self.macro_server)
    }

    /// URL where the image host serves a generated image token.
    pub fn image_url(&self, token: &str) -> String {
        format!("{}/img/{}.jpeg", self.image_host, token)
    }
}
