//! Page rendering via `minijinja`.
//!
//! The page template is compiled into the binary and registered once in a
//! `minijinja` [`Environment`]. Rendering is driven solely by the
//! [`UiState`]; the sprite list is derived from the evolution path at render
//! time.

use minijinja::Environment;
use pokevo_types::{EvolutionPath, UiState};
use serde::Serialize;

use crate::error::WebError;

/// Sprite repository the image locators are built from.
pub const DEFAULT_SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Template name; the `.html` suffix turns on HTML auto-escaping.
const INDEX_TEMPLATE_NAME: &str = "index.html";

/// The page template source.
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// One entry of the rendered sprite list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteView {
    /// Species name shown under the sprite.
    pub name: String,
    /// Image locator for the sprite.
    pub image_url: String,
}

/// Map each species of `path` to a sprite.
///
/// The identifier is taken from the species URL as-is and substituted into
/// `{sprite_base_url}/{id}.png`.
pub fn sprite_views(path: &EvolutionPath, sprite_base_url: &str) -> Vec<SpriteView> {
    let base = sprite_base_url.trim_end_matches('/');
    path.species()
        .iter()
        .map(|species| SpriteView {
            name: species.name.clone(),
            image_url: format!("{base}/{}.png", species.resource_id().unwrap_or_default()),
        })
        .collect()
}

/// Template context for the page.
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    status: &'static str,
    message: Option<&'a str>,
    sprites: Vec<SpriteView>,
}

impl<'a> PageContext<'a> {
    fn from_state(state: &'a UiState, sprite_base_url: &str) -> Self {
        match state {
            UiState::Idle => Self::empty("idle"),
            UiState::Loading => Self::empty("loading"),
            UiState::Error { message } => Self {
                status: "error",
                message: Some(message),
                sprites: Vec::new(),
            },
            UiState::Ready { path, .. } => Self {
                status: "ready",
                message: None,
                sprites: sprite_views(path, sprite_base_url),
            },
        }
    }

    const fn empty(status: &'static str) -> Self {
        Self {
            status,
            message: None,
            sprites: Vec::new(),
        }
    }
}

/// Renders the viewer page.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile the page template.
    pub fn new() -> Result<Self, WebError> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)
            .map_err(|e| WebError::Template(format!("failed to add index template: {e}")))?;
        Ok(Self { env })
    }

    /// Render the page for `state`.
    pub fn render(&self, state: &UiState, sprite_base_url: &str) -> Result<String, WebError> {
        let context = PageContext::from_state(state, sprite_base_url);
        self.env
            .get_template(INDEX_TEMPLATE_NAME)
            .map_err(|e| WebError::Template(format!("missing index template: {e}")))?
            .render(&context)
            .map_err(|e| WebError::Template(format!("index render failed: {e}")))
    }
}
