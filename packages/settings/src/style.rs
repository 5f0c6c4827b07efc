// ABOUTME: Operator CSS injection into the live page
// ABOUTME: One tagged style block, replaced wholesale on every apply

use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use sitepanel_core::CUSTOM_CSS_BLOCK_ID;

/// Page surface that holds identifiable style blocks
pub trait StyleHost: Send + Sync {
    /// Remove every block tagged `id`; returns how many were removed
    fn remove_block(&self, id: &str) -> usize;

    fn insert_block(&self, id: &str, css: &str);
}

pub struct StyleInjector {
    host: Arc<dyn StyleHost>,
    block_id: String,
}

impl StyleInjector {
    pub fn new(host: Arc<dyn StyleHost>) -> Self {
        Self::with_block_id(host, CUSTOM_CSS_BLOCK_ID)
    }

    pub fn with_block_id(host: Arc<dyn StyleHost>, block_id: impl Into<String>) -> Self {
        Self {
            host,
            block_id: block_id.into(),
        }
    }

    pub fn block_id(&self) -> &str {
        &self.block_id
    }

    /// Replace the injected block with `css`; empty text only removes it
    pub fn apply(&self, css: &str) {
        let removed = self.host.remove_block(&self.block_id);
        if !css.is_empty() {
            self.host.insert_block(&self.block_id, css);
        }
        debug!(
            "Applied custom CSS ({} bytes, replaced {} block(s))",
            css.len(),
            removed
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlock {
    pub id: String,
    pub css: String,
}

/// In-process model of the document head's style blocks
#[derive(Debug, Default)]
pub struct HeadStyleHost {
    blocks: RwLock<Vec<StyleBlock>>,
}

impl HeadStyleHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> Vec<StyleBlock> {
        self.blocks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn block(&self, id: &str) -> Option<String> {
        self.blocks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|block| block.id == id)
            .map(|block| block.css.clone())
    }

    /// `<style>` markup for every block; `</` inside CSS cannot end the element
    pub fn render_html(&self) -> String {
        self.blocks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|block| {
                format!(
                    "<style id=\"{}\">{}</style>\n",
                    block.id.replace('"', "&quot;"),
                    block.css.replace("</", "<\\/")
                )
            })
            .collect()
    }
}

impl StyleHost for HeadStyleHost {
    fn remove_block(&self, id: &str) -> usize {
        let mut blocks = self.blocks.write().unwrap_or_else(PoisonError::into_inner);
        let before = blocks.len();
        blocks.retain(|block| block.id != id);
        before - blocks.len()
    }

    fn insert_block(&self, id: &str, css: &str) {
        self.blocks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(StyleBlock {
                id: id.to_string(),
                css: css.to_string(),
            });
    }
}
