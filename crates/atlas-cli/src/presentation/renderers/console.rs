use anyhow::Result;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CreateView, DisplayOptions};

pub struct ConsoleRenderer {
    json_mode: bool,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, options: DisplayOptions) -> Self {
        Self { json_mode, options }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, data: &T) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            let mut json = serde_json::to_string_pretty(data)?;
            json.push('\n');
            return Ok(json);
        }

        Ok(data.create_view(&self.options).to_string())
    }
}
