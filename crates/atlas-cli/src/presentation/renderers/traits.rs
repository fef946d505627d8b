use anyhow::Result;
use serde::Serialize;

use crate::presentation::view_models::CreateView;

/// Turns a ViewModel into the exact bytes written to stdout.
pub trait Renderer {
    fn render<T>(&self, data: &T) -> Result<String>
    where
        T: Serialize + CreateView;
}
