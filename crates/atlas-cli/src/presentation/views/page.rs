use std::fmt;

use owo_colors::OwoColorize;

use super::country::CountryListView;
use crate::presentation::view_models::{BodyViewModel, CreateView, DisplayOptions, PageViewModel};

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No data available";

impl CreateView for PageViewModel {
    fn create_view<'a>(&'a self, options: &DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(PageView::new(self, options.clone()))
    }
}

pub struct PageView<'a> {
    data: &'a PageViewModel,
    options: DisplayOptions,
}

impl<'a> PageView<'a> {
    pub fn new(data: &'a PageViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.options.enable_color {
            writeln!(f, "{}", self.data.title.bold().blue())?;
            writeln!(f, "{}", self.data.subtitle.dimmed())?;
        } else {
            writeln!(f, "{}", self.data.title)?;
            writeln!(f, "{}", self.data.subtitle)?;
        }
        writeln!(f)
    }

    fn render_alert(&self, f: &mut fmt::Formatter, text: String) -> fmt::Result {
        if self.options.enable_color {
            writeln!(f, "{}", text.red().bold())
        } else {
            writeln!(f, "{}", text)
        }
    }
}

impl<'a> fmt::Display for PageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // The boundary replaces the whole page, header included.
        if let BodyViewModel::Fault { description } = &self.data.body {
            return self.render_alert(f, format!("Something went wrong: {}", description));
        }

        self.render_header(f)?;

        match &self.data.body {
            BodyViewModel::Loading => writeln!(f, "{}", LOADING_TEXT),
            BodyViewModel::Failed { message } => self.render_alert(f, format!("Error: {}", message)),
            BodyViewModel::Empty => writeln!(f, "{}", EMPTY_TEXT),
            BodyViewModel::Ready(list) => {
                write!(f, "{}", CountryListView::new(list, self.options.clone()))
            }
            BodyViewModel::Fault { .. } => Ok(()),
        }
    }
}
