use std::borrow::Cow;

use color::NamedColor;
use style::Style;

pub mod color;
pub mod style;

/// Represents a Text component
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextComponent<'a> {
    /// The actual text
    pub text: Cow<'a, str>,
    /// Style of the text
    pub style: Style,
    /// Extra text components
    pub extra: Vec<TextComponent<'a>>,
}

impl<'a> TextComponent<'a> {
    pub fn text(text: &'a str) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            extra: vec![],
        }
    }

    pub fn text_string(text: String) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            extra: vec![],
        }
    }

    pub fn add_child(mut self, child: TextComponent<'a>) -> Self {
        self.extra.push(child);
        self
    }

    pub fn color_named(mut self, color: NamedColor) -> Self {
        self.style.color = Some(color);
        self
    }

    /// The text of this component and all of its children, without any styling.
    pub fn to_plain(&self) -> String {
        let mut text = self.text.to_string();
        for child in &self.extra {
            text += &child.to_plain();
        }
        text
    }

    pub fn to_pretty_console(self) -> String {
        let style = self.style;
        let mut text = self.text.into_owned();
        if let Some(color) = style.color {
            text = color.console_color(&text).to_string();
        }
        for child in self.extra {
            text += &*child.to_pretty_console();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::color::NamedColor;
    use super::TextComponent;

    #[test]
    fn plain_text_includes_children() {
        let text = TextComponent::text("[")
            .color_named(NamedColor::DarkGray)
            .add_child(TextComponent::text("Chemistry").color_named(NamedColor::DarkPurple))
            .add_child(TextComponent::text("] "))
            .add_child(TextComponent::text_string("on cooldown".to_string()));
        assert_eq!(text.to_plain(), "[Chemistry] on cooldown");
    }

    #[test]
    fn uncolored_console_text_is_plain() {
        let text = TextComponent::text("Config file ").add_child(TextComponent::text("reloaded."));
        assert_eq!(text.to_pretty_console(), "Config file reloaded.");
    }
}
