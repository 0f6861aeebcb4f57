use super::color::NamedColor;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Changes the color to render the content
    pub color: Option<NamedColor>,
}
