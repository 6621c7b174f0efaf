use crate::core::data::colour::Colour;

/// Turns one computed value into a colour. Total over its input domain.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
