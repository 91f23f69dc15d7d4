mod element;
mod fe51;

pub use element::FieldElement;
