use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Invalid slot {0}")]
    InvalidSlot(usize),
    #[error("Invalid click: mode {mode}, button {button}")]
    InvalidClick { mode: u8, button: i8 },
    #[error("Brewing needs both an ingredient and a fuel item")]
    MissingInputs,
}
