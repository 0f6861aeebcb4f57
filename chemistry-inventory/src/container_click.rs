use crate::InventoryError;

/// A single click inside an open container window, decoded from the mode and
/// button pair clients send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub slot: Slot,
    pub click_type: ClickType,
}

impl Click {
    pub fn new(mode: u8, button: i8, slot: i16) -> Result<Self, InventoryError> {
        let invalid = || InventoryError::InvalidClick { mode, button };
        let click_type = match (mode, button) {
            (0, 0) => ClickType::MouseClick(MouseClick::Left),
            (0, 1) => ClickType::MouseClick(MouseClick::Right),
            // Both buttons do the same here
            (1, 0 | 1) => ClickType::ShiftClick,
            (2, 0..=8) => ClickType::KeyClick(KeyClick::Slot(button as u8)),
            (2, 40) => ClickType::KeyClick(KeyClick::Offhand),
            (3, _) => ClickType::CreativePickItem,
            (4, 0) => ClickType::DropType(DropType::SingleItem),
            (4, 1) => ClickType::DropType(DropType::FullStack),
            (5, _) => ClickType::MouseDrag,
            (6, _) => ClickType::DoubleClick,
            _ => return Err(invalid()),
        };
        Ok(Self {
            slot: Slot::from_raw(slot),
            click_type,
        })
    }

    pub const fn left(slot: usize) -> Self {
        Self {
            slot: Slot::Normal(slot),
            click_type: ClickType::MouseClick(MouseClick::Left),
        }
    }

    pub fn is_left_click(&self) -> bool {
        self.click_type == ClickType::MouseClick(MouseClick::Left)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickType {
    MouseClick(MouseClick),
    ShiftClick,
    KeyClick(KeyClick),
    CreativePickItem,
    DropType(DropType),
    MouseDrag,
    DoubleClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseClick {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClick {
    Slot(u8),
    Offhand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Normal(usize),
    OutsideInventory,
}

impl Slot {
    fn from_raw(slot: i16) -> Self {
        usize::try_from(slot).map_or(Self::OutsideInventory, Self::Normal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropType {
    SingleItem,
    FullStack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mouse_clicks() {
        let click = Click::new(0, 0, 3).unwrap();
        assert_eq!(click, Click::left(3));
        assert!(click.is_left_click());

        let click = Click::new(0, 1, 3).unwrap();
        assert_eq!(click.click_type, ClickType::MouseClick(MouseClick::Right));
        assert!(!click.is_left_click());
    }

    #[test]
    fn outside_clicks() {
        let click = Click::new(0, 0, -999).unwrap();
        assert_eq!(click.slot, Slot::OutsideInventory);
    }

    #[test]
    fn rejects_unknown_buttons() {
        assert_eq!(
            Click::new(0, 7, 3),
            Err(InventoryError::InvalidClick { mode: 0, button: 7 })
        );
        assert!(Click::new(9, 0, 3).is_err());
    }

    #[test]
    fn other_click_kinds() {
        assert_eq!(Click::new(1, 0, 4).unwrap().click_type, ClickType::ShiftClick);
        assert_eq!(
            Click::new(2, 40, 4).unwrap().click_type,
            ClickType::KeyClick(KeyClick::Offhand)
        );
        assert_eq!(
            Click::new(4, 1, 4).unwrap().click_type,
            ClickType::DropType(DropType::FullStack)
        );
    }
}
