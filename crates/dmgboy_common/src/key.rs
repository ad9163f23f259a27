/// Frontend-neutral keyboard keys.
///
/// Only the keys that some machine actually maps are listed; everything else
/// arrives as `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Z,
    X,
    Enter,
    Backspace,
    Escape,
    None,
}
