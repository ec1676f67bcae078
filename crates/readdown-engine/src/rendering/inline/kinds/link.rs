/// Link and image inline type with owned delimiter constants.
///
/// `[label](target)` is a link, `![label](target)` an image. The label may
/// not contain `]`, the target may not contain `)` and must be non-empty.
pub struct Link;

impl Link {
    pub const OPEN: &'static [u8] = b"[";
    pub const IMAGE_OPEN: &'static [u8] = b"![";
    pub const LABEL_CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';
}
