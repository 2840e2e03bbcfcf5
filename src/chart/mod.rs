/// Chart geometry and behavior, independent of any rendering surface:
/// layout constants, linear scales, the animated axis transition, and
/// tooltip/label text.
pub mod layout;
pub mod scale;
pub mod tooltip;
pub mod transition;
