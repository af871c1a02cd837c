//! Hexagon geometry and the mask-and-resize crop pipeline

/// Regular flat-top hexagon with containment and inscription math
pub mod hexagon;
/// Center cropping, page margins, alpha masking, and resizing
pub mod mask;

pub use hexagon::Hexagon;
pub use mask::hex_crop;
