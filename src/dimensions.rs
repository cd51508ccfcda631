//! Measure the box a progress border is drawn around

use crate::host::HostElement;
use crate::render::defaults;
use crate::types::Dimensions;

/// Rendered size of `element`, with [`defaults::FALLBACK_SIZE`] substituted for
/// any side that is missing, zero, negative or not finite.
///
/// Never fails and never caches: each call reads the host again.
pub fn get_effective_dimensions<E: HostElement + ?Sized>(element: Option<&E>) -> Dimensions {
    let Some((width, height)) = element.and_then(|e| e.bounding_size()) else {
        return Dimensions::square(defaults::FALLBACK_SIZE);
    };

    Dimensions::new(usable_or_fallback(width), usable_or_fallback(height))
}

fn usable_or_fallback(side: f64) -> f64 {
    if side.is_finite() && side > 0.0 {
        side
    } else {
        defaults::FALLBACK_SIZE
    }
}
