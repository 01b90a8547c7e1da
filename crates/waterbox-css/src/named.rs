use crate::Rgba;

#[rustfmt::skip]
const NAMED: &[(&str, [u8; 3])] = &[
    ("black",     [0, 0, 0]),
    ("white",     [255, 255, 255]),
    ("gray",      [128, 128, 128]),
    ("grey",      [128, 128, 128]),
    ("silver",    [192, 192, 192]),
    ("lightgray", [211, 211, 211]),
    ("slategray", [112, 128, 144]),
    ("red",       [255, 0, 0]),
    ("maroon",    [128, 0, 0]),
    ("orange",    [255, 165, 0]),
    ("yellow",    [255, 255, 0]),
    ("olive",     [128, 128, 0]),
    ("lime",      [0, 255, 0]),
    ("green",     [0, 128, 0]),
    ("teal",      [0, 128, 128]),
    ("aqua",      [0, 255, 255]),
    ("cyan",      [0, 255, 255]),
    ("blue",      [0, 0, 255]),
    ("navy",      [0, 0, 128]),
    ("steelblue", [70, 130, 180]),
    ("purple",    [128, 0, 128]),
    ("fuchsia",   [255, 0, 255]),
    ("magenta",   [255, 0, 255]),
];

/// Looks up a CSS color keyword. `name` must already be lowercase.
pub(crate) fn lookup(name: &str) -> Option<Rgba> {
    if name == "transparent" {
        return Some(Rgba::TRANSPARENT);
    }
    NAMED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, [r, g, b])| Rgba::new(r, g, b, 255))
}
