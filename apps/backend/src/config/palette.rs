/// Colors every color wheel starts with, in insertion order.
///
/// Seeded entries are not removable. Values are in canonical `#rrggbb` form.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#000000", // black
    "#ffffff", // white
    "#ff0000", // red
    "#0000ff", // blue
    "#ffff00", // yellow
    "#ffa500", // orange
    "#008000", // green
    "#800080", // purple
];
