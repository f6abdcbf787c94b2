//! This file provides the small fixed set of CSS color keywords Vermilion understands. It is not the
//! full CSS list of 148 names: only the basic keywords people actually type when asking about a
//! color, plus `transparent`.

use std::collections::HashMap;

use color::RGBColor;

lazy_static! {
    static ref NAMED_COLORS: HashMap<&'static str, RGBColor> = hashmap! {
        "white" => RGBColor::opaque(255, 255, 255),
        "black" => RGBColor::opaque(0, 0, 0),
        "red" => RGBColor::opaque(255, 0, 0),
        "green" => RGBColor::opaque(0, 128, 0),
        "blue" => RGBColor::opaque(0, 0, 255),
        "yellow" => RGBColor::opaque(255, 255, 0),
        "cyan" => RGBColor::opaque(0, 255, 255),
        "magenta" => RGBColor::opaque(255, 0, 255),
        "gray" => RGBColor::opaque(128, 128, 128),
        "grey" => RGBColor::opaque(128, 128, 128),
        "transparent" => RGBColor::with_alpha(0, 0, 0, 0),
    };
}

/// Looks up a lowercase color keyword. `transparent` is the only name with an alpha channel.
pub fn named_color(name: &str) -> Option<RGBColor> {
    NAMED_COLORS.get(name).cloned()
}
