use super::color::{Gradient, Rgb};
use super::Theme;

pub const VERCEL: Theme = Theme::partner(
    "Vercel",
    Gradient::new(Rgb::hex(0x232323), Rgb::hex(0x1f1f1f)),
);

pub const RABBIT: Theme = Theme::partner(
    "Rabbit",
    Gradient::new(Rgb::hex(0xff6a00), Rgb::hex(0xd83c00)),
);

pub const SUPABASE: Theme = Theme::partner(
    "Supabase",
    Gradient::new(Rgb::hex(0x121212), Rgb::hex(0x3ecf8e)),
)
.hidden();

pub const CANDY: Theme = Theme::standard(
    "Candy",
    Gradient::new(Rgb::hex(0xa58efb), Rgb::hex(0xe9bff8)),
);

pub const CRIMSON: Theme = Theme::standard(
    "Crimson",
    Gradient::new(Rgb::hex(0xff6363), Rgb::hex(0x733434)),
);

pub const FALCON: Theme = Theme::standard(
    "Falcon",
    Gradient::new(Rgb::hex(0xbde3ec), Rgb::hex(0x363654)),
);

pub const MEADOW: Theme = Theme::standard(
    "Meadow",
    Gradient::new(Rgb::hex(0x59d499), Rgb::hex(0xa0872d)),
);

pub const MIDNIGHT: Theme = Theme::standard(
    "Midnight",
    Gradient::new(Rgb::hex(0x4cc8c8), Rgb::hex(0x202033)),
);

pub const RAINDROP: Theme = Theme::standard(
    "Raindrop",
    Gradient::new(Rgb::hex(0x8ec7fb), Rgb::hex(0x1c55aa)),
);

pub const SUNSET: Theme = Theme::standard(
    "Sunset",
    Gradient::new(Rgb::hex(0xffcf73), Rgb::hex(0xff7a2f)),
);

pub const MONO: Theme = Theme::standard(
    "Mono",
    Gradient::new(Rgb::hex(0x5a5a5a), Rgb::hex(0x1a1a1a)),
)
.hidden();

/// Every theme keyed by its stable identifier, in display order.
pub static THEMES: &[(&str, Theme)] = &[
    ("vercel", VERCEL),
    ("rabbit", RABBIT),
    ("supabase", SUPABASE),
    ("candy", CANDY),
    ("crimson", CRIMSON),
    ("falcon", FALCON),
    ("meadow", MEADOW),
    ("midnight", MIDNIGHT),
    ("raindrop", RAINDROP),
    ("sunset", SUNSET),
    ("mono", MONO),
];
