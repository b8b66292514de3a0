use super::model::Fighter;

const ROSTER: &[(&str, &str)] = &[
    ("Brass Golem", "  [=====]\n  |o   o|\n  | --- |\n  [_____]"),
    ("Mire Witch", "    /\\\n   /  \\\n  ( ^^ )\n   \\~~/"),
    ("Captain Gale", "  _____\n |_o_o_|\n   \\-/\n  /|||\\"),
    ("The Lantern", "   ___\n  (   )\n  | * |\n  (___)"),
    ("Vex & Volt", " (o.o)(o.o)\n  /|\\  /|\\\n  / \\  / \\"),
    ("Old Thornback", "  ^^^^^^\n ( -  - )\n  \\ ww /\n   ~~~~"),
    ("Sable Queen", "   .^.^.\n  ( o o )\n   \\ v /\n   /___\\"),
    ("Clockwork Bishop", "   _+_\n  (o o)\n  |12:|\n  |_6_|"),
];

/// Roster used when no roster file is configured or it cannot be read.
pub fn builtin() -> Vec<Fighter> {
    ROSTER
        .iter()
        .map(|(name, art)| Fighter::new(*name, *art))
        .collect()
}
