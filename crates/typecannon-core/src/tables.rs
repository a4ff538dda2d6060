//! Built-in spawn tables.
//!
//! Entries are upper-case A–Z only; the input resolver compares them
//! character by character against typed keys.

/// Words drawn at level 1.
pub const WORD_LIST: &[&str] = &[
    "CAT", "DOG", "SUN", "MOON", "STAR", "TREE", "FISH", "BIRD", "BOOK", "RAIN",
    "SNOW", "WIND", "FIRE", "ROCK", "SAND", "SHIP", "BOAT", "KITE", "LAMP", "DOOR",
    "CAKE", "MILK", "FROG", "DUCK", "BEAR", "LION", "WOLF", "HAND", "FOOT", "NOSE",
    "JUMP", "PLAY", "SING", "BLUE", "PINK", "GOLD", "CODE", "GAME", "TYPE", "FAST",
    "HOUSE", "TRAIN", "PLANE", "CLOUD", "RIVER", "OCEAN", "GRASS", "FLOWER", "ROBOT", "ROCKET",
    "PLANET", "CANDY", "MUSIC", "DANCE", "SMILE", "HAPPY", "BRAVE", "QUICK", "ZEBRA", "TIGER",
];

/// Fruit drawn from level 2 onwards: (text, glyph).
pub const FRUIT_TABLE: &[(&str, &str)] = &[
    ("APPLE", "🍎"),
    ("BANANA", "🍌"),
    ("CHERRY", "🍒"),
    ("GRAPE", "🍇"),
    ("LEMON", "🍋"),
    ("MANGO", "🥭"),
    ("MELON", "🍈"),
    ("ORANGE", "🍊"),
    ("PEACH", "🍑"),
    ("PEAR", "🍐"),
    ("KIWI", "🥝"),
    ("COCONUT", "🥥"),
    ("STRAWBERRY", "🍓"),
    ("PINEAPPLE", "🍍"),
    ("WATERMELON", "🍉"),
];
