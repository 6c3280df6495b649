//! # Code Page Tables
//!
//! Named code pages and their selector values for each dialect.
//!
//! | Dialect | Command | Hex |
//! |---------|---------|-----|
//! | Epson | ESC t n | 1B 74 n |
//! | Star | ESC GS t n | 1B 1D 74 n |
//!
//! Names follow the `PCxxx_REGION` / `WPCxxxx` convention used on receipt
//! printer configuration sheets. `SLOVENIA` selects the Central European
//! (Latin-2) page and is the default character set.

/// A static name → selector table for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct CodePageTable {
    entries: &'static [(&'static str, u8)],
}

impl CodePageTable {
    /// Selector value for a code page name (exact, case-sensitive match).
    pub fn get(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, n)| *n)
    }

    /// All names this table accepts, in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }
}

/// Epson ESC/POS code pages (ESC t n)
pub const EPSON: CodePageTable = CodePageTable {
    entries: &[
        ("PC437_USA", 0),
        ("KATAKANA", 1),
        ("PC850_MULTILINGUAL", 2),
        ("PC860_PORTUGUESE", 3),
        ("PC863_CANADIAN_FRENCH", 4),
        ("PC865_NORDIC", 5),
        ("PC851_GREEK", 11),
        ("PC853_TURKISH", 12),
        ("PC857_TURKISH", 13),
        ("PC737_GREEK", 14),
        ("ISO8859_7_GREEK", 15),
        ("WPC1252", 16),
        ("PC866_CYRILLIC2", 17),
        ("PC852_LATIN2", 18),
        ("SLOVENIA", 18),
        ("PC858_EURO", 19),
        ("WPC775_BALTIC_RIM", 33),
        ("PC855_CYRILLIC", 34),
        ("PC861_ICELANDIC", 35),
        ("PC862_HEBREW", 36),
        ("PC864_ARABIC", 37),
        ("PC869_GREEK", 38),
        ("ISO8859_2_LATIN2", 39),
        ("ISO8859_15_LATIN9", 40),
        ("PC1125_UKRANIAN", 44),
        ("WPC1250_LATIN2", 45),
        ("WPC1251_CYRILLIC", 46),
        ("WPC1253_GREEK", 47),
        ("WPC1254_TURKISH", 48),
        ("WPC1255_HEBREW", 49),
        ("WPC1256_ARABIC", 50),
        ("WPC1257_BALTIC_RIM", 51),
        ("WPC1258_VIETNAMESE", 52),
        ("KZ1048_KAZAKHSTAN", 53),
    ],
};

/// Star StarPRNT code pages (ESC GS t n)
pub const STAR: CodePageTable = CodePageTable {
    entries: &[
        ("PC437_USA", 1),
        ("KATAKANA", 2),
        ("PC858_EURO", 3),
        ("PC852_LATIN2", 4),
        ("SLOVENIA", 4),
        ("PC860_PORTUGUESE", 5),
        ("PC861_ICELANDIC", 6),
        ("PC863_CANADIAN_FRENCH", 7),
        ("PC865_NORDIC", 8),
        ("PC866_CYRILLIC2", 9),
        ("PC855_CYRILLIC", 10),
        ("PC857_TURKISH", 11),
        ("PC862_HEBREW", 12),
        ("PC864_ARABIC", 13),
        ("PC737_GREEK", 14),
        ("PC851_GREEK", 15),
        ("PC869_GREEK", 16),
        ("WPC1252", 32),
        ("WPC1250_LATIN2", 33),
        ("WPC1251_CYRILLIC", 34),
    ],
};
