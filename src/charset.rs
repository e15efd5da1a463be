//! Character classes and their fixed alphabets.
//!
//! The class-to-alphabet mapping is a constant table. Every class has a
//! canonical position (lowercase, uppercase, digits, special) which drives
//! both the prompt order in the shell and the layout of the combined
//! alphabet handed to the generator.

use std::fmt;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A named category of characters with a fixed ASCII alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    /// All classes in canonical order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// The fixed alphabet for this class.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lowercase => "lowercase letters",
            CharClass::Uppercase => "uppercase letters",
            CharClass::Digit => "digits",
            CharClass::Special => "special characters",
        };
        f.write_str(name)
    }
}

/// A subset of the four character classes.
///
/// Iteration always yields classes in canonical order, no matter the order
/// they were inserted in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharClasses(u8);

impl CharClasses {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        CharClass::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Concatenation of the selected alphabets in canonical order.
    pub fn combined_alphabet(&self) -> Vec<u8> {
        self.iter().flat_map(|c| c.alphabet().iter().copied()).collect()
    }
}

impl FromIterator<CharClass> for CharClasses {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = CharClasses::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}
