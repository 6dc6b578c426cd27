use nutype::nutype;

pub const MAX_ALIAS_LENGTH: usize = 256;

/// A lookup key that resolves to exactly one entry.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_ALIAS_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
    )
)]
pub struct Alias(String);
