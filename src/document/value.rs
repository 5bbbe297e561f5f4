//! Conversions between stored text and typed values
//!
//! Values are always stored as raw text. A type becomes readable and writable
//! through a document by implementing [`IniValue`], which is implemented for
//! `String`, `i32`, `i64`, `f32`, `f64` and `bool`.

/// Stored strings that read back as `true`. Matching is exact and case-sensitive.
pub const TRUE_LITERALS: [&str; 12] = [
    "true", "True", "TRUE", "on", "On", "ON", "yes", "Yes", "YES", "y", "Y", "1",
];

/// A type that can be read from and written to an INI value
pub trait IniValue: Sized {
    /// Name used in conversion errors
    const TYPE_NAME: &'static str;

    /// Convert stored text into this type, `None` if the text does not fit
    fn from_ini(raw: &str) -> Option<Self>;

    /// Canonical text form written into the document
    fn to_ini(&self) -> String;
}

impl IniValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_ini(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn to_ini(&self) -> String {
        self.clone()
    }
}

/// Anything outside [`TRUE_LITERALS`] is `false`, so this never fails.
/// Writing only ever produces `true` or `false`.
impl IniValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_ini(raw: &str) -> Option<Self> {
        Some(TRUE_LITERALS.contains(&raw))
    }

    fn to_ini(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

macro_rules! impl_numeric_value {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl IniValue for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_ini(raw: &str) -> Option<Self> {
                    raw.trim().parse::<$ty>().ok()
                }

                fn to_ini(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_numeric_value! {
    i32 => "int",
    i64 => "int",
    f32 => "float",
    f64 => "float",
}
