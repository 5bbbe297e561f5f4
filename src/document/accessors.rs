//! Typed reads and writes on top of the raw string table

use log::warn;

use super::value::IniValue;
use super::IniDocument;
use crate::error::{IniError, Result};

impl IniDocument {
    /// Read a typed value, or `default` if the key is absent or cannot be converted.
    ///
    /// A stored value that fails to convert is logged and treated like a
    /// missing one. Use [`try_read`](Self::try_read) to see the failure instead.
    pub fn read<T: IniValue>(&self, section: &str, key: &str, default: T) -> T {
        match self.try_read(section, key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!("{}, using default", e);
                default
            }
        }
    }

    /// Read a typed value, falling back to the type's zero value
    pub fn read_or_default<T: IniValue + Default>(&self, section: &str, key: &str) -> T {
        self.read(section, key, T::default())
    }

    /// Read a typed value, reporting conversion failures.
    ///
    /// Returns `Ok(None)` when the section or key does not exist.
    pub fn try_read<T: IniValue>(&self, section: &str, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get(section, key) else {
            return Ok(None);
        };

        T::from_ini(raw)
            .map(Some)
            .ok_or_else(|| IniError::ConversionError {
                section: section.to_string(),
                key: key.to_string(),
                value: raw.to_string(),
                target: T::TYPE_NAME,
            })
    }

    /// Write a typed value in its canonical text form
    pub fn write<T: IniValue>(&mut self, section: &str, key: &str, value: T) -> Result<()> {
        self.set(section, key, &value.to_ini())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IniDocument {
        IniDocument::parse(
            "[general]\nwindowWidth=1080\nfullscreen=Yes\n\n[player]\nx=100\nname=John Doe\n",
        )
        .unwrap()
    }

    #[test]
    fn test_read_typed_values() {
        let doc = sample();
        assert!(doc.read("general", "fullscreen", false));
        assert_eq!(doc.read("player", "x", 0i32), 100);
        assert_eq!(doc.read("general", "windowWidth", 0.0f64), 1080.0);
        assert_eq!(
            doc.read("player", "name", String::new()),
            "John Doe".to_string()
        );
    }

    #[test]
    fn test_read_missing_returns_default() {
        let doc = sample();
        assert_eq!(doc.read("player", "z", 500i32), 500);
        assert_eq!(doc.read_or_default::<i32>("player", "z"), 0);
        assert_eq!(doc.read("nowhere", "x", -1i64), -1);
        assert!(doc.read("nowhere", "flag", true));
        assert_eq!(doc.read_or_default::<String>("player", "z"), "");
    }

    #[test]
    fn test_read_unconvertible_falls_back() {
        let doc = sample();
        assert_eq!(doc.read("player", "name", 7i32), 7);
        assert_eq!(doc.read("player", "name", 2.5f32), 2.5);
    }

    #[test]
    fn test_try_read_reports_conversion_error() {
        let doc = sample();
        assert_eq!(doc.try_read::<i32>("player", "x").unwrap(), Some(100));
        assert_eq!(doc.try_read::<i32>("player", "z").unwrap(), None);

        match doc.try_read::<i32>("player", "name") {
            Err(IniError::ConversionError { value, target, .. }) => {
                assert_eq!(value, "John Doe");
                assert_eq!(target, "int");
            }
            other => panic!("expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_then_read() {
        let mut doc = IniDocument::new();
        doc.write("s", "text", "hello world".to_string()).unwrap();
        doc.write("s", "count", -17i32).unwrap();
        doc.write("s", "big", 1i64 << 40).unwrap();
        doc.write("s", "ratio", 0.1f32).unwrap();
        doc.write("s", "precise", std::f64::consts::PI).unwrap();
        doc.write("s", "flag", true).unwrap();
        doc.write("s", "off", false).unwrap();

        assert_eq!(doc.read_or_default::<String>("s", "text"), "hello world");
        assert_eq!(doc.read_or_default::<i32>("s", "count"), -17);
        assert_eq!(doc.read_or_default::<i64>("s", "big"), 1i64 << 40);
        assert!((doc.read_or_default::<f32>("s", "ratio") - 0.1).abs() < f32::EPSILON);
        assert!((doc.read_or_default::<f64>("s", "precise") - std::f64::consts::PI).abs() < 1e-12);
        assert!(doc.read_or_default::<bool>("s", "flag"));
        assert!(!doc.read("s", "off", true));
    }

    #[test]
    fn test_write_bool_uses_lowercase_literals() {
        let mut doc = IniDocument::new();
        doc.write("player", "bool", true).unwrap();
        assert_eq!(doc.get("player", "bool"), Some("true"));
        doc.write("player", "bool", false).unwrap();
        assert_eq!(doc.get("player", "bool"), Some("false"));
    }

    #[test]
    fn test_write_overwrites_with_other_type() {
        let mut doc = sample();
        doc.write("player", "x", 2.5f64).unwrap();
        assert_eq!(doc.get("player", "x"), Some("2.5"));
        assert_eq!(doc.read("player", "x", 0i32), 0);
        assert_eq!(doc.keys("player"), vec!["x", "name"]);
    }
}
