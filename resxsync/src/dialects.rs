//! Key extraction for the two artifact dialects.
//!
//! Both files are scanned as flat text with one declaration pattern per
//! dialect. Neither is parsed as a structured document; the `.resx` key
//! attribute is captured as a literal substring, with no entity decoding.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::traits::KeyExtractor;

lazy_static! {
    static ref RESX_DATA_REGEX: Regex = Regex::new(r#"<data name="([^"]+)""#).unwrap();
    static ref DESIGNER_ACCESSOR_REGEX: Regex =
        Regex::new(r"public static string (\S+) \{").unwrap();
}

/// The `.resx` resource dialect: a key is any `<data name="...">`
/// declaration.
#[derive(Debug, Clone, Copy)]
pub struct ResxDialect;

impl KeyExtractor for ResxDialect {
    fn extract(&self, text: &str) -> BTreeSet<String> {
        RESX_DATA_REGEX
            .captures_iter(text)
            .map(|c| c[1].to_string())
            .collect()
    }
}

/// The generated-accessor dialect: a key is any
/// `public static string Key {` property declaration.
#[derive(Debug, Clone, Copy)]
pub struct DesignerDialect;

impl KeyExtractor for DesignerDialect {
    fn extract(&self, text: &str) -> BTreeSet<String> {
        DESIGNER_ACCESSOR_REGEX
            .captures_iter(text)
            .map(|c| c[1].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_resx_extracts_every_declaration() {
        let resx = indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <root>
              <data name="Hello" xml:space="preserve">
                <value>Hello</value>
              </data>
              <data name="Goodbye" xml:space="preserve">
                <value>Goodbye</value>
              </data>
              <data name="Welcome" xml:space="preserve">
                <value>Welcome</value>
              </data>
            </root>
        "#};
        let keys = ResxDialect.extract(resx);
        assert_eq!(keys.len(), 3);
        assert!(keys.contains("Hello"));
        assert!(keys.contains("Goodbye"));
        assert!(keys.contains("Welcome"));
    }

    #[test]
    fn test_resx_duplicates_collapse() {
        let resx = indoc! {r#"
            <data name="Hello"><value>Hi</value></data>
            <data name="Hello"><value>Hello again</value></data>
        "#};
        let keys = ResxDialect.extract(resx);
        assert_eq!(keys.len(), 1);
        assert!(keys.contains("Hello"));
    }

    #[test]
    fn test_resx_key_captured_literally() {
        // No entity decoding: the attribute value is taken verbatim.
        let resx = r#"<data name="Needs&amp;Escaping" xml:space="preserve">"#;
        let keys = ResxDialect.extract(resx);
        assert!(keys.contains("Needs&amp;Escaping"));
    }

    #[test]
    fn test_designer_extracts_accessors() {
        let designer = indoc! {r#"
            namespace Demo.Resources {
                public class AppResources {
                    private static global::System.Globalization.CultureInfo resourceCulture;

                    public static string Hello {
                        get {
                            return ResourceManager.GetString("Hello", resourceCulture);
                        }
                    }

                    public static string Goodbye {
                        get {
                            return ResourceManager.GetString("Goodbye", resourceCulture);
                        }
                    }
                }
            }
        "#};
        let keys = DesignerDialect.extract(designer);
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("Hello"));
        assert!(keys.contains("Goodbye"));
    }

    #[test]
    fn test_designer_ignores_other_members() {
        let designer = indoc! {r#"
            public class AppResources {
                private static global::System.Resources.ResourceManager resourceMan;

                public static string CultureName {
                    get {
                        return ResourceManager.GetString("CultureName", resourceCulture);
                    }
                }

                internal static string Hidden {
                    get { return null; }
                }
            }
        "#};
        let keys = DesignerDialect.extract(designer);
        assert_eq!(keys.len(), 1);
        assert!(keys.contains("CultureName"));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(ResxDialect.extract("").is_empty());
        assert!(DesignerDialect.extract("").is_empty());
    }
}
