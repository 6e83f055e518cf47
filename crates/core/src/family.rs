//! Family declarations, the `"<name>:<variant>,<variant>"` syntax.

use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    variation::Variation,
};

/// A font family plus the variants of it to load.
///
/// A bare family name with no colon is valid and declares no specific
/// variants; the loader then applies its own default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyDeclaration {
    pub name: String,
    pub variations: Vec<Variation>,
}

impl FromStr for FamilyDeclaration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, codes) = match s.split_once(':') {
            Some((name, codes)) => (name, Some(codes)),
            None => (s, None),
        };
        if name.is_empty() {
            return Err(Error::Family(s.to_string()));
        }
        let variations = match codes {
            None => Vec::new(),
            Some(codes) => codes.split(',').map(str::parse).collect::<Result<_>>()?,
        };
        Ok(Self { name: name.to_string(), variations })
    }
}

impl fmt::Display for FamilyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (i, variation) in self.variations.iter().enumerate() {
            f.write_str(if i == 0 { ":" } else { "," })?;
            write!(f, "{variation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variation::{FontStyle, Weight};

    #[test]
    fn parses_name_and_variants() {
        let family: FamilyDeclaration = "Gotham SSm:n4,n7".parse().unwrap();
        assert_eq!(family.name, "Gotham SSm");
        assert_eq!(family.variations.len(), 2);
        assert_eq!(family.variations[0].weight, Weight::NORMAL);
        assert_eq!(family.variations[1].weight, Weight::BOLD);
        assert_eq!(family.variations[1].style, FontStyle::Normal);
    }

    #[test]
    fn bare_name_has_no_variants() {
        let family: FamilyDeclaration = "Knockout 31 4r".parse().unwrap();
        assert_eq!(family.name, "Knockout 31 4r");
        assert!(family.variations.is_empty());
    }

    #[test]
    fn rejects_malformed_declarations() {
        for decl in ["", ":n4", "Gotham:", "Gotham:n4,,n7", "Gotham:x4"] {
            assert!(decl.parse::<FamilyDeclaration>().is_err(), "accepted {decl:?}");
        }
    }

    #[test]
    fn display_round_trips() {
        for decl in ["Gotham SSm:n4,n7", "Gotham:n4,n7", "Knockout 31 4r:n4", "Arial"] {
            let family: FamilyDeclaration = decl.parse().unwrap();
            assert_eq!(family.to_string(), decl);
        }
    }
}
