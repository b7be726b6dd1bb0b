/// Tier of native layouts understood by this build.
pub const NATIVE_TIER: u32 = 2;

/// A well-known strftime layout that is passed through untranslated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinLayout {
    pub name: &'static str,
    pub layout: &'static str,
    /// Lowest native tier that accepts this layout.
    pub tier: u32,
}

const fn builtin(name: &'static str, layout: &'static str, tier: u32) -> BuiltinLayout {
    BuiltinLayout { name, layout, tier }
}

pub static BUILTIN_LAYOUTS: &[BuiltinLayout] = &[
    builtin("ANSIC", "%a %b %e %H:%M:%S %Y", 0),
    builtin("RFC822", "%d %b %y %H:%M %Z", 0),
    builtin("RFC822Z", "%d %b %y %H:%M %z", 0),
    builtin("RFC850", "%A, %d-%b-%y %H:%M:%S %Z", 0),
    builtin("RFC1123", "%a, %d %b %Y %H:%M:%S %Z", 0),
    builtin("RFC1123Z", "%a, %d %b %Y %H:%M:%S %z", 0),
    builtin("RFC2822", "%a, %d %b %Y %H:%M:%S %z", 0),
    builtin("RFC3339", "%Y-%m-%dT%H:%M:%S%:z", 0),
    builtin("RFC3339Nano", "%Y-%m-%dT%H:%M:%S%.f%:z", 0),
    builtin("Kitchen", "%-I:%M%p", 0),
    builtin("Stamp", "%b %e %H:%M:%S", 0),
    builtin("StampMilli", "%b %e %H:%M:%S%.3f", 1),
    builtin("StampMicro", "%b %e %H:%M:%S%.6f", 1),
    builtin("StampNano", "%b %e %H:%M:%S%.9f", 1),
    builtin("DateTime", "%Y-%m-%d %H:%M:%S", 2),
    builtin("DateOnly", "%Y-%m-%d", 2),
    builtin("TimeOnly", "%H:%M:%S", 2),
];

/// Looks up `layout` among the builtins usable at `tier`.
pub fn lookup(layout: &str, tier: u32) -> Option<&'static BuiltinLayout> {
    BUILTIN_LAYOUTS
        .iter()
        .find(|b| b.layout == layout && b.tier <= tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_gate_lookups() {
        assert_eq!(lookup("%Y-%m-%d", NATIVE_TIER).map(|b| b.name), Some("DateOnly"));
        assert_eq!(lookup("%Y-%m-%d", 1), None);
        assert_eq!(lookup("%Y-%m-%dT%H:%M:%S%:z", 0).map(|b| b.name), Some("RFC3339"));
        assert_eq!(lookup("yyyy-mm-dd", NATIVE_TIER), None);
    }

    #[test]
    fn builtins_are_valid_strftime() {
        use chrono::format::{Item, StrftimeItems};

        for b in BUILTIN_LAYOUTS {
            assert!(
                StrftimeItems::new(b.layout).all(|item| item != Item::Error),
                "{} is not a valid layout",
                b.name
            );
        }
    }
}
