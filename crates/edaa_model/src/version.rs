//! Language revision enumerations for VHDL, Verilog and SystemVerilog.
//!
//! Each enumeration parses from the short and long spellings used by tools
//! (`"08"`, `"2008"`, `8`, `2008`) through a static lookup table, orders
//! chronologically, and displays in the conventional `VHDL'08` form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a token does not name a known language revision.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is not a known {language} revision")]
pub struct ParseVersionError {
    /// The language whose revision table was consulted.
    pub language: &'static str,
    /// The rejected input.
    pub input: String,
}

macro_rules! revision_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $language:literal, $prefix:literal {
            $($(#[$vmeta:meta])* $variant:ident = $year:literal),+ $(,)?
        }
        numbers: [$(($num:literal, $nvariant:ident)),* $(,)?]
        tokens: [$(($tok:literal, $tvariant:ident)),* $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            const NUMBERS: &'static [(u16, $name)] = &[$(($num, $name::$nvariant)),*];
            const TOKENS: &'static [(&'static str, $name)] = &[$(($tok, $name::$tvariant)),*];

            /// Every revision in chronological order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the four-digit year of this revision.
            pub fn year(self) -> u16 {
                match self {
                    $($name::$variant => $year),+
                }
            }

            /// Looks up a revision by its two- or four-digit year number.
            pub fn from_number(value: u16) -> Result<Self, ParseVersionError> {
                Self::NUMBERS
                    .iter()
                    .find(|(n, _)| *n == value)
                    .map(|(_, v)| *v)
                    .ok_or_else(|| ParseVersionError {
                        language: $language,
                        input: value.to_string(),
                    })
            }
        }

        impl FromStr for $name {
            type Err = ParseVersionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::TOKENS
                    .iter()
                    .find(|(t, _)| *t == s)
                    .map(|(_, v)| *v)
                    .ok_or_else(|| ParseVersionError {
                        language: $language,
                        input: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}'{:02}", $prefix, self.year() % 100)
            }
        }
    };
}

revision_enum! {
    /// IEEE 1076 revisions.
    VhdlVersion, "VHDL", "VHDL" {
        /// IEEE 1076-1987.
        Vhdl87 = 1987,
        /// IEEE 1076-1993.
        Vhdl93 = 1993,
        /// IEEE 1076-2002.
        Vhdl2002 = 2002,
        /// IEEE 1076-2008.
        Vhdl2008 = 2008,
        /// IEEE 1076-2019.
        Vhdl2019 = 2019,
    }
    numbers: [
        (87, Vhdl87), (93, Vhdl93), (2, Vhdl2002), (8, Vhdl2008), (19, Vhdl2019),
        (1987, Vhdl87), (1993, Vhdl93), (2002, Vhdl2002), (2008, Vhdl2008), (2019, Vhdl2019),
    ]
    tokens: [
        ("87", Vhdl87), ("93", Vhdl93), ("02", Vhdl2002), ("08", Vhdl2008), ("19", Vhdl2019),
        ("1987", Vhdl87), ("1993", Vhdl93), ("2002", Vhdl2002), ("2008", Vhdl2008), ("2019", Vhdl2019),
    ]
}

revision_enum! {
    /// IEEE 1364 revisions.
    VerilogVersion, "Verilog", "Verilog" {
        /// IEEE 1364-1995.
        Verilog95 = 1995,
        /// IEEE 1364-2001.
        Verilog2001 = 2001,
        /// IEEE 1364-2005.
        Verilog2005 = 2005,
    }
    numbers: [
        (95, Verilog95), (1, Verilog2001), (5, Verilog2005),
        (1995, Verilog95), (2001, Verilog2001), (2005, Verilog2005),
    ]
    tokens: [
        ("95", Verilog95), ("01", Verilog2001), ("05", Verilog2005),
        ("1995", Verilog95), ("2001", Verilog2001), ("2005", Verilog2005),
    ]
}

revision_enum! {
    /// IEEE 1800 revisions.
    SystemVerilogVersion, "SystemVerilog", "SV" {
        /// IEEE 1800-2005.
        SystemVerilog2005 = 2005,
        /// IEEE 1800-2009.
        SystemVerilog2009 = 2009,
        /// IEEE 1800-2017.
        SystemVerilog2017 = 2017,
    }
    numbers: [
        (5, SystemVerilog2005), (9, SystemVerilog2009), (17, SystemVerilog2017),
        (2005, SystemVerilog2005), (2009, SystemVerilog2009), (2017, SystemVerilog2017),
    ]
    tokens: [
        ("05", SystemVerilog2005), ("09", SystemVerilog2009), ("17", SystemVerilog2017),
        ("2005", SystemVerilog2005), ("2009", SystemVerilog2009), ("2017", SystemVerilog2017),
    ]
}

impl Default for VhdlVersion {
    fn default() -> Self {
        VhdlVersion::Vhdl93
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vhdl_short_and_long_tokens() {
        for (input, expected) in [
            ("87", VhdlVersion::Vhdl87),
            ("1993", VhdlVersion::Vhdl93),
            ("02", VhdlVersion::Vhdl2002),
            ("08", VhdlVersion::Vhdl2008),
            ("2019", VhdlVersion::Vhdl2019),
        ] {
            assert_eq!(input.parse::<VhdlVersion>().unwrap(), expected);
        }
    }

    #[test]
    fn vhdl_from_number() {
        assert_eq!(VhdlVersion::from_number(8).unwrap(), VhdlVersion::Vhdl2008);
        assert_eq!(VhdlVersion::from_number(1987).unwrap(), VhdlVersion::Vhdl87);
        assert_eq!(VhdlVersion::from_number(2).unwrap(), VhdlVersion::Vhdl2002);
    }

    #[test]
    fn unknown_token_errors() {
        let err = "2000".parse::<VhdlVersion>().unwrap_err();
        assert_eq!(err.language, "VHDL");
        assert_eq!(format!("{err}"), "'2000' is not a known VHDL revision");
        assert!(VerilogVersion::from_number(2009).is_err());
    }

    #[test]
    fn chronological_ordering() {
        assert!(VhdlVersion::Vhdl87 < VhdlVersion::Vhdl93);
        assert!(VhdlVersion::Vhdl2008 > VhdlVersion::Vhdl2002);
        assert!(VerilogVersion::Verilog95 < VerilogVersion::Verilog2005);
        let mut all = SystemVerilogVersion::ALL.to_vec();
        all.reverse();
        all.sort();
        assert_eq!(all, SystemVerilogVersion::ALL);
    }

    #[test]
    fn display_uses_two_digit_year() {
        assert_eq!(VhdlVersion::Vhdl2008.to_string(), "VHDL'08");
        assert_eq!(VhdlVersion::Vhdl87.to_string(), "VHDL'87");
        assert_eq!(VerilogVersion::Verilog2001.to_string(), "Verilog'01");
        assert_eq!(SystemVerilogVersion::SystemVerilog2017.to_string(), "SV'17");
    }

    #[test]
    fn verilog_and_sv_tables() {
        assert_eq!("01".parse::<VerilogVersion>().unwrap(), VerilogVersion::Verilog2001);
        assert_eq!(
            SystemVerilogVersion::from_number(9).unwrap(),
            SystemVerilogVersion::SystemVerilog2009
        );
        assert_eq!(VerilogVersion::Verilog2005.year(), 2005);
    }

    #[test]
    fn default_vhdl_is_93() {
        assert_eq!(VhdlVersion::default(), VhdlVersion::Vhdl93);
    }
}
