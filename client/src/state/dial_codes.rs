//! Static country dial-code table.
//!
//! DESIGN
//! ======
//! The table is an ordered `'static` slice. Codes are not unique (`+1` is both
//! USA and Canada, `+61` is both Australia and New Zealand), so lookups by code
//! resolve to the first entry in table order.

#[cfg(test)]
#[path = "dial_codes_test.rs"]
mod dial_codes_test;

/// Dial code used until the visitor picks another country.
pub const DEFAULT_DIAL_CODE: &str = "+1";

/// One selectable country and its international calling prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialCode {
    pub code: &'static str,
    pub name: &'static str,
}

impl DialCode {
    /// Text shown for an entry in the dropdown, e.g. `"India (+91)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

const fn entry(code: &'static str, name: &'static str) -> DialCode {
    DialCode { code, name }
}

/// Every country offered by the selector, in display order.
pub const DIAL_CODES: &[DialCode] = &[
    entry("+1", "USA"),
    entry("+91", "India"),
    entry("+44", "UK"),
    entry("+61", "Australia"),
    entry("+49", "Germany"),
    entry("+81", "Japan"),
    entry("+33", "France"),
    entry("+86", "China"),
    entry("+7", "Russia"),
    entry("+39", "Italy"),
    entry("+52", "Mexico"),
    entry("+27", "South Africa"),
    entry("+82", "South Korea"),
    entry("+55", "Brazil"),
    entry("+31", "Netherlands"),
    entry("+47", "Norway"),
    entry("+46", "Sweden"),
    entry("+34", "Spain"),
    entry("+41", "Switzerland"),
    entry("+65", "Singapore"),
    entry("+62", "Indonesia"),
    entry("+1", "Canada"),
    entry("+45", "Denmark"),
    entry("+351", "Portugal"),
    entry("+63", "Philippines"),
    entry("+92", "Pakistan"),
    entry("+90", "Turkey"),
    entry("+20", "Egypt"),
    entry("+30", "Greece"),
    entry("+53", "Cuba"),
    entry("+61", "New Zealand"),
    entry("+880", "Bangladesh"),
    entry("+32", "Belgium"),
    entry("+420", "Czech Republic"),
    entry("+372", "Estonia"),
    entry("+36", "Hungary"),
    entry("+353", "Ireland"),
    entry("+972", "Israel"),
    entry("+254", "Kenya"),
    entry("+423", "Liechtenstein"),
    entry("+352", "Luxembourg"),
    entry("+377", "Monaco"),
    entry("+373", "Moldova"),
    entry("+234", "Nigeria"),
    entry("+48", "Poland"),
    entry("+40", "Romania"),
    entry("+421", "Slovakia"),
    entry("+386", "Slovenia"),
    entry("+963", "Syria"),
    entry("+66", "Thailand"),
    entry("+971", "United Arab Emirates"),
    entry("+598", "Uruguay"),
    entry("+58", "Venezuela"),
];

/// First table entry carrying `code`, if any.
#[must_use]
pub fn find_by_code(code: &str) -> Option<&'static DialCode> {
    DIAL_CODES.iter().find(|entry| entry.code == code)
}

/// Entries whose country name contains `term`, ignoring case.
///
/// An empty term matches every entry.
#[must_use]
pub fn filter_by_name(term: &str) -> Vec<&'static DialCode> {
    let needle = term.to_lowercase();
    DIAL_CODES
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}
