//! Applies the rule set to address rows.

use serde::Serialize;
use tracing::debug;

use super::rules;
use crate::models::{AddressRecord, LabelMap};

/// Every role answer for one address row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AddressRoles {
    pub street: bool,
    pub city: bool,
    pub curated_city: bool,
    pub postcode: bool,
    pub has_postcode: bool,
    pub has_place: bool,
    pub country: bool,
    pub state: bool,
    pub useful_for_context: bool,
}

/// Evaluate all rules for a row
pub fn classify(record: &AddressRecord) -> AddressRoles {
    AddressRoles {
        street: rules::is_street(record),
        city: rules::is_city(record),
        curated_city: rules::is_curated_city(record),
        postcode: rules::is_postcode(record),
        has_postcode: rules::has_postcode(record),
        has_place: rules::has_place(record),
        country: rules::is_country(record),
        state: rules::is_state(record),
        useful_for_context: rules::is_useful_for_context(record),
    }
}

/// Address breadcrumb of one place, folded from its address rows.
///
/// Rows are expected most specific first, as the address backend returns
/// them. The first row claiming a role wins; later rows with the same role
/// fall through to the context list when they qualify for it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<LabelMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<LabelMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<LabelMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<LabelMap>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<LabelMap>,
}

impl AddressContext {
    pub fn from_rows(rows: &[AddressRecord]) -> Self {
        let mut ctx = Self::default();

        for row in rows {
            let roles = classify(row);
            debug!("{} -> {:?}", row, roles);

            if ctx.claim(row, &roles) {
                continue;
            }

            if roles.useful_for_context {
                ctx.context.push(row.name.clone());
            }
        }

        ctx
    }

    /// Fill the first free primary slot this row qualifies for
    fn claim(&mut self, row: &AddressRecord, roles: &AddressRoles) -> bool {
        if roles.postcode && self.postcode.is_none() {
            let code = row
                .postcode
                .clone()
                .or_else(|| row.name.get("ref").cloned())
                .or_else(|| row.name.get("default").cloned());
            if code.is_some() {
                self.postcode = code;
                return true;
            }
        }

        if row.name.is_empty() {
            return false;
        }

        let slot = if roles.street {
            &mut self.street
        } else if roles.city || roles.curated_city {
            &mut self.city
        } else if roles.state {
            &mut self.state
        } else if roles.country {
            &mut self.country
        } else {
            return false;
        };

        if slot.is_some() {
            return false;
        }
        *slot = Some(row.name.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OsmType;

    #[test]
    fn test_classify_multiple_roles() {
        let row = AddressRecord::new(1, OsmType::Node, 5, "place", "city", 16)
            .with_name("default", "Bern")
            .with_postcode("3000");
        let roles = classify(&row);

        assert!(roles.city);
        assert!(roles.useful_for_context);
        assert!(roles.has_postcode);
        assert!(!roles.street);
        assert!(!roles.curated_city);
        assert!(!roles.country);
    }

    #[test]
    fn test_context_from_rows() {
        let rows = vec![
            AddressRecord::new(1, OsmType::Way, 10, "highway", "residential", 26)
                .with_name("default", "Unter den Linden"),
            AddressRecord::new(2, OsmType::Node, 11, "place", "suburb", 20)
                .with_name("default", "Mitte"),
            AddressRecord::new(3, OsmType::Relation, 62422, "boundary", "administrative", 16)
                .with_admin_level(4)
                .with_name("default", "Berlin"),
            AddressRecord::new(4, OsmType::Relation, 99, "boundary", "postal_code", 21)
                .with_name("ref", "10117"),
            AddressRecord::new(5, OsmType::Relation, 51477, "boundary", "administrative", 4)
                .with_admin_level(2)
                .with_name("default", "Deutschland"),
            AddressRecord::new(6, OsmType::Node, 12, "place", "continent", 1)
                .with_name("default", "Europe"),
        ];

        let ctx = AddressContext::from_rows(&rows);

        assert_eq!(ctx.street.unwrap()["default"], "Unter den Linden");
        // curated relation claims the city slot even though it is also a state
        assert_eq!(ctx.city.unwrap()["default"], "Berlin");
        assert!(ctx.state.is_none());
        assert_eq!(ctx.postcode.as_deref(), Some("10117"));
        assert_eq!(ctx.country.unwrap()["default"], "Deutschland");
        assert_eq!(ctx.context.len(), 1);
        assert_eq!(ctx.context[0]["default"], "Mitte");
    }

    #[test]
    fn test_second_city_goes_to_context() {
        let rows = vec![
            AddressRecord::new(1, OsmType::Node, 1, "place", "village", 19)
                .with_name("default", "Kleinstadt"),
            AddressRecord::new(2, OsmType::Node, 2, "place", "town", 18)
                .with_name("default", "Grossstadt"),
        ];

        let ctx = AddressContext::from_rows(&rows);
        assert_eq!(ctx.city.unwrap()["default"], "Kleinstadt");
        assert_eq!(ctx.context.len(), 1);
        assert_eq!(ctx.context[0]["default"], "Grossstadt");
    }
}
