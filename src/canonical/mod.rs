//! Name ordering and value normalization, after
//! `X500Principal.getName("CANONICAL")`.
//!
//! Every renderer goes through [`ordered_name`]: RDNs in reverse encoding
//! order, the attributes of each RDN sorted by [`ordering::comparator`].

pub mod display;
pub mod oid_registry;
pub mod ordering;
pub mod value;

use crate::certificate::{AttributeTypeAndValue, Name};
use crate::canonical::value::CanonicalValue;

pub use ordering::{OrderedAva, OrderedName, OrderedRdn};

#[cfg(feature = "tracing")]
use tracing::{trace};

impl From<&AttributeTypeAndValue> for OrderedAva {
    fn from(atv: &AttributeTypeAndValue) -> Self {
        let (oid_flag, type_label) = match oid_registry::keyword(&atv.attribute_type) {
            Some(keyword) => (0, keyword.to_string()),
            None => (1, atv.dotted_type()),
        };
        let value = CanonicalValue::from(&atv.attribute_value);
        OrderedAva {
            oid_flag: oid_flag,
            type_label: type_label,
            normalized_value: value.normalized,
            raw_value: value.raw,
        }
    }
}

/// The name in canonical order, with both normalized and raw values.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(name), fields(rdns = name.rdn_sequence.len())))]
pub fn ordered_name(name: &Name, numeric_oid_order: bool) -> OrderedName {
    name.rdn_sequence
        .iter()
        .rev()
        .map(|rdn| {
            let mut avas: OrderedRdn = rdn.iter().map(OrderedAva::from).collect();
            ordering::sort_rdn(&mut avas, numeric_oid_order);
            #[cfg(feature = "tracing")]
            trace!(?avas, "ordered rdn");
            avas
        })
        .collect()
}

/// `type=value` pairs joined with `+` and RDNs joined with `,`, using
/// normalized values. Equal strings mean equal names.
pub fn canonical_name(name: &Name, numeric_oid_order: bool) -> String {
    comparison_name(name, numeric_oid_order)
        .iter()
        .map(|rdn| {
            rdn.iter()
                .map(|(t, v)| format!("{}={}", t, v))
                .collect::<Vec<_>>()
                .join("+")
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Canonical order but raw values, upper case types and `, ` between RDNs,
/// with non-printable characters escaped. Not for comparisons.
pub fn friendly_name(name: &Name, numeric_oid_order: bool) -> String {
    ordered_name(name, numeric_oid_order)
        .iter()
        .map(|rdn| {
            rdn.iter()
                .map(|ava| format!(
                    "{}={}",
                    ava.type_label.to_uppercase(),
                    display::escape_for_display(&ava.raw_value)))
                .collect::<Vec<_>>()
                .join("+")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The canonical name as `(type, normalized value)` pairs per RDN.
pub fn comparison_name(name: &Name, numeric_oid_order: bool) -> Vec<Vec<(String, String)>> {
    ordered_name(name, numeric_oid_order)
        .into_iter()
        .map(|rdn| {
            rdn.into_iter()
                .map(|ava| (ava.type_label, ava.normalized_value))
                .collect()
        })
        .collect()
}
