//! Canonical string forms of X.509 distinguished names.
//!
//! Two names that render to the same [`canonical_name`] are considered the same
//! issuer/subject by the `X500Principal.getName("CANONICAL")` comparison used by
//! Android and `apksigner`, regardless of attribute order within an RDN, string
//! case, or leading/trailing whitespace.

pub mod canonical;
pub mod certificate;

pub use canonical::{
    canonical_name,
    comparison_name,
    friendly_name,
    ordered_name,
    OrderedAva,
    OrderedName,
    OrderedRdn,
};
pub use certificate::{
    AttributeTypeAndValue,
    AttributeValue,
    Certificate,
    DirectoryString,
    Name,
    RelativeDistinguishedName,
};
