use crate::canonical::oid_registry::{
    OID_AT_COMMON_NAME,
    OID_AT_COUNTRY_NAME,
    OID_AT_LOCALITY_NAME,
    OID_AT_ORGANIZATION_NAME,
    OID_AT_ORGANIZATIONAL_UNIT_NAME,
    OID_AT_STATE_OR_PROVINCE_NAME,
};
use crate::certificate::attribute_type_and_value::{
    AttributeTypeAndValue,
    AttributeValue,
};
use yasna::{
    ASN1Result,
    BERReader,
    BERDecodable,
};

#[cfg(feature = "tracing")]
use tracing::{debug};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct RelativeDistinguishedNameBuilder {
    attributes: Vec<AttributeTypeAndValue>,
}

impl RelativeDistinguishedNameBuilder {
    pub fn attribute(mut self, attribute_type: &[u64], attribute_value: AttributeValue) -> Self {
        self.attributes.push(AttributeTypeAndValue::new(attribute_type, attribute_value));
        self
    }

    pub fn common_name(self, cn: impl Into<String>) -> Self {
        self.attribute(OID_AT_COMMON_NAME, AttributeValue::utf8(cn))
    }

    pub fn organization(self, o: impl Into<String>) -> Self {
        self.attribute(OID_AT_ORGANIZATION_NAME, AttributeValue::utf8(o))
    }

    pub fn organizational_unit(self, ou: impl Into<String>) -> Self {
        self.attribute(OID_AT_ORGANIZATIONAL_UNIT_NAME, AttributeValue::utf8(ou))
    }

    pub fn locality(self, l: impl Into<String>) -> Self {
        self.attribute(OID_AT_LOCALITY_NAME, AttributeValue::utf8(l))
    }

    pub fn state_or_province(self, st: impl Into<String>) -> Self {
        self.attribute(OID_AT_STATE_OR_PROVINCE_NAME, AttributeValue::utf8(st))
    }

    pub fn country(self, c: impl Into<String>) -> Self {
        self.attribute(OID_AT_COUNTRY_NAME, AttributeValue::printable(c))
    }

    pub fn build(self) -> Result<RelativeDistinguishedName, String> {
        if self.attributes.is_empty() {
            return Err("missing attribute".to_string())
        }
        Ok(RelativeDistinguishedName(self.attributes))
    }
}

//  RelativeDistinguishedName ::=
//     SET SIZE (1..MAX) OF AttributeTypeAndValue
//
// The attributes are kept in encoding order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RelativeDistinguishedName(pub Vec<AttributeTypeAndValue>);

impl RelativeDistinguishedName {
    pub fn builder() -> RelativeDistinguishedNameBuilder {
        RelativeDistinguishedNameBuilder::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeTypeAndValue> {
        self.0.iter()
    }
}

impl BERDecodable for RelativeDistinguishedName {
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "RelativeDistinguishedName::decode_ber", skip(reader)))]
    fn decode_ber(reader: BERReader) -> ASN1Result<Self> {
        #[cfg(feature = "tracing")]
        debug!("parsing relative distinguished name");

        let atvs = reader.collect_set_of(AttributeTypeAndValue::decode_ber)?;

        #[cfg(feature = "tracing")]
        debug!(attributes = atvs.len(), "parsed relative distinguished name");

        Ok(RelativeDistinguishedName(atvs))
    }
}
