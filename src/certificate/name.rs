use crate::canonical::{self, OrderedName};
use crate::certificate::asn1_error_message;
use crate::certificate::relative_distinguished_name::RelativeDistinguishedName;
use std::convert::TryFrom;
use bytes::Bytes;
use yasna::{
    ASN1Result,
    BERReader,
    BERDecodable,
};

#[cfg(feature = "tracing")]
use tracing::{debug};

//  Name ::= CHOICE { -- only one possibility for now --
//     rdnSequence  RDNSequence }
//  RDNSequence ::= SEQUENCE OF RelativeDistinguishedName
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Name {
    pub rdn_sequence: Vec<RelativeDistinguishedName>
}

impl Name {
    pub fn canonical_name(&self) -> String {
        canonical::canonical_name(self, false)
    }

    /// Canonical name with dotted OID attribute types ordered arc by arc, as
    /// Android does.
    pub fn android_canonical_name(&self) -> String {
        canonical::canonical_name(self, true)
    }

    pub fn friendly_name(&self) -> String {
        canonical::friendly_name(self, false)
    }

    pub fn comparison_name(&self) -> Vec<Vec<(String, String)>> {
        canonical::comparison_name(self, false)
    }

    pub fn ordered_name(&self) -> OrderedName {
        canonical::ordered_name(self, false)
    }
}

impl From<Vec<RelativeDistinguishedName>> for Name {
    fn from(rdn_sequence: Vec<RelativeDistinguishedName>) -> Self {
        Name { rdn_sequence: rdn_sequence }
    }
}

impl TryFrom<Bytes> for Name {
    type Error = &'static str;
    fn try_from(bytes: Bytes) -> Result<Self, Self::Error> {
        yasna::parse_ber(bytes.as_ref(), Name::decode_ber).map_err(asn1_error_message)
    }
}

impl BERDecodable for Name {
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "Name::decode_ber", skip(reader)))]
    fn decode_ber(reader: BERReader) -> ASN1Result<Self> {
        #[cfg(feature = "tracing")]
        debug!("parsing name");
        let rdn_sequence = reader.collect_sequence_of(RelativeDistinguishedName::decode_ber)?;
        Ok(Name { rdn_sequence: rdn_sequence })
    }
}
