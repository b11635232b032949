use crate::canonical::oid_registry::is_directory_string_type;
use std::convert::TryFrom;
use yasna::{
    ASN1Result,
    BERReader,
    BERDecodable,
    models::ObjectIdentifier,
    tags::{TAG_PRINTABLESTRING, TAG_UTF8STRING},
};

#[cfg(feature = "tracing")]
use tracing::{debug};

/// The two `DirectoryString` alternatives that are treated as text.
///
/// `None` means the contents could not be decoded; it is canonicalised as
/// the empty string.
#[derive(Clone, Debug, PartialEq)]
pub enum DirectoryString {
    Utf8String(Option<String>),
    PrintableString(Option<String>),
}

impl DirectoryString {
    pub fn native(&self) -> &str {
        match self {
            DirectoryString::Utf8String(s) | DirectoryString::PrintableString(s) =>
                s.as_deref().unwrap_or(""),
        }
    }

    /// PrintableString contents are written as latin-1, `?` standing in for
    /// anything latin-1 cannot hold.
    pub fn to_der(&self) -> Vec<u8> {
        match self {
            DirectoryString::Utf8String(_) =>
                yasna::construct_der(|writer| writer.write_utf8_string(self.native())),
            DirectoryString::PrintableString(_) => {
                let bytes: Vec<u8> = self.native()
                    .chars()
                    .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                    .collect();
                yasna::construct_der(|writer| {
                    writer.write_tagged_implicit(TAG_PRINTABLESTRING, |writer| writer.write_bytes(&bytes))
                })
            },
        }
    }
}

/// An `AttributeValue ::= ANY -- DEFINED BY AttributeType`.
///
/// Only a UTF8String or PrintableString chosen for an attribute type that is
/// defined as a `DirectoryString` is text. Everything else, TeletexString,
/// BMPString and IA5String included, is kept as its complete DER encoding.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    DirectoryString(DirectoryString),
    Other(Vec<u8>),
}

impl AttributeValue {
    pub fn utf8(value: impl Into<String>) -> Self {
        AttributeValue::DirectoryString(DirectoryString::Utf8String(Some(value.into())))
    }

    pub fn printable(value: impl Into<String>) -> Self {
        AttributeValue::DirectoryString(DirectoryString::PrintableString(Some(value.into())))
    }

    /// Reads the value of an attribute of type `attribute_type`.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "AttributeValue::decode_ber_for", skip(reader)))]
    pub fn decode_ber_for(attribute_type: &ObjectIdentifier, reader: BERReader) -> ASN1Result<Self> {
        let tag = reader.lookahead_tag()?;
        let der = reader.read_der()?;

        if !is_directory_string_type(attribute_type) {
            #[cfg(feature = "tracing")]
            debug!(?tag, len = der.len(), "value of a non directory string type");
            return Ok(AttributeValue::Other(der))
        }

        match tag {
            TAG_UTF8STRING => {
                let native = yasna::parse_der(&der, |r| r.read_utf8string()).ok();
                #[cfg(feature = "tracing")]
                debug!(decoded = native.is_some(), "utf8 string value");
                Ok(AttributeValue::DirectoryString(DirectoryString::Utf8String(native)))
            },
            TAG_PRINTABLESTRING => {
                // contents are taken as latin-1 without checking the PrintableString alphabet
                let native = yasna::parse_der(&der, |r| {
                    r.read_tagged_implicit(TAG_PRINTABLESTRING, |r| r.read_bytes())
                })
                .ok()
                .map(|bytes| bytes.iter().map(|&b| char::from(b)).collect());
                #[cfg(feature = "tracing")]
                debug!(decoded = native.is_some(), "printable string value");
                Ok(AttributeValue::DirectoryString(DirectoryString::PrintableString(native)))
            },
            _ => {
                #[cfg(feature = "tracing")]
                debug!(?tag, len = der.len(), "non text directory string value");
                Ok(AttributeValue::Other(der))
            },
        }
    }
}

//  AttributeTypeAndValue ::= SEQUENCE {
//     type     AttributeType,
//     value    AttributeValue }
//  AttributeType ::= OBJECT IDENTIFIER
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeTypeAndValue {
    pub attribute_type: ObjectIdentifier,
    pub attribute_value: AttributeValue,
}

impl AttributeTypeAndValue {
    /// A text value given for a type that is not a `DirectoryString` is
    /// stored as its DER encoding, the same as when it is decoded.
    pub fn new(attribute_type: &[u64], attribute_value: AttributeValue) -> Self {
        let attribute_type = ObjectIdentifier::from_slice(attribute_type);
        let attribute_value = match attribute_value {
            AttributeValue::DirectoryString(ds) if !is_directory_string_type(&attribute_type) =>
                AttributeValue::Other(ds.to_der()),
            value => value,
        };
        AttributeTypeAndValue {
            attribute_type: attribute_type,
            attribute_value: attribute_value,
        }
    }

    /// The attribute type as a dotted OID string, e.g. `2.5.4.3`.
    pub fn dotted_type(&self) -> String {
        self.attribute_type
            .components()
            .iter()
            .map(|arc| arc.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl BERDecodable for AttributeTypeAndValue {
    fn decode_ber(reader: BERReader) -> ASN1Result<Self> {
        reader.read_sequence(|reader| {
            let attribute_type = reader.next().read_oid()?;
            let attribute_value = AttributeValue::decode_ber_for(&attribute_type, reader.next())?;
            Ok(AttributeTypeAndValue {
                attribute_type: attribute_type,
                attribute_value: attribute_value,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cn () -> ObjectIdentifier {
        ObjectIdentifier::from_slice(&[2,5,4,3])
    }

    #[test]
    fn utf8_common_name_should_decode_correctly () {
        let asserted = vec!(0x30,0x0c, // SEQUENCE, 12 bytes
            0x06,0x03, // OID, 3 bytes
                0x55,0x04,0x03, // encoding of OID(2.5.4.3)
            0x0c,0x05, // UTF8String, 5 bytes
                0x68,0x65,0x6c,0x6c,0x6f); // "hello", in ut8 bytes
        let expected = Ok(AttributeTypeAndValue::new(&[2,5,4,3], AttributeValue::utf8("hello")));
        let actual = yasna::parse_der(&asserted, AttributeTypeAndValue::decode_ber);
        assert_eq!(actual, expected);
    }

    #[test]
    fn printable_country_should_decode_correctly () {
        let asserted = vec!(0x30,0x09, // SEQUENCE, 9 bytes
            0x06,0x03, // OID, 3 bytes
                0x55,0x04,0x06, // encoding of OID(2.5.4.6)
            0x13,0x02, // PrintableString, 2 bytes
                0x78,0x78); // "xx"
        let expected = Ok(AttributeTypeAndValue::new(&[2,5,4,6], AttributeValue::printable("xx")));
        let actual = yasna::parse_der(&asserted, AttributeTypeAndValue::decode_ber);
        assert_eq!(actual, expected);
    }

    #[test]
    fn printable_string_outside_its_alphabet_is_still_text () {
        let asserted = vec!(0x13,0x03, // PrintableString, 3 bytes
                0x61,0x40,0x62); // "a@b"
        let expected = Ok(AttributeValue::printable("a@b"));
        let actual = yasna::parse_der(&asserted, |r| AttributeValue::decode_ber_for(&cn(), r));
        assert_eq!(actual, expected);
    }

    #[test]
    fn ia5_email_address_should_keep_its_der () {
        let asserted = vec!(0x30,0x10, // SEQUENCE, 16 bytes
            0x06,0x09, // OID, 9 bytes
                0x2a,0x86,0x48,0x86,0xf7,0x0d,0x01,0x09,0x01, // encoding of OID(1.2.840.113549.1.9.1)
            0x16,0x03, // IA5String, 3 bytes
                0x78,0x40,0x79); // "x@y"
        let expected = Ok(AttributeTypeAndValue::new(
            &[1,2,840,113549,1,9,1],
            AttributeValue::Other(vec!(0x16,0x03,0x78,0x40,0x79))));
        let actual = yasna::parse_der(&asserted, AttributeTypeAndValue::decode_ber);
        assert_eq!(actual, expected);
    }

    #[test]
    fn utf8_string_under_an_unregistered_oid_is_not_text () {
        let asserted = vec!(0x30,0x09, // SEQUENCE, 9 bytes
            0x06,0x03, // OID, 3 bytes
                0x01,0x02,0x03, // encoding of OID(0.1.2.3)
            0x0c,0x02, // UTF8String, 2 bytes
                0x33,0x37); // "37"
        let expected = Ok(AttributeTypeAndValue::new(
            &[0,1,2,3],
            AttributeValue::Other(vec!(0x0c,0x02,0x33,0x37))));
        let actual = yasna::parse_der(&asserted, AttributeTypeAndValue::decode_ber);
        assert_eq!(actual, expected);
    }

    #[test]
    fn printable_domain_component_is_not_text () {
        let asserted = vec!(0x30,0x11, // SEQUENCE, 17 bytes
            0x06,0x0a, // OID, 10 bytes
                0x09,0x92,0x26,0x89,0x93,0xf2,0x2c,0x64,0x01,0x19, // encoding of OID(0.9.2342.19200300.100.1.25)
            0x13,0x03, // PrintableString, 3 bytes
                0x63,0x6f,0x6d); // "com"
        let actual = yasna::parse_der(&asserted, AttributeTypeAndValue::decode_ber).unwrap();
        assert_eq!(actual.attribute_value, AttributeValue::Other(vec!(0x13,0x03,0x63,0x6f,0x6d)));
    }

    #[test]
    fn text_given_for_a_non_directory_string_type_is_stored_as_der () {
        let utf8 = AttributeTypeAndValue::new(&[0,1,11,3], AttributeValue::utf8("42"));
        assert_eq!(utf8.attribute_value, AttributeValue::Other(vec!(0x0c,0x02,0x34,0x32)));
        let printable = AttributeTypeAndValue::new(&[0,9,2342,19200300,100,1,25], AttributeValue::printable("com"));
        assert_eq!(printable.attribute_value, AttributeValue::Other(vec!(0x13,0x03,0x63,0x6f,0x6d)));
        let cn = AttributeTypeAndValue::new(&[2,5,4,3], AttributeValue::utf8("42"));
        assert_eq!(cn.attribute_value, AttributeValue::utf8("42"));
    }

    #[test]
    fn teletex_string_is_not_text () {
        let asserted = vec!(0x14,0x02, // TeletexString, 2 bytes
                0x68,0x69); // "hi"
        let expected = Ok(AttributeValue::Other(asserted.clone()));
        let actual = yasna::parse_der(&asserted, |r| AttributeValue::decode_ber_for(&cn(), r));
        assert_eq!(actual, expected);
    }

    #[test]
    fn malformed_utf8_string_decodes_to_no_native_value () {
        let asserted = vec!(0x0c,0x02, // UTF8String, 2 bytes
                0xc3,0x28); // invalid 2 byte sequence
        let actual = yasna::parse_der(&asserted, |r| AttributeValue::decode_ber_for(&cn(), r));
        assert_eq!(actual, Ok(AttributeValue::DirectoryString(DirectoryString::Utf8String(None))));
        assert_eq!(DirectoryString::Utf8String(None).native(), "");
    }

    #[test]
    fn dotted_type_should_join_arcs () {
        let atv = AttributeTypeAndValue::new(&[0,9,2342,19200300,100,1,25], AttributeValue::utf8("com"));
        assert_eq!(atv.dotted_type(), "0.9.2342.19200300.100.1.25");
    }
}
