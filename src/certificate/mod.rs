pub mod attribute_type_and_value;
pub mod relative_distinguished_name;
pub mod name;

use std::convert::TryFrom;
use bytes::Bytes;
use yasna::{
    ASN1Error,
    ASN1ErrorKind,
    ASN1Result,
    BERReader,
    BERDecodable,
    Tag,
};

#[cfg(feature = "tracing")]
use tracing::{debug};

pub(crate) fn asn1_error_message(yasna_err: ASN1Error) -> &'static str {
    match yasna_err.kind() {
        ASN1ErrorKind::Invalid => "invalid",
        ASN1ErrorKind::Eof => "eof",
        ASN1ErrorKind::Extra => "extra",
        ASN1ErrorKind::StackOverflow => "stack overflow",
        ASN1ErrorKind::IntegerOverflow => "integer overflow",
    }
}

/// The names of an X.509 certificate. Every other field is skipped while
/// decoding.
#[derive(Clone, Debug, PartialEq)]
pub struct Certificate {
    pub issuer: Name,
    pub subject: Name,
}

impl TryFrom<Bytes> for Certificate {
    type Error = &'static str;
    fn try_from(bytes: Bytes) -> Result<Self, Self::Error> {
        yasna::parse_ber(bytes.as_ref(), Certificate::decode_ber).map_err(asn1_error_message)
    }
}

impl BERDecodable for Certificate {
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "Certificate::decode_ber", skip(reader)))]
    fn decode_ber(reader: BERReader) -> ASN1Result<Self> {
        //  Certificate ::= SEQUENCE {
        //     tbsCertificate       TBSCertificate,
        //     signatureAlgorithm   AlgorithmIdentifier,
        //     signatureValue       BIT STRING }
        reader.read_sequence(|reader| {
            let certificate = reader.next().read_sequence(|tbs| {
                //  TBSCertificate ::= SEQUENCE {
                //     version         [0]  EXPLICIT Version DEFAULT v1,
                //     serialNumber         CertificateSerialNumber,
                //     signature            AlgorithmIdentifier,
                //     issuer               Name,
                //     validity             Validity,
                //     subject              Name,
                //     subjectPublicKeyInfo SubjectPublicKeyInfo,
                //     issuerUniqueID  [1]  IMPLICIT UniqueIdentifier OPTIONAL,
                //     subjectUniqueID [2]  IMPLICIT UniqueIdentifier OPTIONAL,
                //     extensions      [3]  EXPLICIT Extensions OPTIONAL }
                let version = tbs.read_optional(|r| r.read_tagged(Tag::context(0), |r| r.read_i64()))?;
                #[cfg(feature = "tracing")]
                debug!(version = version.unwrap_or(0) + 1, "parsing tbs certificate");
                #[cfg(not(feature = "tracing"))]
                let _ = version;

                tbs.next().read_der()?; // serialNumber
                tbs.next().read_der()?; // signature
                let issuer = Name::decode_ber(tbs.next())?;
                tbs.next().read_der()?; // validity
                let subject = Name::decode_ber(tbs.next())?;
                tbs.next().read_der()?; // subjectPublicKeyInfo
                for _ in 0..3 {
                    tbs.read_optional(|r| r.read_der())?;
                }
                Ok(Certificate {
                    issuer: issuer,
                    subject: subject,
                })
            })?;
            reader.next().read_der()?; // signatureAlgorithm
            reader.next().read_der()?; // signatureValue
            Ok(certificate)
        })
    }
}

pub use attribute_type_and_value::*;
pub use relative_distinguished_name::*;
pub use name::*;
