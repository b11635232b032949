use yasna::models::ObjectIdentifier;

// OID: 2.5.4.3
// {
//      joint-iso-itu-t(2)
//      ds(5)
//      attributeType(4)
//      commonName(3)
// }
pub const OID_AT_COMMON_NAME : &'static [u64] = &[2,5,4,3];

// OID: 2.5.4.6
// {
//      joint-iso-itu-t(2)
//      ds(5)
//      attributeType(4)
//      countryName(6)
// }
pub const OID_AT_COUNTRY_NAME : &'static [u64] = &[2,5,4,6];

// OID: 2.5.4.7
// {
//      joint-iso-itu-t(2)
//      ds(5)
//      attributeType(4)
//      localityName(7)
// }
pub const OID_AT_LOCALITY_NAME : &'static [u64] = &[2,5,4,7];

// OID: 2.5.4.8
// {
//      joint-iso-itu-t(2)
//      ds(5)
//      attributeType(4)
//      stateOrProvinceName(8)
// }
pub const OID_AT_STATE_OR_PROVINCE_NAME : &'static [u64] = &[2,5,4,8];

// OID: 2.5.4.9
// {
//      joint-iso-itu-t(2)
//      ds(5)
//      attributeType(4)
//      streetAddress(9)
// }
pub const OID_AT_STREET_ADDRESS : &'static [u64] = &[2,5,4,9];

// OID: 2.5.4.10
// {
//      joint-iso-itu-t(2)
//      ds(5)
//      attributeType(4)
//      organizationName(10)
// }
pub const OID_AT_ORGANIZATION_NAME : &'static [u64] = &[2,5,4,10];

// OID: 2.5.4.11
// {
//      joint-iso-itu-t(2)
//      ds(5)
//      attributeType(4)
//      organizationalUnitName(11)
// }
pub const OID_AT_ORGANIZATIONAL_UNIT_NAME : &'static [u64] = &[2,5,4,11];

// OID: 0.9.2342.19200300.100.1.1
// {
//      itu-t(0)
//      data(9)
//      pss(2342)
//      ucl(19200300)
//      pilot(100)
//      pilotAttributeType(1)
//      uid(1)
// }
pub const OID_PILOT_USER_ID : &'static [u64] = &[0,9,2342,19200300,100,1,1];

// OID: 0.9.2342.19200300.100.1.25
// {
//      itu-t(0)
//      data(9)
//      pss(2342)
//      ucl(19200300)
//      pilot(100)
//      pilotAttributeType(1)
//      domainComponent(25)
// }
pub const OID_PILOT_DOMAIN_COMPONENT : &'static [u64] = &[0,9,2342,19200300,100,1,25];

pub const OID_AT_SURNAME : &'static [u64] = &[2,5,4,4];
pub const OID_AT_SERIAL_NUMBER : &'static [u64] = &[2,5,4,5];
pub const OID_AT_TITLE : &'static [u64] = &[2,5,4,12];
pub const OID_AT_BUSINESS_CATEGORY : &'static [u64] = &[2,5,4,15];
pub const OID_AT_POSTAL_CODE : &'static [u64] = &[2,5,4,17];
pub const OID_AT_NAME : &'static [u64] = &[2,5,4,41];
pub const OID_AT_GIVEN_NAME : &'static [u64] = &[2,5,4,42];
pub const OID_AT_INITIALS : &'static [u64] = &[2,5,4,43];
pub const OID_AT_GENERATION_QUALIFIER : &'static [u64] = &[2,5,4,44];
pub const OID_AT_DN_QUALIFIER : &'static [u64] = &[2,5,4,46];
pub const OID_AT_PSEUDONYM : &'static [u64] = &[2,5,4,65];
pub const OID_AT_ORGANIZATION_IDENTIFIER : &'static [u64] = &[2,5,4,97];

// jurisdictionOfIncorporation{Locality,StateOrProvince,Country}Name, 1.3.6.1.4.1.311.60.2.1.{1,2,3}
pub const OID_EV_INCORPORATION_LOCALITY : &'static [u64] = &[1,3,6,1,4,1,311,60,2,1,1];
pub const OID_EV_INCORPORATION_STATE_OR_PROVINCE : &'static [u64] = &[1,3,6,1,4,1,311,60,2,1,2];
pub const OID_EV_INCORPORATION_COUNTRY : &'static [u64] = &[1,3,6,1,4,1,311,60,2,1,3];

// nameDistinguisher, 0.2.262.1.10.7.20
pub const OID_NAME_DISTINGUISHER : &'static [u64] = &[0,2,262,1,10,7,20];

/// Attribute types whose value is a `DirectoryString` choice. Values of any
/// other type (domainComponent, emailAddress, unregistered OIDs) are never
/// read as text, whatever their string tag.
pub const DIRECTORY_STRING_ATTRIBUTE_TYPES : &'static [&'static [u64]] = &[
    OID_AT_COMMON_NAME,
    OID_AT_SURNAME,
    OID_AT_SERIAL_NUMBER,
    OID_AT_COUNTRY_NAME,
    OID_AT_LOCALITY_NAME,
    OID_AT_STATE_OR_PROVINCE_NAME,
    OID_AT_STREET_ADDRESS,
    OID_AT_ORGANIZATION_NAME,
    OID_AT_ORGANIZATIONAL_UNIT_NAME,
    OID_AT_TITLE,
    OID_AT_BUSINESS_CATEGORY,
    OID_AT_POSTAL_CODE,
    OID_AT_NAME,
    OID_AT_GIVEN_NAME,
    OID_AT_INITIALS,
    OID_AT_GENERATION_QUALIFIER,
    OID_AT_DN_QUALIFIER,
    OID_AT_PSEUDONYM,
    OID_AT_ORGANIZATION_IDENTIFIER,
    OID_EV_INCORPORATION_LOCALITY,
    OID_EV_INCORPORATION_STATE_OR_PROVINCE,
    OID_EV_INCORPORATION_COUNTRY,
    OID_NAME_DISTINGUISHER,
    OID_PILOT_USER_ID,
];

pub fn is_directory_string_type(oid: &ObjectIdentifier) -> bool {
    DIRECTORY_STRING_ATTRIBUTE_TYPES
        .iter()
        .any(|arcs| oid.components().as_slice() == *arcs)
}

/// Attribute types that get a keyword in canonical names. Any other type is
/// written as its dotted OID.
pub const STANDARD_ATTRIBUTE_TYPES : &'static [(&'static [u64], &'static str)] = &[
    (OID_AT_COMMON_NAME, "cn"),
    (OID_AT_COUNTRY_NAME, "c"),
    (OID_AT_LOCALITY_NAME, "l"),
    (OID_AT_STATE_OR_PROVINCE_NAME, "st"),
    (OID_AT_STREET_ADDRESS, "street"),
    (OID_AT_ORGANIZATION_NAME, "o"),
    (OID_AT_ORGANIZATIONAL_UNIT_NAME, "ou"),
    (OID_PILOT_USER_ID, "uid"),
    (OID_PILOT_DOMAIN_COMPONENT, "dc"),
];

/// Exact match only.
pub fn keyword(oid: &ObjectIdentifier) -> Option<&'static str> {
    STANDARD_ATTRIBUTE_TYPES
        .iter()
        .find(|(arcs, _)| oid.components().as_slice() == *arcs)
        .map(|(_, keyword)| *keyword)
}
