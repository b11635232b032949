use std::cmp::Ordering;

/// One attribute of an RDN, ready to be ordered and rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedAva {
    /// 0 when `type_label` is a keyword, 1 when it is a dotted OID.
    pub oid_flag: u8,
    pub type_label: String,
    pub normalized_value: String,
    pub raw_value: String,
}

impl OrderedAva {
    pub fn as_tuple(&self) -> (u8, &str, &str, &str) {
        (self.oid_flag, &self.type_label, &self.normalized_value, &self.raw_value)
    }
}

pub type OrderedRdn = Vec<OrderedAva>;
pub type OrderedName = Vec<OrderedRdn>;

/// Comparator over the AVAs of one RDN.
///
/// Keyword types sort before dotted OIDs, then by type, then by normalized
/// value. With `numeric_oid_order` dotted OIDs compare arc by arc as
/// integers, so `0.1.2.3` sorts before `0.1.11.3`.
pub fn comparator(numeric_oid_order: bool) -> impl Fn(&OrderedAva, &OrderedAva) -> Ordering {
    move |a, b| {
        a.oid_flag.cmp(&b.oid_flag)
            .then_with(|| {
                if numeric_oid_order && a.oid_flag == 1 {
                    cmp_dotted_numeric(&a.type_label, &b.type_label)
                } else {
                    a.type_label.cmp(&b.type_label)
                }
            })
            .then_with(|| a.normalized_value.cmp(&b.normalized_value))
    }
}

/// Stable, so equal keys keep their encoding order.
pub fn sort_rdn(rdn: &mut OrderedRdn, numeric_oid_order: bool) {
    rdn.sort_by(comparator(numeric_oid_order));
}

// An OID arc compared by value, whatever its width.
#[derive(PartialEq, Eq)]
struct OidArc<'a>(&'a str);

impl<'a> Ord for OidArc<'a> {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.0.trim_start_matches('0');
        let b = other.0.trim_start_matches('0');
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl<'a> PartialOrd for OidArc<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn cmp_dotted_numeric(a: &str, b: &str) -> Ordering {
    a.split('.').map(OidArc).cmp(b.split('.').map(OidArc))
}
