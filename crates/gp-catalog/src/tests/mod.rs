
use gp_core::ServiceRecord;

pub(crate) fn names(records: &[&ServiceRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}
