use crate::PriceSeries;

/// Appends `next` to `first`, assuming `next` chronologically follows it.
///
/// The seam between the two series is not checked for gaps or overlaps.
pub fn concat(first: PriceSeries, next: PriceSeries) -> PriceSeries {
    if next.is_empty() {
        return first;
    }

    let mut records = first.into_records();
    records.extend(next);
    PriceSeries::new(records)
}
