use super::views::RatingRecord;
use crate::scoring::Rating;

/// Pretty-printed array of rating records, in the order given.
pub fn render_json(ratings: &[Rating]) -> Result<String, serde_json::Error> {
    let records: Vec<RatingRecord> = ratings.iter().map(RatingRecord::from).collect();
    serde_json::to_string_pretty(&records)
}
