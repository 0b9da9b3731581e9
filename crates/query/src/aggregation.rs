//! Outcome aggregation

use dataset::ReplyRecord;
use report_types::OutcomeStats;

/// Count wins and losses over every record yielded by `records`.
pub fn count_outcomes<'a, I>(records: I) -> OutcomeStats
where
    I: IntoIterator<Item = &'a ReplyRecord>,
{
    let mut stats = OutcomeStats::default();
    for record in records {
        if record.is_win() {
            stats.wins += 1;
        } else {
            stats.losses += 1;
        }
    }
    stats
}
